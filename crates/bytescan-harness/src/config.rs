//! Harness configuration.
//!
//! Resolved from the environment once per process:
//! - `BYTESCAN_LOG`: minimum structured-log level
//!   (`trace|debug|info|warn|error|off`, default `info`).
//! - `BYTESCAN_LOG_FILE`: JSONL sink path. Unset means stderr.
//!
//! CLI flags override these per invocation.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::structured_log::LogLevel;

pub const LOG_LEVEL_ENV: &str = "BYTESCAN_LOG";
pub const LOG_FILE_ENV: &str = "BYTESCAN_LOG_FILE";

/// Minimum level a log entry needs in order to be written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogFilter {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Nothing is written.
    Off,
}

impl LogFilter {
    /// Parse from string (case-insensitive). Unknown values fall back to `Info`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "all" => Self::Trace,
            "debug" => Self::Debug,
            "info" | "default" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            "off" | "none" | "quiet" => Self::Off,
            _ => Self::Info,
        }
    }

    /// Returns true if an entry at `level` passes this filter.
    #[must_use]
    pub const fn allows(self, level: LogLevel) -> bool {
        let floor = match self {
            Self::Trace => 0,
            Self::Debug => 1,
            Self::Info => 2,
            Self::Warn => 3,
            Self::Error => 4,
            Self::Off => return false,
        };
        level.rank() >= floor
    }
}

/// Resolved harness settings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub log_filter: LogFilter,
    pub log_file: Option<PathBuf>,
}

impl HarnessConfig {
    /// Build from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_filter: lookup(LOG_LEVEL_ENV)
                .map(|v| LogFilter::from_str_loose(&v))
                .unwrap_or_default(),
            log_file: lookup(LOG_FILE_ENV)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Replace the log sink, keeping everything else.
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.log_file = path;
        }
        self
    }
}

static CONFIG: OnceLock<HarnessConfig> = OnceLock::new();

/// Process-wide configuration (reads the environment on first call, caches thereafter).
pub fn config() -> &'static HarnessConfig {
    CONFIG.get_or_init(HarnessConfig::from_env)
}
