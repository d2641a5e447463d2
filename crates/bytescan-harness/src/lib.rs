//! Conformance harness for bytescan.
//!
//! This crate provides:
//! - Fixture sets: JSON cases for each scan operation
//! - Execution + verification: run cases against `bytescan-core`, diff results
//! - Report generation: markdown + JSON conformance reports with an artifact index
//! - Structured logging: JSONL records, configured from the environment
//! - The padded-buffer demonstration used by the `bytescan demo` command

#![forbid(unsafe_code)]

pub mod config;
pub mod demo;
pub mod diff;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use config::{HarnessConfig, LogFilter};
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
