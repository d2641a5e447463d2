//! CLI entrypoint for bytescan.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use bytescan_core::find_first_n;
use bytescan_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, StreamKind, now_utc,
    validate_log_file,
};
use bytescan_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary, config};

/// Explicit-length byte buffer scanning.
#[derive(Debug, Parser)]
#[command(name = "bytescan")]
#[command(about = "Search fixed-length byte buffers and verify the search contract")]
struct Cli {
    /// Structured JSONL log path (overrides BYTESCAN_LOG_FILE).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the first occurrence of a pattern in a source buffer.
    Find {
        /// Source buffer (UTF-8 text, or hex with --hex).
        #[arg(long)]
        source: String,
        /// Pattern buffer (UTF-8 text, or hex with --hex).
        #[arg(long)]
        pattern: String,
        /// Interpret --source and --pattern as hex byte strings.
        #[arg(long)]
        hex: bool,
        /// Declared source length (defaults to the full buffer).
        #[arg(long)]
        source_len: Option<usize>,
        /// Declared pattern length (defaults to the full buffer).
        #[arg(long)]
        pattern_len: Option<usize>,
    },
    /// Search the NUL-padded 100-byte demonstration buffer.
    Demo {
        /// Print the full demonstration report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Verify the implementation against fixture sets.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long, default_value = "tests/conformance/fixtures")]
        fixture: PathBuf,
        /// Output report path (markdown; JSON and artifact index are written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        /// JSONL log path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn parse_hex(field: &str, text: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(format!("--{field}: odd number of hex digits"));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| format!("--{field}: {e}"))?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("--{field}: '{pair}': {e}"))
        })
        .collect()
}

fn elapsed_ns(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = config::config().clone().with_log_file(cli.log_file);
    let run_id = format!("run-{}", std::process::id());

    match cli.command {
        Command::Find {
            source,
            pattern,
            hex,
            source_len,
            pattern_len,
        } => {
            let mut log = LogEmitter::from_config(&settings, &run_id, "cli")?;
            let (source, pattern) = if hex {
                (parse_hex("source", &source)?, parse_hex("pattern", &pattern)?)
            } else {
                (source.into_bytes(), pattern.into_bytes())
            };
            let source_len = source_len.unwrap_or(source.len());
            let pattern_len = pattern_len.unwrap_or(pattern.len());

            let started = Instant::now();
            let result = find_first_n(&source, source_len, &pattern, pattern_len);
            let latency = elapsed_ns(started);

            let entry = LogEntry::new("", LogLevel::Info, "search_complete")
                .with_stream(StreamKind::Cli)
                .with_function("find_first_n")
                .with_latency_ns(latency);
            match result {
                Ok(found) => {
                    log.emit_entry(entry.with_outcome(Outcome::Pass).with_details(
                        serde_json::json!({
                            "source_len": source_len,
                            "pattern_len": pattern_len,
                            "offset": found,
                        }),
                    ))?;
                    log.flush()?;
                    match found {
                        Some(offset) => println!("{offset}"),
                        None => println!("not found"),
                    }
                }
                Err(err) => {
                    log.emit_entry(
                        entry
                            .with_outcome(Outcome::Error)
                            .with_details(serde_json::json!({ "error": err.to_string() })),
                    )?;
                    log.flush()?;
                    return Err(err.into());
                }
            }
        }
        Command::Demo { json } => {
            let mut log = LogEmitter::from_config(&settings, &run_id, "demo")?;
            let report = bytescan_harness::demo::run_demo()?;
            log.emit_entry(
                LogEntry::new("", LogLevel::Info, "demo_complete")
                    .with_stream(StreamKind::Demo)
                    .with_function("find_first")
                    .with_details(serde_json::to_value(&report)?),
            )?;
            log.flush()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.match_line());
            }
        }
        Command::Verify {
            fixture,
            report,
            timestamp,
        } => {
            let mut log = LogEmitter::from_config(&settings, &run_id, "conformance")?;
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let started = Instant::now();

            let (fixture_sets, skipped) = FixtureSet::load_dir(&fixture)?;
            for (path, err) in &skipped {
                eprintln!("Skipping {}: {}", path.display(), err);
                log.emit_entry(
                    LogEntry::new("", LogLevel::Warn, "fixture_skipped")
                        .with_stream(StreamKind::Conformance)
                        .with_details(serde_json::json!({
                            "path": path.display().to_string(),
                            "error": err,
                        })),
                )?;
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let runner = TestRunner::new("fixture-verify");
            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(runner.run_logged(set, &mut log)?);
            }

            // Stable ordering keeps reports diffable between runs.
            results.sort_by(|a, b| {
                a.family
                    .cmp(&b.family)
                    .then_with(|| a.function.cmp(&b.function))
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let report_doc = ConformanceReport {
                title: String::from("bytescan Conformance Report"),
                timestamp: timestamp.unwrap_or_else(now_utc),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            let mut artifacts = Vec::new();
            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;

                let mut index = ArtifactIndex::new(&run_id);
                index.add_file(&report_path, "report_md")?;
                index.add_file(&json_path, "report_json")?;
                let index_path = report_path.with_extension("artifacts.json");
                std::fs::write(&index_path, index.to_json()?)?;
                eprintln!("Wrote artifact index to {}", index_path.display());

                artifacts = vec![
                    report_path.display().to_string(),
                    json_path.display().to_string(),
                    index_path.display().to_string(),
                ];
            }

            let passed = report_doc.summary.all_passed();
            log.emit_entry(
                LogEntry::new(
                    "",
                    if passed { LogLevel::Info } else { LogLevel::Error },
                    "verify_complete",
                )
                .with_stream(StreamKind::Conformance)
                .with_outcome(if passed { Outcome::Pass } else { Outcome::Fail })
                .with_duration_ms(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX))
                .with_artifacts(artifacts)
                .with_details(serde_json::json!({
                    "total": report_doc.summary.total,
                    "passed": report_doc.summary.passed,
                    "failed": report_doc.summary.failed,
                })),
            )?;
            log.flush()?;

            if !passed {
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { log } => {
            let (line_count, errors) = validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {} lines in {}: {} errors",
                line_count,
                log.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err(format!("{} invalid log records", errors.len()).into());
            }
        }
    }

    Ok(())
}
