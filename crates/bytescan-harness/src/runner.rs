//! Test execution engine.

use std::time::Instant;

use crate::diff;
use crate::exec::execute_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::VerificationResult;

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| run_case(&fixture_set.family, case))
            .collect()
    }

    /// Like [`TestRunner::run`], also emitting one log entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let results = self.run(fixture_set);
        for result in &results {
            let (level, outcome) = if result.passed {
                (LogLevel::Debug, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            let mut entry = LogEntry::new("", level, "fixture_case")
                .with_stream(StreamKind::Conformance)
                .with_function(&result.function)
                .with_case(&result.case_name)
                .with_outcome(outcome)
                .with_latency_ns(result.latency_ns);
            if !result.passed {
                entry = entry.with_details(serde_json::json!({
                    "campaign": self.campaign,
                    "family": result.family,
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            }
            log.emit_entry(entry)?;
        }
        Ok(results)
    }
}

fn run_case(family: &str, case: &FixtureCase) -> VerificationResult {
    let started = Instant::now();
    let execution = execute_case(&case.function, &case.inputs);
    let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

    let actual = match execution {
        Ok(output) => output,
        Err(err) => format!("error:{err}"),
    };
    let passed = actual == case.expected_output;
    let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));

    VerificationResult {
        family: family.to_string(),
        function: case.function.clone(),
        case_name: case.name.clone(),
        section: case.section.clone(),
        passed,
        expected: case.expected_output.clone(),
        actual,
        diff,
        latency_ns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(cases: &str) -> FixtureSet {
        FixtureSet::from_json(&format!(
            r#"{{"version":"v1","family":"search","captured_at":"2026-10-19T00:00:00Z","cases":[{cases}]}}"#
        ))
        .expect("valid fixture json")
    }

    #[test]
    fn runner_passes_matching_cases() {
        let set = fixture(
            r#"{"name":"leftmost","function":"find_first","section":"leftmost match","inputs":{"source":"abcabc","pattern":"abc"},"expected_output":"Some(0)"},
               {"name":"absent","function":"find_first","section":"not found","inputs":{"source":"xxxxx","pattern":"y"},"expected_output":"None"}"#,
        );
        let results = TestRunner::new("smoke").run(&set);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert!(results.iter().all(|r| r.diff.is_none()));
        assert_eq!(results[0].family, "search");
    }

    #[test]
    fn runner_reports_diff_on_mismatch() {
        let set = fixture(
            r#"{"name":"wrong","function":"find_first","section":"leftmost match","inputs":{"source":"miaomiao233miao123","pattern":"iao2"},"expected_output":"Some(8)"}"#,
        );
        let results = TestRunner::new("smoke").run(&set);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "Some(5)");
        assert!(results[0].diff.as_deref().is_some_and(|d| d.contains("+Some(5)")));
    }

    #[test]
    fn unsupported_function_fails_the_case() {
        let set = fixture(
            r#"{"name":"bogus","function":"strstr","section":"n/a","inputs":{},"expected_output":"Some(0)"}"#,
        );
        let results = TestRunner::new("smoke").run(&set);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "error:unsupported function 'strstr'");
    }

    #[test]
    fn malformed_inputs_are_not_reported_as_unsupported() {
        let set = fixture(
            r#"{"name":"no_pattern","function":"find_first","section":"n/a","inputs":{"source":"abc"},"expected_output":"None"}"#,
        );
        let results = TestRunner::new("smoke").run(&set);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "error:missing input 'pattern'");
    }

    #[test]
    fn logged_run_emits_one_entry_per_case() {
        let set = fixture(
            r#"{"name":"leftmost","function":"find_first","section":"leftmost match","inputs":{"source":"abcabc","pattern":"abc"},"expected_output":"Some(0)"},
               {"name":"wrong","function":"trimmed_len","section":"trim","inputs":{"buf":[97,0]},"expected_output":"2"}"#,
        );
        let mut log = LogEmitter::to_buffer("run-1", "conformance")
            .with_filter(crate::config::LogFilter::Trace);
        let results = TestRunner::new("smoke").run_logged(&set, &mut log).unwrap();
        assert_eq!(results.len(), 2);

        let text = String::from_utf8(log.captured().unwrap().to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let failed = crate::structured_log::validate_log_line(lines[1], 2).unwrap();
        assert_eq!(failed.outcome, Some(Outcome::Fail));
        assert_eq!(failed.case.as_deref(), Some("wrong"));
        assert_eq!(failed.details.unwrap()["actual"], "1");
    }
}
