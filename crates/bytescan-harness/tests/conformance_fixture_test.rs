//! Integration test: conformance fixtures
//!
//! Loads every fixture set under tests/conformance/fixtures/ and requires each
//! case to pass against bytescan-core, then checks the rendered reports.
//!
//! Run: cargo test -p bytescan-harness --test conformance_fixture_test

use std::path::{Path, PathBuf};

use bytescan_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/conformance/fixtures")
}

fn load_all() -> Vec<FixtureSet> {
    let (sets, skipped) = FixtureSet::load_dir(&fixture_dir()).expect("fixture dir readable");
    assert!(skipped.is_empty(), "unparseable fixtures: {skipped:?}");
    sets
}

#[test]
fn fixture_sets_cover_every_operation() {
    let sets = load_all();
    let families: Vec<&str> = sets.iter().map(|s| s.family.as_str()).collect();
    assert_eq!(families, vec!["scan", "search"]);

    for function in ["find_first", "find_first_n", "trimmed_len", "find_last_byte"] {
        assert!(
            sets.iter()
                .flat_map(|s| &s.cases)
                .any(|c| c.function == function),
            "no fixture exercises {function}"
        );
    }
}

#[test]
fn every_fixture_case_passes() {
    let runner = TestRunner::new("fixture-verify");
    let results: Vec<_> = load_all().iter().flat_map(|set| runner.run(set)).collect();
    let summary = VerificationSummary::from_results(results);

    let failures: Vec<String> = summary
        .results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| format!("{}: expected {}, got {}", r.case_name, r.expected, r.actual))
        .collect();
    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
    assert!(summary.total >= 19);
}

#[test]
fn report_renders_all_cases() {
    let runner = TestRunner::new("fixture-verify");
    let results: Vec<_> = load_all().iter().flat_map(|set| runner.run(set)).collect();
    let total = results.len();
    let report = ConformanceReport {
        title: String::from("bytescan Conformance Report"),
        timestamp: String::from("2026-10-19T00:00:00.000Z"),
        summary: VerificationSummary::from_results(results),
    };

    let md = report.to_markdown();
    assert!(md.contains(&format!("- Total: {total}\n")));
    assert!(md.contains("| padded_buffer_first_iao2 | find_first |"));
    assert!(!md.contains("## Failures"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["summary"]["failed"], 0);
}
