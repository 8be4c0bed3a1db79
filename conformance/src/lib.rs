//! Log table conformance suite.
//!
//! Re-reads emitted table source and checks every invariant a consumer relies
//! on. Validators parse the text itself, so a hand-edited or truncated header
//! fails just as a generator bug would.
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `table/layout` | 103 lines, include, declaration, closing, entry line shape |
//! | `table/range` | 100 entries, every value ≤ 255, entry 0 is 255 |
//! | `table/hints` | every shift comment names its own index and the right band |
//! | `table/monotonic` | decoded values never increase with the index |
//! | `table/determinism` | fresh renders agree with each other and with the source |
//!
//! # Entry Point
//!
//! ```
//! let report = logtable_conformance::run_generated().unwrap();
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod parse;
pub mod report;
pub mod validators;

use anyhow::Result;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all validators over `source` and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Layout
/// 2. Range
/// 3. Shift hints
/// 4. Monotonicity
/// 5. Determinism
pub fn run_all(source: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.extend(validators::layout::validate(source));
    report.extend(validators::range::validate(source));
    report.extend(validators::hints::validate(source));
    report.extend(validators::monotonic::validate(source));
    report.extend(validators::determinism::validate(source));

    report
}

/// Renders the table in-process and runs all validators over it.
///
/// # Errors
///
/// Returns an error if the table cannot be generated.
pub fn run_generated() -> Result<ConformanceReport> {
    let source = logtable_codegen::render()?;
    Ok(run_all(&source))
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    fn generated() -> String {
        logtable_codegen::render().unwrap()
    }

    fn failing_validators(report: &ConformanceReport) -> Vec<&'static str> {
        let mut names: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| r.validator)
            .collect();
        names.dedup();
        names
    }

    #[test]
    fn generated_source_passes() {
        let report = run_generated().unwrap();
        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .collect();
        assert!(failures.is_empty(), "failures: {:#?}", failures);
        assert_eq!(report.count(Severity::Warning), 0);
    }

    #[test]
    fn oversized_value_fails_range() {
        let source = generated().replace("\t177, \n", "\t300, \n");
        let report = run_all(&source);
        assert_eq!(report.failures_from("table/range").count(), 1);
        assert!(report.failures_from("table/determinism").count() > 0);
        assert_eq!(report.failures_from("table/layout").count(), 0);
    }

    #[test]
    fn misplaced_hint_fails_hints() {
        let source = generated().replace("// << 3 if i == 1\n", "// << 3 if i == 7\n");
        let report = run_all(&source);
        let failure = report.failures_from("table/hints").next().unwrap();
        assert_eq!(failure.details.len(), 1);
        assert!(failure.details[0].contains("i == 7"));
    }

    #[test]
    fn dropped_hint_fails_hints_and_monotonic() {
        // Without its hint, entry 2 decodes to 250 while entry 3 decodes to 896.
        let source = generated().replace("\t250, // << 2 if i == 2\n", "\t250, \n");
        let report = run_all(&source);
        assert_eq!(
            failing_validators(&report),
            vec!["table/hints", "table/monotonic", "table/determinism"]
        );
    }

    #[test]
    fn truncated_source_fails_layout_and_parse() {
        let source: String = generated().lines().take(50).map(|l| format!("{l}\n")).collect();
        let report = run_all(&source);
        assert!(report.failures_from("table/layout").count() > 0);
        let range = report.failures_from("table/range").next().unwrap();
        assert!(range.message.contains("could not be parsed"));
    }

    #[test]
    fn missing_trailing_newline_warns() {
        let source = generated();
        let report = validators::layout::validate(source.trim_end_matches('\n'));
        assert!(report.all_passed());
        assert_eq!(report.count(Severity::Warning), 1);
    }
}
