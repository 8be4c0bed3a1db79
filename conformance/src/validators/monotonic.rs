//! Monotonicity validator.
//!
//! `-ln(i / 100)` falls as `i` grows, so the decoded values of entries
//! `1..TABLE_LEN` must never increase. Entry 0 is a seed and is skipped.

use super::parsed_or_fail;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/monotonic";

/// Validates that decoded values in `source` are non-increasing.
pub fn validate(source: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Some(entries) = parsed_or_fail(VALIDATOR, source, &mut report) else {
        return report;
    };

    let rises: Vec<String> = entries
        .get(1..)
        .unwrap_or_default()
        .windows(2)
        .filter(|pair| pair[1].decoded() > pair[0].decoded())
        .map(|pair| {
            format!(
                "line {}: {} rises to {}",
                pair[1].line,
                pair[0].decoded(),
                pair[1].decoded()
            )
        })
        .collect();

    report.push(TestResult::from_violations(
        VALIDATOR,
        "Decoded values are non-increasing",
        "Decoded value(s) increase with index",
        rises,
    ));
    report
}
