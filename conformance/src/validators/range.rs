//! Range validator.
//!
//! Checks that the array holds exactly `TABLE_LEN` values, that each fits in
//! a `uint8_t`, and that entry 0 holds the shifted seed.

use logtable_codegen::table::{Shift, TABLE_LEN, ZERO_SEED};

use super::parsed_or_fail;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/range";

/// Validates entry count and value range of `source`.
pub fn validate(source: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Some(entries) = parsed_or_fail(VALIDATOR, source, &mut report) else {
        return report;
    };

    if entries.len() == TABLE_LEN {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Table has {TABLE_LEN} entries"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Expected {TABLE_LEN} entries, found {}", entries.len()),
        ));
    }

    let oversized: Vec<String> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.value > u32::from(u8::MAX))
        .map(|(i, e)| format!("entry {i} (line {}): {}", e.line, e.value))
        .collect();
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Every value fits in 8 bits",
        "Value(s) exceed 255",
        oversized,
    ));

    let seed = ZERO_SEED >> Shift::Three.bits();
    match entries.first() {
        Some(first) if first.value == seed => {
            report.push(TestResult::pass(VALIDATOR, format!("Entry 0 is {seed}")));
        }
        Some(first) => report.push(TestResult::fail(
            VALIDATOR,
            format!("Entry 0 is {}, expected {seed}", first.value),
        )),
        None => report.push(TestResult::fail(VALIDATOR, "Table is empty")),
    }

    report
}
