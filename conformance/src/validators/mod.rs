//! Validators over emitted table source, one module per property.

pub mod determinism;
pub mod hints;
pub mod layout;
pub mod monotonic;
pub mod range;

use crate::parse::{parse_table, ParsedEntry};
use crate::report::{ConformanceReport, TestResult};

/// Parses `source`, recording a failure under `validator` if it cannot be read.
fn parsed_or_fail(
    validator: &'static str,
    source: &str,
    report: &mut ConformanceReport,
) -> Option<Vec<ParsedEntry>> {
    match parse_table(source) {
        Ok(entries) => Some(entries),
        Err(err) => {
            report.push(TestResult::fail(
                validator,
                format!("Table source could not be parsed: {err}"),
            ));
            None
        }
    }
}
