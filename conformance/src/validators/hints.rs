//! Shift-hint validator.
//!
//! Each `// << n if i == k` comment must sit on entry `k`, and `n` must be the
//! band the entry's magnitude falls in. Entries below the lowest band carry no
//! comment.

use logtable_codegen::table::TableEntry;

use super::parsed_or_fail;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/hints";

/// Validates shift hints in `source` against the recomputed bands.
pub fn validate(source: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Some(entries) = parsed_or_fail(VALIDATOR, source, &mut report) else {
        return report;
    };

    let mut issues = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let expected = match TableEntry::derive(index) {
            Ok(derived) => derived.shift,
            Err(err) => {
                issues.push(format!("line {}: {err}", entry.line));
                continue;
            }
        };

        match (entry.hint, expected) {
            (Some(hint), Some(shift)) => {
                if hint.index != index {
                    issues.push(format!(
                        "line {}: hint names i == {}, entry is {index}",
                        entry.line, hint.index
                    ));
                }
                if hint.bits != shift.bits() {
                    issues.push(format!(
                        "line {}: hint shifts by {}, band requires {}",
                        entry.line,
                        hint.bits,
                        shift.bits()
                    ));
                }
            }
            (Some(hint), None) => issues.push(format!(
                "line {}: unexpected `<< {}` hint on unshifted entry {index}",
                entry.line, hint.bits
            )),
            (None, Some(shift)) => issues.push(format!(
                "line {}: entry {index} is missing its `<< {}` hint",
                entry.line,
                shift.bits()
            )),
            (None, None) => {}
        }
    }

    report.push(TestResult::from_violations(
        VALIDATOR,
        "Shift hints match their magnitude bands",
        "Shift hint(s) inconsistent with magnitude bands",
        issues,
    ));
    report
}
