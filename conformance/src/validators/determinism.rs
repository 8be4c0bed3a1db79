//! Determinism validator.
//!
//! Regenerates the table twice and requires both renders to match each other
//! and the source under test byte for byte.

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/determinism";

/// Validates that generation is reproducible and matches `source`.
pub fn validate(source: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let renders = logtable_codegen::render().and_then(|first| {
        let second = logtable_codegen::render()?;
        Ok((first, second))
    });
    let (first, second) = match renders {
        Ok(pair) => pair,
        Err(err) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("Generation failed: {err:#}"),
            ));
            return report;
        }
    };

    if first == second {
        report.push(TestResult::pass(VALIDATOR, "Repeated generation is identical"));
    } else {
        report.push(TestResult::fail(VALIDATOR, "Repeated generation differs"));
    }

    if first == source {
        report.push(TestResult::pass(VALIDATOR, "Source matches a fresh render"));
    } else {
        let message = match first.lines().zip(source.lines()).position(|(a, b)| a != b) {
            Some(n) => format!("Source differs from a fresh render at line {}", n + 1),
            None => "Source differs from a fresh render in length or trailing bytes".to_string(),
        };
        report.push(TestResult::fail(VALIDATOR, message));
    }

    report
}
