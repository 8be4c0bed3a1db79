//! Layout validator.
//!
//! Checks the line structure of emitted table source:
//! - exactly one include line, one opening line, one line per entry and `};`
//! - every entry line is tab-indented and separates value and comment with `, `

use logtable_codegen::emit::STDINT_HEADER;
use logtable_codegen::table::{TABLE_LEN, TABLE_NAME};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/layout";

/// Include, opening, entries and closing.
pub const EXPECTED_LINES: usize = TABLE_LEN + 3;

/// Validates the line structure of `source`.
pub fn validate(source: &str) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let lines: Vec<&str> = source.lines().collect();

    if lines.len() == EXPECTED_LINES {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Source has {EXPECTED_LINES} lines"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Expected {EXPECTED_LINES} lines, found {}", lines.len()),
        ));
    }

    let include = format!("#include <{STDINT_HEADER}>");
    let opening = format!("const uint8_t {TABLE_NAME}[] = {{");
    let mut issues = Vec::new();
    if lines.first().copied() != Some(include.as_str()) {
        issues.push(format!("line 1: expected {include:?}"));
    }
    if lines.get(1).copied() != Some(opening.as_str()) {
        issues.push(format!("line 2: expected {opening:?}"));
    }
    if lines.last().copied() != Some("};") {
        issues.push(format!("line {}: expected \"}};\"", lines.len()));
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Include, declaration and closing lines present",
        "Include, declaration or closing line missing",
        issues,
    ));

    let malformed: Vec<String> = lines
        .iter()
        .enumerate()
        .skip(2)
        .take(lines.len().saturating_sub(3))
        .filter(|(_, line)| !(line.starts_with('\t') && line.contains(", ")))
        .map(|(n, line)| format!("line {}: {line:?}", n + 1))
        .collect();
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Entry lines are tab-indented `<value>, <comment>`",
        "Malformed entry line(s)",
        malformed,
    ));

    if !source.ends_with('\n') {
        report.push(TestResult::warn(
            VALIDATOR,
            "Source does not end with a newline",
        ));
    }

    report
}
