//! `logtable-conformance` validates the generated log table.
//!
//! Renders the table in-process and runs every validator over the text:
//! layout, value range, shift hints, monotonicity and determinism.
//!
//! **Usage:**
//! ```text
//! logtable-conformance
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use logtable_conformance::{run_generated, Severity};

/// Run the log table conformance suite.
#[derive(Parser)]
#[command(
    name = "logtable-conformance",
    version,
    about = "Validate the generated log table against its invariants"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let report = run_generated()?;

    println!("Log Table Conformance Report");
    println!("============================");
    println!();

    for result in &report.results {
        println!(
            "[{}] {}: {}",
            result.severity.tag(),
            result.validator,
            result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.count(Severity::Failure);

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        passed, warned, failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
