//! `logtable-gen` prints the quantized log lookup table as C source.
//!
//! Standard output carries only the table, so the output can be redirected
//! straight into a header. Status lines go to standard error.
//!
//! **Usage:**
//! ```text
//! logtable-gen [--verbose] [--verify] > log_table.h
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;

use anyhow::{bail, Result};
use clap::Parser;

/// Print the `uint8_t log_table[]` lookup table.
#[derive(Parser)]
#[command(
    name = "logtable-gen",
    version,
    about = "Print the quantized natural-log uint8_t lookup table as C source"
)]
struct Args {
    /// Print a generation summary to stderr.
    #[arg(long)]
    verbose: bool,

    /// Run the conformance suite after generating; exits non-zero on failure.
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let report = logtable_codegen::generate(&mut io::stdout().lock())?;

    if args.verbose {
        let [by1, by2, by3] = report.shift_counts;
        eprintln!(
            "Generated {} entries ({} shifted: {} by 1, {} by 2, {} by 3), {} lines, {} bytes",
            report.entry_count,
            report.shifted_count(),
            by1,
            by2,
            by3,
            report.line_count,
            report.bytes_written
        );
    }

    if args.verify {
        verify(&report.source, args.verbose)?;
    }

    Ok(())
}

/// Runs the conformance suite over the text that was written to stdout.
fn verify(source: &str, verbose: bool) -> Result<()> {
    let conformance = logtable_conformance::run_all(source);
    for result in &conformance.results {
        if verbose || result.is_failure() {
            eprintln!(
                "[{}] {}: {}",
                result.severity.tag(),
                result.validator,
                result.message
            );
            for detail in &result.details {
                eprintln!("       {}", detail);
            }
        }
    }
    if !conformance.all_passed() {
        bail!(
            "Conformance FAILED: {} check(s) did not pass",
            conformance.failure_count()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_sets_no_flags() {
        let args = Args::try_parse_from(["logtable-gen"]).unwrap();
        assert!(!args.verbose);
        assert!(!args.verify);
    }

    #[test]
    fn verify_accepts_written_source() {
        let mut out = Vec::new();
        let report = logtable_codegen::generate(&mut out).unwrap();
        assert!(verify(&report.source, false).is_ok());
    }

    #[test]
    fn verify_rejects_altered_source() {
        let source = logtable_codegen::render()
            .unwrap()
            .replace("\t177, \n", "\t178, \n");
        let err = verify(&source, false).unwrap_err();
        assert!(err.to_string().contains("Conformance FAILED"));
    }
}
