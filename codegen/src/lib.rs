//! Log table generator.
//!
//! Computes the 100-entry quantized natural-logarithm table and emits it as a
//! C `const uint8_t log_table[]` declaration. Entry `i` approximates
//! `-ln(i / 100) * 256`, right-shifted by up to three bits to fit a byte; each
//! shifted entry carries a `// << n if i == i` comment recording the shift.
//!
//! ```
//! let mut out = Vec::new();
//! let report = logtable_codegen::generate(&mut out).unwrap();
//! assert_eq!(report.entry_count, 100);
//! assert!(out.starts_with(b"#include <stdint.h>\n"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod table;

use std::io::Write;

use anyhow::{Context, Result};

use table::{LogTable, Shift};

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of table entries emitted.
    pub entry_count: usize,
    /// Number of entries shifted by one, two and three bits, in that order.
    pub shift_counts: [usize; 3],
    /// Number of lines written.
    pub line_count: usize,
    /// Number of bytes written.
    pub bytes_written: usize,
    /// The exact text written.
    pub source: String,
}

impl GenerationReport {
    /// Total number of entries that carry a shift hint.
    #[must_use]
    pub fn shifted_count(&self) -> usize {
        self.shift_counts.iter().sum()
    }
}

/// Builds the table and renders it to C source text.
///
/// # Errors
///
/// Returns an error if an entry cannot be derived.
pub fn render() -> Result<String> {
    let table = LogTable::build().context("Failed to derive log table")?;
    Ok(emit::render_table(&table))
}

/// Generates the table and writes its C source to `out`.
///
/// # Errors
///
/// Returns an error if an entry cannot be derived, or if writing to or
/// flushing `out` fails.
pub fn generate<W: Write>(out: &mut W) -> Result<GenerationReport> {
    let table = LogTable::build().context("Failed to derive log table")?;
    let source = emit::render_table(&table);

    out.write_all(source.as_bytes())
        .context("Failed to write log table")?;
    out.flush().context("Failed to flush log table output")?;

    Ok(GenerationReport {
        entry_count: table.len(),
        shift_counts: [
            table.shifted_count(Shift::One),
            table.shifted_count(Shift::Two),
            table.shifted_count(Shift::Three),
        ],
        line_count: source.lines().count(),
        bytes_written: source.len(),
        source,
    })
}
