//! Reader for emitted table source.
//!
//! Recovers the entry values and shift hints from the text the generator
//! prints, so validators check what a C compiler would actually see rather
//! than the in-memory table.

use logtable_codegen::table::TABLE_NAME;
use thiserror::Error;

/// Errors raised while reading emitted table source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `const uint8_t <name>[] = {` line was found.
    #[error("missing `const uint8_t log_table[] = {{` opening line")]
    MissingOpening,
    /// No `};` line follows the opening.
    #[error("missing closing `}};` line")]
    MissingClosing,
    /// An entry line is not `\t<value>, <comment>`.
    #[error("line {line}: expected `\\t<value>, <comment>`, found {text:?}")]
    MalformedEntry {
        /// 1-based line number.
        line: usize,
        /// Offending line.
        text: String,
    },
    /// The entry value is not an unsigned integer.
    #[error("line {line}: {text:?} is not an unsigned integer")]
    BadValue {
        /// 1-based line number.
        line: usize,
        /// Offending value text.
        text: String,
    },
    /// The trailing comment is neither empty nor a shift hint.
    #[error("line {line}: unrecognised hint comment {text:?}")]
    BadHint {
        /// 1-based line number.
        line: usize,
        /// Offending comment.
        text: String,
    },
}

/// A shift hint read back from `// << <bits> if i == <index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Bits shifted out.
    pub bits: u32,
    /// Index the comment names.
    pub index: usize,
}

/// One entry line of the emitted array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedEntry {
    /// 1-based line number in the source.
    pub line: usize,
    /// Value as written. Wider than `u8` so out-of-range values are reported, not rejected.
    pub value: u32,
    /// Shift hint, if the line carries one.
    pub hint: Option<Hint>,
}

impl ParsedEntry {
    /// The value shifted back up by its hint; saturates on nonsensical bit counts.
    #[must_use]
    pub fn decoded(&self) -> u32 {
        self.value
            .checked_shl(self.hint.map_or(0, |h| h.bits))
            .unwrap_or(u32::MAX)
    }
}

/// Parses the array body of emitted table source.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first line that does not match the
/// emitted layout.
pub fn parse_table(source: &str) -> Result<Vec<ParsedEntry>, ParseError> {
    let opening = format!("const uint8_t {TABLE_NAME}[] = {{");
    let mut lines = source.lines().enumerate();

    lines
        .by_ref()
        .find(|(_, text)| *text == opening)
        .ok_or(ParseError::MissingOpening)?;

    let mut entries = Vec::new();
    for (n, text) in lines {
        if text == "};" {
            return Ok(entries);
        }
        entries.push(parse_entry(n + 1, text)?);
    }
    Err(ParseError::MissingClosing)
}

fn parse_entry(line: usize, text: &str) -> Result<ParsedEntry, ParseError> {
    let (value, comment) = text
        .strip_prefix('\t')
        .and_then(|rest| rest.split_once(", "))
        .ok_or_else(|| ParseError::MalformedEntry {
            line,
            text: text.to_string(),
        })?;

    let value = value.parse::<u32>().map_err(|_| ParseError::BadValue {
        line,
        text: value.to_string(),
    })?;

    let hint = if comment.is_empty() {
        None
    } else {
        Some(parse_hint(comment).ok_or_else(|| ParseError::BadHint {
            line,
            text: comment.to_string(),
        })?)
    };

    Ok(ParsedEntry { line, value, hint })
}

fn parse_hint(comment: &str) -> Option<Hint> {
    let (bits, index) = comment
        .strip_prefix("// << ")?
        .split_once(" if i == ")?;
    Some(Hint {
        bits: bits.parse().ok()?,
        index: index.parse().ok()?,
    })
}
