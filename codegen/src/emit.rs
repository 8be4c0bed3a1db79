//! C source emission: a line buffer and the table renderer.

use std::fmt::Write as FmtWrite;

use crate::table::{LogTable, TableEntry, TABLE_NAME};

/// Header providing the fixed-width integer types.
pub const STDINT_HEADER: &str = "stdint.h";

/// Line-oriented buffer for a C source fragment.
#[derive(Debug, Default)]
pub struct CFile {
    /// Accumulated source text.
    pub buf: String,
}

impl CFile {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `#include <header>`.
    pub fn include(&mut self, header: &str) {
        let _ = writeln!(self.buf, "#include <{header}>");
    }

    /// Appends one line verbatim.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Consumes the buffer and returns the source text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// The trailing comment recording the shift applied to `entry`, or an empty
/// string when none was applied.
#[must_use]
pub fn hint_comment(entry: &TableEntry) -> String {
    match entry.shift {
        Some(shift) => format!("// << {} if i == {}", shift.bits(), entry.index),
        None => String::new(),
    }
}

/// Renders `table` as a `const uint8_t` array declaration.
///
/// Each entry line is `\t<value>, <comment>`; unshifted entries keep the
/// separating space after the comma.
#[must_use]
pub fn render_table(table: &LogTable) -> String {
    let mut f = CFile::new();
    f.include(STDINT_HEADER);
    let _ = writeln!(f.buf, "const uint8_t {TABLE_NAME}[] = {{");
    for entry in table.entries() {
        let _ = writeln!(f.buf, "\t{}, {}", entry.encoded_value, hint_comment(entry));
    }
    f.line("};");
    f.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> String {
        render_table(&LogTable::build().unwrap())
    }

    #[test]
    fn renders_preamble_and_closing() {
        let text = rendered();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 103);
        assert_eq!(lines[0], "#include <stdint.h>");
        assert_eq!(lines[1], "const uint8_t log_table[] = {");
        assert_eq!(lines[2], "\t255, // << 3 if i == 0");
        assert_eq!(lines[102], "};");
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn shifted_entries_carry_hint() {
        let text = rendered();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "\t147, // << 3 if i == 1");
        assert_eq!(lines[4], "\t250, // << 2 if i == 2");
        assert_eq!(lines[16], "\t251, // << 1 if i == 14");
    }

    #[test]
    fn unshifted_entries_keep_trailing_space() {
        let text = rendered();
        let lines: Vec<&str> = text.lines().collect();
        // line index = entry index + 2
        assert_eq!(lines[52], "\t177, ");
        assert_eq!(lines[101], "\t2, ");
    }

    #[test]
    fn hint_comment_is_empty_without_shift() {
        let entry = TableEntry::derive(60).unwrap();
        assert_eq!(hint_comment(&entry), "");
    }

    #[test]
    fn c_file_builds_lines() {
        let mut f = CFile::new();
        f.include("stdio.h");
        f.line("int x;");
        assert_eq!(f.finish(), "#include <stdio.h>\nint x;\n");
    }
}
