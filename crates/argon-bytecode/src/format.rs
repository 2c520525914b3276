//! Line formatting for the execution trace.
//!
//! Every byte line uses the same layout:
//! ```text
//! | 2 | offset | 1 | content |
//! ```

use argon_core::Colors;

/// Leading indentation of every line.
pub const INDENT: usize = 2;

/// Builds line prefixes with a fixed offset column width.
pub struct LineBuilder {
    offset_width: usize,
}

impl LineBuilder {
    pub fn new(offset_width: usize) -> Self {
        Self { offset_width }
    }

    /// `  <offset> `
    pub fn prefix(&self, offset: usize, colors: &Colors) -> String {
        format!(
            "{:indent$}{}{:0ow$}{} ",
            "",
            colors.dim,
            offset,
            colors.reset,
            indent = INDENT,
            ow = self.offset_width,
        )
    }

    /// Blank offset column, for sub-lines.
    pub fn subline_prefix(&self) -> String {
        let area = INDENT + self.offset_width + 1;
        format!("{:area$}", "")
    }
}

/// Quote text for display, escaping quotes, backslashes and newlines.
pub fn quote_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Lowercase hex bytes separated by spaces.
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
