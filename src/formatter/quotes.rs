//! Cell sanitization for CSV output
//!
//! Every cell goes through three steps before it is written:
//! 1. each delimiter occurrence is replaced with the replacement text
//! 2. each double quote is doubled
//! 3. the value is wrapped in quotes if it now holds a quote, CR or LF

use crate::conversion::config::Delimiter;
use std::borrow::Cow;

const QUOTE: char = '"';

/// A value that can be written as a CSV cell. `None` is an absent cell.
pub trait CellText {
    fn cell_text(&self) -> Option<&str>;
}

impl CellText for str {
    fn cell_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl CellText for String {
    fn cell_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CellText for Cow<'_, str> {
    fn cell_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<T: AsRef<str>> CellText for Option<T> {
    fn cell_text(&self) -> Option<&str> {
        self.as_ref().map(|value| AsRef::<str>::as_ref(value))
    }
}

impl<T: CellText + ?Sized> CellText for &T {
    fn cell_text(&self) -> Option<&str> {
        (**self).cell_text()
    }
}

/// Sanitizes cells for one export
#[derive(Debug, Clone)]
pub struct CellSanitizer {
    delimiter: Delimiter,
    replacement: String,
}

impl CellSanitizer {
    pub fn new(delimiter: Delimiter, replacement: impl Into<String>) -> Self {
        Self {
            delimiter,
            replacement: replacement.into(),
        }
    }

    pub fn sanitize<C: CellText + ?Sized>(&self, cell: &C) -> String {
        sanitize_cell(cell.cell_text(), self.delimiter, &self.replacement)
    }

    /// Sanitize every cell of a row and join them with the delimiter
    pub fn join_row<C: CellText>(&self, cells: &[C]) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push(self.delimiter.as_char());
            }
            line.push_str(&self.sanitize(cell));
        }
        line
    }
}

/// Sanitize a single cell value
pub fn sanitize_cell(value: Option<&str>, delimiter: Delimiter, replacement: &str) -> String {
    let value = value.unwrap_or_default();
    let replaced = value.replace(delimiter.as_char(), replacement);

    let needs_wrapping =
        replaced.contains(QUOTE) || replaced.contains(|c: char| c == '\r' || c == '\n');
    let escaped = replaced.replace(QUOTE, "\"\"");

    if needs_wrapping {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}
