//! Configuration options for CSV import and export

use crate::error::{ValidationError, ValidationResult};

/// Field separator shared by import and export.
///
/// Only a single character is ever significant: a longer string is cut down
/// to its first character, and an empty one falls back to a comma. Both
/// tokenizing and export substitution use the same character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(char);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(',');
    pub const TAB: Delimiter = Delimiter('\t');
    pub const SEMICOLON: Delimiter = Delimiter(';');
    pub const PIPE: Delimiter = Delimiter('|');

    pub fn new(ch: char) -> Self {
        Self(ch)
    }

    /// Resolve caller-supplied delimiter text
    pub fn parse(text: &str) -> Self {
        text.chars().next().map(Self).unwrap_or(Self::COMMA)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl From<char> for Delimiter {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

/// How a double quote inside a quoted span is read back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteHandling {
    /// Every quote toggles the quoted state and is dropped, so `""` reads as nothing
    #[default]
    Toggle,
    /// Inside a quoted span `""` reads as one literal quote
    Rfc4180,
}

/// Replacement text used when the caller supplies a blank one
pub const DEFAULT_REPLACEMENT: &str = ".";

/// Rows written between two progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: usize = 500;

/// Options shared by the table and row-list importers
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub delimiter: Delimiter,
    /// For tables: first line holds column names. For row lists: first line is skipped.
    pub first_line_is_header: bool,
    pub quote_handling: QuoteHandling,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_header(mut self, first_line_is_header: bool) -> Self {
        self.first_line_is_header = first_line_is_header;
        self
    }

    pub fn with_quote_handling(mut self, quote_handling: QuoteHandling) -> Self {
        self.quote_handling = quote_handling;
        self
    }
}

/// Export configuration
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub delimiter: Delimiter,
    /// Text substituted for every delimiter occurrence inside a cell
    pub replacement: String,
    /// Header line, sanitized like a cell and written first when non-empty
    pub header: Option<String>,
    pub progress_interval: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::COMMA,
            replacement: DEFAULT_REPLACEMENT.to_string(),
            header: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the replacement text; blank text keeps the default replacement
    pub fn with_replacement(mut self, replacement: &str) -> Self {
        self.replacement = if replacement.is_empty() {
            DEFAULT_REPLACEMENT.to_string()
        } else {
            replacement.to_string()
        };
        self
    }

    pub fn with_header(mut self, header: Option<&str>) -> Self {
        self.header = header.filter(|h| !h.is_empty()).map(str::to_string);
        self
    }

    pub fn with_progress_interval(mut self, rows: usize) -> Self {
        self.progress_interval = rows;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> ValidationResult<()> {
        if self.progress_interval == 0 {
            return Err(ValidationError::configuration(
                "Progress interval must be at least 1 row",
            ));
        }

        Ok(())
    }
}
