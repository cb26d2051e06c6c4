//! Quote-aware splitting of a single physical line into fields

use crate::conversion::config::{Delimiter, QuoteHandling};

const QUOTE: char = '"';

/// Splits lines for one import; holds no state between lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer {
    delimiter: Delimiter,
    quote_handling: QuoteHandling,
}

impl LineTokenizer {
    pub fn new(delimiter: Delimiter, quote_handling: QuoteHandling) -> Self {
        Self {
            delimiter,
            quote_handling,
        }
    }

    /// Split `line` into fields.
    ///
    /// Quotes are never kept in the output. The delimiter ends a field only
    /// outside a quoted span, so the result always holds one more field than
    /// there are unquoted delimiters.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let delimiter = self.delimiter.as_char();
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == QUOTE {
                if in_quotes
                    && self.quote_handling == QuoteHandling::Rfc4180
                    && chars.peek() == Some(&QUOTE)
                {
                    chars.next();
                    current.push(QUOTE);
                } else {
                    in_quotes = !in_quotes;
                }
            } else if ch == delimiter && !in_quotes {
                fields.push(std::mem::take(&mut current));
            } else {
                current.push(ch);
            }
        }

        fields.push(current);
        fields
    }
}

/// Tokenize with the legacy quote toggling rules
pub fn tokenize_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    LineTokenizer::new(delimiter, QuoteHandling::Toggle).tokenize(line)
}
