//! Error types and handling infrastructure for CSV import and export

use std::fmt;
use std::path::PathBuf;

/// Missing or blank required arguments, reported before any I/O happens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("File path is empty")]
    EmptyPath,

    #[error("Row collection is missing")]
    MissingRows,

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ValidationError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Reasons a single line could not be placed into the import result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("line has {fields} fields but the table has {columns} columns")]
    TooManyFields { fields: usize, columns: usize },
}

/// Failure tied to a specific input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based physical line number
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    pub fn too_many_fields(line: usize, fields: usize, columns: usize) -> Self {
        Self::new(line, ParseErrorKind::TooManyFields { fields, columns })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.kind, self.line)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Main error type for import and export operations
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

impl CsvError {
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        let message = match &path {
            Some(path) => format!("{} ({})", source, path.display()),
            None => source.to_string(),
        };
        Self::Io {
            message,
            path,
            source,
        }
    }

    /// Line number of the offending input line, for parse failures
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(err) => Some(err.line),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => format!("Invalid arguments: {}", err),
            Self::Parse(err) => format!("CSV parse error at line {}: {}", err.line, err.kind),
            Self::Io { message, .. } => format!("File error: {}", message),
        }
    }
}

impl From<std::io::Error> for CsvError {
    fn from(source: std::io::Error) -> Self {
        Self::io(source, None)
    }
}

/// Result type for import and export operations
pub type CsvResult<T> = Result<T, CsvError>;

/// Convenience result type for argument validation
pub type ValidationResult<T> = Result<T, ValidationError>;
