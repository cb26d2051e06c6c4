//! Line-by-line import driver shared by the table and row-list importers

use crate::error::{CsvError, CsvResult, ParseError, ParseErrorKind, ValidationError};
use crate::parser::LineTokenizer;
use std::io;
use std::path::{Path, PathBuf};

/// Reject blank or whitespace-only paths before touching the filesystem
pub(crate) fn validate_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    Ok(())
}

/// Tokenize every line in order and hand the fields to `place`.
///
/// Stops at the first failure. Read failures surface as IO errors tagged
/// with `source`; placement failures become a [`ParseError`] carrying the
/// 1-based line number. Returns the number of lines consumed.
pub(crate) fn drive_lines<I, S, F>(
    lines: I,
    tokenizer: &LineTokenizer,
    source: Option<&Path>,
    mut place: F,
) -> CsvResult<usize>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
    F: FnMut(Vec<String>) -> Result<(), ParseErrorKind>,
{
    let mut consumed = 0;

    for line in lines {
        let line = line.map_err(|err| CsvError::io(err, source.map(PathBuf::from)))?;
        let line_number = consumed + 1;

        let fields = tokenizer.tokenize(line.as_ref());
        place(fields).map_err(|kind| ParseError::new(line_number, kind))?;

        consumed = line_number;
    }

    Ok(consumed)
}
