//! CSV import and export
//!
//! Reads delimited text into a named-column [`Table`] or a plain list of
//! [`Row`]s, and writes rows back out as sanitized CSV.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod parser;

// Re-export commonly used types
pub use conversion::lenient;
pub use conversion::{
    Delimiter, ExportOptions, ImportOptions, QuoteHandling, Row, RowListImporter, Table,
    TableImporter,
};
pub use error::{CsvError, CsvResult, ParseError, ParseErrorKind, ValidationError};
pub use formatter::{sanitize_cell, CellText, CsvWriter, ExportSummary};
pub use logging::{CsvLogger, NoopLogger, TracingLogger};
pub use parser::{tokenize_line, LineTokenizer};

use std::path::Path;

/// Import the CSV file at `path` into a table.
///
/// With `has_header` the first line supplies the column names; otherwise
/// columns are named `Column 0`, `Column 1`, ... and the first line is data.
pub fn import_table(path: impl AsRef<Path>, delimiter: &str, has_header: bool) -> CsvResult<Table> {
    let options = ImportOptions::new()
        .with_delimiter(Delimiter::parse(delimiter))
        .with_header(has_header);
    TableImporter::new(options).import_file(path)
}

/// Import the CSV file at `path` into a list of rows
pub fn import_rows(
    path: impl AsRef<Path>,
    delimiter: &str,
    skip_first_line: bool,
) -> CsvResult<Vec<Row>> {
    let options = ImportOptions::new()
        .with_delimiter(Delimiter::parse(delimiter))
        .with_header(skip_first_line);
    RowListImporter::new(options).import_file(path)
}

/// Write `rows` as CSV to `destination`, replacing the file.
///
/// `None` rows is rejected before any filesystem access. An empty
/// `delimiter` means `,` and an empty `replacement` means `.`.
pub fn export_rows<I, R, C>(
    rows: Option<I>,
    destination: impl AsRef<Path>,
    delimiter: &str,
    replacement: &str,
    header: Option<&str>,
) -> CsvResult<ExportSummary>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[C]>,
    C: CellText,
{
    let rows = rows.ok_or(ValidationError::MissingRows)?;
    let options = ExportOptions::new()
        .with_delimiter(Delimiter::parse(delimiter))
        .with_replacement(replacement)
        .with_header(header);
    CsvWriter::new(options).write_file(rows, destination)
}
