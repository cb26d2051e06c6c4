//! Wrappers that never fail: errors are logged and an empty result returned

use crate::conversion::config::{ExportOptions, ImportOptions};
use crate::conversion::rows::{Row, RowListImporter};
use crate::conversion::table::{Table, TableImporter};
use crate::formatter::{CellText, CsvWriter};
use crate::logging::CsvLogger;
use std::path::Path;

/// Import a table, or an empty table if anything goes wrong
pub fn import_table_or_empty(
    path: impl AsRef<Path>,
    options: ImportOptions,
    logger: &dyn CsvLogger,
) -> Table {
    TableImporter::new(options)
        .with_logger(logger)
        .import_file(path)
        .unwrap_or_default()
}

/// Import a row list, or an empty list if anything goes wrong
pub fn import_rows_or_empty(
    path: impl AsRef<Path>,
    options: ImportOptions,
    logger: &dyn CsvLogger,
) -> Vec<Row> {
    RowListImporter::new(options)
        .with_logger(logger)
        .import_file(path)
        .unwrap_or_default()
}

/// Export rows and report success as a flag
pub fn export_rows_or_false<I, R, C>(
    rows: I,
    destination: impl AsRef<Path>,
    options: ExportOptions,
    logger: &dyn CsvLogger,
) -> bool
where
    I: IntoIterator<Item = R>,
    R: AsRef<[C]>,
    C: CellText,
{
    const SCOPE: &str = "export_rows_or_false";

    match CsvWriter::new(options)
        .with_logger(logger)
        .write_file(rows, destination)
    {
        Ok(_) => true,
        Err(err) => {
            logger.log_error(SCOPE, &format!("Failed to export. {}", err));
            false
        }
    }
}
