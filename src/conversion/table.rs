//! Columnar table import

use crate::conversion::config::ImportOptions;
use crate::conversion::engine::{drive_lines, validate_path};
use crate::error::{CsvError, CsvResult, ParseErrorKind};
use crate::logging::{CsvLogger, NoopLogger};
use crate::parser::{LineReader, LineTokenizer};
use serde::Serialize;
use std::io::{self, BufRead, Cursor};
use std::path::Path;

/// Named columns plus rows whose fields map to columns by position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names generated when the input has no header line
    pub fn synthetic_columns(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Column {}", i)).collect()
    }

    /// Append a row, padding missing trailing fields with empty strings
    pub fn push_row(&mut self, mut fields: Vec<String>) -> Result<(), ParseErrorKind> {
        if fields.len() > self.columns.len() {
            return Err(ParseErrorKind::TooManyFields {
                fields: fields.len(),
                columns: self.columns.len(),
            });
        }
        fields.resize(self.columns.len(), String::new());
        self.rows.push(fields);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Position of the first column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)
            .and_then(|r| r.get(index))
            .map(String::as_str)
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.columns, self.rows)
    }
}

/// Builds a [`Table`] from CSV lines
pub struct TableImporter<'a> {
    options: ImportOptions,
    logger: &'a dyn CsvLogger,
}

impl TableImporter<'static> {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            logger: &NoopLogger,
        }
    }
}

impl<'a> TableImporter<'a> {
    pub fn with_logger<'b>(self, logger: &'b dyn CsvLogger) -> TableImporter<'b> {
        TableImporter {
            options: self.options,
            logger,
        }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import the CSV file at `path`
    pub fn import_file(&self, path: impl AsRef<Path>) -> CsvResult<Table> {
        const SCOPE: &str = "import_table";
        let path = path.as_ref();
        let result = validate_path(path)
            .map_err(CsvError::from)
            .and_then(|()| {
                self.logger.log_debug(
                    SCOPE,
                    &format!("Attempting to import file: {} to table", path.display()),
                );
                LineReader::open(path).map_err(|err| CsvError::io(err, Some(path.to_path_buf())))
            })
            .and_then(|lines| self.build(lines, Some(path)));

        match &result {
            Ok(table) => self.logger.log_debug(
                SCOPE,
                &format!(
                    "Finished importing {} columns and {} rows",
                    table.column_count(),
                    table.row_count()
                ),
            ),
            Err(err) => self
                .logger
                .log_error(SCOPE, &format!("Failed to import. {}", err)),
        }

        result
    }

    /// Import from any buffered reader
    pub fn import_reader<R: BufRead>(&self, reader: R) -> CsvResult<Table> {
        self.build(LineReader::new(reader), None)
    }

    /// Import CSV text held in memory
    pub fn import_str(&self, text: &str) -> CsvResult<Table> {
        self.import_reader(Cursor::new(text.as_bytes()))
    }

    /// Import lines that were already split
    pub fn import_lines<I, S>(&self, lines: I) -> CsvResult<Table>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build(lines.into_iter().map(io::Result::Ok), None)
    }

    fn build<I, S>(&self, lines: I, source: Option<&Path>) -> CsvResult<Table>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let tokenizer = LineTokenizer::new(self.options.delimiter, self.options.quote_handling);
        let has_header = self.options.first_line_is_header;
        let mut table: Option<Table> = None;

        drive_lines(lines, &tokenizer, source, |fields| {
            if let Some(table) = table.as_mut() {
                return table.push_row(fields);
            }

            let first = if has_header {
                Table::new(fields.iter().map(|f| f.trim().to_string()).collect())
            } else {
                let mut first = Table::new(Table::synthetic_columns(fields.len()));
                first.push_row(fields)?;
                first
            };
            table = Some(first);
            Ok(())
        })?;

        Ok(table.unwrap_or_default())
    }
}
