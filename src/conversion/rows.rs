//! Plain row-list import

use crate::conversion::config::ImportOptions;
use crate::conversion::engine::{drive_lines, validate_path};
use crate::error::{CsvError, CsvResult};
use crate::logging::{CsvLogger, NoopLogger};
use crate::parser::{LineReader, LineTokenizer};
use serde::Serialize;
use std::io::{self, BufRead, Cursor};
use std::ops::Index;
use std::path::Path;

/// One line's fields, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self {
            cells: cells.into_iter().map(str::to_string).collect(),
        }
    }
}

impl AsRef<[String]> for Row {
    fn as_ref(&self) -> &[String] {
        &self.cells
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.cells[index]
    }
}

/// Builds an ordered list of [`Row`]s from CSV lines
pub struct RowListImporter<'a> {
    options: ImportOptions,
    logger: &'a dyn CsvLogger,
}

impl RowListImporter<'static> {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            logger: &NoopLogger,
        }
    }
}

impl<'a> RowListImporter<'a> {
    pub fn with_logger<'b>(self, logger: &'b dyn CsvLogger) -> RowListImporter<'b> {
        RowListImporter {
            options: self.options,
            logger,
        }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    pub fn import_file(&self, path: impl AsRef<Path>) -> CsvResult<Vec<Row>> {
        const SCOPE: &str = "import_rows";
        let path = path.as_ref();
        let result = validate_path(path)
            .map_err(CsvError::from)
            .and_then(|()| {
                self.logger.log_debug(
                    SCOPE,
                    &format!("Attempting to import file: {} to list of rows", path.display()),
                );
                LineReader::open(path).map_err(|err| CsvError::io(err, Some(path.to_path_buf())))
            })
            .and_then(|lines| self.build(lines, Some(path)));

        match &result {
            Ok(rows) => self
                .logger
                .log_debug(SCOPE, &format!("Finished importing {} rows", rows.len())),
            Err(err) => self
                .logger
                .log_error(SCOPE, &format!("Failed to import. {}", err)),
        }

        result
    }

    pub fn import_reader<R: BufRead>(&self, reader: R) -> CsvResult<Vec<Row>> {
        self.build(LineReader::new(reader), None)
    }

    pub fn import_str(&self, text: &str) -> CsvResult<Vec<Row>> {
        self.import_reader(Cursor::new(text.as_bytes()))
    }

    pub fn import_lines<I, S>(&self, lines: I) -> CsvResult<Vec<Row>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build(lines.into_iter().map(io::Result::Ok), None)
    }

    fn build<I, S>(&self, lines: I, source: Option<&Path>) -> CsvResult<Vec<Row>>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let tokenizer = LineTokenizer::new(self.options.delimiter, self.options.quote_handling);
        let mut skip_next = self.options.first_line_is_header;
        let mut rows = Vec::new();

        // The skipped line is still tokenized
        drive_lines(lines, &tokenizer, source, |fields| {
            if std::mem::take(&mut skip_next) {
                return Ok(());
            }
            rows.push(Row::new(fields));
            Ok(())
        })?;

        Ok(rows)
    }
}
