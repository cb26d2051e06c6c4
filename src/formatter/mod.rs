//! CSV export: sanitizing rows and writing them to a destination

pub mod quotes;

pub use quotes::{sanitize_cell, CellSanitizer, CellText};

use crate::conversion::config::ExportOptions;
use crate::conversion::engine::validate_path;
use crate::error::{CsvError, CsvResult};
use crate::logging::{CsvLogger, NoopLogger};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

const SCOPE: &str = "export_rows";

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Absolute destination path
    pub path: PathBuf,
    pub rows_written: usize,
    pub header_written: bool,
}

/// Writes rows as CSV. Input rows are only read.
pub struct CsvWriter<'a> {
    options: ExportOptions,
    logger: &'a dyn CsvLogger,
}

impl CsvWriter<'static> {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            logger: &NoopLogger,
        }
    }
}

impl<'a> CsvWriter<'a> {
    pub fn with_logger<'b>(self, logger: &'b dyn CsvLogger) -> CsvWriter<'b> {
        CsvWriter {
            options: self.options,
            logger,
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Write `rows` to `destination`, replacing any existing file.
    ///
    /// The parent directory is created when missing. Failures are logged
    /// through the injected logger before being returned.
    pub fn write_file<I, R, C>(&self, rows: I, destination: impl AsRef<Path>) -> CsvResult<ExportSummary>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[C]>,
        C: CellText,
    {
        let destination = destination.as_ref();
        self.log_start(&destination.display());

        validate_path(destination)
            .and_then(|()| self.options.validate())
            .map_err(CsvError::from)
            .and_then(|()| self.export(rows, destination))
            .map_err(|err| self.log_failure(err))
    }

    /// Write `rows` to any sink. Returns the number of data rows written.
    ///
    /// Logs the same start, progress, completion and failure notifications
    /// as [`CsvWriter::write_file`]; there is no directory handling.
    pub fn write_to<I, R, C, W>(&self, rows: I, sink: W) -> CsvResult<usize>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[C]>,
        C: CellText,
        W: Write,
    {
        self.log_start(&"<writer>");

        self.options
            .validate()
            .map_err(CsvError::from)
            .and_then(|()| {
                let mut writer = BufWriter::new(sink);
                let (rows_written, _) = self.write_records(rows, &mut writer)?;
                writer.flush()?;
                Ok(rows_written)
            })
            .map(|rows_written| {
                self.log_completed(rows_written);
                rows_written
            })
            .map_err(|err| self.log_failure(err))
    }

    fn log_start(&self, target: &dyn fmt::Display) {
        self.logger.log_debug(
            SCOPE,
            &format!(
                "Start. filePath='{}', delimiter='{}', replacer='{}', headerProvided={}",
                target,
                self.options.delimiter.as_char(),
                self.options.replacement,
                if self.options.header.is_some() { "yes" } else { "no" }
            ),
        );
    }

    fn log_completed(&self, rows_written: usize) {
        self.logger.log_debug(
            SCOPE,
            &format!("Completed. Total rows written: {}.", rows_written),
        );
    }

    fn log_failure(&self, err: CsvError) -> CsvError {
        self.logger.log_error(SCOPE, &err.to_string());
        err
    }

    fn export<I, R, C>(&self, rows: I, destination: &Path) -> CsvResult<ExportSummary>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[C]>,
        C: CellText,
    {
        let path = absolute_path(destination)
            .map_err(|err| CsvError::io(err, Some(destination.to_path_buf())))?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|err| CsvError::io(err, Some(dir.to_path_buf())))?;
                self.logger
                    .log_debug(SCOPE, &format!("Created directory '{}'.", dir.display()));
            }
        }

        let file = File::create(&path).map_err(|err| CsvError::io(err, Some(path.clone())))?;
        let mut writer = BufWriter::new(file);

        let (rows_written, header_written) = self
            .write_records(rows, &mut writer)
            .and_then(|counts| writer.flush().map(|_| counts))
            .map_err(|err| CsvError::io(err, Some(path.clone())))?;

        self.log_completed(rows_written);

        Ok(ExportSummary {
            path,
            rows_written,
            header_written,
        })
    }

    fn write_records<I, R, C, W>(&self, rows: I, writer: &mut W) -> io::Result<(usize, bool)>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[C]>,
        C: CellText,
        W: Write,
    {
        let sanitizer = CellSanitizer::new(self.options.delimiter, self.options.replacement.as_str());

        let header_written = match self.options.header.as_deref() {
            Some(header) if !header.is_empty() => {
                writeln!(writer, "{}", sanitizer.sanitize(header))?;
                self.logger.log_debug(SCOPE, "Header written.");
                true
            }
            _ => false,
        };

        let mut rows_written = 0;
        for row in rows {
            writeln!(writer, "{}", sanitizer.join_row(row.as_ref()))?;

            rows_written += 1;
            if rows_written % self.options.progress_interval == 0 {
                self.logger
                    .log_debug(SCOPE, &format!("Written {} rows...", rows_written));
            }
        }

        Ok((rows_written, header_written))
    }
}

/// Absolute form of `path` with `.` and `..` folded away, without touching
/// the filesystem
fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
