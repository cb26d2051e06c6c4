//! Command-line interface module

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::conversion::{
    Delimiter, ExportOptions, ImportOptions, QuoteHandling, RowListImporter, TableImporter,
};
use crate::error::CsvError;
use crate::formatter::CsvWriter;
use crate::logging::TracingLogger;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csvconv")]
#[command(about = "Import CSV into tables or row lists, and export rows back to CSV")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by both import commands
#[derive(ClapArgs, Debug, Clone)]
pub struct ImportArgs {
    /// CSV file to read
    pub input: PathBuf,

    /// Field delimiter (first character is used, default: ",")
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Read doubled quotes inside quoted fields as a literal quote
    #[arg(long)]
    pub rfc4180: bool,

    /// Output JSON file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Import a CSV file into a table and print it as JSON
    Table {
        #[command(flatten)]
        import: ImportArgs,

        /// First line holds the column names
        #[arg(long)]
        has_header: bool,
    },
    /// Import a CSV file into a list of rows and print it as JSON
    Rows {
        #[command(flatten)]
        import: ImportArgs,

        /// Discard the first line
        #[arg(long)]
        skip_header: bool,
    },
    /// Write rows from a JSON array of arrays to a CSV file
    Export {
        /// JSON file holding rows (strings or nulls)
        input: PathBuf,

        /// Destination CSV file (overwritten)
        destination: PathBuf,

        /// Field delimiter (first character is used, default: ",")
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Text substituted for the delimiter inside cells (default: ".")
        #[arg(short, long, default_value = ".")]
        replacement: String,

        /// Header line written before the rows
        #[arg(long)]
        header: Option<String>,
    },
}

impl ImportArgs {
    fn options(&self, first_line_is_header: bool) -> ImportOptions {
        let quote_handling = if self.rfc4180 {
            QuoteHandling::Rfc4180
        } else {
            QuoteHandling::Toggle
        };

        ImportOptions::new()
            .with_delimiter(Delimiter::parse(&self.delimiter))
            .with_header(first_line_is_header)
            .with_quote_handling(quote_handling)
    }
}

/// Errors raised by the command layer
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("Invalid rows JSON in {path}: {source}")]
    RowsJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Csv(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

/// Command execution result
pub type CliResult<T> = Result<T, CliError>;

/// Tracing filter matching the verbosity flags
pub fn log_directive(args: &Args) -> &'static str {
    if args.verbose {
        "csvconv=debug"
    } else if args.quiet {
        "csvconv=error"
    } else {
        "csvconv=info"
    }
}

/// Execute the parsed command
pub fn run(args: &Args) -> CliResult<()> {
    let logger = TracingLogger;

    match &args.command {
        Commands::Table { import, has_header } => {
            let table = TableImporter::new(import.options(*has_header))
                .with_logger(&logger)
                .import_file(&import.input)?;
            emit_json(&table, import)?;
            show_success(
                &format!(
                    "Imported {} columns and {} rows from {}",
                    table.column_count(),
                    table.row_count(),
                    import.input.display()
                ),
                args.quiet || import.output.is_none(),
            );
        }
        Commands::Rows {
            import,
            skip_header,
        } => {
            let rows = RowListImporter::new(import.options(*skip_header))
                .with_logger(&logger)
                .import_file(&import.input)?;
            emit_json(&rows, import)?;
            show_success(
                &format!("Imported {} rows from {}", rows.len(), import.input.display()),
                args.quiet || import.output.is_none(),
            );
        }
        Commands::Export {
            input,
            destination,
            delimiter,
            replacement,
            header,
        } => {
            let rows = read_rows_json(input)?;
            let options = ExportOptions::new()
                .with_delimiter(Delimiter::parse(delimiter))
                .with_replacement(replacement)
                .with_header(header.as_deref());
            let summary = CsvWriter::new(options)
                .with_logger(&logger)
                .write_file(&rows, destination)?;
            show_success(
                &format!(
                    "Wrote {} rows to {}",
                    summary.rows_written,
                    summary.path.display()
                ),
                args.quiet,
            );
        }
    }

    Ok(())
}

fn read_rows_json(path: &Path) -> CliResult<Vec<Vec<Option<String>>>> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| CsvError::io(err, Some(path.to_path_buf())))?;
    serde_json::from_str(&content).map_err(|source| CliError::RowsJson {
        path: path.to_path_buf(),
        source,
    })
}

fn emit_json<T: serde::Serialize>(value: &T, import: &ImportArgs) -> CliResult<()> {
    let json = if import.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match &import.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Show a success message (if not in quiet mode)
pub fn show_success(message: &str, quiet: bool) {
    if !quiet {
        println!("✓ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &CliError) {
    eprintln!("✗ {}", error.user_message());

    if let CliError::Csv(CsvError::Parse(_)) = error {
        eprintln!("\nTip: Use --rfc4180 or a different --delimiter if fields are split unexpectedly");
    }

    eprintln!("\nTry 'csvconv --help' for usage information.");
}
