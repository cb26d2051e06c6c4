//! CSV import: configuration, the line driver and the two result shapes

pub mod config;
pub mod engine;
pub mod lenient;
pub mod rows;
pub mod table;

pub use config::{Delimiter, ExportOptions, ImportOptions, QuoteHandling};
pub use rows::{Row, RowListImporter};
pub use table::{Table, TableImporter};
