//! Integration tests for CSV export and export/import round trips

use assert_matches::assert_matches;
use csvconv::lenient::export_rows_or_false;
use csvconv::{
    export_rows, import_rows, sanitize_cell, CsvError, CsvWriter, Delimiter, ExportOptions,
    ImportOptions, NoopLogger, QuoteHandling, Row, RowListImporter, ValidationError,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn plain_rows_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let rows = strings(&[&["a", "b", "c"], &["1", "", "3"], &["x"], &["héllo", "wörld"]]);

    export_rows(Some(&rows), &path, ",", ".", None).unwrap();
    let imported = import_rows(&path, ",", false).unwrap();

    let cells: Vec<Vec<String>> = imported.into_iter().map(Row::into_cells).collect();
    assert_eq!(cells, rows);
}

#[test]
fn header_round_trip_with_tab_delimiter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.tsv");
    let rows = strings(&[&["1", "2"], &["3", "4"]]);

    export_rows(Some(&rows), &path, "\t", ".", Some("h1\th2")).unwrap();

    // The header is sanitized like a cell, so its delimiters are replaced
    assert_eq!(fs::read_to_string(&path).unwrap(), "h1.h2\n1\t2\n3\t4\n");

    let imported = import_rows(&path, "\t", true).unwrap();
    assert_eq!(imported.len(), 2);
}

#[test]
fn sanitization_properties() {
    assert_eq!(sanitize_cell(Some("a,b"), Delimiter::COMMA, ";"), "a;b");
    assert_eq!(
        sanitize_cell(Some("He said \"hi\""), Delimiter::COMMA, "."),
        "\"He said \"\"hi\"\"\""
    );
    assert_eq!(
        sanitize_cell(Some("line1\nline2"), Delimiter::COMMA, "."),
        "\"line1\nline2\""
    );
}

#[test]
fn quoted_cells_read_back_with_rfc4180_handling() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quotes.csv");
    let rows = strings(&[&["He said \"hi\"", "plain"]]);

    export_rows(Some(&rows), &path, ",", ".", None).unwrap();

    let legacy = import_rows(&path, ",", false).unwrap();
    assert_eq!(legacy[0].cells(), ["He said hi", "plain"]);

    let rfc = RowListImporter::new(
        ImportOptions::new().with_quote_handling(QuoteHandling::Rfc4180),
    )
    .import_file(&path)
    .unwrap();
    assert_eq!(rfc[0].cells(), ["He said \"hi\"", "plain"]);
}

#[test]
fn multi_character_delimiter_uses_first_character() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.csv");
    let rows = strings(&[&["a|b", "c"]]);

    export_rows(Some(&rows), &path, "||", "/", None).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a/b|c\n");

    let imported = import_rows(&path, "||", false).unwrap();
    assert_eq!(imported[0].cells(), ["a/b", "c"]);
}

#[test]
fn blank_replacement_defaults_replacement_not_delimiter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("replace.csv");
    let rows = strings(&[&["a;b", "c"]]);

    export_rows(Some(&rows), &path, ";", "", None).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a.b;c\n");
}

#[test]
fn absent_cells_are_written_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nulls.csv");
    let rows = vec![vec![None, Some("x"), None]];

    export_rows(Some(&rows), &path, ",", ".", None).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), ",x,\n");
}

#[test]
fn export_overwrites_and_creates_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deep").join("out.csv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "old content that is longer\n").unwrap();

    let summary = CsvWriter::new(ExportOptions::default())
        .write_file(&strings(&[&["new"]]), &path)
        .unwrap();

    assert_eq!(summary.rows_written, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");

    let fresh = dir.path().join("fresh").join("out.csv");
    export_rows(Some(&strings(&[&["x"]])), &fresh, ",", ".", None).unwrap();
    assert!(fresh.exists());
}

#[test]
fn validation_failures_do_not_touch_filesystem() {
    let dir = tempdir().unwrap();
    let rows = strings(&[&["a"]]);

    assert_matches!(
        export_rows(None::<Vec<Vec<String>>>, dir.path().join("x.csv"), ",", ".", None),
        Err(CsvError::Validation(ValidationError::MissingRows))
    );
    assert_matches!(
        export_rows(Some(&rows), "  ", ",", ".", None),
        Err(CsvError::Validation(ValidationError::EmptyPath))
    );
    assert!(!dir.path().join("x.csv").exists());
}

#[test]
fn lenient_export_returns_flag() {
    let dir = tempdir().unwrap();
    let rows = strings(&[&["a"]]);

    assert!(export_rows_or_false(
        &rows,
        dir.path().join("ok.csv"),
        ExportOptions::default(),
        &NoopLogger
    ));
    assert!(!export_rows_or_false(&rows, "", ExportOptions::default(), &NoopLogger));
}
