//! Integration tests for importing CSV files

use assert_matches::assert_matches;
use csvconv::{
    import_rows, import_table, CsvError, ImportOptions, ParseError, ParseErrorKind, Row,
    RowListImporter, TableImporter, ValidationError,
};
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod table_import {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn imports_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "people.csv", "id, name ,city\n1,Alice,Paris\n2,Bob,\"New York, NY\"\n");

        let table = import_table(&path, ",", true).unwrap();

        assert_eq!(table.columns(), ["id", "name", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(1, "city"), Some("New York, NY"));
    }

    #[test]
    fn synthetic_columns_without_header() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "data.csv", "a;b\nc;d\n");

        let table = import_table(&path, ";", false).unwrap();

        assert_eq!(table.columns(), ["Column 0", "Column 1"]);
        assert_eq!(table.rows(), [vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn empty_file_gives_empty_table() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "empty.csv", "");

        let table = import_table(&path, ",", true).unwrap();

        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn extra_field_reports_line_two() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "bad.csv", "a,b,c\nd,e,f,g\n");

        let err = import_table(&path, ",", false).unwrap_err();

        assert_eq!(err.line(), Some(2));
        assert_matches!(
            err,
            CsvError::Parse(ParseError {
                kind: ParseErrorKind::TooManyFields { fields: 4, columns: 3 },
                ..
            })
        );
    }

    #[test]
    fn failure_on_later_line_aborts_whole_import() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "bad.csv", "h1,h2\n1,2\n3,4\n5,6,7\n8,9\n");

        let err = import_table(&path, ",", true).unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn empty_delimiter_defaults_to_comma() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "data.csv", "x,y\n");

        let table = import_table(&path, "", false).unwrap();
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn byte_order_mark_is_not_part_of_first_column() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "bom.csv", "\u{feff}id,name\r\n1,x\r\n");

        let table = TableImporter::new(ImportOptions::new().with_header(true))
            .import_file(&path)
            .unwrap();
        assert_eq!(table.columns(), ["id", "name"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = import_table(dir.path().join("nope.csv"), ",", true);
        assert_matches!(result, Err(CsvError::Io { path: Some(_), .. }));
    }
}

mod row_import {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skip_first_line_returns_two_rows() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "rows.csv", "h1,h2\n1,2\n3,4");

        let rows = import_rows(&path, ",", true).unwrap();

        assert_eq!(rows, vec![Row::from(vec!["1", "2"]), Row::from(vec!["3", "4"])]);
    }

    #[test]
    fn rows_may_differ_in_length() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "ragged.csv", "a\nb,c\n\nd,e,f\n");

        let rows = import_rows(&path, ",", false).unwrap();
        let cells: Vec<Vec<String>> = rows.into_iter().map(Row::into_cells).collect();

        assert_eq!(
            cells,
            vec![vec!["a"], vec!["b", "c"], vec![""], vec!["d", "e", "f"]]
        );
    }

    #[test]
    fn lone_carriage_returns_split_lines() {
        let dir = tempdir().unwrap();
        let path = create_test_file(&dir, "mac.csv", "a,b\rc,d\r");

        let rows = RowListImporter::new(ImportOptions::default())
            .import_file(&path)
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        fs::write(&path, [b'a', b',', 0xe9, b'\n']).unwrap();

        let result = import_rows(&path, ",", false);
        assert_matches!(result, Err(CsvError::Io { .. }));
    }
}

#[test]
fn blank_paths_are_rejected_before_io() {
    for path in ["", " ", "\t"] {
        assert_matches!(
            import_table(path, ",", true),
            Err(CsvError::Validation(ValidationError::EmptyPath))
        );
        assert_matches!(
            import_rows(path, ",", true),
            Err(CsvError::Validation(ValidationError::EmptyPath))
        );
    }
}
