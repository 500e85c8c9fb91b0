use std::fs;
use tempfile::TempDir;
use tweetclean::dataset::*;
use tweetclean::error::DataSourceError;

#[test]
fn test_load_keeps_columns_and_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tweets.csv");
    fs::write(
        &path,
        "gender,text,description\nmale,\"Hi, there\",first\nfemale,second,\nbrand,third,NA\n",
    )
    .unwrap();

    let table = load_csv(&path, &["text", "description"]).unwrap();
    assert_eq!(table.columns, vec!["gender", "text", "description"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows[0].cell("text"), &Cell::Text("Hi, there".to_string()));
    assert!(table.rows[1].cell("description").is_missing());
    assert!(table.rows[2].cell("description").is_missing());
    assert_eq!(table.rows[2].get("gender"), Some(&Cell::Text("brand".to_string())));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_csv(dir.path().join("nope.csv"), &["text"]).unwrap_err();
    assert!(matches!(err, DataSourceError::Io { .. }));
}

#[test]
fn test_missing_required_column() {
    let data = "text,gender\nhello,male\n";
    let err = read_csv(data.as_bytes(), "inline", &["text", "description"]).unwrap_err();
    match err {
        DataSourceError::MissingColumn { column, found, .. } => {
            assert_eq!(column, "description");
            assert_eq!(found, vec!["text", "gender"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_source_lacks_columns() {
    let err = read_csv("".as_bytes(), "inline", &["text"]).unwrap_err();
    assert!(matches!(err, DataSourceError::MissingColumn { .. }));
}

#[test]
fn test_header_only_is_empty_table() {
    let data = "text,description\n";
    let table = read_csv(data.as_bytes(), "inline", &["text", "description"]).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_invalid_utf8_is_csv_error() {
    let data: &[u8] = b"text,description\n\xff\xfe,ok\n";
    let err = read_csv(data, "inline", &["text"]).unwrap_err();
    assert!(matches!(err, DataSourceError::Csv { .. }));
}

#[test]
fn test_repeated_header_keeps_first_column() {
    let data = "text,description,text\nfirst,desc,second\n";
    let table = read_csv(data.as_bytes(), "inline", &["text", "description"]).unwrap();
    assert_eq!(table.columns, vec!["text", "description", "text.1"]);
    assert_eq!(table.rows[0].cell("text"), &Cell::Text("first".to_string()));
    assert_eq!(table.rows[0].cell("text.1"), &Cell::Text("second".to_string()));
}
