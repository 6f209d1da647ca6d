#![expect(clippy::unwrap_used)]
use super::*;
use crate::io::read_csv;

fn tricky() -> Table {
    Table::from_rows(
        &["name", "quote", "note"],
        &[
            vec![
                "Smith, Jane".to_owned(),
                r#"She said "hi""#.to_owned(),
                "line one\nline two".to_owned(),
            ],
            vec!["Bob".to_owned(), String::new(), "plain".to_owned()],
        ],
    )
    .unwrap()
}

#[test]
fn test_header_first_and_quoting() {
    let bytes = to_csv_bytes(&tricky()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "name,quote,note\n\"Smith, Jane\",\"She said \"\"hi\"\"\",\"line one\nline two\"\nBob,,plain\n"
    );
}

#[test]
fn test_serialization_is_deterministic() {
    let a = DownloadPayload::for_table(&tricky(), PayloadKind::Custom).unwrap();
    let b = DownloadPayload::for_table(&tricky(), PayloadKind::Custom).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_data_uri_wraps_base64_csv() {
    let table = Table::from_rows(&["a"], &[vec!["1".to_owned()]]).unwrap();
    let payload = DownloadPayload::for_table(&table, PayloadKind::Sampled).unwrap();
    // base64("a\n1\n")
    assert_eq!(payload.data_uri, "data:file/csv;base64,YQoxCg==");
    assert_eq!(payload.file_name, "generated_auto_dataset.csv");
    assert_eq!(payload.media_type, "file/csv");
    assert_eq!(decode_data_uri(&payload.data_uri).unwrap(), payload.bytes);
}

#[test]
fn test_file_names_by_kind() {
    assert_eq!(PayloadKind::Sampled.file_name(), "generated_auto_dataset.csv");
    assert_eq!(PayloadKind::Custom.file_name(), "generated_dataset.csv");
    assert_eq!(PayloadKind::Catalog.file_name(), "generated_dataset.csv");
}

#[test]
fn test_html_link() {
    let table = Table::from_rows(&["a"], &[vec!["1".to_owned()]]).unwrap();
    let payload = DownloadPayload::for_table(&table, PayloadKind::Custom).unwrap();
    assert_eq!(
        payload.html_link("Download"),
        r#"<a href="data:file/csv;base64,YQoxCg==" download="generated_dataset.csv">Download</a>"#
    );
}

#[test]
fn test_decode_rejects_foreign_uri() {
    assert!(decode_data_uri("data:text/plain;base64,YQ==").is_err());
    assert!(decode_data_uri("data:file/csv;base64,***").is_err());
}

#[test]
fn test_round_trip_through_csv() {
    let original = tricky();
    let parsed = read_csv(to_csv_bytes(&original).unwrap()).unwrap();
    assert_eq!(parsed, original);
}
