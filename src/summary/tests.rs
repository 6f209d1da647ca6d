#![expect(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
use super::profiling::{analyse_text, infer_kind};
use super::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn test_kind_inference() {
    assert_eq!(infer_kind(&strings(&["1", "-2", " 30 "])), ColumnKind::Integer);
    assert_eq!(infer_kind(&strings(&["1", "2.5", ""])), ColumnKind::Float);
    assert_eq!(infer_kind(&strings(&["Yes", "no", "TRUE"])), ColumnKind::Boolean);
    assert_eq!(infer_kind(&strings(&["1", "one"])), ColumnKind::Text);
    assert_eq!(infer_kind(&strings(&["", " "])), ColumnKind::Text);
    assert_eq!(infer_kind(&strings(&["inf", "1"])), ColumnKind::Text);
}

#[test]
fn test_numeric_describe() {
    let table = Table::from_rows(
        &["v"],
        &[
            vec!["1".to_owned()],
            vec!["2".to_owned()],
            vec!["3".to_owned()],
            vec!["4".to_owned()],
            vec![String::new()],
        ],
    )
    .unwrap();
    let summary = summarize(&table);
    let col = summary.column("v").unwrap();
    assert_eq!(col.kind, ColumnKind::Integer);
    assert_eq!(col.missing, 1);

    let ColumnStats::Numeric(stats) = &col.stats else {
        panic!("expected numeric stats");
    };
    assert_eq!(stats.count, 4);
    assert!(close(stats.mean, 2.5));
    assert!(close(stats.min, 1.0));
    assert!(close(stats.q1, 1.75));
    assert!(close(stats.median, 2.5));
    assert!(close(stats.q3, 3.25));
    assert!(close(stats.max, 4.0));
    assert!(close(stats.std_dev, (5.0f64 / 3.0).sqrt()));
}

#[test]
fn test_text_describe() {
    let stats = analyse_text(&strings(&["b", "a", "b", "a", "", "c"]));
    assert_eq!(stats.count, 5);
    assert_eq!(stats.distinct, 3);
    assert_eq!(stats.top.as_deref(), Some("b"));
    assert_eq!(stats.top_freq, 2);
}

#[test]
fn test_shape_names_and_previews() {
    let rows: Vec<Vec<String>> = (0..8)
        .map(|i| vec![i.to_string(), format!("n{i}")])
        .collect();
    let table = Table::from_rows(&["id", "name"], &rows).unwrap();
    let summary = summarize(&table);

    assert_eq!(summary.shape, (8, 2));
    assert_eq!(summary.column_names, vec!["id", "name"]);
    assert_eq!(
        summary.kinds(),
        vec![("id", ColumnKind::Integer), ("name", ColumnKind::Text)]
    );
    assert_eq!(summary.head.row_count(), 5);
    assert_eq!(summary.head.row(0).unwrap(), vec!["0", "n0"]);
    assert_eq!(summary.tail.row(4).unwrap(), vec!["7", "n7"]);
    assert!(!summary.is_empty);
}

#[test]
fn test_summary_does_not_mutate() {
    let table = Table::from_rows(&["a"], &[vec!["x".to_owned()]]).unwrap();
    let before = table.clone();
    let _summary = summarize_with(&table, 2);
    assert_eq!(table, before);
}

#[test]
fn test_empty_table_flagged() {
    let table = Table::from_rows(&["a", "b"], &[]).unwrap();
    let summary = summarize(&table);
    assert!(summary.is_empty);
    assert_eq!(summary.shape, (0, 2));
    assert_eq!(summary.columns.len(), 2);
    assert_eq!(summary.columns[0].stats.count(), 0);

    let none = summarize(&Table::default());
    assert!(none.is_empty);
    assert_eq!(none.shape, (0, 0));
}

#[test]
fn test_summary_json() {
    let table = Table::from_rows(&["a"], &[vec!["1".to_owned()]]).unwrap();
    let json = summarize(&table).to_json().unwrap();
    assert!(json.contains("\"Integer\""));
    assert!(json.contains("\"column_names\""));
}
