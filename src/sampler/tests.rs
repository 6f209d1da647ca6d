#![expect(clippy::unwrap_used)]
use super::*;
use crate::error::GeneratorError;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::collections::HashMap;

fn source() -> Table {
    Table::from_rows(
        &["x", "y", "z"],
        &[
            vec!["1".to_owned(), "a".to_owned(), "p".to_owned()],
            vec!["2".to_owned(), "b".to_owned(), "q".to_owned()],
            vec!["3".to_owned(), "c".to_owned(), "r".to_owned()],
            vec!["4".to_owned(), "d".to_owned(), "s".to_owned()],
        ],
    )
    .unwrap()
}

fn validation(err: &GeneratorError) -> &ValidationError {
    err.as_validation().unwrap()
}

#[test]
fn test_selection_dedupes_in_order() {
    let sel = ColumnSelection::new(["y", "x", "y"]);
    assert_eq!(sel.names(), &["y", "x"]);
    assert_eq!(sel.len(), 2);
}

#[test]
fn test_empty_selection_rejected() {
    let spec = SampleSpec::new(ColumnSelection::default(), 5).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let err = sample(&source(), &spec, &mut rng).unwrap_err();
    assert_eq!(validation(&err), &ValidationError::EmptySelection);
}

#[test]
fn test_unknown_column_rejected() {
    let sel = ColumnSelection::new(["x", "w"]);
    let err = select_columns(&source(), &sel).unwrap_err();
    assert_eq!(validation(&err), &ValidationError::UnknownColumn("w".to_owned()));
}

#[test]
fn test_row_count_bounds() {
    let sel = ColumnSelection::new(["x"]);
    assert!(SampleSpec::new(sel.clone(), 1).is_ok());
    assert!(SampleSpec::new(sel.clone(), MAX_SAMPLE_ROWS).is_ok());

    let err = SampleSpec::new(sel.clone(), 0).unwrap_err();
    assert_eq!(
        validation(&err),
        &ValidationError::RowCountOutOfRange {
            requested: 0,
            max: MAX_SAMPLE_ROWS
        }
    );
    assert!(SampleSpec::new(sel, MAX_SAMPLE_ROWS + 1).is_err());
}

#[test]
fn test_empty_source_rejected() {
    let empty = Table::from_rows(&["x"], &[]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let err = sample_rows(&empty, 3, &mut rng).unwrap_err();
    assert_eq!(validation(&err), &ValidationError::EmptySource);
}

#[test]
fn test_projection_then_sample_matches_source_pairs() {
    let src = source();
    let spec = SampleSpec::new(ColumnSelection::new(["x", "y"]), 3).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let out = sample(&src, &spec, &mut rng).unwrap();

    assert_eq!(out.column_names(), vec!["x", "y"]);
    assert_eq!(out.row_count(), 3);

    let projected = src.project(&["x", "y"]).unwrap();
    let pairs: Vec<Vec<&str>> = projected.rows().collect();
    for row in out.rows() {
        assert!(pairs.contains(&row), "row {row:?} not in source projection");
    }
}

#[test]
fn test_more_rows_than_source() {
    let spec = SampleSpec::new(ColumnSelection::new(["z"]), 500).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let out = sample(&source(), &spec, &mut rng).unwrap();
    assert_eq!(out.row_count(), 500);
}

#[test]
fn test_same_seed_same_sample() {
    let spec = SampleSpec::new(ColumnSelection::new(["x", "z"]), 20).unwrap();
    let a = sample(&source(), &spec, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = sample(&source(), &spec, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_draws_are_roughly_uniform() {
    let table = source().project(&["x"]).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<String, usize> = HashMap::new();
    let trials = 200;

    for _ in 0..trials {
        let out = sample_rows(&table, MAX_SAMPLE_ROWS, &mut rng).unwrap();
        for v in out.column("x").unwrap().values() {
            *counts.entry(v.clone()).or_default() += 1;
        }
    }

    let total = (trials * MAX_SAMPLE_ROWS) as f64;
    assert_eq!(counts.len(), 4, "every source row should be drawn");
    for (value, count) in &counts {
        let freq = *count as f64 / total;
        assert!(
            (freq - 0.25).abs() < 0.01,
            "row {value} drawn with frequency {freq}"
        );
    }
}
