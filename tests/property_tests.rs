//! Property-based tests using proptest

use dataset_generator::builder::{RecordSpec, assemble};
use dataset_generator::export::to_csv_bytes;
use dataset_generator::io::read_csv;
use dataset_generator::sampler::{ColumnSelection, SampleSpec, sample};
use dataset_generator::summary::summarize;
use dataset_generator::table::{Table, TableColumn};
use proptest::prelude::*;
use rand::SeedableRng as _;
use rand::rngs::StdRng;

fn text_table(columns: usize, rows: usize, cells: &[String]) -> Table {
    let cols = (0..columns)
        .map(|c| {
            let values = (0..rows)
                .map(|r| cells[(r * columns + c) % cells.len()].clone())
                .collect();
            TableColumn::new(format!("c{c}"), values)
        })
        .collect();
    Table::new(cols).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_sample_shape_and_membership(
        rows in 1usize..20,
        n in 1usize..=500,
        picked in proptest::collection::vec(0usize..4, 1..4),
        seed in any::<u64>(),
    ) {
        let cells: Vec<String> = (0..rows * 4).map(|i| i.to_string()).collect();
        let source = text_table(4, rows, &cells);
        let names: Vec<String> = picked.iter().map(|c| format!("c{c}")).collect();
        let selection = ColumnSelection::new(names);
        let spec = SampleSpec::new(selection.clone(), n).unwrap();

        let mut rng = StdRng::seed_from_u64(seed);
        let out = sample(&source, &spec, &mut rng).unwrap();

        prop_assert_eq!(out.row_count(), n);
        let expected: Vec<&str> = selection.names().iter().map(String::as_str).collect();
        prop_assert_eq!(out.column_names(), expected);

        let projected = source.project(selection.names()).unwrap();
        let source_rows: Vec<Vec<&str>> = projected.rows().collect();
        for row in out.rows() {
            prop_assert!(source_rows.contains(&row));
        }
    }

    #[test]
    fn test_assembly_keeps_first_position_last_values(
        names in proptest::collection::vec(prop::sample::select(vec!["A", "B", "C", "D"]), 1..=10),
        rows in 1usize..30,
    ) {
        let fields: Vec<(String, Vec<String>)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values = (0..rows).map(|r| format!("{i}-{r}")).collect();
                ((*name).to_owned(), values)
            })
            .collect();
        let records = RecordSpec::new(rows, fields).unwrap();
        let assembled = assemble(&records).unwrap();

        let mut distinct: Vec<&str> = Vec::new();
        for name in &names {
            if !distinct.contains(name) {
                distinct.push(name);
            }
        }
        prop_assert_eq!(assembled.table.column_names(), distinct.clone());
        prop_assert_eq!(assembled.table.row_count(), rows);

        for name in &distinct {
            let last = names.iter().rposition(|n| n == name).unwrap();
            let column = assembled.table.column(name).unwrap();
            prop_assert_eq!(column.values()[0].clone(), format!("{last}-0"));
        }
        let duplicated = distinct.len() < names.len();
        prop_assert_eq!(!assembled.warnings.is_empty(), duplicated);
    }

    #[test]
    fn test_csv_output_reads_back(
        columns in 2usize..5,
        rows in 1usize..15,
        cells in proptest::collection::vec("[a-z0-9,\"]{0,6}", 1..20),
    ) {
        let table = text_table(columns, rows, &cells);
        let bytes = to_csv_bytes(&table).unwrap();
        prop_assert_eq!(read_csv(bytes).unwrap(), table);
    }

    #[test]
    fn test_summary_counts_cover_every_row(
        columns in 1usize..5,
        rows in 1usize..40,
        cells in proptest::collection::vec("(|[0-9]{1,3}|[a-z]{1,4})", 1..20),
    ) {
        let table = text_table(columns, rows, &cells);
        let summary = summarize(&table);
        prop_assert_eq!(summary.shape, (rows, columns));
        for column in &summary.columns {
            prop_assert_eq!(column.stats.count() + column.missing, rows);
        }
        prop_assert!(summary.head.row_count() <= 5);
        prop_assert!(summary.tail.row_count() <= 5);
    }
}
