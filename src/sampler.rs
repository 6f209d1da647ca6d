//! Sampling pipeline: column projection followed by row sampling with replacement.
//!
//! ```
//! use dataset_generator::sampler::{self, ColumnSelection, SampleSpec};
//! use dataset_generator::table::Table;
//! use rand::SeedableRng as _;
//!
//! let source = Table::from_rows(
//!     &["x", "y", "z"],
//!     &[
//!         vec!["1".into(), "a".into(), "p".into()],
//!         vec!["2".into(), "b".into(), "q".into()],
//!     ],
//! )?;
//! let spec = SampleSpec::new(ColumnSelection::new(["x", "y"]), 3)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let sampled = sampler::sample(&source, &spec, &mut rng)?;
//! assert_eq!(sampled.shape(), (3, 2));
//! # Ok::<(), dataset_generator::error::GeneratorError>(())
//! ```

use crate::error::{Result, ValidationError};
use crate::table::Table;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound on rows produced by one sampling request.
pub const MAX_SAMPLE_ROWS: usize = 500;

/// Ordered set of column names picked from a source table.
///
/// Repeated names collapse onto their first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    names: Vec<String>,
}

impl ColumnSelection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        Self { names: out }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Parameters of one sampling request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSpec {
    selection: ColumnSelection,
    row_count: usize,
}

impl SampleSpec {
    /// # Errors
    ///
    /// `RowCountOutOfRange` unless `1 <= row_count <= MAX_SAMPLE_ROWS`.
    pub fn new(selection: ColumnSelection, row_count: usize) -> Result<Self> {
        check_row_count(row_count)?;
        Ok(Self {
            selection,
            row_count,
        })
    }

    pub fn selection(&self) -> &ColumnSelection {
        &self.selection
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

fn check_row_count(row_count: usize) -> Result<()> {
    if (1..=MAX_SAMPLE_ROWS).contains(&row_count) {
        Ok(())
    } else {
        Err(ValidationError::RowCountOutOfRange {
            requested: row_count,
            max: MAX_SAMPLE_ROWS,
        }
        .into())
    }
}

/// Project `source` onto the selected columns, keeping the selection's order.
///
/// # Errors
///
/// `EmptySelection` for an empty selection, `UnknownColumn` for the first name
/// the source does not have.
pub fn select_columns(source: &Table, selection: &ColumnSelection) -> Result<Table> {
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection.into());
    }
    if let Some(missing) = selection.names().iter().find(|n| !source.has_column(n)) {
        return Err(ValidationError::UnknownColumn(missing.clone()).into());
    }
    source.project(selection.names())
}

/// Draw `row_count` records uniformly and independently, with replacement.
///
/// Output order is draw order. `row_count` may exceed the table's own row count.
///
/// # Errors
///
/// `RowCountOutOfRange` for a count outside `1..=MAX_SAMPLE_ROWS`, `EmptySource`
/// when the table has no rows.
pub fn sample_rows<R: Rng>(table: &Table, row_count: usize, rng: &mut R) -> Result<Table> {
    check_row_count(row_count)?;

    let available = table.row_count();
    if available == 0 {
        return Err(ValidationError::EmptySource.into());
    }

    let draws: Vec<usize> = (0..row_count)
        .map(|_| rng.random_range(0..available))
        .collect();

    table.take_rows(&draws)
}

/// Full sampling pipeline: select columns, then sample rows.
///
/// # Errors
///
/// Any error from [`select_columns`] or [`sample_rows`]; nothing is produced on failure.
pub fn sample<R: Rng>(source: &Table, spec: &SampleSpec, rng: &mut R) -> Result<Table> {
    let projected = select_columns(source, spec.selection())?;
    let sampled = sample_rows(&projected, spec.row_count(), rng)?;

    tracing::debug!(
        source_rows = source.row_count(),
        columns = sampled.column_count(),
        rows = sampled.row_count(),
        "Sampled rows with replacement"
    );

    Ok(sampled)
}

#[cfg(test)]
mod tests;
