//! In-memory tabular data.
//!
//! A [`Table`] is an ordered list of named text columns of equal length. All
//! cells are kept as the literal text the user or the dataset file supplied;
//! type inference is left to [`crate::summary`].
//!
//! [`SourceTable`] wraps a loaded dataset behind an `Arc` so it can be shared
//! read-only between generation attempts without copying.

use crate::error::{GeneratorError, Result, ValidationError};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// One named column of text cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    name: String,
    values: Vec<String>,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Column-oriented table with unique column names and a shared row count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<TableColumn>,
}

impl Table {
    /// Build a table, checking that names are unique and lengths agree.
    ///
    /// # Errors
    ///
    /// `DuplicateColumn` when a name repeats, `RowCountMismatch` when a column's
    /// length differs from the first column's.
    pub fn new(columns: Vec<TableColumn>) -> Result<Self> {
        let expected = columns.first().map_or(0, TableColumn::len);
        {
            let mut seen = HashSet::new();
            for col in &columns {
                if !seen.insert(col.name.as_str()) {
                    return Err(ValidationError::DuplicateColumn(col.name.clone()).into());
                }
                if col.len() != expected {
                    return Err(ValidationError::RowCountMismatch {
                        field: col.name.clone(),
                        expected,
                        actual: col.len(),
                    }
                    .into());
                }
            }
        }

        Ok(Self { columns })
    }

    /// Build a table from a header and row-major records.
    ///
    /// # Errors
    ///
    /// Same as [`Table::new`]; a ragged record shows up as a `RowCountMismatch`.
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: &[Vec<String>]) -> Result<Self> {
        let mut columns: Vec<TableColumn> = names
            .iter()
            .map(|n| TableColumn::new(n.as_ref(), Vec::with_capacity(rows.len())))
            .collect();

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ValidationError::RowCountMismatch {
                    field: format!("record {}", row_idx + 1),
                    expected: columns.len(),
                    actual: row.len(),
                }
                .into());
            }
            for (col, value) in columns.iter_mut().zip(row) {
                col.values.push(value.clone());
            }
        }

        Self::new(columns)
    }

    /// Convert a polars frame, rendering every value as text. Nulls become empty text.
    ///
    /// # Errors
    ///
    /// Fails when a column cannot be cast to a string column.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let mut columns = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let as_text = series.cast(&DataType::String)?;
            let ca = as_text.str()?;
            let values = ca
                .into_iter()
                .map(|v| v.unwrap_or_default().to_owned())
                .collect();
            columns.push(TableColumn::new(series.name().as_str(), values));
        }
        Self::new(columns)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, TableColumn::len)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`, the same order a dataframe reports its shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// True when the table has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(TableColumn::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Cells of one record in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.row_count() {
            return None;
        }
        self.columns
            .iter()
            .map(|c| c.values.get(index).map(String::as_str))
            .collect()
    }

    /// Iterate records in row order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count()).filter_map(|i| self.row(i))
    }

    /// Restrict to the named columns, in the order given.
    ///
    /// # Errors
    ///
    /// `UnknownColumn` for the first name not present, `DuplicateColumn` when a
    /// name is requested twice.
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let columns = names
            .iter()
            .map(|name| {
                self.column(name.as_ref())
                    .cloned()
                    .ok_or_else(|| ValidationError::UnknownColumn(name.as_ref().to_owned()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::new(columns)
    }

    /// Gather records by index; output order follows `indices`, repeats allowed.
    ///
    /// # Errors
    ///
    /// Fails if any index is not below [`Table::row_count`].
    pub fn take_rows(&self, indices: &[usize]) -> Result<Self> {
        let rows = self.row_count();
        if let Some(bad) = indices.iter().find(|&&i| i >= rows) {
            return Err(GeneratorError::Other(format!(
                "Row index {bad} out of range for {rows} rows"
            )));
        }

        let columns = self
            .columns
            .iter()
            .map(|c| {
                let values = indices
                    .iter()
                    .filter_map(|&i| c.values.get(i).cloned())
                    .collect();
                TableColumn::new(c.name.clone(), values)
            })
            .collect();

        Ok(Self { columns })
    }

    /// First `n` records (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> Self {
        self.slice(0, n.min(self.row_count()))
    }

    /// Last `n` records (fewer if the table is shorter).
    pub fn tail(&self, n: usize) -> Self {
        let rows = self.row_count();
        let n = n.min(rows);
        self.slice(rows - n, n)
    }

    fn slice(&self, offset: usize, len: usize) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                let values = c.values.iter().skip(offset).take(len).cloned().collect();
                TableColumn::new(c.name.clone(), values)
            })
            .collect();
        Self { columns }
    }
}

/// A dataset loaded from a bundled file. Immutable and cheap to clone.
#[derive(Clone, Debug)]
pub struct SourceTable {
    table: Arc<Table>,
    origin: String,
}

impl SourceTable {
    pub fn new(table: Table, origin: impl Into<String>) -> Self {
        Self {
            table: Arc::new(table),
            origin: origin.into(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Where the table was loaded from (path or dataset name).
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl AsRef<Table> for SourceTable {
    fn as_ref(&self) -> &Table {
        &self.table
    }
}
