//! Dataset overview shown after every generation.
//!
//! [`summarize`] never mutates or rejects its input. An empty table produces a
//! summary with `is_empty` set instead of an error.

pub mod profiling;

pub use profiling::{ColumnKind, ColumnStats, NumericStats, TextStats};

use crate::error::Result;
use crate::table::Table;
use serde::Serialize;

/// Rows shown in the head and tail previews unless configured otherwise.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    /// Cells that are empty or whitespace only.
    pub missing: usize,
    pub stats: ColumnStats,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// `(rows, columns)`
    pub shape: (usize, usize),
    pub column_names: Vec<String>,
    pub columns: Vec<ColumnSummary>,
    pub head: Table,
    pub tail: Table,
    pub is_empty: bool,
}

impl DatasetSummary {
    /// Column names paired with their inferred kinds.
    pub fn kinds(&self) -> Vec<(&str, ColumnKind)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.kind))
            .collect()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// # Errors
    ///
    /// Only if serde_json fails to serialize, which plain data does not do.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Summarize with the default preview size.
pub fn summarize(table: &Table) -> DatasetSummary {
    summarize_with(table, DEFAULT_PREVIEW_ROWS)
}

pub fn summarize_with(table: &Table, preview_rows: usize) -> DatasetSummary {
    let columns = table
        .columns()
        .iter()
        .map(|col| {
            let (kind, missing, stats) = profiling::analyse_column(col.name(), col.values());
            ColumnSummary {
                name: col.name().to_owned(),
                kind,
                missing,
                stats,
            }
        })
        .collect();

    DatasetSummary {
        shape: table.shape(),
        column_names: table.column_names().into_iter().map(str::to_owned).collect(),
        columns,
        head: table.head(preview_rows),
        tail: table.tail(preview_rows),
        is_empty: table.is_empty(),
    }
}

#[cfg(test)]
mod tests;
