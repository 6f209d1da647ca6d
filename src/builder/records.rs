use super::fields::FieldSpec;
use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Upper bound on records in a custom dataset.
pub const MAX_RECORDS: usize = 500;

/// Cell values of a custom dataset, one value sequence per field in field order.
///
/// Field names may repeat here; they are only collapsed when the table is assembled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSpec {
    row_count: usize,
    fields: Vec<(String, Vec<String>)>,
}

impl RecordSpec {
    /// Wrap already-collected values.
    ///
    /// Sequence lengths are not checked here; [`super::assemble`] rejects a
    /// sequence whose length differs from `row_count`.
    ///
    /// # Errors
    ///
    /// `RowCountOutOfRange` unless `1 <= row_count <= MAX_RECORDS`.
    pub fn new(row_count: usize, fields: Vec<(String, Vec<String>)>) -> Result<Self> {
        check_row_count(row_count, MAX_RECORDS)?;
        Ok(Self { row_count, fields })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[(String, Vec<String>)] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Values stored under `name`; with repeated names the last field wins.
    pub fn values_for(&self, name: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }
}

/// Grid of text inputs, one per record and field, all starting out empty.
#[derive(Clone, Debug)]
pub struct CellValueCollector {
    names: Vec<String>,
    row_count: usize,
    cells: Vec<Vec<String>>,
}

impl CellValueCollector {
    /// # Errors
    ///
    /// `RowCountOutOfRange` unless `1 <= row_count <= MAX_RECORDS`, or
    /// `InvalidFieldName` if `fields` carries a blank name.
    pub fn new(fields: &FieldSpec, row_count: usize) -> Result<Self> {
        Self::with_limit(fields, row_count, MAX_RECORDS)
    }

    /// Like [`CellValueCollector::new`] with a tighter record bound.
    /// `max_rows` is capped at [`MAX_RECORDS`].
    ///
    /// # Errors
    ///
    /// `RowCountOutOfRange` unless `1 <= row_count <= max_rows`.
    pub fn with_limit(fields: &FieldSpec, row_count: usize, max_rows: usize) -> Result<Self> {
        fields.validate()?;
        check_row_count(row_count, max_rows.min(MAX_RECORDS))?;
        Ok(Self {
            names: fields.names().to_vec(),
            row_count,
            cells: vec![vec![String::new(); row_count]; fields.count()],
        })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Store the value typed for `field` (0-based position) in record `row`.
    ///
    /// # Errors
    ///
    /// `CellOutOfRange` when either coordinate is past the grid.
    pub fn set(&mut self, row: usize, field: usize, value: impl Into<String>) -> Result<()> {
        let cell = self
            .cells
            .get_mut(field)
            .and_then(|col| col.get_mut(row))
            .ok_or(ValidationError::CellOutOfRange { row, field })?;
        *cell = value.into();
        Ok(())
    }

    /// Current value of a cell.
    pub fn get(&self, row: usize, field: usize) -> Option<&str> {
        self.cells
            .get(field)
            .and_then(|col| col.get(row))
            .map(String::as_str)
    }

    /// Ask `supplier` for every cell in record-major order. `None` leaves the cell as it is.
    pub fn fill_with<F>(&mut self, mut supplier: F)
    where
        F: FnMut(usize, &str) -> Option<String>,
    {
        for row in 0..self.row_count {
            for (name, col) in self.names.iter().zip(self.cells.iter_mut()) {
                if let Some(value) = supplier(row, name.as_str())
                    && let Some(cell) = col.get_mut(row)
                {
                    *cell = value;
                }
            }
        }
    }

    pub fn finish(self) -> RecordSpec {
        RecordSpec {
            row_count: self.row_count,
            fields: self.names.into_iter().zip(self.cells).collect(),
        }
    }
}

/// Collect every cell of a `row_count`-record dataset from `supplier`, which is
/// called with the record index and field name. Unsupplied cells are empty text.
///
/// # Errors
///
/// Same as [`CellValueCollector::new`].
pub fn collect_records<F>(fields: &FieldSpec, row_count: usize, supplier: F) -> Result<RecordSpec>
where
    F: FnMut(usize, &str) -> Option<String>,
{
    let mut collector = CellValueCollector::new(fields, row_count)?;
    collector.fill_with(supplier);
    Ok(collector.finish())
}

pub(crate) fn check_row_count(row_count: usize, max: usize) -> Result<()> {
    if (1..=max).contains(&row_count) {
        Ok(())
    } else {
        Err(ValidationError::RowCountOutOfRange {
            requested: row_count,
            max,
        }
        .into())
    }
}
