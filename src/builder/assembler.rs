use super::fields::{check_field_count, duplicate_warnings, validate_names};
use super::records::{MAX_RECORDS, RecordSpec, check_row_count};
use super::warnings::AssemblyWarning;
use crate::error::{Result, ValidationError};
use crate::table::{Table, TableColumn};
use serde::Serialize;
use std::collections::HashMap;

/// A freshly built table plus anything the user should be told about it.
#[derive(Clone, Debug, Serialize)]
pub struct AssembledTable {
    pub table: Table,
    pub warnings: Vec<AssemblyWarning>,
}

/// Assemble the table described by `records`.
///
/// # Errors
///
/// See [`assemble_columns`].
pub fn assemble(records: &RecordSpec) -> Result<AssembledTable> {
    assemble_columns(records.fields(), records.row_count())
}

/// Build a table with one column per `(name, values)` pair, in input order.
///
/// A repeated name does not add a column: the column stays where the name first
/// appeared and takes the values of its last occurrence. Each repeated name and
/// each column with blank cells produces a warning.
///
/// # Errors
///
/// `FieldCountOutOfRange` or `RowCountOutOfRange` for bad counts,
/// `InvalidFieldName` for a blank name, `RowCountMismatch` when a value
/// sequence is not exactly `row_count` long. No table is produced on error.
pub fn assemble_columns(
    fields: &[(String, Vec<String>)],
    row_count: usize,
) -> Result<AssembledTable> {
    check_field_count(fields.len())?;
    check_row_count(row_count, MAX_RECORDS)?;

    let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
    validate_names(&names)?;

    if let Some((name, values)) = fields.iter().find(|(_, v)| v.len() != row_count) {
        return Err(ValidationError::RowCountMismatch {
            field: name.clone(),
            expected: row_count,
            actual: values.len(),
        }
        .into());
    }

    let mut order: Vec<(&str, &[String])> = Vec::with_capacity(fields.len());
    let mut slot_of: HashMap<&str, usize> = HashMap::new();
    for (name, values) in fields {
        match slot_of.get(name.as_str()) {
            Some(&slot) => {
                if let Some(entry) = order.get_mut(slot) {
                    entry.1 = values.as_slice();
                }
            }
            None => {
                slot_of.insert(name.as_str(), order.len());
                order.push((name.as_str(), values.as_slice()));
            }
        }
    }

    let mut warnings = duplicate_warnings(&names);
    for (name, values) in &order {
        let blanks = values.iter().filter(|v| v.trim().is_empty()).count();
        if blanks > 0 {
            warnings.push(AssemblyWarning::BlankCells {
                field: (*name).to_owned(),
                count: blanks,
            });
        }
    }

    let columns = order
        .into_iter()
        .map(|(name, values)| TableColumn::new(name, values.to_vec()))
        .collect();
    let table = Table::new(columns)?;

    for warning in &warnings {
        tracing::warn!(%warning, "Custom dataset assembled with warning");
    }

    Ok(AssembledTable { table, warnings })
}
