//! Reading and writing CSV files.
//!
//! Reading goes through polars with schema inference switched off, so every
//! value is kept as the literal text in the file. Writing uses
//! [`crate::export::to_csv_bytes`] so files on disk match download payloads byte
//! for byte.

use crate::error::{Result, ResultExt as _};
use crate::export::to_csv_bytes;
use crate::table::Table;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

/// Parse CSV text with a header row into a [`Table`]. Missing fields become empty text.
///
/// # Errors
///
/// Fails on malformed CSV (polars parse error) or duplicate header names.
pub fn read_csv(bytes: Vec<u8>) -> Result<Table> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    Table::from_dataframe(&df)
}

/// Read a CSV file from disk.
///
/// # Errors
///
/// I/O failure or anything [`read_csv`] rejects.
pub fn load_table(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    read_csv(bytes).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write `table` as CSV, creating parent directories as needed.
///
/// # Errors
///
/// I/O or serialization failure.
pub fn save_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = to_csv_bytes(table)?;
    std::fs::write(path, bytes).context("Failed to write CSV file")
}
