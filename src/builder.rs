//! Custom dataset construction from user-entered field names and cell values.
//!
//! The builder runs in three steps, each taking explicit parameter objects:
//!
//! 1. [`collect_field_names`] turns a field count plus any user overrides into a
//!    [`FieldSpec`]. Untouched names keep their `Field Name {n}` placeholder.
//! 2. [`CellValueCollector`] gathers one text value per record and field into a
//!    [`RecordSpec`]. Cells never filled in stay empty.
//! 3. [`assemble`] turns the record spec into a [`Table`](crate::table::Table).
//!
//! # Duplicate field names
//!
//! Fields are keyed by name when the table is assembled. If two fields share a
//! name, the column keeps the position of the first one and the values of the
//! last one; the earlier values are dropped. This is reported through
//! [`AssemblyWarning::DuplicateFieldName`] rather than as an error.
//!
//! ```
//! use dataset_generator::builder::{self, CellValueCollector};
//!
//! let fields = builder::collect_field_names(2, [(0, "Name"), (1, "Age")])?;
//! let mut cells = CellValueCollector::new(&fields, 2)?;
//! cells.set(0, 0, "Alice")?;
//! cells.set(0, 1, "30")?;
//! cells.set(1, 0, "Bob")?;
//! cells.set(1, 1, "25")?;
//!
//! let assembled = builder::assemble(&cells.finish())?;
//! assert_eq!(assembled.table.row(1), Some(vec!["Bob", "25"]));
//! assert!(assembled.warnings.is_empty());
//! # Ok::<(), dataset_generator::error::GeneratorError>(())
//! ```

pub mod assembler;
pub mod fields;
pub mod records;
pub mod warnings;

pub use assembler::{AssembledTable, assemble, assemble_columns};
pub use fields::{FieldSpec, MAX_FIELDS, collect_field_names, default_field_name};
pub use records::{CellValueCollector, MAX_RECORDS, RecordSpec, collect_records};
pub use warnings::AssemblyWarning;
