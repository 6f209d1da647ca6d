//! Error taxonomy for dataset generation.
//!
//! Two kinds of failure matter to callers:
//!
//! - [`ValidationError`]: the supplied parameters break a stated constraint
//!   (empty selection, unknown column, out-of-range count, blank field name,
//!   mismatched row counts). Always recoverable; the attempt is aborted and no
//!   partial table is produced.
//! - [`ExternalError`]: a bundled dataset could not be read. Surfaced as-is,
//!   never retried.
//!
//! Everything else (I/O, polars, csv, settings JSON) is folded into
//! [`GeneratorError`] through `From` conversions so `?` works across modules:
//!
//! ```
//! use dataset_generator::error::{GeneratorError, ValidationError};
//!
//! fn describe(err: &GeneratorError) -> String {
//!     match err {
//!         GeneratorError::Validation(ValidationError::EmptySelection) => {
//!             "pick at least one column".to_owned()
//!         }
//!         other => other.to_string(),
//!     }
//! }
//! # assert_eq!(describe(&ValidationError::EmptySelection.into()), "pick at least one column");
//! ```
//!
//! UI shells that need plain strings can rely on `From<GeneratorError> for String`.

use std::fmt;

/// A parameter supplied by the caller violates a constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No columns were selected for sampling.
    EmptySelection,

    /// A selected column does not exist in the source table.
    UnknownColumn(String),

    /// The source table has no rows to draw from.
    EmptySource,

    /// Requested row count outside `1..=max`.
    RowCountOutOfRange { requested: usize, max: usize },

    /// Requested field count outside `1..=max`.
    FieldCountOutOfRange { requested: usize, max: usize },

    /// Field name at this (0-based) position is blank after trimming.
    InvalidFieldName(usize),

    /// Tried to address a field position that does not exist.
    FieldIndexOutOfRange { index: usize, count: usize },

    /// Tried to address a cell outside the collected grid.
    CellOutOfRange { row: usize, field: usize },

    /// A column's value sequence does not have the expected length.
    RowCountMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns of one table share a name.
    DuplicateColumn(String),

    /// No bundled dataset carries this name.
    UnknownDataset(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "Please select at least one field"),
            Self::UnknownColumn(name) => write!(f, "Column '{name}' is not in the source dataset"),
            Self::EmptySource => write!(f, "The source dataset has no rows to sample from"),
            Self::RowCountOutOfRange { requested, max } => {
                write!(f, "Number of rows must be between 1 and {max}, got {requested}")
            }
            Self::FieldCountOutOfRange { requested, max } => {
                write!(f, "Number of fields must be between 1 and {max}, got {requested}")
            }
            Self::InvalidFieldName(index) => {
                write!(f, "Field Name {} must not be empty", index + 1)
            }
            Self::FieldIndexOutOfRange { index, count } => {
                write!(f, "Field position {index} is out of range for {count} fields")
            }
            Self::CellOutOfRange { row, field } => {
                write!(f, "No cell at record {} field {}", row + 1, field + 1)
            }
            Self::RowCountMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Field '{field}' has {actual} values but {expected} records were requested"
            ),
            Self::DuplicateColumn(name) => write!(f, "Column '{name}' appears more than once"),
            Self::UnknownDataset(name) => write!(f, "Unknown dataset '{name}'"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A collaborator outside the core failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalError {
    /// The dataset file could not be read or parsed.
    SourceUnavailable { path: String, reason: String },
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { path, reason } => {
                write!(f, "Dataset '{path}' is unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for ExternalError {}

/// Main error type for dataset generation.
#[derive(Debug)]
pub enum GeneratorError {
    /// Caller input violates a constraint.
    Validation(ValidationError),

    /// Bundled dataset could not be loaded.
    External(ExternalError),

    /// I/O errors (settings files, log directories)
    Io(std::io::Error),

    /// Data processing errors (polars, csv)
    DataProcessing(String),

    /// Settings errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl GeneratorError {
    /// Validation failures can be fixed by the user and retried.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation failure carried by this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::External(e) => write!(f, "External error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::External(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for GeneratorError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ExternalError> for GeneratorError {
    fn from(err: ExternalError) -> Self {
        Self::External(err)
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for GeneratorError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<csv::Error> for GeneratorError {
    fn from(err: csv::Error) -> Self {
        Self::DataProcessing(format!("CSV error: {err}"))
    }
}

// UI shells display errors as plain text
impl From<GeneratorError> for String {
    fn from(err: GeneratorError) -> Self {
        err.to_string()
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<GeneratorError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(msg.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

// Validation and external errors keep their variant so callers can still match on them.
fn wrap(msg: String, err: GeneratorError) -> GeneratorError {
    match err {
        GeneratorError::Validation(_) | GeneratorError::External(_) => err,
        other => GeneratorError::Other(format!("{msg}: {other}")),
    }
}
