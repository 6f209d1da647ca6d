//! CSV serialization and download payloads.
//!
//! A generated table leaves the core as a [`DownloadPayload`]: the CSV bytes
//! (header row first, no index column, RFC 4180 quoting, `\n` line endings)
//! plus the same bytes base64-encoded into a `data:file/csv;base64,...` URI
//! that a browser can offer as a one-click download. Serialization is
//! deterministic: the same table always yields the same bytes.

use crate::error::{GeneratorError, Result};
use crate::table::Table;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

pub const CSV_MEDIA_TYPE: &str = "file/csv";
const DATA_URI_PREFIX: &str = "data:file/csv;base64,";

/// Which generator produced a payload; decides the download file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PayloadKind {
    /// Rows sampled from an existing dataset.
    Sampled,
    /// Dataset typed in field by field.
    Custom,
    /// A bundled dataset passed through unchanged.
    Catalog,
}

impl PayloadKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Sampled => "generated_auto_dataset.csv",
            Self::Custom | Self::Catalog => "generated_dataset.csv",
        }
    }
}

/// Serialize a table to CSV bytes.
///
/// # Errors
///
/// Only if the CSV writer fails, which writing into memory does not do in practice.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| GeneratorError::DataProcessing(format!("Failed to flush CSV: {e}")))
}

/// Wrap bytes as a base64 `data:` URI.
pub fn encode_data_uri(bytes: &[u8]) -> String {
    format!("{DATA_URI_PREFIX}{}", STANDARD.encode(bytes))
}

/// Inverse of [`encode_data_uri`].
///
/// # Errors
///
/// Fails when the prefix is missing or the body is not valid base64.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let body = uri.strip_prefix(DATA_URI_PREFIX).ok_or_else(|| {
        GeneratorError::DataProcessing("Not a base64 CSV data URI".to_owned())
    })?;
    STANDARD
        .decode(body)
        .map_err(|e| GeneratorError::DataProcessing(format!("Invalid base64 payload: {e}")))
}

/// A table ready to hand to the user as a file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DownloadPayload {
    pub file_name: String,
    pub media_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub data_uri: String,
}

impl DownloadPayload {
    /// # Errors
    ///
    /// See [`to_csv_bytes`].
    pub fn for_table(table: &Table, kind: PayloadKind) -> Result<Self> {
        let bytes = to_csv_bytes(table)?;
        Ok(Self {
            file_name: kind.file_name().to_owned(),
            media_type: CSV_MEDIA_TYPE.to_owned(),
            data_uri: encode_data_uri(&bytes),
            bytes,
        })
    }

    /// An HTML anchor that downloads the payload when clicked.
    pub fn html_link(&self, label: &str) -> String {
        format!(
            r#"<a href="{}" download="{}">{label}</a>"#,
            self.data_uri, self.file_name
        )
    }
}

#[cfg(test)]
mod tests;
