//! End-to-end "Generate" actions.
//!
//! Each flow assembles a table, summarizes it and serializes it for download in
//! one synchronous call. Any failure aborts the whole flow and nothing is
//! returned but the error.

use crate::builder::{self, AssemblyWarning, RecordSpec};
use crate::catalog::{DatasetId, DemoCatalog, load_source_table};
use crate::config::GeneratorSettings;
use crate::error::{Result, ValidationError};
use crate::export::{DownloadPayload, PayloadKind};
use crate::sampler::{self, SampleSpec};
use crate::summary::{DatasetSummary, summarize_with};
use crate::table::{SourceTable, Table};
use chrono::{DateTime, Utc};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Everything the caller shows after one successful generation.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub kind: PayloadKind,
    pub table: Table,
    pub summary: DatasetSummary,
    pub payload: DownloadPayload,
    pub warnings: Vec<AssemblyWarning>,
    /// Shape of the whole dataset when the table was drawn from a larger one.
    pub source_shape: Option<(usize, usize)>,
    pub generated_at: DateTime<Utc>,
    #[serde(with = "duration_serde", rename = "generation_duration")]
    pub duration: Duration,
}

mod duration_serde {
    use serde::{Serializer, ser::SerializeStruct as _};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Duration", 2)?;
        state.serialize_field("secs", &duration.as_secs())?;
        state.serialize_field("nanos", &duration.subsec_nanos())?;
        state.end()
    }
}

/// Seeded generator when settings fix a seed, OS entropy otherwise.
pub fn make_rng(settings: &GeneratorSettings) -> StdRng {
    match settings.sample_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Load the dataset the automatic generator samples from.
///
/// # Errors
///
/// `ExternalError::SourceUnavailable` when the file cannot be read.
pub fn load_default_source(settings: &GeneratorSettings) -> Result<SourceTable> {
    load_source_table(&settings.source_path())
}

/// Sample rows of the selected columns from `source`.
///
/// # Errors
///
/// Any sampling validation error; see [`sampler::sample`].
pub fn generate_auto_dataset(
    source: &SourceTable,
    spec: &SampleSpec,
    settings: &GeneratorSettings,
) -> Result<GenerationReport> {
    let start = Instant::now();
    let mut rng = make_rng(settings);
    let table = sampler::sample(source.table(), spec, &mut rng)?;
    finish(table, PayloadKind::Sampled, Vec::new(), None, settings, start)
}

/// Build a dataset from typed-in records.
///
/// # Errors
///
/// `RowCountOutOfRange` when the records exceed `settings.builder_max_rows`,
/// otherwise any error from [`builder::assemble`].
pub fn generate_custom_dataset(
    records: &RecordSpec,
    settings: &GeneratorSettings,
) -> Result<GenerationReport> {
    let start = Instant::now();
    let max = settings.builder_max_rows.min(builder::MAX_RECORDS);
    if records.row_count() > max {
        return Err(ValidationError::RowCountOutOfRange {
            requested: records.row_count(),
            max,
        }
        .into());
    }

    let assembled = builder::assemble(records)?;
    finish(
        assembled.table,
        PayloadKind::Custom,
        assembled.warnings,
        None,
        settings,
        start,
    )
}

/// Pass a bundled dataset through unchanged.
///
/// # Errors
///
/// `ExternalError::SourceUnavailable` when the dataset file cannot be read.
pub fn generate_catalog_dataset(
    catalog: &DemoCatalog,
    id: DatasetId,
    settings: &GeneratorSettings,
) -> Result<GenerationReport> {
    let start = Instant::now();
    let source = catalog.load(id)?;
    finish(
        source.table().clone(),
        PayloadKind::Catalog,
        Vec::new(),
        None,
        settings,
        start,
    )
}

/// Sample selected columns from a bundled dataset, reporting the full dataset's shape too.
///
/// # Errors
///
/// Load failures or sampling validation errors.
pub fn sample_catalog_dataset(
    catalog: &DemoCatalog,
    id: DatasetId,
    spec: &SampleSpec,
    settings: &GeneratorSettings,
) -> Result<GenerationReport> {
    let start = Instant::now();
    let source = catalog.load(id)?;
    let mut rng = make_rng(settings);
    let table = sampler::sample(source.table(), spec, &mut rng)?;
    finish(
        table,
        PayloadKind::Sampled,
        Vec::new(),
        Some(source.table().shape()),
        settings,
        start,
    )
}

fn finish(
    table: Table,
    kind: PayloadKind,
    warnings: Vec<AssemblyWarning>,
    source_shape: Option<(usize, usize)>,
    settings: &GeneratorSettings,
    start: Instant,
) -> Result<GenerationReport> {
    let summary = summarize_with(&table, settings.preview_rows);
    let payload = DownloadPayload::for_table(&table, kind)?;
    let duration = start.elapsed();

    tracing::info!(
        kind = ?kind,
        rows = table.row_count(),
        columns = table.column_count(),
        warnings = warnings.len(),
        bytes = payload.bytes.len(),
        elapsed_ms = duration.as_millis(),
        "Generated dataset"
    );

    Ok(GenerationReport {
        kind,
        table,
        summary,
        payload,
        warnings,
        source_shape,
        generated_at: Utc::now(),
        duration,
    })
}
