//! Bundled demo datasets.
//!
//! The catalog is a fixed lookup table from dataset identifier to a CSV file
//! under the configured data directory. Loading is a plain file read; any
//! failure is reported as [`ExternalError::SourceUnavailable`] and never retried.

use crate::config::GeneratorSettings;
use crate::error::{ExternalError, GeneratorError, Result, ValidationError};
use crate::io::load_table;
use crate::table::SourceTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Binary,
    MultiClass,
}

/// Machine-learning task a bundled dataset is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetTask {
    Classification(ClassKind),
    Regression,
    Clustering,
    Association,
}

impl DatasetTask {
    fn folder(&self) -> &'static str {
        match self {
            Self::Classification(_) => "Classification",
            Self::Regression => "Regression",
            Self::Clustering => "Clustering",
            Self::Association => "Association",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetId {
    HeartDisease,
    Diabetes,
    Iris,
    AcousticFeatures,
    CarPrice,
    Electricity,
    HousePrice,
    Clustered1,
    Clustered2,
    Clustered3,
    Bakery,
    BasketAnalysis,
    Groceries,
}

impl DatasetId {
    pub const ALL: [Self; 13] = [
        Self::HeartDisease,
        Self::Diabetes,
        Self::Iris,
        Self::AcousticFeatures,
        Self::CarPrice,
        Self::Electricity,
        Self::HousePrice,
        Self::Clustered1,
        Self::Clustered2,
        Self::Clustered3,
        Self::Bakery,
        Self::BasketAnalysis,
        Self::Groceries,
    ];

    pub fn task(&self) -> DatasetTask {
        match self {
            Self::HeartDisease | Self::Diabetes => DatasetTask::Classification(ClassKind::Binary),
            Self::Iris | Self::AcousticFeatures => {
                DatasetTask::Classification(ClassKind::MultiClass)
            }
            Self::CarPrice | Self::Electricity | Self::HousePrice => DatasetTask::Regression,
            Self::Clustered1 | Self::Clustered2 | Self::Clustered3 => DatasetTask::Clustering,
            Self::Bakery | Self::BasketAnalysis | Self::Groceries => DatasetTask::Association,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HeartDisease => "Heart Disease Dataset",
            Self::Diabetes => "Diabetes Dataset",
            Self::Iris => "Iris Dataset",
            Self::AcousticFeatures => "Acoustic Features Dataset",
            Self::CarPrice => "Car Price Dataset",
            Self::Electricity => "Electricity Dataset",
            Self::HousePrice => "House Price Dataset",
            Self::Clustered1 => "Sample Dataset 1",
            Self::Clustered2 => "Sample Dataset 2",
            Self::Clustered3 => "Sample Dataset 3",
            Self::Bakery => "Bakery Dataset",
            Self::BasketAnalysis => "Basket Analysis Dataset",
            Self::Groceries => "Groceries Dataset",
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            Self::HeartDisease => "heart_disease_data.csv",
            Self::Diabetes => "diabetes_data.csv",
            Self::Iris => "iris_data.csv",
            Self::AcousticFeatures => "acoustic_features_data.csv",
            Self::CarPrice => "car_price_data.csv",
            Self::Electricity => "electricity_data.csv",
            Self::HousePrice => "house_price_data.csv",
            Self::Clustered1 => "clustered_data_1.csv",
            Self::Clustered2 => "clustered_data_2.csv",
            Self::Clustered3 => "clustered_data_3.csv",
            Self::Bakery => "bakery_data.csv",
            Self::BasketAnalysis => "basket_analysis_data.csv",
            Self::Groceries => "groceries_data.csv",
        }
    }

    /// Location relative to the data directory, e.g.
    /// `Datasets for ML/Regression/car_price_data.csv`.
    pub fn relative_path(&self) -> PathBuf {
        Path::new("Datasets for ML")
            .join(self.task().folder())
            .join(self.file_name())
    }

    /// Datasets offered for `task`, in menu order.
    pub fn for_task(task: DatasetTask) -> Vec<Self> {
        Self::ALL.into_iter().filter(|d| d.task() == task).collect()
    }

    /// # Errors
    ///
    /// `UnknownDataset` when no dataset has this display name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.display_name() == name)
            .ok_or_else(|| ValidationError::UnknownDataset(name.to_owned()).into())
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Read a CSV file into a shared, read-only [`SourceTable`].
///
/// # Errors
///
/// `ExternalError::SourceUnavailable` for any read or parse failure.
pub fn load_source_table(path: &Path) -> Result<SourceTable> {
    match load_table(path) {
        Ok(table) => {
            tracing::info!(
                path = %path.display(),
                rows = table.row_count(),
                columns = table.column_count(),
                "Loaded source dataset"
            );
            Ok(SourceTable::new(table, path.display().to_string()))
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Source dataset unavailable");
            Err(GeneratorError::External(ExternalError::SourceUnavailable {
                path: path.display().to_string(),
                reason: err.to_string(),
            }))
        }
    }
}

/// Bundled datasets rooted at one data directory.
#[derive(Clone, Debug)]
pub struct DemoCatalog {
    root: PathBuf,
}

impl DemoCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(settings.data_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, id: DatasetId) -> PathBuf {
        self.root.join(id.relative_path())
    }

    /// # Errors
    ///
    /// `ExternalError::SourceUnavailable` when the file is missing or unreadable.
    pub fn load(&self, id: DatasetId) -> Result<SourceTable> {
        load_source_table(&self.path_of(id))
    }
}
