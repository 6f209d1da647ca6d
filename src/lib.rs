//! # Dataset Generator
//!
//! Produces small tabular datasets for machine-learning practice. A dataset is
//! either sampled with replacement from an existing table, assembled from
//! typed-in field names and values, or taken from the bundled demo catalog.
//! Every result comes with a summary (shape, column kinds, statistics and
//! previews) and a CSV payload ready to offer as a download.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dataset_generator::{config, flows, sampler::{ColumnSelection, SampleSpec}};
//!
//! # fn example() -> dataset_generator::error::Result<()> {
//! let settings = config::load_app_settings();
//! let source = flows::load_default_source(&settings)?;
//!
//! let spec = SampleSpec::new(ColumnSelection::new(["x", "y"]), 100)?;
//! let report = flows::generate_auto_dataset(&source, &spec, &settings)?;
//! println!("{} -> {}", report.payload.file_name, report.payload.data_uri);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`table`]: the text-valued table every stage passes around
//! - [`sampler`]: column selection and row sampling with replacement
//! - [`builder`]: field names, cell values and table assembly
//! - [`summary`]: shape, kinds, descriptive statistics and previews
//! - [`export`]: CSV serialization and `data:` URI encoding
//! - [`catalog`]: bundled demo datasets
//! - [`flows`]: the end-to-end generate actions
//! - [`config`], [`logging`], [`error`]: settings, tracing setup and error types

#![warn(clippy::all, rust_2018_idioms)]

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod flows;
pub mod io;
pub mod logging;
pub mod sampler;
pub mod summary;
pub mod table;
