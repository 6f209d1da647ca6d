//! Logging setup for the dataset generator.
//!
//! Logs go to the console and to daily rotating files in the per-user data
//! directory. A second file keeps only warnings and errors, which is where
//! duplicate-field warnings and unavailable sources end up.
//!
//! ```no_run
//! use dataset_generator::logging;
//!
//! logging::init()?;
//! tracing::info!("Generator started");
//! # Ok::<(), dataset_generator::error::GeneratorError>(())
//! ```

use crate::config::APP_DIR_NAME;
use crate::error::{GeneratorError, Result, ResultExt as _};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

const LOG_FILE_PREFIX: &str = "generator";
const ERROR_FILE_PREFIX: &str = "error";
const MAX_LOG_FILES: usize = 10;

/// Platform data directory joined with `dataset_generator/logs`.
///
/// # Errors
///
/// When the platform has no data directory or the folder cannot be created.
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir()
        .ok_or_else(|| GeneratorError::Config("Failed to determine data directory".to_owned()))?;
    let log_dir = base_dir.join(APP_DIR_NAME).join("logs");
    ensure_dir(&log_dir)?;
    Ok(log_dir)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    Ok(())
}

fn appender(dir: &Path, prefix: &str) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(MAX_LOG_FILES)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| GeneratorError::Config(format!("Failed to create {prefix} log appender: {e}")))
}

/// Install the global subscriber, writing files under the platform log directory.
///
/// # Errors
///
/// See [`init_in`].
pub fn init() -> Result<()> {
    init_in(&get_log_dir()?)
}

/// Install the global subscriber, writing files under `log_dir`.
///
/// `RUST_LOG` overrides the default `info` filter.
///
/// # Errors
///
/// When the directory or appenders cannot be created, or a global subscriber
/// is already installed.
pub fn init_in(log_dir: &Path) -> Result<()> {
    ensure_dir(log_dir)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .compact();

    let all_logs_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(appender(log_dir, LOG_FILE_PREFIX)?);

    let error_logs_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(appender(log_dir, ERROR_FILE_PREFIX)?)
        .with_filter(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(all_logs_layer)
        .with(error_logs_layer)
        .try_init()
        .map_err(|e| GeneratorError::Config(format!("Logging already initialized: {e}")))?;

    tracing::info!(log_dir = %log_dir.display(), "Logging initialized");
    Ok(())
}

/// Today's general log file under `log_dir`.
pub fn current_log_path(log_dir: &Path) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    log_dir.join(format!("{LOG_FILE_PREFIX}.{today}.log"))
}

/// Today's warnings-and-errors log file under `log_dir`.
pub fn current_error_log_path(log_dir: &Path) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    log_dir.join(format!("{ERROR_FILE_PREFIX}.{today}.log"))
}
