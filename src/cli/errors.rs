//! Launcher errors.

use thiserror::Error;

use crate::settings::SettingsError;

/// Result type for the launcher
pub type CliResult<T> = Result<T, CliError>;

/// Failures that abort startup.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings file could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(#[from] SettingsError),

    /// Runtime construction or socket binding failed.
    #[error("startup error: {0}")]
    Boot(#[from] std::io::Error),
}
