use thiserror::Error;

use h5_catalog_lib::{GenerateError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog generation failed
    #[error("{0}")]
    Generate(#[from] GenerateError),

    /// Settings could not be loaded or printed
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
