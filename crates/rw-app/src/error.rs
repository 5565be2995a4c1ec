//! Error types for the rw-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Failed to read payload file: {path}")]
    PayloadFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Station error: {0}")]
    Station(String),

    #[error("Derivation error: {0}")]
    Atmos(String),

    #[error("History error: {0}")]
    History(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rw-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<rw_station::StationError> for AppError {
    fn from(err: rw_station::StationError) -> Self {
        AppError::Station(err.to_string())
    }
}

impl From<rw_station::UnitError> for AppError {
    fn from(err: rw_station::UnitError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<rw_atmos::AtmosError> for AppError {
    fn from(err: rw_atmos::AtmosError) -> Self {
        AppError::Atmos(err.to_string())
    }
}

impl From<rw_history::HistoryError> for AppError {
    fn from(err: rw_history::HistoryError) -> Self {
        AppError::History(err.to_string())
    }
}
