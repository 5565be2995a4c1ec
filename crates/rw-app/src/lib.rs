//! Shared application service layer for racewx.
//!
//! Centralizes configuration, station ingestion and history queries so the CLI
//! stays a thin shell over these calls.

pub mod config;
pub mod error;
pub mod ingest_service;
pub mod query;

// Re-export key types for convenience
pub use config::{
    CONFIG_FILE_NAME, Config, HistoryConfig, StationConfig, load_config, validate_config,
};
pub use error::{AppError, AppResult};
pub use ingest_service::{
    IngestRequest, IngestResponse, compute_inputs, ingest_file, ingest_payload, open_history,
};
pub use query::{HistorySummary, MetricStats, extract_series, summarize};
