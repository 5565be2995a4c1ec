//! rw-history: rolling reading history and CSV export.

pub mod csv;
pub mod hash;
pub mod store;
pub mod types;

pub use csv::{CSV_HEADER, to_csv};
pub use hash::compute_entry_id;
pub use store::{AppendOutcome, HistoryStore};
pub use types::*;

pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(thiserror::Error, Debug)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}
