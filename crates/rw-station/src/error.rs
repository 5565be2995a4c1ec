//! Station extraction errors.

use crate::units::UnitError;
use thiserror::Error;

pub type StationResult<T> = Result<T, StationError>;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("Payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized payload shape: {reason}")]
    UnrecognizedShape { reason: String },

    #[error("Missing {field} (looked for: {})", .tried.join(", "))]
    MissingField {
        field: &'static str,
        tried: Vec<String>,
    },

    #[error("Field '{key}' for {field} is not numeric: {found}")]
    NotNumeric {
        field: &'static str,
        key: String,
        found: String,
    },

    #[error("Invalid observation timestamp '{found}'")]
    InvalidTimestamp { found: String },

    #[error("Observation is {age_s}s old (max {max_age_s}s)")]
    Stale { age_s: i64, max_age_s: i64 },

    #[error(transparent)]
    Unit(#[from] UnitError),
}
