//! Atmosphere derivation errors.

use rw_core::CoreError;
use thiserror::Error;

/// Result type for checked derivations.
pub type AtmosResult<T> = Result<T, AtmosError>;

/// Errors raised by the checked pipeline and sweep setup.
///
/// The unchecked pipeline never returns these; it lets `NaN`/infinity propagate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosError {
    /// An input was `NaN` or infinite.
    #[error("Non-finite input {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Station pressure does not exceed vapor pressure, so dry-air partial
    /// pressure is zero or negative.
    #[error(
        "Absolute pressure {pressure_inhg} inHg must exceed vapor pressure {vapor_inhg} inHg"
    )]
    PressureBelowVapor { pressure_inhg: f64, vapor_inhg: f64 },

    /// A derived value came out `NaN` or infinite despite valid-looking inputs.
    #[error("Derived {field} is not finite: {value}")]
    DegenerateOutput { field: &'static str, value: f64 },

    /// Sweep definition rejected.
    #[error("Invalid sweep: {reason}")]
    InvalidSweep { reason: String },
}

impl From<CoreError> for AtmosError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => AtmosError::NonFinite { what, value },
        }
    }
}
