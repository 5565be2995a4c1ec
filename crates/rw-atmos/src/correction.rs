//! Standard correction factor.

use rw_core::units::constants::P_STD_INHG;
use rw_core::units::fahrenheit_to_rankine;
use serde::{Deserialize, Serialize};

/// Rankine temperature of the standard day (60 °F).
pub const T_STD_RANKINE: f64 = 519.7;

/// Exponent of the temperature sub-factor.
pub const TEMPERATURE_EXPONENT: f64 = 0.50317;

/// Multiplicative correction and its three sub-factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactors {
    /// Temperature factor.
    pub tf: f64,
    /// Humidity factor.
    pub hf: f64,
    /// Barometric factor.
    pub bf: f64,
    /// `tf · hf · bf`
    pub correction: f64,
}

pub fn temperature_factor(temp_f: f64) -> f64 {
    (fahrenheit_to_rankine(temp_f) / T_STD_RANKINE).powf(TEMPERATURE_EXPONENT)
}

/// `P / (P − e)`; infinite when `P == e`.
pub fn humidity_factor(abs_pressure_inhg: f64, vapor_pressure_inhg: f64) -> f64 {
    abs_pressure_inhg / (abs_pressure_inhg - vapor_pressure_inhg)
}

pub fn barometric_factor(abs_pressure_inhg: f64) -> f64 {
    P_STD_INHG / abs_pressure_inhg
}

pub fn correction_factors(
    temp_f: f64,
    abs_pressure_inhg: f64,
    vapor_pressure_inhg: f64,
) -> CorrectionFactors {
    let tf = temperature_factor(temp_f);
    let hf = humidity_factor(abs_pressure_inhg, vapor_pressure_inhg);
    let bf = barometric_factor(abs_pressure_inhg);
    CorrectionFactors {
        tf,
        hf,
        bf,
        correction: tf * hf * bf,
    }
}
