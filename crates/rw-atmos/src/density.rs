//! Air density ratio and density altitude.

use rw_core::units::constants::{
    G0_MPS2, LAPSE_RATE_K_PER_M, P_STD_INHG, R_DRY_AIR, T0_K, T_STD_F,
};
use rw_core::units::{fahrenheit_to_kelvin, metres_to_feet};
use serde::{Deserialize, Serialize};

/// Affine correction applied to the standard-atmosphere altitude so it matches
/// the reference racing spreadsheet: `ft = scale · physical_ft + offset_ft`.
///
/// These are fitted values, not physical constants. They are kept separate from
/// the atmosphere formula so a recalibration only touches this pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityAltitudeCalibration {
    pub scale: f64,
    pub offset_ft: f64,
}

impl DensityAltitudeCalibration {
    pub const REFERENCE: Self = Self {
        scale: 0.98778,
        offset_ft: 15.819,
    };

    /// No correction: the raw ICAO altitude in feet.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset_ft: 0.0,
    };

    pub fn apply(&self, physical_ft: f64) -> f64 {
        self.scale * physical_ft + self.offset_ft
    }
}

impl Default for DensityAltitudeCalibration {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Air density as a percentage of the 29.92 inHg / 60 °F reference.
///
/// Dry-air partial pressure over absolute temperature stands in for density:
/// `((P − e) / T_K) / (29.92 / T_std_K) · 100`.
pub fn air_density_ratio_pct(temp_f: f64, abs_pressure_inhg: f64, vapor_pressure_inhg: f64) -> f64 {
    let t_k = fahrenheit_to_kelvin(temp_f);
    let t_std_k = fahrenheit_to_kelvin(T_STD_F);
    ((abs_pressure_inhg - vapor_pressure_inhg) / t_k) / (P_STD_INHG / t_std_k) * 100.0
}

/// Exponent of the ICAO density/altitude relation, `g / (R·L) − 1`.
pub fn density_exponent() -> f64 {
    G0_MPS2 / (R_DRY_AIR * LAPSE_RATE_K_PER_M) - 1.0
}

/// Altitude [m] in the ICAO troposphere whose density ratio is `ratio`.
///
/// `ratio <= 0` or anything that makes the fractional power undefined yields `NaN`.
pub fn standard_atmosphere_altitude_m(ratio: f64) -> f64 {
    (T0_K / LAPSE_RATE_K_PER_M) * (1.0 - ratio.powf(1.0 / density_exponent()))
}

/// Calibrated density altitude [ft] from an ADR percentage.
pub fn density_altitude_ft(adr_pct: f64, calibration: &DensityAltitudeCalibration) -> f64 {
    let h_m = standard_atmosphere_altitude_m(adr_pct / 100.0);
    calibration.apply(metres_to_feet(h_m))
}
