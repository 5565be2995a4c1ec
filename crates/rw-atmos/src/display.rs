//! Fixed-precision presentation of pipeline output.

use crate::pipeline::RawOutput;
use rw_core::round_to;
use serde::{Deserialize, Serialize};

/// Decimal places per displayed metric.
pub mod precision {
    pub const VAPOR_PRESSURE: u32 = 3;
    pub const DEW_POINT: u32 = 1;
    pub const HUMIDITY_GRAINS: u32 = 1;
    pub const ADR: u32 = 1;
    pub const DENSITY_ALTITUDE: u32 = 0;
    pub const FACTOR: u32 = 4;
}

/// Rounded metrics as shown to the racer and stored in history.
///
/// Rounding is half away from zero. Non-finite values are kept as they are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayReading {
    pub vapor_pressure_inhg: f64,
    pub dew_point_f: f64,
    pub humidity_grains: f64,
    pub adr_pct: f64,
    pub density_alt_ft: f64,
    pub tf: f64,
    pub hf: f64,
    pub bf: f64,
    pub correction: f64,
}

impl DisplayReading {
    pub fn from_raw(raw: &RawOutput) -> Self {
        use precision::*;
        Self {
            vapor_pressure_inhg: round_to(raw.vapor_pressure_inhg, VAPOR_PRESSURE),
            dew_point_f: round_to(raw.dew_point_f, DEW_POINT),
            humidity_grains: round_to(raw.humidity_grains, HUMIDITY_GRAINS),
            adr_pct: round_to(raw.adr_pct, ADR),
            density_alt_ft: round_to(raw.density_alt_ft, DENSITY_ALTITUDE),
            tf: round_to(raw.tf, FACTOR),
            hf: round_to(raw.hf, FACTOR),
            bf: round_to(raw.bf, FACTOR),
            correction: round_to(raw.correction, FACTOR),
        }
    }
}

impl From<&RawOutput> for DisplayReading {
    fn from(raw: &RawOutput) -> Self {
        Self::from_raw(raw)
    }
}
