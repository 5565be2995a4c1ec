//! Derivation pipeline: station inputs to racing weather metrics.

use crate::correction::correction_factors;
use crate::density::{DensityAltitudeCalibration, air_density_ratio_pct, density_altitude_ft};
use crate::dew_point::dew_point_f;
use crate::error::{AtmosError, AtmosResult};
use crate::grains::humidity_grains;
use crate::vapor::{saturation_vapor_pressure_inhg, vapor_pressure_from_saturation};
use rw_core::ensure_finite;
use serde::{Deserialize, Serialize};

/// Raw station readings.
///
/// No range is enforced. For finite grains, ADR and humidity factor the station
/// pressure must exceed the vapor pressure derived from the other two fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Dry-bulb temperature [°F].
    pub temp_f: f64,
    /// Relative humidity [%], nominally 0..=100.
    pub humidity_pct: f64,
    /// Absolute (station) pressure [inHg].
    pub abs_pressure_inhg: f64,
}

impl Inputs {
    pub fn new(temp_f: f64, humidity_pct: f64, abs_pressure_inhg: f64) -> Self {
        Self {
            temp_f,
            humidity_pct,
            abs_pressure_inhg,
        }
    }
}

/// Everything derived from one [`Inputs`] triple, intermediates included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawOutput {
    pub inputs: Inputs,
    /// Saturation vapor pressure from the temperature-only fit [inHg].
    pub pd_value: f64,
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

impl RawOutput {
    /// Derived values with their field names, in pipeline order.
    pub fn named_values(&self) -> [(&'static str, f64); 10] {
        [
            ("pd_value", self.pd_value),
            ("vapor_pressure_inhg", self.vapor_pressure_inhg),
            ("dew_point_f", self.dew_point_f),
            ("humidity_grains", self.humidity_grains),
            ("adr_pct", self.adr_pct),
            ("density_alt_ft", self.density_alt_ft),
            ("tf", self.tf),
            ("hf", self.hf),
            ("bf", self.bf),
            ("correction", self.correction),
        ]
    }

    /// First derived value that is `NaN` or infinite.
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        self.named_values()
            .into_iter()
            .find(|(_, v)| !v.is_finite())
    }

    /// True when every derived value is finite.
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }
}

/// Run the pipeline with the reference density-altitude calibration.
pub fn compute_racing_weather(inputs: Inputs) -> RawOutput {
    compute_racing_weather_with(inputs, &DensityAltitudeCalibration::REFERENCE)
}

/// Run the pipeline with an explicit density-altitude calibration.
///
/// Never fails. Degenerate inputs produce `NaN` or infinity in the affected fields.
pub fn compute_racing_weather_with(
    inputs: Inputs,
    calibration: &DensityAltitudeCalibration,
) -> RawOutput {
    let Inputs {
        temp_f,
        humidity_pct,
        abs_pressure_inhg: p,
    } = inputs;

    let pd_value = saturation_vapor_pressure_inhg(temp_f);
    let e = vapor_pressure_from_saturation(pd_value, humidity_pct);
    let dew_point = dew_point_f(e);
    let grains = humidity_grains(p, e);
    let adr_pct = air_density_ratio_pct(temp_f, p, e);
    let density_alt_ft = density_altitude_ft(adr_pct, calibration);
    let factors = correction_factors(temp_f, p, e);

    RawOutput {
        inputs,
        pd_value,
        vapor_pressure_inhg: e,
        dew_point_f: dew_point,
        humidity_grains: grains,
        adr_pct,
        density_alt_ft,
        tf: factors.tf,
        hf: factors.hf,
        bf: factors.bf,
        correction: factors.correction,
    }
}

/// Validate preconditions, then run the pipeline.
///
/// Rejects non-finite inputs and station pressure at or below vapor pressure
/// instead of letting `NaN`/infinity through. Any other degenerate result (for
/// example a temperature below absolute zero) is reported as
/// [`AtmosError::DegenerateOutput`]. Results are otherwise identical to
/// [`compute_racing_weather_with`].
pub fn compute_racing_weather_checked(
    inputs: Inputs,
    calibration: &DensityAltitudeCalibration,
) -> AtmosResult<RawOutput> {
    ensure_finite(inputs.temp_f, "temp_f")?;
    ensure_finite(inputs.humidity_pct, "humidity_pct")?;
    ensure_finite(inputs.abs_pressure_inhg, "abs_pressure_inhg")?;

    let e = vapor_pressure_from_saturation(
        saturation_vapor_pressure_inhg(inputs.temp_f),
        inputs.humidity_pct,
    );
    if inputs.abs_pressure_inhg <= e {
        return Err(AtmosError::PressureBelowVapor {
            pressure_inhg: inputs.abs_pressure_inhg,
            vapor_inhg: e,
        });
    }

    let out = compute_racing_weather_with(inputs, calibration);
    if let Some((field, value)) = out.first_non_finite() {
        return Err(AtmosError::DegenerateOutput { field, value });
    }
    Ok(out)
}
