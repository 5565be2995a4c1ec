//! rw-atmos: racing weather derivations for racewx.
//!
//! Provides:
//! - Saturation and actual vapor pressure (cubic curve fit, inHg)
//! - Dew point by fixed-iteration inversion of the vapor pressure fit
//! - Humidity grains (grains of water per pound of dry air)
//! - Air density ratio and calibrated density altitude
//! - Standard correction factor and its sub-factors
//! - Display rounding and parametric sweeps
//!
//! # Architecture
//!
//! Every step is a pure function over `f64` and is exposed on its own so it can be
//! tested in isolation. [`compute_racing_weather`] composes them in dependency
//! order and returns a [`RawOutput`] carrying intermediates as well as the
//! headline metrics. The unchecked entry points never fail: degenerate inputs
//! (for instance station pressure equal to vapor pressure) surface as `NaN` or
//! infinity. [`compute_racing_weather_checked`] rejects such inputs up front.
//!
//! # Example
//!
//! ```
//! use rw_atmos::{Inputs, compute_racing_weather};
//!
//! let out = compute_racing_weather(Inputs::new(80.0, 50.0, 28.9));
//! assert!(out.adr_pct > 90.0 && out.adr_pct < 92.0);
//! ```

pub mod correction;
pub mod density;
pub mod dew_point;
pub mod display;
pub mod error;
pub mod grains;
pub mod pipeline;
pub mod sweeps;
pub mod vapor;

// Re-exports for ergonomics
pub use correction::{CorrectionFactors, correction_factors};
pub use density::{DensityAltitudeCalibration, air_density_ratio_pct, density_altitude_ft};
pub use dew_point::dew_point_f;
pub use display::DisplayReading;
pub use error::{AtmosError, AtmosResult};
pub use grains::humidity_grains;
pub use pipeline::{
    Inputs, RawOutput, compute_racing_weather, compute_racing_weather_checked,
    compute_racing_weather_with,
};
pub use sweeps::{SweepDefinition, SweepVariable, run_sweep};
pub use vapor::{saturation_vapor_pressure_inhg, vapor_pressure_inhg};
