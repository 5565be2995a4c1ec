//! Parametric sweeps for tune-up tables.
//!
//! Holds two inputs fixed and steps the third across a range, running the
//! pipeline at each point. Used to show how ADR or correction would move if the
//! temperature, humidity or barometer changed before the next round.

use crate::density::DensityAltitudeCalibration;
use crate::error::{AtmosError, AtmosResult};
use crate::pipeline::{Inputs, RawOutput, compute_racing_weather_with};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which input a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepVariable {
    /// Dry-bulb temperature [°F]
    Temperature,
    /// Relative humidity [%]
    Humidity,
    /// Absolute pressure [inHg]
    Pressure,
}

impl SweepVariable {
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°F",
            Self::Humidity => "%",
            Self::Pressure => "inHg",
        }
    }

    /// Copy of `base` with this variable replaced by `value`.
    pub fn apply(&self, base: Inputs, value: f64) -> Inputs {
        match self {
            Self::Temperature => Inputs {
                temp_f: value,
                ..base
            },
            Self::Humidity => Inputs {
                humidity_pct: value,
                ..base
            },
            Self::Pressure => Inputs {
                abs_pressure_inhg: value,
                ..base
            },
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Humidity => write!(f, "Humidity"),
            Self::Pressure => write!(f, "Pressure"),
        }
    }
}

/// Linear sweep of one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    pub variable: SweepVariable,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl SweepDefinition {
    pub fn new(
        variable: SweepVariable,
        start: f64,
        end: f64,
        num_points: usize,
    ) -> AtmosResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(AtmosError::InvalidSweep {
                reason: "bounds must be finite".to_string(),
            });
        }

        if num_points < 2 {
            return Err(AtmosError::InvalidSweep {
                reason: "sweep must have at least 2 points".to_string(),
            });
        }

        if (start - end).abs() < 1e-12 {
            return Err(AtmosError::InvalidSweep {
                reason: "start and end values must be different".to_string(),
            });
        }

        Ok(Self {
            variable,
            start,
            end,
            num_points,
        })
    }

    /// Evenly spaced values from `start` to `end`, endpoint exact.
    pub fn generate_points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let mut points = Vec::with_capacity(self.num_points);
        let delta = (self.end - self.start) / (self.num_points - 1) as f64;

        for i in 0..self.num_points {
            points.push(self.start + i as f64 * delta);
        }

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} {} ({} points)",
            self.variable,
            self.start,
            self.end,
            self.variable.unit(),
            self.num_points
        )
    }
}

/// Run the unchecked pipeline at every sweep point.
pub fn run_sweep(
    base: Inputs,
    sweep: &SweepDefinition,
    calibration: &DensityAltitudeCalibration,
) -> Vec<RawOutput> {
    sweep
        .generate_points()
        .into_iter()
        .map(|value| compute_racing_weather_with(sweep.variable.apply(base, value), calibration))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::new(SweepVariable::Humidity, 0.0, 100.0, 5).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 0.0).abs() < 1e-9);
        assert!((points[2] - 50.0).abs() < 1e-9);
        assert_eq!(points[4], 100.0);
    }

    #[test]
    fn reject_invalid_point_count() {
        let result = SweepDefinition::new(SweepVariable::Temperature, 40.0, 90.0, 1);
        assert!(matches!(result, Err(AtmosError::InvalidSweep { .. })));
    }

    #[test]
    fn reject_identical_bounds() {
        let result = SweepDefinition::new(SweepVariable::Pressure, 29.0, 29.0, 5);
        assert!(result.is_err());
    }

    #[test]
    fn reject_non_finite_bounds() {
        let result = SweepDefinition::new(SweepVariable::Pressure, 29.0, f64::NAN, 5);
        assert!(result.is_err());
    }

    #[test]
    fn sweep_only_varies_selected_input() {
        let base = Inputs::new(80.0, 50.0, 28.9);
        let sweep = SweepDefinition::new(SweepVariable::Pressure, 28.0, 30.0, 3).unwrap();
        let rows = run_sweep(base, &sweep, &DensityAltitudeCalibration::REFERENCE);

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.inputs.temp_f, 80.0);
            assert_eq!(row.inputs.humidity_pct, 50.0);
        }
        assert_eq!(rows[2].inputs.abs_pressure_inhg, 30.0);
        // Same temperature and humidity: vapor pressure is constant.
        assert_eq!(rows[0].vapor_pressure_inhg, rows[2].vapor_pressure_inhg);
        assert!(rows[0].adr_pct < rows[1].adr_pct);
        assert!(rows[1].adr_pct < rows[2].adr_pct);
    }

    #[test]
    fn display_mentions_unit() {
        let sweep = SweepDefinition::new(SweepVariable::Temperature, 40.0, 90.0, 6).unwrap();
        assert_eq!(sweep.to_string(), "Sweep Temperature from 40 to 90 °F (6 points)");
    }
}
