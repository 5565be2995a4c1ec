//! Dew point by inversion of the saturation vapor pressure fit.

use crate::vapor::saturation_vapor_pressure_inhg;
use rw_core::{Bracket, bisect_fixed};

/// Temperature search bracket [°F].
pub const DEW_POINT_BRACKET_F: Bracket = Bracket::new(-60.0, 140.0);

/// Bisection halvings. Fixed so the result is reproducible.
pub const DEW_POINT_ITERATIONS: usize = 80;

/// Temperature [°F] at which saturation vapor pressure equals `vapor_pressure_inhg`.
///
/// No closed-form inverse of the cubic is used; the polynomial is bisected over
/// [`DEW_POINT_BRACKET_F`] for exactly [`DEW_POINT_ITERATIONS`] steps. Targets
/// below `pd(-60)` or above `pd(140)` converge to the nearest bracket edge
/// without error.
pub fn dew_point_f(vapor_pressure_inhg: f64) -> f64 {
    bisect_fixed(
        saturation_vapor_pressure_inhg,
        vapor_pressure_inhg,
        DEW_POINT_BRACKET_F,
        DEW_POINT_ITERATIONS,
    )
}
