//! Saturation and actual vapor pressure.

/// Cubic coefficient of the saturation vapor pressure fit.
pub const PD_A3: f64 = 0.000002923426;
/// Quadratic coefficient.
pub const PD_A2: f64 = 0.0002235652;
/// Linear coefficient.
pub const PD_A1: f64 = 0.01366344;
/// Constant term.
pub const PD_A0: f64 = 0.126149;

/// Saturation vapor pressure estimate [inHg] at `temp_f` [°F].
///
/// `pd(T) = 0.000002923426·T³ − 0.0002235652·T² + 0.01366344·T − 0.126149`
///
/// This is a curve fit calibrated against a reference table, not a physical law.
/// It is strictly increasing for all real `T`, but only meaningful over roughly
/// −60 °F to 140 °F.
pub fn saturation_vapor_pressure_inhg(temp_f: f64) -> f64 {
    PD_A3 * temp_f.powf(3.0) - PD_A2 * temp_f.powf(2.0) + PD_A1 * temp_f - PD_A0
}

/// Actual vapor pressure [inHg]: `pd(temp_f) · humidity_pct / 100`.
///
/// Humidity is not clamped; values outside `[0, 100]` propagate.
pub fn vapor_pressure_inhg(temp_f: f64, humidity_pct: f64) -> f64 {
    vapor_pressure_from_saturation(saturation_vapor_pressure_inhg(temp_f), humidity_pct)
}

/// Scale a saturation pressure by relative humidity.
pub fn vapor_pressure_from_saturation(pd_inhg: f64, humidity_pct: f64) -> f64 {
    pd_inhg * humidity_pct / 100.0
}
