// rw-core/src/units.rs
//
// Only the imperial station units are accepted as inputs; SI appears
// internally where the standard atmosphere is defined in metres and kelvin.

/// Feet per metre.
pub const FT_PER_M: f64 = 3.28084;

/// Fahrenheit to kelvin as `(F - 32) * 5/9 + 273.15`.
///
/// The operation order is fixed; the density ratio depends on it.
#[inline]
pub fn fahrenheit_to_kelvin(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0 + 273.15
}

/// Fahrenheit to degrees Rankine using the 459.7 offset of the SAE correction.
#[inline]
pub fn fahrenheit_to_rankine(temp_f: f64) -> f64 {
    459.7 + temp_f
}

#[inline]
pub fn metres_to_feet(m: f64) -> f64 {
    m * FT_PER_M
}

pub mod constants {
    /// Standard gravity [m/s²].
    pub const G0_MPS2: f64 = 9.806_65;
    /// Specific gas constant of dry air [J/(kg·K)].
    pub const R_DRY_AIR: f64 = 287.058;
    /// ICAO sea-level temperature [K].
    pub const T0_K: f64 = 288.15;
    /// ICAO tropospheric lapse rate [K/m].
    pub const LAPSE_RATE_K_PER_M: f64 = 0.0065;
    /// Standard barometer [inHg].
    pub const P_STD_INHG: f64 = 29.92;
    /// Standard temperature for the density ratio [°F].
    pub const T_STD_F: f64 = 60.0;
}
