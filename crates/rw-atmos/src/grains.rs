//! Humidity grains.

/// Ratio of the molecular weight of water vapor to dry air.
pub const EPSILON_MW: f64 = 0.62199;

/// Grains per pound.
pub const GRAINS_PER_LB: f64 = 7000.0;

/// Mixing ratio [lb water / lb dry air] from station and vapor pressure [inHg].
pub fn mixing_ratio(abs_pressure_inhg: f64, vapor_pressure_inhg: f64) -> f64 {
    EPSILON_MW * (vapor_pressure_inhg / (abs_pressure_inhg - vapor_pressure_inhg))
}

/// Grains of water per pound of dry air.
///
/// Requires `abs_pressure_inhg > vapor_pressure_inhg`; equality gives infinity.
pub fn humidity_grains(abs_pressure_inhg: f64, vapor_pressure_inhg: f64) -> f64 {
    GRAINS_PER_LB * mixing_ratio(abs_pressure_inhg, vapor_pressure_inhg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_air_has_no_grains() {
        assert_eq!(humidity_grains(29.92, 0.0), 0.0);
    }

    #[test]
    fn grains_follow_mixing_ratio() {
        let w = mixing_ratio(29.0, 1.0);
        assert!((w - 0.62199 / 28.0).abs() < 1e-15);
        assert!((humidity_grains(29.0, 1.0) - 7000.0 * w).abs() < 1e-12);
    }

    #[test]
    fn equal_pressures_are_singular() {
        assert_eq!(humidity_grains(0.5, 0.5), f64::INFINITY);
        assert!(humidity_grains(0.4, 0.5) < 0.0);
    }
}
