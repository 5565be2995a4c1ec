//! Pipeline behaviour on reference scenarios.
//!
//! The 80 °F / 50 % / 28.9 inHg case is the long-standing smoke scenario; its
//! outputs are pinned so any refactor of the derivations shows up here.

use rw_atmos::{
    DensityAltitudeCalibration, Inputs, compute_racing_weather, compute_racing_weather_with,
    saturation_vapor_pressure_inhg,
};
use rw_core::{Tolerances, nearly_equal};

const GOLDEN_TOL: Tolerances = Tolerances {
    abs: 1e-12,
    rel: 1e-12,
};

fn reference() -> Inputs {
    Inputs::new(80.0, 50.0, 28.9)
}

#[test]
fn golden_reference_scenario() {
    let out = compute_racing_weather(reference());

    let expected = [
        ("pd_value", out.pd_value, 1.032_903_032_000_000_3),
        ("vapor_pressure_inhg", out.vapor_pressure_inhg, 0.516_451_516_000_000_2),
        ("dew_point_f", out.dew_point_f, 59.791_165_594_090_856),
        ("humidity_grains", out.humidity_grains, 79.221_727_696_430_5),
        ("adr_pct", out.adr_pct, 91.349_141_473_019_13),
        ("density_alt_ft", out.density_alt_ft, 3_038.004_217_471_793_3),
        ("tf", out.tf, 1.019_182_217_747_173_9),
        ("hf", out.hf, 1.018_195_452_774_029_6),
        ("bf", out.bf, 1.035_294_117_647_059),
        ("correction", out.correction, 1.074_352_347_881_558_2),
    ];

    for (name, got, want) in expected {
        assert!(
            nearly_equal(got, want, GOLDEN_TOL),
            "{name}: got {got}, want {want}"
        );
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = compute_racing_weather(reference());
    let b = compute_racing_weather(reference());

    assert_eq!(a.dew_point_f.to_bits(), b.dew_point_f.to_bits());
    assert_eq!(a.density_alt_ft.to_bits(), b.density_alt_ft.to_bits());
    assert_eq!(a.correction.to_bits(), b.correction.to_bits());
    assert_eq!(a, b);
}

#[test]
fn dry_air_boundary() {
    let out = compute_racing_weather(Inputs::new(80.0, 0.0, 28.9));
    assert_eq!(out.vapor_pressure_inhg, 0.0);
    assert_eq!(out.humidity_grains, 0.0);
    assert_eq!(out.hf, 1.0);
    assert_eq!(out.pd_value, saturation_vapor_pressure_inhg(80.0));
}

#[test]
fn pressure_equal_to_vapor_pressure_is_infinite() {
    let e = compute_racing_weather(reference()).vapor_pressure_inhg;
    let out = compute_racing_weather(Inputs::new(80.0, 50.0, e));

    // Documented precondition violation: the unchecked path does not repair it.
    assert_eq!(out.humidity_grains, f64::INFINITY);
    assert_eq!(out.hf, f64::INFINITY);
    assert_eq!(out.correction, f64::INFINITY);
    assert!(!out.is_finite());
}

#[test]
fn non_positive_density_ratio_gives_nan_altitude() {
    // Pressure below vapor pressure drives the dry-air partial pressure negative.
    let out = compute_racing_weather(Inputs::new(80.0, 100.0, 0.5));
    assert!(out.adr_pct < 0.0);
    assert!(out.density_alt_ft.is_nan());
}

#[test]
fn humidity_raises_moisture_metrics() {
    let steps: Vec<_> = (0..=10)
        .map(|i| compute_racing_weather(Inputs::new(80.0, i as f64 * 10.0, 28.9)))
        .collect();

    for pair in steps.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        assert!(hi.vapor_pressure_inhg > lo.vapor_pressure_inhg);
        assert!(hi.dew_point_f > lo.dew_point_f);
        assert!(hi.humidity_grains > lo.humidity_grains);
        assert!(hi.hf > lo.hf);
        assert!(hi.adr_pct < lo.adr_pct);
    }
}

#[test]
fn calibration_override_is_honoured() {
    let shifted = DensityAltitudeCalibration {
        scale: 1.0,
        offset_ft: 100.0,
    };
    let base = compute_racing_weather_with(reference(), &DensityAltitudeCalibration::IDENTITY);
    let out = compute_racing_weather_with(reference(), &shifted);
    assert!((out.density_alt_ft - base.density_alt_ft - 100.0).abs() < 1e-9);
}
