use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Round half away from zero to `decimals` places.
///
/// Non-finite values are returned unchanged.
pub fn round_to(v: Real, decimals: u32) -> Real {
    if !v.is_finite() {
        return v;
    }
    let scale = 10_f64.powi(decimals as i32);
    (v * scale).round() / scale
}

/// Closed search interval for [`bisect_fixed`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket {
    pub low: Real,
    pub high: Real,
}

impl Bracket {
    pub const fn new(low: Real, high: Real) -> Self {
        Self { low, high }
    }

    pub fn midpoint(&self) -> Real {
        (self.low + self.high) / 2.0
    }
}

/// Invert a non-decreasing function by bisection with a fixed iteration count.
///
/// There is no tolerance exit: exactly `iterations` halvings are performed so the
/// result is reproducible bit for bit. If `f(mid) > target` the upper bound moves,
/// otherwise the lower bound moves. A target outside `[f(low), f(high)]` converges
/// to the nearest bracket edge. Returns the midpoint of the final bracket.
pub fn bisect_fixed<F>(f: F, target: Real, bracket: Bracket, iterations: usize) -> Real
where
    F: Fn(Real) -> Real,
{
    let mut b = bracket;
    for _ in 0..iterations {
        let mid = b.midpoint();
        if f(mid) > target {
            b.high = mid;
        } else {
            b.low = mid;
        }
    }
    b.midpoint()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bisect_recovers_cubic_root(root in -9.0_f64..9.0_f64) {
            let f = |x: f64| x * x * x;
            let x = bisect_fixed(f, f(root), Bracket::new(-10.0, 10.0), 80);
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(x, root, tol));
        }
    }
}
