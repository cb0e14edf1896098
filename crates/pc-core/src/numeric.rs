use rust_decimal::{Decimal, RoundingStrategy};

use crate::PcError;

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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PcError::NonFinite { what, value: v })
    }
}

pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, PcError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        Err(PcError::Negative { what, value: v })
    } else {
        Ok(v)
    }
}

/// Round half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Differs from `f64::round` for negative halves.
pub fn round_half_up(value: Real) -> Real {
    (value + 0.5).floor()
}

/// Round to one decimal place, half away from zero.
///
/// Rounds the exact decimal expansion of `value`, so `3.4499999999999997`
/// gives `3.4` while binary-exact halves such as `0.25` go up. Values with
/// no decimal representation (non-finite, beyond ~7.9e28) are returned as is.
pub fn round_to_tenth(value: Real) -> Real {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            rounded.mantissa() as Real / 10_f64.powi(rounded.scale() as i32)
        }
        None => value,
    }
}

/// Round half-up and clamp into an integer band.
pub fn round_clamped(value: Real, min: u32, max: u32) -> u32 {
    round_half_up(value).clamp(Real::from(min), Real::from(max)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects_negative() {
        assert_eq!(ensure_non_negative(0.0, "flow").unwrap(), 0.0);
        assert!(matches!(
            ensure_non_negative(-1.0, "flow"),
            Err(PcError::Negative { what: "flow", .. })
        ));
        assert!(ensure_non_negative(Real::INFINITY, "flow").is_err());
    }

    #[test]
    fn half_up_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
    }

    #[test]
    fn tenth_rounding() {
        assert_eq!(round_to_tenth(3.14159), 3.1);
        assert_eq!(round_to_tenth(2.96), 3.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
        assert_eq!(round_to_tenth(8.0), 8.0);
    }

    #[test]
    fn tenth_rounding_uses_exact_decimal_value() {
        // Both sit just below the half: 3.44999999999999973..., 8.44999999999999929...
        assert_eq!(round_to_tenth(3.4499999999999997), 3.4);
        assert_eq!(round_to_tenth(8.45), 8.4);
        assert_eq!(round_to_tenth(0.00272 * 169.0 * 12.5 / 0.68), 8.4);
    }

    #[test]
    fn tenth_rounding_exact_halves_go_up() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(8.25), 8.3);
    }

    #[test]
    fn tenth_rounding_passes_non_finite_through() {
        assert!(round_to_tenth(Real::NAN).is_nan());
        assert_eq!(round_to_tenth(Real::INFINITY), Real::INFINITY);
    }

    #[test]
    fn rounded_band() {
        assert_eq!(round_clamped(86.4, 60, 90), 86);
        assert_eq!(round_clamped(95.0, 60, 90), 90);
        assert_eq!(round_clamped(-40.0, 60, 90), 60);
    }
}
