//! Angle normalization and degree-argument trigonometry.
//!
//! The whole engine works in degrees, matching the polynomial models it
//! implements; radians appear only at the `libm` call boundary. Two rules
//! hold everywhere:
//!
//! - Normalization uses the floor form `x − 360·⌊x/360⌋` and guarantees a
//!   result in `[0, 360)` for every finite input, including tiny negative
//!   values whose floor form rounds to exactly 360.
//! - Inverse-trig arguments are clamped to `[-1, 1]` before the call.
//!   Arguments drift out of domain only by floating-point noise, so
//!   clamping is the correct recovery and no error is raised.

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

/// Normalizes an angle in degrees to `[0, 360)`.
///
/// ```
/// use skywatch_core::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(361.0), 1.0);
/// assert_eq!(normalize_degrees(-30.0), 330.0);
/// assert_eq!(normalize_degrees(720.0), 0.0);
/// ```
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees - 360.0 * libm::floor(degrees / 360.0);
    // -1e-30 wraps to exactly 360.0 in f64; fold it back.
    if wrapped >= 360.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Normalizes an angle in degrees to `(-180, 180]`.
///
/// Used for hour angles and for sanity checks on bracketing intervals.
pub fn normalize_pm180(degrees: f64) -> f64 {
    let wrapped = normalize_degrees(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Clamps a value to `[-1, 1]` ahead of `asin`/`acos`.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    libm::sin(degrees * DEG_TO_RAD)
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    libm::cos(degrees * DEG_TO_RAD)
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    libm::tan(degrees * DEG_TO_RAD)
}

/// Arcsine in degrees with the argument clamped to `[-1, 1]`.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    libm::asin(clamp_unit(x)) * RAD_TO_DEG
}

/// Arccosine in degrees with the argument clamped to `[-1, 1]`.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    libm::acos(clamp_unit(x)) * RAD_TO_DEG
}

/// Four-quadrant arctangent in degrees.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    libm::atan2(y, x) * RAD_TO_DEG
}

/// Arctangent in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    libm::atan(x) * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees_basic() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(359.9), 359.9);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(361.0), 1.0);
        assert_eq!(normalize_degrees(-1.0), 359.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        assert_eq!(normalize_degrees(-361.0), 359.0);
    }

    #[test]
    fn test_normalize_degrees_range_for_any_finite_input() {
        let inputs = [
            0.0,
            -0.0,
            1e-12,
            -1e-12,
            -1e-30,
            359.999_999_999,
            -359.999_999_999,
            1e9,
            -1e9,
            123_456_789.123,
            -987_654_321.987,
            f64::MIN_POSITIVE,
            -f64::MIN_POSITIVE,
        ];
        for &x in &inputs {
            let n = normalize_degrees(x);
            assert!(
                (0.0..360.0).contains(&n),
                "normalize_degrees({x}) = {n} outside [0, 360)"
            );
        }
    }

    #[test]
    fn test_normalize_pm180() {
        assert_eq!(normalize_pm180(180.0), 180.0);
        assert_eq!(normalize_pm180(181.0), -179.0);
        assert_eq!(normalize_pm180(-179.0), -179.0);
        assert_eq!(normalize_pm180(540.0), 180.0);
        assert_eq!(normalize_pm180(-190.0), 170.0);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.0 + 1e-15), 1.0);
        assert_eq!(clamp_unit(-1.0 - 1e-15), -1.0);
        assert_eq!(clamp_unit(0.5), 0.5);
    }

    #[test]
    fn test_asin_deg_out_of_domain_is_clamped() {
        // Would be NaN without clamping.
        assert_eq!(asin_deg(1.000000001), 90.0);
        assert_eq!(asin_deg(-1.000000001), -90.0);
    }

    #[test]
    fn test_degree_trig_identities() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-12);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-12);
        assert!((tan_deg(45.0) - 1.0).abs() < 1e-12);
        assert!((atan2_deg(1.0, 1.0) - 45.0).abs() < 1e-12);
        assert!((acos_deg(0.0) - 90.0).abs() < 1e-12);
        assert!((atan_deg(1.0) - 45.0).abs() < 1e-12);
    }
}
