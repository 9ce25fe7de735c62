//! Greenwich and local sidereal time.
//!
//! The GMST polynomial here is a compact degree-form series referred to
//! UT, good to a fraction of a second of time over the designed range.
//! Results are degrees in `[0, 360)`; divide by 15 for hours.

use crate::JulianDate;
use skywatch_core::angle::normalize_degrees;

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
///
/// ```
/// use skywatch_time::{sidereal::gmst_degrees, JulianDate};
///
/// let gmst = gmst_degrees(&JulianDate::j2000());
/// assert!((gmst - 280.46061837).abs() < 1e-9);
/// ```
pub fn gmst_degrees(jd: &JulianDate) -> f64 {
    let d = jd.days_since_j2000();
    let t = jd.julian_centuries();
    let gmst =
        280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38_710_000.0;
    normalize_degrees(gmst)
}

/// Local mean sidereal time in degrees, `[0, 360)`.
///
/// `east_longitude_deg` is positive east of Greenwich.
pub fn local_sidereal_degrees(jd: &JulianDate, east_longitude_deg: f64) -> f64 {
    normalize_degrees(gmst_degrees(jd) + east_longitude_deg)
}
