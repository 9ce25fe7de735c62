//! Apparent solar position from the low-term polynomial model.
//!
//! Mean longitude and mean anomaly as polynomials in Julian centuries, a
//! three-term equation of center, nutation in longitude, then rotation
//! by the true obliquity into equatorial coordinates. Accuracy is a few
//! hundredths of a degree over 1900-2100, which holds every rise/set and
//! twilight crossing well inside the one-minute refinement tolerance.

use crate::nutation::{mean_obliquity_deg, nutation};
use skywatch_core::angle::{asin_deg, atan2_deg, cos_deg, normalize_degrees, sin_deg};
use skywatch_coords::EquatorialCoordinate;
use skywatch_time::JulianDate;

/// Geometric mean longitude of the Sun, degrees in `[0, 360)`.
pub fn mean_longitude_deg(jd: &JulianDate) -> f64 {
    let t = jd.julian_centuries();
    normalize_degrees(
        280.4664567 + 36000.76982779 * t + 0.0003032028 * t * t + t * t * t / 49_931_821.0
            - t * t * t * t / 15_300_000_000.0,
    )
}

/// Mean anomaly of the Sun, degrees in `[0, 360)`.
pub fn mean_anomaly_deg(jd: &JulianDate) -> f64 {
    let t = jd.julian_centuries();
    normalize_degrees(
        357.5291092 + 35999.0502909 * t - 0.0001559 * t * t - t * t * t / 24_490_000.0,
    )
}

/// Apparent ecliptic longitude of the Sun (nutation applied), degrees.
pub fn apparent_longitude_deg(jd: &JulianDate) -> f64 {
    let t = jd.julian_centuries();
    let m = mean_anomaly_deg(jd);

    // Equation of center, three terms.
    let c = (1.9146 - 0.004817 * t - 0.000014 * t * t) * sin_deg(m)
        + (0.019993 - 0.000101 * t) * sin_deg(2.0 * m)
        + 0.000289 * sin_deg(3.0 * m);

    mean_longitude_deg(jd) + c + nutation(jd).delta_psi_deg
}

/// Apparent equatorial position of the Sun.
///
/// ```
/// use skywatch_ephemeris::sun;
/// use skywatch_time::JulianDate;
///
/// let eq = sun::position(&JulianDate::j2000());
/// assert!((eq.ra_deg() - 281.29).abs() < 0.05);
/// assert!((eq.dec_deg() + 23.03).abs() < 0.05);
/// ```
pub fn position(jd: &JulianDate) -> EquatorialCoordinate {
    let lambda = apparent_longitude_deg(jd);
    let eps = mean_obliquity_deg(jd) + nutation(jd).delta_eps_deg;

    let ra = atan2_deg(cos_deg(eps) * sin_deg(lambda), cos_deg(lambda));
    let dec = asin_deg(sin_deg(eps) * sin_deg(lambda));

    EquatorialCoordinate::new(ra, dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_time::CivilTime;

    fn jd(y: i32, mo: u32, d: u32, h: u32) -> JulianDate {
        CivilTime::new(y, mo, d, h, 0, 0.0).unwrap().to_julian()
    }

    #[test]
    fn test_j2000_reference_position() {
        let eq = position(&JulianDate::j2000());
        assert!((eq.ra_deg() - 281.29).abs() < 0.05, "RA was {}", eq.ra_deg());
        assert!((eq.dec_deg() + 23.03).abs() < 0.05, "Dec was {}", eq.dec_deg());
    }

    #[test]
    fn test_solstice_declinations() {
        // Declination peaks near the obliquity at the solstices.
        let summer = position(&jd(2025, 6, 21, 0));
        assert!((summer.dec_deg() - 23.43).abs() < 0.1);

        let winter = position(&jd(2025, 12, 21, 12));
        assert!((winter.dec_deg() + 23.43).abs() < 0.1);
    }

    #[test]
    fn test_equinox_declination_near_zero() {
        // March equinox 2025: 2025-03-20 09:01 UTC.
        let eq = position(&CivilTime::new(2025, 3, 20, 9, 1, 0.0).unwrap().to_julian());
        assert!(eq.dec_deg().abs() < 0.05, "equinox Dec was {}", eq.dec_deg());
    }

    #[test]
    fn test_longitude_advances_about_a_degree_per_day() {
        let l0 = apparent_longitude_deg(&jd(2025, 4, 10, 0));
        let l1 = apparent_longitude_deg(&jd(2025, 4, 11, 0));
        let advance = normalize_degrees(l1 - l0);
        assert!((0.9..1.1).contains(&advance), "daily advance {advance}");
    }

    #[test]
    fn test_ra_always_normalized() {
        for day in 0..366 {
            let jd = JulianDate::new(2460676.5, f64::from(day));
            let eq = position(&jd);
            assert!((0.0..360.0).contains(&eq.ra_deg()));
            assert!(eq.dec_deg().abs() <= 23.5);
        }
    }
}
