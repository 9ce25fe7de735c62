//! Geocentric lunar position from the reduced periodic series.
//!
//! Precision tier: 14 longitude and 8 latitude terms, not the full
//! 60-term theory. The tier is deliberate — positions are good to about
//! 0.1°, which moves a horizon crossing by far less than the one-minute
//! refinement tolerance, at a fraction of the evaluation cost. The
//! ecliptic → equatorial rotation uses the *mean* obliquity, matching
//! the model this tier reproduces.
//!
//! The distance series is the matching reduction: the constant term plus
//! the three largest periodic terms, good to a few hundred kilometers,
//! from which the equatorial horizontal parallax follows.

use crate::nutation::mean_obliquity_deg;
use skywatch_core::angle::{asin_deg, atan2_deg, cos_deg, normalize_degrees, sin_deg};
use skywatch_core::constants::{EARTH_RADIUS_KM, MOON_MEAN_DISTANCE_KM};
use skywatch_coords::EquatorialCoordinate;
use skywatch_time::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lunar position with the distance supplements.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonPosition {
    pub equatorial: EquatorialCoordinate,
    /// Geocentric distance in kilometers (reduced series).
    pub distance_km: f64,
    /// Equatorial horizontal parallax, degrees.
    pub horizontal_parallax_deg: f64,
}

/// The five fundamental arguments, degrees in `[0, 360)`.
///
/// `(L', D, M, M', F)`: mean longitude, mean elongation, solar mean
/// anomaly, lunar mean anomaly, mean argument of latitude.
fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let lp = normalize_degrees(
        218.3164477 + 481267.88123421 * t - 0.0015786 * t * t + t * t * t / 538_841.0
            - t * t * t * t / 65_194_000.0,
    );
    let d = normalize_degrees(
        297.8501921 + 445267.1114034 * t - 0.0018819 * t * t + t * t * t / 545_868.0
            - t * t * t * t / 113_065_000.0,
    );
    let m = normalize_degrees(
        357.5291092 + 35999.0502909 * t - 0.0001559 * t * t - t * t * t / 24_490_000.0,
    );
    let mp = normalize_degrees(
        134.9633964 + 477198.8675055 * t + 0.0087414 * t * t + t * t * t / 69_699.0
            - t * t * t * t / 14_712_000.0,
    );
    let f = normalize_degrees(
        93.2720950 + 483202.0175233 * t - 0.0036539 * t * t - t * t * t / 3_526_000.0
            + t * t * t * t / 863_310_000.0,
    );
    (lp, d, m, mp, f)
}

/// Apparent geocentric position of the Moon.
pub fn position(jd: &JulianDate) -> MoonPosition {
    let t = jd.julian_centuries();
    let (lp, d, m, mp, f) = fundamental_arguments(t);

    // Longitude periodic terms, degrees.
    let sigma_l = 6.288774 * sin_deg(mp)
        + 1.274027 * sin_deg(2.0 * d - mp)
        + 0.658314 * sin_deg(2.0 * d)
        + 0.213618 * sin_deg(2.0 * mp)
        - 0.185116 * sin_deg(m)
        - 0.114332 * sin_deg(2.0 * f)
        + 0.058793 * sin_deg(2.0 * d - 2.0 * mp)
        + 0.057066 * sin_deg(2.0 * d - m - mp)
        + 0.053322 * sin_deg(2.0 * d + mp)
        + 0.045758 * sin_deg(2.0 * d - m)
        - 0.040923 * sin_deg(m - mp)
        - 0.034720 * sin_deg(d)
        - 0.030383 * sin_deg(m + mp)
        + 0.015327 * sin_deg(2.0 * d - 2.0 * f);

    // Latitude periodic terms, degrees.
    let sigma_b = 5.128122 * sin_deg(f)
        + 0.280602 * sin_deg(mp + f)
        + 0.277693 * sin_deg(mp - f)
        + 0.173237 * sin_deg(2.0 * d - f)
        + 0.055413 * sin_deg(2.0 * d - mp + f)
        + 0.046271 * sin_deg(2.0 * d - mp - f)
        + 0.032573 * sin_deg(2.0 * d + f)
        + 0.017198 * sin_deg(2.0 * mp + f);

    let longitude = lp + sigma_l;
    let latitude = sigma_b;
    let eps = mean_obliquity_deg(jd);

    let (sin_eps, cos_eps) = (sin_deg(eps), cos_deg(eps));
    let (sin_lat, cos_lat) = (sin_deg(latitude), cos_deg(latitude));
    let (sin_lon, cos_lon) = (sin_deg(longitude), cos_deg(longitude));

    let x = cos_lon * cos_lat;
    let y = sin_lon * cos_lat * cos_eps - sin_lat * sin_eps;
    let z = sin_lon * cos_lat * sin_eps + sin_lat * cos_eps;

    let ra = atan2_deg(y, x);
    let dec = asin_deg(z);

    let distance_km = MOON_MEAN_DISTANCE_KM
        - 20905.355 * cos_deg(mp)
        - 3699.111 * cos_deg(2.0 * d - mp)
        - 2955.968 * cos_deg(2.0 * d);
    let horizontal_parallax_deg = asin_deg(EARTH_RADIUS_KM / distance_km);

    MoonPosition {
        equatorial: EquatorialCoordinate::new(ra, dec),
        distance_km,
        horizontal_parallax_deg,
    }
}
