//! Equatorial → horizontal transform for an observer and instant.
//!
//! The standard spherical-trigonometry identity over the local hour
//! angle:
//!
//! ```text
//! sin h = sin φ sin δ + cos φ cos δ cos H
//! ```
//!
//! with the `asin` argument clamped to `[-1, 1]`, so floating round-off
//! at the zenith or nadir can never produce a NaN altitude.

use crate::{EquatorialCoordinate, HorizontalCoordinate};
use skywatch_core::angle::{asin_deg, atan2_deg, cos_deg, normalize_degrees, sin_deg, tan_deg};
use skywatch_core::Location;
use skywatch_time::{local_sidereal_degrees, JulianDate};

/// Local hour angle of a right ascension, degrees in `[0, 360)`.
pub fn hour_angle_degrees(ra_deg: f64, jd: &JulianDate, observer: &Location) -> f64 {
    let lst = local_sidereal_degrees(jd, observer.longitude_deg());
    normalize_degrees(lst - ra_deg)
}

/// Transforms an equatorial position to the observer's horizontal frame.
///
/// Azimuth is from north through east; the `atan2` form yields it
/// measured from south, so 180° is added before normalization.
///
/// ```
/// use skywatch_coords::{equatorial_to_horizontal, EquatorialCoordinate};
/// use skywatch_core::Location;
/// use skywatch_time::JulianDate;
///
/// let eq = EquatorialCoordinate::new(281.2871, -23.0337);
/// let site = Location::new(51.4779, 0.0)?;
/// let h = equatorial_to_horizontal(&eq, &JulianDate::j2000(), &site);
/// assert!(h.altitude_deg() > 10.0 && h.altitude_deg() < 20.0);
/// # Ok::<(), skywatch_core::AstroError>(())
/// ```
pub fn equatorial_to_horizontal(
    eq: &EquatorialCoordinate,
    jd: &JulianDate,
    observer: &Location,
) -> HorizontalCoordinate {
    let ha = hour_angle_degrees(eq.ra_deg(), jd, observer);
    let lat = observer.latitude_deg();
    let dec = eq.dec_deg();

    let sin_alt = sin_deg(lat) * sin_deg(dec) + cos_deg(lat) * cos_deg(dec) * cos_deg(ha);
    let altitude = asin_deg(sin_alt);

    let azimuth = normalize_degrees(
        atan2_deg(sin_deg(ha), cos_deg(ha) * sin_deg(lat) - tan_deg(dec) * cos_deg(lat)) + 180.0,
    );

    HorizontalCoordinate::new(azimuth, altitude)
}
