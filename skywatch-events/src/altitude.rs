//! Altitude of a body for an observer, as a plain function of Julian
//! Date — the shape the crossing solver consumes.

use skywatch_coords::equatorial_to_horizontal;
use skywatch_core::Location;
use skywatch_ephemeris::Body;
use skywatch_time::JulianDate;

/// Altitude of `body` above the observer's flat horizon, degrees.
pub fn altitude_of(body: Body, jd: &JulianDate, observer: &Location) -> f64 {
    let position = body.position(jd);
    equatorial_to_horizontal(&position.equatorial, jd, observer).altitude_deg()
}

/// Altitude with the instant as a raw Julian Date value; convenience
/// for building solver closures.
pub fn altitude_at(body: Body, jd_value: f64, observer: &Location) -> f64 {
    altitude_of(body, &JulianDate::from_f64(jd_value), observer)
}
