//! The polymorphic body seam.
//!
//! Every surrounding layer (the transform, the event solver, the night
//! aggregator) talks to a single `position(instant)` contract instead of
//! three near-identical per-body code paths. [`Body`] is the dispatch
//! point; [`BodyPosition`] is the common result shape, with the fields
//! that only apply to planets carried as `Option`s.

use crate::moon;
use crate::planets::{self, Planet};
use crate::sun;
use skywatch_core::constants::AU_KM;
use skywatch_coords::EquatorialCoordinate;
use skywatch_time::JulianDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A body this engine can position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Planet(Planet),
}

/// Apparent geocentric position of any [`Body`].
///
/// `distance_au`, `phase_angle_deg`, and `magnitude` are populated for
/// planets; for the Moon, `distance_au` carries the reduced-series
/// distance (the kilometre value is on [`moon::MoonPosition`]). The Sun
/// reports coordinates only. `light_time_converged` is always true for
/// the Sun and Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyPosition {
    pub equatorial: EquatorialCoordinate,
    pub distance_au: Option<f64>,
    pub phase_angle_deg: Option<f64>,
    pub magnitude: Option<f64>,
    pub light_time_converged: bool,
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Planet(Planet::Mercury),
        Body::Planet(Planet::Venus),
        Body::Planet(Planet::Mars),
        Body::Planet(Planet::Jupiter),
        Body::Planet(Planet::Saturn),
        Body::Planet(Planet::Uranus),
        Body::Planet(Planet::Neptune),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Planet(planet) => planet.name(),
        }
    }

    /// Whether the twilight-window clamping policy applies. Sun and Moon
    /// crossings pass through unclamped.
    pub fn is_twilight_exempt(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }

    /// Apparent geocentric position at an instant.
    ///
    /// ```
    /// use skywatch_ephemeris::Body;
    /// use skywatch_time::JulianDate;
    ///
    /// let sun = Body::Sun.position(&JulianDate::j2000());
    /// assert!((sun.equatorial.ra_deg() - 281.29).abs() < 0.05);
    /// assert!(sun.light_time_converged);
    /// ```
    pub fn position(&self, jd: &JulianDate) -> BodyPosition {
        match self {
            Body::Sun => BodyPosition {
                equatorial: sun::position(jd),
                distance_au: None,
                phase_angle_deg: None,
                magnitude: None,
                light_time_converged: true,
            },
            Body::Moon => {
                let moon = moon::position(jd);
                BodyPosition {
                    equatorial: moon.equatorial,
                    distance_au: Some(moon.distance_km / AU_KM),
                    phase_angle_deg: None,
                    magnitude: None,
                    light_time_converged: true,
                }
            }
            Body::Planet(planet) => {
                let pos = planets::geocentric_position(*planet, jd);
                BodyPosition {
                    equatorial: pos.equatorial,
                    distance_au: Some(pos.distance_au),
                    phase_angle_deg: Some(pos.phase_angle_deg),
                    magnitude: Some(pos.magnitude),
                    light_time_converged: pos.light_time_converged,
                }
            }
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_providers() {
        let jd = JulianDate::j2000();
        assert_eq!(Body::Sun.position(&jd).equatorial, sun::position(&jd));
        assert_eq!(
            Body::Moon.position(&jd).equatorial,
            moon::position(&jd).equatorial
        );
        assert_eq!(
            Body::Planet(Planet::Mars).position(&jd).equatorial,
            planets::geocentric_position(Planet::Mars, &jd).equatorial
        );
    }

    #[test]
    fn test_optional_fields_by_kind() {
        let jd = JulianDate::j2000();
        let sun = Body::Sun.position(&jd);
        assert!(sun.distance_au.is_none());
        assert!(sun.magnitude.is_none());

        let moon = Body::Moon.position(&jd);
        let d = moon.distance_au.unwrap();
        assert!((0.002..0.003).contains(&d), "Moon distance {d} AU");
        assert!(moon.magnitude.is_none());

        let saturn = Body::Planet(Planet::Saturn).position(&jd);
        assert!(saturn.distance_au.is_some());
        assert!(saturn.phase_angle_deg.is_some());
        assert!(saturn.magnitude.is_some());
    }

    #[test]
    fn test_twilight_exemption() {
        assert!(Body::Sun.is_twilight_exempt());
        assert!(Body::Moon.is_twilight_exempt());
        assert!(!Body::Planet(Planet::Venus).is_twilight_exempt());
    }

    #[test]
    fn test_names() {
        assert_eq!(Body::Sun.name(), "Sun");
        assert_eq!(Body::Planet(Planet::Neptune).to_string(), "Neptune");
        assert_eq!(Body::ALL.len(), 9);
    }
}
