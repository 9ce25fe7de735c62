//! Equatorial coordinates: right ascension and declination.

use skywatch_core::angle::normalize_degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A right ascension / declination pair in degrees.
///
/// Right ascension is normalized to `[0, 360)` at construction.
/// Declination comes out of a clamped `asin` in every producer, so it is
/// in `[-90, +90]` by construction; the constructor debug-asserts the
/// invariant rather than returning a `Result`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    ra_deg: f64,
    dec_deg: f64,
}

impl EquatorialCoordinate {
    /// Creates a coordinate pair, normalizing right ascension to `[0, 360)`.
    ///
    /// ```
    /// use skywatch_coords::EquatorialCoordinate;
    ///
    /// let eq = EquatorialCoordinate::new(-79.0, 23.5);
    /// assert_eq!(eq.ra_deg(), 281.0);
    /// assert_eq!(eq.dec_deg(), 23.5);
    /// ```
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        debug_assert!(
            (-90.0..=90.0).contains(&dec_deg),
            "declination {dec_deg} outside [-90, +90]"
        );
        Self {
            ra_deg: normalize_degrees(ra_deg),
            dec_deg,
        }
    }

    /// Right ascension in degrees, `[0, 360)`.
    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    /// Declination in degrees, `[-90, +90]`.
    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    /// Right ascension in hours, `[0, 24)`.
    pub fn ra_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }

    /// Angular separation to another coordinate, degrees.
    ///
    /// Spherical law of cosines; adequate away from sub-arcsecond
    /// separations, which this workspace never resolves.
    pub fn separation_deg(&self, other: &EquatorialCoordinate) -> f64 {
        use skywatch_core::angle::{acos_deg, cos_deg, sin_deg};
        acos_deg(
            sin_deg(self.dec_deg) * sin_deg(other.dec_deg)
                + cos_deg(self.dec_deg)
                    * cos_deg(other.dec_deg)
                    * cos_deg(self.ra_deg - other.ra_deg),
        )
    }
}

impl fmt::Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA {:.4}° Dec {:+.4}°", self.ra_deg, self.dec_deg)
    }
}
