//! Observer location on the Earth's surface.
//!
//! A [`Location`] is a validated latitude/longitude pair in degrees, east
//! longitude positive. Validation happens once, in the constructor, and is
//! strict: out-of-range coordinates are rejected with an error rather than
//! clamped, so a typo like latitude 452.5 fails loudly instead of producing
//! a plausible-looking chart for the wrong place.

use crate::angle::normalize_pm180;
use crate::constants::DEG_TO_RAD;
use crate::errors::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated observer site: geodetic latitude and east longitude, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Location {
    /// Creates a location from degrees.
    ///
    /// # Errors
    ///
    /// - [`AstroError::NotFinite`] if either coordinate is NaN or infinite
    /// - [`AstroError::InvalidLatitude`] if latitude is outside [-90, +90]
    /// - [`AstroError::InvalidLongitude`] if longitude is outside [-180, +180]
    ///
    /// ```
    /// use skywatch_core::Location;
    ///
    /// let site = Location::new(42.550639, -72.876444)?;
    /// assert_eq!(site.latitude_deg(), 42.550639);
    ///
    /// assert!(Location::new(91.0, 0.0).is_err());
    /// assert!(Location::new(0.0, 180.5).is_err());
    /// # Ok::<(), skywatch_core::AstroError>(())
    /// ```
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> AstroResult<Self> {
        if !latitude_deg.is_finite() {
            return Err(AstroError::not_finite("latitude", latitude_deg));
        }
        if !longitude_deg.is_finite() {
            return Err(AstroError::not_finite("longitude", longitude_deg));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(AstroError::invalid_latitude(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(AstroError::invalid_longitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Geodetic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg * DEG_TO_RAD
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg * DEG_TO_RAD
    }

    /// Signed angular distance in longitude from this site to another,
    /// degrees in `(-180, 180]`.
    pub fn longitude_offset_to(&self, other: &Location) -> f64 {
        normalize_pm180(other.longitude_deg - self.longitude_deg)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude_deg >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.6}°{} {:.6}°{}",
            self.latitude_deg.abs(),
            ns,
            self.longitude_deg.abs(),
            ew
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_locations() {
        assert!(Location::new(0.0, 0.0).is_ok());
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());
        assert!(Location::new(42.550639, -72.876444).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range_is_rejected_not_clamped() {
        let err = Location::new(90.000001, 0.0).unwrap_err();
        assert!(matches!(err, AstroError::InvalidLatitude { .. }));

        let err = Location::new(-452.5, 0.0).unwrap_err();
        assert!(matches!(
            err,
            AstroError::InvalidLatitude { value } if value == -452.5
        ));
    }

    #[test]
    fn test_longitude_out_of_range_is_rejected() {
        assert!(matches!(
            Location::new(0.0, 180.000001),
            Err(AstroError::InvalidLongitude { .. })
        ));
        assert!(matches!(
            Location::new(0.0, -181.0),
            Err(AstroError::InvalidLongitude { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Location::new(f64::NAN, 0.0),
            Err(AstroError::NotFinite { .. })
        ));
        assert!(matches!(
            Location::new(0.0, f64::INFINITY),
            Err(AstroError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_radian_accessors() {
        let site = Location::new(45.0, -90.0).unwrap();
        assert!((site.latitude_rad() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
        assert!((site.longitude_rad() + std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_longitude_offset_wraps() {
        let a = Location::new(0.0, 170.0).unwrap();
        let b = Location::new(0.0, -170.0).unwrap();
        assert_eq!(a.longitude_offset_to(&b), 20.0);
    }

    #[test]
    fn test_display() {
        let site = Location::new(42.550639, -72.876444).unwrap();
        let s = format!("{site}");
        assert!(s.contains("42.550639°N"));
        assert!(s.contains("72.876444°W"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let site = Location::new(55.0, -72.0).unwrap();
        let json = serde_json::to_string(&site).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(site, back);
    }
}
