//! Horizontal coordinates: azimuth and altitude.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An azimuth / altitude pair in degrees.
///
/// Azimuth is measured from north through east, `[0, 360)`; altitude is
/// `[-90, +90]`, negative below the horizon. Produced by
/// [`equatorial_to_horizontal`](crate::transform::equatorial_to_horizontal).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    azimuth_deg: f64,
    altitude_deg: f64,
}

impl HorizontalCoordinate {
    pub(crate) fn new(azimuth_deg: f64, altitude_deg: f64) -> Self {
        Self {
            azimuth_deg,
            altitude_deg,
        }
    }

    /// Azimuth in degrees from north through east, `[0, 360)`.
    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth_deg
    }

    /// Altitude above the horizon in degrees, `[-90, +90]`.
    pub fn altitude_deg(&self) -> f64 {
        self.altitude_deg
    }

    /// Whether the position is above the flat horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }

    /// Zenith distance in degrees.
    pub fn zenith_angle_deg(&self) -> f64 {
        90.0 - self.altitude_deg
    }
}

impl fmt::Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Az {:.4}° Alt {:+.4}°", self.azimuth_deg, self.altitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let h = HorizontalCoordinate::new(135.0, 42.0);
        assert_eq!(h.azimuth_deg(), 135.0);
        assert_eq!(h.altitude_deg(), 42.0);
        assert_eq!(h.zenith_angle_deg(), 48.0);
        assert!(h.is_above_horizon());
        assert!(!HorizontalCoordinate::new(0.0, -0.5).is_above_horizon());
    }

    #[test]
    fn test_display() {
        let h = HorizontalCoordinate::new(270.0, -12.5);
        assert_eq!(format!("{h}"), "Az 270.0000° Alt -12.5000°");
    }
}
