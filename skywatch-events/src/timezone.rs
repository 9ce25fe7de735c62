//! Timezone resolution: the external lookup seam and its fallback.
//!
//! No timezone database ships with this workspace. Callers that have
//! one (or a network service) implement [`TimezoneResolver`]; everyone
//! else gets [`LongitudeEstimate`], the deterministic `round(λ/15)`
//! rule. [`resolve_or_estimate`] glues the two together so a lookup
//! failure can never reach the computation core.
//!
//! Zone identifiers from the estimate use the POSIX `Etc/GMT±n` family,
//! whose sign is inverted relative to the UTC offset: UTC−5 is
//! `Etc/GMT+5`.

use crate::errors::{EventError, EventResult};
use skywatch_core::constants::DEGREES_PER_HOUR;
use skywatch_core::Location;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A resolved timezone: identifier and standard UTC offset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimezoneInfo {
    pub zone_id: String,
    pub utc_offset_hours: f64,
}

impl fmt::Display for TimezoneInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (UTC{:+})", self.zone_id, self.utc_offset_hours)
    }
}

/// The external lookup seam. Implementations may consult a database or
/// a network service and are allowed to fail.
pub trait TimezoneResolver {
    fn resolve(&self, location: &Location) -> EventResult<TimezoneInfo>;
}

/// The longitude-based fallback: 15° of longitude per hour, rounded
/// half-up. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongitudeEstimate;

impl LongitudeEstimate {
    /// UTC offset in whole hours for a longitude.
    pub fn offset_hours(longitude_deg: f64) -> f64 {
        libm::floor(longitude_deg / DEGREES_PER_HOUR + 0.5)
    }

    /// POSIX `Etc/GMT±n` identifier for a whole-hour offset. Note the
    /// inverted sign convention.
    pub fn zone_id(offset_hours: f64) -> String {
        let n = offset_hours as i32;
        if n <= 0 {
            format!("Etc/GMT+{}", -n)
        } else {
            format!("Etc/GMT-{n}")
        }
    }
}

impl TimezoneResolver for LongitudeEstimate {
    fn resolve(&self, location: &Location) -> EventResult<TimezoneInfo> {
        let offset = Self::offset_hours(location.longitude_deg());
        Ok(TimezoneInfo {
            zone_id: Self::zone_id(offset),
            utc_offset_hours: offset,
        })
    }
}

/// Tries `resolver`, falling back to the longitude estimate on any
/// error. Lookup failure is recoverable by contract — this function
/// cannot fail.
pub fn resolve_or_estimate(resolver: &dyn TimezoneResolver, location: &Location) -> TimezoneInfo {
    resolver.resolve(location).unwrap_or_else(|_| {
        let offset = LongitudeEstimate::offset_hours(location.longitude_deg());
        TimezoneInfo {
            zone_id: LongitudeEstimate::zone_id(offset),
            utc_offset_hours: offset,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingResolver;

    impl TimezoneResolver for FailingResolver {
        fn resolve(&self, _location: &Location) -> EventResult<TimezoneInfo> {
            Err(EventError::timezone_lookup("service unavailable"))
        }
    }

    struct FixedResolver;

    impl TimezoneResolver for FixedResolver {
        fn resolve(&self, _location: &Location) -> EventResult<TimezoneInfo> {
            Ok(TimezoneInfo {
                zone_id: "America/New_York".to_string(),
                utc_offset_hours: -5.0,
            })
        }
    }

    #[test]
    fn test_estimate_known_longitudes() {
        // Greenwich.
        assert_eq!(LongitudeEstimate::offset_hours(0.0), 0.0);
        assert_eq!(LongitudeEstimate::zone_id(0.0), "Etc/GMT+0");
        // Western Massachusetts: UTC-5, POSIX Etc/GMT+5.
        assert_eq!(LongitudeEstimate::offset_hours(-72.876444), -5.0);
        assert_eq!(LongitudeEstimate::zone_id(-5.0), "Etc/GMT+5");
        // Eastern hemisphere.
        assert_eq!(LongitudeEstimate::offset_hours(139.69), 9.0);
        assert_eq!(LongitudeEstimate::zone_id(9.0), "Etc/GMT-9");
    }

    #[test]
    fn test_round_half_up_at_boundary() {
        // 7.5° sits exactly between zones; half-up picks +1.
        assert_eq!(LongitudeEstimate::offset_hours(7.5), 1.0);
        // -7.5 rounds half-up to 0 (toward positive).
        assert_eq!(LongitudeEstimate::offset_hours(-7.5), 0.0);
        assert_eq!(LongitudeEstimate::offset_hours(-7.51), -1.0);
    }

    #[test]
    fn test_resolver_result_passes_through() {
        let site = Location::new(42.0, -73.0).unwrap();
        let info = resolve_or_estimate(&FixedResolver, &site);
        assert_eq!(info.zone_id, "America/New_York");
        assert_eq!(info.utc_offset_hours, -5.0);
    }

    #[test]
    fn test_failure_falls_back_to_estimate() {
        let site = Location::new(42.550639, -72.876444).unwrap();
        let info = resolve_or_estimate(&FailingResolver, &site);
        assert_eq!(info.zone_id, "Etc/GMT+5");
        assert_eq!(info.utc_offset_hours, -5.0);
    }

    #[test]
    fn test_display() {
        let info = TimezoneInfo {
            zone_id: "Etc/GMT+5".to_string(),
            utc_offset_hours: -5.0,
        };
        assert_eq!(format!("{info}"), "Etc/GMT+5 (UTC-5)");
    }
}
