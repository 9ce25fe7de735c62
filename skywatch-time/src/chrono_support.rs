//! Interop with `chrono` (feature = "chrono").

use crate::{CivilTime, JulianDate};
use chrono::{DateTime, Datelike, Timelike, Utc};

impl From<DateTime<Utc>> for CivilTime {
    fn from(dt: DateTime<Utc>) -> Self {
        let second = f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9;
        // chrono components are valid by construction.
        CivilTime::from_parts_unchecked(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            second,
        )
    }
}

impl From<DateTime<Utc>> for JulianDate {
    fn from(dt: DateTime<Utc>) -> Self {
        JulianDate::from_civil(&CivilTime::from(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unix_epoch_through_chrono() {
        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let jd = JulianDate::from(dt);
        assert_eq!(jd.value(), 2440587.5);
    }

    #[test]
    fn test_chrono_matches_native_conversion() {
        let dt = Utc.with_ymd_and_hms(2025, 8, 23, 16, 0, 0).unwrap();
        let native = CivilTime::new(2025, 8, 23, 16, 0, 0.0).unwrap();
        assert_eq!(CivilTime::from(dt), native);
    }
}
