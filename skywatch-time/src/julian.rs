//! Civil UTC instants and Julian Dates.
//!
//! The conversion is the floor-based Gregorian algorithm: every division
//! in the day-number arithmetic floors toward negative infinity, so the
//! math stays correct on both sides of a century boundary. The designed
//! range is years 1900-2100; outside it the arithmetic still runs, the
//! polynomial models downstream just lose accuracy. Only *malformed*
//! instants (month 13, February 30, hour 24) are errors.
//!
//! [`JulianDate`] is two-part: `jd1` holds the midnight day number,
//! `jd2` the day fraction. Splitting keeps sub-second precision that a
//! single f64 in the 2.4-million range cannot.

use skywatch_core::constants::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY,
};
use skywatch_core::{AstroError, AstroResult};
use std::fmt;

/// A civil wall-clock instant, treated as UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

/// Two-part Julian Date: `jd1` is the midnight day number, `jd2` the
/// fraction of day since that midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl CivilTime {
    /// Creates a validated civil instant.
    ///
    /// # Errors
    ///
    /// [`AstroError::InvalidDate`] for a calendar violation,
    /// [`AstroError::InvalidClock`] for a time-of-day violation.
    ///
    /// ```
    /// use skywatch_time::CivilTime;
    ///
    /// let t = CivilTime::new(2025, 8, 23, 16, 0, 0.0)?;
    /// assert_eq!(t.day(), 23);
    ///
    /// assert!(CivilTime::new(2025, 2, 30, 0, 0, 0.0).is_err());
    /// assert!(CivilTime::new(2025, 1, 1, 24, 0, 0.0).is_err());
    /// # Ok::<(), skywatch_core::AstroError>(())
    /// ```
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> AstroResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AstroError::invalid_date(year, month, day, "month out of range"));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(AstroError::invalid_date(
                year,
                month,
                day,
                "day out of range for month",
            ));
        }
        if hour >= 24 {
            return Err(AstroError::invalid_clock(hour, minute, second, "hour out of range"));
        }
        if minute >= 60 {
            return Err(AstroError::invalid_clock(
                hour,
                minute,
                second,
                "minute out of range",
            ));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(AstroError::invalid_clock(
                hour,
                minute,
                second,
                "second out of range",
            ));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    /// Converts to a Julian Date.
    pub fn to_julian(&self) -> JulianDate {
        JulianDate::from_civil(self)
    }

    // Construction bypass for values already known valid (inverse
    // conversion, chrono interop).
    pub(crate) fn from_parts_unchecked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    /// Converts a civil UTC instant.
    ///
    /// Gregorian day-number arithmetic with every division floored toward
    /// negative infinity (`div_euclid`), then the day fraction from the
    /// clock components. Proleptic Gregorian outside the calendar's
    /// historical adoption.
    ///
    /// ```
    /// use skywatch_time::{CivilTime, JulianDate};
    ///
    /// let noon = CivilTime::new(2000, 1, 1, 12, 0, 0.0)?;
    /// assert_eq!(JulianDate::from_civil(&noon).value(), 2451545.0);
    /// # Ok::<(), skywatch_core::AstroError>(())
    /// ```
    pub fn from_civil(civil: &CivilTime) -> Self {
        let month = i64::from(civil.month);
        let a = (14 - month).div_euclid(12);
        let y = i64::from(civil.year) + 4800 - a;
        let m = month + 12 * a - 3;

        let jdn = i64::from(civil.day)
            + (153 * m + 2).div_euclid(5)
            + 365 * y
            + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;

        let jd1 = jdn as f64 - 0.5;
        let jd2 = f64::from(civil.hour) / 24.0
            + f64::from(civil.minute) / MINUTES_PER_DAY
            + civil.second / SECONDS_PER_DAY;

        Self::new(jd1, jd2)
    }

    /// Inverse Gregorian conversion.
    ///
    /// Exact mirror of [`from_civil`](Self::from_civil): proleptic
    /// Gregorian for all inputs. Round trips agree to well under half a
    /// second across the designed range.
    pub fn to_civil(&self) -> CivilTime {
        let jd = self.value() + 0.5;
        let z = libm::floor(jd);
        let f = jd - z;

        let alpha = libm::floor((z - 1867216.25) / 36524.25);
        let a = z + 1.0 + alpha - libm::floor(alpha / 4.0);
        let b = a + 1524.0;
        let c = libm::floor((b - 122.1) / 365.25);
        let d = libm::floor(365.25 * c);
        let e = libm::floor((b - d) / 30.6001);

        let day = (b - d - libm::floor(30.6001 * e)) as u32;
        let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
        let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;

        let mut total_seconds = f * SECONDS_PER_DAY;
        if total_seconds >= SECONDS_PER_DAY {
            total_seconds = SECONDS_PER_DAY - 1e-6;
        }
        let hour = (total_seconds / 3600.0) as u32;
        let minute = ((total_seconds - f64::from(hour) * 3600.0) / 60.0) as u32;
        let second = total_seconds - f64::from(hour) * 3600.0 - f64::from(minute) * 60.0;

        CivilTime::from_parts_unchecked(year, month, day, hour, minute, second)
    }

    /// The Julian Date as a single f64.
    pub fn value(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Days since J2000.0, precision-preserving.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    /// Julian centuries since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian millennia since J2000.0 (the VSOP series argument).
    pub fn julian_millennia(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_MILLENNIUM
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_minutes(&self, minutes: f64) -> Self {
        self.add_days(minutes / MINUTES_PER_DAY)
    }

    /// Signed difference `self - other` in days.
    pub fn diff_days(&self, other: &JulianDate) -> f64 {
        (self.jd1 - other.jd1) + (self.jd2 - other.jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.value())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_noon() {
        let civil = CivilTime::new(2000, 1, 1, 12, 0, 0.0).unwrap();
        let jd = JulianDate::from_civil(&civil);
        assert_eq!(jd.value(), 2451545.0);
        assert_eq!(jd.julian_centuries(), 0.0);
    }

    #[test]
    fn test_known_epochs() {
        // Unix epoch
        let civil = CivilTime::new(1970, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(JulianDate::from_civil(&civil).value(), 2440587.5);

        // Start of the designed range
        let civil = CivilTime::new(1900, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(JulianDate::from_civil(&civil).value(), 2415020.5);

        // Day fraction
        let civil = CivilTime::new(2000, 1, 1, 18, 0, 0.0).unwrap();
        assert_eq!(JulianDate::from_civil(&civil).value(), 2451545.25);
    }

    #[test]
    fn test_monotonicity() {
        let instants = [
            (1900, 1, 1, 0, 0, 0.0),
            (1900, 1, 1, 0, 0, 1.0),
            (1950, 6, 15, 12, 30, 0.0),
            (1999, 12, 31, 23, 59, 59.0),
            (2000, 1, 1, 0, 0, 0.0),
            (2000, 2, 29, 0, 0, 0.0),
            (2000, 3, 1, 0, 0, 0.0),
            (2077, 7, 7, 7, 7, 7.0),
            (2100, 12, 31, 23, 59, 59.0),
        ];
        let mut prev = f64::NEG_INFINITY;
        for &(y, mo, d, h, mi, s) in &instants {
            let jd = CivilTime::new(y, mo, d, h, mi, s).unwrap().to_julian().value();
            assert!(jd > prev, "JD not strictly increasing at {y}-{mo}-{d}");
            prev = jd;
        }
    }

    #[test]
    fn test_round_trip_under_half_second() {
        let samples = [
            (1900, 1, 1, 0, 0, 0.0),
            (1918, 11, 11, 11, 0, 0.0),
            (1969, 7, 20, 20, 17, 40.0),
            (2000, 2, 29, 23, 59, 59.0),
            (2025, 8, 23, 16, 0, 0.0),
            (2063, 4, 5, 12, 34, 56.789),
            (2100, 12, 31, 23, 0, 0.0),
        ];
        for &(y, mo, d, h, mi, s) in &samples {
            let civil = CivilTime::new(y, mo, d, h, mi, s).unwrap();
            let back = civil.to_julian().to_civil();
            assert_eq!(back.year(), y, "year mismatch for {civil}");
            assert_eq!(back.month(), mo, "month mismatch for {civil}");
            assert_eq!(back.day(), d, "day mismatch for {civil}");
            let fwd_s = f64::from(h) * 3600.0 + f64::from(mi) * 60.0 + s;
            let back_s =
                f64::from(back.hour()) * 3600.0 + f64::from(back.minute()) * 60.0 + back.second();
            assert!(
                (fwd_s - back_s).abs() < 0.5,
                "round trip off by {}s for {civil}",
                (fwd_s - back_s).abs()
            );
        }
    }

    #[test]
    fn test_malformed_dates_rejected() {
        assert!(CivilTime::new(2025, 13, 1, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2025, 0, 1, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2025, 2, 30, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2025, 4, 31, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2025, 1, 0, 0, 0, 0.0).is_err());
        // 1900 is not a leap year, 2000 is
        assert!(CivilTime::new(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(CivilTime::new(2000, 2, 29, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn test_malformed_clock_rejected() {
        assert!(CivilTime::new(2025, 1, 1, 24, 0, 0.0).is_err());
        assert!(CivilTime::new(2025, 1, 1, 0, 60, 0.0).is_err());
        assert!(CivilTime::new(2025, 1, 1, 0, 0, 60.0).is_err());
        assert!(CivilTime::new(2025, 1, 1, 0, 0, -0.001).is_err());
        assert!(CivilTime::new(2025, 1, 1, 0, 0, f64::NAN).is_err());
        assert!(CivilTime::new(2025, 1, 1, 23, 59, 59.999).is_ok());
    }

    #[test]
    fn test_century_scaling() {
        let jd = JulianDate::new(J2000_JD + DAYS_PER_JULIAN_CENTURY, 0.0);
        assert!((jd.julian_centuries() - 1.0).abs() < 1e-12);
        assert!((jd.julian_millennia() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic_helpers() {
        let jd = JulianDate::j2000();
        assert_eq!(jd.add_days(1.0).value(), 2451546.0);
        assert!((jd.add_minutes(1440.0).value() - 2451546.0).abs() < 1e-12);
        assert_eq!(jd.add_days(2.5).diff_days(&jd), 2.5);
    }

    #[test]
    fn test_two_part_precision() {
        // A sub-second step must survive the two-part representation.
        let base = CivilTime::new(2050, 6, 1, 3, 30, 0.0).unwrap().to_julian();
        let later = CivilTime::new(2050, 6, 1, 3, 30, 0.25).unwrap().to_julian();
        let dt_seconds = later.diff_days(&base) * SECONDS_PER_DAY;
        assert!((dt_seconds - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_display() {
        let civil = CivilTime::new(2025, 8, 23, 16, 0, 0.0).unwrap();
        assert_eq!(format!("{civil}"), "2025-08-23 16:00:00.000 UTC");
        let jd = JulianDate::from_f64(2451545.0);
        assert_eq!(format!("{jd}"), "JD 2451545.000000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let jd = JulianDate::new(2451545.0, 0.123456789);
        let json = serde_json::to_string(&jd).unwrap();
        let back: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(jd.jd1, back.jd1);
        assert_eq!(jd.jd2, back.jd2);
    }
}
