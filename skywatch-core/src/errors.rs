//! Error types shared across the skywatch workspace.
//!
//! The engine draws a hard line between *input validation* failures, which
//! surface as errors, and *numerical* trouble, which is absorbed internally
//! (inverse-trig arguments are clamped, non-convergence is reported as a
//! flag on the result). [`AstroError`] therefore only has variants for
//! things the caller handed us:
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidLatitude`](AstroError::InvalidLatitude) | latitude outside [-90°, +90°] |
//! | [`InvalidLongitude`](AstroError::InvalidLongitude) | longitude outside [-180°, +180°] |
//! | [`InvalidDate`](AstroError::InvalidDate) | calendar validation failures |
//! | [`InvalidClock`](AstroError::InvalidClock) | time-of-day validation failures |
//! | [`NotFinite`](AstroError::NotFinite) | NaN or infinite numeric input |
//!
//! Out-of-range coordinates are rejected, never silently clamped: a latitude
//! of 91° is a caller bug, and clamping it would turn a loud failure into a
//! subtly wrong chart.
//!
//! Most fallible functions return [`AstroResult<T>`]. Use the constructor
//! methods for consistent error creation:
//!
//! ```
//! use skywatch_core::{AstroError, AstroResult};
//!
//! fn check_lat(lat_deg: f64) -> AstroResult<f64> {
//!     if !(-90.0..=90.0).contains(&lat_deg) {
//!         return Err(AstroError::invalid_latitude(lat_deg));
//!     }
//!     Ok(lat_deg)
//! }
//! ```

use thiserror::Error;

/// Input-validation error for the skywatch crates.
///
/// Every variant describes malformed caller input. Numerical issues inside
/// the models never appear here; see the module docs for the policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// Latitude outside [-90°, +90°].
    #[error("latitude {value}° outside [-90°, +90°]")]
    InvalidLatitude { value: f64 },

    /// Longitude outside [-180°, +180°].
    #[error("longitude {value}° outside [-180°, +180°]")]
    InvalidLongitude { value: f64 },

    /// Invalid calendar date (e.g. February 30, month 13).
    #[error("invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        message: String,
    },

    /// Invalid time of day (e.g. hour 24, second 61).
    #[error("invalid clock time {hour:02}:{minute:02}:{second:06.3}: {message}")]
    InvalidClock {
        hour: u32,
        minute: u32,
        second: f64,
        message: String,
    },

    /// A numeric input was NaN or infinite.
    #[error("non-finite value {value} for {context}")]
    NotFinite { context: String, value: f64 },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates an [`InvalidLatitude`](Self::InvalidLatitude) error.
    pub fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an [`InvalidLongitude`](Self::InvalidLongitude) error.
    pub fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i32, month: u32, day: u32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidClock`](Self::InvalidClock) error.
    pub fn invalid_clock(hour: u32, minute: u32, second: f64, reason: &str) -> Self {
        Self::InvalidClock {
            hour,
            minute,
            second,
            message: reason.to_string(),
        }
    }

    /// Creates a [`NotFinite`](Self::NotFinite) error.
    pub fn not_finite(context: &str, value: f64) -> Self {
        Self::NotFinite {
            context: context.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_latitude_message() {
        let err = AstroError::invalid_latitude(91.5);
        assert_eq!(err.to_string(), "latitude 91.5° outside [-90°, +90°]");
    }

    #[test]
    fn test_invalid_longitude_message() {
        let err = AstroError::invalid_longitude(-180.25);
        assert!(err.to_string().contains("-180.25"));
        assert!(err.to_string().contains("[-180°, +180°]"));
    }

    #[test]
    fn test_invalid_date_message() {
        let err = AstroError::invalid_date(2025, 2, 30, "day out of range for month");
        assert_eq!(
            err.to_string(),
            "invalid date 2025-02-30: day out of range for month"
        );
    }

    #[test]
    fn test_invalid_clock_message() {
        let err = AstroError::invalid_clock(24, 0, 0.0, "hour out of range");
        assert!(err.to_string().contains("24:00"));
        assert!(err.to_string().contains("hour out of range"));
    }

    #[test]
    fn test_not_finite_message() {
        let err = AstroError::not_finite("latitude", f64::NAN);
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AstroError>();
        _assert_sync::<AstroError>();
    }
}
