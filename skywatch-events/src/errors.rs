//! Event-layer errors.
//!
//! Two things can fail here, and both are caller input: a malformed
//! search window handed to the crossing solver, and a timezone lookup
//! delegated to an external resolver. "No crossing in the window" is a
//! normal outcome (`None` / `Exhausted`), never an error, and a failed
//! timezone lookup is absorbed by the longitude fallback before it can
//! reach a caller who used [`resolve_or_estimate`](crate::timezone::resolve_or_estimate).

use skywatch_core::AstroError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    /// Search window, step, or tolerance failed validation.
    #[error("invalid crossing search: {message}")]
    InvalidSearch { message: String },

    /// An external timezone resolver failed. Recoverable via the
    /// longitude-based estimate.
    #[error("timezone lookup failed: {message}")]
    TimezoneLookup { message: String },

    /// Invalid observer or civil-time input from the layers below.
    #[error(transparent)]
    Astro(#[from] AstroError),
}

pub type EventResult<T> = Result<T, EventError>;

impl EventError {
    pub fn invalid_search(message: &str) -> Self {
        Self::InvalidSearch {
            message: message.to_string(),
        }
    }

    pub fn timezone_lookup(message: &str) -> Self {
        Self::TimezoneLookup {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EventError::invalid_search("start must precede end");
        assert_eq!(
            err.to_string(),
            "invalid crossing search: start must precede end"
        );
        let err = EventError::timezone_lookup("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_astro_error_converts() {
        fn inner() -> EventResult<()> {
            Err(skywatch_core::AstroError::invalid_latitude(95.0))?;
            Ok(())
        }
        assert!(matches!(inner(), Err(EventError::Astro(_))));
    }
}
