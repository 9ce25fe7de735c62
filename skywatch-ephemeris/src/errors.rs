//! Ephemeris-layer errors.
//!
//! The position models themselves are total functions of time: inverse
//! trig is clamped and light-time non-convergence degrades to a flag on
//! the result. The only failure the layer can report is a structurally
//! broken coefficient table, which is a build defect caught at startup
//! (see [`crate::vsop87::validate_tables`]), never a per-call condition.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EphemerisError {
    /// A VSOP series has an empty leading block for some variable.
    #[error("empty {variable} series for {planet}")]
    EmptySeries {
        planet: &'static str,
        variable: &'static str,
    },
}

pub type EphemerisResult<T> = Result<T, EphemerisError>;

impl EphemerisError {
    pub fn empty_series(planet: &'static str, variable: &'static str) -> Self {
        Self::EmptySeries { planet, variable }
    }
}
