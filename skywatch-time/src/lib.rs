//! Civil-to-Julian time conversion and sidereal time.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`julian`] | [`CivilTime`], two-part [`JulianDate`], century/millennium scaling |
//! | [`sidereal`] | Greenwich and local mean sidereal time in degrees |
//!
//! With the `chrono` feature, `chrono::DateTime<Utc>` converts directly
//! into both time types.

pub mod julian;
pub mod sidereal;

#[cfg(feature = "chrono")]
mod chrono_support;

pub use julian::{CivilTime, JulianDate};
pub use sidereal::{gmst_degrees, local_sidereal_degrees};
