//! Coordinate types and the topocentric transform.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`equatorial`] | Right ascension / declination pairs |
//! | [`horizontal`] | Azimuth / altitude pairs |
//! | [`transform`] | Equatorial → horizontal for an observer and instant |
//!
//! Azimuth is measured from north through east, `[0, 360)`.

pub mod equatorial;
pub mod horizontal;
pub mod transform;

pub use equatorial::EquatorialCoordinate;
pub use horizontal::HorizontalCoordinate;
pub use transform::{equatorial_to_horizontal, hour_angle_degrees};
