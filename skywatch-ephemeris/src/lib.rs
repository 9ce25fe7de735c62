//! Low-precision ephemeris: Sun, Moon, and planet positions.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`nutation`] | Four-term nutation, mean and true obliquity |
//! | [`sun`] | Solar polynomial model |
//! | [`moon`] | Reduced lunar series (14 longitude + 8 latitude terms) |
//! | [`vsop87`] | Truncated VSOP87-D coefficient tables |
//! | [`planets`] | Geocentric planet pipeline: light time, FK5, phase |
//! | [`magnitude`] | Apparent magnitudes, Saturn ring correction |
//! | [`body`] | The polymorphic [`Body`] / [`BodyPosition`] seam |
//! | [`errors`] | [`EphemerisError`] (startup table validation only) |
//!
//! # Precision Tier
//!
//! Every model here is a deliberately reduced series: positions good to
//! a few arcminutes, which keeps horizon and twilight crossings inside a
//! one-minute refinement tolerance at a fraction of the cost of the full
//! theories. The tier is documented per module, not silently upgraded.
//!
//! Numerical policy: inverse-trig arguments are clamped, light-time
//! non-convergence degrades to a flag, and only structurally broken
//! coefficient tables (a build defect) surface as an error.

pub mod body;
pub mod errors;
pub mod magnitude;
pub mod moon;
pub mod nutation;
pub mod planets;
pub mod sun;
pub mod vsop87;

pub use body::{Body, BodyPosition};
pub use errors::{EphemerisError, EphemerisResult};
pub use moon::MoonPosition;
pub use nutation::{mean_obliquity_deg, nutation, true_obliquity_deg, Nutation};
pub use planets::{Planet, PlanetPosition};
