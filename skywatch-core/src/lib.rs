//! Shared foundations for the skywatch workspace.
//!
//! `skywatch-core` carries the pieces every other crate needs: strict
//! input validation, degree-based angle utilities over a deterministic
//! `libm` backend, the observer [`Location`] type, and the constant
//! vocabulary of the models.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | `[0, 360)` normalization, clamped inverse trig, degree-argument wrappers |
//! | [`location`] | Validated observer latitude/longitude |
//! | [`constants`] | Epochs, unit conversions, physical constants |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//! | [`math`] | Thin `libm` wrappers |
//!
//! # Design Notes
//!
//! - **Degrees throughout**: the polynomial models this workspace
//!   implements are published in degrees, so the public API stays in
//!   degrees and radians appear only at the `libm` boundary.
//! - **Validate once**: [`Location`] and the civil-time types reject bad
//!   input at construction; downstream math assumes validated values.
//! - **Errors are for callers**: numerical domain excursions inside the
//!   models are clamped, not surfaced. See [`errors`] for the policy.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use errors::{AstroError, AstroResult};
pub use location::Location;
