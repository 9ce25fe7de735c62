//! Truncated VSOP87-D coefficient tables.
//!
//! Heliocentric spherical coordinates of the mean ecliptic and equinox
//! of date. Each variable (longitude, latitude, radius) is a polynomial
//! in Julian millennia τ whose coefficients are themselves periodic
//! sums: `Σ_k τ^k · Σ_i a_i·cos(b_i + c_i·τ)`.
//!
//! Precision tier: these are reduced subsets of the full theory — the
//! leading terms of each block, enough for positions good to a few
//! arcminutes over 1900-2100. That is the product tier, documented here
//! rather than silently upgraded; the full tables run to thousands of
//! terms and serve no purpose at the horizon-crossing tolerance this
//! workspace targets.
//!
//! Longitude and latitude evaluate in radians (the native VSOP unit),
//! radius in AU.

pub mod earth;
pub mod jupiter;
pub mod mars;
pub mod mercury;
pub mod neptune;
pub mod saturn;
pub mod uranus;
pub mod venus;

use crate::errors::{EphemerisError, EphemerisResult};
use std::f64::consts::TAU;

/// One periodic term: contributes `a·cos(b + c·τ)`.
#[derive(Debug, Clone, Copy)]
pub struct VsopTerm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl VsopTerm {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

/// Up to six blocks (powers τ⁰..τ⁵) for each spherical variable.
#[derive(Debug, Clone, Copy)]
pub struct VsopSeries {
    pub name: &'static str,
    pub longitude: [&'static [VsopTerm]; 6],
    pub latitude: [&'static [VsopTerm]; 6],
    pub radius: [&'static [VsopTerm]; 6],
}

/// Heliocentric spherical coordinates: longitude and latitude in
/// radians, radius in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricSpherical {
    pub longitude_rad: f64,
    pub latitude_rad: f64,
    pub radius_au: f64,
}

fn evaluate_blocks(blocks: &[&'static [VsopTerm]; 6], tau: f64) -> f64 {
    let mut sums = [0.0; 6];
    for (k, block) in blocks.iter().enumerate() {
        let mut s = 0.0;
        for term in block.iter() {
            s += term.a * libm::cos(term.b + term.c * tau);
        }
        sums[k] = s;
    }
    // Horner in tau.
    sums[0] + tau * (sums[1] + tau * (sums[2] + tau * (sums[3] + tau * (sums[4] + tau * sums[5]))))
}

impl VsopSeries {
    /// Evaluates the series at `tau` Julian millennia since J2000.0.
    ///
    /// Longitude is wrapped to `[0, 2π)`.
    pub fn evaluate(&self, tau: f64) -> HeliocentricSpherical {
        let l = evaluate_blocks(&self.longitude, tau);
        let b = evaluate_blocks(&self.latitude, tau);
        let r = evaluate_blocks(&self.radius, tau);
        let mut wrapped = l - TAU * skywatch_core::math::floor(l / TAU);
        if wrapped >= TAU {
            wrapped -= TAU;
        }
        HeliocentricSpherical {
            longitude_rad: wrapped,
            latitude_rad: b,
            radius_au: r,
        }
    }

    /// Startup check: the leading longitude and radius blocks must be
    /// non-empty or every downstream position is garbage.
    pub fn validate(&self) -> EphemerisResult<()> {
        if self.longitude[0].is_empty() {
            return Err(EphemerisError::empty_series(self.name, "longitude"));
        }
        if self.radius[0].is_empty() {
            return Err(EphemerisError::empty_series(self.name, "radius"));
        }
        Ok(())
    }
}

/// Validates every shipped table. Call once at startup; a failure is a
/// build defect, not a runtime condition.
pub fn validate_tables() -> EphemerisResult<()> {
    for series in [
        &mercury::MERCURY,
        &venus::VENUS,
        &earth::EARTH,
        &mars::MARS,
        &jupiter::JUPITER,
        &saturn::SATURN,
        &uranus::URANUS,
        &neptune::NEPTUNE,
    ] {
        series.validate()?;
    }
    Ok(())
}

// Structurally broken tables fail the build, not the first query.
const _: () = {
    assert!(!mercury::MERCURY.longitude[0].is_empty());
    assert!(!venus::VENUS.longitude[0].is_empty());
    assert!(!earth::EARTH.longitude[0].is_empty());
    assert!(!mars::MARS.longitude[0].is_empty());
    assert!(!jupiter::JUPITER.longitude[0].is_empty());
    assert!(!saturn::SATURN.longitude[0].is_empty());
    assert!(!uranus::URANUS.longitude[0].is_empty());
    assert!(!neptune::NEPTUNE.longitude[0].is_empty());
    assert!(!mercury::MERCURY.radius[0].is_empty());
    assert!(!venus::VENUS.radius[0].is_empty());
    assert!(!earth::EARTH.radius[0].is_empty());
    assert!(!mars::MARS.radius[0].is_empty());
    assert!(!jupiter::JUPITER.radius[0].is_empty());
    assert!(!saturn::SATURN.radius[0].is_empty());
    assert!(!uranus::URANUS.radius[0].is_empty());
    assert!(!neptune::NEPTUNE.radius[0].is_empty());
};
