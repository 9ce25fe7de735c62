//! Apparent geocentric planet positions.
//!
//! Pipeline per instant: heliocentric spherical coordinates of the
//! target and Earth from the truncated VSOP87 tables, light-time
//! fixed-point iteration, geocentric ecliptic coordinates, FK5 frame
//! correction, nutation in longitude, rotation by the true obliquity to
//! equatorial, then phase angle and apparent magnitude.
//!
//! The light-time loop re-evaluates the target at `t − τ` with
//! `τ = 0.0057755183·Δ` days until the geocentric distance settles to
//! 1e-8 AU. The cap of 10 iterations is a defensive bound — convergence
//! takes 2-3 passes everywhere in the designed range; if the cap is ever
//! hit the last iterate is kept and [`PlanetPosition::light_time_converged`]
//! reports it.

use crate::magnitude::apparent_magnitude;
use crate::nutation::{mean_obliquity_deg, nutation};
use crate::vsop87::{self, HeliocentricSpherical, VsopSeries};
use skywatch_core::angle::{asin_deg, atan2_deg, clamp_unit};
use skywatch_core::constants::{DEG_TO_RAD, LIGHT_TIME_DAYS_PER_AU};
use skywatch_core::math::{sincos, sqrt};
use skywatch_coords::EquatorialCoordinate;
use skywatch_time::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LIGHT_TIME_TOLERANCE_AU: f64 = 1e-8;
const LIGHT_TIME_MAX_ITERATIONS: usize = 10;

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = DEG_TO_RAD / 3600.0;

/// The seven planets this engine positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        self.series().name
    }

    pub(crate) fn series(&self) -> &'static VsopSeries {
        match self {
            Planet::Mercury => &vsop87::mercury::MERCURY,
            Planet::Venus => &vsop87::venus::VENUS,
            Planet::Mars => &vsop87::mars::MARS,
            Planet::Jupiter => &vsop87::jupiter::JUPITER,
            Planet::Saturn => &vsop87::saturn::SATURN,
            Planet::Uranus => &vsop87::uranus::URANUS,
            Planet::Neptune => &vsop87::neptune::NEPTUNE,
        }
    }
}

/// Apparent geocentric position and photometry of a planet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetPosition {
    pub equatorial: EquatorialCoordinate,
    /// Geocentric distance, AU.
    pub distance_au: f64,
    /// Heliocentric distance at the emission instant, AU.
    pub radius_au: f64,
    /// Phase angle Sun-planet-Earth, degrees.
    pub phase_angle_deg: f64,
    /// Illuminated fraction of the disk, `[0, 1]`.
    pub phase_fraction: f64,
    /// Apparent visual magnitude.
    pub magnitude: f64,
    /// Light travel time planet → Earth, days.
    pub light_time_days: f64,
    /// False if the light-time iteration hit its cap; the last iterate
    /// is still used.
    pub light_time_converged: bool,
}

fn rectangular(helio: &HeliocentricSpherical) -> (f64, f64, f64) {
    let (sin_b, cos_b) = sincos(helio.latitude_rad);
    let (sin_l, cos_l) = sincos(helio.longitude_rad);
    let r = helio.radius_au;
    (r * cos_b * cos_l, r * cos_b * sin_l, r * sin_b)
}

fn geocentric_rect(
    target: &HeliocentricSpherical,
    earth: &HeliocentricSpherical,
) -> (f64, f64, f64) {
    let (xt, yt, zt) = rectangular(target);
    let (xe, ye, ze) = rectangular(earth);
    (xt - xe, yt - ye, zt - ze)
}

/// Apparent geocentric position of a planet.
pub fn geocentric_position(planet: Planet, jd: &JulianDate) -> PlanetPosition {
    let series = planet.series();
    let tau_jd = jd.julian_millennia();
    let earth = vsop87::earth::EARTH.evaluate(tau_jd);

    // Light-time fixed point on the geocentric distance. Only delta
    // feeds the iteration; the vector is rebuilt after the Earth shift.
    let mut light_time = 0.0;
    let mut target = series.evaluate(tau_jd);
    let mut delta = {
        let (x, y, z) = geocentric_rect(&target, &earth);
        sqrt(x * x + y * y + z * z)
    };
    let mut converged = false;
    for _ in 0..LIGHT_TIME_MAX_ITERATIONS {
        light_time = LIGHT_TIME_DAYS_PER_AU * delta;
        let tau_emit = jd.add_days(-light_time).julian_millennia();
        target = series.evaluate(tau_emit);
        let (x, y, z) = geocentric_rect(&target, &earth);
        let next_delta = sqrt(x * x + y * y + z * z);
        let settled = (next_delta - delta).abs() < LIGHT_TIME_TOLERANCE_AU;
        delta = next_delta;
        if settled {
            converged = true;
            break;
        }
    }

    // Aberration of the observer: Earth is also displaced over the
    // light-travel interval.
    let earth_emit = vsop87::earth::EARTH.evaluate(jd.add_days(-light_time).julian_millennia());
    let (xt, yt, zt) = rectangular(&target);
    let (xe, ye, ze) = rectangular(&earth_emit);
    let (x, y, z) = (xt - xe, yt - ye, zt - ze);
    delta = sqrt(x * x + y * y + z * z);

    let radius_au = target.radius_au;
    let sun_distance_au = earth_emit.radius_au;

    // Geocentric ecliptic coordinates, radians.
    let mut lambda = libm::atan2(y, x);
    let mut beta = libm::atan(z / sqrt(x * x + y * y));

    // FK5 frame correction.
    let t_millennia = jd.julian_millennia();
    let t_centuries = 10.0 * t_millennia;
    let l_prime = lambda - (1.397 * t_centuries + 0.00031 * t_centuries * t_centuries) * DEG_TO_RAD;
    let d_lambda = (-0.09033
        + 0.03916 * (libm::cos(l_prime) + libm::sin(l_prime)) * libm::tan(beta))
        * ARCSEC_TO_RAD;
    let d_beta = 0.03916 * (libm::cos(l_prime) - libm::sin(l_prime)) * ARCSEC_TO_RAD;
    lambda += d_lambda;
    beta += d_beta;

    // Nutation in longitude, true obliquity, rotate to equatorial.
    let nut = nutation(jd);
    let eps = (mean_obliquity_deg(jd) + nut.delta_eps_deg) * DEG_TO_RAD;
    lambda += nut.delta_psi_deg * DEG_TO_RAD;

    let ra = atan2_deg(
        libm::sin(lambda) * libm::cos(eps) - libm::tan(beta) * libm::sin(eps),
        libm::cos(lambda),
    );
    let dec = asin_deg(
        libm::sin(beta) * libm::cos(eps) + libm::cos(beta) * libm::sin(eps) * libm::sin(lambda),
    );

    // Phase angle from the Sun-planet-Earth triangle; the fraction is
    // the quotient form of the same derivation.
    let cos_phase = clamp_unit(
        (radius_au * radius_au + delta * delta - sun_distance_au * sun_distance_au)
            / (2.0 * radius_au * delta),
    );
    let phase_angle_deg = libm::acos(cos_phase) / DEG_TO_RAD;
    let phase_fraction = ((radius_au + delta) * (radius_au + delta)
        - sun_distance_au * sun_distance_au)
        / (4.0 * radius_au * delta);

    let magnitude = apparent_magnitude(
        planet,
        jd,
        radius_au,
        delta,
        phase_angle_deg,
        target.longitude_rad,
        target.latitude_rad,
        lambda,
        beta,
    );

    PlanetPosition {
        equatorial: EquatorialCoordinate::new(ra, dec),
        distance_au: delta,
        radius_au,
        phase_angle_deg,
        phase_fraction,
        magnitude,
        light_time_days: light_time,
        light_time_converged: converged,
    }
}
