//! Apparent visual magnitudes.
//!
//! `m = a0 + 5·log10(r·Δ) + a1·i + a2·i² + a3·i³` with per-planet
//! coefficient rows (phase angle `i` in degrees). Saturn adds the
//! ring-opening correction `0.044·|ΔU| − 2.60·sin|B| + 1.25·sin²B`,
//! where `ΔU` and `B` come from the ring-plane geometry at the instant.

use crate::planets::Planet;
use skywatch_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use skywatch_core::math::{log10, sincos};
use skywatch_time::JulianDate;

/// Phase-polynomial coefficients for one planet.
struct MagnitudeRow {
    a0: f64,
    a1: f64,
    a2: f64,
    a3: f64,
}

fn row(planet: Planet) -> MagnitudeRow {
    match planet {
        Planet::Mercury => MagnitudeRow {
            a0: -0.36,
            a1: 0.038,
            a2: -0.000273,
            a3: 0.000002,
        },
        Planet::Venus => MagnitudeRow {
            a0: -4.29,
            a1: 0.0009,
            a2: 0.000239,
            a3: -0.00000065,
        },
        Planet::Mars => MagnitudeRow {
            a0: -1.52,
            a1: 0.016,
            a2: 0.0,
            a3: 0.0,
        },
        Planet::Jupiter => MagnitudeRow {
            a0: -9.40,
            a1: 0.005,
            a2: 0.0,
            a3: 0.0,
        },
        Planet::Saturn => MagnitudeRow {
            a0: -8.88,
            a1: 0.0,
            a2: 0.0,
            a3: 0.0,
        },
        Planet::Uranus => MagnitudeRow {
            a0: -7.19,
            a1: 0.0,
            a2: 0.0,
            a3: 0.0,
        },
        Planet::Neptune => MagnitudeRow {
            a0: -6.87,
            a1: 0.0,
            a2: 0.0,
            a3: 0.0,
        },
    }
}

/// Saturn ring brightness correction in magnitudes.
///
/// `helio_*` are the planet's heliocentric ecliptic coordinates at the
/// emission instant, `geo_*` its apparent geocentric coordinates, all
/// radians.
pub fn saturn_ring_correction(
    jd: &JulianDate,
    helio_lon_rad: f64,
    helio_lat_rad: f64,
    geo_lon_rad: f64,
    geo_lat_rad: f64,
) -> f64 {
    let t = jd.julian_millennia();

    // Ring-plane inclination and node.
    let inclination = (28.075216 - 0.012998 * t + 0.000004 * t * t) * DEG_TO_RAD;
    let node = (169.508470 + 1.394681 * t + 0.000412 * t * t) * DEG_TO_RAD;

    let (sin_i, cos_i) = sincos(inclination);

    // Saturnicentric longitude of the Sun and of Earth, measured in the
    // ring plane.
    let u1 = libm::atan2(
        sin_i * libm::sin(helio_lat_rad)
            + cos_i * libm::cos(helio_lat_rad) * libm::sin(helio_lon_rad - node),
        libm::cos(helio_lat_rad) * libm::cos(helio_lon_rad - node),
    );
    let u2 = libm::atan2(
        sin_i * libm::sin(geo_lat_rad)
            + cos_i * libm::cos(geo_lat_rad) * libm::sin(geo_lon_rad - node),
        libm::cos(geo_lat_rad) * libm::cos(geo_lon_rad - node),
    );
    let delta_u_deg = (u1 - u2).abs() * RAD_TO_DEG;

    // Ring-opening angle as seen from Earth.
    let b = libm::asin(
        sin_i * libm::cos(geo_lat_rad) * libm::sin(geo_lon_rad - node)
            - cos_i * libm::sin(geo_lat_rad),
    );
    let sin_b = libm::sin(b.abs());

    0.044 * delta_u_deg - 2.60 * sin_b + 1.25 * sin_b * sin_b
}

/// Apparent visual magnitude of a planet.
///
/// `r_au` heliocentric distance, `delta_au` geocentric distance,
/// `phase_angle_deg` the Sun-planet-Earth angle. The ecliptic
/// coordinates are only consulted for Saturn's ring correction.
#[allow(clippy::too_many_arguments)]
pub fn apparent_magnitude(
    planet: Planet,
    jd: &JulianDate,
    r_au: f64,
    delta_au: f64,
    phase_angle_deg: f64,
    helio_lon_rad: f64,
    helio_lat_rad: f64,
    geo_lon_rad: f64,
    geo_lat_rad: f64,
) -> f64 {
    let row = row(planet);
    let i = phase_angle_deg;
    let correction = if planet == Planet::Saturn {
        saturn_ring_correction(jd, helio_lon_rad, helio_lat_rad, geo_lon_rad, geo_lat_rad)
    } else {
        0.0
    };

    row.a0 + 5.0 * log10(r_au * delta_au) + row.a1 * i + row.a2 * i * i + row.a3 * i * i * i
        + correction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_term_dims_with_range() {
        // Same phase, doubled distances: 5·log10 fades the planet.
        let jd = JulianDate::j2000();
        let near = apparent_magnitude(Planet::Mars, &jd, 1.5, 0.7, 20.0, 0.0, 0.0, 0.0, 0.0);
        let far = apparent_magnitude(Planet::Mars, &jd, 1.5, 1.4, 20.0, 0.0, 0.0, 0.0, 0.0);
        assert!((far - near - 5.0 * log10(2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_phase_term_dims_crescents() {
        let jd = JulianDate::j2000();
        let full = apparent_magnitude(Planet::Mercury, &jd, 0.4, 1.0, 5.0, 0.0, 0.0, 0.0, 0.0);
        let crescent = apparent_magnitude(Planet::Mercury, &jd, 0.4, 1.0, 120.0, 0.0, 0.0, 0.0, 0.0);
        assert!(crescent > full);
    }

    #[test]
    fn test_saturn_ring_correction_changes_with_geometry() {
        // Same distances and phase, different position along the orbit:
        // along the node the rings are edge-on (B ≈ 0), a quarter orbit
        // later they are wide open and the planet brightens.
        let jd = JulianDate::j2000();
        let t = jd.julian_millennia();
        let node = (169.508470 + 1.394681 * t + 0.000412 * t * t) * DEG_TO_RAD;
        let quarter = node + std::f64::consts::FRAC_PI_2;
        let edge_on =
            apparent_magnitude(Planet::Saturn, &jd, 9.5, 9.0, 3.0, node, 0.0, node, 0.0);
        let open =
            apparent_magnitude(Planet::Saturn, &jd, 9.5, 9.0, 3.0, quarter, 0.0, quarter, 0.0);
        assert!(
            open < edge_on - 0.5,
            "open rings {open} should be much brighter than edge-on {edge_on}"
        );
    }

    #[test]
    fn test_ring_correction_zero_when_edge_on() {
        // If the ring-opening angle B and ΔU are both zero the
        // correction vanishes.
        let jd = JulianDate::j2000();
        let t = jd.julian_millennia();
        let node = (169.508470 + 1.394681 * t + 0.000412 * t * t) * DEG_TO_RAD;
        // A point in the ring plane along the node has B = 0.
        let corr = saturn_ring_correction(&jd, node, 0.0, node, 0.0);
        assert!(corr.abs() < 1e-12);
    }

    #[test]
    fn test_uranus_neptune_visible_range() {
        let jd = JulianDate::j2000();
        let uranus = apparent_magnitude(Planet::Uranus, &jd, 19.8, 19.0, 1.5, 0.0, 0.0, 0.0, 0.0);
        let neptune = apparent_magnitude(Planet::Neptune, &jd, 30.1, 29.5, 1.0, 0.0, 0.0, 0.0, 0.0);
        assert!((5.0..6.5).contains(&uranus), "Uranus {uranus}");
        assert!((7.3..8.3).contains(&neptune), "Neptune {neptune}");
    }
}
