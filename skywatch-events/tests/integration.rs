use skywatch_core::Location;
use skywatch_ephemeris::{Body, Planet};
use skywatch_events::night::{scan_night_with, NightSchedule};
use skywatch_events::solver::TOLERANCE_MINUTE_DAYS;
use skywatch_events::timezone::{resolve_or_estimate, LongitudeEstimate};
use skywatch_events::twilight::TwilightBand;
use skywatch_events::{altitude_of, rise_set_report};
use skywatch_time::{CivilTime, JulianDate};

fn jd_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> JulianDate {
    CivilTime::new(year, month, day, hour, minute, 0.0)
        .unwrap()
        .to_julian()
}

// --- Full-pipeline altitude checks ---

#[test]
fn equinox_noon_altitude_at_greenwich() {
    // At the equinox the Sun's declination is near zero, so the noon
    // altitude is close to 90 - latitude.
    let greenwich = Location::new(51.4779, 0.0).unwrap();
    let noon = jd_at(2025, 3, 20, 12, 0);
    let alt = altitude_of(Body::Sun, &noon, &greenwich);
    assert!(
        (alt - (90.0 - 51.4779)).abs() < 2.0,
        "equinox noon altitude {alt}"
    );
}

#[test]
fn equinox_noon_near_zenith_at_equator() {
    let equator = Location::new(0.0, 0.0).unwrap();
    let noon = jd_at(2025, 3, 20, 12, 0);
    let alt = altitude_of(Body::Sun, &noon, &equator);
    assert!(alt > 85.0, "equator equinox noon altitude {alt}");
}

#[test]
fn sun_position_at_j2000() {
    let jd = JulianDate::from_f64(2451545.0);
    let pos = Body::Sun.position(&jd);
    assert!((pos.equatorial.ra_deg() - 281.29).abs() < 0.05);
    assert!((pos.equatorial.dec_deg() - (-23.03)).abs() < 0.05);
}

// --- Rise/set report against the real Sun ---

#[test]
fn sun_rise_and_set_at_greenwich_equinox() {
    let greenwich = Location::new(51.4779, 0.0).unwrap();
    let start = jd_at(2025, 3, 20, 0, 0).value();
    let report = rise_set_report(Body::Sun, start, &greenwich, None).unwrap();

    let rise = report.rise.expect("sunrise");
    let set = report.set.expect("sunset");
    let rise_hour = (rise.jd - start) * 24.0;
    let set_hour = (set.jd - start) * 24.0;
    // Geometric rise/set near 06:00 and 18:10 UT at the equinox.
    assert!((5.5..6.5).contains(&rise_hour), "rise hour {rise_hour}");
    assert!((17.5..18.7).contains(&set_hour), "set hour {set_hour}");

    let culmination = report.culmination.expect("culmination");
    assert!(
        (culmination.altitude_deg - 38.5).abs() < 2.0,
        "culmination altitude {}",
        culmination.altitude_deg
    );
    assert!(report.visible);
}

// --- Twilight classification against the real Sun ---

#[test]
fn midnight_sun_altitude_classifies_as_night() {
    // Greenwich, astronomical midnight in late October: well past
    // astronomical twilight.
    let greenwich = Location::new(51.4779, 0.0).unwrap();
    let midnight = jd_at(2025, 10, 21, 0, 30);
    let alt = altitude_of(Body::Sun, &midnight, &greenwich);
    assert_eq!(TwilightBand::classify(alt), TwilightBand::Night);
    assert_eq!(TwilightBand::classify(45.0), TwilightBand::Day);
}

// --- Night aggregation ---

#[test]
fn new_moon_october_night_is_dark_at_greenwich() {
    // 2025-10-21 is a new moon: the Moon tracks the Sun and the whole
    // astronomical night is moonless.
    let greenwich = Location::new(51.4779, 0.0).unwrap();
    let schedule = NightSchedule::new(greenwich, 0.0, 2025, 10, 21)
        .unwrap()
        .with_nights(1);
    let summary = skywatch_events::scan_schedule(&schedule).unwrap();

    assert_eq!(summary.interval_count, 1);
    let report = &summary.reports[0];
    let interval = report.dark_interval.expect("dark interval");
    assert!(
        (5.0..13.0).contains(&interval.duration_hours),
        "dark for {} h",
        interval.duration_hours
    );
    // Sun crossings bracket the interval start.
    let sun_down = report.crossings.sun_down.expect("sun down");
    assert!((interval.start_jd - sun_down).abs() < 2.0 * TOLERANCE_MINUTE_DAYS);
}

#[test]
fn synthetic_dark_window_recovers_its_duration() {
    let site = Location::new(42.550639, -72.876444).unwrap();
    let schedule = NightSchedule::new(site, -5.0, 2025, 10, 1).unwrap();
    let start = schedule.window_start_jd(0);
    // Force darkness for exactly six hours, 21:00-03:00 local.
    let sun = move |jd: f64| {
        let h = (jd - start) * 24.0;
        if (5.0..11.0).contains(&h) {
            -20.0
        } else {
            -10.0
        }
    };
    let report = scan_night_with(&schedule, 0, sun, |_| -30.0);
    let interval = report.dark_interval.expect("dark interval");
    assert!((interval.duration_hours - 6.0).abs() < 0.1);
    assert!(!interval.truncated);
}

// --- Magnitudes through the planet pipeline ---

#[test]
fn saturn_fainter_near_ring_plane_crossing() {
    // Rings were wide open around the 2017 opposition and nearly
    // edge-on through 2025; the ring term is worth about a magnitude.
    let open = Body::Planet(Planet::Saturn)
        .position(&jd_at(2017, 6, 15, 0, 0))
        .magnitude
        .expect("saturn magnitude");
    let edge_on = Body::Planet(Planet::Saturn)
        .position(&jd_at(2025, 9, 21, 0, 0))
        .magnitude
        .expect("saturn magnitude");
    assert!(
        open < edge_on - 0.2,
        "open-ring {open} vs edge-on {edge_on}"
    );
}

#[test]
fn moon_distance_stays_in_band() {
    for day in [0, 97, 205, 311] {
        let jd = JulianDate::from_f64(2460000.5 + day as f64);
        let pos = Body::Moon.position(&jd);
        let km = pos.distance_au.expect("moon distance") * skywatch_core::constants::AU_KM;
        assert!(
            (356_000.0..407_000.0).contains(&km),
            "moon distance {km} km"
        );
    }
}

#[test]
fn planet_light_time_converges() {
    let jd = jd_at(2025, 8, 29, 0, 0);
    for planet in Planet::ALL {
        let pos = Body::Planet(planet).position(&jd);
        assert!(pos.light_time_converged, "{planet:?} light time");
        assert!(pos.distance_au.expect("distance") > 0.2);
    }
}

// --- Timezone estimation ---

#[test]
fn longitude_fallback_for_known_sites() {
    let quabbin = Location::new(42.550639, -72.876444).unwrap();
    let info = resolve_or_estimate(&LongitudeEstimate, &quabbin);
    assert_eq!(info.utc_offset_hours, -5.0);
    assert_eq!(info.zone_id, "Etc/GMT+5");

    let greenwich = Location::new(51.4779, 0.0).unwrap();
    let info = resolve_or_estimate(&LongitudeEstimate, &greenwich);
    assert_eq!(info.utc_offset_hours, 0.0);
}

// --- Serialization gate ---

#[cfg(feature = "serde")]
#[test]
fn night_report_round_trips_through_json() {
    let site = Location::new(42.550639, -72.876444).unwrap();
    let schedule = NightSchedule::new(site, -5.0, 2025, 10, 1).unwrap();
    let report = scan_night_with(&schedule, 0, |_| -25.0, |_| -30.0);
    let json = serde_json::to_string(&report).unwrap();
    let back: skywatch_events::NightReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}
