//! Twilight classification, the event-clamping policy, and the
//! one-day rise/set/culmination report.
//!
//! Clamping is a presentation policy, not a physical one: planets and
//! other bodies are only interesting while the sky is dark enough to
//! see them, so their events are pulled into the twilight window. The
//! Sun and Moon define that window and are never clamped.

use crate::altitude::altitude_at;
use crate::errors::EventResult;
use crate::solver::{find_crossing, CrossingSearch, Direction};
use skywatch_core::Location;
use skywatch_ephemeris::Body;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solar altitude below which civil twilight begins.
pub const CIVIL_TWILIGHT_DEG: f64 = -6.0;

/// Solar altitude below which nautical twilight begins.
pub const NAUTICAL_TWILIGHT_DEG: f64 = -12.0;

/// Solar altitude below which astronomical twilight begins.
pub const ASTRONOMICAL_TWILIGHT_DEG: f64 = -18.0;

/// Sky brightness band for a given solar altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TwilightBand {
    Day,
    Civil,
    Nautical,
    Astronomical,
    Night,
    /// Altitude outside [-90, 90]; the input was not a real altitude.
    Unknown,
}

impl TwilightBand {
    /// Classifies a solar altitude in degrees.
    ///
    /// Bands include their darker bound and exclude the brighter one:
    /// an altitude of exactly 0° is `Day`, exactly -6° is `Civil`, and
    /// so on down.
    pub fn classify(sun_altitude_deg: f64) -> Self {
        if (0.0..=90.0).contains(&sun_altitude_deg) {
            TwilightBand::Day
        } else if (CIVIL_TWILIGHT_DEG..0.0).contains(&sun_altitude_deg) {
            TwilightBand::Civil
        } else if (NAUTICAL_TWILIGHT_DEG..CIVIL_TWILIGHT_DEG).contains(&sun_altitude_deg) {
            TwilightBand::Nautical
        } else if (ASTRONOMICAL_TWILIGHT_DEG..NAUTICAL_TWILIGHT_DEG).contains(&sun_altitude_deg) {
            TwilightBand::Astronomical
        } else if (-90.0..ASTRONOMICAL_TWILIGHT_DEG).contains(&sun_altitude_deg) {
            TwilightBand::Night
        } else {
            TwilightBand::Unknown
        }
    }

    /// True for bands dark enough for deep-sky observation.
    pub fn is_dark(self) -> bool {
        matches!(self, TwilightBand::Astronomical | TwilightBand::Night)
    }
}

/// A twilight window in Julian Dates, solved by the caller (typically
/// evening and morning astronomical-twilight crossings).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TwilightWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl TwilightWindow {
    pub fn contains(&self, jd: f64) -> bool {
        (self.start_jd..=self.end_jd).contains(&jd)
    }
}

/// What kind of horizon event an instant represents, for clamping
/// purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    Rise,
    Set,
    Culmination,
}

/// An event instant after the clamping policy, with a record of whether
/// it was moved.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClampedEvent {
    pub jd: f64,
    pub clamped: bool,
}

/// Applies the twilight clamping policy to an event instant.
///
/// The Sun and Moon pass through untouched: they define the window. For
/// every other body, a rise earlier than the window start is clamped to
/// the start, a set later than the window end is clamped to the end,
/// and a culmination is clamped into the window from either side.
pub fn clamp_to_twilight_window(
    event_jd: f64,
    kind: EventKind,
    window: &TwilightWindow,
    body: Body,
) -> ClampedEvent {
    if body.is_twilight_exempt() {
        return ClampedEvent {
            jd: event_jd,
            clamped: false,
        };
    }
    let clamped_jd = match kind {
        EventKind::Rise => event_jd.max(window.start_jd),
        EventKind::Set => event_jd.min(window.end_jd),
        EventKind::Culmination => event_jd.clamp(window.start_jd, window.end_jd),
    };
    ClampedEvent {
        jd: clamped_jd,
        clamped: clamped_jd != event_jd,
    }
}

/// Culmination instant and the altitude reached there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Culmination {
    pub jd: f64,
    pub altitude_deg: f64,
}

/// Rise, set, and culmination of one body over a one-day window.
///
/// Any event may be absent (circumpolar or never-rising bodies).
/// `visible` is true when the body culminates above the horizon inside
/// the twilight window (always inside, when no window was supplied).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiseSetReport {
    pub body: Body,
    pub rise: Option<ClampedEvent>,
    pub set: Option<ClampedEvent>,
    pub culmination: Option<Culmination>,
    pub visible: bool,
}

/// Rise/set/culmination for `body` over the day starting at `start_jd`.
///
/// The rise is searched over `[start, start + 1]` with an hourly coarse
/// scan refined to the minute tier; the set over the following 1.5 days
/// from the rise. The culmination is taken as the midpoint of rise and
/// set, which is exact for a symmetric diurnal arc and well inside the
/// minute tolerance otherwise. When `window` is given the clamping
/// policy is applied per [`clamp_to_twilight_window`].
///
/// # Errors
///
/// [`EventError::InvalidSearch`](crate::errors::EventError::InvalidSearch)
/// for a non-finite `start_jd`.
pub fn rise_set_report(
    body: Body,
    start_jd: f64,
    observer: &Location,
    window: Option<&TwilightWindow>,
) -> EventResult<RiseSetReport> {
    rise_set_report_with(|jd| altitude_at(body, jd, observer), body, start_jd, window)
}

/// [`rise_set_report`] with the altitude function supplied by the
/// caller.
pub fn rise_set_report_with(
    altitude: impl Fn(f64) -> f64,
    body: Body,
    start_jd: f64,
    window: Option<&TwilightWindow>,
) -> EventResult<RiseSetReport> {
    let rise_search =
        CrossingSearch::new(start_jd, start_jd + 1.0, 0.0, Direction::Rising).with_step_minutes(60.0);
    let rise = find_crossing(&altitude, &rise_search)?;

    let (set, culmination) = match rise {
        Some(rise) => {
            let set_search = CrossingSearch::new(rise.jd, rise.jd + 1.5, 0.0, Direction::Falling)
                .with_step_minutes(60.0);
            let set = find_crossing(&altitude, &set_search)?;
            let culmination = set.map(|set| {
                let mid = 0.5 * (rise.jd + set.jd);
                Culmination {
                    jd: mid,
                    altitude_deg: altitude(mid),
                }
            });
            (set, culmination)
        }
        None => (None, None),
    };

    let apply = |jd: f64, kind: EventKind| match window {
        Some(w) => clamp_to_twilight_window(jd, kind, w, body),
        None => ClampedEvent { jd, clamped: false },
    };

    let visible = match (&culmination, window) {
        (Some(c), Some(w)) if !body.is_twilight_exempt() => {
            c.altitude_deg > 0.0 && altitude_positive_in(w, &altitude)
        }
        (Some(c), _) => c.altitude_deg > 0.0,
        (None, _) => false,
    };

    Ok(RiseSetReport {
        body,
        rise: rise.map(|e| apply(e.jd, EventKind::Rise)),
        set: set.map(|e| apply(e.jd, EventKind::Set)),
        culmination: culmination.map(|c| {
            let clamped = apply(c.jd, EventKind::Culmination);
            Culmination {
                jd: clamped.jd,
                altitude_deg: if clamped.clamped {
                    altitude(clamped.jd)
                } else {
                    c.altitude_deg
                },
            }
        }),
        visible,
    })
}

/// True when the body spends any part of the window above the horizon,
/// checked on a coarse quarter-hour grid.
fn altitude_positive_in(window: &TwilightWindow, altitude: &impl Fn(f64) -> f64) -> bool {
    let step = 15.0 / 1440.0;
    let mut jd = window.start_jd;
    while jd <= window.end_jd {
        if altitude(jd) > 0.0 {
            return true;
        }
        jd += step;
    }
    false
}
