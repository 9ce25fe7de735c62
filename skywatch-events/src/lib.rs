//! Night-sky event engine: threshold crossings, rise/set reports,
//! dark-interval aggregation, twilight policy, timezone estimation.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`solver`] | Coarse-scan + bisection threshold-crossing state machine |
//! | [`altitude`] | Body altitude as a plain function of Julian Date |
//! | [`twilight`] | Twilight bands, the clamping policy, rise/set reports |
//! | [`night`] | Per-night scans and the dark-interval aggregator |
//! | [`timezone`] | Resolver seam and the longitude-based estimate |
//! | [`errors`] | [`EventError`] |
//!
//! Everything here works on raw `f64` Julian Date values so the solver
//! can treat time as an ordinary scalar; conversion back to civil time
//! is the caller's concern via `skywatch-time`.

pub mod altitude;
pub mod errors;
pub mod night;
pub mod solver;
pub mod timezone;
pub mod twilight;

pub use altitude::{altitude_at, altitude_of};
pub use errors::{EventError, EventResult};
pub use night::{
    scan_night, scan_night_with, scan_schedule, summarize, CrossingTimes, DarkInterval,
    DarkSummary, NightReport, NightSchedule,
};
pub use solver::{
    find_crossing, refine_bracket, CrossingEvent, CrossingSearch, Direction, SolverState,
    TOLERANCE_MINUTE_DAYS, TOLERANCE_SECOND_DAYS,
};
pub use timezone::{resolve_or_estimate, LongitudeEstimate, TimezoneInfo, TimezoneResolver};
pub use twilight::{
    clamp_to_twilight_window, rise_set_report, rise_set_report_with, ClampedEvent, Culmination,
    EventKind, RiseSetReport, TwilightBand, TwilightWindow,
};
