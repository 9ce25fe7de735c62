//! Night reports and the dark-interval aggregator.
//!
//! A "night" is a fixed observing window: local 16:00 through 11:00
//! the next morning (19 hours), sampled on a coarse grid. A sample is
//! **dark** when the Sun sits below the darkness threshold *and* the
//! Moon is below the horizon — both strictly. The aggregator finds the
//! first dark interval of each night, refines its edges with the
//! bisection solver, and reports totals over the run of nights.
//!
//! Edge refinement runs over a synthetic compound altitude function
//! that collapses the two-body predicate into a single threshold
//! crossing: it returns one degree below the threshold while the dark
//! predicate holds and one degree above otherwise, so the falling edge
//! of that function is the onset of darkness and the rising edge its
//! end. The refined instant is therefore accurate to the solver
//! tolerance against the *predicate*, not against either altitude
//! alone.
//!
//! At most one dark interval is reported per night: the scan stops at
//! the first complete interval. A second dark spell in the same night
//! (Moon setting after a bright interlude) is out of scope for the
//! report.

use crate::altitude::altitude_at;
use crate::errors::{EventError, EventResult};
use crate::solver::{refine_bracket, Direction, TOLERANCE_MINUTE_DAYS};
use crate::twilight::ASTRONOMICAL_TWILIGHT_DEG;
use skywatch_core::constants::HOURS_PER_DAY;
use skywatch_core::Location;
use skywatch_ephemeris::Body;
use skywatch_time::CivilTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of each night's observing window, hours.
pub const WINDOW_HOURS: f64 = 19.0;

/// Local hour at which each night's window opens.
pub const WINDOW_START_HOUR: u32 = 16;

/// Configuration for a run of nightly scans.
#[derive(Debug, Clone, PartialEq)]
pub struct NightSchedule {
    pub observer: Location,
    /// UTC offset of the observer's local clock, hours (east positive).
    pub utc_offset_hours: f64,
    /// Sun altitude below which the sky counts as dark. Strict.
    pub sun_threshold_deg: f64,
    /// Number of consecutive nights to scan.
    pub nights: usize,
    /// Sampling grid spacing, minutes.
    pub step_minutes: f64,
    /// Edge-refinement tolerance, days.
    pub tolerance_days: f64,
    /// Local civil instant of the first window's opening.
    first_evening: CivilTime,
}

impl NightSchedule {
    /// A schedule opening at local 16:00 on the given date, with the
    /// astronomical-darkness threshold, 40 nights, a five-minute grid,
    /// and the one-minute refinement tolerance.
    ///
    /// # Errors
    ///
    /// [`AstroError::InvalidDate`](skywatch_core::AstroError::InvalidDate)
    /// for an invalid calendar date.
    pub fn new(
        observer: Location,
        utc_offset_hours: f64,
        year: i32,
        month: u32,
        day: u32,
    ) -> EventResult<Self> {
        let first_evening = CivilTime::new(year, month, day, WINDOW_START_HOUR, 0, 0.0)?;
        Ok(Self {
            observer,
            utc_offset_hours,
            sun_threshold_deg: ASTRONOMICAL_TWILIGHT_DEG,
            nights: 40,
            step_minutes: 5.0,
            tolerance_days: TOLERANCE_MINUTE_DAYS,
            first_evening,
        })
    }

    pub fn with_nights(mut self, nights: usize) -> Self {
        self.nights = nights;
        self
    }

    pub fn with_sun_threshold_deg(mut self, threshold_deg: f64) -> Self {
        self.sun_threshold_deg = threshold_deg;
        self
    }

    pub fn with_step_minutes(mut self, minutes: f64) -> Self {
        self.step_minutes = minutes;
        self
    }

    /// # Errors
    ///
    /// [`EventError::InvalidSearch`] when the night count is zero or a
    /// numeric field is non-positive or non-finite.
    pub fn validate(&self) -> EventResult<()> {
        if self.nights == 0 {
            return Err(EventError::invalid_search("nights must be at least 1"));
        }
        if !self.step_minutes.is_finite() || self.step_minutes <= 0.0 {
            return Err(EventError::invalid_search("step_minutes must be positive"));
        }
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err(EventError::invalid_search(
                "tolerance_days must be positive",
            ));
        }
        if !self.sun_threshold_deg.is_finite() || !self.utc_offset_hours.is_finite() {
            return Err(EventError::invalid_search(
                "threshold and offset must be finite",
            ));
        }
        Ok(())
    }

    /// Julian Date (UTC) at which night `night_index` opens.
    pub fn window_start_jd(&self, night_index: usize) -> f64 {
        self.first_evening.to_julian().value() - self.utc_offset_hours / HOURS_PER_DAY
            + night_index as f64
    }

    /// Julian Date (UTC) at which night `night_index` closes.
    pub fn window_end_jd(&self, night_index: usize) -> f64 {
        self.window_start_jd(night_index) + WINDOW_HOURS / HOURS_PER_DAY
    }
}

/// First threshold crossings of the Sun and Moon within one window.
/// Any may be absent (a body that never crosses during the window).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossingTimes {
    /// Sun falling through the darkness threshold.
    pub sun_down: Option<f64>,
    /// Sun rising back through the darkness threshold.
    pub sun_up: Option<f64>,
    /// Moon setting (falling through 0°).
    pub moon_set: Option<f64>,
    /// Moon rising (rising through 0°).
    pub moon_rise: Option<f64>,
}

/// One contiguous stretch of darkness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DarkInterval {
    pub night_index: usize,
    pub start_jd: f64,
    pub end_jd: f64,
    pub duration_hours: f64,
    /// True when darkness persisted to the window end and the interval
    /// was cut there rather than at a detected transition.
    pub truncated: bool,
}

/// The outcome of scanning one night.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NightReport {
    pub night_index: usize,
    pub window_start_jd: f64,
    pub window_end_jd: f64,
    pub crossings: CrossingTimes,
    pub dark_interval: Option<DarkInterval>,
}

/// Aggregate over a full schedule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DarkSummary {
    pub reports: Vec<NightReport>,
    pub total_dark_hours: f64,
    pub longest_hours: f64,
    /// Zero when no night produced an interval.
    pub shortest_hours: f64,
    pub interval_count: usize,
}

/// Scans one night using the real Sun and Moon.
pub fn scan_night(schedule: &NightSchedule, night_index: usize) -> NightReport {
    let observer = &schedule.observer;
    scan_night_with(
        schedule,
        night_index,
        |jd| altitude_at(Body::Sun, jd, observer),
        |jd| altitude_at(Body::Moon, jd, observer),
    )
}

/// Scans one night with caller-supplied altitude functions.
///
/// The grid covers the window inclusively at both ends. Crossing times
/// and the dark interval are refined to `schedule.tolerance_days`. A
/// window that opens already dark starts its interval at the window
/// start, mirroring the truncation rule at the window end.
pub fn scan_night_with(
    schedule: &NightSchedule,
    night_index: usize,
    sun_alt: impl Fn(f64) -> f64,
    moon_alt: impl Fn(f64) -> f64,
) -> NightReport {
    let window_start = schedule.window_start_jd(night_index);
    let window_end = schedule.window_end_jd(night_index);
    let step_days = schedule.step_minutes / (60.0 * HOURS_PER_DAY);
    let threshold = schedule.sun_threshold_deg;
    let tolerance = schedule.tolerance_days;

    let samples = (WINDOW_HOURS * 60.0 / schedule.step_minutes) as usize + 1;
    let grid: Vec<f64> = (0..samples)
        .map(|i| window_start + i as f64 * step_days)
        .collect();
    let sun: Vec<f64> = grid.iter().map(|&jd| sun_alt(jd)).collect();
    let moon: Vec<f64> = grid.iter().map(|&jd| moon_alt(jd)).collect();

    let mut crossings = CrossingTimes::default();
    for i in 1..samples {
        let (lo, hi) = (grid[i - 1], grid[i]);
        if crossings.sun_down.is_none() && sun[i - 1] > threshold && sun[i] <= threshold {
            crossings.sun_down = Some(refine_bracket(
                &sun_alt,
                lo,
                hi,
                threshold,
                Direction::Falling,
                tolerance,
            ));
        }
        if crossings.sun_up.is_none() && sun[i - 1] < threshold && sun[i] >= threshold {
            crossings.sun_up = Some(refine_bracket(
                &sun_alt,
                lo,
                hi,
                threshold,
                Direction::Rising,
                tolerance,
            ));
        }
        if crossings.moon_set.is_none() && moon[i - 1] > 0.0 && moon[i] <= 0.0 {
            crossings.moon_set = Some(refine_bracket(
                &moon_alt,
                lo,
                hi,
                0.0,
                Direction::Falling,
                tolerance,
            ));
        }
        if crossings.moon_rise.is_none() && moon[i - 1] < 0.0 && moon[i] >= 0.0 {
            crossings.moon_rise = Some(refine_bracket(
                &moon_alt,
                lo,
                hi,
                0.0,
                Direction::Rising,
                tolerance,
            ));
        }
    }

    // Collapse the two-body predicate into one crossing function for
    // the edge refinement.
    let dark = |jd: f64| sun_alt(jd) < threshold && moon_alt(jd) < 0.0;
    let compound = |jd: f64| {
        if dark(jd) {
            threshold - 1.0
        } else {
            threshold + 1.0
        }
    };
    let is_dark: Vec<bool> = (0..samples)
        .map(|i| sun[i] < threshold && moon[i] < 0.0)
        .collect();

    let mut dark_interval = None;
    let mut open_start: Option<f64> = if is_dark[0] {
        // Already dark when the window opens.
        Some(window_start)
    } else {
        None
    };
    for i in 1..samples {
        match open_start {
            None => {
                if !is_dark[i - 1] && is_dark[i] {
                    open_start = Some(refine_bracket(
                        &compound,
                        grid[i - 1],
                        grid[i],
                        threshold,
                        Direction::Falling,
                        tolerance,
                    ));
                }
            }
            Some(start_jd) => {
                if is_dark[i - 1] && !is_dark[i] {
                    let end_jd = refine_bracket(
                        &compound,
                        grid[i - 1],
                        grid[i],
                        threshold,
                        Direction::Rising,
                        tolerance,
                    );
                    dark_interval = Some(DarkInterval {
                        night_index,
                        start_jd,
                        end_jd,
                        duration_hours: (end_jd - start_jd) * HOURS_PER_DAY,
                        truncated: false,
                    });
                    // Only the first interval of the night is reported.
                    break;
                }
            }
        }
    }
    if dark_interval.is_none() {
        if let Some(start_jd) = open_start {
            dark_interval = Some(DarkInterval {
                night_index,
                start_jd,
                end_jd: window_end,
                duration_hours: (window_end - start_jd) * HOURS_PER_DAY,
                truncated: true,
            });
        }
    }

    NightReport {
        night_index,
        window_start_jd: window_start,
        window_end_jd: window_end,
        crossings,
        dark_interval,
    }
}

/// Scans every night in the schedule and aggregates the dark-interval
/// statistics.
///
/// # Errors
///
/// [`EventError::InvalidSearch`] when the schedule fails validation.
pub fn scan_schedule(schedule: &NightSchedule) -> EventResult<DarkSummary> {
    schedule.validate()?;
    let reports: Vec<NightReport> = (0..schedule.nights)
        .map(|night| scan_night(schedule, night))
        .collect();
    Ok(summarize(reports))
}

/// Builds the aggregate statistics from per-night reports.
pub fn summarize(reports: Vec<NightReport>) -> DarkSummary {
    let mut total = 0.0;
    let mut longest: f64 = 0.0;
    let mut shortest = f64::INFINITY;
    let mut count = 0;
    for interval in reports.iter().filter_map(|r| r.dark_interval.as_ref()) {
        total += interval.duration_hours;
        longest = longest.max(interval.duration_hours);
        shortest = shortest.min(interval.duration_hours);
        count += 1;
    }
    if count == 0 {
        shortest = 0.0;
    }
    DarkSummary {
        reports,
        total_dark_hours: total,
        longest_hours: longest,
        shortest_hours: shortest,
        interval_count: count,
    }
}
