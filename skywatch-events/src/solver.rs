//! Threshold-crossing solver: coarse scan plus bisection refinement.
//!
//! Given an altitude-like function of Julian Date and a threshold, the
//! solver walks the search window at a fixed step until two consecutive
//! samples straddle the threshold in the requested direction, then
//! bisects the bracket down to the time tolerance.
//!
//! The search is an explicit state machine with a pure transition
//! function, so every phase is testable without an ephemeris:
//!
//! ```text
//! Scanning → Bracketed → Refining → Done
//! Scanning → Exhausted            (no sign change in the window)
//! ```
//!
//! Core assumption: the function is monotonic inside one coarse step.
//! A body that grazes the threshold twice between consecutive samples
//! goes undetected — that is the documented contract of the sampling
//! tier, not a defect the solver tries to paper over. Choose the step
//! against the fastest altitude rate of the body in question.

use crate::errors::{EventError, EventResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default refinement tolerance: one minute of time, in days.
pub const TOLERANCE_MINUTE_DAYS: f64 = 1.0 / 1440.0;

/// High-precision refinement tolerance: one second of time, in days.
pub const TOLERANCE_SECOND_DAYS: f64 = 1.0 / 86400.0;

/// Bisection halves the bracket each step; 64 iterations exhaust f64
/// resolution from any realistic starting bracket.
const MAX_REFINE_ITERATIONS: usize = 64;

/// Which way the function crosses the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// From below the threshold to at-or-above it.
    Rising,
    /// From above the threshold to at-or-below it.
    Falling,
}

/// A refined crossing instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossingEvent {
    pub jd: f64,
    pub direction: Direction,
}

/// A validated crossing search configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossingSearch {
    pub start_jd: f64,
    pub end_jd: f64,
    pub step_days: f64,
    pub tolerance_days: f64,
    pub threshold_deg: f64,
    pub direction: Direction,
}

impl CrossingSearch {
    /// A search over `[start_jd, end_jd]` with a five-minute scan step
    /// and the one-minute default tolerance.
    pub fn new(start_jd: f64, end_jd: f64, threshold_deg: f64, direction: Direction) -> Self {
        Self {
            start_jd,
            end_jd,
            step_days: 5.0 / 1440.0,
            tolerance_days: TOLERANCE_MINUTE_DAYS,
            threshold_deg,
            direction,
        }
    }

    pub fn with_step_minutes(mut self, minutes: f64) -> Self {
        self.step_days = minutes / 1440.0;
        self
    }

    pub fn with_tolerance_days(mut self, tolerance_days: f64) -> Self {
        self.tolerance_days = tolerance_days;
        self
    }

    /// # Errors
    ///
    /// [`EventError::InvalidSearch`] if any field is non-finite, the
    /// window is empty, or the step/tolerance is not positive.
    pub fn validate(&self) -> EventResult<()> {
        for (name, value) in [
            ("start_jd", self.start_jd),
            ("end_jd", self.end_jd),
            ("step_days", self.step_days),
            ("tolerance_days", self.tolerance_days),
            ("threshold_deg", self.threshold_deg),
        ] {
            if !value.is_finite() {
                return Err(EventError::invalid_search(&format!("{name} is not finite")));
            }
        }
        if self.start_jd >= self.end_jd {
            return Err(EventError::invalid_search("start_jd must precede end_jd"));
        }
        if self.step_days <= 0.0 {
            return Err(EventError::invalid_search("step_days must be positive"));
        }
        if self.tolerance_days <= 0.0 {
            return Err(EventError::invalid_search("tolerance_days must be positive"));
        }
        Ok(())
    }
}

/// Solver phase. `Scanning` walks the coarse grid, `Bracketed` holds a
/// fresh straddling pair, `Refining` bisects it, `Done`/`Exhausted`
/// terminate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverState {
    Scanning {
        prev_jd: f64,
        prev_alt: f64,
        cursor: f64,
    },
    Bracketed {
        lo: f64,
        hi: f64,
    },
    Refining {
        lo: f64,
        hi: f64,
    },
    Done {
        crossing_jd: f64,
    },
    Exhausted,
}

impl SolverState {
    /// Initial state for a search: the first sample is taken at the
    /// window start.
    pub fn begin(search: &CrossingSearch, f: impl Fn(f64) -> f64) -> Self {
        SolverState::Scanning {
            prev_jd: search.start_jd,
            prev_alt: f(search.start_jd),
            cursor: search.start_jd + search.step_days,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SolverState::Done { .. } | SolverState::Exhausted)
    }
}

fn detects(direction: Direction, threshold: f64, prev: f64, cur: f64) -> bool {
    match direction {
        // Strict on the near side, inclusive on the far side: a sample
        // landing exactly on the threshold counts as having crossed.
        Direction::Falling => prev > threshold && cur <= threshold,
        Direction::Rising => prev < threshold && cur >= threshold,
    }
}

/// One transition of the solver state machine.
///
/// `Scanning` consumes one coarse sample; `Bracketed` and `Refining`
/// perform one bisection halving. Terminal states map to themselves.
pub fn step(state: SolverState, search: &CrossingSearch, f: impl Fn(f64) -> f64) -> SolverState {
    match state {
        SolverState::Scanning {
            prev_jd,
            prev_alt,
            cursor,
        } => {
            if cursor > search.end_jd {
                return SolverState::Exhausted;
            }
            let alt = f(cursor);
            if detects(search.direction, search.threshold_deg, prev_alt, alt) {
                SolverState::Bracketed {
                    lo: prev_jd,
                    hi: cursor,
                }
            } else {
                SolverState::Scanning {
                    prev_jd: cursor,
                    prev_alt: alt,
                    cursor: cursor + search.step_days,
                }
            }
        }
        SolverState::Bracketed { lo, hi } | SolverState::Refining { lo, hi } => {
            if hi - lo <= search.tolerance_days {
                // The invariant holds the crossed state at `hi`.
                return SolverState::Done { crossing_jd: hi };
            }
            let mid = 0.5 * (lo + hi);
            let alt = f(mid);
            let crossed_at_mid = match search.direction {
                Direction::Falling => alt < search.threshold_deg,
                Direction::Rising => alt > search.threshold_deg,
            };
            if crossed_at_mid {
                SolverState::Refining { lo, hi: mid }
            } else {
                SolverState::Refining { lo: mid, hi }
            }
        }
        terminal => terminal,
    }
}

/// Runs a search to completion.
///
/// Returns `Ok(None)` when the window contains no crossing in the
/// requested direction — a normal outcome, not an error.
///
/// ```
/// use skywatch_events::solver::{find_crossing, CrossingSearch, Direction};
///
/// // A line rising through zero at jd = 100.25.
/// let f = |jd: f64| jd - 100.25;
/// let search = CrossingSearch::new(100.0, 101.0, 0.0, Direction::Rising);
/// let event = find_crossing(f, &search).unwrap().unwrap();
/// assert!((event.jd - 100.25).abs() <= search.tolerance_days);
/// ```
pub fn find_crossing(
    f: impl Fn(f64) -> f64,
    search: &CrossingSearch,
) -> EventResult<Option<CrossingEvent>> {
    search.validate()?;
    let mut state = SolverState::begin(search, &f);
    // Scan steps are bounded by the window length; refine steps by the
    // iteration cap.
    let scan_budget = ((search.end_jd - search.start_jd) / search.step_days) as usize + 2;
    for _ in 0..scan_budget + MAX_REFINE_ITERATIONS {
        state = step(state, search, &f);
        match state {
            SolverState::Done { crossing_jd } => {
                return Ok(Some(CrossingEvent {
                    jd: crossing_jd,
                    direction: search.direction,
                }));
            }
            SolverState::Exhausted => return Ok(None),
            _ => {}
        }
    }
    // Iteration cap: keep the best iterate, mirroring the light-time
    // policy of the ephemeris layer.
    if let SolverState::Refining { hi, .. } | SolverState::Bracketed { hi, .. } = state {
        return Ok(Some(CrossingEvent {
            jd: hi,
            direction: search.direction,
        }));
    }
    Ok(None)
}

/// Bisects a known straddling bracket without the scan phase.
///
/// The caller asserts `[lo, hi]` straddles the threshold in `direction`;
/// the night aggregator uses this to refine sample-grid transitions it
/// has already located.
pub fn refine_bracket(
    f: impl Fn(f64) -> f64,
    lo: f64,
    hi: f64,
    threshold_deg: f64,
    direction: Direction,
    tolerance_days: f64,
) -> f64 {
    let search = CrossingSearch {
        start_jd: lo,
        end_jd: hi,
        step_days: hi - lo,
        tolerance_days,
        threshold_deg,
        direction,
    };
    let mut state = SolverState::Bracketed { lo, hi };
    for _ in 0..MAX_REFINE_ITERATIONS {
        state = step(state, &search, &f);
        if let SolverState::Done { crossing_jd } = state {
            return crossing_jd;
        }
    }
    match state {
        SolverState::Refining { hi, .. } | SolverState::Bracketed { hi, .. } => hi,
        SolverState::Done { crossing_jd } => crossing_jd,
        _ => hi,
    }
}
