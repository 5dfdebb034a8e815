//! Lunar phase search.
//!
//! Independent of the per-body scan: the range is covered in fixed-length
//! windows (30 days, close to the ~29.53-day synodic month, so each window
//! is expected to hold one crossing of each phase angle). Within a window
//! the Moon-Sun separation residual is stepped at the daily cadence; a
//! genuine sign change brackets the crossing, which bisection then refines.
//! Wrap-around jumps of the cyclic residual are rejected by magnitude.
//!
//! Windows are not deduplicated: when the synodic month drifts against the
//! fixed window, a crossing near a boundary can be reported by both
//! neighbouring windows or by neither.

use almanac_ephem::{Body, Ephemeris};
use tracing::warn;

use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::predicate::{Predicate, is_genuine_crossing};
use crate::refine::{Bracket, refine};
use crate::zodiac::{Sign, sign_from_longitude};

/// The four canonical lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

/// All phases in separation-angle order.
pub const ALL_PHASES: [Phase; 4] = [
    Phase::NewMoon,
    Phase::FirstQuarter,
    Phase::FullMoon,
    Phase::LastQuarter,
];

impl Phase {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::FullMoon => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }

    /// Moon-Sun separation at this phase, degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FirstQuarter => 90.0,
            Self::FullMoon => 180.0,
            Self::LastQuarter => 270.0,
        }
    }
}

/// A lunar phase event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEvent {
    /// Event time as Julian Date (UT).
    pub jd_ut: f64,
    /// Which phase.
    pub phase: Phase,
    /// The Moon's sign at the refined time.
    pub sign: Sign,
    /// The Moon's longitude at the refined time, degrees in [0, 360).
    pub moon_longitude_deg: f64,
}

/// Search for all lunar phase events in `[jd_start, jd_end]`.
///
/// A zero-length range yields an empty list; a reversed range is an error.
pub fn search_lunar_phases<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_start: f64,
    jd_end: f64,
    config: &ScanConfig,
) -> Result<Vec<PhaseEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if jd_end < jd_start {
        return Err(SearchError::InvalidConfig(
            "jd_end must not be before jd_start",
        ));
    }

    let mut events = Vec::new();
    let window = config.phase_window_days;

    let mut w = jd_start;
    while w < jd_end {
        // The last window is clipped to the range end: crossings past it
        // would be dropped by the range filter anyway, and clipping keeps
        // every oracle query inside [jd_start, jd_end].
        let w_end = (w + window).min(jd_end);
        for phase in ALL_PHASES {
            search_window(eph, phase, w, w_end, jd_start, jd_end, config, &mut events)?;
        }
        w += window;
    }

    Ok(events)
}

/// Locate crossings of one phase angle inside one window.
fn search_window<E: Ephemeris + ?Sized>(
    eph: &E,
    phase: Phase,
    w_start: f64,
    w_end: f64,
    jd_start: f64,
    jd_end: f64,
    config: &ScanConfig,
    events: &mut Vec<PhaseEvent>,
) -> Result<(), SearchError> {
    let target = phase.angle_deg();
    let mut t_prev = w_start;
    let mut r_prev = Predicate::Separation.residual(eph, t_prev, target)?;

    while t_prev < w_end {
        let t_curr = (t_prev + config.step_days).min(w_end);
        let r_curr = Predicate::Separation.residual(eph, t_curr, target)?;

        if is_genuine_crossing(r_prev, r_curr) {
            let refined = refine(
                eph,
                Predicate::Separation,
                Bracket::new(t_prev, t_curr, target),
                config,
            )?;

            if !refined.within(config.residual_limit_deg) {
                warn!(
                    phase = phase.name(),
                    jd_ut = refined.jd_ut,
                    residual_deg = refined.residual_deg,
                    "discarding lunar phase: bracket did not converge"
                );
            } else if refined.jd_ut >= jd_start && refined.jd_ut <= jd_end {
                let moon_lon = Predicate::Longitude(Body::Moon).eval(eph, refined.jd_ut)?;
                events.push(PhaseEvent {
                    jd_ut: refined.jd_ut,
                    phase,
                    sign: sign_from_longitude(moon_lon),
                    moon_longitude_deg: moon_lon,
                });
            }
        }

        t_prev = t_curr;
        r_prev = r_curr;
    }

    Ok(())
}
