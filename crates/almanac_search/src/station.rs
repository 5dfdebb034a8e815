//! Retrograde/direct station search.
//!
//! Walks a body's angular speed at the coarse step; a strict sign flip
//! between consecutive samples brackets a station, refined by bisection on
//! the speed predicate toward zero. A sample landing exactly on zero
//! continues the previous regime rather than opening a new crossing.

use almanac_ephem::{Body, Ephemeris};
use tracing::warn;

use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::predicate::Predicate;
use crate::refine::{Bracket, refine};
use crate::zodiac::{Sign, sign_from_longitude};

/// Maximum forward scan horizon in days for [`next_station`]
/// (~800 days covers all synodic periods).
const MAX_SCAN_DAYS: f64 = 800.0;

/// Station type: retrograde or direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationKind {
    /// Speed crosses from positive to negative (retrograde begins).
    Retrograde,
    /// Speed crosses from negative to positive (retrograde ends).
    Direct,
}

impl StationKind {
    /// Verb phrase used in event descriptions.
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Retrograde => "goes retrograde",
            Self::Direct => "goes direct",
        }
    }
}

/// A station event (angular speed crosses zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationEvent {
    /// Event time as Julian Date (UT).
    pub jd_ut: f64,
    /// Which body.
    pub body: Body,
    /// Whether retrograde or direct motion begins.
    pub kind: StationKind,
    /// Sign at the station, taken from the coarse sample after the
    /// crossing (the body barely moves there, so the approximation holds).
    pub sign: Sign,
}

/// Sun and Moon never go retrograde geocentrically.
fn validate_station_body(body: Body) -> Result<(), SearchError> {
    match body {
        Body::Sun | Body::Moon => Err(SearchError::InvalidConfig(
            "Sun and Moon do not have stations",
        )),
        _ => Ok(()),
    }
}

fn refine_station<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    v_prev: f64,
    lon_curr: f64,
    t_prev: f64,
    t_curr: f64,
    config: &ScanConfig,
) -> Result<Option<StationEvent>, SearchError> {
    let refined = refine(
        eph,
        Predicate::Speed(body),
        Bracket::new(t_prev, t_curr, 0.0),
        config,
    )?;

    if !refined.within(config.residual_limit_deg) {
        warn!(
            body = body.name(),
            jd_ut = refined.jd_ut,
            residual = refined.residual_deg,
            "discarding station: bracket did not converge on zero speed"
        );
        return Ok(None);
    }

    let kind = if v_prev > 0.0 {
        StationKind::Retrograde
    } else {
        StationKind::Direct
    };

    Ok(Some(StationEvent {
        jd_ut: refined.jd_ut,
        body,
        kind,
        sign: sign_from_longitude(lon_curr),
    }))
}

/// Search for all stations of a body in `[jd_start, jd_end]`.
///
/// A zero-length range yields an empty list; a reversed range is an error.
pub fn search_stations<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    jd_start: f64,
    jd_end: f64,
    config: &ScanConfig,
) -> Result<Vec<StationEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_station_body(body)?;
    if jd_end < jd_start {
        return Err(SearchError::InvalidConfig(
            "jd_end must not be before jd_start",
        ));
    }

    let mut events = Vec::new();
    if jd_end == jd_start {
        return Ok(events);
    }

    let step = config.step_days;
    let mut t_prev = jd_start;
    let mut v_prev = eph.position_and_speed(body, t_prev)?.speed_deg_per_day;

    loop {
        let t_curr = (t_prev + step).min(jd_end);
        let state = eph.position_and_speed(body, t_curr)?;
        let v_curr = state.speed_deg_per_day;

        if v_prev * v_curr < 0.0
            && let Some(event) =
                refine_station(eph, body, v_prev, state.longitude_deg, t_prev, t_curr, config)?
            && event.jd_ut >= jd_start
            && event.jd_ut <= jd_end
        {
            events.push(event);
        }

        if t_curr >= jd_end {
            break;
        }
        t_prev = t_curr;
        if v_curr != 0.0 {
            v_prev = v_curr;
        }
    }

    Ok(events)
}

/// Find the first station of a body after `jd_ut`, scanning at most
/// `MAX_SCAN_DAYS` ahead.
pub fn next_station<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    jd_ut: f64,
    config: &ScanConfig,
) -> Result<Option<StationEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_station_body(body)?;

    let step = config.step_days;
    let max_steps = (MAX_SCAN_DAYS / step).ceil() as usize;

    let mut t_prev = jd_ut;
    let mut v_prev = eph.position_and_speed(body, t_prev)?.speed_deg_per_day;

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let state = eph.position_and_speed(body, t_curr)?;
        let v_curr = state.speed_deg_per_day;

        if v_prev * v_curr < 0.0
            && let Some(event) =
                refine_station(eph, body, v_prev, state.longitude_deg, t_prev, t_curr, config)?
        {
            return Ok(Some(event));
        }

        t_prev = t_curr;
        if v_curr != 0.0 {
            v_prev = v_curr;
        }
    }

    Ok(None)
}
