//! Sign ingress search.
//!
//! Walks a body's longitude at the coarse step; when consecutive samples
//! fall in different signs, the boundary just crossed is refined by
//! bisection. The residual is wrapped, so the Pisces-to-Aries boundary
//! (target 0 deg = 360 deg) behaves like every other one.

use almanac_ephem::{Body, Ephemeris};
use tracing::warn;

use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::predicate::Predicate;
use crate::refine::{Bracket, refine};
use crate::zodiac::{Sign, sign_from_longitude};

/// Maximum forward scan horizon in days for [`next_ingress`]
/// (covers Pluto's slowest sign transit, ~31 years).
const MAX_SCAN_DAYS: f64 = 12_000.0;

/// A sign-boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngressEvent {
    /// Event time as Julian Date (UT).
    pub jd_ut: f64,
    /// Which body.
    pub body: Body,
    /// The sign being entered.
    pub sign: Sign,
    /// Longitude at the refined time, degrees in [0, 360).
    pub longitude_deg: f64,
}

/// The boundary longitude separating two adjacent signs along the motion.
///
/// Moving forward the body crosses the entered sign's start; slipping
/// backward during retrograde it re-crosses the departed sign's start.
fn crossed_boundary_deg(sign_prev: Sign, sign_curr: Sign) -> f64 {
    if sign_curr.index() == (sign_prev.index() + 1) % 12 {
        sign_curr.boundary_deg()
    } else {
        sign_prev.boundary_deg()
    }
}

/// Refine a detected sign change into an event; `None` when the bracket
/// failed to converge on the boundary.
fn refine_ingress<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    sign_prev: Sign,
    sign: Sign,
    t_prev: f64,
    t_curr: f64,
    config: &ScanConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    let boundary = crossed_boundary_deg(sign_prev, sign);
    let refined = refine(
        eph,
        Predicate::Longitude(body),
        Bracket::new(t_prev, t_curr, boundary),
        config,
    )?;

    if !refined.within(config.residual_limit_deg) {
        warn!(
            body = body.name(),
            sign = sign.name(),
            jd_ut = refined.jd_ut,
            residual_deg = refined.residual_deg,
            "discarding ingress: bracket did not converge on the boundary"
        );
        return Ok(None);
    }

    Ok(Some(IngressEvent {
        jd_ut: refined.jd_ut,
        body,
        sign,
        longitude_deg: (boundary + refined.residual_deg).rem_euclid(360.0),
    }))
}

/// Search for all sign ingresses of a body in `[jd_start, jd_end]`.
///
/// A zero-length range yields an empty list; a reversed range is an error.
pub fn search_ingresses<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    jd_start: f64,
    jd_end: f64,
    config: &ScanConfig,
) -> Result<Vec<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
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
    let mut sign_prev = sign_from_longitude(Predicate::Longitude(body).eval(eph, t_prev)?);

    loop {
        let t_curr = (t_prev + step).min(jd_end);
        let sign_curr = sign_from_longitude(Predicate::Longitude(body).eval(eph, t_curr)?);

        if sign_curr != sign_prev
            && let Some(event) =
                refine_ingress(eph, body, sign_prev, sign_curr, t_prev, t_curr, config)?
            && event.jd_ut >= jd_start
            && event.jd_ut <= jd_end
        {
            events.push(event);
        }

        if t_curr >= jd_end {
            break;
        }
        t_prev = t_curr;
        sign_prev = sign_curr;
    }

    Ok(events)
}

/// Find the first sign ingress of a body after `jd_ut`, scanning at most
/// `MAX_SCAN_DAYS` ahead.
pub fn next_ingress<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    jd_ut: f64,
    config: &ScanConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let step = config.step_days;
    let max_steps = (MAX_SCAN_DAYS / step).ceil() as usize;

    let mut t_prev = jd_ut;
    let mut sign_prev = sign_from_longitude(Predicate::Longitude(body).eval(eph, t_prev)?);

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let sign_curr = sign_from_longitude(Predicate::Longitude(body).eval(eph, t_curr)?);

        if sign_curr != sign_prev
            && let Some(event) =
                refine_ingress(eph, body, sign_prev, sign_curr, t_prev, t_curr, config)?
        {
            return Ok(Some(event));
        }

        t_prev = t_curr;
        sign_prev = sign_curr;
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_ephem::{BodyState, EphemError};

    /// Longitude grows linearly from `lon0` at jd 0.
    struct LinearOracle {
        lon0: f64,
        rate: f64,
    }

    impl Ephemeris for LinearOracle {
        fn position_and_speed(&self, _body: Body, jd_ut: f64) -> Result<BodyState, EphemError> {
            Ok(BodyState {
                longitude_deg: (self.lon0 + self.rate * jd_ut).rem_euclid(360.0),
                speed_deg_per_day: self.rate,
            })
        }
    }

    #[test]
    fn single_crossing_into_taurus() {
        let oracle = LinearOracle {
            lon0: 25.0,
            rate: 1.0,
        };
        let events =
            search_ingresses(&oracle, Body::Mars, 0.0, 10.0, &ScanConfig::default()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sign, Sign::Taurus);
        // 30 deg reached at jd 5; within one second.
        assert!((events[0].jd_ut - 5.0).abs() < 1.0 / 86_400.0);
        assert!((events[0].longitude_deg - 30.0).abs() < 1e-3);
    }

    #[test]
    fn pisces_to_aries_boundary() {
        let oracle = LinearOracle {
            lon0: 358.0,
            rate: 1.0,
        };
        let events =
            search_ingresses(&oracle, Body::Sun, 0.0, 5.0, &ScanConfig::default()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sign, Sign::Aries);
        assert!((events[0].jd_ut - 2.0).abs() < 1.0 / 86_400.0);
    }

    #[test]
    fn retrograde_slip_re_enters_previous_sign() {
        // Longitude falling through 150 deg: Virgo back into Leo.
        let oracle = LinearOracle {
            lon0: 152.5,
            rate: -1.0,
        };
        let events =
            search_ingresses(&oracle, Body::Mercury, 0.0, 5.0, &ScanConfig::default()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sign, Sign::Leo);
        assert!((events[0].jd_ut - 2.5).abs() < 1.0 / 86_400.0);
        assert!((events[0].longitude_deg - 150.0).abs() < 1e-3);
    }

    #[test]
    fn zero_length_range_is_empty() {
        let oracle = LinearOracle {
            lon0: 25.0,
            rate: 1.0,
        };
        let events =
            search_ingresses(&oracle, Body::Mars, 3.0, 3.0, &ScanConfig::default()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn reversed_range_rejected() {
        let oracle = LinearOracle {
            lon0: 25.0,
            rate: 1.0,
        };
        assert!(matches!(
            search_ingresses(&oracle, Body::Mars, 10.0, 0.0, &ScanConfig::default()),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn stationary_body_never_ingresses() {
        let oracle = LinearOracle {
            lon0: 25.0,
            rate: 0.0,
        };
        let events =
            search_ingresses(&oracle, Body::Mars, 0.0, 100.0, &ScanConfig::default()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn next_ingress_scans_past_range_step() {
        let oracle = LinearOracle {
            lon0: 0.5,
            rate: 0.1,
        };
        // 30 deg reached at jd 295.
        let event = next_ingress(&oracle, Body::Jupiter, 0.0, &ScanConfig::default())
            .unwrap()
            .expect("should find an ingress");
        assert_eq!(event.sign, Sign::Taurus);
        assert!((event.jd_ut - 295.0).abs() < 1.0 / 86_400.0);
    }

    #[test]
    fn deterministic_across_runs() {
        let oracle = LinearOracle {
            lon0: 10.0,
            rate: 3.0,
        };
        let a = search_ingresses(&oracle, Body::Venus, 0.0, 365.0, &ScanConfig::default()).unwrap();
        let b = search_ingresses(&oracle, Body::Venus, 0.0, 365.0, &ScanConfig::default()).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}
