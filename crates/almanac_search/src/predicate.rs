//! Event predicate functions.
//!
//! A predicate is a scalar function of time built from oracle queries. The
//! three families cover the three event classes: longitude (ingresses),
//! speed (stations), and Moon-Sun separation (lunar phases). Predicates are
//! plain values rather than captured closures so the refiner can stay
//! generic over a `(predicate, bracket)` pair.

use almanac_ephem::{Body, Ephemeris};

use crate::error::SearchError;

/// Normalize an angle to (-180, +180].
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// A scalar function of time whose target crossings define events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Ecliptic longitude of a body, degrees in [0, 360).
    Longitude(Body),
    /// Angular speed of a body, degrees per day.
    Speed(Body),
    /// Moon-Sun longitude difference, degrees in [0, 360).
    Separation,
}

impl Predicate {
    /// Evaluate the predicate at `jd_ut`.
    pub fn eval<E: Ephemeris + ?Sized>(&self, eph: &E, jd_ut: f64) -> Result<f64, SearchError> {
        match self {
            Self::Longitude(body) => {
                let state = eph.position_and_speed(*body, jd_ut)?;
                Ok(state.longitude_deg.rem_euclid(360.0))
            }
            Self::Speed(body) => {
                let state = eph.position_and_speed(*body, jd_ut)?;
                Ok(state.speed_deg_per_day)
            }
            Self::Separation => {
                let moon = eph.position_and_speed(Body::Moon, jd_ut)?;
                let sun = eph.position_and_speed(Body::Sun, jd_ut)?;
                Ok((moon.longitude_deg - sun.longitude_deg).rem_euclid(360.0))
            }
        }
    }

    /// Signed residual of the predicate against `target_deg`.
    ///
    /// For the angular predicates the residual is wrapped to (-180, +180]
    /// so that targets of 0 and 360 deg name the same crossing; the speed
    /// predicate is not cyclic and uses the raw difference.
    pub fn residual<E: Ephemeris + ?Sized>(
        &self,
        eph: &E,
        jd_ut: f64,
        target_deg: f64,
    ) -> Result<f64, SearchError> {
        let raw = self.eval(eph, jd_ut)? - target_deg;
        match self {
            Self::Speed(_) => Ok(raw),
            Self::Longitude(_) | Self::Separation => Ok(normalize_to_pm180(raw)),
        }
    }
}

/// Check whether a residual sign change is a genuine crossing rather than
/// the wrap-around jump of a cyclic function.
///
/// When the wrapped residual jumps from ~+180 to ~-180 (or back) between
/// consecutive samples the product is negative but no root lies between
/// them; a genuine crossing keeps both samples small in magnitude.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_ephem::{BodyState, EphemError};

    struct TwoBodyOracle;

    impl Ephemeris for TwoBodyOracle {
        fn position_and_speed(&self, body: Body, jd_ut: f64) -> Result<BodyState, EphemError> {
            // Sun fixed at 350 deg; Moon sweeping 12 deg/day from 340.
            let (lon, speed) = match body {
                Body::Sun => (350.0, 0.0),
                Body::Moon => (340.0 + 12.0 * jd_ut, 12.0),
                _ => (0.0, 0.0),
            };
            Ok(BodyState {
                longitude_deg: lon.rem_euclid(360.0),
                speed_deg_per_day: speed,
            })
        }
    }

    #[test]
    fn normalize_basic() {
        assert!((normalize_to_pm180(0.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_to_pm180(270.0) + 90.0).abs() < 1e-12);
        assert!((normalize_to_pm180(360.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(-359.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn longitude_predicate_wraps() {
        let lon = Predicate::Longitude(Body::Moon)
            .eval(&TwoBodyOracle, 2.0)
            .unwrap();
        assert!((lon - 4.0).abs() < 1e-12); // 340 + 24 = 364 -> 4
    }

    #[test]
    fn separation_predicate_mod_360() {
        // Moon 340, Sun 350 at jd 0 -> separation 350.
        let sep = Predicate::Separation.eval(&TwoBodyOracle, 0.0).unwrap();
        assert!((sep - 350.0).abs() < 1e-12);
    }

    #[test]
    fn residual_wraps_across_zero_target() {
        // Separation 350 against target 0 is -10, not +350.
        let r = Predicate::Separation
            .residual(&TwoBodyOracle, 0.0, 0.0)
            .unwrap();
        assert!((r + 10.0).abs() < 1e-12);
    }

    #[test]
    fn speed_residual_is_raw() {
        let r = Predicate::Speed(Body::Moon)
            .residual(&TwoBodyOracle, 0.0, 200.0)
            .unwrap();
        assert!((r + 188.0).abs() < 1e-12);
    }

    #[test]
    fn genuine_crossing_detection() {
        assert!(is_genuine_crossing(5.0, -3.0));
        assert!(is_genuine_crossing(-10.0, 10.0));
        assert!(!is_genuine_crossing(2.0, 3.0));
        // +175 to -175 is a wrap jump, not a crossing.
        assert!(!is_genuine_crossing(175.0, -175.0));
    }
}
