//! Bisection refinement of a detected crossing.
//!
//! Given a predicate, a bracketing time interval, and a target value, the
//! refiner halves the interval for a fixed iteration budget, keeping the
//! half whose endpoints still straddle the target. The budget alone bounds
//! the work; an early exit fires when the midpoint residual drops under the
//! configured tolerance.
//!
//! A bracket that never contained the target cannot be detected here: the
//! refiner still returns some midpoint, but its residual stays large.
//! Callers must check [`Refined::within`] before trusting the result.

use almanac_ephem::Ephemeris;

use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::predicate::Predicate;

/// A time interval believed to bracket a predicate-target crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub t_start: f64,
    pub t_end: f64,
    pub target_deg: f64,
}

impl Bracket {
    pub fn new(t_start: f64, t_end: f64, target_deg: f64) -> Self {
        Self {
            t_start,
            t_end,
            target_deg,
        }
    }
}

/// Result of a bisection run: the final midpoint and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refined {
    /// Julian Date (UT) of the final midpoint.
    pub jd_ut: f64,
    /// `predicate(jd_ut) - target` at that midpoint.
    pub residual_deg: f64,
}

impl Refined {
    /// Whether the refinement actually converged onto the target.
    pub fn within(&self, limit_deg: f64) -> bool {
        self.residual_deg.abs() <= limit_deg
    }
}

/// Bisect `predicate` toward `bracket.target_deg` inside the bracket.
pub fn refine<E: Ephemeris + ?Sized>(
    eph: &E,
    predicate: Predicate,
    bracket: Bracket,
    config: &ScanConfig,
) -> Result<Refined, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let Bracket {
        mut t_start,
        mut t_end,
        target_deg,
    } = bracket;

    let mut r_start = predicate.residual(eph, t_start, target_deg)?;
    let mut mid = 0.5 * (t_start + t_end);
    let mut r_mid = r_start;

    for _ in 0..config.max_iterations {
        mid = 0.5 * (t_start + t_end);
        r_mid = predicate.residual(eph, mid, target_deg)?;

        if r_mid.abs() < config.tolerance_deg {
            break;
        }

        if r_start * r_mid < 0.0 {
            t_end = mid;
        } else {
            t_start = mid;
            r_start = r_mid;
        }
    }

    Ok(Refined {
        jd_ut: mid,
        residual_deg: r_mid,
    })
}
