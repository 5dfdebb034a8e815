//! Chebyshev series evaluation for ephemeris segments.
//!
//! Every oracle query needs both the longitude and its time derivative, so
//! the series and its derivative are evaluated together in one forward
//! recurrence over `T_k(s)` and `T_k'(s)`:
//!
//! ```text
//! T_0 = 1        T_0' = 0
//! T_1 = s        T_1' = 1
//! T_k = 2s T_{k-1} - T_{k-2}
//! T_k' = 2 T_{k-1} + 2s T_{k-1}' - T_{k-2}'
//! ```

/// Evaluate a Chebyshev expansion and its derivative at normalised time
/// `s` in `[-1, 1]`.
///
/// Returns `(sum(c_k T_k(s)), sum(c_k T_k'(s)))`. The derivative is with
/// respect to `s`; callers rescale to their own time unit.
pub fn eval_series(coeffs: &[f64], s: f64) -> (f64, f64) {
    match coeffs.len() {
        0 => return (0.0, 0.0),
        1 => return (coeffs[0], 0.0),
        _ => {}
    }

    let two_s = 2.0 * s;

    let mut t_prev = 1.0; // T_{k-2}(s)
    let mut t_curr = s; // T_{k-1}(s)
    let mut dt_prev = 0.0;
    let mut dt_curr = 1.0;

    let mut value = coeffs[0] + coeffs[1] * s;
    let mut deriv = coeffs[1];

    for &c in &coeffs[2..] {
        let t_next = two_s * t_curr - t_prev;
        let dt_next = 2.0 * t_curr + two_s * dt_curr - dt_prev;

        value += c * t_next;
        deriv += c * dt_next;

        t_prev = t_curr;
        t_curr = t_next;
        dt_prev = dt_curr;
        dt_curr = dt_next;
    }

    (value, deriv)
}
