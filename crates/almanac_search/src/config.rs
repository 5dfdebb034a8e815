//! Scan and refinement configuration.

/// Configuration shared by the coarse scanners and the bisection refiner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Coarse scan step size in days.
    pub step_days: f64,
    /// Bisection iteration budget.
    pub max_iterations: u32,
    /// Early-exit residual tolerance in degrees (deg/day for speed).
    pub tolerance_deg: f64,
    /// Largest residual accepted after refinement; larger means the
    /// bracket never contained the target and the event is dropped.
    pub residual_limit_deg: f64,
    /// Window length for the lunar phase scan in days.
    pub phase_window_days: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            max_iterations: 30,
            tolerance_deg: 1e-6,
            residual_limit_deg: 1e-3,
            phase_window_days: 30.0,
        }
    }
}

impl ScanConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if !self.residual_limit_deg.is_finite() || self.residual_limit_deg <= 0.0 {
            return Err("residual_limit_deg must be positive");
        }
        if !self.phase_window_days.is_finite() || self.phase_window_days <= 0.0 {
            return Err("phase_window_days must be positive");
        }
        Ok(())
    }
}
