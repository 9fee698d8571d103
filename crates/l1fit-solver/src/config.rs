//! Solver configuration types.

/// Configuration options for solver behavior.
///
/// This struct provides a unified way to configure solver parameters across
/// different LP backends. Every field defaults to `None`, meaning the
/// backend's own default; a backend that does not honor a knob ignores it
/// and documents the fact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverConfig {
    /// Time limit in seconds. `None` means no limit.
    pub time_limit: Option<f64>,
    /// Verbosity level. `None` uses solver default.
    pub verbosity: Option<u32>,
    /// Feasibility tolerance. `None` uses solver default.
    pub tolerance: Option<f64>,
}

impl SolverConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Set the verbosity level.
    pub fn with_verbosity(mut self, level: u32) -> Self {
        self.verbosity = Some(level);
        self
    }

    /// Set the feasibility tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = Some(tol);
        self
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.time_limit.is_none() && self.verbosity.is_none() && self.tolerance.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_is_empty() {
        let config = SolverConfig::new();
        assert!(config.is_empty());
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = SolverConfig::new()
            .with_time_limit(60.0)
            .with_verbosity(1)
            .with_tolerance(1e-6);

        assert!(!config.is_empty());
        assert_eq!(config.time_limit, Some(60.0));
        assert_eq!(config.verbosity, Some(1));
        assert_eq!(config.tolerance, Some(1e-6));
    }

    #[test]
    fn test_config_partial_is_not_empty() {
        let config = SolverConfig::new().with_time_limit(30.0);
        assert!(!config.is_empty());
        assert_eq!(config.time_limit, Some(30.0));
        assert_eq!(config.verbosity, None);
    }
}
