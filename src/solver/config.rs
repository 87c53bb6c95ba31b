//! Solver tuning parameters

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{FinanceError, FinanceResult};

/// Default starting point for the unknown (1% per period)
pub const DEFAULT_INITIAL_GUESS: f64 = 0.01;

/// Default absolute step tolerance
pub const DEFAULT_TOLERANCE: f64 = 1.48e-10;

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the rate/period solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Starting value of the unknown (rate or period count)
    pub initial_guess: f64,
    /// Converged once successive iterates differ by less than this
    pub tolerance: f64,
    /// Iterations before giving up
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Parse from JSON; missing fields take their defaults
    ///
    /// ```rust
    /// use finmath_kernel::solver::SolverConfig;
    ///
    /// let config = SolverConfig::from_json(r#"{ "max_iterations": 250 }"#).unwrap();
    /// assert_eq!(config.max_iterations, 250);
    /// assert_eq!(config.initial_guess, 0.01);
    /// ```
    pub fn from_json(json: &str) -> FinanceResult<Self> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()
    }

    /// Read overrides from the environment, falling back to defaults:
    /// `FINMATH_INITIAL_GUESS`, `FINMATH_TOLERANCE`, `FINMATH_MAX_ITERATIONS`
    pub fn from_env() -> FinanceResult<Self> {
        let defaults = Self::default();

        let initial_guess: f64 = env::var("FINMATH_INITIAL_GUESS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.initial_guess);

        let tolerance: f64 = env::var("FINMATH_TOLERANCE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tolerance);

        let max_iterations: u32 = env::var("FINMATH_MAX_ITERATIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_iterations);

        Self {
            initial_guess,
            tolerance,
            max_iterations,
        }
        .validate()
    }

    /// Reject settings the solver cannot run with
    pub fn validate(self) -> FinanceResult<Self> {
        if !self.initial_guess.is_finite() {
            return Err(FinanceError::Config {
                key: "initial_guess",
                value: self.initial_guess.to_string(),
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(FinanceError::Config {
                key: "tolerance",
                value: self.tolerance.to_string(),
            });
        }
        if self.max_iterations == 0 {
            return Err(FinanceError::Config {
                key: "max_iterations",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.initial_guess, 0.01);
        assert_eq!(config.tolerance, 1.48e-10);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_builders() {
        let config = SolverConfig::default()
            .with_initial_guess(5.0)
            .with_tolerance(1e-12)
            .with_max_iterations(500);
        assert_eq!(config.initial_guess, 5.0);
        assert_eq!(config.tolerance, 1e-12);
        assert_eq!(config.max_iterations, 500);
    }

    #[test]
    fn test_from_json() {
        let config = SolverConfig::from_json(r#"{"initial_guess": 0.05, "tolerance": 1e-8}"#).unwrap();
        assert_eq!(config.initial_guess, 0.05);
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);

        assert!(matches!(
            SolverConfig::from_json("{ not json"),
            Err(FinanceError::ConfigJson(_))
        ));
        assert!(matches!(
            SolverConfig::from_json(r#"{"max_iterations": 0}"#),
            Err(FinanceError::Config { key: "max_iterations", .. })
        ));
    }

    #[test]
    fn test_from_env() {
        env::set_var("FINMATH_MAX_ITERATIONS", "42");
        env::set_var("FINMATH_TOLERANCE", "not-a-number");
        let config = SolverConfig::from_env().unwrap();
        env::remove_var("FINMATH_MAX_ITERATIONS");
        env::remove_var("FINMATH_TOLERANCE");

        assert_eq!(config.max_iterations, 42);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let result = SolverConfig::default().with_tolerance(-1.0).validate();
        assert!(matches!(result, Err(FinanceError::Config { key: "tolerance", .. })));
    }
}
