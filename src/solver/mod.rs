//! Numerical inversion of the compound-interest equations
//!
//! Given two of present value, future value and level payment plus either the
//! period count or the rate, solve for the other one. The annuity equations
//! are polynomial of degree `n` in `(1+i)` and transcendental in `n`, so both
//! unknowns are found with a secant iteration from a fixed starting guess.
//!
//! # Example
//!
//! ```rust
//! use finmath_kernel::solver::{CashFlowInputs, SolverConfig};
//!
//! // 1000 grew to 5000 over 10 periods: what rate?
//! let inputs = CashFlowInputs::single_sum(1000.0, 5000.0);
//! let rate = inputs.solve_rate(10.0, &SolverConfig::default()).unwrap();
//! assert!((rate - 0.1746).abs() < 1e-4);
//! ```

mod cashflow;
mod config;
mod secant;

pub use cashflow::{CashFlowInputs, CashFlowSpec};
pub use config::{SolverConfig, DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use secant::secant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_rate, FinanceResult};

/// A converged root
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// The rate or period count that solves the equation
    pub value: f64,
    pub iterations: u32,
    /// Equation residual at `value`
    pub residual: f64,
}

/// Solve `spec` for the per-period rate over `periods` periods
pub fn solve_rate(spec: &CashFlowSpec, periods: f64, config: &SolverConfig) -> FinanceResult<Solution> {
    spec.validate()?;
    let periods = check_finite("periods", periods)?;
    let config = config.validate()?;
    check_rate(config.initial_guess)?;

    debug!("Solving {:?} for rate over {} periods", spec, periods);
    let solution = secant(|x| spec.residual(x, periods), config.initial_guess, &config)?;
    debug!(
        "Rate {} after {} iterations (residual {:.2e})",
        solution.value, solution.iterations, solution.residual
    );
    Ok(solution)
}

/// Solve `spec` for the period count at a per-period `rate`
pub fn solve_periods(spec: &CashFlowSpec, rate: f64, config: &SolverConfig) -> FinanceResult<Solution> {
    spec.validate()?;
    let rate = check_rate(rate)?;
    let config = config.validate()?;

    debug!("Solving {:?} for periods at rate {}", spec, rate);
    let solution = secant(|x| spec.residual(rate, x), config.initial_guess, &config)?;
    debug!(
        "Periods {} after {} iterations (residual {:.2e})",
        solution.value, solution.iterations, solution.residual
    );
    Ok(solution)
}

impl CashFlowInputs {
    /// Rate implied by these quantities over `periods` periods
    pub fn solve_rate(&self, periods: f64, config: &SolverConfig) -> FinanceResult<f64> {
        solve_rate(&self.spec(), periods, config).map(|s| s.value)
    }

    /// Period count implied by these quantities at `rate`
    pub fn solve_periods(&self, rate: f64, config: &SolverConfig) -> FinanceResult<f64> {
        solve_periods(&self.spec(), rate, config).map(|s| s.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::factors::{future_from_annuity, future_from_present, present_from_annuity, PaymentTiming};
    use approx::assert_relative_eq;

    fn config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn test_single_sum_rate() {
        let rate = CashFlowInputs::single_sum(1000.0, 5000.0)
            .solve_rate(10.0, &config())
            .unwrap();
        assert_relative_eq!(rate, 5.0_f64.powf(0.1) - 1.0, epsilon = 1e-9);
        assert!((rate - 0.1746).abs() < 1e-4, "Expected ~17.46%, got {}", rate);
        assert!((1000.0 * (1.0 + rate).powi(10) - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn test_rate_recovered_from_factor() {
        for &(rate, periods) in &[(0.05, 12.0), (0.0125, 60.0), (0.30, 4.0)] {
            let future = 2500.0 * future_from_present(rate, periods).unwrap();
            let solved = CashFlowInputs::single_sum(2500.0, future)
                .solve_rate(periods, &config())
                .unwrap();
            assert!((solved - rate).abs() < 1e-8, "rate {} solved as {}", rate, solved);
        }
    }

    #[test]
    fn test_annuity_to_future_rate() {
        let future = 500.0 * future_from_annuity(0.06, 20.0, PaymentTiming::Ordinary).unwrap();
        let inputs = CashFlowInputs::annuity_to_future(future, 500.0, PaymentTiming::Ordinary);
        let rate = inputs.solve_rate(20.0, &config()).unwrap();
        assert!((rate - 0.06).abs() < 1e-8);
    }

    #[test]
    fn test_annuity_to_present_due_rate() {
        let present = 500.0 * present_from_annuity(0.03, 10.0, PaymentTiming::Due).unwrap();
        let inputs = CashFlowInputs::annuity_to_present(present, 500.0, PaymentTiming::Due);
        let rate = inputs.solve_rate(10.0, &config()).unwrap();
        assert!((rate - 0.03).abs() < 1e-8);
    }

    #[test]
    fn test_single_sum_periods() {
        let periods = CashFlowInputs::single_sum(1000.0, 5000.0)
            .solve_periods(0.10, &config())
            .unwrap();
        assert_relative_eq!(periods, 5.0_f64.ln() / 1.1_f64.ln(), epsilon = 1e-8);
    }

    #[test]
    fn test_annuity_to_future_periods() {
        // 500 a year at 12% until 10_000 is reached
        let inputs = CashFlowInputs::annuity_to_future(10_000.0, 500.0, PaymentTiming::Ordinary);
        let periods = inputs.solve_periods(0.12, &config()).unwrap();
        let expected = 3.4_f64.ln() / 1.12_f64.ln();
        assert!((periods - expected).abs() < 1e-8, "Expected {}, got {}", expected, periods);
    }

    #[test]
    fn test_annuity_to_present_periods() {
        let present = 500.0 * present_from_annuity(0.02, 12.0, PaymentTiming::Ordinary).unwrap();
        let inputs = CashFlowInputs::annuity_to_present(present, 500.0, PaymentTiming::Ordinary);
        let periods = inputs.solve_periods(0.02, &config()).unwrap();
        assert!((periods - 12.0).abs() < 1e-8);
    }

    #[test]
    fn test_due_annuity_periods() {
        let present = 500.0 * present_from_annuity(0.02, 12.0, PaymentTiming::Due).unwrap();
        let inputs = CashFlowInputs::annuity_to_present(present, 500.0, PaymentTiming::Due);
        let periods = inputs.solve_periods(0.02, &config()).unwrap();
        assert!((periods - 12.0).abs() < 1e-8, "Expected 12, got {}", periods);

        let future = 500.0 * future_from_annuity(0.12, 8.0, PaymentTiming::Due).unwrap();
        let inputs = CashFlowInputs::annuity_to_future(future, 500.0, PaymentTiming::Due);
        let periods = inputs.solve_periods(0.12, &config()).unwrap();
        assert!((periods - 8.0).abs() < 1e-8, "Expected 8, got {}", periods);
    }

    #[test]
    fn test_over_specified_is_unsolvable() {
        let inputs = CashFlowInputs {
            present: Some(1000.0),
            future: Some(5000.0),
            payment: Some(100.0),
            ..Default::default()
        };
        assert!(matches!(inputs.solve_rate(10.0, &config()), Err(FinanceError::Unsolvable)));
        assert!(matches!(inputs.solve_periods(0.05, &config()), Err(FinanceError::Unsolvable)));
    }

    #[test]
    fn test_no_root_reports_convergence_failure() {
        // Payments of 500 at 1% can never repay more than 50_000
        let inputs = CashFlowInputs::annuity_to_present(100_000.0, 500.0, PaymentTiming::Ordinary);
        let result = inputs.solve_periods(0.01, &config());
        assert!(matches!(result, Err(FinanceError::ConvergenceFailed { .. })));
    }

    #[test]
    fn test_invalid_rate_is_domain_error() {
        let inputs = CashFlowInputs::single_sum(1000.0, 5000.0);
        let err = inputs.solve_periods(-1.5, &config()).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_solution_reports_iterations() {
        let spec = CashFlowInputs::single_sum(1000.0, 5000.0).spec();
        let solution = solve_rate(&spec, 10.0, &config()).unwrap();
        assert!(solution.iterations > 0 && solution.iterations <= DEFAULT_MAX_ITERATIONS);
        assert!(solution.residual.abs() < 1e-6);
    }
}
