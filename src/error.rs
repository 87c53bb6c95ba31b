//! Error types for factor, amortization and solver operations

use thiserror::Error;

/// Result alias used throughout the crate
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Errors raised by the closed-form formulas and the equation solver
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Rate is not finite or does not satisfy rate > -1
    #[error("Invalid rate {rate}: must be finite and greater than -1")]
    InvalidRate { rate: f64 },

    /// A non-rate input is NaN or infinite
    #[error("Non-finite value for {name}: {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Period count is zero where a formula divides by it
    #[error("Period count must be non-zero")]
    ZeroPeriods,

    /// Installment index outside 1..=periods
    #[error("Installment {period} is outside 1..={periods}")]
    PeriodOutOfRange { period: u32, periods: u32 },

    /// No cash-flow equation can be formed from the supplied values
    #[error("Unsolvable: supply exactly two of present value, future value and payment")]
    Unsolvable,

    /// Root finder gave up before reaching tolerance
    #[error("Convergence failed after {iterations} iterations (last {last}, residual {residual:.2e})")]
    ConvergenceFailed {
        iterations: u32,
        last: f64,
        residual: f64,
    },

    /// Solver configuration value could not be used
    #[error("Invalid solver setting {key}: {value}")]
    Config { key: &'static str, value: String },

    #[error("Invalid solver config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

impl FinanceError {
    /// True for errors raised by a closed-form formula on out-of-domain input
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            FinanceError::InvalidRate { .. }
                | FinanceError::NonFinite { .. }
                | FinanceError::ZeroPeriods
                | FinanceError::PeriodOutOfRange { .. }
        )
    }
}

/// Check rate > -1 and finite
pub(crate) fn check_rate(rate: f64) -> FinanceResult<f64> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(FinanceError::InvalidRate { rate });
    }
    Ok(rate)
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> FinanceResult<f64> {
    if !value.is_finite() {
        return Err(FinanceError::NonFinite { name, value });
    }
    Ok(value)
}
