//! Rate conversion between periodicities

use crate::error::{check_finite, FinanceError, FinanceResult};
use crate::factors::growth_excess;

/// Effective rate over `periods` compounding periods of an effective per-period `rate`
///
/// `(1+i)^n - 1`. Fractional `periods` converts to a shorter periodicity,
/// e.g. a monthly rate with `periods = 1.0 / 30.0` gives the daily rate.
pub fn equivalent_rate(rate: f64, periods: f64) -> FinanceResult<f64> {
    growth_excess(rate, periods)
}

/// Effective rate of a nominal `rate` compounded `compoundings` times per stated period
///
/// `(1 + i/n)^n - 1`
pub fn effective_from_nominal(rate: f64, compoundings: f64) -> FinanceResult<f64> {
    let rate = check_finite("rate", rate)?;
    let compoundings = check_finite("compoundings", compoundings)?;
    if compoundings == 0.0 {
        return Err(FinanceError::ZeroPeriods);
    }

    growth_excess(rate / compoundings, compoundings)
}

/// Convert a rate quoted in percent (e.g. 12.5) to a fraction
pub fn from_percent(percent: f64) -> f64 {
    percent / 100.0
}

/// Convert a fractional rate to percent
pub fn to_percent(rate: f64) -> f64 {
    rate * 100.0
}
