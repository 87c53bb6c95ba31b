//! Compound-interest equivalence factors
//!
//! Each factor is a dimensionless multiplier converting one cash-flow quantity
//! into another at a per-period `rate` over `periods` periods:
//! - single sums: F/P and P/F
//! - level annuities: F/A, P/A, A/F and A/P, each with ordinary or due timing
//!
//! Example: 1000 invested at 10% per period for 5 periods grows to
//! `1000.0 * future_from_present(0.10, 5.0)?` = 1610.51.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_rate, FinanceError, FinanceResult};

/// Rates closer to zero than this use the zero-rate limit of the annuity factors
pub const ZERO_RATE_EPSILON: f64 = 1e-10;

/// When level payments fall within each period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTiming {
    /// Payments at the end of each period (ordinary annuity)
    #[default]
    Ordinary,
    /// Payments at the start of each period (annuity-due)
    Due,
}

impl PaymentTiming {
    /// Map the "paid in advance" flag onto a timing
    pub fn from_advance(advance: bool) -> Self {
        if advance {
            PaymentTiming::Due
        } else {
            PaymentTiming::Ordinary
        }
    }

    pub fn is_due(self) -> bool {
        self == PaymentTiming::Due
    }
}

fn growth(rate: f64, periods: f64) -> FinanceResult<f64> {
    let rate = check_rate(rate)?;
    let periods = check_finite("periods", periods)?;
    Ok((1.0 + rate).powf(periods))
}

/// `(1+i)^n - 1` without cancellation for rates near zero
pub(crate) fn growth_excess(rate: f64, periods: f64) -> FinanceResult<f64> {
    let rate = check_rate(rate)?;
    let periods = check_finite("periods", periods)?;
    Ok((periods * rate.ln_1p()).exp_m1())
}

fn is_zero_rate(rate: f64) -> bool {
    rate.abs() < ZERO_RATE_EPSILON
}

fn reciprocal_periods(periods: f64) -> FinanceResult<f64> {
    if periods == 0.0 {
        return Err(FinanceError::ZeroPeriods);
    }
    Ok(1.0 / periods)
}

/// F/P: compound a present value forward, `(1+i)^n`
pub fn future_from_present(rate: f64, periods: f64) -> FinanceResult<f64> {
    growth(rate, periods)
}

/// P/F: discount a future value back, `1/(1+i)^n`
pub fn present_from_future(rate: f64, periods: f64) -> FinanceResult<f64> {
    Ok(1.0 / growth(rate, periods)?)
}

/// F/A: accumulated value of `periods` unit payments
///
/// Ordinary: `((1+i)^n - 1)/i`. Due: ordinary × (1+i).
pub fn future_from_annuity(rate: f64, periods: f64, timing: PaymentTiming) -> FinanceResult<f64> {
    let excess = growth_excess(rate, periods)?;
    if is_zero_rate(rate) {
        return Ok(periods);
    }

    let ordinary = excess / rate;
    Ok(match timing {
        PaymentTiming::Ordinary => ordinary,
        PaymentTiming::Due => ordinary * (1.0 + rate),
    })
}

/// P/A: present value of `periods` unit payments
///
/// Ordinary: `((1+i)^n - 1) / (i·(1+i)^n)`. Due: `((1+i)^n - 1) / (i·(1+i)^(n-1))`.
pub fn present_from_annuity(rate: f64, periods: f64, timing: PaymentTiming) -> FinanceResult<f64> {
    let excess = growth_excess(rate, periods)?;
    if is_zero_rate(rate) {
        return Ok(periods);
    }

    Ok(match timing {
        PaymentTiming::Ordinary => excess / (rate * (1.0 + excess)),
        PaymentTiming::Due => excess / (rate * (1.0 + rate).powf(periods - 1.0)),
    })
}

/// A/F: level payment that accumulates to a unit future value
///
/// Ordinary: `i/((1+i)^n - 1)`. Due: ordinary / (1+i).
pub fn annuity_from_future(rate: f64, periods: f64, timing: PaymentTiming) -> FinanceResult<f64> {
    let excess = growth_excess(rate, periods)?;
    if is_zero_rate(rate) {
        return reciprocal_periods(periods);
    }
    if periods == 0.0 {
        return Err(FinanceError::ZeroPeriods);
    }

    let ordinary = rate / excess;
    Ok(match timing {
        PaymentTiming::Ordinary => ordinary,
        PaymentTiming::Due => ordinary / (1.0 + rate),
    })
}

/// A/P: level payment that repays a unit present value
///
/// Ordinary: `i·(1+i)^n / ((1+i)^n - 1)`. Due: `i·(1+i)^(n-1) / ((1+i)^n - 1)`.
pub fn annuity_from_present(rate: f64, periods: f64, timing: PaymentTiming) -> FinanceResult<f64> {
    let excess = growth_excess(rate, periods)?;
    if is_zero_rate(rate) {
        return reciprocal_periods(periods);
    }
    if periods == 0.0 {
        return Err(FinanceError::ZeroPeriods);
    }

    Ok(match timing {
        PaymentTiming::Ordinary => rate * (1.0 + excess) / excess,
        PaymentTiming::Due => rate * (1.0 + rate).powf(periods - 1.0) / excess,
    })
}
