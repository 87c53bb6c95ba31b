//! Constant-installment French system (SAF / Price table)
//!
//! Every installment has the same value `A`; the amortized portion grows
//! geometrically at `(1+i)` per period while interest shrinks.

use super::{check_balance_index, AmortizationSchedule, AmortizationSystem, InstallmentRow};
use crate::error::{check_finite, check_rate, FinanceError, FinanceResult};
use crate::factors::{annuity_from_present, PaymentTiming, ZERO_RATE_EPSILON};

/// Level installment repaying `principal` over `periods` end-of-period payments
pub fn installment(principal: f64, rate: f64, periods: u32) -> FinanceResult<f64> {
    let principal = check_finite("principal", principal)?;
    if periods == 0 {
        return Err(FinanceError::ZeroPeriods);
    }
    Ok(principal * annuity_from_present(rate, periods as f64, PaymentTiming::Ordinary)?)
}

/// Principal repaid with the first installment, `A - P·i`
pub fn first_amortization(principal: f64, rate: f64, periods: u32) -> FinanceResult<f64> {
    Ok(installment(principal, rate, periods)? - principal * rate)
}

/// Principal repaid with installment `period`, `amort1·(1+i)^(k-1)`
pub fn amortization(first_amortization: f64, rate: f64, period: u32) -> FinanceResult<f64> {
    let first_amortization = check_finite("first_amortization", first_amortization)?;
    let rate = check_rate(rate)?;
    if period == 0 {
        return Err(FinanceError::PeriodOutOfRange { period, periods: 0 });
    }
    Ok(first_amortization * (1.0 + rate).powf((period - 1) as f64))
}

/// Interest paid with installment `period`, `A - amort1·(1+i)^(k-1)`
pub fn interest(installment: f64, first_amortization: f64, rate: f64, period: u32) -> FinanceResult<f64> {
    let installment = check_finite("installment", installment)?;
    Ok(installment - amortization(first_amortization, rate, period)?)
}

/// Outstanding balance after installment `period`, `A·(1 - (1+i)^(k-n))/i`
///
/// `period = 0` gives the principal. At a zero rate this is `A·(n-k)`.
pub fn balance(installment: f64, rate: f64, periods: u32, period: u32) -> FinanceResult<f64> {
    let installment = check_finite("installment", installment)?;
    let rate = check_rate(rate)?;
    check_balance_index(period, periods)?;

    let remaining = (periods - period) as f64;
    if rate.abs() < ZERO_RATE_EPSILON {
        return Ok(installment * remaining);
    }
    Ok(installment * (1.0 - (1.0 + rate).powf(-remaining)) / rate)
}

/// Interest over the whole schedule, `n·A - P`
pub fn total_interest(principal: f64, installment: f64, periods: u32) -> FinanceResult<f64> {
    let principal = check_finite("principal", principal)?;
    let installment = check_finite("installment", installment)?;
    if periods == 0 {
        return Err(FinanceError::ZeroPeriods);
    }
    Ok(periods as f64 * installment - principal)
}

/// Full SAF schedule
pub fn schedule(principal: f64, rate: f64, periods: u32) -> FinanceResult<AmortizationSchedule> {
    let level = installment(principal, rate, periods)?;
    let first = level - principal * rate;

    let rows = (1..=periods)
        .map(|k| -> FinanceResult<InstallmentRow> {
            let amortization = amortization(first, rate, k)?;
            Ok(InstallmentRow {
                period: k,
                installment: level,
                interest: level - amortization,
                amortization,
                balance: balance(level, rate, periods, k)?,
            })
        })
        .collect::<FinanceResult<Vec<_>>>()?;

    Ok(AmortizationSchedule {
        system: AmortizationSystem::Saf,
        principal,
        rate,
        rows,
    })
}
