//! Constant-amortization system (SAC)
//!
//! The principal is repaid in `n` equal chunks of `P/n`; interest is charged
//! on the balance outstanding before each installment, so installments decrease
//! linearly.

use super::{check_balance_index, check_installment, AmortizationSchedule, AmortizationSystem, InstallmentRow};
use crate::error::{check_finite, check_rate, FinanceError, FinanceResult};

/// Principal repaid with every installment, `P/n`
pub fn amortization(principal: f64, periods: u32) -> FinanceResult<f64> {
    let principal = check_finite("principal", principal)?;
    if periods == 0 {
        return Err(FinanceError::ZeroPeriods);
    }
    Ok(principal / periods as f64)
}

/// Interest paid with installment `period`, `(P - (P/n)(k-1))·i`
pub fn interest(principal: f64, rate: f64, periods: u32, period: u32) -> FinanceResult<f64> {
    let rate = check_rate(rate)?;
    check_installment(period, periods)?;
    Ok(opening_balance(check_finite("principal", principal)?, periods, period) * rate)
}

/// Outstanding balance after installment `period`, `P - k·(P/n)`
///
/// `period = 0` gives the principal.
pub fn balance(principal: f64, periods: u32, period: u32) -> FinanceResult<f64> {
    let principal = check_finite("principal", principal)?;
    check_balance_index(period, periods)?;
    // Written as P·(n-k)/n so the final balance is exactly zero
    Ok(principal * (periods - period) as f64 / periods as f64)
}

/// Installment value: amortization chunk plus that period's interest
pub fn installment(principal: f64, rate: f64, periods: u32, period: u32) -> FinanceResult<f64> {
    Ok(amortization(principal, periods)? + interest(principal, rate, periods, period)?)
}

/// Interest over the whole schedule, `0.5·P·i·(n+1)`
pub fn total_interest(principal: f64, rate: f64, periods: u32) -> FinanceResult<f64> {
    let principal = check_finite("principal", principal)?;
    let rate = check_rate(rate)?;
    if periods == 0 {
        return Err(FinanceError::ZeroPeriods);
    }
    Ok(0.5 * principal * rate * (periods as f64 + 1.0))
}

/// Full SAC schedule
pub fn schedule(principal: f64, rate: f64, periods: u32) -> FinanceResult<AmortizationSchedule> {
    let chunk = amortization(principal, periods)?;

    let rows = (1..=periods)
        .map(|k| -> FinanceResult<InstallmentRow> {
            let interest = interest(principal, rate, periods, k)?;
            Ok(InstallmentRow {
                period: k,
                installment: chunk + interest,
                interest,
                amortization: chunk,
                balance: balance(principal, periods, k)?,
            })
        })
        .collect::<FinanceResult<Vec<_>>>()?;

    Ok(AmortizationSchedule {
        system: AmortizationSystem::Sac,
        principal,
        rate,
        rows,
    })
}

fn opening_balance(principal: f64, periods: u32, period: u32) -> f64 {
    principal - (principal / periods as f64) * (period - 1) as f64
}
