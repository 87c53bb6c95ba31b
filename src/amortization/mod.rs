//! Loan amortization under the constant-amortization (SAC) and
//! constant-installment French (SAF) systems
//!
//! Both systems are closed-form: every quantity at installment `k` is computed
//! directly without rolling a balance forward. Installments are 1-indexed and
//! valid for `1 <= k <= n`.
//!
//! # Example
//!
//! ```rust
//! use finmath_kernel::amortization::sac;
//!
//! // 900 repaid in 10 equal amortizations: half is outstanding after the 5th
//! assert_eq!(sac::balance(900.0, 10, 5).unwrap(), 450.0);
//! ```

pub mod sac;
pub mod saf;
mod schedule;

pub use schedule::{AmortizationSchedule, AmortizationSystem, InstallmentRow, ScheduleSummary};

use crate::error::{FinanceError, FinanceResult};

/// Installment index must lie in 1..=periods
pub(crate) fn check_installment(period: u32, periods: u32) -> FinanceResult<()> {
    if periods == 0 {
        return Err(FinanceError::ZeroPeriods);
    }
    if period == 0 || period > periods {
        return Err(FinanceError::PeriodOutOfRange { period, periods });
    }
    Ok(())
}

/// Balances are also defined after zero installments (the principal)
pub(crate) fn check_balance_index(period: u32, periods: u32) -> FinanceResult<()> {
    if periods == 0 {
        return Err(FinanceError::ZeroPeriods);
    }
    if period > periods {
        return Err(FinanceError::PeriodOutOfRange { period, periods });
    }
    Ok(())
}
