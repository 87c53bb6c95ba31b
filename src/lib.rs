//! Financial math kernel - closed-form compound-interest formulas
//!
//! This library provides:
//! - Time-value-of-money factors (F/P, P/F, F/A, P/A, A/F, A/P) with ordinary or due timing
//! - Effective/nominal rate conversion between periodicities
//! - SAC (constant amortization) and SAF (French, constant installment) amortization
//! - Rate and period-count solving for single sums and level annuities
//!
//! Rates are per-period fractions (0.10 for 10%); the caller keeps track of
//! the periodicity. All functions are pure and return [`FinanceResult`].

pub mod error;
pub mod factors;
pub mod rates;
pub mod amortization;
pub mod solver;

// Re-export commonly used types
pub use error::{FinanceError, FinanceResult};
pub use factors::{
    annuity_from_future, annuity_from_present, future_from_annuity, future_from_present,
    present_from_annuity, present_from_future, PaymentTiming,
};
pub use rates::{effective_from_nominal, equivalent_rate};
pub use amortization::{AmortizationSchedule, InstallmentRow, ScheduleSummary};
pub use solver::{solve_periods, solve_rate, CashFlowInputs, CashFlowSpec, Solution, SolverConfig};
