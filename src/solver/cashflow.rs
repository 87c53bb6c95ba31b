//! Selection of the cash-flow equation to invert

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, FinanceError, FinanceResult};
use crate::factors::{future_from_annuity, present_from_annuity, present_from_future, PaymentTiming};

/// Known cash-flow quantities of a problem
///
/// Exactly two of present value, future value and payment should be given.
/// A zero payment counts as absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowInputs {
    pub present: Option<f64>,
    pub future: Option<f64>,
    pub payment: Option<f64>,
    pub timing: PaymentTiming,
}

impl CashFlowInputs {
    /// Present and future value, no periodic payments
    pub fn single_sum(present: f64, future: f64) -> Self {
        Self {
            present: Some(present),
            future: Some(future),
            ..Default::default()
        }
    }

    /// Level payments accumulating to a future value
    pub fn annuity_to_future(future: f64, payment: f64, timing: PaymentTiming) -> Self {
        Self {
            future: Some(future),
            payment: Some(payment),
            timing,
            ..Default::default()
        }
    }

    /// Level payments repaying a present value
    pub fn annuity_to_present(present: f64, payment: f64, timing: PaymentTiming) -> Self {
        Self {
            present: Some(present),
            payment: Some(payment),
            timing,
            ..Default::default()
        }
    }

    /// Classify the supplied quantities into the equation they determine
    pub fn spec(&self) -> CashFlowSpec {
        let payment = self.payment.filter(|a| *a != 0.0);

        match (self.present, self.future, payment) {
            (Some(present), Some(future), None) => CashFlowSpec::SingleSum { present, future },
            (None, Some(future), Some(payment)) => CashFlowSpec::AnnuityToFuture {
                future,
                payment,
                timing: self.timing,
            },
            (Some(present), None, Some(payment)) => CashFlowSpec::AnnuityToPresent {
                present,
                payment,
                timing: self.timing,
            },
            _ => CashFlowSpec::Unsolvable,
        }
    }
}

/// The compound-interest equation relating the known quantities
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CashFlowSpec {
    /// `P - F·(P/F)`
    SingleSum { present: f64, future: f64 },
    /// `F - A·(F/A)`
    AnnuityToFuture {
        future: f64,
        payment: f64,
        timing: PaymentTiming,
    },
    /// `P - A·(P/A)`
    AnnuityToPresent {
        present: f64,
        payment: f64,
        timing: PaymentTiming,
    },
    /// Over- or under-specified inputs; no equation applies
    Unsolvable,
}

impl CashFlowSpec {
    /// Equation residual at the given rate and period count; zero at the solution
    pub fn residual(&self, rate: f64, periods: f64) -> FinanceResult<f64> {
        match *self {
            CashFlowSpec::SingleSum { present, future } => {
                Ok(present - future * present_from_future(rate, periods)?)
            }
            CashFlowSpec::AnnuityToFuture {
                future,
                payment,
                timing,
            } => Ok(future - payment * future_from_annuity(rate, periods, timing)?),
            CashFlowSpec::AnnuityToPresent {
                present,
                payment,
                timing,
            } => Ok(present - payment * present_from_annuity(rate, periods, timing)?),
            CashFlowSpec::Unsolvable => Err(FinanceError::Unsolvable),
        }
    }

    /// Fail with `Unsolvable` or `NonFinite` before any iteration
    pub fn validate(&self) -> FinanceResult<()> {
        match *self {
            CashFlowSpec::SingleSum { present, future } => {
                check_finite("present", present)?;
                check_finite("future", future)?;
            }
            CashFlowSpec::AnnuityToFuture { future, payment, .. } => {
                check_finite("future", future)?;
                check_finite("payment", payment)?;
            }
            CashFlowSpec::AnnuityToPresent { present, payment, .. } => {
                check_finite("present", present)?;
                check_finite("payment", payment)?;
            }
            CashFlowSpec::Unsolvable => return Err(FinanceError::Unsolvable),
        }
        Ok(())
    }

    pub fn is_solvable(&self) -> bool {
        !matches!(self, CashFlowSpec::Unsolvable)
    }
}
