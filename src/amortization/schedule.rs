//! Installment-by-installment schedule output

use serde::{Deserialize, Serialize};

/// Which amortization system produced a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationSystem {
    /// Constant amortization, decreasing installments
    Sac,
    /// Constant installments (French / Price table)
    Saf,
}

/// A single installment of a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRow {
    /// 1-indexed installment number
    pub period: u32,
    pub installment: f64,
    pub interest: f64,
    pub amortization: f64,
    /// Outstanding balance after this installment
    pub balance: f64,
}

/// Full schedule for a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub system: AmortizationSystem,
    pub principal: f64,
    pub rate: f64,
    pub rows: Vec<InstallmentRow>,
}

impl AmortizationSchedule {
    pub fn periods(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Row for 1-indexed installment `period`
    pub fn row(&self, period: u32) -> Option<&InstallmentRow> {
        period
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx as usize))
    }

    /// Totals across the schedule
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.rows.iter().map(|r| r.installment).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest).sum();
        let total_amortization: f64 = self.rows.iter().map(|r| r.amortization).sum();

        let final_balance = self.rows.last().map(|r| r.balance).unwrap_or(self.principal);

        ScheduleSummary {
            installments: self.periods(),
            total_paid,
            total_interest,
            total_amortization,
            final_balance,
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub installments: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_amortization: f64,
    pub final_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_schedule() -> AmortizationSchedule {
        AmortizationSchedule {
            system: AmortizationSystem::Sac,
            principal: 200.0,
            rate: 0.10,
            rows: vec![
                InstallmentRow {
                    period: 1,
                    installment: 120.0,
                    interest: 20.0,
                    amortization: 100.0,
                    balance: 100.0,
                },
                InstallmentRow {
                    period: 2,
                    installment: 110.0,
                    interest: 10.0,
                    amortization: 100.0,
                    balance: 0.0,
                },
            ],
        }
    }

    #[test]
    fn test_row_lookup_is_one_indexed() {
        let schedule = two_row_schedule();
        assert!(schedule.row(0).is_none());
        assert_eq!(schedule.row(2).map(|r| r.interest), Some(10.0));
        assert!(schedule.row(3).is_none());
    }

    #[test]
    fn test_summary_totals() {
        let summary = two_row_schedule().summary();
        assert_eq!(summary.installments, 2);
        assert!((summary.total_paid - 230.0).abs() < 1e-12);
        assert!((summary.total_interest - 30.0).abs() < 1e-12);
        assert!((summary.total_amortization - 200.0).abs() < 1e-12);
        assert_eq!(summary.final_balance, 0.0);
    }

    #[test]
    fn test_serializes_system_name() {
        let json = serde_json::to_string(&two_row_schedule()).unwrap();
        assert!(json.contains("\"system\":\"Sac\""));
    }
}
