pub mod balance;
pub mod resolver;
pub mod schedule;

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{Debt, DebtReport, Payment, PaymentPlan};

pub use balance::remaining_amount;
pub use resolver::find_plan;
pub use schedule::next_due_date;

/// Reconciles a snapshot of debts, payment plans, and payments.
///
/// The engine owns the three collections it was constructed with and never
/// mutates them; a fresh snapshot requires a fresh engine. The helpers it
/// composes are also exposed as standalone functions since they are useful
/// on their own.
#[derive(Debug, Clone)]
pub struct ReconciliationEngine {
    debts: Vec<Debt>,
    plans: Vec<PaymentPlan>,
    payments: Vec<Payment>,
}

impl ReconciliationEngine {
    pub fn new(debts: Vec<Debt>, plans: Vec<PaymentPlan>, payments: Vec<Payment>) -> Self {
        Self {
            debts,
            plans,
            payments,
        }
    }

    /// Produces one report per debt, preserving input order.
    ///
    /// Each report carries whether the debt has a plan, how much remains
    /// unpaid, and the next due date when a plan exists. No deduplication
    /// and no sorting.
    pub fn generate_reports(&self) -> Result<Vec<DebtReport>> {
        let mut reports = Vec::with_capacity(self.debts.len());

        for debt in &self.debts {
            let plan = find_plan(debt, &self.plans);
            let remaining = remaining_amount(debt, &self.plans, &self.payments);
            let next_due = match plan {
                Some(plan) => next_due_date(plan, debt, &self.plans, &self.payments)?,
                None => None,
            };

            reports.push(DebtReport {
                debt: debt.clone(),
                is_in_payment_plan: plan.is_some(),
                remaining_amount: remaining,
                next_payment_due_date: next_due,
            });
        }

        Ok(reports)
    }

    /// remaining amount for a single debt in this snapshot
    pub fn remaining_amount(&self, debt: &Debt) -> Money {
        remaining_amount(debt, &self.plans, &self.payments)
    }

    /// plan resolved for a single debt in this snapshot
    pub fn find_plan(&self, debt: &Debt) -> Option<&PaymentPlan> {
        find_plan(debt, &self.plans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InstallmentFrequency;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> (Vec<Debt>, Vec<PaymentPlan>, Vec<Payment>) {
        let debts = vec![
            Debt {
                id: 1,
                amount: Money::from_major(1000),
            },
            Debt {
                id: 2,
                amount: Money::from_major(500),
            },
            Debt {
                id: 3,
                amount: Money::from_major(300),
            },
        ];
        let plans = vec![
            PaymentPlan {
                id: 10,
                debt_id: 1,
                amount_to_pay: Money::from_major(1000),
                installment_frequency: InstallmentFrequency::Weekly,
                installment_amount: Money::from_major(100),
                start_date: date(2020, 1, 1),
            },
            PaymentPlan {
                id: 11,
                debt_id: 3,
                amount_to_pay: Money::from_major(300),
                installment_frequency: InstallmentFrequency::BiWeekly,
                installment_amount: Money::from_major(150),
                start_date: date(2020, 2, 1),
            },
        ];
        let payments = vec![
            Payment {
                payment_plan_id: 10,
                amount: Money::from_major(100),
                date: date(2020, 1, 1),
            },
            Payment {
                payment_plan_id: 11,
                amount: Money::from_major(300),
                date: date(2020, 2, 1),
            },
        ];
        (debts, plans, payments)
    }

    #[test]
    fn test_one_report_per_debt_in_input_order() {
        let (debts, plans, payments) = snapshot();
        let engine = ReconciliationEngine::new(debts, plans, payments);

        let reports = engine.generate_reports().unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].debt.id, 1);
        assert_eq!(reports[1].debt.id, 2);
        assert_eq!(reports[2].debt.id, 3);
    }

    #[test]
    fn test_report_fields_per_case() {
        let (debts, plans, payments) = snapshot();
        let engine = ReconciliationEngine::new(debts, plans, payments);
        let reports = engine.generate_reports().unwrap();

        // debt 1: in a plan, partially paid, next date one week in
        assert!(reports[0].is_in_payment_plan);
        assert_eq!(reports[0].remaining_amount, Money::from_major(900));
        assert_eq!(reports[0].next_payment_due_date, Some(date(2020, 1, 8)));

        // debt 2: no plan, fully outstanding, no due date
        assert!(!reports[1].is_in_payment_plan);
        assert_eq!(reports[1].remaining_amount, Money::from_major(500));
        assert_eq!(reports[1].next_payment_due_date, None);

        // debt 3: in a plan and paid off, no due date
        assert!(reports[2].is_in_payment_plan);
        assert_eq!(reports[2].remaining_amount, Money::ZERO);
        assert_eq!(reports[2].next_payment_due_date, None);
    }

    #[test]
    fn test_idempotent_over_same_snapshot() {
        let (debts, plans, payments) = snapshot();
        let engine = ReconciliationEngine::new(debts, plans, payments);

        let first = engine.generate_reports().unwrap();
        let second = engine.generate_reports().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_snapshot() {
        let engine = ReconciliationEngine::new(Vec::new(), Vec::new(), Vec::new());
        assert!(engine.generate_reports().unwrap().is_empty());
    }

    #[test]
    fn test_due_date_absence_matches_zero_balance() {
        let (debts, plans, payments) = snapshot();
        let engine = ReconciliationEngine::new(debts, plans, payments);
        let reports = engine.generate_reports().unwrap();

        for report in reports.iter().filter(|r| r.is_in_payment_plan) {
            assert_eq!(
                report.next_payment_due_date.is_none(),
                report.remaining_amount.is_zero()
            );
        }
    }
}
