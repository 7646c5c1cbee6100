use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;

/// unique identifier for a debt
pub type DebtId = i64;

/// unique identifier for a payment plan
pub type PlanId = i64;

/// how often the installments of a plan come due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentFrequency {
    Weekly,
    BiWeekly,
}

impl InstallmentFrequency {
    /// calendar interval between two consecutive scheduled dates
    pub fn interval(&self) -> Duration {
        match self {
            InstallmentFrequency::Weekly => Duration::days(7),
            InstallmentFrequency::BiWeekly => Duration::days(14),
        }
    }
}

/// an amount owed by a debtor, independent of any repayment arrangement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    /// original, full amount owed in USD; never reduced as payments arrive
    pub amount: Money,
}

/// a scheduled repayment arrangement tied to one debt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub id: PlanId,
    /// the debt this plan pays off, related by id value
    pub debt_id: DebtId,
    /// total USD this plan aims to pay off once completed
    pub amount_to_pay: Money,
    pub installment_frequency: InstallmentFrequency,
    /// amount expected on each scheduled date, always positive
    pub installment_amount: Money,
    /// first scheduled date of the plan
    pub start_date: NaiveDate,
}

/// a single recorded transfer of funds against a payment plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_plan_id: PlanId,
    pub amount: Money,
    pub date: NaiveDate,
}

/// per-debt reconciliation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtReport {
    pub debt: Debt,
    pub is_in_payment_plan: bool,
    /// amount still owed, clamped at zero
    pub remaining_amount: Money,
    /// earliest scheduled date not yet fully credited; None when there is no
    /// plan or the debt is paid off, disambiguated by is_in_payment_plan
    pub next_payment_due_date: Option<NaiveDate>,
}

impl fmt::Display for DebtReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = match self.next_payment_due_date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "null".to_string(),
        };
        write!(
            f,
            "id: {}, amount: {}, is_in_payment_plan: {}, remaining_amount: {}, next_payment_due_date: {}",
            self.debt.id, self.debt.amount, self.is_in_payment_plan, self.remaining_amount, date
        )
    }
}
