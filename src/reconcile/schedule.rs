use chrono::NaiveDate;

use crate::decimal::Money;
use crate::errors::{ReconcileError, Result};
use crate::types::{Debt, Payment, PaymentPlan};

use super::balance::remaining_amount;
use super::resolver::find_plan;

/// Determines the next date on which a payment is due for the given plan.
///
/// The schedule starts at the plan's start date and advances by one
/// frequency interval each time a date's installment is fully credited.
/// Payments fill the earliest unmet date first: a deficit blocks
/// advancement past its date, and a surplus carries forward and may clear
/// several later dates at once. Only cumulative amounts matter; the time a
/// payment lands within a day does not shift the schedule.
///
/// Matched payments are sorted by date before simulating, so callers may
/// supply them in any order; payments on the same date keep their input
/// order. A fully paid debt has no next due date and returns `None`, even
/// when overpayment outran the schedule itself.
pub fn next_due_date(
    plan: &PaymentPlan,
    debt: &Debt,
    plans: &[PaymentPlan],
    payments: &[Payment],
) -> Result<Option<NaiveDate>> {
    match find_plan(debt, plans) {
        Some(resolved) if resolved.id == plan.id => {}
        _ => {
            return Err(ReconcileError::PlanMismatch {
                plan_id: plan.id,
                debt_id: debt.id,
            })
        }
    }

    // a zero or negative installment would never clear a date
    if !plan.installment_amount.is_positive() {
        return Err(ReconcileError::InvalidInstallmentAmount {
            amount: plan.installment_amount,
        });
    }

    if remaining_amount(debt, plans, payments).is_zero() {
        return Ok(None);
    }

    let mut matched: Vec<&Payment> = payments
        .iter()
        .filter(|p| p.payment_plan_id == plan.id)
        .collect();
    matched.sort_by_key(|p| p.date);

    let step = plan.installment_frequency.interval();
    let mut due_date = plan.start_date;
    let mut credited = Money::ZERO;

    for payment in matched {
        credited += payment.amount;
        while credited >= plan.installment_amount {
            credited -= plan.installment_amount;
            due_date = due_date + step;
        }
    }

    Ok(Some(due_date))
}
