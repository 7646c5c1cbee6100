use crate::decimal::Money;
use crate::types::{Debt, Payment, PaymentPlan};

use super::resolver::find_plan;

/// Computes the amount still owed on a debt.
///
/// A debt needs a plan to receive payments, so a debt with no resolvable
/// plan is fully outstanding and returns its original amount untouched.
/// Otherwise the original amount is reduced by every recorded payment
/// against the plan, clamped at zero. The plan's own amount_to_pay and
/// installment_amount are deliberately ignored: the recorded payments are
/// the ground truth for what has actually been paid.
pub fn remaining_amount(debt: &Debt, plans: &[PaymentPlan], payments: &[Payment]) -> Money {
    let Some(plan) = find_plan(debt, plans) else {
        return debt.amount;
    };

    let mut remaining = debt.amount;
    for payment in payments.iter().filter(|p| p.payment_plan_id == plan.id) {
        if payment.amount >= remaining {
            return Money::ZERO;
        }
        remaining -= payment.amount;
    }
    remaining
}
