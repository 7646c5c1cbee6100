use crate::types::{Debt, PaymentPlan};

/// Finds the payment plan associated with the given debt, if one exists.
///
/// A debt is expected to have at most one plan; when the input carries
/// several, the first plan in input order wins. This tie-break is part of
/// the contract and must not be changed silently.
pub fn find_plan<'a>(debt: &Debt, plans: &'a [PaymentPlan]) -> Option<&'a PaymentPlan> {
    plans.iter().find(|plan| plan.debt_id == debt.id)
}
