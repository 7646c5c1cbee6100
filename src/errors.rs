use thiserror::Error;

use crate::decimal::Money;
use crate::types::{DebtId, PlanId};

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("payment plan {plan_id} does not resolve for debt {debt_id}")]
    PlanMismatch {
        plan_id: PlanId,
        debt_id: DebtId,
    },

    #[error("invalid installment amount: {amount}")]
    InvalidInstallmentAmount {
        amount: Money,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("data source returned status {status} for {endpoint}")]
    Connectivity {
        endpoint: String,
        status: u16,
    },

    #[error("malformed payload: {message}")]
    MalformedPayload {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
