pub mod api;

use async_trait::async_trait;

use crate::errors::Result;
use crate::types::{Debt, Payment, PaymentPlan};

pub use api::ApiDataRetriever;

/// Retrieves the three entity collections from a data source.
///
/// The exact source and transport vary by implementation. Each fetch
/// returns a fully materialized, ordered collection; a caller that cannot
/// obtain all three must not reconcile partial data.
#[async_trait]
pub trait DataRetriever: Send + Sync {
    /// all debts in the data source
    async fn fetch_debts(&self) -> Result<Vec<Debt>>;

    /// all payment plans in the data source
    async fn fetch_payment_plans(&self) -> Result<Vec<PaymentPlan>>;

    /// all payments in the data source
    async fn fetch_payments(&self) -> Result<Vec<Payment>>;
}
