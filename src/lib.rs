pub mod decimal;
pub mod errors;
pub mod reconcile;
pub mod retrieve;
pub mod types;

// re-export key types
pub use decimal::Money;
pub use errors::{ReconcileError, Result};
pub use reconcile::{find_plan, next_due_date, remaining_amount, ReconciliationEngine};
pub use retrieve::{ApiDataRetriever, DataRetriever};
pub use types::{
    Debt, DebtId, DebtReport, InstallmentFrequency, Payment, PaymentPlan, PlanId,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
