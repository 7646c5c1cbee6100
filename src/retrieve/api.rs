//! HTTP API data retriever.
//!
//! Fetches debts, payment plans, and payments as JSON arrays from the
//! `debts`, `payment_plans`, and `payments` endpoints under a base URL.
//! Amounts arrive as JSON numbers and dates as `yyyy-MM-dd` strings,
//! assumed UTC since the endpoint carries no time zone.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::decimal::Money;
use crate::errors::{ReconcileError, Result};
use crate::types::{Debt, DebtId, InstallmentFrequency, Payment, PaymentPlan, PlanId};

use super::DataRetriever;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// DataRetriever backed by an HTTP JSON API.
pub struct ApiDataRetriever {
    /// base URL the endpoint names are appended to, expected to end with `/`
    base_url: String,
    client: Client,
}

impl ApiDataRetriever {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn fetch(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReconcileError::Connectivity {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl DataRetriever for ApiDataRetriever {
    async fn fetch_debts(&self) -> Result<Vec<Debt>> {
        let body = self.fetch("debts").await?;
        let debts = decode_debts(&body)?;
        debug!("fetched {} debts", debts.len());
        Ok(debts)
    }

    async fn fetch_payment_plans(&self) -> Result<Vec<PaymentPlan>> {
        let body = self.fetch("payment_plans").await?;
        let plans = decode_payment_plans(&body)?;
        debug!("fetched {} payment plans", plans.len());
        Ok(plans)
    }

    async fn fetch_payments(&self) -> Result<Vec<Payment>> {
        let body = self.fetch("payments").await?;
        let payments = decode_payments(&body)?;
        debug!("fetched {} payments", payments.len());
        Ok(payments)
    }
}

#[derive(Debug, Deserialize)]
struct DebtRow {
    id: DebtId,
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct PaymentPlanRow {
    id: PlanId,
    debt_id: DebtId,
    amount_to_pay: f64,
    installment_frequency: InstallmentFrequency,
    installment_amount: f64,
    start_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct PaymentRow {
    payment_plan_id: PlanId,
    amount: f64,
    date: NaiveDate,
}

fn malformed(message: impl Into<String>) -> ReconcileError {
    ReconcileError::MalformedPayload {
        message: message.into(),
    }
}

fn money_field(value: f64, field: &str) -> Result<Money> {
    Money::try_from_f64(value)
        .ok_or_else(|| malformed(format!("{field} is not a finite number: {value}")))
}

fn decode_debts(body: &str) -> Result<Vec<Debt>> {
    let rows: Vec<DebtRow> =
        serde_json::from_str(body).map_err(|e| malformed(format!("debts: {e}")))?;

    rows.into_iter()
        .map(|row| {
            let amount = money_field(row.amount, "debt amount")?;
            if amount.is_negative() {
                return Err(malformed(format!(
                    "debt {} has a negative amount: {amount}",
                    row.id
                )));
            }
            Ok(Debt {
                id: row.id,
                amount,
            })
        })
        .collect()
}

fn decode_payment_plans(body: &str) -> Result<Vec<PaymentPlan>> {
    let rows: Vec<PaymentPlanRow> =
        serde_json::from_str(body).map_err(|e| malformed(format!("payment_plans: {e}")))?;

    rows.into_iter()
        .map(|row| {
            let installment_amount = money_field(row.installment_amount, "installment amount")?;
            if !installment_amount.is_positive() {
                return Err(malformed(format!(
                    "payment plan {} has a non-positive installment amount: {installment_amount}",
                    row.id
                )));
            }
            Ok(PaymentPlan {
                id: row.id,
                debt_id: row.debt_id,
                amount_to_pay: money_field(row.amount_to_pay, "amount to pay")?,
                installment_frequency: row.installment_frequency,
                installment_amount,
                start_date: row.start_date,
            })
        })
        .collect()
}

fn decode_payments(body: &str) -> Result<Vec<Payment>> {
    let rows: Vec<PaymentRow> =
        serde_json::from_str(body).map_err(|e| malformed(format!("payments: {e}")))?;

    rows.into_iter()
        .map(|row| {
            let amount = money_field(row.amount, "payment amount")?;
            if !amount.is_positive() {
                return Err(malformed(format!(
                    "payment against plan {} has a non-positive amount: {amount}",
                    row.payment_plan_id
                )));
            }
            Ok(Payment {
                payment_plan_id: row.payment_plan_id,
                amount,
                date: row.date,
            })
        })
        .collect()
}
