use log::error;

use debt_reconciler::{ApiDataRetriever, DataRetriever, ReconciliationEngine};

/// mock payments API used when no base URL argument is given
const DEFAULT_API_URL: &str =
    "https://my-json-server.typicode.com/druska/trueaccord-mock-payments-api/";

#[tokio::main]
async fn main() {
    env_logger::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let retriever = ApiDataRetriever::new(base_url);

    // all three collections or nothing: reconciling a partial snapshot
    // would silently produce wrong reports
    let snapshot = async {
        let debts = retriever.fetch_debts().await?;
        let plans = retriever.fetch_payment_plans().await?;
        let payments = retriever.fetch_payments().await?;
        Ok::<_, debt_reconciler::ReconcileError>((debts, plans, payments))
    }
    .await;

    let (debts, plans, payments) = match snapshot {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("aborting reconciliation, retrieval failed: {e}");
            eprintln!("Error executing application: {e}");
            std::process::exit(1);
        }
    };

    let engine = ReconciliationEngine::new(debts, plans, payments);
    let reports = match engine.generate_reports() {
        Ok(reports) => reports,
        Err(e) => {
            error!("reconciliation failed: {e}");
            eprintln!("Error executing application: {e}");
            std::process::exit(1);
        }
    };

    for report in reports {
        println!("{report}");
    }
}
