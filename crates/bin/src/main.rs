//! Tearsheet CLI binary.
//!
//! Generates the quarterly tear sheet for one hardcoded company. Every
//! parameter (symbol, display name, output path) is a literal constant:
//! this is a one-shot report tool, not a configurable service.

use std::path::Path;
use std::process;
use tearsheet::pipeline::{ReportConfig, ReportInputs, build_document};
use tearsheet_data::{StatementKind, YahooClient};

/// Ticker symbol the report is generated for.
const SYMBOL: &str = "ABNB";

/// Company display name used in headings and chart titles.
const COMPANY: &str = "Airbnb";

/// Document title.
const REPORT_TITLE: &str = "Airbnb Comprehensive Financial Analysis";

/// Output file, relative to the working directory.
const OUTPUT_PATH: &str = "output/abnb_financial_analysis.html";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = YahooClient::new()?;

    println!("Fetching quarterly data for {}...", SYMBOL);
    let income = client.fetch_statement(SYMBOL, StatementKind::Income).await?;
    let balance_sheet = client
        .fetch_statement(SYMBOL, StatementKind::BalanceSheet)
        .await?;
    let cash_flow = client
        .fetch_statement(SYMBOL, StatementKind::CashFlow)
        .await?;
    let earnings_history = client.fetch_earnings_history(SYMBOL).await?;

    println!("\nAvailable line items:");
    println!("Income Statement: {:?}", income.row_labels());
    println!("\nBalance Sheet: {:?}", balance_sheet.row_labels());
    println!("\nCash Flow: {:?}", cash_flow.row_labels());

    let inputs = ReportInputs {
        income,
        balance_sheet,
        cash_flow,
        earnings_history,
    };
    let config = ReportConfig {
        company: COMPANY.to_string(),
        title: REPORT_TITLE.to_string(),
    };

    let document = build_document(&inputs, &config)?;

    let path = Path::new(OUTPUT_PATH);
    document.write_to_file(path)?;

    println!("Analysis has been saved to: {}", path.display());
    Ok(())
}
