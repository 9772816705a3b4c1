//! Report assembly pipeline.
//!
//! [`build_document`] turns fetched statements into a complete
//! [`ReportDocument`]. It takes the statements as plain inputs, so the
//! whole assembly can run and be tested against injected fakes without any
//! network access. The three mandatory sections propagate failures; each
//! optional section is wrapped in its own recovery boundary that logs the
//! failure and suppresses the section.

use crate::fields;
use crate::shape::{self, ShapeError};
use polars::prelude::DataFrame;
use tearsheet_chart::{ChartError, bar_chart, line_chart};
use tearsheet_data::{DataError, EarningsHistory, QuarterlyStatement};
use tearsheet_report::{ReportDocument, ReportError, Section};
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can abort report assembly.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Shaping error on a mandatory table
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Chart rendering error
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Report rendering error
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Data model error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// The four fetched datasets a report is built from.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    /// Quarterly income statement.
    pub income: QuarterlyStatement,
    /// Quarterly balance sheet.
    pub balance_sheet: QuarterlyStatement,
    /// Quarterly cash flow statement.
    pub cash_flow: QuarterlyStatement,
    /// Per-quarter EPS history.
    pub earnings_history: EarningsHistory,
}

/// Display configuration for a report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Company display name used in chart titles.
    pub company: String,
    /// Document title.
    pub title: String,
}

/// Assemble the full report document.
///
/// Section order: income statement, balance sheet, cash flow (each chart
/// then table), the raw earnings history table, then the conditional
/// sections (expense breakdown, revenue by region, earnings surprises),
/// each only when its table resolved any data. The surprises section is
/// the one place the table precedes its chart, as in the layout this
/// report reproduces.
///
/// # Errors
///
/// Fails if a mandatory table cannot be shaped or a chart for a populated
/// table cannot be rendered.
pub fn build_document(inputs: &ReportInputs, config: &ReportConfig) -> Result<ReportDocument> {
    let financial = shape::project(&inputs.income, fields::FINANCIAL_SUMMARY)?;
    let balance = shape::project(&inputs.balance_sheet, fields::BALANCE_SHEET_SUMMARY)?;
    let cash_flow = shape::project(&inputs.cash_flow, fields::CASH_FLOW_SUMMARY)?;

    let expenses = shape::project(&inputs.income, fields::EXPENSE_BREAKDOWN).unwrap_or_else(|e| {
        eprintln!("Some expense categories not found: {}", e);
        DataFrame::empty()
    });
    let geo_revenue = shape::project(&inputs.income, fields::GEO_REVENUE).unwrap_or_else(|e| {
        eprintln!("Geographical revenue data not found: {}", e);
        DataFrame::empty()
    });

    let history = inputs.earnings_history.to_dataframe()?;
    let surprises = shape::surprise_table(&history).unwrap_or_else(|e| {
        eprintln!("Error accessing earnings history columns: {}", e);
        DataFrame::empty()
    });

    let mut document = ReportDocument::new(&config.title);

    document.add_section(chart_section(
        "Income Statement Analysis",
        &format!("{} Income Statement Trends", config.company),
        "Detailed Income Statement Data",
        financial,
    )?);
    document.add_section(chart_section(
        "Balance Sheet Overview",
        &format!("{} Balance Sheet Overview", config.company),
        "Detailed Balance Sheet Data",
        balance,
    )?);
    document.add_section(chart_section(
        "Cash Flow Analysis",
        &format!("{} Cash Flow Analysis", config.company),
        "Detailed Cash Flow Data",
        cash_flow,
    )?);

    let mut history_section = Section::new("Earnings History");
    history_section.add_table(None, history);
    document.add_section(history_section);

    if shape::is_populated(&expenses) {
        document.add_section(chart_section(
            "Expense Breakdown",
            &format!("{} Expense Breakdown", config.company),
            "Detailed Expense Data",
            expenses,
        )?);
    }

    if shape::is_populated(&geo_revenue) {
        document.add_section(chart_section(
            "Revenue by Region",
            &format!("{} Revenue by Region", config.company),
            "Detailed Regional Revenue Data",
            geo_revenue,
        )?);
    }

    if shape::is_populated(&surprises) {
        let values: Vec<f64> = surprises
            .column("Surprise (%)")?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .flatten()
            .collect();

        if !values.is_empty() {
            let title = format!("{} Earnings Surprises (%)", config.company);
            let mut section = Section::new("Earnings Surprises");
            // Table first, then the chart.
            section.add_table(None, surprises);
            section.add_chart(bar_chart(&values, &title, "Surprise %")?, &title);
            document.add_section(section);
        }
    }

    Ok(document)
}

/// A mandatory-style section: chart first, then the captioned table.
fn chart_section(
    heading: &str,
    chart_title: &str,
    caption: &str,
    table: DataFrame,
) -> Result<Section> {
    let mut section = Section::new(heading);
    section.add_chart(line_chart(&table, chart_title, "Amount (USD)")?, chart_title);
    section.add_table(Some(caption.to_string()), table);
    Ok(section)
}
