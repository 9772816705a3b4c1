//! End-to-end report assembly from injected statements.

use chrono::NaiveDate;
use tearsheet::pipeline::{ReportConfig, ReportInputs, build_document};
use tearsheet_data::{EarningsHistory, EarningsQuarter, QuarterlyStatement};

fn periods() -> Vec<NaiveDate> {
    vec![
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    ]
}

fn statement(rows: &[(&str, [f64; 2])]) -> QuarterlyStatement {
    let mut stmt = QuarterlyStatement::new("ABNB".to_string(), periods());
    for (label, values) in rows {
        stmt.push_row(*label, values.iter().copied().map(Some).collect())
            .unwrap();
    }
    stmt
}

fn income_statement() -> QuarterlyStatement {
    // Values per period, most recent first.
    statement(&[
        ("Net Income", [110.0, 100.0]),
        ("Total Revenue", [520.0, 500.0]),
        ("Operating Income", [90.0, 80.0]),
        ("Operating Expense", [430.0, 420.0]),
    ])
}

fn balance_sheet() -> QuarterlyStatement {
    statement(&[
        ("Total Assets", [2100.0, 2000.0]),
        ("Total Liabilities Net Minority Interest", [1300.0, 1250.0]),
        ("Total Equity Gross Minority Interest", [800.0, 750.0]),
        ("Cash And Cash Equivalents", [600.0, 580.0]),
    ])
}

fn cash_flow() -> QuarterlyStatement {
    statement(&[
        ("Operating Cash Flow", [150.0, 140.0]),
        ("Investing Cash Flow", [-40.0, -35.0]),
        ("Financing Cash Flow", [-20.0, -25.0]),
        ("Free Cash Flow", [110.0, 105.0]),
    ])
}

fn earnings_history() -> EarningsHistory {
    let quarter = |y: i32, m: u32, d: u32, surprise: f64| EarningsQuarter {
        quarter: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        period: String::new(),
        eps_estimate: Some(0.5),
        eps_actual: Some(0.6),
        eps_difference: Some(0.1),
        surprise_percent: Some(surprise),
    };

    EarningsHistory::new(
        "ABNB".to_string(),
        vec![
            quarter(2023, 12, 31, 1.0),
            quarter(2024, 3, 31, 2.0),
            quarter(2024, 6, 30, 3.0),
        ],
    )
}

fn inputs() -> ReportInputs {
    ReportInputs {
        income: income_statement(),
        balance_sheet: balance_sheet(),
        cash_flow: cash_flow(),
        earnings_history: earnings_history(),
    }
}

fn config() -> ReportConfig {
    ReportConfig {
        company: "Airbnb".to_string(),
        title: "Airbnb Comprehensive Financial Analysis".to_string(),
    }
}

#[test]
fn test_section_order() {
    let document = build_document(&inputs(), &config()).unwrap();

    let headings: Vec<&str> = document
        .sections()
        .iter()
        .map(|section| section.heading())
        .collect();

    // Expense breakdown resolves through Operating Expense; the geo section
    // has no source rows and is suppressed.
    assert_eq!(
        headings,
        vec![
            "Income Statement Analysis",
            "Balance Sheet Overview",
            "Cash Flow Analysis",
            "Earnings History",
            "Expense Breakdown",
            "Earnings Surprises",
        ]
    );
}

#[test]
fn test_financial_summary_values_reach_the_report() {
    let document = build_document(&inputs(), &config()).unwrap();
    let html = document.to_html().unwrap();

    assert!(html.contains("<h3>Detailed Income Statement Data</h3>"));
    assert!(html.contains("<th>Net Income</th>"));
    assert!(html.contains("<th>Revenue</th>"));
    assert!(html.contains("<th>Operating Income</th>"));
    assert!(html.contains("<th>Operating Expenses</th>"));
    assert!(html.contains("<td>520.00</td>"));
    assert!(html.contains("<td>500.00</td>"));
    assert!(html.contains("<th>2024-06-30</th>"));
}

#[test]
fn test_mandatory_sections_put_chart_before_table() {
    let document = build_document(&inputs(), &config()).unwrap();
    let html = document.to_html().unwrap();

    let heading = html.find("<h2>Income Statement Analysis</h2>").unwrap();
    let img = html[heading..].find("<img").unwrap();
    let table = html[heading..].find("<table>").unwrap();
    assert!(img < table);
}

#[test]
fn test_surprises_section_puts_table_before_chart() {
    let document = build_document(&inputs(), &config()).unwrap();
    let html = document.to_html().unwrap();

    let heading = html.find("<h2>Earnings Surprises</h2>").unwrap();
    let tail = &html[heading..];
    let table = tail.find("<table>").unwrap();
    let img = tail.find("<img").unwrap();
    assert!(table < img);
}

#[test]
fn test_surprise_rows_most_recent_first() {
    let document = build_document(&inputs(), &config()).unwrap();
    let html = document.to_html().unwrap();

    let heading = html.find("<h2>Earnings Surprises</h2>").unwrap();
    let tail = &html[heading..];

    let newest = tail.find("2024-06-30").unwrap();
    let middle = tail.find("2024-03-31").unwrap();
    let oldest = tail.find("2023-12-31").unwrap();
    assert!(newest < middle && middle < oldest);
}

#[test]
fn test_geo_section_suppressed_without_source_rows() {
    let document = build_document(&inputs(), &config()).unwrap();
    let html = document.to_html().unwrap();

    assert!(!html.contains("Revenue by Region"));
}

#[test]
fn test_expense_section_suppressed_when_columns_drop() {
    // A gap in the only resolvable expense column drops it from the
    // optional table while the required financial summary keeps it.
    let mut income = QuarterlyStatement::new("ABNB".to_string(), periods());
    income
        .push_row("Net Income", vec![Some(110.0), Some(100.0)])
        .unwrap();
    income
        .push_row("Total Revenue", vec![Some(520.0), Some(500.0)])
        .unwrap();
    income
        .push_row("Operating Income", vec![Some(90.0), Some(80.0)])
        .unwrap();
    income
        .push_row("Operating Expense", vec![Some(430.0), None])
        .unwrap();

    let inputs = ReportInputs {
        income,
        balance_sheet: balance_sheet(),
        cash_flow: cash_flow(),
        earnings_history: earnings_history(),
    };

    let document = build_document(&inputs, &config()).unwrap();
    let html = document.to_html().unwrap();

    assert!(!html.contains("Expense Breakdown"));
    // The mandatory table still renders the gap as NaN.
    assert!(html.contains("<td>NaN</td>"));
}

#[test]
fn test_missing_mandatory_row_aborts_assembly() {
    let mut income = QuarterlyStatement::new("ABNB".to_string(), periods());
    income
        .push_row("Total Revenue", vec![Some(520.0), Some(500.0)])
        .unwrap();

    let inputs = ReportInputs {
        income,
        balance_sheet: balance_sheet(),
        cash_flow: cash_flow(),
        earnings_history: earnings_history(),
    };

    assert!(build_document(&inputs, &config()).is_err());
}

#[test]
fn test_rebuild_is_byte_identical() {
    let first = build_document(&inputs(), &config())
        .unwrap()
        .to_html()
        .unwrap();
    let second = build_document(&inputs(), &config())
        .unwrap()
        .to_html()
        .unwrap();

    assert_eq!(first, second);
}
