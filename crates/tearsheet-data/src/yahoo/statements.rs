//! Quarterly statement fetching via the fundamentals-timeseries endpoint.
//!
//! Yahoo serves statement line items as one timeseries per item, keyed by
//! names like `quarterlyTotalRevenue`. Each statement kind owns a literal
//! table mapping those keys to the display labels the rest of the pipeline
//! looks up. The period index of the resulting [`QuarterlyStatement`] is the
//! union of `asOfDate` values across all returned series, most recent first.

use crate::error::{DataError, Result};
use crate::statement::QuarterlyStatement;
use crate::yahoo::client::YahooClient;
use crate::yahoo::wire::{ApiError, RawValue};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

/// How far back to request quarterly data.
const LOOKBACK_DAYS: i64 = 3 * 365;

/// The three core statement types served by the timeseries endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Quarterly income statement.
    Income,
    /// Quarterly balance sheet.
    BalanceSheet,
    /// Quarterly cash flow statement.
    CashFlow,
}

impl StatementKind {
    /// Human-readable statement name for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Income => "income statement",
            Self::BalanceSheet => "balance sheet",
            Self::CashFlow => "cash flow",
        }
    }

    /// Yahoo timeseries key and display label for every line item this
    /// statement requests.
    pub(crate) const fn line_items(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Income => &[
                ("quarterlyTotalRevenue", "Total Revenue"),
                ("quarterlyNetIncome", "Net Income"),
                ("quarterlyOperatingIncome", "Operating Income"),
                ("quarterlyOperatingExpense", "Operating Expense"),
                ("quarterlyCostOfRevenue", "Cost Of Revenue"),
                ("quarterlyResearchAndDevelopment", "Research And Development"),
                (
                    "quarterlySellingGeneralAndAdministration",
                    "Selling General And Administration",
                ),
                ("quarterlyMarketingExpense", "Marketing Expense"),
            ],
            Self::BalanceSheet => &[
                ("quarterlyTotalAssets", "Total Assets"),
                (
                    "quarterlyTotalLiabilitiesNetMinorityInterest",
                    "Total Liabilities Net Minority Interest",
                ),
                (
                    "quarterlyTotalEquityGrossMinorityInterest",
                    "Total Equity Gross Minority Interest",
                ),
                ("quarterlyCashAndCashEquivalents", "Cash And Cash Equivalents"),
            ],
            Self::CashFlow => &[
                ("quarterlyOperatingCashFlow", "Operating Cash Flow"),
                ("quarterlyInvestingCashFlow", "Investing Cash Flow"),
                ("quarterlyFinancingCashFlow", "Financing Cash Flow"),
                ("quarterlyFreeCashFlow", "Free Cash Flow"),
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
struct TimeseriesEnvelope {
    timeseries: TimeseriesBody,
}

#[derive(Debug, Deserialize)]
struct TimeseriesBody {
    result: Option<Vec<TimeseriesResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesResult {
    meta: TimeseriesMeta,
    #[serde(default)]
    #[allow(dead_code)]
    timestamp: Option<Vec<i64>>,
    #[serde(flatten)]
    series: HashMap<String, Vec<Option<TimeseriesPoint>>>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesMeta {
    #[serde(rename = "type")]
    series_type: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesPoint {
    #[serde(rename = "asOfDate")]
    as_of_date: NaiveDate,
    #[serde(rename = "reportedValue")]
    reported_value: Option<RawValue>,
}

impl YahooClient {
    /// Fetch one quarterly statement for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidSymbol`] for an empty symbol,
    /// [`DataError::MissingData`] if the provider returned no periods at
    /// all, and network/parse errors otherwise.
    pub async fn fetch_statement(
        &self,
        symbol: &str,
        kind: StatementKind,
    ) -> Result<QuarterlyStatement> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let types: Vec<&str> = kind.line_items().iter().map(|(key, _)| *key).collect();
        let now = Utc::now();
        let period2 = now.timestamp();
        let period1 = (now - Duration::days(LOOKBACK_DAYS)).timestamp();

        let url = format!(
            "{}/ws/fundamentals-timeseries/v1/finance/timeseries/{symbol}?symbol={symbol}&type={}&period1={period1}&period2={period2}&merge=false",
            self.base_url(),
            types.join(","),
        );

        let envelope: TimeseriesEnvelope = self.get_json(&url).await?;
        build_statement(symbol, kind, envelope)
    }
}

/// Assemble a [`QuarterlyStatement`] from a timeseries response.
fn build_statement(
    symbol: &str,
    kind: StatementKind,
    envelope: TimeseriesEnvelope,
) -> Result<QuarterlyStatement> {
    if let Some(error) = envelope.timeseries.error {
        return Err(DataError::YahooApi(error.message()));
    }

    // One value map per returned series key.
    let mut by_key: HashMap<String, HashMap<NaiveDate, f64>> = HashMap::new();
    let mut period_set: BTreeSet<NaiveDate> = BTreeSet::new();

    for result in envelope.timeseries.result.unwrap_or_default() {
        let Some(key) = result.meta.series_type.first() else {
            continue;
        };
        let Some(points) = result.series.get(key) else {
            continue;
        };

        let values = by_key.entry(key.clone()).or_default();
        for point in points.iter().flatten() {
            period_set.insert(point.as_of_date);
            if let Some(raw) = point.reported_value.and_then(|v| v.raw) {
                values.insert(point.as_of_date, raw);
            }
        }
    }

    if period_set.is_empty() {
        return Err(DataError::MissingData {
            symbol: symbol.to_string(),
            reason: format!("No quarterly {} data returned", kind.name()),
        });
    }

    // Most recent period first, matching the provider's display order.
    let periods: Vec<NaiveDate> = period_set.into_iter().rev().collect();

    let mut statement = QuarterlyStatement::new(symbol.to_string(), periods);
    for (key, label) in kind.line_items() {
        if let Some(values) = by_key.get(*key) {
            let row: Vec<Option<f64>> = statement
                .periods()
                .iter()
                .map(|period| values.get(period).copied())
                .collect();
            statement.push_row(*label, row)?;
        }
    }

    Ok(statement)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
      "timeseries": {
        "result": [
          {
            "meta": {"symbol": ["ABNB"], "type": ["quarterlyTotalRevenue"]},
            "timestamp": [1711843200, 1719705600],
            "quarterlyTotalRevenue": [
              {"dataId": 20001, "asOfDate": "2024-03-31", "periodType": "3M", "reportedValue": {"raw": 2142000000.0, "fmt": "2.14B"}},
              {"dataId": 20001, "asOfDate": "2024-06-30", "periodType": "3M", "reportedValue": {"raw": 2748000000.0, "fmt": "2.75B"}}
            ]
          },
          {
            "meta": {"symbol": ["ABNB"], "type": ["quarterlyNetIncome"]},
            "timestamp": [1711843200, 1719705600],
            "quarterlyNetIncome": [
              {"dataId": 20002, "asOfDate": "2024-03-31", "periodType": "3M", "reportedValue": {"raw": 264000000.0, "fmt": "264M"}},
              null
            ]
          },
          {
            "meta": {"symbol": ["ABNB"], "type": ["quarterlyMarketingExpense"]},
            "timestamp": []
          }
        ],
        "error": null
      }
    }"#;

    #[test]
    fn test_build_statement_from_fixture() {
        let envelope: TimeseriesEnvelope = serde_json::from_str(FIXTURE).unwrap();
        let stmt = build_statement("ABNB", StatementKind::Income, envelope).unwrap();

        assert_eq!(stmt.symbol(), "ABNB");
        // Most recent first.
        assert_eq!(
            stmt.periods(),
            &[
                NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            ]
        );
        assert_eq!(
            stmt.series("Total Revenue").unwrap(),
            &[Some(2_748_000_000.0), Some(2_142_000_000.0)]
        );
        // Gaps in a returned series stay as nulls aligned to the index.
        assert_eq!(
            stmt.series("Net Income").unwrap(),
            &[None, Some(264_000_000.0)]
        );
        // A series with no data points yields no row.
        assert!(!stmt.contains("Marketing Expense"));
    }

    #[test]
    fn test_build_statement_empty_response() {
        let envelope: TimeseriesEnvelope =
            serde_json::from_str(r#"{"timeseries": {"result": [], "error": null}}"#).unwrap();
        let result = build_statement("ABNB", StatementKind::Income, envelope);
        assert!(matches!(result, Err(DataError::MissingData { .. })));
    }

    #[test]
    fn test_build_statement_provider_error() {
        let envelope: TimeseriesEnvelope = serde_json::from_str(
            r#"{"timeseries": {"result": null, "error": {"code": "Not Found", "description": "No data found"}}}"#,
        )
        .unwrap();
        let result = build_statement("ABNB", StatementKind::Income, envelope);
        assert!(matches!(result, Err(DataError::YahooApi(_))));
    }

    #[test]
    fn test_line_item_tables_cover_report_fields() {
        let income: Vec<&str> = StatementKind::Income
            .line_items()
            .iter()
            .map(|(_, label)| *label)
            .collect();
        assert!(income.contains(&"Total Revenue"));
        assert!(income.contains(&"Operating Expense"));

        assert_eq!(StatementKind::BalanceSheet.line_items().len(), 4);
        assert_eq!(StatementKind::CashFlow.line_items().len(), 4);
    }
}
