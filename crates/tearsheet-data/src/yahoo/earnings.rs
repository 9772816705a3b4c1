//! Earnings history fetching via the quoteSummary endpoint.

use crate::error::{DataError, Result};
use crate::statement::{EarningsHistory, EarningsQuarter};
use crate::yahoo::client::YahooClient;
use crate::yahoo::wire::{ApiError, RawDate, RawValue};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "earningsHistory")]
    earnings_history: Option<EarningsHistoryModule>,
}

#[derive(Debug, Deserialize)]
struct EarningsHistoryModule {
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct HistoryEntry {
    #[serde(rename = "epsEstimate")]
    eps_estimate: Option<RawValue>,
    #[serde(rename = "epsActual")]
    eps_actual: Option<RawValue>,
    #[serde(rename = "epsDifference")]
    eps_difference: Option<RawValue>,
    #[serde(rename = "surprisePercent")]
    surprise_percent: Option<RawValue>,
    quarter: Option<RawDate>,
    period: Option<String>,
}

impl YahooClient {
    /// Fetch the per-quarter EPS history for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidSymbol`] for an empty symbol and
    /// [`DataError::MissingData`] if the provider returned no usable
    /// history entries.
    pub async fn fetch_earnings_history(&self, symbol: &str) -> Result<EarningsHistory> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = format!(
            "{}/v10/finance/quoteSummary/{symbol}?modules=earningsHistory",
            self.base_url(),
        );

        let envelope: QuoteSummaryEnvelope = self.get_json(&url).await?;
        build_history(symbol, envelope)
    }
}

fn build_history(symbol: &str, envelope: QuoteSummaryEnvelope) -> Result<EarningsHistory> {
    if let Some(error) = envelope.quote_summary.error {
        return Err(DataError::YahooApi(error.message()));
    }

    let module = envelope
        .quote_summary
        .result
        .unwrap_or_default()
        .into_iter()
        .find_map(|r| r.earnings_history);

    let Some(module) = module else {
        return Err(DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "No earnings history module returned".to_string(),
        });
    };

    let quarters: Vec<EarningsQuarter> = module
        .history
        .into_iter()
        .filter_map(|entry| {
            let quarter = entry.quarter.as_ref().and_then(quarter_date)?;
            Some(EarningsQuarter {
                quarter,
                period: entry.period.unwrap_or_default(),
                eps_estimate: entry.eps_estimate.and_then(|v| v.raw),
                eps_actual: entry.eps_actual.and_then(|v| v.raw),
                eps_difference: entry.eps_difference.and_then(|v| v.raw),
                surprise_percent: entry.surprise_percent.and_then(|v| v.raw),
            })
        })
        .collect();

    if quarters.is_empty() {
        return Err(DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "Earnings history contained no dated entries".to_string(),
        });
    }

    Ok(EarningsHistory::new(symbol.to_string(), quarters))
}

/// Resolve a quarter end date from Yahoo's `{raw, fmt}` date envelope,
/// preferring the formatted rendering.
fn quarter_date(date: &RawDate) -> Option<NaiveDate> {
    if let Some(fmt) = &date.fmt {
        if let Ok(parsed) = NaiveDate::parse_from_str(fmt, "%Y-%m-%d") {
            return Some(parsed);
        }
    }
    date.raw
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.date_naive())
}
