//! Quarterly statement data model.
//!
//! A [`QuarterlyStatement`] is the raw, provider-shaped view of one financial
//! statement: labeled line items over a shared, most-recent-first period
//! index. [`EarningsHistory`] holds the per-quarter EPS estimate/actual
//! records used for the earnings sections of the report.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use polars::prelude::*;

/// One labeled line item with a value slot per reporting period.
#[derive(Debug, Clone)]
struct StatementRow {
    label: String,
    values: Vec<Option<f64>>,
}

/// A single quarterly financial statement for one company.
///
/// Rows are kept in insertion order. Every row is aligned to the statement's
/// period index: one value slot per period, most recent period first.
#[derive(Debug, Clone)]
pub struct QuarterlyStatement {
    symbol: String,
    periods: Vec<NaiveDate>,
    rows: Vec<StatementRow>,
}

impl QuarterlyStatement {
    /// Create an empty statement over the given period index.
    pub const fn new(symbol: String, periods: Vec<NaiveDate>) -> Self {
        Self {
            symbol,
            periods,
            rows: Vec::new(),
        }
    }

    /// Append a labeled row.
    ///
    /// The row must carry exactly one value per period. Rows with no values
    /// at all are dropped: a line item the provider returned nothing for is
    /// indistinguishable from one it does not report.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MisalignedRow`] if the value count does not
    /// match the period index.
    pub fn push_row(&mut self, label: impl Into<String>, values: Vec<Option<f64>>) -> Result<()> {
        let label = label.into();
        if values.len() != self.periods.len() {
            return Err(DataError::MisalignedRow {
                label,
                values: values.len(),
                periods: self.periods.len(),
            });
        }
        if values.iter().all(Option::is_none) {
            return Ok(());
        }
        self.rows.push(StatementRow { label, values });
        Ok(())
    }

    /// Symbol this statement belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The period index, most recent first.
    pub fn periods(&self) -> &[NaiveDate] {
        &self.periods
    }

    /// Look up a row by its line-item label.
    pub fn series(&self, label: &str) -> Option<&[Option<f64>]> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.values.as_slice())
    }

    /// Whether a line item is present.
    pub fn contains(&self, label: &str) -> bool {
        self.rows.iter().any(|row| row.label == label)
    }

    /// Labels of all present line items, in insertion order.
    pub fn row_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    /// True if the statement holds no rows or no periods.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.periods.is_empty()
    }
}

/// One quarter of earnings history.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsQuarter {
    /// Quarter end date.
    pub quarter: NaiveDate,
    /// Relative period tag from the provider (e.g. "-1q").
    pub period: String,
    /// Analyst consensus EPS estimate.
    pub eps_estimate: Option<f64>,
    /// Reported EPS.
    pub eps_actual: Option<f64>,
    /// Reported minus estimated EPS.
    pub eps_difference: Option<f64>,
    /// Percentage deviation of actual from estimate.
    pub surprise_percent: Option<f64>,
}

/// Per-quarter EPS history for one company, ascending by quarter.
#[derive(Debug, Clone)]
pub struct EarningsHistory {
    symbol: String,
    quarters: Vec<EarningsQuarter>,
}

impl EarningsHistory {
    /// Create a history from quarters sorted ascending by quarter date.
    pub fn new(symbol: String, mut quarters: Vec<EarningsQuarter>) -> Self {
        quarters.sort_by_key(|q| q.quarter);
        Self { symbol, quarters }
    }

    /// Symbol this history belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The quarters, ascending.
    pub fn quarters(&self) -> &[EarningsQuarter] {
        &self.quarters
    }

    /// True if no quarters were returned.
    pub fn is_empty(&self) -> bool {
        self.quarters.is_empty()
    }

    /// Convert to a DataFrame with one row per quarter.
    ///
    /// Columns: `quarter`, `eps_estimate`, `eps_actual`, `eps_difference`,
    /// `surprise_percent`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let quarters =
            DateChunked::from_naive_date("quarter".into(), self.quarters.iter().map(|q| q.quarter))
                .into_series();
        let estimates: Vec<Option<f64>> = self.quarters.iter().map(|q| q.eps_estimate).collect();
        let actuals: Vec<Option<f64>> = self.quarters.iter().map(|q| q.eps_actual).collect();
        let differences: Vec<Option<f64>> =
            self.quarters.iter().map(|q| q.eps_difference).collect();
        let surprises: Vec<Option<f64>> =
            self.quarters.iter().map(|q| q.surprise_percent).collect();

        let df = DataFrame::new(vec![
            quarters.into(),
            Series::new("eps_estimate".into(), estimates).into(),
            Series::new("eps_actual".into(), actuals).into(),
            Series::new("eps_difference".into(), differences).into(),
            Series::new("surprise_percent".into(), surprises).into(),
        ])?;

        Ok(df)
    }
}
