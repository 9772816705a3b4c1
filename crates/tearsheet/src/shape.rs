//! Shaping raw statements into display tables.

use crate::fields::FieldSpec;
use polars::prelude::*;
use tearsheet_data::QuarterlyStatement;
use thiserror::Error;

/// Result type for shaping operations.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Errors that can occur while shaping a statement.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A required line item is not present in the statement
    #[error("Required line item {label:?} missing for {symbol}")]
    MissingLineItem {
        /// Line-item label that was looked up
        label: String,
        /// Symbol of the statement that lacked it
        symbol: String,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Project a statement through a field map into a display table.
///
/// The result carries the statement's period index as its first column
/// (`period`) followed by one column per resolved field, in field-map
/// order. Resolution rules:
///
/// - a missing required line item fails the whole table;
/// - a missing optional line item omits the column;
/// - an optional column with any missing value is dropped whole, so a
///   shaped column is either fully populated or absent;
/// - if no field resolves, the result is the empty DataFrame.
///
/// # Errors
///
/// Returns [`ShapeError::MissingLineItem`] for a missing required item.
pub fn project(statement: &QuarterlyStatement, fields: &[FieldSpec]) -> Result<DataFrame> {
    let periods =
        DateChunked::from_naive_date("period".into(), statement.periods().iter().copied())
            .into_series();

    let mut columns: Vec<Column> = Vec::with_capacity(fields.len() + 1);
    columns.push(periods.into());

    for field in fields {
        match statement.series(field.source) {
            Some(values) => {
                if !field.required && values.iter().any(Option::is_none) {
                    continue;
                }
                columns.push(Series::new(field.display.into(), values.to_vec()).into());
            }
            None if field.required => {
                return Err(ShapeError::MissingLineItem {
                    label: field.source.to_string(),
                    symbol: statement.symbol().to_string(),
                });
            }
            None => {}
        }
    }

    if columns.len() == 1 {
        return Ok(DataFrame::empty());
    }

    Ok(DataFrame::new(columns)?)
}

/// Build the earnings-surprise display table from the raw history table.
///
/// Selects the quarter index, EPS estimate, reported EPS, and surprise
/// percent; sorts most recent quarter first; renames the value columns for
/// display.
///
/// # Errors
///
/// Fails if the history table lacks one of the selected columns.
pub fn surprise_table(history: &DataFrame) -> Result<DataFrame> {
    let table = history
        .clone()
        .lazy()
        .select([
            col("quarter"),
            col("eps_estimate").alias("EPS Estimate"),
            col("eps_actual").alias("Reported EPS"),
            col("surprise_percent").alias("Surprise (%)"),
        ])
        .sort(
            ["quarter"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;

    Ok(table)
}

/// Whether a shaped table has anything to show: at least one display
/// column besides the index, and at least one row.
pub fn is_populated(table: &DataFrame) -> bool {
    table.width() > 1 && table.height() > 0
}
