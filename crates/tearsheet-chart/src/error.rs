//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type for chart rendering.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while drawing or encoding a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The input table has no index rows or no value columns
    #[error("Cannot chart an empty table")]
    EmptyTable,

    /// Drawing backend error
    #[error("Drawing error: {0}")]
    Draw(String),

    /// PNG encoding error
    #[error("PNG encoding error: {0}")]
    Encode(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(err.to_string())
    }
}
