//! Shared wire primitives for Yahoo Finance JSON responses.

use serde::Deserialize;

/// A numeric value wrapped in Yahoo's `{raw, fmt}` envelope.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawValue {
    pub(crate) raw: Option<f64>,
}

/// A date wrapped in Yahoo's `{raw, fmt}` envelope.
///
/// `raw` is a unix timestamp; `fmt` is the `YYYY-MM-DD` rendering. Either
/// may be absent.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawDate {
    pub(crate) raw: Option<i64>,
    pub(crate) fmt: Option<String>,
}

/// Error object Yahoo returns inside otherwise-successful envelopes.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    #[allow(dead_code)]
    pub(crate) code: Option<String>,
    pub(crate) description: Option<String>,
}

impl ApiError {
    pub(crate) fn message(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| "unspecified provider error".to_string())
    }
}
