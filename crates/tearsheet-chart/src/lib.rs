#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tearsheet-tools/tearsheet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bar;
mod encode;
pub mod error;
pub mod line;
mod scale;

pub use bar::bar_chart;
pub use error::{ChartError, Result};
pub use line::line_chart;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
