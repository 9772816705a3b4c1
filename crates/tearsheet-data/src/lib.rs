#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tearsheet-tools/tearsheet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod statement;
pub mod yahoo;

pub use error::{DataError, Result};
pub use statement::{EarningsHistory, EarningsQuarter, QuarterlyStatement};
pub use yahoo::{StatementKind, YahooClient};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
