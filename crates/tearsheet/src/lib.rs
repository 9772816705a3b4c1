#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tearsheet-tools/tearsheet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod fields;
pub mod pipeline;
pub mod shape;

// Re-export main types from sub-crates
pub use tearsheet_chart as chart;
pub use tearsheet_data as data;
pub use tearsheet_report as report;

pub use fields::FieldSpec;
pub use pipeline::{PipelineError, ReportConfig, ReportInputs, build_document};
pub use shape::{ShapeError, is_populated, project, surprise_table};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
