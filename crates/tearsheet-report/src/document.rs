//! Typed report document model.
//!
//! A [`ReportDocument`] is an ordered list of [`Section`]s, each holding an
//! ordered list of [`Block`]s. Sections are assembled by the pipeline and
//! serialized exactly once by [`ReportDocument::to_html`].

use polars::prelude::DataFrame;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// One content block within a section.
#[derive(Debug, Clone)]
pub enum Block {
    /// An embedded chart image.
    Chart {
        /// Base64-encoded PNG payload.
        png_base64: String,
        /// Alt text for the image tag.
        alt: String,
    },
    /// A data table. The table's first column is rendered as the row index.
    Table {
        /// Optional `<h3>` caption above the table.
        caption: Option<String>,
        /// The table contents.
        table: DataFrame,
    },
}

/// A report section: one heading plus its content blocks, in order.
#[derive(Debug, Clone)]
pub struct Section {
    heading: String,
    blocks: Vec<Block>,
}

impl Section {
    /// Create an empty section with a heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a chart block.
    pub fn add_chart(&mut self, png_base64: String, alt: impl Into<String>) {
        self.blocks.push(Block::Chart {
            png_base64,
            alt: alt.into(),
        });
    }

    /// Append a table block.
    pub fn add_table(&mut self, caption: Option<String>, table: DataFrame) {
        self.blocks.push(Block::Table { caption, table });
    }

    /// The section heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// The content blocks, in render order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// A complete report document.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    title: String,
    sections: Vec<Section>,
}

impl ReportDocument {
    /// Create an empty document with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// The document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The sections, in render order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
