//! HTML serialization and file output for report documents.

use crate::document::{Block, ReportDocument, Result, Section};
use polars::prelude::{DataFrame, DataType, Series};
use std::fs;
use std::path::Path;

/// Inline stylesheet emitted into every report head.
const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            margin: 40px;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }
        h1, h2, h3 {
            color: #333;
        }
        .figure {
            margin: 20px 0;
            text-align: center;
        }
        table {
            border-collapse: collapse;
            margin: 20px 0;
            width: 100%;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f5f5f5;
        }
        .section {
            margin: 40px 0;
            padding: 20px;
            background-color: #f9f9f9;
            border-radius: 5px;
        }"#;

impl ReportDocument {
    /// Serialize the whole document to a single HTML string.
    ///
    /// # Errors
    ///
    /// Returns an error if a table block cannot be read back from its
    /// DataFrame.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();

        out.push_str("<html>\n<head>\n");
        out.push_str(&format!("    <title>{}</title>\n", escape(self.title())));
        out.push_str("    <style>\n");
        out.push_str(STYLE);
        out.push_str("\n    </style>\n</head>\n<body>\n");
        out.push_str(&format!("    <h1>{}</h1>\n", escape(self.title())));

        for section in self.sections() {
            render_section(&mut out, section)?;
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    /// Render the document and write it to `path`, creating parent
    /// directories as needed and overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let html = self.to_html()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html)?;
        Ok(())
    }
}

fn render_section(out: &mut String, section: &Section) -> Result<()> {
    out.push_str("    <div class=\"section\">\n");
    out.push_str(&format!("        <h2>{}</h2>\n", escape(section.heading())));

    for block in section.blocks() {
        match block {
            Block::Chart { png_base64, alt } => {
                out.push_str("        <div class=\"figure\">\n");
                out.push_str(&format!(
                    "            <img src=\"data:image/png;base64,{}\" alt=\"{}\">\n",
                    png_base64,
                    escape(alt)
                ));
                out.push_str("        </div>\n");
            }
            Block::Table { caption, table } => {
                if let Some(caption) = caption {
                    out.push_str(&format!("        <h3>{}</h3>\n", escape(caption)));
                }
                out.push_str(&render_table(table)?);
            }
        }
    }

    out.push_str("    </div>\n");
    Ok(())
}

/// Serialize a DataFrame as an HTML table.
///
/// The first column is treated as the row index and rendered as a `<th>`
/// in every body row, the way the source tables carry their period index.
fn render_table(table: &DataFrame) -> Result<String> {
    let names = table.get_column_names();
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(names.len());
    for name in &names {
        let series = table.column(name.as_str())?.as_materialized_series();
        columns.push(column_cells(series));
    }

    let mut out = String::new();
    out.push_str("        <table>\n            <thead>\n                <tr>\n");
    for (i, name) in names.iter().enumerate() {
        if i == 0 {
            out.push_str("                    <th></th>\n");
        } else {
            out.push_str(&format!(
                "                    <th>{}</th>\n",
                escape(name.as_str())
            ));
        }
    }
    out.push_str("                </tr>\n            </thead>\n            <tbody>\n");

    for row in 0..table.height() {
        out.push_str("                <tr>\n");
        for (i, cells) in columns.iter().enumerate() {
            let cell = escape(&cells[row]);
            if i == 0 {
                out.push_str(&format!("                    <th>{}</th>\n", cell));
            } else {
                out.push_str(&format!("                    <td>{}</td>\n", cell));
            }
        }
        out.push_str("                </tr>\n");
    }

    out.push_str("            </tbody>\n        </table>\n");
    Ok(out)
}

/// Render one column as display cells: dates as ISO, floats with two
/// decimals, nulls as `NaN`.
fn column_cells(series: &Series) -> Vec<String> {
    match series.dtype() {
        DataType::Date => match series.date() {
            Ok(dates) => dates
                .as_date_iter()
                .map(|d| {
                    d.map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "NaN".to_string())
                })
                .collect(),
            Err(_) => vec![String::new(); series.len()],
        },
        DataType::Float64 => match series.f64() {
            Ok(values) => values
                .into_iter()
                .map(|v| {
                    v.map(|v| format!("{:.2}", v))
                        .unwrap_or_else(|| "NaN".to_string())
                })
                .collect(),
            Err(_) => vec![String::new(); series.len()],
        },
        DataType::String => match series.str() {
            Ok(values) => values
                .into_iter()
                .map(|v| v.unwrap_or("NaN").to_string())
                .collect(),
            Err(_) => vec![String::new(); series.len()],
        },
        _ => (0..series.len())
            .map(|i| {
                series
                    .get(i)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|_| "NaN".to_string())
            })
            .collect(),
    }
}

/// Minimal HTML entity escaping for text content and attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
