//! Line charts for shaped statement tables.

use crate::encode::png_base64;
use crate::error::{ChartError, Result};
use crate::scale::padded_range;
use plotters::prelude::*;
use plotters::style::FontTransform;
use polars::prelude::{DataFrame, DataType};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Render a shaped table as a line chart and return it as a base64 PNG.
///
/// The first column of the table is the index; every remaining column is
/// drawn as a marker-point line series against the index positions, in
/// table column order. The x axis is labeled `Quarter` with the index
/// values as vertical tick labels; the legend lists every column name.
/// Null cells are skipped, not drawn as zero.
///
/// # Errors
///
/// Returns [`ChartError::EmptyTable`] if the table has no rows or no value
/// columns.
pub fn line_chart(table: &DataFrame, title: &str, y_label: &str) -> Result<String> {
    let names = table.get_column_names();
    let Some((index_name, value_names)) = names.split_first() else {
        return Err(ChartError::EmptyTable);
    };
    if value_names.is_empty() || table.height() == 0 {
        return Err(ChartError::EmptyTable);
    }

    let x_labels = index_labels(table, index_name.as_str())?;
    let n = x_labels.len();

    let mut series: Vec<(String, Vec<Option<f64>>)> = Vec::with_capacity(value_names.len());
    for name in value_names {
        let values: Vec<Option<f64>> = table
            .column(name.as_str())?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect();
        series.push((name.to_string(), values));
    }

    let present: Vec<f64> = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied().flatten())
        .collect();
    if present.is_empty() {
        return Err(ChartError::EmptyTable);
    }
    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = padded_range(min, max);

    let mut buffer = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(90)
            .y_label_area_size(100)
            .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), y_min..y_max)?;

        let format_tick = |x: &f64| -> String {
            let idx = x.round();
            if idx < 0.0 || idx >= n as f64 {
                return String::new();
            }
            x_labels[idx as usize].clone()
        };

        chart
            .configure_mesh()
            .x_desc("Quarter")
            .y_desc(y_label)
            .x_labels(n)
            .x_label_formatter(&format_tick)
            .x_label_style(
                ("sans-serif", 14)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()?;

        for (i, (name, values)) in series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .filter_map(|(x, v)| v.map(|v| (x as f64, v)))
                .collect();

            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
                .label(name.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
            chart.draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
    }

    png_base64(&buffer, WIDTH, HEIGHT)
}

/// Render the index column as tick labels.
fn index_labels(table: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = table.column(name)?.as_materialized_series();
    let labels = match series.dtype() {
        DataType::Date => series
            .date()?
            .as_date_iter()
            .map(|d| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
            .collect(),
        DataType::String => series
            .str()?
            .into_iter()
            .map(|s| s.unwrap_or_default().to_string())
            .collect(),
        _ => (0..series.len())
            .map(|i| {
                series
                    .get(i)
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            })
            .collect(),
    };
    Ok(labels)
}
