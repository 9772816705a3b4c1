//! Bar chart for the earnings-surprise series.

use crate::encode::png_base64;
use crate::error::{ChartError, Result};
use crate::scale::padded_range;
use plotters::prelude::*;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Render a single bar series indexed by position and return it as a
/// base64 PNG.
///
/// Bars are drawn most-recent-first, so the x axis is described as
/// `Quarters (Most Recent First)`. Only horizontal grid lines are drawn.
/// The y range always includes zero so negative surprises hang below the
/// baseline.
///
/// # Errors
///
/// Returns [`ChartError::EmptyTable`] if there are no values to draw.
pub fn bar_chart(values: &[f64], title: &str, y_label: &str) -> Result<String> {
    if values.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    let n = values.len();
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let (y_min, y_max) = padded_range(min, max);

    let mut buffer = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Quarters (Most Recent First)")
            .y_desc(y_label)
            .draw()?;

        chart.draw_series(values.iter().enumerate().map(|(i, &value)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), value),
                ],
                BLUE.filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))?;

        root.present()?;
    }

    png_base64(&buffer, WIDTH, HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_renders_base64_png() {
        use base64::Engine as _;

        let payload = bar_chart(&[78.26, -5.49, 12.0], "Surprises", "Surprise %").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(&decoded[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_bar_chart_is_deterministic() {
        let first = bar_chart(&[1.0, 2.0], "Surprises", "Surprise %").unwrap();
        let second = bar_chart(&[1.0, 2.0], "Surprises", "Surprise %").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bar_chart_rejects_empty_series() {
        assert!(matches!(
            bar_chart(&[], "Surprises", "Surprise %"),
            Err(ChartError::EmptyTable)
        ));
    }
}
