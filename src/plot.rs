//! Chart rendering for fitted curves
//!
//! Renders the observation scatter and the dense fitted curve to an SVG
//! file using `plotters`. Everything is coerced to `f64` for plotting
//! purposes.
//!
//! Enabled by the `plotting` cargo feature.
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Error drawing the chart
    #[error("Error drawing plot: {0}")]
    Draw(String),
}

fn draw_error(e: impl std::fmt::Display) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Expands a min/max pair into a non-degenerate plotting range.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }

    let spread = max - min;
    let pad = if spread == 0.0 { 1.0 } else { spread * 0.05 };
    (min - pad)..(max + pad)
}

/// Renders a fitted curve over its source data to an SVG file.
///
/// Draws the observations as a scatter ("Actual") and the dense prediction
/// curve as a line ("Predicted"), with a mesh grid and axis labels.
///
/// # Parameters
/// - `path`: Destination SVG file.
/// - `data`: The `(x, y)` observations.
/// - `curve`: The dense `(x, y)` prediction curve, e.g. from
///   [`crate::PolyFit::dense_curve`].
/// - `title`: Chart caption.
///
/// # Errors
/// Returns [`PlotError::Draw`] if the chart could not be created or drawn.
///
/// # Example
/// ```no_run
/// # use polyreg::PolyFit;
/// let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let ys = [1.0, 4.0, 9.0, 16.0, 25.0];
/// let fit = PolyFit::new(&xs, &ys, 2).unwrap();
/// let (gx, gy) = fit.dense_curve(500);
///
/// let data: Vec<_> = xs.iter().copied().zip(ys).collect();
/// let curve: Vec<_> = gx.into_iter().zip(gy).collect();
/// polyreg::plot::render_fit("fit.svg".as_ref(), &data, &curve, "Polynomial Regression").unwrap();
/// ```
pub fn render_fit(
    path: &Path,
    data: &[(f64, f64)],
    curve: &[(f64, f64)],
    title: &str,
) -> Result<(), PlotError> {
    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let x_range = padded_range(data.iter().chain(curve.iter()).map(|&(x, _)| x));
    let y_range = padded_range(data.iter().chain(curve.iter()).map(|&(_, y)| y));

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(
            curve.iter().copied(),
            BLUE.stroke_width(3),
        ))
        .map_err(draw_error)?
        .label("Predicted")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(3)));

    chart
        .draw_series(
            data.iter()
                .map(|&(x, y)| Circle::new((x, y), 5, RED.mix(0.6).filled())),
        )
        .map_err(draw_error)?
        .label("Actual")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.mix(0.6).filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_svg_to_disk() {
        let dir = std::env::temp_dir().join("polyreg_plot_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fit.svg");

        let data = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
        let curve: Vec<_> = (0..=20)
            .map(|i| {
                let x = f64::from(i) * 0.1;
                (x, x * x + x + 1.0)
            })
            .collect();

        render_fit(&path, &data, &curve, "test").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
    }

    #[test]
    fn degenerate_ranges_are_padded() {
        let r = padded_range([2.0, 2.0].into_iter());
        assert!(r.start < 2.0 && r.end > 2.0);
    }

    #[test]
    fn empty_input_falls_back_to_unit_range() {
        let r = padded_range(std::iter::empty());
        assert!((r.start - -1.0).abs() < f64::EPSILON);
        assert!((r.end - 1.0).abs() < f64::EPSILON);
    }
}
