//! Full fit summaries for display layers
//!
//! A [`FitReport`] bundles everything a front end needs to present a fit:
//! the canonical equation, the effective degree, the raw coefficients, an
//! actual-vs-predicted table, the R² score, and a dense prediction curve
//! for charting. The report borrows nothing; a UI can drop the fit and
//! keep the report.
use std::fmt;

use crate::{error::Result, fit::PolyFit, score, value::Value};

/// Number of points in the dense curve when none is requested explicitly.
pub const DEFAULT_CURVE_RESOLUTION: usize = 500;

/// One row of the actual-vs-predicted comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRow<T: Value = f64> {
    /// The observation's x value
    pub x: T,
    /// The observed y value
    pub actual: T,
    /// The model's prediction at `x`
    pub predicted: T,
}

/// A complete summary of a polynomial fit against its training data.
///
/// Built once per fit via [`FitReport::new`] or [`PolyFit::report`]; all
/// fields are plain owned data ready for display.
///
/// # Example
/// ```
/// # use polyreg::PolyFit;
/// let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let ys = [1.0, 4.0, 9.0, 16.0, 25.0];
/// let fit = PolyFit::new(&xs, &ys, 2).unwrap();
/// let report = fit.report(&xs, &ys, 500).unwrap();
/// assert_eq!(report.equation, "y = x^2");
/// println!("{report}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport<T: Value = f64> {
    /// Canonical equation string, e.g. `y = 1.00 + 2.00x`
    pub equation: String,
    /// Highest power with a non-negligible coefficient
    pub effective_degree: usize,
    /// The fitted coefficients; index 0 is the intercept
    pub coefficients: Vec<T>,
    /// Actual vs predicted values, aligned with the input order
    pub rows: Vec<FitRow<T>>,
    /// Coefficient of determination
    pub r_squared: T,
    /// Evenly spaced x grid spanning the training range, and the
    /// predictions on it, for plotting
    pub curve: (Vec<T>, Vec<T>),
}

impl<T: Value> FitReport<T> {
    /// Builds a report for `fit` against the given training data.
    ///
    /// # Parameters
    /// - `fit`: The fitted model.
    /// - `xs`, `ys`: The training observations, equal length.
    /// - `resolution`: Number of points in the dense plotting curve
    ///   (typically [`DEFAULT_CURVE_RESOLUTION`]).
    ///
    /// # Errors
    /// - [`crate::Error::DimensionMismatch`]: `xs` and `ys` differ in
    ///   length, or the data does not match the fit's degree.
    /// - [`crate::Error::EmptyInput`]: no observations supplied.
    /// - [`crate::Error::UndefinedScore`]: zero-variance y values that the
    ///   fit does not reproduce.
    pub fn new(fit: &PolyFit<T>, xs: &[T], ys: &[T], resolution: usize) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(crate::Error::DimensionMismatch {
                expected: xs.len(),
                actual: ys.len(),
            });
        }

        let predicted = fit.solution(xs)?;
        let r_squared = score::r_squared(ys, &predicted)?;

        let rows = xs
            .iter()
            .zip(ys.iter())
            .zip(predicted.iter())
            .map(|((&x, &actual), &predicted)| FitRow {
                x,
                actual,
                predicted,
            })
            .collect();

        Ok(Self {
            equation: fit.equation(),
            effective_degree: fit.effective_degree(),
            coefficients: fit.coefficients().to_vec(),
            rows,
            r_squared,
            curve: fit.dense_curve(resolution),
        })
    }
}

impl<T: Value> fmt::Display for FitReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.equation)?;
        writeln!(f, "Effective polynomial degree: {}", self.effective_degree)?;

        writeln!(f, "Coefficients:")?;
        for (i, coef) in self.coefficients.iter().enumerate().skip(1) {
            writeln!(f, "  a{i} (x^{i}) = {coef}")?;
        }
        if let Some(intercept) = self.coefficients.first() {
            writeln!(f, "  Intercept (x^0) = {intercept}")?;
        }

        writeln!(f, "Actual vs predicted:")?;
        for row in &self.rows {
            writeln!(
                f,
                "  x = {}, actual = {}, predicted = {}",
                row.x, row.actual, row.predicted
            )?;
        }

        write!(f, "R² score: {:.4}", self.r_squared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_fit() -> (PolyFit, [f64; 5], [f64; 5]) {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [1.0, 4.0, 9.0, 16.0, 25.0];
        let fit = PolyFit::new(&xs, &ys, 2).unwrap();
        (fit, xs, ys)
    }

    #[test]
    fn report_bundles_all_outputs() {
        let (fit, xs, ys) = square_fit();
        let report = FitReport::new(&fit, &xs, &ys, DEFAULT_CURVE_RESOLUTION).unwrap();

        assert_eq!(report.equation, "y = x^2");
        assert_eq!(report.effective_degree, 2);
        assert_eq!(report.coefficients.len(), 3);
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.curve.0.len(), DEFAULT_CURVE_RESOLUTION);
        assert!((report.r_squared - 1.0).abs() < 1e-12);

        let row = &report.rows[2];
        assert!((row.x - 3.0).abs() < 1e-12);
        assert!((row.actual - 9.0).abs() < 1e-12);
        assert!((row.predicted - 9.0).abs() < 1e-6);
    }

    #[test]
    fn report_rejects_mismatched_table_data() {
        let (fit, xs, _) = square_fit();
        let err = FitReport::new(&fit, &xs, &[1.0], 10).unwrap_err();
        assert!(matches!(err, crate::Error::DimensionMismatch { .. }));
    }

    #[test]
    fn display_contains_key_sections() {
        let (fit, xs, ys) = square_fit();
        let report = FitReport::new(&fit, &xs, &ys, 10).unwrap();
        let text = report.to_string();

        assert!(text.contains("y = x^2"));
        assert!(text.contains("Effective polynomial degree: 2"));
        assert!(text.contains("Intercept (x^0)"));
        assert!(text.contains("R² score: 1.0000"));
    }
}
