//! Goodness-of-fit scoring
//!
//! This module computes the coefficient of determination (R²) between
//! actual and predicted values, plus the small descriptive helpers it
//! needs.
//!
//! R² is a number between 0 and 1 that tells you how well the model
//! explains the data:
//! - `0` means the model explains none of the variation.
//! - `1` means the model explains all the variation.
//!
//! The zero-variance edge case is handled explicitly rather than left to
//! float semantics: when every actual value is identical the variance
//! denominator is zero, and the score is defined as `1.0` if the
//! predictions reproduce the actuals (within floating-point noise) and
//! [`Error::UndefinedScore`] otherwise. No `NaN` or `inf` ever leaks out.
use crate::{
    error::{Error, Result},
    value::Value,
};

/// Computes the arithmetic mean of a sequence of values.
///
/// Returns zero if the iterator yields no elements.
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let m = polyreg::score::mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// ```
pub fn mean<T: Value>(data: impl Iterator<Item = T>) -> T {
    let mut sum = T::zero();
    let mut count = T::zero();
    for value in data {
        sum += value;
        count += T::one();
    }
    if count == T::zero() {
        return T::zero();
    }
    sum / count
}

/// Calculates the R-squared value between actual and predicted values.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_res / SS_tot)
/// where
///   SS_res = Σ (y_i - y_fit_i)²
///   SS_tot = Σ (y_i - y_mean)²
/// ```
/// </div>
///
/// # Parameters
/// - `actual`: The observed values.
/// - `predicted`: The model's predicted values, aligned with `actual`.
///
/// # Zero-variance inputs
/// When the actual values have no variance, `SS_tot` is zero and the ratio
/// is undefined. The contract here is explicit: the result is `1.0` when
/// the predictions match the actuals, and [`Error::UndefinedScore`]
/// otherwise. "Match" is judged against a machine-epsilon tolerance scaled
/// by `sqrt(n)` and the magnitude of the data, since the SVD solve
/// introduces rounding of that order.
///
/// # Errors
/// - [`Error::EmptyInput`]: both sequences are empty.
/// - [`Error::DimensionMismatch`]: the sequences differ in length.
/// - [`Error::UndefinedScore`]: zero-variance actuals with imperfect
///   predictions.
///
/// # Example
/// ```rust
/// let y = vec![1.0, 2.0, 3.0];
/// let y_fit = vec![1.1, 1.9, 3.05];
/// let r2 = polyreg::score::r_squared(&y, &y_fit).unwrap();
/// assert!(r2 > 0.98);
/// ```
pub fn r_squared<T: Value>(actual: &[T], predicted: &[T]) -> Result<T> {
    if actual.len() != predicted.len() {
        return Err(Error::DimensionMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(Error::EmptyInput);
    }

    let y_mean = mean(actual.iter().copied());

    let mut ss_total = T::zero();
    let mut ss_residual = T::zero();
    for (&y, &y_fit) in actual.iter().zip(predicted.iter()) {
        ss_total += Value::powi(y - y_mean, 2);
        ss_residual += Value::powi(y - y_fit, 2);
    }

    // Get max(|y|, |y_fit|, 1) for tolerance scaling
    let max_val = actual
        .iter()
        .chain(predicted.iter())
        .map(|&y| Value::abs(y))
        .fold(T::one(), nalgebra::RealField::max);
    let root_n = T::from_positive_int(actual.len()).sqrt();
    let noise = T::epsilon() * root_n * max_val;

    if ss_total <= noise * noise {
        // Zero-variance actuals: the ratio is undefined, decide explicitly.
        let residual_tolerance = T::epsilon().sqrt() * root_n * max_val;
        if ss_residual.sqrt() <= residual_tolerance {
            return Ok(T::one());
        }
        return Err(Error::UndefinedScore);
    }

    Ok(T::one() - ss_residual / ss_total)
}
