//! Polynomial feature basis for regression
//!
//! This module expands raw x values into the monomial basis
//! `1, x, x², …, xⁿ`. A single scalar becomes a feature row via
//! [`feature_row`], and a whole observation set becomes a Vandermonde-style
//! design matrix via [`design_matrix`].
//!
//! The expansion is derived fresh for every fit and never cached.
use nalgebra::DMatrix;

use crate::{
    error::{Error, Result},
    value::{IntClampedCast, Value},
};

/// Evaluates the jth basis function at `x`, i.e. `x^j`.
#[inline(always)]
pub(crate) fn solve_function<T: Value>(j: usize, x: T) -> T {
    match j {
        0 => T::one(),
        1 => x,
        _ => Value::powi(x, j.clamped_cast()),
    }
}

/// Expands a scalar into its ordered polynomial feature vector.
///
/// Returns `[x^0, x^1, …, x^degree]`, always of length `degree + 1`.
///
/// # Example
/// ```
/// let row = polyreg::basis::feature_row(3.0, 2);
/// assert_eq!(row, vec![1.0, 3.0, 9.0]);
/// ```
#[must_use]
pub fn feature_row<T: Value>(x: T, degree: usize) -> Vec<T> {
    (0..=degree).map(|j| solve_function(j, x)).collect()
}

/// Builds the design matrix for an observation set.
///
/// Each row is the feature vector of one x value, so the result has shape
/// `[xs.len(), degree + 1]`.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if `xs` is empty.
///
/// # Example
/// ```
/// let m = polyreg::basis::design_matrix(&[1.0, 2.0], 2).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 2)], 4.0);
/// ```
pub fn design_matrix<T: Value>(xs: &[T], degree: usize) -> Result<DMatrix<T>> {
    if xs.is_empty() {
        return Err(Error::EmptyInput);
    }

    let k = degree + 1;
    let mut matrix = DMatrix::zeros(xs.len(), k);
    for (mut row, &x) in matrix.row_iter_mut().zip(xs.iter()) {
        for j in 0..k {
            row[j] = solve_function(j, x);
        }
    }

    Ok(matrix)
}
