use std::ops::RangeInclusive;

use nalgebra::{DMatrix, DVector, SVD};

use crate::{
    basis,
    display,
    error::{Error, Result},
    report::FitReport,
    value::Value,
};

/// Applies a coefficient vector to a basis-expanded input.
///
/// Computes, per row of `matrix`, the dot product with `coefficients`,
/// producing one prediction per row. Pure and deterministic: repeated calls
/// with the same inputs yield bit-identical results.
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] if the matrix column count does not
/// equal the coefficient vector length.
///
/// # Example
/// ```
/// # use polyreg::{basis, predict};
/// let m = basis::design_matrix(&[1.0, 2.0], 1).unwrap();
/// let y = predict(&[1.0, 2.0], &m).unwrap();
/// assert_eq!(y, vec![3.0, 5.0]);
/// ```
pub fn predict<T: Value>(coefficients: &[T], matrix: &DMatrix<T>) -> Result<Vec<T>> {
    if matrix.ncols() != coefficients.len() {
        return Err(Error::DimensionMismatch {
            expected: coefficients.len(),
            actual: matrix.ncols(),
        });
    }

    let predictions = matrix
        .row_iter()
        .map(|row| {
            let mut y = T::zero();
            for (value, &coef) in row.iter().zip(coefficients.iter()) {
                y += *value * coef;
            }
            y
        })
        .collect();
    Ok(predictions)
}

/// Solves the least-squares system using SVD.
fn solve_matrix<T: Value>(matrix: DMatrix<T>, b: &DVector<T>) -> Result<Vec<T>> {
    let (n, k) = matrix.shape();

    // Calculate the singular value decomposition of the matrix
    let decomp = SVD::new_unordered(matrix, true, true);

    // Calculate epsilon value
    // ~= machine_epsilon * max(size) * max_singular
    let machine_epsilon = T::epsilon();
    let max_size = n.max(k);
    let sigma_max = decomp.singular_values.max();
    let epsilon = machine_epsilon * T::try_cast(max_size)? * sigma_max;

    // Solve for X in `SVD * X = b`
    let big_x = decomp
        .solve(b, epsilon)
        .map_err(|_| Error::SingularSystem { n, k })?;
    let coefficients: Vec<_> = big_x.data.into();

    // Make sure the coefficients are valid
    if coefficients.iter().any(|c| c.is_nan()) {
        return Err(Error::SingularSystem { n, k });
    }

    Ok(coefficients)
}

/// Represents a least-squares polynomial fit of a set of observations.
///
/// `PolyFit` computes the coefficient vector minimizing the sum of squared
/// residuals `Σ(y_i − ŷ_i)²` over the monomial basis `1, x, x², …, xⁿ`,
/// then exposes everything downstream consumers need: predictions for the
/// training points, a dense curve for plotting, the canonical equation
/// string, and the effective degree.
///
/// # How it works
/// - Builds a **design matrix** with shape `[rows, degree + 1]` where
///   `rows` is the number of observations (see [`basis::design_matrix`]).
/// - Forms a **column vector** `b` from the `y` values.
/// - Solves the linear system `A * x = b` using the **SVD** of the design
///   matrix. The pseudo-inverse handles rank-deficient and underdetermined
///   systems, so a best-effort coefficient vector is returned whenever one
///   exists. Note that when `rows < degree + 1` the fit is not unique.
///
/// The coefficient vector is immutable after creation; index 0 is the
/// intercept, index `i` the coefficient for `x^i`.
///
/// # Example
/// ```
/// # use polyreg::PolyFit;
/// let fit = PolyFit::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0], 2).unwrap();
/// println!("{}", fit.equation());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFit<T: Value = f64> {
    coefficients: Vec<T>,
    degree: usize,
    x_range: RangeInclusive<T>,
}

impl<T: Value> PolyFit<T> {
    /// Fits a polynomial of the given degree to the observations.
    ///
    /// Deterministic: the same inputs always yield the same coefficient
    /// vector. A degree of 0 is a constant fit.
    ///
    /// # Parameters
    /// - `xs`: The x values, finite, at least one.
    /// - `ys`: The y values, same length as `xs`.
    /// - `degree`: Desired polynomial degree (`>= 0`).
    ///
    /// # Errors
    /// - [`Error::DimensionMismatch`]: `xs` and `ys` differ in length.
    /// - [`Error::EmptyInput`]: no observations supplied.
    /// - [`Error::SingularSystem`]: `degree >= 1` with fewer than two
    ///   distinct x values, or the SVD could not produce a finite solution.
    /// - [`Error::CastFailed`]: the system size could not be represented
    ///   in `T` when computing the singular-value cutoff.
    ///
    /// # Example
    /// ```
    /// # use polyreg::PolyFit;
    /// let fit = PolyFit::new(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], 1).unwrap();
    /// assert_eq!(fit.degree(), 1);
    /// ```
    pub fn new(xs: &[T], ys: &[T], degree: usize) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::DimensionMismatch {
                expected: xs.len(),
                actual: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(Error::EmptyInput);
        }

        let k = degree + 1;

        // A non-constant fit needs at least two distinct x values; otherwise
        // every power column is a multiple of the constant column.
        if degree >= 1 {
            let first = xs[0];
            if xs.iter().all(|&x| x == first) {
                return Err(Error::SingularSystem { n: xs.len(), k });
            }
        }

        let matrix = basis::design_matrix(xs, degree)?;
        let b = DVector::from_column_slice(ys);
        let coefficients = solve_matrix(matrix, &b)?;

        let mut x_min = T::infinity();
        let mut x_max = T::neg_infinity();
        for &x in xs {
            x_min = nalgebra::RealField::min(x_min, x);
            x_max = nalgebra::RealField::max(x_max, x);
        }

        Ok(Self {
            coefficients,
            degree,
            x_range: x_min..=x_max,
        })
    }

    /// Returns a reference to the fitted coefficients.
    ///
    /// `coefficients()[0]` is the intercept; `coefficients()[i]` is the
    /// coefficient for `x^i`. Always of length `degree + 1`.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the requested degree of the fit.
    ///
    /// This is the degree asked for, not the [`PolyFit::effective_degree`];
    /// trailing coefficients may still be negligible.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the highest power with a non-negligible coefficient.
    ///
    /// See [`display::effective_degree`].
    pub fn effective_degree(&self) -> usize {
        display::effective_degree(&self.coefficients)
    }

    /// Renders the fitted polynomial as a canonical equation string.
    ///
    /// See [`display::format_equation`].
    pub fn equation(&self) -> String {
        display::format_equation(&self.coefficients)
    }

    /// Returns the inclusive range of x values seen during fitting.
    pub fn x_range(&self) -> RangeInclusive<T> {
        self.x_range.clone()
    }

    /// Evaluates the polynomial at a given x value using Horner's method.
    #[must_use]
    pub fn y(&self, x: T) -> T {
        let mut y = T::zero();
        for &coef in self.coefficients.iter().rev() {
            y = y * x + coef;
        }
        y
    }

    /// Evaluates the polynomial at each of the given x values.
    ///
    /// Predictions are aligned with the input order, so passing the training
    /// x values yields the training predictions for residual or score
    /// calculations.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if `xs` is empty.
    pub fn solution(&self, xs: &[T]) -> Result<Vec<T>> {
        let matrix = basis::design_matrix(xs, self.degree)?;
        predict(&self.coefficients, &matrix)
    }

    /// Evaluates the polynomial on an evenly spaced grid for plotting.
    ///
    /// The grid spans the fitted x range inclusively: `resolution` points
    /// from `min(xs)` to `max(xs)`, strictly increasing, with the final
    /// point forced exactly onto the upper bound.
    ///
    /// # Returns
    /// A pair of vectors `(grid, predictions)`, both of length `resolution`.
    ///
    /// # Example
    /// ```
    /// # use polyreg::PolyFit;
    /// let fit = PolyFit::new(&[0.0, 10.0], &[0.0, 10.0], 1).unwrap();
    /// let (grid, _) = fit.dense_curve(500);
    /// assert_eq!(grid.len(), 500);
    /// assert_eq!(grid[0], 0.0);
    /// assert_eq!(grid[499], 10.0);
    /// ```
    #[must_use]
    pub fn dense_curve(&self, resolution: usize) -> (Vec<T>, Vec<T>) {
        let start = *self.x_range.start();
        let end = *self.x_range.end();

        let mut grid = Vec::with_capacity(resolution);
        match resolution {
            0 => {}
            1 => grid.push(start),
            _ => {
                let step = (end - start) / T::from_positive_int(resolution - 1);
                for i in 0..resolution {
                    grid.push(start + step * T::from_positive_int(i));
                }
                // Guard the endpoint against accumulated rounding
                grid[resolution - 1] = end;
            }
        }

        let predictions = grid.iter().map(|&x| self.y(x)).collect();
        (grid, predictions)
    }

    /// Builds the full fit summary for this model against its training data.
    ///
    /// Convenience for [`FitReport::new`].
    ///
    /// # Errors
    /// See [`FitReport::new`].
    pub fn report(&self, xs: &[T], ys: &[T], resolution: usize) -> Result<FitReport<T>> {
        FitReport::new(self, xs, ys, resolution)
    }
}
