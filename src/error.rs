//! Error types for polynomial regression
//!
//! This module defines the common errors encountered when fitting,
//! evaluating, or scoring a polynomial model, along with a convenient
//! `Result` alias.

/// Errors that can occur during polynomial regression.
///
/// All errors are surfaced to the caller immediately; the engine never
/// retries or substitutes default values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cannot perform a fit because there are no observations.
    #[error("No observations available for fitting")]
    EmptyInput,

    /// Two sequences that must be the same length are not.
    ///
    /// Raised when the x and y sequences differ in length, or when a
    /// feature matrix is applied to a coefficient vector of the wrong size.
    #[error("Dimension mismatch; expected {expected} values, found {actual}")]
    DimensionMismatch {
        /// The length required by the operation
        expected: usize,
        /// The length actually supplied
        actual: usize,
    },

    /// The linear system is numerically degenerate beyond recovery.
    ///
    /// Usually the x values contain fewer than two distinct entries while a
    /// non-constant fit was requested, making the higher powers linearly
    /// dependent.
    #[error("System is singular and cannot be solved; the x values may not be distinct enough for the requested degree [n: {n}, k: {k}]")]
    SingularSystem {
        /// Number of observations
        n: usize,
        /// Number of basis functions
        k: usize,
    },

    /// R² is undefined for this input.
    ///
    /// The actual values have zero variance, so the variance ratio would
    /// divide by zero, and the predictions do not reproduce the actuals
    /// exactly.
    #[error("R-squared is undefined: actual values have zero variance and predictions do not match them")]
    UndefinedScore,

    /// A numeric value could not be represented in the target type.
    #[error("A value could not be represented in the target numeric type")]
    CastFailed,
}

/// Alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
