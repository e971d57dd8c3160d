//! Utilities for displaying fitted polynomials
//!
//! This module renders a coefficient vector into a canonical human-readable
//! equation string, and computes the *effective degree* of a fit: the
//! highest power whose coefficient is non-negligible.
//!
//! # Formatting rules
//! - Terms appear in increasing power order, intercept first.
//! - Terms whose coefficient is within [`SIGNIFICANCE_THRESHOLD`] of zero
//!   are skipped entirely.
//! - The first emitted term carries its own sign with no leading `+`
//!   (`-3.00`, never `+ 3.00`); subsequent terms are prefixed `+ ` or `- `
//!   followed by the absolute magnitude.
//! - Power 0 is a bare number, power 1 renders as `x`, power n ≥ 2 as
//!   `x^n`. Magnitudes are fixed to [`DEFAULT_PRECISION`] decimal places; a
//!   positive magnitude that rounds to 1 is omitted in front of a variable
//!   (`x^2`, not `1.00x^2`), while negative terms keep their digits
//!   (`- 1.00x`).
//! - If every term is suppressed the result is the literal `y = 0`.
//!
//! Note that rounding and significance are independent: a coefficient of
//! `0.003` is above the threshold and therefore printed, even though it
//! displays as `0.00`.
use crate::value::Value;

/// Default precision for formatting term magnitudes
pub const DEFAULT_PRECISION: usize = 2;

/// Coefficients with an absolute value at or below this threshold are
/// treated as zero for formatting and effective-degree purposes.
pub const SIGNIFICANCE_THRESHOLD: f64 = 1e-8;

fn threshold<T: Value>() -> T {
    T::try_cast(SIGNIFICANCE_THRESHOLD).unwrap_or_else(|_| T::epsilon())
}

/// The sign of a single polynomial term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    /// Coefficient is zero or greater
    Positive,
    /// Coefficient is below zero
    Negative,
}
impl Sign {
    fn from_coef<T: Value>(coef: T) -> Self {
        if coef < T::zero() {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// A single term of a formatted polynomial: a sign plus an unsigned body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Term {
    sign: Sign,
    body: String,
}

/// Formats a single term, or `None` if the coefficient is insignificant.
fn format_term<T: Value>(power: usize, coef: T) -> Option<Term> {
    if Value::abs(coef) <= threshold() {
        return None;
    }

    let sign = Sign::from_coef(coef);
    let magnitude = format!("{:.*}", DEFAULT_PRECISION, Value::abs(coef));

    let variable = match power {
        0 => String::new(),
        1 => "x".to_string(),
        _ => format!("x^{power}"),
    };

    // `1.00x^2` reads better as `x^2`; the bare intercept and negative
    // terms keep their digits
    let one = format!("{:.*}", DEFAULT_PRECISION, T::one());
    let body = if power >= 1 && sign == Sign::Positive && magnitude == one {
        variable
    } else {
        format!("{magnitude}{variable}")
    };

    Some(Term { sign, body })
}

/// Computes the effective degree of a coefficient vector.
///
/// This is the highest power `i >= 1` whose coefficient exceeds
/// [`SIGNIFICANCE_THRESHOLD`] in absolute value, or `0` if there is none.
/// The intercept never contributes.
///
/// # Example
/// ```
/// # use polyreg::display::effective_degree;
/// assert_eq!(effective_degree(&[3.0, 2.0, 1e-12]), 1);
/// assert_eq!(effective_degree(&[3.0]), 0);
/// ```
#[must_use]
pub fn effective_degree<T: Value>(coefficients: &[T]) -> usize {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, &coef)| Value::abs(coef) > threshold())
        .map(|(power, _)| power)
        .max()
        .unwrap_or(0)
}

/// Renders a coefficient vector as a canonical equation string.
///
/// `coefficients[0]` is the intercept; `coefficients[i]` multiplies `x^i`.
/// See the module docs for the exact formatting rules.
///
/// # Example
/// ```
/// # use polyreg::display::format_equation;
/// assert_eq!(format_equation(&[1.0, -2.0]), "y = 1.00 - 2.00x");
/// assert_eq!(format_equation(&[0.0, 0.0]), "y = 0");
/// ```
#[must_use]
pub fn format_equation<T: Value>(coefficients: &[T]) -> String {
    let mut terms: Vec<String> = Vec::new();

    for (power, &coef) in coefficients.iter().enumerate() {
        let Some(term) = format_term(power, coef) else {
            continue;
        };

        if terms.is_empty() {
            terms.push(match term.sign {
                Sign::Negative => format!("-{}", term.body),
                Sign::Positive => term.body,
            });
        } else {
            let sign = match term.sign {
                Sign::Negative => '-',
                Sign::Positive => '+',
            };
            terms.push(format!("{sign} {}", term.body));
        }
    }

    if terms.is_empty() {
        "y = 0".to_string()
    } else {
        format!("y = {}", terms.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_terms_present() {
        assert_eq!(
            format_equation(&[1.5, -2.0, 3.25]),
            "y = 1.50 - 2.00x + 3.25x^2"
        );
    }

    #[test]
    fn negative_first_term_has_no_space() {
        assert_eq!(format_equation(&[-3.0, 2.0]), "y = -3.00 + 2.00x");
        assert_eq!(format_equation(&[0.0, -2.0]), "y = -2.00x");
    }

    #[test]
    fn insignificant_terms_are_skipped() {
        assert_eq!(format_equation(&[1e-12, 2.0, 1e-9]), "y = 2.00x");
    }

    #[test]
    fn all_zero_renders_literal_zero() {
        assert_eq!(format_equation::<f64>(&[0.0, 0.0, 0.0]), "y = 0");
        assert_eq!(format_equation::<f64>(&[]), "y = 0");
    }

    #[test]
    fn unit_coefficients_drop_their_magnitude() {
        assert_eq!(format_equation(&[0.0, 0.0, 1.0]), "y = x^2");
        assert_eq!(format_equation(&[2.0, 1.0]), "y = 2.00 + x");
        // A unit intercept keeps its digits
        assert_eq!(format_equation(&[1.0]), "y = 1.00");
    }

    #[test]
    fn negative_unit_coefficients_keep_their_magnitude() {
        assert_eq!(format_equation(&[0.0, -1.0]), "y = -1.00x");
        assert_eq!(format_equation(&[3.0, -1.0]), "y = 3.00 - 1.00x");
    }

    #[test]
    fn significant_but_tiny_terms_still_display() {
        // 0.003 is above the threshold, so it is printed even though it
        // rounds to 0.00
        assert_eq!(
            format_equation(&[0.0, -2.0, 0.003]),
            "y = -2.00x + 0.00x^2"
        );
        assert_eq!(effective_degree(&[0.0, -2.0, 0.003]), 2);
    }

    #[test]
    fn effective_degree_ignores_intercept() {
        assert_eq!(effective_degree(&[42.0]), 0);
        assert_eq!(effective_degree(&[42.0, 1e-10, 1e-10]), 0);
        assert_eq!(effective_degree(&[0.0, 1.0, 0.0, 2.0]), 3);
    }

    #[test]
    fn effective_degree_of_empty_is_zero() {
        assert_eq!(effective_degree::<f64>(&[]), 0);
    }

    #[test]
    fn power_suffixes() {
        assert_eq!(format_equation(&[2.0]), "y = 2.00");
        assert_eq!(format_equation(&[0.0, 2.0]), "y = 2.00x");
        assert_eq!(format_equation(&[0.0, 0.0, 2.0]), "y = 2.00x^2");
        assert_eq!(
            format_equation(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0]),
            "y = 2.00x^10"
        );
    }

    #[test]
    fn f32_formats_like_f64() {
        assert_eq!(format_equation(&[1.5f32, -2.0]), "y = 1.50 - 2.00x");
    }
}
