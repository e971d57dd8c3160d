//! Numeric types used by the regression engine.
//!
//! This module defines the [`Value`] trait, which abstracts the scalar
//! types that can be used for fitting and evaluation, ensuring
//! compatibility with nalgebra, floating-point operations, and formatting.
//!
//! Both `f32` and `f64` implement [`Value`]; `f64` is the default for all
//! public types in the crate.
use crate::error::Error;

/// Numeric type for regression
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::Display
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Raises the value to the power of an integer
    #[must_use]
    fn powi(self, n: i32) -> Self {
        nalgebra::ComplexField::powi(self, n)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::Display
{
}

/// Casting for integer types which saturates at the bounds of the target type.
pub trait IntClampedCast:
    num_traits::Num + num_traits::NumCast + num_traits::Bounded + Copy + PartialOrd + Ord
{
    /// Clamps a value to the range of the target type and casts it.
    fn clamped_cast<T: num_traits::PrimInt>(self) -> T {
        //
        // Simple case: self is in range of T
        if let Some(v) = num_traits::cast(self) {
            return v;
        }

        let min = match num_traits::cast::<T, Self>(T::min_value()) {
            Some(v) => v,
            None => Self::min_value(),
        };
        if self < min {
            return T::min_value();
        }

        T::max_value()
    }
}
impl<T: num_traits::PrimInt> IntClampedCast for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two() {
        assert_eq!(f64::two(), 2.0);
        assert_eq!(f32::two(), 2.0);
    }

    #[test]
    fn test_try_cast() {
        let v = f64::try_cast(5usize).unwrap();
        assert_eq!(v, 5.0);
    }

    #[test]
    fn test_clamped_cast() {
        let big: usize = usize::MAX;
        let clamped: i32 = big.clamped_cast();
        assert_eq!(clamped, i32::MAX);

        let small: usize = 7;
        let cast: i32 = small.clamped_cast();
        assert_eq!(cast, 7);
    }

    #[test]
    fn test_from_positive_int() {
        assert_eq!(f64::from_positive_int(3), 3.0);
    }
}
