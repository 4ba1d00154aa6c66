//! Precondition checks shared by every vector operation.
//!
//! Each predicate takes a `raise` flag. With `raise == false` a failed
//! check is reported as `Ok(false)`, which lets callers chain several
//! checks into one composite predicate. With `raise == true` the failure is
//! returned as the matching `VectorError`.
use crate::error::{Result, VectorError};
use crate::numeric::{ElementKind, Numeric, NumericKind};

fn check<F>(valid: bool, raise: bool, error: F) -> Result<bool>
where
    F: FnOnce() -> VectorError,
{
    if valid || !raise {
        return Ok(valid);
    }
    let err = error();
    log::debug!("validation failed: {}", err);
    Err(err)
}

/// True iff `T` is a signed integer, unsigned integer or floating point type.
pub fn is_numeric_type<T: ElementKind>(raise: bool) -> Result<bool> {
    let mut valid = is_integer::<T>(false)?;
    valid = valid || is_floating_type::<T>(false)?;
    check(valid, raise, || VectorError::NotNumericType)
}

/// Same as [`is_numeric_type`], with `T` taken from the argument.
pub fn is_numeric_value<T: ElementKind>(_value: &T, raise: bool) -> Result<bool> {
    is_numeric_type::<T>(raise)
}

pub fn is_floating_type<T: ElementKind>(raise: bool) -> Result<bool> {
    check(
        T::KIND == Some(NumericKind::Floating),
        raise,
        || VectorError::NotNumericType,
    )
}

pub fn is_floating_value<T: ElementKind>(_value: &T, raise: bool) -> Result<bool> {
    is_floating_type::<T>(raise)
}

pub fn is_signed_integer<T: ElementKind>(raise: bool) -> Result<bool> {
    check(
        T::KIND == Some(NumericKind::SignedInteger),
        raise,
        || VectorError::NotNumericType,
    )
}

pub fn is_unsigned_integer<T: ElementKind>(raise: bool) -> Result<bool> {
    check(
        T::KIND == Some(NumericKind::UnsignedInteger),
        raise,
        || VectorError::NotNumericType,
    )
}

/// Signed or unsigned integer; `bool` and `char` never qualify.
pub fn is_integer<T: ElementKind>(raise: bool) -> Result<bool> {
    let mut valid = is_signed_integer::<T>(false)?;
    valid = valid || is_unsigned_integer::<T>(false)?;
    check(valid, raise, || VectorError::NotNumericType)
}

pub fn validate_dimensions(expected: usize, requested: usize, raise: bool) -> Result<bool> {
    check(expected == requested, raise, || {
        VectorError::DimensionMismatch {
            expected,
            requested,
        }
    })
}

/// Both bounds are inclusive.
pub fn validate_in_range(index: usize, lower: usize, upper: usize, raise: bool) -> Result<bool> {
    check(lower <= index && index <= upper, raise, || {
        VectorError::IndexOutOfRange {
            lower,
            upper,
            requested: index,
        }
    })
}

pub fn validate_greater_than(bound: usize, value: usize, raise: bool) -> Result<bool> {
    check(value > bound, raise, || VectorError::NotGreaterThan {
        bound,
        value,
    })
}

/// True iff `1 / value` is finite (neither NaN nor infinite).
pub fn is_not_dividing_by_zero<T: Numeric>(value: T, raise: bool) -> Result<bool> {
    check(value.reciprocal_is_finite(), raise, || {
        VectorError::DivisionByZero
    })
}
