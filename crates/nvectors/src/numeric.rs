//! Element-type classification.
//!
//! Vectors are generic over `T: Numeric`, so non-numeric element types are
//! rejected by the compiler. `ElementKind` is also implemented for `bool`
//! and `char` (with no kind) so the validation predicates can still answer
//! "is this numeric?" for them.
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{CheckedDiv, Float, Num};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericKind {
    SignedInteger,
    UnsignedInteger,
    Floating,
}

pub trait ElementKind {
    const KIND: Option<NumericKind>;
}

/// Bound for the elements of a `NumericVector`.
pub trait Numeric:
    ElementKind
    + Num
    + Copy
    + PartialEq
    + Display
    + Debug
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// True when `1 / self` would be finite.
    fn reciprocal_is_finite(self) -> bool;

    /// `self / rhs`, or `None` when the quotient does not fit in `Self`
    /// (`MIN / -1` for signed integers) or `rhs` is an integer zero.
    fn checked_quotient(self, rhs: Self) -> Option<Self>;
}

/// Floating point elements; required by norm, normalization and projection.
pub trait Floating: Numeric + Float {}

macro_rules! impl_kind {
    ($kind:expr => $($t:ty),*) => {
        $(
            impl ElementKind for $t {
                const KIND: Option<NumericKind> = $kind;
            }
        )*
    };
}

impl_kind!(Some(NumericKind::SignedInteger) => i8, i16, i32, i64, i128, isize);
impl_kind!(Some(NumericKind::UnsignedInteger) => u8, u16, u32, u64, u128, usize);
impl_kind!(Some(NumericKind::Floating) => f32, f64);
impl_kind!(None => bool, char);

macro_rules! impl_numeric_integer {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn reciprocal_is_finite(self) -> bool {
                    // 1 / 0 traps for integers instead of producing inf.
                    self != 0
                }

                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    CheckedDiv::checked_div(&self, &rhs)
                }
            }
        )*
    };
}

impl_numeric_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn reciprocal_is_finite(self) -> bool {
                    (1.0 / self).is_finite()
                }

                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }

            impl Floating for $t {}
        )*
    };
}

impl_numeric_float!(f32, f64);
