use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};
use std::slice::{Iter, IterMut};

use num_traits::{NumCast, Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::VectorConfig;
use crate::error::{Result, VectorError};
use crate::numeric::{Floating, Numeric};
use crate::validation;

/// A fixed-dimension vector of numeric elements.
///
/// The dimension is set at construction, is always greater than zero and
/// never changes afterwards. Arithmetic never mutates its operands; the
/// only in-place geometric operation is [`NumericVector::normalize_in_place`].
#[derive(Clone, Debug)]
pub struct NumericVector<T> {
    data: Vec<T>,
}

impl<T: Numeric> NumericVector<T> {
    /// Zero-filled vector of `dimension` elements.
    pub fn new(dimension: usize) -> Result<Self> {
        Self::from_elem(dimension, T::zero())
    }

    pub fn from_elem(dimension: usize, value: T) -> Result<Self> {
        validation::validate_greater_than(0, dimension, true)?;
        validation::is_numeric_value(&value, true)?;
        Ok(Self {
            data: vec![value; dimension],
        })
    }

    pub fn from_vec(mut data: Vec<T>) -> Result<Self> {
        validation::validate_greater_than(0, data.len(), true)?;
        validation::is_numeric_type::<T>(true)?;
        data.shrink_to_fit();
        Ok(Self { data })
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn size(&self) -> usize {
        self.dimension()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    pub fn mapv<U, F>(&self, f: F) -> NumericVector<U>
    where
        F: FnMut(&T) -> U,
    {
        NumericVector {
            data: self.data.iter().map(f).collect(),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        validation::validate_in_range(index, 0, self.dimension() - 1, true)?;
        Ok(())
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.at(index).copied()
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    fn apply<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&mut T),
    {
        self.data.iter_mut().for_each(|v| f(v));
        self
    }

    fn zip_with<F>(&self, other: &NumericVector<T>, mut f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        validation::validate_dimensions(self.dimension(), other.dimension(), true)?;
        Ok(Self {
            data: self
                .iter()
                .zip(other.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    pub fn add_scalar(&self, value: T) -> Self {
        self.clone().apply(|v| *v += value)
    }

    pub fn sub_scalar(&self, value: T) -> Self {
        self.clone().apply(|v| *v -= value)
    }

    /// `value - self`, element-wise.
    pub fn rsub_scalar(&self, value: T) -> Self {
        self.clone().apply(|v| *v = value - *v)
    }

    pub fn mul_scalar(&self, value: T) -> Self {
        self.clone().apply(|v| *v *= value)
    }

    /// Fails with `DivisionByZero` for a zero divisor and with
    /// `ArithmeticOverflow` when an integer quotient overflows.
    pub fn div_scalar(&self, value: T) -> Result<Self> {
        validation::is_not_dividing_by_zero(value, true)?;
        let data = self
            .iter()
            .map(|&v| {
                v.checked_quotient(value).ok_or_else(|| {
                    log::debug!("{} / {} overflows the element type", v, value);
                    VectorError::ArithmeticOverflow
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { data })
    }

    pub fn try_add(&self, other: &NumericVector<T>) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &NumericVector<T>) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn dot_product(&self, other: &NumericVector<T>) -> Result<T> {
        validation::validate_dimensions(self.dimension(), other.dimension(), true)?;
        let mut accum = T::zero();
        for (&a, &b) in self.iter().zip(other.iter()) {
            accum += a * b;
        }
        Ok(accum)
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|v| v.is_zero())
    }

    pub fn norm_squared(&self) -> T {
        let mut accum = T::zero();
        for &v in self.iter() {
            accum += v * v;
        }
        accum
    }

    /// Renders like `Display`, with the element precision taken from `config`.
    pub fn render(&self, config: &VectorConfig) -> String {
        match config.precision {
            Some(digits) => format!("{:.*}", digits, self),
            None => self.to_string(),
        }
    }
}

impl<T: Numeric + Signed> NumericVector<T> {
    /// Standard 3D cross product; both operands must have dimension 3.
    pub fn cross_product(&self, other: &NumericVector<T>) -> Result<Self> {
        validation::validate_dimensions(3, self.dimension(), true)?;
        validation::validate_dimensions(self.dimension(), other.dimension(), true)?;

        let (a, b) = (&self.data, &other.data);
        Ok(Self {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }
}

impl<T: Floating> NumericVector<T> {
    /// Euclidean (L2) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector along `self`. Fails with `DivisionByZero` for the zero vector.
    pub fn normalize(&self) -> Result<Self> {
        let vnorm = self.norm();
        validation::is_not_dividing_by_zero(vnorm, true)?;
        Ok(self.clone().apply(|v| *v = *v / vnorm))
    }

    pub fn normalize_in_place(&mut self) -> Result<&mut Self> {
        let vnorm = self.norm();
        validation::is_not_dividing_by_zero(vnorm, true)?;
        log::trace!("normalizing {}-dimensional vector with norm {}", self.dimension(), vnorm);
        for v in self.data.iter_mut() {
            *v = *v / vnorm;
        }
        Ok(self)
    }

    /// Component of `self` along the direction of `other`. `other` is left untouched.
    pub fn projection(&self, other: &NumericVector<T>) -> Result<Self> {
        let direction = other.normalize()?;
        let length = self.dot_product(&direction)?;
        Ok(direction.mul_scalar(length))
    }

    pub fn approx_eq(&self, other: &NumericVector<T>, tolerance: T) -> bool {
        validation::validate_dimensions(self.dimension(), other.dimension(), false)
            .unwrap_or(false)
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }

    pub fn approx_eq_with(&self, other: &NumericVector<T>, config: &VectorConfig) -> bool {
        match <T as NumCast>::from(config.tolerance) {
            Some(tolerance) => self.approx_eq(other, tolerance),
            None => false,
        }
    }
}

impl<T: Numeric> PartialEq for NumericVector<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_dimension =
            validation::validate_dimensions(self.dimension(), other.dimension(), false)
                .unwrap_or(false);
        same_dimension && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Numeric> Index<usize> for NumericVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Numeric> IndexMut<usize> for NumericVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Numeric> TryFrom<Vec<T>> for NumericVector<T> {
    type Error = VectorError;

    fn try_from(value: Vec<T>) -> Result<Self> {
        NumericVector::from_vec(value)
    }
}

impl<T> From<NumericVector<T>> for Vec<T> {
    fn from(value: NumericVector<T>) -> Self {
        value.data
    }
}

impl<'a, T> IntoIterator for &'a NumericVector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for NumericVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.data.iter().enumerate() {
            match f.precision() {
                Some(digits) => write!(f, "{:.*}", digits, value)?,
                None => write!(f, "{}", value)?,
            }
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ")")
    }
}

impl<T: Serialize> Serialize for NumericVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, T: Numeric + Deserialize<'de>> Deserialize<'de> for NumericVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        NumericVector::from_vec(data).map_err(serde::de::Error::custom)
    }
}

// Vector-vector operators validate dimensions, so they yield a Result.

impl<T: Numeric> Add for NumericVector<T> {
    type Output = Result<NumericVector<T>>;

    fn add(self, rhs: NumericVector<T>) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<'a, 'b, T: Numeric> Add<&'b NumericVector<T>> for &'a NumericVector<T> {
    type Output = Result<NumericVector<T>>;

    fn add(self, rhs: &'b NumericVector<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: Numeric> Sub for NumericVector<T> {
    type Output = Result<NumericVector<T>>;

    fn sub(self, rhs: NumericVector<T>) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<'a, 'b, T: Numeric> Sub<&'b NumericVector<T>> for &'a NumericVector<T> {
    type Output = Result<NumericVector<T>>;

    fn sub(self, rhs: &'b NumericVector<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: Numeric + Signed> Neg for NumericVector<T> {
    type Output = NumericVector<T>;

    fn neg(self) -> Self::Output {
        self.apply(|v| *v = -*v)
    }
}

impl<'a, T: Numeric + Signed> Neg for &'a NumericVector<T> {
    type Output = NumericVector<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for NumericVector<$t> {
                type Output = NumericVector<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.apply(|v| *v += rhs)
                }
            }

            impl<'a> Add<$t> for &'a NumericVector<$t> {
                type Output = NumericVector<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            impl Add<NumericVector<$t>> for $t {
                type Output = NumericVector<$t>;

                fn add(self, rhs: NumericVector<$t>) -> Self::Output {
                    rhs + self
                }
            }

            impl<'a> Add<&'a NumericVector<$t>> for $t {
                type Output = NumericVector<$t>;

                fn add(self, rhs: &'a NumericVector<$t>) -> Self::Output {
                    rhs.add_scalar(self)
                }
            }

            impl Sub<$t> for NumericVector<$t> {
                type Output = NumericVector<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.apply(|v| *v -= rhs)
                }
            }

            impl<'a> Sub<$t> for &'a NumericVector<$t> {
                type Output = NumericVector<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.sub_scalar(rhs)
                }
            }

            impl Sub<NumericVector<$t>> for $t {
                type Output = NumericVector<$t>;

                fn sub(self, rhs: NumericVector<$t>) -> Self::Output {
                    rhs.apply(|v| *v = self - *v)
                }
            }

            impl<'a> Sub<&'a NumericVector<$t>> for $t {
                type Output = NumericVector<$t>;

                fn sub(self, rhs: &'a NumericVector<$t>) -> Self::Output {
                    rhs.rsub_scalar(self)
                }
            }

            impl Mul<$t> for NumericVector<$t> {
                type Output = NumericVector<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.apply(|v| *v *= rhs)
                }
            }

            impl<'a> Mul<$t> for &'a NumericVector<$t> {
                type Output = NumericVector<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }

            impl Mul<NumericVector<$t>> for $t {
                type Output = NumericVector<$t>;

                fn mul(self, rhs: NumericVector<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl<'a> Mul<&'a NumericVector<$t>> for $t {
                type Output = NumericVector<$t>;

                fn mul(self, rhs: &'a NumericVector<$t>) -> Self::Output {
                    rhs.mul_scalar(self)
                }
            }

            impl Div<$t> for NumericVector<$t> {
                type Output = Result<NumericVector<$t>>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.div_scalar(rhs)
                }
            }

            impl<'a> Div<$t> for &'a NumericVector<$t> {
                type Output = Result<NumericVector<$t>>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.div_scalar(rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
