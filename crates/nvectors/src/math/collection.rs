use std::fmt;
use std::ops::{Add, Deref, Div, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::VectorConfig;
use crate::error::Result;
use crate::math::vector::NumericVector;
use crate::numeric::Floating;
use crate::validation;

/// A fixed-size, ordered collection of floating point vectors that all share
/// one sub-dimension.
#[derive(Clone, Debug)]
pub struct VectorCollection<T> {
    vectors: Vec<NumericVector<T>>,
}

impl<T: Floating> VectorCollection<T> {
    /// `count` zero vectors, each of dimension `sub_dimension`.
    pub fn new(sub_dimension: usize, count: usize) -> Result<Self> {
        validation::validate_greater_than(0, count, true)?;
        validation::is_floating_type::<T>(true)?;
        let zero = NumericVector::new(sub_dimension)?;
        Ok(Self {
            vectors: vec![zero; count],
        })
    }

    pub fn from_vectors(mut vectors: Vec<NumericVector<T>>) -> Result<Self> {
        validation::validate_greater_than(0, vectors.len(), true)?;
        validation::is_floating_type::<T>(true)?;
        let sub_dimension = vectors[0].dimension();
        for v in vectors.iter() {
            validation::validate_dimensions(sub_dimension, v.dimension(), true)?;
        }
        vectors.shrink_to_fit();
        Ok(Self { vectors })
    }

    pub fn count(&self) -> usize {
        self.vectors.len()
    }

    pub fn size(&self) -> usize {
        self.count()
    }

    /// Dimension of the first contained vector.
    pub fn sub_dimension(&self) -> usize {
        self.vectors[0].dimension()
    }

    pub fn iter(&self) -> Iter<'_, NumericVector<T>> {
        self.vectors.iter()
    }

    /// Element-level mutable access to every contained vector, in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = VectorMut<'_, T>> {
        self.vectors.iter_mut().map(|inner| VectorMut { inner })
    }

    pub fn as_slice(&self) -> &[NumericVector<T>] {
        &self.vectors
    }

    fn check_index(&self, index: usize) -> Result<()> {
        validation::validate_in_range(index, 0, self.count() - 1, true)?;
        Ok(())
    }

    pub fn at(&self, index: usize) -> Result<&NumericVector<T>> {
        self.check_index(index)?;
        Ok(&self.vectors[index])
    }

    /// Mutable handle on the vector at `index`. Its elements can be changed
    /// but the vector itself cannot be swapped out; use [`Self::replace`].
    pub fn at_mut(&mut self, index: usize) -> Result<VectorMut<'_, T>> {
        self.check_index(index)?;
        Ok(VectorMut {
            inner: &mut self.vectors[index],
        })
    }

    /// Puts `vector` at `index` and returns the vector it displaced.
    pub fn replace(&mut self, index: usize, vector: NumericVector<T>) -> Result<NumericVector<T>> {
        self.check_index(index)?;
        validation::validate_dimensions(self.sub_dimension(), vector.dimension(), true)?;
        Ok(std::mem::replace(&mut self.vectors[index], vector))
    }

    fn into_map<F>(self, f: F) -> Self
    where
        F: FnMut(NumericVector<T>) -> NumericVector<T>,
    {
        Self {
            vectors: self.vectors.into_iter().map(f).collect(),
        }
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&NumericVector<T>) -> NumericVector<T>,
    {
        Self {
            vectors: self.vectors.iter().map(f).collect(),
        }
    }

    fn try_map<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(&NumericVector<T>) -> Result<NumericVector<T>>,
    {
        Ok(Self {
            vectors: self.vectors.iter().map(f).collect::<Result<Vec<_>>>()?,
        })
    }

    fn try_zip<F>(&self, other: &VectorCollection<T>, mut f: F) -> Result<Self>
    where
        F: FnMut(&NumericVector<T>, &NumericVector<T>) -> Result<NumericVector<T>>,
    {
        validation::validate_dimensions(self.count(), other.count(), true)?;
        let vectors = self
            .vectors
            .iter()
            .zip(other.vectors.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { vectors })
    }

    pub fn add_scalar(&self, value: T) -> Self {
        self.map(|v| v.add_scalar(value))
    }

    pub fn sub_scalar(&self, value: T) -> Self {
        self.map(|v| v.sub_scalar(value))
    }

    /// `value - v` for every contained vector `v`.
    pub fn rsub_scalar(&self, value: T) -> Self {
        self.map(|v| v.rsub_scalar(value))
    }

    pub fn mul_scalar(&self, value: T) -> Self {
        self.map(|v| v.mul_scalar(value))
    }

    pub fn div_scalar(&self, value: T) -> Result<Self> {
        validation::is_not_dividing_by_zero(value, true)?;
        self.try_map(|v| v.div_scalar(value))
    }

    /// Adds `vector` to every contained vector.
    pub fn try_add_vector(&self, vector: &NumericVector<T>) -> Result<Self> {
        self.try_map(|v| v.try_add(vector))
    }

    /// Subtracts `vector` from every contained vector.
    pub fn try_sub_vector(&self, vector: &NumericVector<T>) -> Result<Self> {
        self.try_map(|v| v.try_sub(vector))
    }

    /// `vector - v` for every contained vector `v`.
    pub fn try_rsub_vector(&self, vector: &NumericVector<T>) -> Result<Self> {
        self.try_map(|v| vector.try_sub(v))
    }

    pub fn try_add(&self, other: &VectorCollection<T>) -> Result<Self> {
        self.try_zip(other, |a, b| a.try_add(b))
    }

    pub fn try_sub(&self, other: &VectorCollection<T>) -> Result<Self> {
        self.try_zip(other, |a, b| a.try_sub(b))
    }

    pub fn render(&self, config: &VectorConfig) -> String {
        match config.precision {
            Some(digits) => format!("{:.*}", digits, self),
            None => self.to_string(),
        }
    }
}

/// Mutable view of one vector inside a [`VectorCollection`].
///
/// Reads go through `Deref`. Writes are limited to elements, so the
/// dimension shared by every vector of the collection cannot change.
#[derive(Debug)]
pub struct VectorMut<'a, T> {
    inner: &'a mut NumericVector<T>,
}

impl<'a, T: Floating> VectorMut<'a, T> {
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.inner.at_mut(index)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.set(index, value)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.inner.iter_mut()
    }

    pub fn normalize_in_place(&mut self) -> Result<()> {
        self.inner.normalize_in_place()?;
        Ok(())
    }
}

impl<'a, T> Deref for VectorMut<'a, T> {
    type Target = NumericVector<T>;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl<'a, T: Floating> Index<usize> for VectorMut<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<'a, T: Floating> IndexMut<usize> for VectorMut<'a, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl<T: Floating> PartialEq for VectorCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut valid =
            validation::validate_dimensions(self.count(), other.count(), false).unwrap_or(false);
        valid = valid
            && validation::validate_dimensions(
                self.vectors[0].dimension(),
                other.vectors[0].dimension(),
                false,
            )
            .unwrap_or(false);
        valid && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Floating> Index<usize> for VectorCollection<T> {
    type Output = NumericVector<T>;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(vector) => vector,
            Err(e) => panic!("{}", e),
        }
    }
}

/// `c[(i, j)]` is element `j` of vector `i`.
impl<T: Floating> Index<(usize, usize)> for VectorCollection<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self[row][col]
    }
}

impl<T: Floating> IndexMut<(usize, usize)> for VectorCollection<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        if let Err(e) = self.check_index(row) {
            panic!("{}", e);
        }
        &mut self.vectors[row][col]
    }
}

impl<'a, T> IntoIterator for &'a VectorCollection<T> {
    type Item = &'a NumericVector<T>;
    type IntoIter = Iter<'a, NumericVector<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// One line per contained vector, in index order.
impl<T: fmt::Display> fmt::Display for VectorCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vector in self.vectors.iter() {
            match f.precision() {
                Some(digits) => writeln!(f, "{:.*}", digits, vector)?,
                None => writeln!(f, "{}", vector)?,
            }
        }
        Ok(())
    }
}

impl<T: Serialize> Serialize for VectorCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.vectors.serialize(serializer)
    }
}

impl<'de, T: Floating + Deserialize<'de>> Deserialize<'de> for VectorCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let vectors = Vec::<NumericVector<T>>::deserialize(deserializer)?;
        VectorCollection::from_vectors(vectors).map_err(serde::de::Error::custom)
    }
}

impl<'a, 'b, T: Floating> Add<&'b VectorCollection<T>> for &'a VectorCollection<T> {
    type Output = Result<VectorCollection<T>>;

    fn add(self, rhs: &'b VectorCollection<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: Floating> Add for VectorCollection<T> {
    type Output = Result<VectorCollection<T>>;

    fn add(self, rhs: VectorCollection<T>) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<'a, 'b, T: Floating> Sub<&'b VectorCollection<T>> for &'a VectorCollection<T> {
    type Output = Result<VectorCollection<T>>;

    fn sub(self, rhs: &'b VectorCollection<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: Floating> Sub for VectorCollection<T> {
    type Output = Result<VectorCollection<T>>;

    fn sub(self, rhs: VectorCollection<T>) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<'a, 'b, T: Floating> Add<&'b NumericVector<T>> for &'a VectorCollection<T> {
    type Output = Result<VectorCollection<T>>;

    fn add(self, rhs: &'b NumericVector<T>) -> Self::Output {
        self.try_add_vector(rhs)
    }
}

impl<'a, 'b, T: Floating> Add<&'b VectorCollection<T>> for &'a NumericVector<T> {
    type Output = Result<VectorCollection<T>>;

    fn add(self, rhs: &'b VectorCollection<T>) -> Self::Output {
        rhs.try_add_vector(self)
    }
}

impl<'a, 'b, T: Floating> Sub<&'b NumericVector<T>> for &'a VectorCollection<T> {
    type Output = Result<VectorCollection<T>>;

    fn sub(self, rhs: &'b NumericVector<T>) -> Self::Output {
        self.try_sub_vector(rhs)
    }
}

impl<'a, 'b, T: Floating> Sub<&'b VectorCollection<T>> for &'a NumericVector<T> {
    type Output = Result<VectorCollection<T>>;

    fn sub(self, rhs: &'b VectorCollection<T>) -> Self::Output {
        rhs.try_rsub_vector(self)
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for VectorCollection<$t> {
                type Output = VectorCollection<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.into_map(|v| v + rhs)
                }
            }

            impl Add<VectorCollection<$t>> for $t {
                type Output = VectorCollection<$t>;

                fn add(self, rhs: VectorCollection<$t>) -> Self::Output {
                    rhs + self
                }
            }

            impl Sub<$t> for VectorCollection<$t> {
                type Output = VectorCollection<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.into_map(|v| v - rhs)
                }
            }

            impl Sub<VectorCollection<$t>> for $t {
                type Output = VectorCollection<$t>;

                fn sub(self, rhs: VectorCollection<$t>) -> Self::Output {
                    rhs.into_map(|v| self - v)
                }
            }

            impl Mul<$t> for VectorCollection<$t> {
                type Output = VectorCollection<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.into_map(|v| v * rhs)
                }
            }

            impl Mul<VectorCollection<$t>> for $t {
                type Output = VectorCollection<$t>;

                fn mul(self, rhs: VectorCollection<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Div<$t> for VectorCollection<$t> {
                type Output = Result<VectorCollection<$t>>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.div_scalar(rhs)
                }
            }

            impl<'a> Add<$t> for &'a VectorCollection<$t> {
                type Output = VectorCollection<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            impl<'a> Add<&'a VectorCollection<$t>> for $t {
                type Output = VectorCollection<$t>;

                fn add(self, rhs: &'a VectorCollection<$t>) -> Self::Output {
                    rhs.add_scalar(self)
                }
            }

            impl<'a> Sub<$t> for &'a VectorCollection<$t> {
                type Output = VectorCollection<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.sub_scalar(rhs)
                }
            }

            impl<'a> Sub<&'a VectorCollection<$t>> for $t {
                type Output = VectorCollection<$t>;

                fn sub(self, rhs: &'a VectorCollection<$t>) -> Self::Output {
                    rhs.rsub_scalar(self)
                }
            }

            impl<'a> Mul<$t> for &'a VectorCollection<$t> {
                type Output = VectorCollection<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }

            impl<'a> Mul<&'a VectorCollection<$t>> for $t {
                type Output = VectorCollection<$t>;

                fn mul(self, rhs: &'a VectorCollection<$t>) -> Self::Output {
                    rhs.mul_scalar(self)
                }
            }

            impl<'a> Div<$t> for &'a VectorCollection<$t> {
                type Output = Result<VectorCollection<$t>>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.div_scalar(rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);
