//! nvectors: fixed-dimension numeric vectors with checked arithmetic.
//!
//! This crate provides `NumericVector` (element-wise arithmetic, dot and
//! cross products, norm, normalization and projection) and
//! `VectorCollection`, a fixed-size collection of vectors sharing one
//! sub-dimension. All preconditions go through the `validation` module and
//! failures are reported as a single `VectorError` enum.
pub mod config;
pub mod error;
pub mod math;
pub mod numeric;
pub mod validation;

pub use config::VectorConfig;
pub use error::{Result, VectorError};
pub use math::{NumericVector, VectorCollection, VectorMut};
pub use numeric::{ElementKind, Floating, Numeric, NumericKind};
