//! Vector types.
//!
//! Provides `NumericVector` (rank 1) and `VectorCollection` (rank 2, a
//! fixed number of vectors sharing one sub-dimension). Every operation that
//! can violate a dimensional or numeric contract returns a `Result`.
pub mod collection;
pub mod vector;

pub use collection::{VectorCollection, VectorMut};
pub use vector::NumericVector;
