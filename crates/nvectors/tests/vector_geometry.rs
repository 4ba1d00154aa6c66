//! Integration tests for dot/cross products, norms, normalization and projection.

use nvectors::{NumericVector, VectorError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-9;

fn vector(values: &[f64]) -> NumericVector<f64> {
    NumericVector::from_vec(values.to_vec()).unwrap()
}

fn random_vector(rng: &mut StdRng, dimension: usize) -> NumericVector<f64> {
    NumericVector::from_vec((0..dimension).map(|_| rng.gen_range(-10.0..10.0)).collect()).unwrap()
}

// ---------------------------------------------------------------------------
// Dot product and norms
// ---------------------------------------------------------------------------

#[test]
fn dot_product_basic() {
    let a = vector(&[1.0, 2.0, 3.0]);
    let b = vector(&[4.0, -5.0, 6.0]);
    assert_eq!(a.dot_product(&b).unwrap(), 12.0);

    let ints = NumericVector::from_vec(vec![2u32, 3]).unwrap();
    assert_eq!(ints.dot_product(&ints).unwrap(), 13);
}

#[test]
fn dot_product_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for dimension in 1..10 {
        let a = random_vector(&mut rng, dimension);
        let b = random_vector(&mut rng, dimension);
        assert_eq!(a.dot_product(&b).unwrap(), b.dot_product(&a).unwrap());
    }
}

#[test]
fn dot_product_dimension_mismatch() {
    let a = vector(&[1.0, 2.0]);
    let b = vector(&[1.0, 2.0, 3.0]);
    assert_eq!(
        a.dot_product(&b).unwrap_err(),
        VectorError::DimensionMismatch {
            expected: 2,
            requested: 3
        }
    );
}

#[test]
fn norm_of_three_four_zero() {
    let mut v: NumericVector<f64> = NumericVector::new(3).unwrap();
    *v.at_mut(0).unwrap() = 3.0;
    *v.at_mut(1).unwrap() = 4.0;
    *v.at_mut(2).unwrap() = 0.0;
    assert_eq!(v.norm(), 5.0);
    assert_eq!(v.norm_squared(), 25.0);
}

#[test]
fn norms_agree_with_dot_product() {
    let mut rng = StdRng::seed_from_u64(11);
    for dimension in 1..10 {
        let v = random_vector(&mut rng, dimension);
        assert_eq!(v.norm_squared(), v.dot_product(&v).unwrap());
        assert_eq!(v.norm(), v.norm_squared().sqrt());
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_yields_unit_vector() {
    let mut rng = StdRng::seed_from_u64(3);
    for dimension in 1..10 {
        let v = random_vector(&mut rng, dimension);
        let unit = v.normalize().unwrap();
        assert!((unit.norm() - 1.0).abs() < TOLERANCE);
    }
}

#[test]
fn normalize_does_not_mutate() {
    let v = vector(&[0.0, 3.0, 4.0]);
    let unit = v.normalize().unwrap();
    assert_eq!(v, vector(&[0.0, 3.0, 4.0]));
    assert!(unit.approx_eq(&vector(&[0.0, 0.6, 0.8]), TOLERANCE));
}

#[test]
fn normalize_zero_vector_fails() {
    let zero: NumericVector<f64> = NumericVector::new(4).unwrap();
    assert_eq!(zero.normalize().unwrap_err(), VectorError::DivisionByZero);

    let mut zero = zero;
    assert_eq!(
        zero.normalize_in_place().unwrap_err(),
        VectorError::DivisionByZero
    );
    assert!(zero.is_zero());
}

#[test]
fn normalize_in_place_mutates_receiver() {
    let mut v = vector(&[3.0, 0.0, 4.0]);
    let copy = v.normalize_in_place().unwrap().clone();
    assert!(v.approx_eq(&vector(&[0.6, 0.0, 0.8]), TOLERANCE));
    assert_eq!(copy, v);
}

// ---------------------------------------------------------------------------
// Cross product
// ---------------------------------------------------------------------------

#[test]
fn cross_product_of_unit_axes() {
    let a = vector(&[1.0, 0.0, 0.0]);
    let b = vector(&[0.0, 1.0, 0.0]);
    assert!(a.cross_product(&b).unwrap() == vector(&[0.0, 0.0, 1.0]));
    assert!(b.cross_product(&a).unwrap() == vector(&[0.0, 0.0, -1.0]));
}

#[test]
fn cross_product_integers() {
    let a = NumericVector::from_vec(vec![2, 3, 4]).unwrap();
    let b = NumericVector::from_vec(vec![5, 6, 7]).unwrap();
    assert_eq!(
        a.cross_product(&b).unwrap().to_vec(),
        vec![3 * 7 - 4 * 6, 4 * 5 - 2 * 7, 2 * 6 - 3 * 5]
    );
}

#[test]
fn cross_product_is_anti_commutative() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);
        let ab = a.cross_product(&b).unwrap();
        let ba = b.cross_product(&a).unwrap();
        assert_eq!(ab, -1.0 * ba.clone());
        assert_eq!(ab, -ba);
    }
}

#[test]
fn cross_product_perpendicular_to_inputs() {
    let a = vector(&[1.0, 2.0, 3.0]);
    let b = vector(&[-2.0, 0.5, 4.0]);
    let c = a.cross_product(&b).unwrap();
    assert!(c.dot_product(&a).unwrap().abs() < TOLERANCE);
    assert!(c.dot_product(&b).unwrap().abs() < TOLERANCE);
}

#[test]
fn cross_product_requires_three_dimensions() {
    let a = vector(&[1.0, 2.0]);
    let b = vector(&[3.0, 4.0]);
    assert_eq!(
        a.cross_product(&b).unwrap_err(),
        VectorError::DimensionMismatch {
            expected: 3,
            requested: 2
        }
    );

    let c = vector(&[1.0, 2.0, 3.0]);
    let d = vector(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        c.cross_product(&d).unwrap_err(),
        VectorError::DimensionMismatch {
            expected: 3,
            requested: 4
        }
    );
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[test]
fn projection_onto_axis() {
    let v = vector(&[3.0, 4.0, 5.0]);
    let axis = vector(&[2.0, 0.0, 0.0]);
    let projected = v.projection(&axis).unwrap();
    assert!(projected.approx_eq(&vector(&[3.0, 0.0, 0.0]), TOLERANCE));
    // The direction argument is left untouched.
    assert_eq!(axis, vector(&[2.0, 0.0, 0.0]));
}

#[test]
fn projection_onto_parallel_vector_is_identity() {
    let v = vector(&[1.0, 2.0, 2.0]);
    let projected = v.projection(&(&v * 4.0)).unwrap();
    assert!(projected.approx_eq(&v, TOLERANCE));
}

#[test]
fn projection_onto_zero_vector_fails() {
    let v = vector(&[1.0, 2.0]);
    let zero: NumericVector<f64> = NumericVector::new(2).unwrap();
    assert_eq!(v.projection(&zero).unwrap_err(), VectorError::DivisionByZero);
}

#[test]
fn projection_dimension_mismatch() {
    let v = vector(&[1.0, 2.0]);
    let w = vector(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        v.projection(&w),
        Err(VectorError::DimensionMismatch { .. })
    ));
}

#[test]
fn approx_eq_respects_tolerance_and_dimension() {
    let a = vector(&[1.0, 2.0]);
    let b = vector(&[1.0 + 1e-12, 2.0]);
    assert!(a.approx_eq(&b, TOLERANCE));
    assert!(!a.approx_eq(&vector(&[1.1, 2.0]), TOLERANCE));
    assert!(!a.approx_eq(&vector(&[1.0, 2.0, 0.0]), TOLERANCE));
}
