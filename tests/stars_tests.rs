// Host-side tests for the background star field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod stars {
        include!("../src/core/stars.rs");
    }
}

use crate::core::constants::{STAR_COUNT, STAR_RADIUS};
use crate::core::stars::{sanitize, StarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generates_fifteen_thousand_finite_values_inside_sphere() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = StarField::generate(&mut rng);
    assert_eq!(field.positions().len(), 15_000);
    assert_eq!(field.len(), STAR_COUNT);
    assert!(!field.is_empty());
    assert!(field.positions().iter().all(|v| v.is_finite()));
    for p in field.positions().chunks_exact(3) {
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!(r <= STAR_RADIUS + 1e-5, "point outside sphere: {}", r);
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = StarField::generate(&mut StdRng::seed_from_u64(3));
    let b = StarField::generate(&mut StdRng::seed_from_u64(3));
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn sanitize_replaces_non_finite_with_zero() {
    let mut values = vec![1.0, f32::NAN, -0.5, f32::INFINITY, f32::NEG_INFINITY];
    assert_eq!(sanitize(&mut values), 3);
    assert_eq!(values, vec![1.0, 0.0, -0.5, 0.0, 0.0]);
    assert_eq!(sanitize(&mut values), 0);
}

#[test]
fn from_positions_pads_and_sanitizes() {
    let field = StarField::from_positions(vec![0.1, f32::NAN, 0.3]);
    assert_eq!(field.positions().len(), STAR_COUNT * 3);
    assert_eq!(&field.positions()[..3], &[0.1, 0.0, 0.3]);
    assert!(field.positions()[3..].iter().all(|v| *v == 0.0));
}

#[test]
fn advance_spins_at_fixed_rates() {
    let mut field = StarField::from_positions(Vec::new());
    field.advance(1.5);
    assert!((field.rotation_x - (-0.15)).abs() < 1e-6);
    assert!((field.rotation_y - (-0.1)).abs() < 1e-6);

    let before = (field.rotation_x, field.rotation_y);
    field.advance(0.0);
    field.advance(-1.0);
    field.advance(f32::NAN);
    assert_eq!((field.rotation_x, field.rotation_y), before);
}
