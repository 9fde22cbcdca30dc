// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
}

use crate::core::orbit::OrbitControls;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const EPS: f32 = 1e-4;

#[test]
fn free_orbit_reproduces_starting_eye() {
    let eye = Vec3::new(3.0, 2.0, 4.0);
    let orbit = OrbitControls::new(eye, Vec3::ZERO, None, false);
    assert!((orbit.eye() - eye).length() < EPS);
    assert!((orbit.radius() - eye.length()).abs() < EPS);
}

#[test]
fn polar_lock_pins_camera_to_horizon_and_keeps_distance() {
    let eye = Vec3::new(20.0, 3.0, 5.0);
    let mut orbit = OrbitControls::new(eye, Vec3::ZERO, Some(FRAC_PI_2), false);
    assert!((orbit.polar() - FRAC_PI_2).abs() < EPS);
    assert!(orbit.eye().y.abs() < EPS);
    assert!((orbit.eye().length() - eye.length()).abs() < EPS);

    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(0.0, 200.0, 400.0);
    assert!((orbit.polar() - FRAC_PI_2).abs() < EPS);
}

#[test]
fn horizontal_drag_rotates_by_full_turn_per_height() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, None, false);
    let start = orbit.azimuth();
    orbit.begin_drag(100.0, 100.0);
    assert!(orbit.is_dragging());
    assert!(orbit.drag_to(150.0, 100.0, 400.0));
    assert!((orbit.azimuth() - (start - TAU * 50.0 / 400.0)).abs() < EPS);
    orbit.end_drag();
    assert!(!orbit.is_dragging());
    assert!(!orbit.drag_to(300.0, 100.0, 400.0));
}

#[test]
fn polar_stays_inside_open_interval() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, None, false);
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(0.0, -10_000.0, 100.0);
    assert!(orbit.polar() > 0.0 && orbit.polar() < PI);
    orbit.drag_to(0.0, 10_000.0, 100.0);
    assert!(orbit.polar() > 0.0 && orbit.polar() < PI);
    assert!(orbit.eye().is_finite());
}

#[test]
fn zero_height_viewport_is_ignored() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, None, false);
    orbit.begin_drag(0.0, 0.0);
    assert!(!orbit.drag_to(50.0, 50.0, 0.0));
}

#[test]
fn auto_rotate_turns_once_per_thirty_seconds() {
    let mut orbit = OrbitControls::new(
        Vec3::new(-4.0, 3.0, 6.0),
        Vec3::ZERO,
        Some(FRAC_PI_2),
        true,
    );
    let start = orbit.azimuth();
    assert!(orbit.update(7.5));
    let moved = (start - orbit.azimuth()).rem_euclid(TAU);
    assert!((moved - TAU / 4.0).abs() < 1e-3, "moved {}", moved);
}

#[test]
fn auto_rotate_pauses_while_dragging_or_disabled() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, None, true);
    orbit.begin_drag(0.0, 0.0);
    assert!(!orbit.update(0.016));
    orbit.end_drag();
    assert!(orbit.update(0.016));
    orbit.set_auto_rotate(false);
    assert!(!orbit.update(0.016));
}

#[test]
fn reset_reseats_camera_at_new_position() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, None, false);
    let next = Vec3::new(-2.0, 1.5, 4.0);
    orbit.reset(next);
    assert!((orbit.eye() - next).length() < EPS);
}
