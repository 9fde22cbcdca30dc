// Host-side tests for the idle float motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod float {
        include!("../src/core/float.rs");
    }
}

use crate::core::float::{FloatMotion, FloatParams, FloatPose};

const PARAMS: FloatParams = FloatParams {
    speed: 1.75,
    rotation_intensity: 1.0,
    float_intensity: 2.0,
};

#[test]
fn starts_tilted_at_rest_height() {
    let pose = FloatMotion::new().pose(&PARAMS);
    assert_eq!(pose.lift, 0.0);
    assert!((pose.rotation.x - 0.125).abs() < 1e-6);
    assert_eq!(pose.rotation.y, 0.0);
    assert_eq!(pose.rotation.z, 0.0);
}

#[test]
fn lift_and_wobble_stay_bounded() {
    let mut motion = FloatMotion::new();
    for _ in 0..2000 {
        assert!(motion.advance(1.0 / 60.0));
        let pose = motion.pose(&PARAMS);
        assert!(pose.lift.abs() <= 0.2 + 1e-6);
        assert!(pose.rotation.x.abs() <= 0.125 + 1e-6);
        assert!(pose.rotation.y.abs() <= 0.125 + 1e-6);
        assert!(pose.rotation.z.abs() <= 0.05 + 1e-6);
    }
}

#[test]
fn motion_is_periodic() {
    let period = 4.0 * std::f32::consts::TAU / PARAMS.speed;
    let mut a = FloatMotion::new();
    a.advance(1.3);
    let mut b = a;
    b.advance(period);
    let (pa, pb) = (a.pose(&PARAMS), b.pose(&PARAMS));
    assert!((pa.lift - pb.lift).abs() < 1e-4);
    assert!((pa.rotation - pb.rotation).length() < 1e-4);
}

#[test]
fn zero_intensities_hold_still() {
    let still = FloatParams {
        speed: 1.75,
        rotation_intensity: 0.0,
        float_intensity: 0.0,
    };
    let mut motion = FloatMotion::new();
    motion.advance(3.0);
    assert_eq!(motion.pose(&still), FloatPose::default());
}

#[test]
fn bad_steps_are_ignored() {
    let mut motion = FloatMotion::new();
    assert!(!motion.advance(0.0));
    assert!(!motion.advance(-1.0));
    assert!(!motion.advance(f32::NAN));
    assert!(!motion.advance(f32::INFINITY));
    assert_eq!(motion.elapsed(), 0.0);
}
