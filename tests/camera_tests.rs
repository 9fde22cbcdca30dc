// Host-side tests for view/projection/model matrices.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod breakpoint {
        include!("../src/core/breakpoint.rs");
    }
    pub mod float {
        include!("../src/core/float.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}
mod camera {
    include!("../src/camera.rs");
}

use crate::core::breakpoint::SizeClass;
use crate::core::float::{FloatMotion, FloatPose};
use crate::core::scene::{SceneKind, SceneParams};
use glam::{Vec3, Vec4};

#[test]
fn target_projects_to_screen_center() {
    let params = SceneParams::lookup(SceneKind::Planet, SizeClass::Large);
    let eye = params.camera_position;
    let clip = camera::view_projection(params, eye, Vec3::ZERO, 16.0 / 9.0)
        * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn degenerate_aspect_falls_back_to_square() {
    let params = SceneParams::lookup(SceneKind::Desktop, SizeClass::Mobile);
    let square = camera::projection(params, 1.0);
    assert_eq!(camera::projection(params, 0.0), square);
    assert_eq!(camera::projection(params, f32::NAN), square);
}

#[test]
fn model_applies_scale_then_translation() {
    let params = SceneParams::lookup(SceneKind::Planet, SizeClass::Mobile);
    let m = camera::model(params);
    let p = m.transform_point3(Vec3::X);
    assert!((p - Vec3::new(2.5, 0.0, 0.0)).length() < 1e-5);

    let desktop = SceneParams::lookup(SceneKind::Desktop, SizeClass::Large);
    let origin = camera::model(desktop).transform_point3(Vec3::ZERO);
    assert!((origin - desktop.model_position).length() < 1e-5);
}

#[test]
fn star_spin_rotates_points_without_moving_origin() {
    let params = SceneParams::lookup(SceneKind::Stars, SizeClass::Large);
    let still = camera::model_with_spin(params, 0.0, 0.0);
    let spun = camera::model_with_spin(params, -0.3, -0.2);
    assert_ne!(still, spun);
    assert!(spun.transform_point3(Vec3::ZERO).length() < 1e-6);
    let p = Vec3::new(0.5, -0.4, 0.7);
    assert!((spun.transform_point3(p).length() - p.length()).abs() < 1e-5);
}

#[test]
fn floating_model_lifts_and_wobbles_around_its_center() {
    let params = SceneParams::lookup(SceneKind::Ball, SizeClass::Large);
    let still = camera::model_floating(params, FloatPose::default());
    assert_eq!(still, camera::model(params));

    let lifted = camera::model_floating(
        params,
        FloatPose {
            rotation: Vec3::ZERO,
            lift: 0.3,
        },
    );
    let center = lifted.transform_point3(Vec3::ZERO);
    assert!((center - Vec3::new(0.0, 0.3, 0.0)).length() < 1e-6);

    let mut motion = FloatMotion::new();
    motion.advance(2.0);
    let pose = motion.pose(params.float.as_ref().unwrap());
    let m = camera::model_floating(params, pose);
    // The unit sphere keeps its scaled radius whatever the wobble.
    let top = m.transform_point3(Vec3::Y) - m.transform_point3(Vec3::ZERO);
    assert!((top.length() - params.model_scale).abs() < 1e-4);
}
