// Host-side tests for the per-breakpoint scene table and the render stage.
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
    pub mod stage {
        include!("../src/core/stage.rs");
    }
}

use crate::core::breakpoint::{classify, SizeClass};
use crate::core::scene::{SceneKind, SceneParams};
use crate::core::stage::{AssetGate, Frame, Stage};
use glam::Vec3;

#[test]
fn lookup_is_total() {
    for kind in SceneKind::ALL {
        for class in SizeClass::ALL {
            let p = SceneParams::lookup(kind, class);
            assert!(p.fov_degrees > 0.0 && p.fov_degrees < 180.0);
            assert!(p.near > 0.0 && p.far > p.near);
            assert!(p.model_scale > 0.0);
            assert!(p.dpr_range.0 <= p.dpr_range.1);
        }
    }
}

#[test]
fn mobile_disables_shadows_everywhere() {
    for kind in SceneKind::ALL {
        let p = SceneParams::lookup(kind, SizeClass::Mobile);
        assert!(!p.shadows_enabled, "{:?}", kind);
        assert!(p.active_contact_shadow().is_none());
    }
    let large = SceneParams::lookup(SceneKind::Desktop, SizeClass::Large);
    assert!(large.shadows_enabled);
    assert!(large.active_contact_shadow().is_some());
}

#[test]
fn dpr_ranges_follow_class() {
    for kind in SceneKind::ALL {
        assert_eq!(
            SceneParams::lookup(kind, SizeClass::Mobile).dpr_range,
            (1.0, 1.5)
        );
        assert_eq!(
            SceneParams::lookup(kind, SizeClass::Tablet).dpr_range,
            (1.0, 2.0)
        );
        assert_eq!(
            SceneParams::lookup(kind, SizeClass::Large).dpr_range,
            (1.0, 2.0)
        );
    }
}

#[test]
fn dpr_is_clamped_into_range() {
    let mobile = SceneParams::lookup(SceneKind::Desktop, SizeClass::Mobile);
    assert_eq!(mobile.clamp_dpr(3.0), 1.5);
    assert_eq!(mobile.clamp_dpr(0.5), 1.0);
    assert_eq!(mobile.clamp_dpr(1.25), 1.25);
    assert_eq!(mobile.clamp_dpr(f64::NAN), 1.0);

    let large = SceneParams::lookup(SceneKind::Planet, SizeClass::Large);
    assert_eq!(large.clamp_dpr(3.0), 2.0);
}

#[test]
fn desktop_model_shrinks_on_mobile() {
    let mobile = SceneParams::lookup(SceneKind::Desktop, SizeClass::Mobile);
    let large = SceneParams::lookup(SceneKind::Desktop, SizeClass::Large);
    assert_eq!(mobile.model_scale, 0.7);
    assert_eq!(large.model_scale, 0.75);
    assert_eq!(mobile.model_position, Vec3::new(0.0, -3.0, -2.2));
    assert_eq!(large.model_position, Vec3::new(0.0, -3.25, -1.5));
    assert_eq!(mobile.camera_position, Vec3::new(20.0, 3.0, 5.0));
    assert_eq!(mobile.fov_degrees, 25.0);
}

#[test]
fn planet_camera_moves_closer_as_viewport_shrinks() {
    let dist = |class| {
        SceneParams::lookup(SceneKind::Planet, class)
            .camera_position
            .length()
    };
    assert!(dist(SizeClass::Mobile) < dist(SizeClass::Tablet));
    assert!(dist(SizeClass::Tablet) < dist(SizeClass::Large));
    for class in SizeClass::ALL {
        assert!(SceneParams::lookup(SceneKind::Planet, class).auto_rotate);
    }
}

#[test]
fn light_intensities_by_name() {
    let p = SceneParams::lookup(SceneKind::Desktop, SizeClass::Large);
    assert_eq!(p.light_intensity("hemisphere"), Some(0.2));
    assert_eq!(p.light_intensity("spot"), Some(1.5));
    assert_eq!(p.light_intensity("missing"), None);
    let stars = SceneParams::lookup(SceneKind::Stars, SizeClass::Large);
    assert!(stars.lights.is_empty());
}

#[test]
fn scene_kind_parses_dom_attribute() {
    assert_eq!(SceneKind::from_attr("desktop"), Some(SceneKind::Desktop));
    assert_eq!(SceneKind::from_attr(" planet "), Some(SceneKind::Planet));
    assert_eq!(SceneKind::from_attr("earth"), Some(SceneKind::Planet));
    assert_eq!(SceneKind::from_attr("stars"), Some(SceneKind::Stars));
    assert_eq!(SceneKind::from_attr("ball"), Some(SceneKind::Ball));
    assert_eq!(SceneKind::from_attr("tech"), Some(SceneKind::Ball));
    assert_eq!(SceneKind::from_attr("cube"), None);
    assert!(SceneKind::Stars.default_model_url().is_none());
    assert!(SceneKind::Ball.default_model_url().is_none());
    assert!(SceneKind::Desktop.default_model_url().is_some());
}

#[test]
fn stage_applies_params_once_per_class_change() {
    let mut stage: Stage<u32> = Stage::new(SceneKind::Desktop, classify(1200.0));
    assert_eq!(stage.applied_count(), 1);
    assert!(stage.take_redraw());

    // Same class repeatedly: no re-application, no redraw.
    for w in [1000.0, 1100.0, 1300.0] {
        assert!(!stage.set_size_class(classify(w)));
    }
    assert_eq!(stage.applied_count(), 1);
    assert!(!stage.needs_redraw());

    assert!(stage.set_size_class(classify(400.0)));
    assert_eq!(stage.applied_count(), 2);
    assert_eq!(stage.size_class(), SizeClass::Mobile);
    assert!(std::ptr::eq(
        stage.params(),
        SceneParams::lookup(SceneKind::Desktop, SizeClass::Mobile)
    ));
    assert!(stage.take_redraw());
    assert!(!stage.take_redraw());
}

#[test]
fn stage_shows_placeholder_until_ready() {
    let mut stage: Stage<&'static str> = Stage::new(SceneKind::Planet, SizeClass::Tablet);
    assert!(matches!(stage.frame(), Frame::Placeholder));
    assert!(!stage.gate().is_ready());
    assert!(!stage.wants_continuous());

    stage.take_redraw();
    stage.mark_ready("planet");
    assert!(stage.needs_redraw());
    match stage.frame() {
        Frame::Scene { params, asset } => {
            assert_eq!(*asset, "planet");
            assert_eq!(params.fov_degrees, 50.0);
        }
        Frame::Placeholder => panic!("expected a scene frame"),
    }
    assert!(matches!(stage.gate(), AssetGate::Ready(_)));
    assert!(stage.wants_continuous());
}

#[test]
fn desktop_renders_on_demand_only() {
    let mut stage: Stage<()> = Stage::new(SceneKind::Desktop, SizeClass::Large);
    stage.mark_ready(());
    assert!(stage.take_redraw());
    assert!(!stage.wants_continuous());
    assert!(!stage.take_redraw());
    stage.invalidate();
    assert!(stage.take_redraw());
}

#[test]
fn star_field_runs_continuously_once_ready() {
    let mut stage: Stage<()> = Stage::new(SceneKind::Stars, SizeClass::Mobile);
    assert!(!stage.wants_continuous());
    stage.mark_ready(());
    assert!(stage.wants_continuous());
}

#[test]
fn ball_floats_with_a_front_decal() {
    for class in SizeClass::ALL {
        let p = SceneParams::lookup(SceneKind::Ball, class);
        assert_eq!(p.model_scale, 2.75);
        assert_eq!(p.camera_position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(p.fov_degrees, 75.0);
        assert_eq!(p.light_intensity("ambient"), Some(0.15));
        assert_eq!(p.light_intensity("directional"), Some(0.8));
        assert!(p.polar_lock.is_none());
        assert!(!p.auto_rotate);

        let float = p.float.expect("ball floats");
        assert_eq!(float.speed, 1.75);
        assert_eq!(float.float_intensity, 2.0);
        let decal = p.decal.expect("ball carries an icon");
        assert!(decal.half_size > 0.0 && decal.min_depth > 0.0);
    }
    for kind in [SceneKind::Desktop, SceneKind::Planet, SceneKind::Stars] {
        let p = SceneParams::lookup(kind, SizeClass::Large);
        assert!(p.float.is_none() && p.decal.is_none(), "{:?}", kind);
    }
}

#[test]
fn only_the_star_field_skips_orbit_controls() {
    for kind in SceneKind::ALL {
        assert_eq!(kind.has_orbit_controls(), kind != SceneKind::Stars);
    }
}

#[test]
fn floating_ball_keeps_the_loop_running() {
    let mut stage: Stage<()> = Stage::new(SceneKind::Ball, SizeClass::Large);
    assert!(!stage.wants_continuous());
    stage.mark_ready(());
    assert!(stage.wants_continuous());
}

#[test]
fn backing_size_scales_css_by_clamped_dpr() {
    let mobile = SceneParams::lookup(SceneKind::Desktop, SizeClass::Mobile);
    assert_eq!(mobile.backing_size(400.0, 300.0, 3.0), (600, 450));
    let large = SceneParams::lookup(SceneKind::Desktop, SizeClass::Large);
    assert_eq!(large.backing_size(1000.0, 500.0, 1.0), (1000, 500));
    assert_eq!(large.backing_size(0.0, f64::NAN, 2.0), (1, 1));
}

#[test]
fn same_class_resize_still_redraws_when_backing_store_changes() {
    let mut stage: Stage<()> = Stage::new(SceneKind::Desktop, classify(1200.0));
    stage.mark_ready(());
    let params = stage.params();
    assert!(stage.set_backing_size(params.backing_size(1200.0, 600.0, 1.0)));
    assert!(stage.take_redraw());

    // 1200 -> 1400 px wide stays Large but grows the canvas.
    assert!(!stage.set_size_class(classify(1400.0)));
    assert!(!stage.needs_redraw());
    assert!(stage.set_backing_size(params.backing_size(1400.0, 700.0, 1.0)));
    assert_eq!(stage.backing_size(), Some((1400, 700)));
    assert_eq!(stage.applied_count(), 1);
    assert!(stage.take_redraw());

    // Identical size again is a no-op.
    assert!(!stage.set_backing_size((1400, 700)));
    assert!(!stage.needs_redraw());
}
