use super::constants::{ORBIT_AUTO_ROTATE_SPEED, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Orbit camera around a fixed target. Zoom is intentionally absent.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    target: Vec3,
    radius: f32,
    azimuth: f32,
    polar: f32,
    min_polar: f32,
    max_polar: f32,
    auto_rotate: bool,
    drag_from: Option<[f32; 2]>,
}

impl OrbitControls {
    /// Start from a camera position looking at `target`. When `polar_lock`
    /// is set the polar angle is pinned to it.
    pub fn new(eye: Vec3, target: Vec3, polar_lock: Option<f32>, auto_rotate: bool) -> Self {
        let (min_polar, max_polar) = match polar_lock {
            Some(p) => (p, p),
            None => (0.0, PI),
        };
        let mut controls = Self {
            target,
            radius: 1.0,
            azimuth: 0.0,
            polar: FRAC_PI_2,
            min_polar,
            max_polar,
            auto_rotate,
            drag_from: None,
        };
        controls.reset(eye);
        controls
    }

    /// Re-seat the camera at `eye`, keeping limits and drag state.
    pub fn reset(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        self.radius = offset.length().max(ORBIT_POLAR_EPSILON);
        // Y-up spherical: azimuth around Y measured from +Z, polar from +Y.
        self.azimuth = offset.x.atan2(offset.z);
        self.polar = (offset.y / self.radius).clamp(-1.0, 1.0).acos();
        self.clamp_polar();
    }

    pub fn eye(&self) -> Vec3 {
        let sin_p = self.polar.sin();
        self.target
            + Vec3::new(
                self.radius * sin_p * self.azimuth.sin(),
                self.radius * self.polar.cos(),
                self.radius * sin_p * self.azimuth.cos(),
            )
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    #[inline]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag_from = Some([x, y]);
    }

    /// Rotate by the pointer delta since the last call. `viewport_height` is
    /// the element height in the same units as `x`/`y`. Returns whether the
    /// camera moved.
    pub fn drag_to(&mut self, x: f32, y: f32, viewport_height: f32) -> bool {
        let Some([x0, y0]) = self.drag_from else {
            return false;
        };
        self.drag_from = Some([x, y]);
        if viewport_height <= 0.0 {
            return false;
        }
        let (dx, dy) = (x - x0, y - y0);
        let before = (self.azimuth, self.polar);
        self.azimuth -= TAU * dx / viewport_height * ORBIT_ROTATE_SPEED;
        self.polar -= TAU * dy / viewport_height * ORBIT_ROTATE_SPEED;
        self.clamp_polar();
        before != (self.azimuth, self.polar)
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Advance auto-rotation. Returns whether the camera moved.
    pub fn update(&mut self, dt_sec: f32) -> bool {
        if !self.auto_rotate || self.drag_from.is_some() || dt_sec <= 0.0 {
            return false;
        }
        // One full turn per 60 / speed seconds.
        self.azimuth -= TAU / 60.0 * ORBIT_AUTO_ROTATE_SPEED * dt_sec;
        self.azimuth = self.azimuth.rem_euclid(TAU);
        true
    }

    fn clamp_polar(&mut self) {
        let lo = self.min_polar.max(ORBIT_POLAR_EPSILON);
        let hi = self.max_polar.min(PI - ORBIT_POLAR_EPSILON);
        self.polar = self.polar.clamp(lo, hi.max(lo));
    }
}
