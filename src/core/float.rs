use glam::Vec3;

/// Idle bobbing applied around a model: a slow wobble plus a vertical lift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

/// Extra rotation (XYZ euler, radians) and vertical offset for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatPose {
    pub rotation: Vec3,
    pub lift: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FloatMotion {
    elapsed: f32,
}

impl FloatMotion {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns whether the pose changed.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return false;
        }
        self.elapsed += dt_sec;
        true
    }

    pub fn pose(&self, params: &FloatParams) -> FloatPose {
        let phase = self.elapsed / 4.0 * params.speed;
        let (sin, cos) = phase.sin_cos();
        FloatPose {
            rotation: Vec3::new(cos / 8.0, sin / 8.0, sin / 20.0) * params.rotation_intensity,
            lift: sin / 10.0 * params.float_intensity,
        }
    }
}
