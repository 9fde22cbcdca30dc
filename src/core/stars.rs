use super::constants::{STAR_COUNT, STAR_RADIUS, STAR_SPIN_X_DIVISOR, STAR_SPIN_Y_DIVISOR};
use rand::Rng;

/// Background star field: flat xyz positions plus the group's spin.
#[derive(Clone, Debug)]
pub struct StarField {
    positions: Vec<f32>,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl StarField {
    /// Uniformly sample `STAR_COUNT` points inside a sphere of `STAR_RADIUS`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(STAR_COUNT * 3);
        for _ in 0..STAR_COUNT {
            let p = sample_in_sphere(rng, STAR_RADIUS);
            positions.extend_from_slice(&p);
        }
        Self::from_positions(positions)
    }

    /// Build from raw positions, sanitizing and padding to `STAR_COUNT * 3`.
    pub fn from_positions(mut positions: Vec<f32>) -> Self {
        positions.resize(STAR_COUNT * 3, 0.0);
        let replaced = sanitize(&mut positions);
        if replaced > 0 {
            log::warn!("[stars] replaced {} non-finite position values", replaced);
        }
        Self {
            positions,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Spin the field by one frame's delta time (seconds).
    pub fn advance(&mut self, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        self.rotation_x -= dt_sec / STAR_SPIN_X_DIVISOR;
        self.rotation_y -= dt_sec / STAR_SPIN_Y_DIVISOR;
    }
}

/// Replace every non-finite value with 0. Returns how many were replaced.
pub fn sanitize(values: &mut [f32]) -> usize {
    let mut replaced = 0;
    for (i, v) in values.iter_mut().enumerate() {
        if !v.is_finite() {
            log::warn!("[stars] invalid position value at index {}: {}", i, v);
            *v = 0.0;
            replaced += 1;
        }
    }
    replaced
}

fn sample_in_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> [f32; 3] {
    loop {
        let x: f32 = rng.gen_range(-1.0..=1.0);
        let y: f32 = rng.gen_range(-1.0..=1.0);
        let z: f32 = rng.gen_range(-1.0..=1.0);
        if x * x + y * y + z * z <= 1.0 {
            return [x * radius, y * radius, z * radius];
        }
    }
}
