use crate::core::float::FloatPose;
use crate::core::scene::SceneParams;
use glam::{EulerRot, Mat4, Vec3};

/// Perspective projection for a scene record at the given aspect ratio.
#[inline]
pub fn projection(params: &SceneParams, aspect: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    Mat4::perspective_rh(params.fov_degrees.to_radians(), aspect, params.near, params.far)
}

#[inline]
pub fn view(eye: Vec3, target: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, Vec3::Y)
}

/// Model transform: translate * rotate(X, then Y, then Z) * uniform scale.
pub fn model(params: &SceneParams) -> Mat4 {
    model_with_spin(params, 0.0, 0.0)
}

/// Model transform with an extra spin applied inside the group rotation
/// (used by the star field).
pub fn model_with_spin(params: &SceneParams, spin_x: f32, spin_y: f32) -> Mat4 {
    let r = params.model_rotation;
    let group = Mat4::from_translation(params.model_position)
        * Mat4::from_rotation_x(r.x)
        * Mat4::from_rotation_y(r.y)
        * Mat4::from_rotation_z(r.z);
    let spin = Mat4::from_rotation_x(spin_x) * Mat4::from_rotation_y(spin_y);
    group * spin * Mat4::from_scale(Vec3::splat(params.model_scale))
}

/// Model transform wrapped in a floating group: lifted along Y and wobbled
/// by the pose's XYZ euler rotation.
pub fn model_floating(params: &SceneParams, pose: FloatPose) -> Mat4 {
    let r = pose.rotation;
    Mat4::from_translation(Vec3::Y * pose.lift)
        * Mat4::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
        * model(params)
}

/// Combined clip-from-world matrix.
pub fn view_projection(params: &SceneParams, eye: Vec3, target: Vec3, aspect: f32) -> Mat4 {
    projection(params, aspect) * view(eye, target)
}
