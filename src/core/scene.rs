use super::breakpoint::SizeClass;
use super::constants::{
    BALL_DECAL_HALF_SIZE, BALL_DECAL_MIN_DEPTH, BALL_DECAL_ROTATION, BALL_FLOAT_INTENSITY,
    BALL_FLOAT_ROTATION_INTENSITY, BALL_FLOAT_SPEED, BALL_SCALE, DPR_RANGE_DEFAULT,
    DPR_RANGE_MOBILE, STAR_GROUP_TILT_Z,
};
use super::float::FloatParams;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Which 3D scene a canvas hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Hero section desktop computer model.
    Desktop,
    /// Contact section planet, auto-rotating.
    Planet,
    /// Background star field.
    Stars,
    /// Floating technology icon ball.
    Ball,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::Desktop,
        SceneKind::Planet,
        SceneKind::Stars,
        SceneKind::Ball,
    ];

    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "desktop" | "computers" => Some(SceneKind::Desktop),
            "planet" | "earth" => Some(SceneKind::Planet),
            "stars" => Some(SceneKind::Stars),
            "ball" | "tech" => Some(SceneKind::Ball),
            _ => None,
        }
    }

    /// Default GLB location for scenes backed by a model file.
    pub fn default_model_url(self) -> Option<&'static str> {
        match self {
            SceneKind::Desktop => Some("./desktop_pc/scene.glb"),
            SceneKind::Planet => Some("./planet/scene.glb"),
            SceneKind::Stars | SceneKind::Ball => None,
        }
    }

    /// Whether the user can drag the camera around this scene.
    pub fn has_orbit_controls(self) -> bool {
        !matches!(self, SceneKind::Stars)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Hemisphere,
    Directional,
    Spot,
    Point,
}

impl LightKind {
    /// Tag written into the shader light table.
    pub fn shader_tag(self) -> f32 {
        match self {
            LightKind::Ambient => 0.0,
            LightKind::Hemisphere => 1.0,
            LightKind::Directional => 2.0,
            LightKind::Spot => 3.0,
            LightKind::Point => 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub name: &'static str,
    pub kind: LightKind,
    pub position: Vec3,
    pub intensity: f32,
}

/// Soft blob drawn under the model when shadows are enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactShadow {
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub blur: f32,
}

/// Texture projected onto the front of a model, in model space.
///
/// Covers `|x|, |y| <= half_size` on faces with `z >= min_depth`, rotated by
/// `rotation` radians around the projection axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecalProjection {
    pub half_size: f32,
    pub min_depth: f32,
    pub rotation: f32,
}

/// Immutable per-breakpoint scene configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub camera_position: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub model_scale: f32,
    pub model_position: Vec3,
    pub model_rotation: Vec3,
    pub lights: &'static [Light],
    pub shadows_enabled: bool,
    pub dpr_range: (f32, f32),
    pub auto_rotate: bool,
    pub polar_lock: Option<f32>,
    pub contact_shadow: Option<ContactShadow>,
    pub float: Option<FloatParams>,
    pub decal: Option<DecalProjection>,
}

impl SceneParams {
    /// Total lookup: every kind/class pair has exactly one record.
    pub fn lookup(kind: SceneKind, class: SizeClass) -> &'static SceneParams {
        match (kind, class) {
            (SceneKind::Desktop, SizeClass::Mobile) => &DESKTOP_MOBILE,
            (SceneKind::Desktop, SizeClass::Tablet) => &DESKTOP_TABLET,
            (SceneKind::Desktop, SizeClass::Large) => &DESKTOP_LARGE,
            (SceneKind::Planet, SizeClass::Mobile) => &PLANET_MOBILE,
            (SceneKind::Planet, SizeClass::Tablet) => &PLANET_TABLET,
            (SceneKind::Planet, SizeClass::Large) => &PLANET_LARGE,
            (SceneKind::Stars, SizeClass::Mobile) => &STARS_MOBILE,
            (SceneKind::Stars, SizeClass::Tablet | SizeClass::Large) => &STARS_DEFAULT,
            (SceneKind::Ball, SizeClass::Mobile) => &BALL_MOBILE,
            (SceneKind::Ball, SizeClass::Tablet | SizeClass::Large) => &BALL_DEFAULT,
        }
    }

    pub fn light_intensity(&self, name: &str) -> Option<f32> {
        self.lights
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.intensity)
    }

    /// Clamp a raw device pixel ratio into this record's range.
    pub fn clamp_dpr(&self, raw: f64) -> f32 {
        let (lo, hi) = self.dpr_range;
        if raw.is_finite() {
            (raw as f32).clamp(lo, hi)
        } else {
            lo
        }
    }

    /// Pixel size of the drawing buffer for a canvas of `css_width` x
    /// `css_height` at the given raw device pixel ratio. Never zero.
    pub fn backing_size(&self, css_width: f64, css_height: f64, raw_dpr: f64) -> (u32, u32) {
        let dpr = self.clamp_dpr(raw_dpr) as f64;
        let px = |css: f64| {
            if css.is_finite() && css > 0.0 {
                ((css * dpr) as u32).max(1)
            } else {
                1
            }
        };
        (px(css_width), px(css_height))
    }

    /// Shadows are only drawn when both the policy flag and a shadow shape exist.
    pub fn active_contact_shadow(&self) -> Option<ContactShadow> {
        self.contact_shadow.filter(|_| self.shadows_enabled)
    }
}

// ---------------- Desktop (hero) ----------------

const DESKTOP_LIGHTS: &[Light] = &[
    Light {
        name: "hemisphere",
        kind: LightKind::Hemisphere,
        position: Vec3::new(0.0, 1.0, 0.0),
        intensity: 0.2,
    },
    Light {
        name: "directional",
        kind: LightKind::Directional,
        position: Vec3::new(10.0, 10.0, 10.0),
        intensity: 1.2,
    },
    Light {
        name: "spot",
        kind: LightKind::Spot,
        position: Vec3::new(-20.0, 50.0, 10.0),
        intensity: 1.5,
    },
    Light {
        name: "point",
        kind: LightKind::Point,
        position: Vec3::new(0.0, 10.0, 0.0),
        intensity: 1.0,
    },
];

const DESKTOP_CONTACT_SHADOW: ContactShadow = ContactShadow {
    y: -3.25,
    opacity: 0.7,
    scale: 10.0,
    blur: 2.5,
};

const DESKTOP_ROTATION: Vec3 = Vec3::new(-0.01, -0.2, -0.1);

static DESKTOP_MOBILE: SceneParams = SceneParams {
    camera_position: Vec3::new(20.0, 3.0, 5.0),
    fov_degrees: 25.0,
    near: 0.1,
    far: 200.0,
    model_scale: 0.7,
    model_position: Vec3::new(0.0, -3.0, -2.2),
    model_rotation: DESKTOP_ROTATION,
    lights: DESKTOP_LIGHTS,
    shadows_enabled: false,
    dpr_range: DPR_RANGE_MOBILE,
    auto_rotate: false,
    polar_lock: Some(FRAC_PI_2),
    contact_shadow: Some(DESKTOP_CONTACT_SHADOW),
    float: None,
    decal: None,
};

static DESKTOP_TABLET: SceneParams = SceneParams {
    camera_position: Vec3::new(20.0, 3.0, 5.0),
    fov_degrees: 25.0,
    near: 0.1,
    far: 200.0,
    model_scale: 0.75,
    model_position: Vec3::new(0.0, -3.25, -1.5),
    model_rotation: DESKTOP_ROTATION,
    lights: DESKTOP_LIGHTS,
    shadows_enabled: true,
    dpr_range: DPR_RANGE_DEFAULT,
    auto_rotate: false,
    polar_lock: Some(FRAC_PI_2),
    contact_shadow: Some(DESKTOP_CONTACT_SHADOW),
    float: None,
    decal: None,
};

static DESKTOP_LARGE: SceneParams = SceneParams {
    camera_position: Vec3::new(20.0, 3.0, 5.0),
    fov_degrees: 25.0,
    near: 0.1,
    far: 200.0,
    model_scale: 0.75,
    model_position: Vec3::new(0.0, -3.25, -1.5),
    model_rotation: DESKTOP_ROTATION,
    lights: DESKTOP_LIGHTS,
    shadows_enabled: true,
    dpr_range: DPR_RANGE_DEFAULT,
    auto_rotate: false,
    polar_lock: Some(FRAC_PI_2),
    contact_shadow: Some(DESKTOP_CONTACT_SHADOW),
    float: None,
    decal: None,
};

// ---------------- Planet (contact) ----------------

const PLANET_LIGHTS: &[Light] = &[
    Light {
        name: "ambient",
        kind: LightKind::Ambient,
        position: Vec3::ZERO,
        intensity: 0.6,
    },
    Light {
        name: "directional",
        kind: LightKind::Directional,
        position: Vec3::new(-4.0, 3.0, 6.0),
        intensity: 1.0,
    },
];

static PLANET_MOBILE: SceneParams = SceneParams {
    camera_position: Vec3::new(-2.0, 1.5, 4.0),
    fov_degrees: 55.0,
    near: 0.1,
    far: 200.0,
    model_scale: 2.5,
    model_position: Vec3::ZERO,
    model_rotation: Vec3::ZERO,
    lights: PLANET_LIGHTS,
    shadows_enabled: false,
    dpr_range: DPR_RANGE_MOBILE,
    auto_rotate: true,
    polar_lock: Some(FRAC_PI_2),
    contact_shadow: None,
    float: None,
    decal: None,
};

static PLANET_TABLET: SceneParams = SceneParams {
    camera_position: Vec3::new(-3.0, 2.0, 5.0),
    fov_degrees: 50.0,
    near: 0.1,
    far: 200.0,
    model_scale: 2.5,
    model_position: Vec3::ZERO,
    model_rotation: Vec3::ZERO,
    lights: PLANET_LIGHTS,
    shadows_enabled: true,
    dpr_range: DPR_RANGE_DEFAULT,
    auto_rotate: true,
    polar_lock: Some(FRAC_PI_2),
    contact_shadow: None,
    float: None,
    decal: None,
};

static PLANET_LARGE: SceneParams = SceneParams {
    camera_position: Vec3::new(-4.0, 3.0, 6.0),
    fov_degrees: 45.0,
    near: 0.1,
    far: 200.0,
    model_scale: 2.5,
    model_position: Vec3::ZERO,
    model_rotation: Vec3::ZERO,
    lights: PLANET_LIGHTS,
    shadows_enabled: true,
    dpr_range: DPR_RANGE_DEFAULT,
    auto_rotate: true,
    polar_lock: Some(FRAC_PI_2),
    contact_shadow: None,
    float: None,
    decal: None,
};

// ---------------- Stars (background) ----------------

static STARS_MOBILE: SceneParams = SceneParams {
    camera_position: Vec3::new(0.0, 0.0, 1.0),
    fov_degrees: 75.0,
    near: 0.1,
    far: 1000.0,
    model_scale: 1.0,
    model_position: Vec3::ZERO,
    model_rotation: Vec3::new(0.0, 0.0, STAR_GROUP_TILT_Z),
    lights: &[],
    shadows_enabled: false,
    dpr_range: DPR_RANGE_MOBILE,
    auto_rotate: false,
    polar_lock: None,
    contact_shadow: None,
    float: None,
    decal: None,
};

static STARS_DEFAULT: SceneParams = SceneParams {
    camera_position: Vec3::new(0.0, 0.0, 1.0),
    fov_degrees: 75.0,
    near: 0.1,
    far: 1000.0,
    model_scale: 1.0,
    model_position: Vec3::ZERO,
    model_rotation: Vec3::new(0.0, 0.0, STAR_GROUP_TILT_Z),
    lights: &[],
    shadows_enabled: false,
    dpr_range: DPR_RANGE_DEFAULT,
    auto_rotate: false,
    polar_lock: None,
    contact_shadow: None,
    float: None,
    decal: None,
};

// ---------------- Ball (tech icons) ----------------

const BALL_LIGHTS: &[Light] = &[
    Light {
        name: "ambient",
        kind: LightKind::Ambient,
        position: Vec3::ZERO,
        intensity: 0.15,
    },
    Light {
        name: "directional",
        kind: LightKind::Directional,
        position: Vec3::new(0.0, 0.0, 0.05),
        intensity: 0.8,
    },
];

const BALL_FLOAT: FloatParams = FloatParams {
    speed: BALL_FLOAT_SPEED,
    rotation_intensity: BALL_FLOAT_ROTATION_INTENSITY,
    float_intensity: BALL_FLOAT_INTENSITY,
};

const BALL_DECAL: DecalProjection = DecalProjection {
    half_size: BALL_DECAL_HALF_SIZE,
    min_depth: BALL_DECAL_MIN_DEPTH,
    rotation: BALL_DECAL_ROTATION,
};

static BALL_MOBILE: SceneParams = SceneParams {
    camera_position: Vec3::new(0.0, 0.0, 5.0),
    fov_degrees: 75.0,
    near: 0.1,
    far: 1000.0,
    model_scale: BALL_SCALE,
    model_position: Vec3::ZERO,
    model_rotation: Vec3::ZERO,
    lights: BALL_LIGHTS,
    shadows_enabled: false,
    dpr_range: DPR_RANGE_MOBILE,
    auto_rotate: false,
    polar_lock: None,
    contact_shadow: None,
    float: Some(BALL_FLOAT),
    decal: Some(BALL_DECAL),
};

static BALL_DEFAULT: SceneParams = SceneParams {
    camera_position: Vec3::new(0.0, 0.0, 5.0),
    fov_degrees: 75.0,
    near: 0.1,
    far: 1000.0,
    model_scale: BALL_SCALE,
    model_position: Vec3::ZERO,
    model_rotation: Vec3::ZERO,
    lights: BALL_LIGHTS,
    shadows_enabled: false,
    dpr_range: DPR_RANGE_DEFAULT,
    auto_rotate: false,
    polar_lock: None,
    contact_shadow: None,
    float: Some(BALL_FLOAT),
    decal: Some(BALL_DECAL),
};
