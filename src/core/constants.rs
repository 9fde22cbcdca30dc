// Shared tuning constants for the pure core. Kept free of platform types so
// host-side tests can include this file directly.

// Breakpoints (CSS pixels, inclusive upper bounds)
pub const MOBILE_MAX_WIDTH: f64 = 500.0;
pub const TABLET_MAX_WIDTH: f64 = 900.0;

// Device pixel ratio clamps
pub const DPR_RANGE_MOBILE: (f32, f32) = (1.0, 1.5);
pub const DPR_RANGE_DEFAULT: (f32, f32) = (1.0, 2.0);

// Star field
pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f32 = 1.2;
pub const STAR_SPIN_X_DIVISOR: f32 = 10.0; // rotation.x -= dt / 10
pub const STAR_SPIN_Y_DIVISOR: f32 = 15.0; // rotation.y -= dt / 15
pub const STAR_GROUP_TILT_Z: f32 = std::f32::consts::FRAC_PI_4;
pub const STAR_COLOR: [f32; 3] = [0.949, 0.447, 0.784]; // #f272c8

// Tech icon ball
pub const BALL_SCALE: f32 = 2.75;
pub const BALL_DETAIL: u32 = 1;
pub const BALL_COLOR: [f32; 4] = [1.0, 0.939, 0.831, 1.0]; // #fff8eb, linear
pub const BALL_FLOAT_SPEED: f32 = 1.75;
pub const BALL_FLOAT_ROTATION_INTENSITY: f32 = 1.0;
pub const BALL_FLOAT_INTENSITY: f32 = 2.0;
pub const BALL_DECAL_HALF_SIZE: f32 = 0.5;
pub const BALL_DECAL_MIN_DEPTH: f32 = 0.5;
pub const BALL_DECAL_ROTATION: f32 = 6.25;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 2.0; // 30s per turn at 60fps
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Contact form copy
pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you! I will get back to you as soon as possible.";
pub const CONTACT_FAILURE_MESSAGE: &str = "Ahh, something went wrong. Please try again.";
pub const SUBMIT_LABEL_IDLE: &str = "Send";
pub const SUBMIT_LABEL_SENDING: &str = "Sending...";

// Email recipient fallbacks when the build does not override them
pub const DEFAULT_OWNER_NAME: &str = "Vincent";
pub const DEFAULT_OWNER_EMAIL: &str = "hello@example.com";
