/// Web-side rendering and DOM constants.
///
/// Platform-independent tuning (breakpoints, star field, orbit speeds) lives
/// in `core::constants`; this file only holds values the wasm layer needs.
// Renderer limits
pub const MAX_LIGHTS: usize = 4;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Clear to transparent so the page background shows through the canvases
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;

// Material response
pub const SPECULAR_STRENGTH: f32 = 0.25;
pub const SHININESS: f32 = 24.0;

// Star points
pub const STAR_ALPHA: f32 = 0.85;

// Frame pacing: clamp huge gaps (tab switches) so animations don't jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// DOM contract
pub const SCENE_ATTR: &str = "data-scene";
pub const MODEL_ATTR: &str = "data-model";
pub const ICON_ATTR: &str = "data-icon";
pub const LOADER_SUFFIX: &str = "-loader";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";

// EmailJS REST endpoint
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
