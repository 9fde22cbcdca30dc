pub mod breakpoint;
pub mod config;
pub mod constants;
pub mod contact;
pub mod float;
pub mod model;
pub mod orbit;
pub mod resize;
pub mod scene;
pub mod stage;
pub mod stars;

pub use breakpoint::{classify, SizeClass};
pub use scene::{SceneKind, SceneParams};

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
