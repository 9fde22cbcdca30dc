use super::helpers;
use crate::constants::DEPTH_FORMAT;

/// Depth buffer sized to the surface. Recreated on resize.
pub(crate) struct DepthTarget {
    // kept alive for the view
    _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_depth_texture(device, "depth", width, height, DEPTH_FORMAT);
        Self { _tex: tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
