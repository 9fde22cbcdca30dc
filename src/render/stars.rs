use super::helpers::{self, UniformBinding};
use crate::constants::{DEPTH_FORMAT, STAR_ALPHA};
use crate::core::constants::STAR_COLOR;
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl StarUniforms {
    pub(crate) fn new(mvp: Mat4) -> Self {
        // premultiplied for the canvas alpha mode
        let [r, g, b] = STAR_COLOR;
        Self {
            mvp: mvp.to_cols_array_2d(),
            color: [r * STAR_ALPHA, g * STAR_ALPHA, b * STAR_ALPHA, STAR_ALPHA],
        }
    }
}

/// GPU-resident star points, the ready handle for the star scene.
pub struct GpuPoints {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) count: u32,
}

pub(crate) struct StarResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: UniformBinding,
}

const POINT_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) fn create_star_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> StarResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
    });
    let uniforms = helpers::create_uniform_binding(
        device,
        "star_uniforms",
        std::mem::size_of::<StarUniforms>() as u64,
        wgpu::ShaderStages::VERTEX_FRAGMENT,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pl"),
        bind_group_layouts: &[&uniforms.layout],
        push_constant_ranges: &[],
    });
    let layout = wgpu::VertexBufferLayout {
        array_stride: (std::mem::size_of::<f32>() * 3) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POINT_ATTRS,
    };
    // depthWrite off, as with transparent point materials
    let pipeline = helpers::make_pipeline(
        device,
        "stars_pipeline",
        &pl,
        &shader,
        "vs_main",
        "fs_main",
        &[layout],
        wgpu::PrimitiveTopology::PointList,
        color_format,
        Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
        Some(helpers::depth_state(DEPTH_FORMAT, false)),
    );
    StarResources { pipeline, uniforms }
}

pub(crate) fn upload_points(device: &wgpu::Device, positions: &[f32]) -> GpuPoints {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_points"),
        contents: bytemuck::cast_slice(positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    GpuPoints {
        vertex_buffer,
        count: (positions.len() / 3) as u32,
    }
}
