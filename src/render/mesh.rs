use super::helpers::{self, UniformBinding};
use crate::camera;
use crate::constants::{DEPTH_FORMAT, MAX_LIGHTS, SHININESS, SPECULAR_STRENGTH};
use crate::core::model::{DecalImage, MeshData, MeshVertex};
use crate::core::scene::SceneParams;
use glam::{Mat3, Mat4, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    pub(crate) pos_kind: [f32; 4],
    pub(crate) intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal_mat: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) light_count: [f32; 4],
    pub(crate) lights: [LightPacked; MAX_LIGHTS],
    pub(crate) shadow: [f32; 4],
    pub(crate) shadow_center: [f32; 4],
    pub(crate) material: [f32; 4],
    pub(crate) decal: [f32; 4],
}

impl MeshUniforms {
    pub(crate) fn new(
        params: &SceneParams,
        model: Mat4,
        eye: Vec3,
        target: Vec3,
        aspect: f32,
        has_decal: bool,
    ) -> Self {
        let normal_mat = Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose());
        let mut lights = [LightPacked::default(); MAX_LIGHTS];
        let count = params.lights.len().min(MAX_LIGHTS);
        for (slot, light) in lights.iter_mut().zip(params.lights.iter()) {
            slot.pos_kind = light.position.extend(light.kind.shader_tag()).to_array();
            slot.intensity = [light.intensity, 0.0, 0.0, 0.0];
        }
        let shadow = params
            .active_contact_shadow()
            .map(|s| [s.y, s.opacity, s.scale, s.blur])
            .unwrap_or([0.0; 4]);
        Self {
            view_proj: camera::view_projection(params, eye, target, aspect).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_mat: normal_mat.to_cols_array_2d(),
            eye: eye.extend(1.0).to_array(),
            light_count: [count as f32, 0.0, 0.0, 0.0],
            lights,
            shadow,
            shadow_center: [params.model_position.x, params.model_position.z, 0.0, 0.0],
            material: [SPECULAR_STRENGTH, SHININESS, 0.0, 0.0],
            decal: match params.decal {
                Some(d) if has_decal => [1.0, d.half_size, d.min_depth, d.rotation],
                _ => [0.0; 4],
            },
        }
    }
}

/// GPU-resident model, the ready handle for model scenes.
pub struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    /// Group 1: decal texture and sampler. Meshes without a decal bind a
    /// transparent 1x1 texture.
    pub(crate) decal: wgpu::BindGroup,
    pub(crate) has_decal: bool,
}

pub(crate) struct MeshResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) shadow_pipeline: wgpu::RenderPipeline,
    pub(crate) uniforms: UniformBinding,
    decal_layout: wgpu::BindGroupLayout,
    decal_sampler: wgpu::Sampler,
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4];

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
    });
    let uniforms = helpers::create_uniform_binding(
        device,
        "mesh_uniforms",
        std::mem::size_of::<MeshUniforms>() as u64,
        wgpu::ShaderStages::VERTEX_FRAGMENT,
    );
    let decal_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("decal_layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let decal_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("decal_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[&uniforms.layout, &decal_layout],
        push_constant_ranges: &[],
    });
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    };
    let pipeline = helpers::make_pipeline(
        device,
        "mesh_pipeline",
        &pl,
        &shader,
        "vs_main",
        "fs_main",
        &[vertex_layout],
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
        Some(wgpu::BlendState::REPLACE),
        Some(helpers::depth_state(DEPTH_FORMAT, true)),
    );
    // Shadow disc reads depth but never writes it.
    let shadow_pipeline = helpers::make_pipeline(
        device,
        "shadow_pipeline",
        &pl,
        &shader,
        "vs_shadow",
        "fs_shadow",
        &[],
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        Some(helpers::depth_state(DEPTH_FORMAT, false)),
    );
    MeshResources {
        pipeline,
        shadow_pipeline,
        uniforms,
        decal_layout,
        decal_sampler,
    }
}

pub(crate) fn upload_mesh(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    res: &MeshResources,
    data: &MeshData,
    decal: Option<&DecalImage>,
) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_vertices"),
        contents: bytemuck::cast_slice(&data.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mesh_indices"),
        contents: bytemuck::cast_slice(&data.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let texture = match decal {
        Some(img) if img.width > 0 && img.height > 0 => {
            upload_rgba(device, queue, img.width, img.height, &img.rgba)
        }
        _ => upload_rgba(device, queue, 1, 1, &[0, 0, 0, 0]),
    };
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let decal_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("decal_bg"),
        layout: &res.decal_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&res.decal_sampler),
            },
        ],
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: data.indices.len() as u32,
        decal: decal_group,
        has_decal: decal.is_some_and(|img| img.width > 0 && img.height > 0),
    }
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("decal_texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    tex
}
