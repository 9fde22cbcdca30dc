use crate::camera;
use crate::constants::CLEAR_COLOR;
use crate::core::model::{DecalImage, MeshData};
use crate::core::scene::SceneParams;
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod mesh;
mod stars;
mod targets;

pub use mesh::GpuMesh;
pub use stars::GpuPoints;
use targets::DepthTarget;

/// Asset handle held by a stage once loading finishes.
pub enum SceneAsset {
    Mesh(GpuMesh),
    Points(GpuPoints),
}

/// One frame's worth of draw input.
pub enum Draw<'a> {
    /// Asset still loading: clear and let the DOM loader show through.
    Clear,
    Scene {
        asset: &'a SceneAsset,
        params: &'a SceneParams,
        model: Mat4,
        eye: Vec3,
        target: Vec3,
    },
}

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    mesh: mesh::MeshResources,
    stars: stars::StarResources,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                // Portfolio canvases favour battery over throughput.
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let mesh = mesh::create_mesh_resources(&device, format);
        let stars = stars::create_star_resources(&device, format);
        log::info!("[render] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            mesh,
            stars,
            width,
            height,
        })
    }

    pub fn upload_mesh(&self, data: &MeshData, decal: Option<&DecalImage>) -> SceneAsset {
        SceneAsset::Mesh(mesh::upload_mesh(
            &self.device,
            &self.queue,
            &self.mesh,
            data,
            decal,
        ))
    }

    pub fn upload_points(&self, positions: &[f32]) -> SceneAsset {
        SceneAsset::Points(stars::upload_points(&self.device, positions))
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Re-apply the surface configuration after a lost/outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, draw: Draw<'_>) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Uniform writes must land before the pass that reads them.
        if let Draw::Scene {
            asset,
            params,
            model,
            eye,
            target,
        } = &draw
        {
            match asset {
                SceneAsset::Mesh(m) => {
                    let u = mesh::MeshUniforms::new(
                        params,
                        *model,
                        *eye,
                        *target,
                        self.aspect(),
                        m.has_decal,
                    );
                    self.queue
                        .write_buffer(&self.mesh.uniforms.buffer, 0, bytemuck::bytes_of(&u));
                }
                SceneAsset::Points(_) => {
                    let mvp =
                        camera::view_projection(params, *eye, *target, self.aspect()) * *model;
                    let u = stars::StarUniforms::new(mvp);
                    self.queue
                        .write_buffer(&self.stars.uniforms.buffer, 0, bytemuck::bytes_of(&u));
                }
            }
        }

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Draw::Scene { asset, params, .. } = &draw {
                match asset {
                    SceneAsset::Mesh(m) => {
                        rpass.set_bind_group(0, &self.mesh.uniforms.bind_group, &[]);
                        rpass.set_bind_group(1, &m.decal, &[]);
                        rpass.set_pipeline(&self.mesh.pipeline);
                        rpass.set_vertex_buffer(0, m.vertex_buffer.slice(..));
                        rpass.set_index_buffer(m.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                        rpass.draw_indexed(0..m.index_count, 0, 0..1);
                        if params.active_contact_shadow().is_some() {
                            rpass.set_pipeline(&self.mesh.shadow_pipeline);
                            rpass.draw(0..6, 0..1);
                        }
                    }
                    SceneAsset::Points(p) => {
                        rpass.set_bind_group(0, &self.stars.uniforms.bind_group, &[]);
                        rpass.set_pipeline(&self.stars.pipeline);
                        rpass.set_vertex_buffer(0, p.vertex_buffer.slice(..));
                        rpass.draw(0..p.count, 0..1);
                    }
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
