use crate::camera;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::breakpoint::SizeClass;
use crate::core::float::FloatMotion;
use crate::core::orbit::OrbitControls;
use crate::core::scene::SceneKind;
use crate::core::stage::{Frame, Stage};
use crate::core::stars::StarField;
use crate::dom;
use crate::overlay;
use crate::render::{Draw, GpuState, SceneAsset};
use glam::Vec3;
use instant::Instant;
use web_sys as web;

/// Everything one mounted canvas needs between frames.
pub struct SceneInstance {
    pub canvas_id: String,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub stage: Stage<SceneAsset>,
    pub gpu: Option<GpuState>,
    pub orbit: OrbitControls,
    pub stars: Option<StarField>,
    pub float: Option<FloatMotion>,
    pub last_instant: Instant,
    loader_visible: bool,
}

impl SceneInstance {
    pub fn new(
        canvas_id: String,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
        kind: SceneKind,
        class: SizeClass,
    ) -> Self {
        let stage = Stage::new(kind, class);
        let params = stage.params();
        let orbit = OrbitControls::new(
            params.camera_position,
            Vec3::ZERO,
            params.polar_lock,
            params.auto_rotate,
        );
        let stars = (kind == SceneKind::Stars).then(|| StarField::generate(&mut rand::thread_rng()));
        let float = params.float.map(|_| FloatMotion::new());
        overlay::show_loader(&document, &canvas_id);
        let mut instance = Self {
            canvas_id,
            canvas,
            document,
            stage,
            gpu: None,
            orbit,
            stars,
            float,
            last_instant: Instant::now(),
            loader_visible: true,
        };
        instance.sync_backing_size();
        instance
    }

    /// Handle one coalesced resize pass: apply the new class if there is
    /// one, then re-check the backing store. Returns whether a redraw is due.
    pub fn on_resize(&mut self, class: Option<SizeClass>) -> bool {
        let applied = class.is_some_and(|c| self.apply_size_class(c));
        let resized = self.sync_backing_size();
        applied || resized
    }

    /// Apply a new size class. Returns whether anything changed.
    pub fn apply_size_class(&mut self, class: SizeClass) -> bool {
        if !self.stage.set_size_class(class) {
            return false;
        }
        let params = self.stage.params();
        self.orbit.reset(params.camera_position);
        self.orbit.set_auto_rotate(params.auto_rotate);
        log::info!(
            "[scene] {} -> {} (fov {}, shadows {})",
            self.canvas_id,
            class.label(),
            params.fov_degrees,
            params.shadows_enabled
        );
        true
    }

    /// Match the canvas backing store to its CSS size under the current DPR
    /// policy. Returns true when the size moved, which also schedules a
    /// redraw on the stage.
    pub fn sync_backing_size(&mut self) -> bool {
        let (css_w, css_h) = dom::canvas_css_size(&self.canvas);
        let size = self
            .stage
            .params()
            .backing_size(css_w, css_h, dom::device_pixel_ratio());
        dom::set_canvas_backing_size(&self.canvas, size);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(size.0, size.1);
        }
        self.stage.set_backing_size(size)
    }

    pub fn set_ready(&mut self, asset: SceneAsset) {
        self.stage.mark_ready(asset);
        self.last_instant = Instant::now();
    }

    /// Produce a frame if one is due. Returns whether the loop should keep
    /// running without further invalidation.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        if self.stage.gate().is_ready() {
            if self.orbit.update(dt_sec) {
                self.stage.invalidate();
            }
            if let Some(stars) = &mut self.stars {
                stars.advance(dt_sec);
                self.stage.invalidate();
            }
            if let Some(float) = &mut self.float {
                if float.advance(dt_sec) {
                    self.stage.invalidate();
                }
            }
        }

        // Layout can change without a window resize (fonts, sibling content).
        self.sync_backing_size();
        if !self.stage.take_redraw() {
            return self.stage.wants_continuous();
        }

        let params = self.stage.params();
        let model = match (&self.stars, &self.float, &params.float) {
            (Some(stars), _, _) => {
                camera::model_with_spin(params, stars.rotation_x, stars.rotation_y)
            }
            (None, Some(motion), Some(float)) => {
                camera::model_floating(params, motion.pose(float))
            }
            _ => camera::model(params),
        };
        let eye = self.orbit.eye();
        let target = self.orbit.target();
        let ready = self.stage.gate().is_ready();

        let Some(gpu) = self.gpu.as_mut() else {
            // Renderer still initialising; it requests a frame once ready.
            return false;
        };
        let draw = match self.stage.frame() {
            Frame::Placeholder => Draw::Clear,
            Frame::Scene { params, asset } => Draw::Scene {
                asset,
                params,
                model,
                eye,
                target,
            },
        };
        match gpu.render(draw) {
            Ok(()) => {
                if ready && self.loader_visible {
                    overlay::hide_loader(&self.document, &self.canvas_id);
                    self.loader_visible = false;
                }
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                self.stage.invalidate();
                return true;
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
        self.stage.wants_continuous()
    }
}
