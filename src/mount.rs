use crate::core::constants::{BALL_COLOR, BALL_DETAIL};
use crate::core::model::{DecalImage, MeshData};
use crate::core::scene::SceneKind;
use crate::dom::{AnimationFrame, Listener};
use crate::events;
use crate::frame::SceneInstance;
use crate::net;
use crate::overlay;
use crate::render::GpuState;
use crate::resize::ResizeListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A live scene on one canvas.
///
/// Owns every subscription the scene made. Dropping the mount releases the
/// resize listener, the pointer listeners and the redraw slot; the async
/// loader only holds weak references and gives up once they stop upgrading.
pub struct SceneMount {
    instance: Rc<RefCell<SceneInstance>>,
    redraw: Rc<AnimationFrame>,
    _resize: ResizeListener,
    _pointer: Vec<Listener<web::PointerEvent>>,
}

impl SceneMount {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
        kind: SceneKind,
        asset_url: Option<String>,
    ) -> anyhow::Result<Self> {
        let canvas_id = canvas.id();
        let initial = crate::core::classify(crate::dom::viewport_width());
        let instance = Rc::new(RefCell::new(SceneInstance::new(
            canvas_id.clone(),
            canvas.clone(),
            document.clone(),
            kind,
            initial,
        )));

        let weak_tick = Rc::downgrade(&instance);
        let redraw = Rc::new(AnimationFrame::new(move |_ts| {
            let Some(inst) = weak_tick.upgrade() else {
                return false;
            };
            let Ok(mut inst) = inst.try_borrow_mut() else {
                // Busy elsewhere; try again next frame.
                return true;
            };
            inst.frame()
        }));

        let weak_resize = Rc::downgrade(&instance);
        let redraw_resize = Rc::downgrade(&redraw);
        let resize = ResizeListener::new(window, move |class| {
            let Some(inst) = weak_resize.upgrade() else {
                return;
            };
            if inst.borrow_mut().on_resize(class) {
                if let Some(frame) = redraw_resize.upgrade() {
                    frame.request();
                }
            }
        })?;

        let pointer = if kind.has_orbit_controls() {
            events::wire_orbit_controls(
                &canvas,
                window,
                Rc::downgrade(&instance),
                Rc::downgrade(&redraw),
            )?
        } else {
            Vec::new()
        };

        let url = asset_url.or_else(|| kind.default_model_url().map(str::to_string));
        let weak_load = Rc::downgrade(&instance);
        let redraw_load = Rc::downgrade(&redraw);
        spawn_local(async move {
            if let Err(e) = load(canvas, kind, url, &weak_load, &redraw_load).await {
                log::error!("[scene] {} failed to load: {:#}", canvas_id, e);
                if let Some(inst) = weak_load.upgrade() {
                    let inst = inst.borrow();
                    overlay::mark_loader_failed(&inst.document, &inst.canvas_id);
                }
            }
        });

        log::info!("[scene] mounted {:?} at {}", kind, initial.label());
        Ok(Self {
            instance,
            redraw,
            _resize: resize,
            _pointer: pointer,
        })
    }

    pub fn size_class(&self) -> crate::core::SizeClass {
        self.instance.borrow().stage.size_class()
    }

    pub fn canvas_id(&self) -> String {
        self.instance.borrow().canvas_id.clone()
    }

    /// Ask for a redraw on the next animation frame.
    pub fn invalidate(&self) {
        self.instance.borrow_mut().stage.invalidate();
        self.redraw.request();
    }
}

impl Drop for SceneMount {
    fn drop(&mut self) {
        if let Ok(inst) = self.instance.try_borrow() {
            log::info!("[scene] unmounted {}", inst.canvas_id);
        }
    }
}

async fn load(
    canvas: web::HtmlCanvasElement,
    kind: SceneKind,
    url: Option<String>,
    instance: &Weak<RefCell<SceneInstance>>,
    redraw: &Weak<AnimationFrame>,
) -> anyhow::Result<()> {
    let gpu = GpuState::new(&canvas).await?;
    {
        let Some(inst) = instance.upgrade() else {
            return Ok(());
        };
        let mut inst = inst.borrow_mut();
        inst.gpu = Some(gpu);
        inst.sync_backing_size();
        inst.stage.invalidate();
    }
    request(redraw);

    let (mesh, decal) = match (kind, url) {
        (SceneKind::Stars, _) => (None, None),
        (SceneKind::Ball, url) => {
            let decal = match url {
                Some(url) => Some(DecalImage::decode(&net::fetch_bytes(&url).await?)?),
                None => {
                    log::warn!("[asset] ball without an icon; drawing it plain");
                    None
                }
            };
            (Some(MeshData::icosahedron(BALL_DETAIL, BALL_COLOR)), decal)
        }
        (_, Some(url)) => {
            let bytes = net::fetch_bytes(&url).await?;
            let data = MeshData::from_glb(&bytes)?;
            if let Some((lo, hi)) = data.bounds() {
                log::info!("[asset] {} bounds {:?}..{:?}", url, lo, hi);
            }
            (Some(data), None)
        }
        (_, None) => anyhow::bail!("no model url for {:?}", kind),
    };

    let Some(inst) = instance.upgrade() else {
        return Ok(());
    };
    let mut inst = inst.borrow_mut();
    let asset = {
        let gpu = inst
            .gpu
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("renderer went away"))?;
        match &mesh {
            Some(data) => gpu.upload_mesh(data, decal.as_ref()),
            None => {
                let positions = inst
                    .stars
                    .as_ref()
                    .map(|s| s.positions())
                    .unwrap_or(&[]);
                gpu.upload_points(positions)
            }
        }
    };
    inst.set_ready(asset);
    drop(inst);
    request(redraw);
    Ok(())
}

#[inline]
fn request(redraw: &Weak<AnimationFrame>) {
    if let Some(frame) = redraw.upgrade() {
        frame.request();
    }
}
