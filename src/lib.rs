#![cfg(target_arch = "wasm32")]
use crate::constants::{CONTACT_FORM_ID, ICON_ATTR, MODEL_ATTR, SCENE_ATTR};
use crate::core::config::{EmailConfig, Recipient};
use crate::core::SceneKind;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod mount;
mod net;
mod overlay;
mod render;
mod resize;

use contact::{ContactMount, EmailJs};
use mount::SceneMount;

// Mounts made by `start`; JS-created handles own theirs.
thread_local! {
    static SCENES: RefCell<Vec<SceneMount>> = const { RefCell::new(Vec::new()) };
    static CONTACT: RefCell<Option<ContactMount>> = const { RefCell::new(None) };
}

fn js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvases = document
        .query_selector_all(&format!("canvas[{}]", SCENE_ATTR))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..canvases.length() {
        let Some(canvas) = canvases
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            continue;
        };
        match mount_canvas(&window, &document, canvas) {
            Ok(scene) => SCENES.with(|s| s.borrow_mut().push(scene)),
            // One broken canvas must not take the rest of the page down.
            Err(e) => log::error!("[scene] mount failed: {:#}", e),
        }
    }

    if let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        let transport = EmailJs::new(EmailConfig::from_build_env());
        let mount = ContactMount::mount(&document, form, transport, Recipient::from_build_env())?;
        CONTACT.with(|c| *c.borrow_mut() = Some(mount));
    }
    Ok(())
}

fn mount_canvas(
    window: &web::Window,
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
) -> anyhow::Result<SceneMount> {
    let attr = canvas.get_attribute(SCENE_ATTR).unwrap_or_default();
    let kind = SceneKind::from_attr(&attr)
        .ok_or_else(|| anyhow::anyhow!("#{}: unknown scene `{}`", canvas.id(), attr))?;
    let asset_url = match kind {
        SceneKind::Ball => canvas.get_attribute(ICON_ATTR),
        _ => canvas.get_attribute(MODEL_ATTR),
    };
    SceneMount::mount(window, document, canvas, kind, asset_url)
}

/// A scene mounted from JS. Dropping or unmounting it releases every
/// listener and frame it holds.
#[wasm_bindgen]
pub struct SceneHandle {
    inner: Option<SceneMount>,
}

#[wasm_bindgen]
impl SceneHandle {
    #[wasm_bindgen(getter, js_name = "sizeClass")]
    pub fn size_class(&self) -> Option<String> {
        self.inner.as_ref().map(|m| m.size_class().label().to_string())
    }

    #[wasm_bindgen(getter, js_name = "canvasId")]
    pub fn canvas_id(&self) -> Option<String> {
        self.inner.as_ref().map(SceneMount::canvas_id)
    }

    pub fn redraw(&self) {
        if let Some(m) = &self.inner {
            m.invalidate();
        }
    }

    pub fn unmount(&mut self) {
        self.inner.take();
    }
}

#[wasm_bindgen(js_name = "mountScene")]
pub fn mount_scene(canvas_id: &str) -> Result<SceneHandle, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", canvas_id)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))?;
    let mount = mount_canvas(&window, &document, canvas).map_err(js_error)?;
    Ok(SceneHandle { inner: Some(mount) })
}

/// Tear down everything `start` mounted.
#[wasm_bindgen(js_name = "unmountAll")]
pub fn unmount_all() {
    let scenes = SCENES.with(|s| std::mem::take(&mut *s.borrow_mut()));
    let count = scenes.len();
    drop(scenes);
    let form = CONTACT.with(|c| c.borrow_mut().take());
    if let Some(form) = &form {
        if form.is_sending() {
            log::info!("[contact] unmounting with a send in flight; its reply is dropped");
        }
    }
    drop(form);
    log::info!("unmounted {} scene(s)", count);
}
