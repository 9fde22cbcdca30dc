use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that unsubscribes itself when dropped.
pub struct Listener<E: FromWasmAbi + 'static> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(E)>,
}

impl<E: FromWasmAbi + 'static> Listener<E> {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl<E: FromWasmAbi + 'static> Drop for Listener<E> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A reusable `requestAnimationFrame` slot.
///
/// At most one frame is pending at a time; extra requests fold into it. The
/// tick returns whether another frame should follow. Dropping the slot
/// cancels the pending frame. The tick must not drop its own slot.
pub struct AnimationFrame {
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationFrame {
    pub fn new(mut tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending_cb = pending.clone();
        let weak_cb = Rc::downgrade(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            pending_cb.set(None);
            if tick(ts) {
                if let Some(cb) = weak_cb.upgrade() {
                    request(&pending_cb, &cb);
                }
            }
        }) as Box<dyn FnMut(f64)>));
        Self { pending, callback }
    }

    #[inline]
    pub fn request(&self) {
        request(&self.pending, &self.callback);
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        self.cancel();
        self.callback.borrow_mut().take();
    }
}

fn request(pending: &Cell<Option<i32>>, callback: &RefCell<Option<Closure<dyn FnMut(f64)>>>) {
    if pending.get().is_some() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// CSS layout size of a canvas.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width(), rect.height())
}

/// Write the drawing-buffer size, touching only the dimensions that differ.
pub fn set_canvas_backing_size(canvas: &web::HtmlCanvasElement, (w_px, h_px): (u32, u32)) {
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::NAN)
}
