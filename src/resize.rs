use crate::core::breakpoint::SizeClass;
use crate::core::resize::{Notify, ResizeState};
use crate::dom::{self, AnimationFrame, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window resize subscription owned by one mounted scene.
///
/// Bursts of native `resize` events collapse into one classification pass
/// on the next animation frame. Dropping the listener unsubscribes, cancels
/// any pending frame and detaches the state so late callbacks are no-ops.
pub struct ResizeListener {
    state: Rc<RefCell<ResizeState>>,
    frame: Rc<AnimationFrame>,
    // Held for its Drop (removes the window listener).
    _subscription: Listener<web::Event>,
}

impl ResizeListener {
    /// `on_resize` runs once per coalesced pass with the new size class, or
    /// `None` when the class held. The canvas may still have changed size
    /// within its class, so callers re-check their backing store either way.
    pub fn new(
        window: &web::Window,
        mut on_resize: impl FnMut(Option<SizeClass>) + 'static,
    ) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(ResizeState::new(dom::viewport_width())));

        let state_frame = state.clone();
        let frame = Rc::new(AnimationFrame::new(move |_ts| {
            let changed = {
                let mut state = state_frame.borrow_mut();
                if state.is_detached() {
                    return false;
                }
                state.on_frame(dom::viewport_width())
            };
            if let Some(class) = changed {
                log::info!("[resize] size class -> {}", class.label());
            }
            on_resize(changed);
            false
        }));

        let state_event = state.clone();
        let frame_event = frame.clone();
        let subscription = Listener::new(window, "resize", move |_ev: web::Event| {
            let notify = state_event.borrow_mut().notify();
            if notify == Notify::Schedule {
                frame_event.request();
            }
        })?;

        Ok(Self {
            state,
            frame,
            _subscription: subscription,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let was_pending = self.state.borrow_mut().detach();
        self.frame.cancel();
        log::debug!("[resize] listener released (frame pending: {})", was_pending);
    }
}
