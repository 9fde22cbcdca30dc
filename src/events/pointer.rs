use crate::dom::{AnimationFrame, Listener};
use crate::frame::SceneInstance;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

/// Drag-to-orbit on a scene canvas. Drags start on the canvas and are
/// tracked on the window so releasing outside still ends them.
pub fn wire_orbit_controls(
    canvas: &web::HtmlCanvasElement,
    window: &web::Window,
    instance: Weak<RefCell<SceneInstance>>,
    redraw: Weak<AnimationFrame>,
) -> anyhow::Result<Vec<Listener<web::PointerEvent>>> {
    let mut listeners = Vec::with_capacity(4);

    let down_instance = instance.clone();
    let down_canvas = canvas.clone();
    listeners.push(Listener::new(
        canvas,
        "pointerdown",
        move |ev: web::PointerEvent| {
            let Some(inst) = down_instance.upgrade() else {
                return;
            };
            inst.borrow_mut()
                .orbit
                .begin_drag(ev.client_x() as f32, ev.client_y() as f32);
            _ = down_canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        },
    )?);

    let move_instance = instance.clone();
    let move_canvas = canvas.clone();
    listeners.push(Listener::new(
        window,
        "pointermove",
        move |ev: web::PointerEvent| {
            let Some(inst) = move_instance.upgrade() else {
                return;
            };
            let moved = {
                let mut inst = inst.borrow_mut();
                if !inst.orbit.is_dragging() {
                    return;
                }
                // Layout is only read while a drag is in progress.
                let height = move_canvas.get_bounding_client_rect().height() as f32;
                let moved =
                    inst.orbit
                        .drag_to(ev.client_x() as f32, ev.client_y() as f32, height);
                if moved {
                    inst.stage.invalidate();
                }
                moved
            };
            if moved {
                if let Some(frame) = redraw.upgrade() {
                    frame.request();
                }
            }
        },
    )?);

    for event in ["pointerup", "pointercancel"] {
        let up_instance = instance.clone();
        listeners.push(Listener::new(window, event, move |_ev: web::PointerEvent| {
            if let Some(inst) = up_instance.upgrade() {
                inst.borrow_mut().orbit.end_drag();
            }
        })?);
    }

    Ok(listeners)
}
