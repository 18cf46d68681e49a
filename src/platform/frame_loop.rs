//! One `requestAnimationFrame` loop per canvas
//!
//! The loop closure re-requests itself every frame. It holds a reference to
//! its own slot, so it lives until `FrameHandle::stop` empties that slot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::CanvasPainter;
use crate::scene::Scene;
use crate::stage::LoopHandle;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops a running frame loop
pub struct FrameHandle {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl LoopHandle for FrameHandle {
    fn stop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Drop the closure (and the scene it owns)
        self.callback.borrow_mut().take();
    }
}

/// Drive `scene` into `painter` once per display refresh
pub fn start(mut scene: Box<dyn Scene>, mut painter: CanvasPainter) -> Result<FrameHandle, JsValue> {
    let window = web_sys::window().ok_or("no window")?;

    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let callback: FrameCallback = Rc::new(RefCell::new(None));

    {
        let running = running.clone();
        let pending = pending.clone();
        let slot = callback.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            pending.set(None);
            if !running.get() {
                return;
            }

            scene.frame(&mut painter);

            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(next) = slot.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    pending.set(Some(id));
                }
            }
        }));
    }

    if let Some(first) = callback.borrow().as_ref() {
        pending.set(Some(window.request_animation_frame(first.as_ref().unchecked_ref())?));
    }

    Ok(FrameHandle {
        running,
        pending,
        callback,
    })
}
