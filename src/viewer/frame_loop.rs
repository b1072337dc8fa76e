//! requestAnimationFrame loop driving the player.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::player::SequencePlayer;
use crate::render::FrameSurface;
use crate::scroll::LayoutGeometry;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancels a running loop. Cancelling twice is harmless.
#[derive(Clone)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

fn schedule(callback: &FrameCallback, pending: &Cell<Option<i32>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(err) => tracing::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }
}

/// Tick `player` once per display frame until the driver stops or the handle
/// is cancelled.
pub fn start<S, G>(player: Rc<RefCell<SequencePlayer<S>>>, geometry: G) -> LoopHandle
where
    S: FrameSurface + 'static,
    G: LayoutGeometry + 'static,
{
    let handle = LoopHandle {
        cancelled: Rc::new(Cell::new(false)),
        pending: Rc::new(Cell::new(None)),
    };

    // The closure reschedules itself, so it needs a handle to its own slot.
    let slot: FrameCallback = Rc::new(RefCell::new(None));
    let self_ref = Rc::clone(&slot);
    let cancelled = Rc::clone(&handle.cancelled);
    let pending = Rc::clone(&handle.pending);

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending.set(None);
        if cancelled.get() {
            return;
        }
        let outcome = player.borrow_mut().tick(&geometry);
        if outcome.keep_running() {
            schedule(&self_ref, &pending);
        } else {
            tracing::debug!("animation loop ended: {outcome:?}");
        }
    }) as Box<dyn FnMut()>));

    schedule(&slot, &handle.pending);
    handle
}
