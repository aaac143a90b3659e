//! Platform abstraction layer
//!
//! Owns the animation loop handle. The loop is registered once and can be
//! cancelled exactly once; later cancels are no-ops, and a frame that was
//! already queued when cancel ran sees the flag and stops without ticking.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct LoopInner {
    cancelled: Cell<bool>,
    /// Id of the queued animation frame, if any
    pending: Cell<Option<i32>>,
    frames: Cell<u64>,
}

/// Shared handle to a per-frame loop
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Number of frames that ran
    pub fn frames(&self) -> u64 {
        self.inner.frames.get()
    }

    /// Called at the top of every frame; false means stop
    pub fn begin_frame(&self) -> bool {
        self.inner.pending.set(None);
        if self.is_cancelled() {
            return false;
        }
        self.inner.frames.set(self.inner.frames.get() + 1);
        true
    }

    /// Remember the id of the frame just queued
    pub fn set_pending(&self, id: i32) {
        self.inner.pending.set(Some(id));
    }

    /// Stop the loop. Returns true only for the call that actually cancelled.
    pub fn cancel(&self) -> bool {
        if self.inner.cancelled.replace(true) {
            return false;
        }
        if let Some(id) = self.inner.pending.take() {
            cancel_frame(id);
        }
        log::info!("Animation loop cancelled after {} frames", self.frames());
        true
    }

    /// Handle a `pagehide`. A page going into the back/forward cache
    /// (`persisted`) keeps its loop so it resumes on return; only a real
    /// unload cancels. Returns true when the loop was cancelled.
    pub fn on_page_hide(&self, persisted: bool) -> bool {
        if persisted {
            log::debug!("Page cached, animation loop kept");
            return false;
        }
        self.cancel()
    }
}

/// Queue `f` for the next animation frame and record it on the handle
#[cfg(target_arch = "wasm32")]
pub fn request_frame<F>(frame_loop: &FrameLoop, f: F)
where
    F: FnOnce(f64) + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if frame_loop.is_cancelled() {
        return;
    }
    let Some(window) = web_sys::window() else {
        log::error!("No window, animation loop not scheduled");
        return;
    };
    let closure = Closure::once(f);
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => frame_loop.set_pending(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
    closure.forget();
}

#[cfg(target_arch = "wasm32")]
fn cancel_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(id);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn cancel_frame(_id: i32) {
    // No frame scheduler natively
}
