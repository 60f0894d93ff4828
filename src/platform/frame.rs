//! Cancellable `requestAnimationFrame` loop

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

struct FrameInner {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    request_id: Cell<Option<i32>>,
}

impl FrameInner {
    fn request(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => self.request_id.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// Runs `on_frame(timestamp_ms)` every animation frame until dropped
pub struct AnimationFrameLoop {
    inner: Rc<FrameInner>,
}

impl AnimationFrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let inner = Rc::new(FrameInner {
            callback: RefCell::new(None),
            request_id: Cell::new(None),
        });

        // The closure only holds a weak ref, so dropping the loop frees it
        let weak: Weak<FrameInner> = Rc::downgrade(&inner);
        let mut on_frame = on_frame;
        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.request_id.set(None);
            on_frame(time);
            inner.request();
        });
        *inner.callback.borrow_mut() = Some(closure);
        inner.request();

        Self { inner }
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.inner.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.inner.callback.borrow_mut().take();
    }
}
