use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::request_animation_frame;

/// Drives a frame callback through `requestAnimationFrame` only while there is work.
///
/// The callback decides at the end of each frame whether to [`Ticker::schedule`] the
/// next one or to [`Ticker::sleep`]. Input handlers call [`Ticker::wake`], which
/// restarts a sleeping loop and does nothing to a running one.
#[derive(Clone, Default)]
pub struct Ticker {
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    running: Rc<Cell<bool>>,
}

impl Ticker {
    pub fn new() -> Ticker {
        Ticker::default()
    }

    pub fn set_callback(&self, callback: Closure<dyn FnMut()>) {
        self.callback.replace(Some(callback));
    }

    pub fn wake(&self) {
        if !self.running.replace(true) {
            self.schedule();
        }
    }

    pub fn schedule(&self) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                console::error_2(&"could not request an animation frame:".into(), &err);
                self.running.set(false);
            }
        }
    }

    pub fn sleep(&self) {
        self.running.set(false);
    }
}
