use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::request_animation_frame;
use shared::FrameGate;

pub fn ms(millis: u32) -> Duration {
    Duration::from_millis(u64::from(millis))
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Runs only the last call of a burst, `delay` after it was made.
#[derive(Clone, Default)]
pub struct Debouncer {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        // Replacing the timeout drops, and so cancels, the previous one.
        self.pending.borrow_mut().replace(Timeout::new(delay_ms, f));
    }
}

/// At most one pending animation-frame callback.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    gate: Rc<Cell<FrameGate>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let mut gate = self.gate.get();
        if !gate.request() {
            return;
        }
        self.gate.set(gate);

        let shared = self.gate.clone();
        request_animation_frame(move || {
            let mut gate = shared.get();
            gate.complete();
            shared.set(gate);
            f();
        });
    }
}
