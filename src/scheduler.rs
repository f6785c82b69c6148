use fnv::FnvHashMap;
use rosary_core::{Scheduler, TimerId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TimerHook = Rc<dyn Fn(TimerId)>;

/// `setTimeout`-backed scheduler. Elapsed timers are handed to the hook installed with
/// [`BrowserScheduler::set_hook`], outside of any session borrow.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    handles: Rc<RefCell<FnvHashMap<TimerId, i32>>>,
    hook: Rc<RefCell<Option<TimerHook>>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hook(&self, hook: impl Fn(TimerId) + 'static) {
        *self.hook.borrow_mut() = Some(Rc::new(hook));
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let Some(window) = web::window() else {
            log::error!("[timer] no window; timer {:?} will never fire", id);
            return id;
        };
        let handles = self.handles.clone();
        let hook = self.hook.clone();
        let callback = Closure::once_into_js(move || {
            handles.borrow_mut().remove(&id);
            // clone out so the hook may schedule or cancel timers itself
            let hook = hook.borrow().clone();
            if let Some(hook) = hook {
                hook(id);
            }
        });
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
        {
            Ok(handle) => {
                self.handles.borrow_mut().insert(id, handle);
            }
            Err(e) => log::error!("[timer] setTimeout failed: {:?}", e),
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let Some(handle) = self.handles.borrow_mut().remove(&id) else {
            return;
        };
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}
