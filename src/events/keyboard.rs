use super::keymap::{intent_for_key, suppresses_default, target_keeps_key};
use crate::app::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
        if target_keeps_key(&target.tag_name(), &key) {
            return;
        }
    }
    let Some(intent) = intent_for_key(&key) else {
        return;
    };
    if suppresses_default(intent) {
        ev.prevent_default();
    }
    log::debug!("[keys] {key:?} -> {:?}", intent);
    app.borrow_mut().handle(intent);
}

pub fn wire_global_keydown(app: Rc<RefCell<App>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
