use rosary_core::constants::NOTIFICATION_HIDE_MS;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Toast shown on completion; hides itself after a few seconds.
#[derive(Clone, Default)]
pub struct Notification {
    // newer toasts keep older hide timers from closing them early
    shown: Rc<Cell<u64>>,
}

impl Notification {
    pub fn show(&self, document: &web::Document, title: &str, message: &str) {
        crate::dom::set_text(document, "notification-title", title);
        crate::dom::set_text(document, "notification-message", message);
        if let Some(el) = document.get_element_by_id("notification") {
            crate::dom::set_class(&el, "visible", true);
        }
        let generation = self.shown.get() + 1;
        self.shown.set(generation);
        let shown = self.shown.clone();
        let doc = document.clone();
        crate::dom::after(NOTIFICATION_HIDE_MS, move || {
            if shown.get() == generation {
                hide(&doc);
            }
        });
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("notification") {
        crate::dom::set_class(&el, "visible", false);
    }
}
