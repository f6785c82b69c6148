//! DOM side of the prayer screen.
//!
//! Step changes fade the prayer card out, swap its text and fade it back in. Only the latest
//! request is applied when several land inside one fade.

use crate::dom;
use crate::text::{play_label, StepText};
use rosary_core::constants::CONTENT_FADE_MS;
use rosary_core::MysterySet;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Presenter {
    document: web::Document,
    pending: Rc<RefCell<Option<StepText>>>,
    fading: Rc<Cell<bool>>,
}

impl Presenter {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            pending: Rc::new(RefCell::new(None)),
            fading: Rc::new(Cell::new(false)),
        }
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn show_prayer_screen(&self) {
        dom::set_hidden(&self.document, "landing-page", true);
        dom::set_hidden(&self.document, "prayer-screen", false);
    }

    pub fn mark_mystery(&self, set: MysterySet) {
        let Ok(buttons) = self.document.query_selector_all(".mystery-btn") else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let active = el.get_attribute("data-mystery").as_deref() == Some(set.id());
            dom::set_class(&el, "active", active);
        }
        dom::set_text(&self.document, "selected-mystery", set.display_name());
    }

    /// Flags that do not need a fade.
    pub fn set_controls(&self, is_playing: bool, auto_advance: bool) {
        dom::set_text(&self.document, "play-btn", play_label(is_playing));
        dom::set_checked(&self.document, "auto-advance", auto_advance);
    }

    pub fn render(&self, text: StepText) {
        self.set_progress(&text);
        *self.pending.borrow_mut() = Some(text);
        if self.fading.replace(true) {
            return;
        }
        dom::set_style(&self.document, "prayer-content", "opacity", "0");
        if let Some(panel) = self.document.get_element_by_id("mystery-info") {
            dom::set_class(&panel, "visible", false);
        }
        let doc = self.document.clone();
        let pending = self.pending.clone();
        let fading = self.fading.clone();
        dom::after(CONTENT_FADE_MS, move || {
            fading.set(false);
            if let Some(text) = pending.borrow_mut().take() {
                apply_text(&doc, &text);
            }
            dom::set_style(&doc, "prayer-content", "opacity", "1");
        });
    }

    fn set_progress(&self, text: &StepText) {
        let doc = &self.document;
        dom::set_text(doc, "progress-text", &text.progress_label);
        dom::set_text(doc, "section-label", &text.section);
        dom::set_text(doc, "play-btn", text.play_label);
        dom::set_style(
            doc,
            "progress-bar",
            "width",
            &format!("{:.1}%", text.progress_percent),
        );
    }
}

fn apply_text(doc: &web::Document, text: &StepText) {
    dom::set_text(doc, "prayer-title", &text.title);
    dom::set_text(doc, "prayer-instructions", &text.instructions);
    dom::set_text(doc, "prayer-text", &text.body);
    dom::set_text(doc, "prayer-type", text.indicator);
    let Some(mystery) = &text.mystery else {
        return;
    };
    dom::set_text(doc, "mystery-title", &mystery.title);
    dom::set_text(doc, "mystery-description", &mystery.description);
    dom::set_text(doc, "mystery-fruits", &mystery.fruits);
    dom::set_text(
        doc,
        "mystery-scripture",
        mystery.scripture.as_deref().unwrap_or(""),
    );
    dom::set_hidden(doc, "mystery-scripture", mystery.scripture.is_none());
    if let Some(panel) = doc.get_element_by_id("mystery-info") {
        dom::set_class(&panel, "visible", true);
    }
}
