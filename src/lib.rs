#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rosary_core::{ContentStore, MeditationLength, MysterySet, SessionConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod notification;
mod presenter;
mod render;
mod scene;
mod scheduler;
mod text;

use app::App;
use events::keymap::Intent;
use scene::BeadScene;

fn wire_controls(document: &web::Document, app: &Rc<RefCell<App>>) {
    let on = |intent: Intent| {
        let app = app.clone();
        move || app.borrow_mut().handle(intent)
    };
    dom::add_click_listener(document, "start-btn", on(Intent::Start));
    dom::add_click_listener(document, "next-btn", on(Intent::Next));
    dom::add_click_listener(document, "prev-btn", on(Intent::Previous));
    dom::add_click_listener(document, "play-btn", on(Intent::TogglePlay));

    let app_mystery = app.clone();
    dom::add_click_listener_all(document, ".mystery-btn", move |el| {
        let Some(id) = el.get_attribute("data-mystery") else {
            return;
        };
        match id.parse::<MysterySet>() {
            Ok(set) => app_mystery.borrow_mut().handle(Intent::SelectMystery(set)),
            Err(e) => log::warn!("[ui] {e}"),
        }
    });

    let app_auto = app.clone();
    dom::add_change_listener(document, "auto-advance", move |el| {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            app_auto.borrow_mut().set_auto_advance(input.checked());
        }
    });

    let app_meditation = app.clone();
    dom::add_change_listener(document, "meditation-length", move |el| {
        let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() else {
            return;
        };
        match MeditationLength::parse(&select.value()) {
            Some(m) => app_meditation.borrow_mut().set_meditation(m),
            None => log::warn!("[ui] unknown meditation length {:?}", select.value()),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rosary-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::keep_canvas_sized(&canvas);

    let config = SessionConfig::default();
    let content = Arc::new(ContentStore::english()?);
    let scene = Rc::new(RefCell::new(BeadScene::new(&config.structure, &config.layout)?));
    let chimes = match audio::Chimes::new() {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("[audio] chimes disabled: {e}");
            None
        }
    };
    dom::set_checked(&document, "auto-advance", config.auto_advance);

    let app = Rc::new(RefCell::new(App::new(
        config,
        content,
        presenter::Presenter::new(document.clone()),
        scene.clone(),
        chimes,
    )));
    App::install_timer_hook(&app);
    wire_controls(&document, &app);
    events::keyboard::wire_global_keydown(app.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
