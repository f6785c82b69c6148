use crate::render::{FrameCamera, GpuState};
use crate::scene::BeadScene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Frames after a long stall (hidden tab) are clamped so the camera does not snap.
const MAX_FRAME_DT_SEC: f32 = 0.25;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<BeadScene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let Some(gpu) = self.gpu.as_mut() else {
            self.scene.borrow_mut().update(dt_sec);
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let (camera, instances) = {
            let mut scene = self.scene.borrow_mut();
            scene.update(dt_sec);
            let (right, up) = scene.camera.billboard_axes();
            let camera = FrameCamera {
                view_proj: scene.camera.view_proj(gpu.aspect()),
                right,
                up,
            };
            (camera, scene.instances())
        };
        match gpu.render(dt_sec, &camera, &instances) {
            Ok(()) => {}
            // reconfigured on the next resize check
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::debug!("[frame] surface outdated; skipping frame");
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// `None` leaves the prayer screen usable without the bead scene.
pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    // the surface borrows the canvas for the page's lifetime
    let canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    GpuState::new(canvas)
        .await
        .map_err(|e| log::warn!("[frame] WebGPU unavailable, beads disabled: {e:?}"))
        .ok()
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &Tick) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let next = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&next);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
