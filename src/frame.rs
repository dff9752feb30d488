use crate::core::{BackdropScene, PointerState, Viewport};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: BackdropScene,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub viewport: Viewport,
    pub gpu: Option<render::GpuState>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let pointer = *self.pointer.borrow();
        self.scene.update(elapsed, pointer);

        if let Some(g) = &mut self.gpu {
            if let Err(e) = g.render(&self.scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Apply a new viewport to camera, canvas and surface. Returns false when
    /// the viewport is unchanged.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let Some(plan) = self.viewport.plan_resize(viewport) else {
            return false;
        };
        self.viewport = plan.viewport;
        self.scene.camera.set_aspect(plan.aspect);
        dom::sync_canvas_size(&self.canvas, plan.viewport);
        let (w, h) = plan.backing;
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }
        log::debug!(
            "[resize] {}x{} css, {}x{} px, aspect {:.3}",
            viewport.width,
            viewport.height,
            w,
            h,
            self.scene.camera.aspect
        );
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &BackdropScene,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Run `frame` on every animation frame until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
