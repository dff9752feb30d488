#![cfg(target_arch = "wasm32")]
use crate::constants::{BG_CANVAS_SELECTOR, LOGIN_BUTTON_SELECTOR, LOGIN_FORM_SELECTOR};
use crate::core::{BackdropConfig, BackdropScene, PointerState, SimulatedLogin};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod login;
mod render;
mod timer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("login-backdrop starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The canvas is resolved first: without it nothing else is wired.
    let canvas: web::HtmlCanvasElement = dom::query(&document, BG_CANVAS_SELECTOR)?;
    let viewport = dom::viewport(&window)?;
    dom::sync_canvas_size(&canvas, viewport);

    let scene = BackdropScene::new(
        BackdropConfig::default(),
        viewport.aspect(),
        &mut rand::thread_rng(),
    );
    log::info!(
        "[scene] particles={} aspect={:.3}",
        scene.field.len(),
        scene.camera.aspect
    );

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointermove(pointer.clone());

    // The form is independent of the backdrop: a missing form only loses the
    // sign-in feedback, the animation still starts.
    if let Err(e) = wire_login(&document, &window) {
        log::error!("login wiring error: {:?}", e);
    }

    let gpu = frame::init_gpu(&canvas, &scene).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        pointer,
        canvas,
        viewport,
        gpu,
        started: Instant::now(),
    }));
    events::wire_resize(frame_ctx.clone());
    // Catch a resize that landed while the adapter was being requested.
    if let Ok(vp) = dom::viewport(&window) {
        frame_ctx.borrow_mut().resize(vp);
    }
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Hook the simulated sign-in onto the page's form and submit button.
pub fn wire_login(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    let form: web::Element = dom::query(document, LOGIN_FORM_SELECTOR)?;
    let button: web::HtmlButtonElement = dom::query(document, LOGIN_BUTTON_SELECTOR)?;
    login::wire_login_form(
        &form,
        SimulatedLogin::new(
            login::DomLoginButton::new(button, window.clone()),
            timer::WindowTimer::new(window.clone()),
        ),
    );
    Ok(())
}
