use crate::core::PointerState;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(pointer: Rc<RefCell<PointerState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Ok(vp) = dom::viewport(&wnd) else {
            return;
        };
        *pointer.borrow_mut() = PointerState::from_client(
            ev.client_x() as f64,
            ev.client_y() as f64,
            vp.width,
            vp.height,
        );
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || match dom::viewport(&wnd) {
        Ok(vp) => {
            frame_ctx.borrow_mut().resize(vp);
        }
        Err(e) => log::warn!("[resize] {:?}", e),
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
