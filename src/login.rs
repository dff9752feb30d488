use crate::core::{ButtonAppearance, LoginView, SimulatedLogin};
use crate::timer::WindowTimer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PageLogin = SimulatedLogin<DomLoginButton, WindowTimer>;

/// The page's submit button plus the window used for `alert`.
pub struct DomLoginButton {
    button: web::HtmlButtonElement,
    window: web::Window,
}

impl DomLoginButton {
    pub fn new(button: web::HtmlButtonElement, window: web::Window) -> Self {
        Self { button, window }
    }
}

impl LoginView for DomLoginButton {
    fn apply(&self, appearance: &ButtonAppearance) {
        self.button.set_disabled(appearance.disabled);
        self.button.set_inner_html(appearance.label_html);
        let style = self.button.style();
        _ = style.set_property("opacity", appearance.opacity);
        _ = style.set_property("cursor", appearance.cursor);
    }

    fn notify_success(&self, message: &str) {
        _ = self.window.alert_with_message(message);
    }
}

pub fn wire_login_form(form: &web::Element, login: PageLogin) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        match login.submit() {
            Ok(true) => log::info!("[login] simulated request started"),
            Ok(false) => {}
            Err(e) => log::error!("[login] {:?}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
