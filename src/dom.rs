use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a required element and cast it to the expected DOM type.
pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("invalid selector {selector}: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?;
    el.dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{selector} has unexpected type: {:?}", e))
}

pub fn viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerWidth unavailable"))?;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerHeight unavailable"))?;
    Ok(Viewport::new(width, height, window.device_pixel_ratio()))
}

/// Size the drawing buffer to the viewport in device pixels and pin the CSS
/// size to the viewport.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}
