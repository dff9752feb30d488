// DOM collaborators supplied by the page markup
pub const BG_CANVAS_SELECTOR: &str = "#bg-canvas";
pub const LOGIN_FORM_SELECTOR: &str = ".login-container";
pub const LOGIN_BUTTON_SELECTOR: &str = ".login-btn";

// Renderer
pub const MSAA_SAMPLE_COUNT: u32 = 4;
// Transparent so the page background shows through the canvas.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;
