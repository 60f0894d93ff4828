//! DOM reads and writes

use web_sys::{Document, HtmlCanvasElement, Window};

use crate::sim::{ArenaSize, BoundingRect};

/// `innerWidth`/`innerHeight` in CSS pixels (0 if unavailable)
pub fn viewport_size(window: &Window) -> (f32, f32) {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn device_pixel_ratio(window: &Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

/// Size the canvas: CSS size from the arena, backing store scaled by DPR.
/// Returns the backing store size.
pub fn size_canvas(canvas: &HtmlCanvasElement, arena: ArenaSize, dpr: f64) -> (u32, u32) {
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", arena.width));
    let _ = style.set_property("height", &format!("{}px", arena.height));

    let width = (arena.width as f64 * dpr).round().max(1.0) as u32;
    let height = (arena.height as f64 * dpr).round().max(1.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

/// Current client rect of the arena surface, if it has a usable size
pub fn bounding_rect(canvas: &HtmlCanvasElement) -> Option<BoundingRect> {
    let rect = canvas.get_bounding_client_rect();
    let rect = BoundingRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    );
    rect.is_usable().then_some(rect)
}

/// Write the score into the HUD
pub fn set_score(document: &Document, score: u64) {
    if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
        el.set_text_content(Some(&score.to_string()));
    }
}
