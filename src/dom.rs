use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels, matching pointer client coordinates.
pub fn window_inner_size() -> Option<(f32, f32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Canvas backing store is kept 1:1 with CSS pixels so client coordinates
/// map directly onto grid cells.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f32, height: f32) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

pub fn set_root_css_px(name: &str, value: f32) {
    let Some(root) = window_document().and_then(|d| d.document_element()) else {
        return;
    };
    if let Ok(el) = root.dyn_into::<web::HtmlElement>() {
        _ = el.style().set_property(name, &format!("{}px", value));
    }
}

/// Mirror camera offsets into `--camera-offset-x` / `--camera-offset-y` for
/// page elements positioned against the grid.
pub fn publish_camera_offsets(offset_x: f32, offset_y: f32) {
    set_root_css_px("--camera-offset-x", offset_x);
    set_root_css_px("--camera-offset-y", offset_y);
}
