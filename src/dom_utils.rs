//! dom_utils.rs – thin helper layer over the handful of browser queries the
//! particle background needs.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, VisibilityState, Window};

use crate::config::Viewport;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

/// Current CSS viewport with the capped device pixel ratio.
pub fn read_viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height, window.device_pixel_ratio()))
}

/// `true` when the user asked the platform for less motion.  A browser
/// without `matchMedia` support counts as "no preference".
pub fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

pub fn page_visible(document: &Document) -> bool {
    document.visibility_state() == VisibilityState::Visible
}

/// Look up `<canvas id=…>` and its 2D context.  `Ok(None)` when the element
/// is missing, is not a canvas, or has no 2D context.
pub fn find_canvas(
    document: &Document,
    id: &str,
) -> Result<Option<(HtmlCanvasElement, CanvasRenderingContext2d)>, JsValue> {
    let canvas = match document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    {
        Some(canvas) => canvas,
        None => return Ok(None),
    };

    let context = match canvas.get_context("2d")? {
        Some(ctx) => ctx.dyn_into::<CanvasRenderingContext2d>()?,
        None => return Ok(None),
    };

    Ok(Some((canvas, context)))
}
