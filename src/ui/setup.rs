use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use super::events::attach_event_handlers;
use crate::canvas::background::ParticleField;
use crate::canvas::surface::CanvasSurface;
use crate::dom_utils::{document, find_canvas, page_visible, prefers_reduced_motion, read_viewport, window};
use crate::messages::Message;
use crate::state::{Runtime, Shared};

/// Mount the particle background on `<canvas id=canvas_id>` and start it.
///
/// Returns `Ok(None)` when the canvas is missing; nothing is registered in
/// that case.
pub fn mount(canvas_id: &str) -> Result<Option<Shared>, JsValue> {
    let window = window()?;
    let document = document(&window)?;

    let (canvas, context) = match find_canvas(&document, canvas_id)? {
        Some(found) => found,
        None => {
            crate::console_error!("Canvas element '{}' NOT FOUND!", canvas_id);
            return Ok(None);
        }
    };

    let viewport = read_viewport(&window)?;
    let reduced_motion = prefers_reduced_motion(&window);

    let surface = CanvasSurface::new(canvas, context);
    surface.resize(&viewport)?;

    let mut field = ParticleField::new(viewport, reduced_motion, SmallRng::from_entropy());
    field.set_visible(page_visible(&document));

    crate::console_log!(
        "Particle background mounted: {} particles, {}x{} @{}x{}",
        field.particles().len(),
        viewport.width,
        viewport.height,
        viewport.dpr,
        if reduced_motion { " (reduced motion)" } else { "" }
    );

    let shared = Shared::new(Runtime::new(window.clone(), surface, field));
    shared.install_frame_loop();

    if let Err(e) = attach_event_handlers(&window, &document, &shared) {
        shared.teardown();
        return Err(e);
    }

    shared.dispatch(Message::Start);
    Ok(Some(shared))
}
