use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod config;
pub mod constants; // Module for tuning constants
pub mod dom_utils;
pub mod macros;
pub mod messages; // Message / Command enums
pub mod state;
pub mod ui;
pub mod update; // Reducer driving the field

#[cfg(test)]
mod field_prop_test;

use messages::Message;
use state::Shared;

// Module start hook; mounting is left to `initAnimations` so pages without
// the canvas pay nothing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    Ok(())
}

/// Mount the particle background on `<canvas id="particle-canvas">` (or the
/// given id).
///
/// Never throws: a missing canvas or a failing browser call is logged and
/// `undefined` is returned so the rest of the page keeps working.
#[wasm_bindgen(js_name = initAnimations)]
pub fn init_animations(canvas_id: Option<String>) -> Option<ParticleBackground> {
    let id = canvas_id.as_deref().unwrap_or(constants::DEFAULT_CANVAS_ID);
    crate::console_log!("Starting particle background on '{}'", id);

    match ui::setup::mount(id) {
        Ok(Some(shared)) => Some(ParticleBackground {
            shared,
            disposed: false,
        }),
        Ok(None) => None,
        Err(e) => {
            crate::console_error!("Particle background failed to start: {:?}", e);
            None
        }
    }
}

/// JS handle for one mounted background.
///
/// Freeing the handle does not stop the effect: listeners and the frame loop
/// keep each other alive for the page's lifetime.  Only `dispose()` tears
/// them down.
#[wasm_bindgen]
pub struct ParticleBackground {
    shared: Shared,
    disposed: bool,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Resume animating (only advances while the page is visible).
    pub fn start(&self) {
        if !self.disposed {
            self.shared.dispatch(Message::Start);
        }
    }

    /// Pause animating; particles keep their state.
    pub fn stop(&self) {
        if !self.disposed {
            self.shared.dispatch(Message::Stop);
        }
    }

    /// Re-read the viewport and resize the canvas.
    pub fn resize(&self) -> Result<(), JsValue> {
        if self.disposed {
            return Ok(());
        }
        let viewport = dom_utils::read_viewport(&self.shared.window())?;
        self.shared.dispatch(Message::Resized(viewport));
        Ok(())
    }

    /// Spawn a burst at `(x, y)` in CSS pixels, as a click would.
    pub fn burst(&self, x: f64, y: f64) {
        if !self.disposed {
            self.shared.dispatch(Message::Clicked { x, y });
        }
    }

    /// Plain-object snapshot of the field.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.shared.stats()).map_err(JsValue::from)
    }

    /// Remove every listener and stop the frame loop.  Safe to call twice.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.shared.teardown();
        self.disposed = true;
        crate::console_log!("Particle background disposed");
    }

    #[wasm_bindgen(js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[wasm_bindgen(js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.shared.listener_count()
    }

    /// `true` while the requestAnimationFrame loop is installed.
    #[wasm_bindgen(js_name = hasFrameLoop)]
    pub fn has_frame_loop(&self) -> bool {
        self.shared.has_frame_loop()
    }
}
