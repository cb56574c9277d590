//! Global event handlers feeding the particle field.
//!
//! Every handler turns a DOM event into a `Message` and dispatches it; all
//! of them are registered in the `Listeners` owned by `Shared`, so they live
//! exactly as long as the frame loop and go away together in `teardown`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent, Window};

use super::listeners::Listeners;
use crate::dom_utils::{page_visible, read_viewport};
use crate::messages::Message;
use crate::state::Shared;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Attach resize, pointer, click and visibility handlers to `shared`.  On
/// failure the caller tears `shared` down, which also removes the listeners
/// attached so far.
pub fn attach_event_handlers(window: &Window, document: &Document, shared: &Shared) -> Result<(), JsValue> {
    let mut listeners = shared.listeners().borrow_mut();
    attach_all(&mut listeners, window, document, shared)
}

fn attach_all(
    listeners: &mut Listeners,
    window: &Window,
    document: &Document,
    shared: &Shared,
) -> Result<(), JsValue> {
    setup_resize_handler(listeners, window, shared)?;
    setup_pointer_handlers(listeners, window, document, shared)?;
    setup_click_handler(listeners, window, shared)?;
    setup_visibility_handler(listeners, document, shared)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

fn setup_resize_handler(listeners: &mut Listeners, window: &Window, shared: &Shared) -> Result<(), JsValue> {
    let shared = shared.clone();
    let win = window.clone();
    listeners.add(window, "resize", true, move |_e: Event| match read_viewport(&win) {
        Ok(viewport) => shared.dispatch(Message::Resized(viewport)),
        Err(e) => crate::console_warn!("Failed to read viewport: {:?}", e),
    })
}

fn setup_pointer_handlers(
    listeners: &mut Listeners,
    window: &Window,
    document: &Document,
    shared: &Shared,
) -> Result<(), JsValue> {
    {
        let shared = shared.clone();
        listeners.add(window, "mousemove", true, move |e: Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                shared.dispatch(Message::PointerMoved {
                    x: f64::from(e.client_x()),
                    y: f64::from(e.client_y()),
                });
            }
        })?;
    }

    // `mouseleave` does not bubble, so it has to be caught on <html> itself.
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    let shared = shared.clone();
    listeners.add(&root, "mouseleave", true, move |_e: Event| {
        shared.dispatch(Message::PointerLeft);
    })
}

/// Clicks and taps spawn a burst at the interaction point.
fn setup_click_handler(listeners: &mut Listeners, window: &Window, shared: &Shared) -> Result<(), JsValue> {
    let shared = shared.clone();
    listeners.add(window, "click", false, move |e: Event| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            shared.dispatch(Message::Clicked {
                x: f64::from(e.client_x()),
                y: f64::from(e.client_y()),
            });
        }
    })
}

fn setup_visibility_handler(listeners: &mut Listeners, document: &Document, shared: &Shared) -> Result<(), JsValue> {
    let shared = shared.clone();
    let doc = document.clone();
    listeners.add(document, "visibilitychange", true, move |_e: Event| {
        shared.dispatch(Message::VisibilityChanged {
            visible: page_visible(&doc),
        });
    })
}
