// src/messages.rs
//
// Everything the host can tell the particle field, and everything the field
// asks the host to do in return.
//
use crate::config::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Host lifecycle
    Start,
    Stop,

    // One requestAnimationFrame callback; dt is milliseconds since the previous frame
    AnimationFrame { dt_ms: f64 },

    // Pointer input, CSS pixels
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    Clicked { x: f64, y: f64 },

    // Window / document state
    Resized(Viewport),
    VisibilityChanged { visible: bool },
}

/// Side effects for the host runtime to execute after `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ScheduleFrame,
    CancelFrame,
    Render,
    ResizeSurface(Viewport),
    PaintBase,
}
