//! Runtime state of one mounted particle background and the command
//! executor that connects `update` to the browser.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::canvas::background::{FieldStats, ParticleField};
use crate::canvas::renderer::{draw_field, paint_base};
use crate::canvas::surface::CanvasSurface;
use crate::messages::{Command, Message};
use crate::ui::listeners::Listeners;
use crate::update::update;

pub type FrameClosure = Closure<dyn FnMut(f64)>;

pub struct Runtime {
    pub window: Window,
    pub surface: CanvasSurface,
    pub field: ParticleField<SmallRng>,
    pending_frame: Option<i32>,
    last_frame_ts: Option<f64>,
}

impl Runtime {
    pub fn new(window: Window, surface: CanvasSurface, field: ParticleField<SmallRng>) -> Self {
        Self {
            window,
            surface,
            field,
            pending_frame: None,
            last_frame_ts: None,
        }
    }

    fn execute(&mut self, command: Command, frame: &RefCell<Option<FrameClosure>>) -> Result<(), JsValue> {
        match command {
            Command::ScheduleFrame => {
                if self.pending_frame.is_some() {
                    return Ok(());
                }
                // No closure means the background was disposed.
                if let Some(callback) = frame.borrow().as_ref() {
                    let id = self
                        .window
                        .request_animation_frame(callback.as_ref().unchecked_ref())?;
                    self.pending_frame = Some(id);
                }
            }
            Command::CancelFrame => {
                // The next frame after a pause must not see the paused gap.
                self.last_frame_ts = None;
                if let Some(id) = self.pending_frame.take() {
                    self.window.cancel_animation_frame(id)?;
                }
            }
            Command::Render => draw_field(&self.field, &mut self.surface),
            Command::ResizeSurface(viewport) => self.surface.resize(&viewport)?,
            Command::PaintBase => paint_base(&self.field, &mut self.surface),
        }
        Ok(())
    }

    /// Record a frame timestamp and return the delta to the previous one.
    fn frame_delta(&mut self, timestamp: f64) -> f64 {
        self.pending_frame = None;
        let dt = self.last_frame_ts.map_or(0.0, |prev| timestamp - prev);
        self.last_frame_ts = Some(timestamp);
        dt
    }
}

/// Handle shared between the JS-facing object, every event closure and the
/// frame loop.  Listeners and the frame closure both hold clones of it, so
/// the whole background stays alive until `teardown`, whether or not JS
/// keeps its handle.
#[derive(Clone)]
pub struct Shared {
    runtime: Rc<RefCell<Runtime>>,
    frame: Rc<RefCell<Option<FrameClosure>>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl Shared {
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime: Rc::new(RefCell::new(runtime)),
            frame: Rc::new(RefCell::new(None)),
            listeners: Rc::new(RefCell::new(Listeners::new())),
        }
    }

    pub fn listeners(&self) -> &RefCell<Listeners> {
        &self.listeners
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// `true` while the frame closure is installed.
    pub fn has_frame_loop(&self) -> bool {
        self.frame.borrow().is_some()
    }

    /// Run `msg` through `update` and execute the resulting commands.
    pub fn dispatch(&self, msg: Message) {
        let mut runtime = self.runtime.borrow_mut();
        let commands = update(&mut runtime.field, msg);
        for command in commands {
            if let Err(e) = runtime.execute(command.clone(), &self.frame) {
                crate::console_warn!("Command {:?} failed: {:?}", command, e);
            }
        }
    }

    /// Install the requestAnimationFrame callback.  The closure holds a
    /// clone of `self`; `teardown` breaks that cycle.
    pub fn install_frame_loop(&self) {
        let shared = self.clone();
        let callback = Closure::<dyn FnMut(f64)>::wrap(Box::new(move |timestamp: f64| {
            let dt_ms = shared.runtime.borrow_mut().frame_delta(timestamp);
            shared.dispatch(Message::AnimationFrame { dt_ms });
        }));
        *self.frame.borrow_mut() = Some(callback);
    }

    pub fn stats(&self) -> FieldStats {
        self.runtime.borrow().field.stats()
    }

    pub fn window(&self) -> Window {
        self.runtime.borrow().window.clone()
    }

    /// Detach every listener, cancel the pending frame and drop the frame
    /// closure.  This is the only place the background is torn down.
    pub fn teardown(&self) {
        self.listeners.borrow_mut().detach_all();

        let mut runtime = self.runtime.borrow_mut();
        if let Err(e) = runtime.execute(Command::CancelFrame, &self.frame) {
            crate::console_warn!("Failed to cancel animation frame: {:?}", e);
        }
        drop(runtime);
        self.frame.borrow_mut().take();
    }
}
