//! A single drifting particle.
//!
//! Physics is one explicit Euler step per animation frame.  Velocities and
//! lifetimes are measured in frames, not seconds.

use std::f64::consts::TAU;

use rand::Rng;

use super::shapes::{Hsla, Segment};
use crate::config::{MotionProfile, Viewport};
use crate::constants::*;

/// Shared pointer state. Forces only apply while `active`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

/// Everything a particle step reads besides the particle itself.
#[derive(Debug, Clone, Copy)]
pub struct StepEnv<'a> {
    pub viewport: &'a Viewport,
    pub pointer: &'a Pointer,
    pub motion: &'a MotionProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub prev_x: f64,
    pub prev_y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: u32,
    pub max_life: f64,
    pub hue: f64,
    pub alpha: f64,
    pub len: f64,
}

impl Particle {
    /// Spawn a particle.  `at = None` places it uniformly inside the
    /// viewport; `speed` scales the random initial velocity.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: &Viewport,
        at: Option<(f64, f64)>,
        speed: f64,
    ) -> Particle {
        let (x, y) = at.unwrap_or_else(|| random_point(rng, viewport));
        let angle = rng.gen_range(0.0..TAU);
        let v = rng.gen_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX) * speed;

        Particle {
            x,
            y,
            prev_x: x,
            prev_y: y,
            vx: angle.cos() * v,
            vy: angle.sin() * v,
            life: 0,
            max_life: rng.gen_range(LIFETIME_MIN..LIFETIME_MAX),
            hue: rng.gen_range(HUE_MIN..HUE_MAX),
            alpha: rng.gen_range(ALPHA_MIN..ALPHA_MAX),
            len: rng.gen_range(STREAK_MIN..STREAK_MAX),
        }
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Advance one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, env: &StepEnv<'_>, rng: &mut R) {
        self.prev_x = self.x;
        self.prev_y = self.y;

        let motion = env.motion;
        let pointer = env.pointer;
        if pointer.active {
            let dx = pointer.x - self.x;
            let dy = pointer.y - self.y;
            let dist = dx.hypot(dy) + POINTER_EPSILON;
            let (nx, ny) = (dx / dist, dy / dist);
            // Perpendicular to the pointer direction; makes particles orbit
            // instead of homing in.
            let (tx, ty) = (-ny, nx);
            self.vx += nx * motion.pull + tx * motion.swirl;
            self.vy += ny * motion.pull + ty * motion.swirl;
        }

        self.vx *= motion.damping;
        self.vy *= motion.damping;

        let s = self.speed();
        if s > motion.max_speed {
            self.vx = self.vx / s * motion.max_speed;
            self.vy = self.vy / s * motion.max_speed;
        }

        self.x += self.vx;
        self.y += self.vy;

        self.wrap(env.viewport);

        self.life += 1;
        if f64::from(self.life) > self.max_life {
            self.respawn(rng, env.viewport);
        }
    }

    /// Teleport to the opposite edge once the particle leaves the viewport
    /// plus margin.  The previous position follows so no streak is drawn
    /// across the screen.
    fn wrap(&mut self, viewport: &Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        if self.x < -WRAP_MARGIN {
            self.x = w + WRAP_MARGIN;
            self.prev_x = self.x;
        }
        if self.x > w + WRAP_MARGIN {
            self.x = -WRAP_MARGIN;
            self.prev_x = self.x;
        }
        if self.y < -WRAP_MARGIN {
            self.y = h + WRAP_MARGIN;
            self.prev_y = self.y;
        }
        if self.y > h + WRAP_MARGIN {
            self.y = -WRAP_MARGIN;
            self.prev_y = self.y;
        }
    }

    /// New random position, age reset.  Velocity and look are kept.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: &Viewport) {
        let (x, y) = random_point(rng, viewport);
        self.x = x;
        self.y = y;
        self.prev_x = x;
        self.prev_y = y;
        self.life = 0;
    }

    /// The streak drawn for this frame: starts a little behind the previous
    /// position and ends ahead of the current one along the travel direction.
    pub fn streak(&self) -> Segment {
        let vx = self.x - self.prev_x;
        let vy = self.y - self.prev_y;
        let mut mag = vx.hypot(vy);
        if mag == 0.0 {
            mag = POINTER_EPSILON;
        }
        let lx = vx / mag * self.len;
        let ly = vy / mag * self.len;

        Segment {
            x0: self.prev_x - lx * STREAK_TAIL,
            y0: self.prev_y - ly * STREAK_TAIL,
            x1: self.x + lx * STREAK_HEAD,
            y1: self.y + ly * STREAK_HEAD,
        }
    }

    pub fn color(&self) -> Hsla {
        Hsla {
            hue: self.hue,
            saturation: STREAK_SATURATION,
            lightness: STREAK_LIGHTNESS,
            alpha: self.alpha,
        }
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport) -> (f64, f64) {
    (
        rng.gen::<f64>() * viewport.width,
        rng.gen::<f64>() * viewport.height,
    )
}
