//! The particle field simulator.
//!
//! `ParticleField` owns every particle together with the pointer, viewport
//! and run state.  It never touches the browser; the host feeds it events
//! and calls `tick` once per animation frame.

use rand::Rng;
use serde::Serialize;

use super::particle::{Particle, Pointer, StepEnv};
use crate::config::{FieldConfig, Viewport};
use crate::constants::BURST_SPEED;

/// Whether ticks advance the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Running,
    Paused,
}

/// Serializable snapshot handed to JS for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct FieldStats {
    pub particles: usize,
    pub ambient_target: usize,
    pub burst_size: usize,
    pub run_state: RunState,
    pub reduced_motion: bool,
    pub frames: u64,
    pub last_frame_ms: f64,
    pub viewport: Viewport,
}

#[derive(Debug)]
pub struct ParticleField<R: Rng> {
    particles: Vec<Particle>,
    pointer: Pointer,
    viewport: Viewport,
    config: FieldConfig,
    started: bool,
    visible: bool,
    frames: u64,
    last_frame_ms: f64,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// Build a running field with its ambient population.  `reduced_motion`
    /// is read once here and kept for the field's lifetime.
    pub fn new(viewport: Viewport, reduced_motion: bool, mut rng: R) -> Self {
        let config = FieldConfig::new(viewport.width, reduced_motion);
        let particles = (0..config.ambient_count)
            .map(|_| Particle::spawn(&mut rng, &viewport, None, 1.0))
            .collect();

        Self {
            particles,
            pointer: Pointer::default(),
            viewport,
            config,
            started: true,
            visible: true,
            frames: 0,
            last_frame_ms: 0.0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        if self.started && self.visible {
            RunState::Running
        } else {
            RunState::Paused
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn stop(&mut self) {
        self.started = false;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Adopt a new viewport.  Population and tuning stay as they were chosen
    /// at start-up; particles outside the new bounds wrap on their next step.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Non-finite coordinates are ignored.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.pointer = Pointer { x, y, active: true };
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.active = false;
    }

    /// Advance every particle one step.  Returns `false` without touching
    /// any state while paused.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if !self.is_running() {
            return false;
        }

        let env = StepEnv {
            viewport: &self.viewport,
            pointer: &self.pointer,
            motion: &self.config.motion,
        };
        for particle in &mut self.particles {
            particle.update(&env, &mut self.rng);
        }

        self.frames += 1;
        self.last_frame_ms = dt_ms;
        true
    }

    /// Spawn a burst at `(x, y)` and trim the oldest particles if the
    /// population went past `ambient + headroom`.  Non-finite coordinates
    /// (e.g. `undefined` from JS) spawn nothing.
    pub fn burst(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        for _ in 0..self.config.burst_size {
            let p = Particle::spawn(&mut self.rng, &self.viewport, Some((x, y)), BURST_SPEED);
            self.particles.push(p);
        }

        let max = self.config.max_particles();
        if self.particles.len() > max {
            let excess = self.particles.len() - max;
            self.particles.drain(..excess);
        }
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            particles: self.particles.len(),
            ambient_target: self.config.ambient_count,
            burst_size: self.config.burst_size,
            run_state: self.run_state(),
            reduced_motion: self.config.reduced_motion,
            frames: self.frames,
            last_frame_ms: self.last_frame_ms,
            viewport: self.viewport,
        }
    }
}
