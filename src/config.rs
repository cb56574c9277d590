//! Field configuration derived once at start-up from the viewport width and
//! the platform's reduced-motion preference.
//!
//! Everything here is a compile-time constant picked from `constants.rs`; the
//! only runtime inputs are the two facts above.  Reduced motion is
//! snapshotted when the config is built and never re-evaluated.

use serde::Serialize;

use crate::constants::*;

/// Motion tuning that differs between the normal and reduced-motion modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionProfile {
    pub pull: f64,
    pub swirl: f64,
    pub damping: f64,
    pub max_speed: f64,
    pub bg_fade: f64,
}

impl MotionProfile {
    pub const NORMAL: MotionProfile = MotionProfile {
        pull: PULL,
        swirl: SWIRL,
        damping: DAMPING,
        max_speed: MAX_SPEED,
        bg_fade: BG_FADE,
    };

    pub const REDUCED: MotionProfile = MotionProfile {
        pull: PULL_REDUCED,
        swirl: SWIRL_REDUCED,
        damping: DAMPING_REDUCED,
        max_speed: MAX_SPEED_REDUCED,
        bg_fade: BG_FADE_REDUCED,
    };

    pub fn for_preference(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::REDUCED
        } else {
            Self::NORMAL
        }
    }
}

/// Snapshot of the tunables for one mounted field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldConfig {
    pub ambient_count: usize,
    pub burst_size: usize,
    pub reduced_motion: bool,
    pub motion: MotionProfile,
}

impl FieldConfig {
    pub fn new(viewport_width: f64, reduced_motion: bool) -> Self {
        let small = is_small_width(viewport_width);
        let ambient_count = match (reduced_motion, small) {
            (true, true) => REDUCED_SMALL_COUNT,
            (true, false) => REDUCED_COUNT,
            (false, true) => SMALL_COUNT,
            (false, false) => BASE_COUNT,
        };
        let burst_size = if small { BURST_SIZE_SMALL } else { BURST_SIZE_LARGE };

        Self {
            ambient_count,
            burst_size,
            reduced_motion,
            motion: MotionProfile::for_preference(reduced_motion),
        }
    }

    /// Upper bound on the particle count after a burst.
    pub fn max_particles(&self) -> usize {
        self.ambient_count + TRIM_HEADROOM
    }
}

pub fn is_small_width(width: f64) -> bool {
    width < SMALL_VIEWPORT_WIDTH
}

/// CSS viewport size plus the device pixel ratio used for the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Build a viewport, capping the raw device pixel ratio.
    pub fn new(width: f64, height: f64, raw_dpr: f64) -> Self {
        Self {
            width,
            height,
            dpr: capped_dpr(raw_dpr, width),
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor().max(0.0) as u32,
            (self.height * self.dpr).floor().max(0.0) as u32,
        )
    }
}

/// `min(dpr, cap)` where the cap is 1.25 on narrow viewports and 1.75
/// otherwise.  A missing or non-positive ratio counts as 1.
pub fn capped_dpr(raw_dpr: f64, width: f64) -> f64 {
    let dpr = if raw_dpr.is_finite() && raw_dpr > 0.0 { raw_dpr } else { 1.0 };
    let cap = if is_small_width(width) { DPR_CAP_SMALL } else { DPR_CAP_LARGE };
    dpr.min(cap)
}
