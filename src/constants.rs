// Tuning values for the particle background - these are the single source of truth
pub const DEFAULT_CANVAS_ID: &str = "particle-canvas";

// Viewport
pub const SMALL_VIEWPORT_WIDTH: f64 = 768.0;
pub const DPR_CAP_SMALL: f64 = 1.25;
pub const DPR_CAP_LARGE: f64 = 1.75;
pub const WRAP_MARGIN: f64 = 10.0;

// Population
pub const BASE_COUNT: usize = 220;
pub const SMALL_COUNT: usize = 120;
pub const REDUCED_COUNT: usize = 90;
pub const REDUCED_SMALL_COUNT: usize = 60;
pub const BURST_SIZE_LARGE: usize = 28;
pub const BURST_SIZE_SMALL: usize = 18;
pub const BURST_SPEED: f64 = 3.2;
pub const TRIM_HEADROOM: usize = 200;

// Motion (normal / reduced)
pub const PULL: f64 = 0.045;
pub const PULL_REDUCED: f64 = 0.02;
pub const SWIRL: f64 = 0.12;
pub const SWIRL_REDUCED: f64 = 0.05;
pub const DAMPING: f64 = 0.992;
pub const DAMPING_REDUCED: f64 = 0.985;
pub const MAX_SPEED: f64 = 3.3;
pub const MAX_SPEED_REDUCED: f64 = 2.2;
pub const BG_FADE: f64 = 0.06;
pub const BG_FADE_REDUCED: f64 = 0.10;

// Keeps the pointer direction finite when a particle sits on the cursor
pub const POINTER_EPSILON: f64 = 0.0001;

// Per-particle spawn ranges, [min, max)
pub const SPAWN_SPEED_MIN: f64 = 0.6;
pub const SPAWN_SPEED_MAX: f64 = 1.4;
pub const LIFETIME_MIN: f64 = 600.0;
pub const LIFETIME_MAX: f64 = 1200.0;
pub const HUE_MIN: f64 = 185.0;
pub const HUE_MAX: f64 = 210.0;
pub const ALPHA_MIN: f64 = 0.12;
pub const ALPHA_MAX: f64 = 0.24;
pub const STREAK_MIN: f64 = 6.0;
pub const STREAK_MAX: f64 = 24.0;

// Streak styling
pub const STREAK_LINE_WIDTH: f64 = 1.2;
pub const STREAK_SATURATION: f64 = 90.0;
pub const STREAK_LIGHTNESS: f64 = 65.0;
pub const STREAK_TAIL: f64 = 0.2;
pub const STREAK_HEAD: f64 = 0.8;

// Background colour, #021114
pub const BACKGROUND_RGB: (u8, u8, u8) = (2, 17, 20);
