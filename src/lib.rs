//! Penguin Chase - a single-screen reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (positions, wander, collision, scheduling)
//! - `input`: Key and pointer translation into avatar moves
//! - `config`: Data-driven tuning loaded from the host page or a file
//! - `renderer`: Scene building and the WebGPU pipeline
//! - `platform`: Browser glue (listeners, animation frames, DOM), wasm32 only

pub mod config;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use sim::{GameState, Session};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Normalized coordinate bounds (percent of arena width/height)
    pub const COORD_MIN: f32 = 0.0;
    pub const COORD_MAX: f32 = 100.0;

    /// Avatar starts centered, target off-center
    pub const AVATAR_START: (f32, f32) = (50.0, 50.0);
    pub const TARGET_START: (f32, f32) = (25.0, 25.0);

    /// Avatar displacement per directional key press
    pub const AVATAR_KEY_STEP: f32 = 3.0;

    /// Target random walk step and period
    pub const WANDER_STEP: f32 = 1.5;
    pub const WANDER_INTERVAL_MS: f64 = 50.0;

    /// Collision distance (normalized units, strict less-than)
    pub const HIT_RADIUS: f32 = 8.0;
    /// Hit window before the target is relocated
    pub const HIT_WINDOW_MS: f64 = 500.0;

    /// Arena sizing: width = min(viewport_w - margin, max)
    pub const ARENA_MARGIN_X: f32 = 40.0;
    pub const ARENA_MARGIN_Y: f32 = 200.0;
    pub const ARENA_MAX_WIDTH: f32 = 800.0;
    pub const ARENA_MAX_HEIGHT: f32 = 600.0;
    /// Arena size before the first viewport measurement
    pub const ARENA_INITIAL: (f32, f32) = (600.0, 400.0);

    /// Autopilot key press cadence
    pub const AUTOPILOT_PRESS_MS: f64 = 100.0;

    /// Longest frame delta fed to the scheduler (hidden tab catch-up cap)
    pub const MAX_FRAME_MS: f64 = 250.0;
    /// Upper bound accepted for a configured frame delta cap
    pub const MAX_FRAME_LIMIT_MS: f64 = 1000.0;

    /// Display transition length for sprite movement
    pub const TRANSITION_MS: f64 = 100.0;
}

/// Clamp a single normalized coordinate, keeping `fallback` for NaN
#[inline]
pub fn clamp_coord(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(consts::COORD_MIN, consts::COORD_MAX)
    }
}

/// Clamp a position into the arena, component by component
#[inline]
pub fn clamp_position(pos: Vec2, previous: Vec2) -> Vec2 {
    Vec2::new(clamp_coord(pos.x, previous.x), clamp_coord(pos.y, previous.y))
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
