//! Game tuning and startup options
//!
//! Every field has a default from `crate::consts`, so a partial JSON object
//! (or none at all) is a valid configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arena sizing rules (CSS pixels)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Horizontal space left around the arena
    pub margin_x: f32,
    /// Vertical space left for title, score and instructions
    pub margin_y: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            margin_x: ARENA_MARGIN_X,
            margin_y: ARENA_MARGIN_Y,
            max_width: ARENA_MAX_WIDTH,
            max_height: ARENA_MAX_HEIGHT,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Avatar ===
    /// Normalized units moved per arrow key press
    pub avatar_step: f32,
    pub avatar_start: (f32, f32),

    // === Target ===
    /// Normalized units moved per wander tick
    pub wander_step: f32,
    pub wander_interval_ms: f64,
    pub target_start: (f32, f32),

    // === Collision ===
    pub hit_radius: f32,
    pub hit_window_ms: f64,

    // === Arena ===
    pub arena: ArenaConfig,

    // === Loop ===
    /// Frame delta cap fed into the scheduler
    pub max_frame_ms: f64,
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Start with the autopilot steering the avatar
    pub autopilot: bool,
    /// Let the `i` key toggle the autopilot during play
    pub autopilot_key: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            avatar_step: AVATAR_KEY_STEP,
            avatar_start: AVATAR_START,
            wander_step: WANDER_STEP,
            wander_interval_ms: WANDER_INTERVAL_MS,
            target_start: TARGET_START,
            hit_radius: HIT_RADIUS,
            hit_window_ms: HIT_WINDOW_MS,
            arena: ArenaConfig::default(),
            max_frame_ms: MAX_FRAME_MS,
            seed: None,
            autopilot: false,
            autopilot_key: false,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Replace unusable values with defaults and clamp the rest
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !(self.avatar_step.is_finite() && self.avatar_step >= 0.0) {
            self.avatar_step = defaults.avatar_step;
        }
        if !(self.wander_step.is_finite() && self.wander_step >= 0.0) {
            self.wander_step = defaults.wander_step;
        }
        if !(self.hit_radius.is_finite() && self.hit_radius >= 0.0) {
            self.hit_radius = defaults.hit_radius;
        }
        // Periodic work needs a positive period or the scheduler would spin
        if !(self.wander_interval_ms.is_finite() && self.wander_interval_ms >= 1.0) {
            self.wander_interval_ms = defaults.wander_interval_ms;
        }
        if !(self.hit_window_ms.is_finite() && self.hit_window_ms >= 0.0) {
            self.hit_window_ms = defaults.hit_window_ms;
        }
        if !(self.max_frame_ms.is_finite() && self.max_frame_ms > 0.0) {
            self.max_frame_ms = defaults.max_frame_ms;
        }
        self.max_frame_ms = self.max_frame_ms.min(MAX_FRAME_LIMIT_MS);

        let arena_defaults = ArenaConfig::default();
        let arena = &mut self.arena;
        for (value, fallback) in [
            (&mut arena.margin_x, arena_defaults.margin_x),
            (&mut arena.margin_y, arena_defaults.margin_y),
            (&mut arena.max_width, arena_defaults.max_width),
            (&mut arena.max_height, arena_defaults.max_height),
        ] {
            if !(value.is_finite() && *value >= 0.0) {
                *value = fallback;
            }
        }

        let start = crate::clamp_position(self.avatar_start.into(), AVATAR_START.into());
        self.avatar_start = start.into();
        let start = crate::clamp_position(self.target_start.into(), TARGET_START.into());
        self.target_start = start.into();

        self
    }

    pub fn avatar_start(&self) -> Vec2 {
        self.avatar_start.into()
    }

    pub fn target_start(&self) -> Vec2 {
        self.target_start.into()
    }

    /// Element id of the inline JSON config block (used only in wasm32)
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "game-config";

    /// Load config from the page's `<script id="game-config">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from #{}", Self::ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config: {}", e);
                    Self::default()
                }
            },
            _ => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    /// Load config from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
