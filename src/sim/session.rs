//! Session lifecycle
//!
//! A session is one mounted game: `start` arms the wander interval, input and
//! `advance` mutate state while active, and `teardown` cancels everything so
//! late events or frames can't touch disposed state.

use glam::Vec2;

use super::arena::{ArenaSize, BoundingRect};
use super::schedule::TaskHandle;
use super::state::{GameEvent, GameState, Task};
use crate::config::GameConfig;
use crate::consts::AUTOPILOT_PRESS_MS;
use crate::input::{KeyCommand, pointer_to_normalized};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, timers not armed yet
    Idle,
    Active,
    /// Torn down; all input is ignored
    Ended,
}

pub struct Session {
    config: GameConfig,
    pub state: GameState,
    arena: ArenaSize,
    phase: SessionPhase,
    wander: Option<TaskHandle>,
    autopilot: Option<TaskHandle>,
}

impl Session {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let config = config.validated();
        let state = GameState::new(config.seed.unwrap_or(seed), &config);
        Self {
            config,
            state,
            arena: ArenaSize::default(),
            phase: SessionPhase::Idle,
            wander: None,
            autopilot: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn arena(&self) -> ArenaSize {
        self.arena
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.autopilot.is_some()
    }

    /// Arm the wander timer (and autopilot if configured); idempotent
    pub fn start(&mut self) {
        if self.phase != SessionPhase::Idle {
            return;
        }
        self.phase = SessionPhase::Active;
        // Configured start positions may already overlap
        self.state.check_collision();
        self.wander = Some(
            self.state
                .scheduler
                .schedule_interval(self.config.wander_interval_ms, Task::Wander),
        );
        if self.config.autopilot {
            self.set_autopilot(true);
        }
        log::info!("Session started with seed: {}", self.state.seed);
    }

    /// Cancel every scheduled task; the session can't be restarted
    pub fn teardown(&mut self) {
        if self.phase == SessionPhase::Ended {
            return;
        }
        self.state.cancel_tasks();
        self.wander = None;
        self.autopilot = None;
        self.phase = SessionPhase::Ended;
        log::info!("Session ended with score {}", self.state.score());
    }

    /// Handle a `keydown` key name. Returns true if the key was recognized.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        match KeyCommand::from_key(key) {
            Some(KeyCommand::Move(dir)) => {
                self.state.nudge_avatar(dir.offset(self.state.avatar_step()));
                true
            }
            Some(KeyCommand::ToggleAutopilot) if self.config.autopilot_key => {
                let enable = !self.autopilot_enabled();
                self.set_autopilot(enable);
                true
            }
            Some(KeyCommand::ToggleAutopilot) | None => false,
        }
    }

    /// Handle a touch/drag sample in client coordinates.
    /// Returns true if the avatar was moved.
    pub fn handle_pointer(&mut self, client: Vec2, rect: Option<&BoundingRect>) -> bool {
        if !self.is_active() {
            return false;
        }
        match pointer_to_normalized(client, rect) {
            Some(pos) => {
                self.state.set_avatar_position(pos);
                true
            }
            None => false,
        }
    }

    /// Recompute the arena from the viewport size
    pub fn handle_resize(&mut self, viewport_width: f32, viewport_height: f32) -> ArenaSize {
        self.arena = ArenaSize::for_viewport(viewport_width, viewport_height, &self.config.arena);
        log::debug!(
            "Arena resized to {}x{} (viewport {}x{})",
            self.arena.width,
            self.arena.height,
            viewport_width,
            viewport_height
        );
        self.arena
    }

    pub fn set_autopilot(&mut self, enable: bool) {
        match (enable, self.autopilot) {
            (true, None) => {
                self.autopilot = Some(
                    self.state
                        .scheduler
                        .schedule_interval(AUTOPILOT_PRESS_MS, Task::AutopilotPress),
                );
                log::info!("Autopilot: on");
            }
            (false, Some(handle)) => {
                self.state.scheduler.cancel(handle);
                self.autopilot = None;
                log::info!("Autopilot: off");
            }
            _ => {}
        }
    }

    /// Advance virtual time by `dt_ms`, firing due tasks in order.
    /// Returns the events raised since the last call.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<GameEvent> {
        if !self.is_active() {
            return Vec::new();
        }
        let dt_ms = if dt_ms.is_finite() {
            dt_ms.clamp(0.0, self.config.max_frame_ms)
        } else {
            0.0
        };

        let until = self.state.scheduler.now_ms() + dt_ms;
        while let Some(task) = self.state.scheduler.pop_due(until) {
            self.state.run_task(task);
        }
        self.state.scheduler.advance_to(until);

        self.state.drain_events()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}
