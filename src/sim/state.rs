//! Game state and the position/collision rules
//!
//! Positions only change through `set_avatar_position` and
//! `set_target_position`; both clamp and then re-run the collision check
//! before returning.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::autopilot::choose_direction;
use super::collision::is_collision;
use super::schedule::{Scheduler, TaskHandle};
use super::wander::{random_position, wander_step};
use crate::clamp_position;
use crate::config::GameConfig;

/// Scheduled work owned by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Random-walk step for the target
    Wander,
    /// End of the hit window: clear the flag and relocate the target
    ResetHit,
    /// Demo mode: press the arrow key that closes in on the target
    AutopilotPress,
}

/// Two-phase cycle of the target after a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPhase {
    Normal,
    /// Hit registered; relocation pending
    HitPending,
}

/// Notable things that happened during an update (drained by the host)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Avatar reached the target; score already includes this hit
    Collision { score: u64, at: Vec2 },
    /// Hit window ended and the target moved
    Relocated { to: Vec2 },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    avatar: Vec2,
    target: Vec2,
    score: u64,
    is_hit: bool,
    /// Pending end-of-hit-window task
    hit_reset: Option<TaskHandle>,
    pub scheduler: Scheduler<Task>,
    /// Events since the last `drain_events`
    events: Vec<GameEvent>,
    avatar_step: f32,
    wander_step: f32,
    hit_radius: f32,
    hit_window_ms: f64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            avatar: config.avatar_start(),
            target: config.target_start(),
            score: 0,
            is_hit: false,
            hit_reset: None,
            scheduler: Scheduler::new(),
            events: Vec::new(),
            avatar_step: config.avatar_step,
            wander_step: config.wander_step,
            hit_radius: config.hit_radius,
            hit_window_ms: config.hit_window_ms,
        }
    }

    pub fn avatar(&self) -> Vec2 {
        self.avatar
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    pub fn phase(&self) -> HitPhase {
        if self.is_hit {
            HitPhase::HitPending
        } else {
            HitPhase::Normal
        }
    }

    pub fn avatar_step(&self) -> f32 {
        self.avatar_step
    }

    /// Store a clamped avatar position and re-check collision
    pub fn set_avatar_position(&mut self, pos: Vec2) {
        self.avatar = clamp_position(pos, self.avatar);
        self.check_collision();
    }

    /// Store a clamped target position and re-check collision
    pub fn set_target_position(&mut self, pos: Vec2) {
        self.target = clamp_position(pos, self.target);
        self.check_collision();
    }

    /// Move the avatar by a normalized offset (arrow keys)
    pub fn nudge_avatar(&mut self, delta: Vec2) {
        self.set_avatar_position(self.avatar + delta);
    }

    /// Score a hit if avatar and target overlap outside a hit window
    pub fn check_collision(&mut self) {
        // One hit per window; overlapping frames don't add score
        if self.is_hit || !is_collision(self.avatar, self.target, self.hit_radius) {
            return;
        }

        self.score += 1;
        self.is_hit = true;
        self.hit_reset = Some(
            self.scheduler
                .schedule_once(self.hit_window_ms, Task::ResetHit),
        );
        self.events.push(GameEvent::Collision {
            score: self.score,
            at: self.target,
        });
        log::debug!(
            "Hit at ({:.1}, {:.1}), score {}",
            self.target.x,
            self.target.y,
            self.score
        );
    }

    /// Execute a task handed back by the scheduler
    pub fn run_task(&mut self, task: Task) {
        match task {
            Task::Wander => {
                let next = wander_step(self.target, self.wander_step, &mut self.rng);
                self.set_target_position(next);
            }
            Task::ResetHit => {
                self.hit_reset = None;
                self.is_hit = false;
                // Relocation may land on the avatar and hit again at once
                let to = random_position(&mut self.rng);
                self.set_target_position(to);
                self.events.push(GameEvent::Relocated { to: self.target });
            }
            Task::AutopilotPress => {
                if let Some(dir) = choose_direction(self.avatar, self.target, self.avatar_step) {
                    self.nudge_avatar(dir.offset(self.avatar_step));
                }
            }
        }
    }

    /// Drop pending work; the hit flag stays as it was
    pub fn cancel_tasks(&mut self) {
        self.scheduler.cancel_all();
        self.hit_reset = None;
    }

    pub fn hit_reset_pending(&self) -> bool {
        self.hit_reset
            .is_some_and(|handle| self.scheduler.is_pending(handle))
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
