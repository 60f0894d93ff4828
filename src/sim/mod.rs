//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual time only (advanced by the host in milliseconds)
//! - Seeded RNG only
//! - Tasks fire in (due time, scheduling order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod autopilot;
pub mod collision;
pub mod schedule;
pub mod session;
pub mod state;
pub mod wander;

pub use arena::{ArenaSize, BoundingRect};
pub use collision::{distance, is_collision};
pub use schedule::{Scheduler, TaskHandle};
pub use session::{Session, SessionPhase};
pub use state::{GameEvent, GameState, HitPhase, Task};
pub use wander::{random_position, wander_step};
