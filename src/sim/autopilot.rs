//! Demo mode steering
//!
//! Plays through the keyboard path: each decision is one arrow press, so the
//! avatar moves exactly as it would for a human player.

use glam::Vec2;

use crate::input::Direction;

/// Pick the arrow that reduces the larger axis gap to the target.
///
/// Returns `None` once both gaps are under half a step (another press would
/// overshoot).
pub fn choose_direction(avatar: Vec2, target: Vec2, step: f32) -> Option<Direction> {
    let delta = target - avatar;
    let dead_zone = step * 0.5;
    if delta.x.abs() < dead_zone && delta.y.abs() < dead_zone {
        return None;
    }

    if delta.x.abs() >= delta.y.abs() {
        Some(if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if delta.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}
