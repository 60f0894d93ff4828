//! Target random walk and relocation
//!
//! The target never looks at the avatar: each step picks a fresh uniform
//! direction, so the walk is bounded only by clamping at the arena edges.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::{COORD_MAX, COORD_MIN};
use crate::{clamp_position, direction_from_angle};

/// Displace `pos` by `step` along a uniformly random direction, clamped
pub fn wander_step<R: Rng>(pos: Vec2, step: f32, rng: &mut R) -> Vec2 {
    let theta = rng.random_range(0.0..TAU);
    clamp_position(pos + direction_from_angle(theta) * step, pos)
}

/// Uniform point over the whole arena
pub fn random_position<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random_range(COORD_MIN..COORD_MAX),
        rng.random_range(COORD_MIN..COORD_MAX),
    )
}
