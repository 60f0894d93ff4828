//! Scene building: game state to triangle list
//!
//! Pure CPU side of rendering, so it is testable without a GPU. Sprites are
//! centered on their positions and glide toward them with a short linear
//! transition instead of snapping.

use glam::Vec2;

use super::shapes::{circle, ellipse, rect, rect_outline, star, triangle};
use super::vertex::{Vertex, colors};
use crate::consts::TRANSITION_MS;
use crate::sim::{ArenaSize, GameState};

/// Sprite radius in CSS pixels
pub const SPRITE_RADIUS_PX: f32 = 18.0;
/// Arena border thickness in CSS pixels
pub const BORDER_PX: f32 = 4.0;

const SEGMENTS: u32 = 24;

/// Linear glide from the last displayed point to the newest target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    elapsed_ms: f64,
    duration_ms: f64,
}

impl Tween {
    pub fn new(pos: Vec2, duration_ms: f64) -> Self {
        Self {
            from: pos,
            to: pos,
            elapsed_ms: duration_ms,
            duration_ms,
        }
    }

    /// Start a new glide from wherever the sprite is drawn now
    pub fn retarget(&mut self, to: Vec2) {
        if to != self.to {
            self.from = self.current();
            self.to = to;
            self.elapsed_ms = 0.0;
        }
    }

    pub fn update(&mut self, dt_ms: f64) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
    }

    pub fn current(&self) -> Vec2 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f32;
        self.from.lerp(self.to, t)
    }
}

/// Displayed (smoothed) sprite positions, normalized coordinates
#[derive(Debug, Clone)]
pub struct SceneView {
    avatar: Tween,
    target: Tween,
}

impl SceneView {
    pub fn new(state: &GameState) -> Self {
        Self {
            avatar: Tween::new(state.avatar(), TRANSITION_MS),
            target: Tween::new(state.target(), TRANSITION_MS),
        }
    }

    /// Follow the latest state, then advance the glides by `dt_ms`
    pub fn update(&mut self, state: &GameState, dt_ms: f64) {
        self.avatar.retarget(state.avatar());
        self.target.retarget(state.target());
        self.avatar.update(dt_ms);
        self.target.update(dt_ms);
    }

    pub fn avatar(&self) -> Vec2 {
        self.avatar.current()
    }

    pub fn target(&self) -> Vec2 {
        self.target.current()
    }

    pub fn build(&self, is_hit: bool, arena: ArenaSize) -> Vec<Vertex> {
        build_scene(self.avatar(), self.target(), is_hit, arena)
    }
}

/// Build the full frame in arena pixel coordinates
pub fn build_scene(avatar: Vec2, target: Vec2, is_hit: bool, arena: ArenaSize) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(1024);
    if arena.is_empty() {
        return vertices;
    }

    let size = Vec2::new(arena.width, arena.height);
    vertices.extend(rect(Vec2::ZERO, size, colors::ARENA_FIELD));
    vertices.extend(rect_outline(Vec2::ZERO, size, BORDER_PX, colors::ARENA_BORDER));

    let r = SPRITE_RADIUS_PX;
    vertices.extend(penguin(arena.to_pixels(avatar), r));
    if is_hit {
        vertices.extend(burst(arena.to_pixels(target), r));
    } else {
        vertices.extend(pig(arena.to_pixels(target), r));
    }

    vertices
}

fn penguin(c: Vec2, r: f32) -> Vec<Vertex> {
    let mut v = Vec::with_capacity(256);
    // feet
    v.extend(ellipse(c + Vec2::new(-0.35 * r, 0.9 * r), Vec2::new(0.3 * r, 0.12 * r), colors::PENGUIN_BEAK, 12));
    v.extend(ellipse(c + Vec2::new(0.35 * r, 0.9 * r), Vec2::new(0.3 * r, 0.12 * r), colors::PENGUIN_BEAK, 12));
    // body and belly
    v.extend(ellipse(c, Vec2::new(0.8 * r, r), colors::PENGUIN_BODY, SEGMENTS));
    v.extend(ellipse(c + Vec2::new(0.0, 0.2 * r), Vec2::new(0.55 * r, 0.7 * r), colors::PENGUIN_BELLY, SEGMENTS));
    // eyes
    for side in [-1.0, 1.0] {
        let eye = c + Vec2::new(side * 0.25 * r, -0.5 * r);
        v.extend(circle(eye, 0.15 * r, colors::EYE_WHITE, 10));
        v.extend(circle(eye, 0.07 * r, colors::EYE_PUPIL, 8));
    }
    // beak
    v.extend(triangle(
        c + Vec2::new(-0.15 * r, -0.3 * r),
        c + Vec2::new(0.15 * r, -0.3 * r),
        c + Vec2::new(0.0, -0.1 * r),
        colors::PENGUIN_BEAK,
    ));
    v
}

fn pig(c: Vec2, r: f32) -> Vec<Vertex> {
    let mut v = Vec::with_capacity(256);
    // ears
    for side in [-1.0, 1.0] {
        v.extend(triangle(
            c + Vec2::new(side * 0.35 * r, -0.75 * r),
            c + Vec2::new(side * 0.85 * r, -0.45 * r),
            c + Vec2::new(side * 0.75 * r, -1.05 * r),
            colors::PIG_EAR,
        ));
    }
    v.extend(circle(c, 0.9 * r, colors::PIG_SKIN, SEGMENTS));
    // eyes
    for side in [-1.0, 1.0] {
        v.extend(circle(c + Vec2::new(side * 0.35 * r, -0.25 * r), 0.09 * r, colors::EYE_PUPIL, 8));
    }
    // snout with nostrils
    let snout = c + Vec2::new(0.0, 0.2 * r);
    v.extend(ellipse(snout, Vec2::new(0.38 * r, 0.26 * r), colors::PIG_SNOUT, 16));
    for side in [-1.0, 1.0] {
        v.extend(circle(snout + Vec2::new(side * 0.13 * r, 0.0), 0.06 * r, colors::EYE_PUPIL, 8));
    }
    v
}

fn burst(c: Vec2, r: f32) -> Vec<Vertex> {
    let mut v = star(c, 0.45 * r, 1.2 * r, 8, colors::BURST_OUTER);
    v.extend(star(c, 0.25 * r, 0.7 * r, 8, colors::BURST_INNER));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn arena() -> ArenaSize {
        ArenaSize {
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_tween_glides_linearly() {
        let mut t = Tween::new(Vec2::ZERO, 100.0);
        assert_eq!(t.current(), Vec2::ZERO);

        t.retarget(Vec2::new(10.0, 0.0));
        assert_eq!(t.current(), Vec2::ZERO);
        t.update(50.0);
        assert!((t.current().x - 5.0).abs() < 1e-4);
        t.update(80.0);
        assert_eq!(t.current(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_tween_retarget_mid_glide_starts_from_drawn_point() {
        let mut t = Tween::new(Vec2::ZERO, 100.0);
        t.retarget(Vec2::new(10.0, 0.0));
        t.update(50.0);
        t.retarget(Vec2::new(10.0, 10.0));
        assert!((t.current() - Vec2::new(5.0, 0.0)).length() < 1e-4);
        t.update(100.0);
        assert_eq!(t.current(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_scene_view_follows_state() {
        let mut state = GameState::new(1, &GameConfig::default());
        let mut view = SceneView::new(&state);
        state.set_avatar_position(Vec2::new(80.0, 50.0));
        view.update(&state, 1000.0);
        assert_eq!(view.avatar(), Vec2::new(80.0, 50.0));
        assert_eq!(view.target(), state.target());
    }

    #[test]
    fn test_hit_swaps_target_sprite() {
        let idle = build_scene(Vec2::new(10.0, 10.0), Vec2::new(90.0, 90.0), false, arena());
        let hit = build_scene(Vec2::new(10.0, 10.0), Vec2::new(90.0, 90.0), true, arena());
        assert_ne!(idle.len(), hit.len());
        assert!(hit.iter().any(|v| v.color == colors::BURST_OUTER));
        assert!(!hit.iter().any(|v| v.color == colors::PIG_SKIN));
        assert!(idle.iter().any(|v| v.color == colors::PIG_SKIN));
    }

    #[test]
    fn test_sprites_centered_on_pixels() {
        let verts = build_scene(Vec2::new(50.0, 50.0), Vec2::new(0.0, 0.0), false, arena());
        // Body ellipse fan center sits on the avatar's pixel position
        assert!(
            verts
                .iter()
                .any(|v| v.color == colors::PENGUIN_BODY && v.position == [400.0, 300.0])
        );
    }

    #[test]
    fn test_empty_arena_draws_nothing() {
        let empty = ArenaSize {
            width: 0.0,
            height: 300.0,
        };
        assert!(build_scene(Vec2::ZERO, Vec2::ZERO, false, empty).is_empty());
    }
}
