//! Arena geometry
//!
//! Positions live in a normalized 0-100 space; the arena is the pixel box
//! those percentages are laid over.

use glam::Vec2;

use crate::config::ArenaConfig;
use crate::consts::{ARENA_INITIAL, COORD_MAX};

/// Arena size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaSize {
    fn default() -> Self {
        Self {
            width: ARENA_INITIAL.0,
            height: ARENA_INITIAL.1,
        }
    }
}

impl ArenaSize {
    /// Fit the arena to a viewport: `min(viewport - margin, max)` per axis
    pub fn for_viewport(viewport_width: f32, viewport_height: f32, config: &ArenaConfig) -> Self {
        let fit = |viewport: f32, margin: f32, max: f32| {
            if viewport.is_finite() {
                (viewport - margin).min(max).max(0.0)
            } else {
                max
            }
        };
        Self {
            width: fit(viewport_width, config.margin_x, config.max_width),
            height: fit(viewport_height, config.margin_y, config.max_height),
        }
    }

    /// Pixel offset of a normalized position from the arena's top-left corner
    pub fn to_pixels(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x / COORD_MAX * self.width,
            pos.y / COORD_MAX * self.height,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Host-reported bounding rectangle of the arena surface (client coords)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect that can't be divided by is treated as missing
    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Convert a client point into unclamped normalized coordinates
    pub fn normalize(&self, client: Vec2) -> Option<Vec2> {
        if !self.is_usable() || !client.is_finite() {
            return None;
        }
        Some(Vec2::new(
            (client.x - self.left) / self.width * COORD_MAX,
            (client.y - self.top) / self.height * COORD_MAX,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_large_viewport_hits_max() {
        let size = ArenaSize::for_viewport(1000.0, 800.0, &ArenaConfig::default());
        assert_eq!(size.width, 800.0);
        assert_eq!(size.height, 600.0);
    }

    #[test]
    fn test_arena_small_viewport_subtracts_margins() {
        let size = ArenaSize::for_viewport(400.0, 700.0, &ArenaConfig::default());
        assert_eq!(size.width, 360.0);
        assert_eq!(size.height, 500.0);
    }

    #[test]
    fn test_arena_tiny_viewport_floors_at_zero() {
        let size = ArenaSize::for_viewport(20.0, 100.0, &ArenaConfig::default());
        assert_eq!(size.width, 0.0);
        assert_eq!(size.height, 0.0);
        assert!(size.is_empty());
    }

    #[test]
    fn test_to_pixels() {
        let size = ArenaSize {
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(size.to_pixels(Vec2::new(50.0, 50.0)), Vec2::new(400.0, 300.0));
        assert_eq!(size.to_pixels(Vec2::new(100.0, 0.0)), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_normalize_client_point() {
        let rect = BoundingRect::new(20.0, 100.0, 800.0, 600.0);
        let pos = rect.normalize(Vec2::new(420.0, 250.0)).unwrap();
        assert!((pos.x - 50.0).abs() < 1e-4);
        assert!((pos.y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_outside_rect_is_unclamped() {
        let rect = BoundingRect::new(0.0, 0.0, 200.0, 100.0);
        let pos = rect.normalize(Vec2::new(-20.0, 150.0)).unwrap();
        assert!((pos.x + 10.0).abs() < 1e-4);
        assert!((pos.y - 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_rect_is_ignored() {
        let zero = BoundingRect::new(0.0, 0.0, 0.0, 100.0);
        assert_eq!(zero.normalize(Vec2::new(10.0, 10.0)), None);
        let nan = BoundingRect::new(f32::NAN, 0.0, 100.0, 100.0);
        assert_eq!(nan.normalize(Vec2::new(10.0, 10.0)), None);
    }
}
