//! Avatar/target proximity test
//!
//! Distances are measured in normalized units, so a hit covers a wider pixel
//! span horizontally than vertically on a non-square arena.

use glam::Vec2;

/// Euclidean distance between two normalized positions
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// A hit is declared strictly inside `radius`
#[inline]
pub fn is_collision(avatar: Vec2, target: Vec2, radius: f32) -> bool {
    distance(avatar, target) < radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HIT_RADIUS;

    #[test]
    fn test_same_point_collides() {
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(distance(p, p), 0.0);
        assert!(is_collision(p, p, HIT_RADIUS));
    }

    #[test]
    fn test_opposite_corners_miss() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 100.0);
        assert!((distance(a, b) - 141.421_36).abs() < 1e-3);
        assert!(!is_collision(a, b, HIT_RADIUS));
    }

    #[test]
    fn test_radius_is_exclusive() {
        let a = Vec2::new(10.0, 10.0);
        assert!(!is_collision(a, Vec2::new(18.0, 10.0), HIT_RADIUS));
        assert!(is_collision(a, Vec2::new(17.9, 10.0), HIT_RADIUS));
    }

    #[test]
    fn test_diagonal_inside_radius() {
        // 3-4-5 triangle scaled: distance 5
        let a = Vec2::new(40.0, 40.0);
        let b = Vec2::new(43.0, 44.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-5);
        assert!(is_collision(a, b, HIT_RADIUS));
    }
}
