//! Input translation
//!
//! Host-agnostic: the browser glue hands over key names (`KeyboardEvent.key`)
//! and client coordinates; everything here is plain data.

use glam::Vec2;

use crate::sim::BoundingRect;

/// One of the four arrow directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Recognize a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn as_key(&self) -> &'static str {
        match self {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }

    /// Offset for one press; screen y grows downward
    pub fn offset(&self, step: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -step),
            Direction::Down => Vec2::new(0.0, step),
            Direction::Left => Vec2::new(-step, 0.0),
            Direction::Right => Vec2::new(step, 0.0),
        }
    }
}

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Move(Direction),
    /// Toggle the autopilot (demo) mode
    ToggleAutopilot,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_key(key) {
            return Some(KeyCommand::Move(dir));
        }
        match key {
            "i" | "I" => Some(KeyCommand::ToggleAutopilot),
            _ => None,
        }
    }
}

/// Whether a `pointerdown`/`pointermove` sample drags the avatar: primary
/// button held, any pointer but touch (the touch listeners cover that)
pub fn is_pointer_drag(pointer_type: &str, buttons: u16) -> bool {
    pointer_type != "touch" && buttons & 1 != 0
}

/// Convert a pointer/touch client point to a normalized arena position.
///
/// Returns `None` when the arena rect is missing or degenerate; the caller
/// drops the event. The result is not clamped; the position setter does that.
pub fn pointer_to_normalized(client: Vec2, rect: Option<&BoundingRect>) -> Option<Vec2> {
    rect?.normalize(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_recognized() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_key(dir.as_key()), Some(dir));
            assert_eq!(KeyCommand::from_key(dir.as_key()), Some(KeyCommand::Move(dir)));
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in ["w", "Enter", " ", "arrowup", "Up", ""] {
            assert_eq!(Direction::from_key(key), None, "key {:?}", key);
        }
        assert_eq!(KeyCommand::from_key("x"), None);
        assert_eq!(KeyCommand::from_key("I"), Some(KeyCommand::ToggleAutopilot));
    }

    #[test]
    fn test_offsets_single_axis() {
        assert_eq!(Direction::Up.offset(3.0), Vec2::new(0.0, -3.0));
        assert_eq!(Direction::Down.offset(3.0), Vec2::new(0.0, 3.0));
        assert_eq!(Direction::Left.offset(3.0), Vec2::new(-3.0, 0.0));
        assert_eq!(Direction::Right.offset(3.0), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_pointer_drag_accepts_mouse_and_pen() {
        assert!(is_pointer_drag("mouse", 1));
        assert!(is_pointer_drag("pen", 1));
        assert!(is_pointer_drag("pen", 3));
        // Hover without a pressed primary button
        assert!(!is_pointer_drag("mouse", 0));
        assert!(!is_pointer_drag("pen", 2));
        // Touch goes through touchstart/touchmove
        assert!(!is_pointer_drag("touch", 1));
    }

    #[test]
    fn test_pointer_without_rect_is_noop() {
        assert_eq!(pointer_to_normalized(Vec2::new(10.0, 10.0), None), None);
    }

    #[test]
    fn test_pointer_maps_into_percent() {
        let rect = BoundingRect::new(100.0, 50.0, 400.0, 200.0);
        let pos = pointer_to_normalized(Vec2::new(200.0, 200.0), Some(&rect)).unwrap();
        assert!((pos.x - 25.0).abs() < 1e-4);
        assert!((pos.y - 75.0).abs() < 1e-4);
    }
}
