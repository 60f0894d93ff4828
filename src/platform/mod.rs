//! Platform abstraction layer (browser)
//!
//! Handles the page side of a session:
//! - Input events (scoped listener registration)
//! - Frame pacing (`requestAnimationFrame`)
//! - Canvas sizing and HUD updates

pub mod dom;
pub mod frame;
pub mod listeners;
pub mod mount;

pub use frame::AnimationFrameLoop;
pub use listeners::EventListeners;
pub use mount::{GameMount, mount};
