//! Rendering module
//!
//! `scene` turns game state into flat-colored triangles in arena pixel space;
//! `pipeline` uploads and draws them with WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState};
pub use scene::{SceneView, Tween, build_scene};
pub use vertex::Vertex;
