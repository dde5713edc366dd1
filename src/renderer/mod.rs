//! Rendering module
//!
//! Sprites are plain images drawn with the Canvas 2D API.

pub mod sprites;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use sprites::SpriteId;
