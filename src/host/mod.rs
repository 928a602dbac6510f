//! SDL2 host adapter
//!
//! Implements the overlay's host interfaces on top of an SDL2 canvas:
//!
//! - [`SdlRenderer`] - sprites, translucent rects, bitmap text
//! - [`SdlAssets`] - PNG textures through `SDL2_image`

pub mod assets;
pub mod renderer;

pub use assets::SdlAssets;
pub use renderer::SdlRenderer;
