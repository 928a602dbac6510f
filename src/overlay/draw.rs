//! Draw primitives the host supplies, and the requests built for them
//!
//! The coordinator never touches pixels. It builds a [`DrawRequest`] and
//! hands it to a [`Renderer`]. The marker texture comes from an
//! [`AssetProvider`] once at startup.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::placement::{Point, Size};

/// Layer depth of the marker sprite: above overlay content, below modals
pub const MARKER_LAYER_DEPTH: f32 = 0.86;

/// Pixels the background square extends past the marker on each side
pub const BACKGROUND_MARGIN: i32 = 2;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// Half-transparent black behind the marker
    pub const MARKER_BACKGROUND: Rgba = Rgba::new(0, 0, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }
}

/// Opaque drawing primitives provided by the host
pub trait Renderer {
    type Texture;

    fn draw_sprite(
        &mut self,
        texture: &Self::Texture,
        position: Point,
        scale: f32,
        layer_depth: f32,
    ) -> Result<(), String>;

    fn draw_rect(&mut self, position: Point, size: Size, color: Rgba) -> Result<(), String>;

    /// Draws `text` with the built-in bitmap glyphs at integer `scale`
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        scale: i32,
        color: Rgba,
    ) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
}

/// Loads textures from the host's content pipeline
pub trait AssetProvider {
    type Texture;

    fn load(&mut self, path: &Path) -> Result<Self::Texture, AssetError>;
}

/// One primitive inside a draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background { position: Point, size: Size, color: Rgba },
    Marker { position: Point, scale: f32, layer_depth: f32 },
    Label { text: String, position: Point, scale: i32, color: Rgba },
}

/// Everything the overlay draws in one frame, in draw order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawRequest {
    pub commands: Vec<DrawCommand>,
}

impl DrawRequest {
    pub fn has_marker(&self) -> bool {
        self.commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Marker { .. }))
    }

    /// Issues every command to `renderer`, stopping at the first failure
    ///
    /// Marker commands are skipped when no marker texture is available.
    pub fn submit<R>(&self, renderer: &mut R, marker: Option<&R::Texture>) -> Result<(), String>
    where
        R: Renderer + ?Sized,
    {
        for command in &self.commands {
            match command {
                DrawCommand::Background { position, size, color } => {
                    renderer.draw_rect(*position, *size, *color)?;
                }
                DrawCommand::Marker { position, scale, layer_depth } => {
                    if let Some(texture) = marker {
                        renderer.draw_sprite(texture, *position, *scale, *layer_depth)?;
                    }
                }
                DrawCommand::Label { text, position, scale, color } => {
                    renderer.draw_text(text, *position, *scale, *color)?;
                }
            }
        }
        Ok(())
    }
}
