use std::marker::PhantomData;

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture};
use sdl2::video::Window;

use crate::overlay::{Renderer, Rgba};
use crate::placement::{Point, Size};
use crate::text::for_each_pixel;

/// Draws overlay requests onto an SDL2 window canvas
///
/// SDL has no depth buffer for 2D copies, so layer depth is expressed by
/// call order: whatever is issued last ends up on top.
pub struct SdlRenderer<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    _textures: PhantomData<&'t ()>,
}

impl<'c, 't> SdlRenderer<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>) -> Self {
        SdlRenderer {
            canvas,
            _textures: PhantomData,
        }
    }
}

fn to_color(color: Rgba) -> Color {
    Color::RGBA(color.r, color.g, color.b, color.a)
}

impl<'c, 't> Renderer for SdlRenderer<'c, 't> {
    type Texture = Texture<'t>;

    fn draw_sprite(
        &mut self,
        texture: &Self::Texture,
        position: Point,
        scale: f32,
        _layer_depth: f32,
    ) -> Result<(), String> {
        let query = texture.query();
        let width = (query.width as f32 * scale).round().max(1.0) as u32;
        let height = (query.height as f32 * scale).round().max(1.0) as u32;
        self.canvas
            .copy(texture, None, Rect::new(position.x, position.y, width, height))
    }

    fn draw_rect(&mut self, position: Point, size: Size, color: Rgba) -> Result<(), String> {
        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(to_color(color));
        self.canvas.fill_rect(Rect::new(
            position.x,
            position.y,
            size.width.max(0) as u32,
            size.height.max(0) as u32,
        ))
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        scale: i32,
        color: Rgba,
    ) -> Result<(), String> {
        let scale = scale.max(1);
        let mut pixels = Vec::new();
        for_each_pixel(text, |col, row| {
            pixels.push(Rect::new(
                position.x + col * scale,
                position.y + row * scale,
                scale as u32,
                scale as u32,
            ));
        });

        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(to_color(color));
        self.canvas.fill_rects(&pixels)
    }
}
