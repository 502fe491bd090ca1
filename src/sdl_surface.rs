use log::info;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::{Font, FontStyle, Sdl2TtfContext};
use sdl2::video::Window;

use crate::error::RenderError;
use crate::surface::{Color, Surface, TextStyle, TransformStack};

/// Page color behind the canvas.
pub const BACKGROUND: pixels::Color = pixels::Color::WHITE;

/// Color for the ttf text path, which takes channels as-is.
fn to_sdl(color: Color) -> pixels::Color {
    pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

/// Color for the gfx primitives. They receive the color packed big-endian
/// and read its bytes in memory order, so little-endian targets need the
/// channels reversed to come out as r, g, b, a.
fn to_abgr(color: Color) -> pixels::Color {
    if cfg!(target_endian = "little") {
        pixels::Color::RGBA(color.a, color.b, color.g, color.r)
    } else {
        to_sdl(color)
    }
}

fn to_pixel(p: [f64; 2]) -> (i16, i16) {
    (p[0].round() as i16, p[1].round() as i16)
}

pub struct Fonts<'ttf> {
    axis: Font<'ttf, 'static>,
    label: Font<'ttf, 'static>,
}

impl<'ttf> Fonts<'ttf> {
    pub fn load(ttf_context: &'ttf Sdl2TtfContext, path: &str) -> Result<Fonts<'ttf>, RenderError> {
        let axis = ttf_context
            .load_font(path, TextStyle::Axis.point_size())
            .map_err(RenderError::Font)?;
        let mut label = ttf_context
            .load_font(path, TextStyle::Label.point_size())
            .map_err(RenderError::Font)?;
        label.set_style(FontStyle::BOLD);
        info!("Loaded fonts from {}", path);
        Ok(Fonts { axis, label })
    }

    fn get(&self, style: TextStyle) -> &Font<'ttf, 'static> {
        match style {
            TextStyle::Axis => &self.axis,
            TextStyle::Label => &self.label,
        }
    }
}

/// [`Surface`] over an SDL window canvas.
pub struct SdlSurface<'a, 'ttf> {
    canvas: &'a mut Canvas<Window>,
    fonts: &'a Fonts<'ttf>,
    transforms: TransformStack,
}

impl<'a, 'ttf> SdlSurface<'a, 'ttf> {
    pub fn new(canvas: &'a mut Canvas<Window>, fonts: &'a Fonts<'ttf>) -> SdlSurface<'a, 'ttf> {
        SdlSurface {
            canvas,
            fonts,
            transforms: TransformStack::default(),
        }
    }
}

impl Surface for SdlSurface<'_, '_> {
    fn dimensions(&self) -> Option<(u32, u32)> {
        self.canvas.output_size().ok()
    }

    fn transform(&self) -> &TransformStack {
        &self.transforms
    }

    fn transform_mut(&mut self) -> &mut TransformStack {
        &mut self.transforms
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();
        Ok(())
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Color) -> Result<(), RenderError> {
        let (x1, y1) = to_pixel(self.to_device(from));
        let (x2, y2) = to_pixel(self.to_device(to));
        let width = (width * self.transforms.current().scale()).round().clamp(1.0, 255.0) as u8;
        self.canvas
            .thick_line(x1, y1, x2, y2, width, to_abgr(color))
            .map_err(RenderError::Draw)
    }

    fn fill_polygon(&mut self, points: &[[f64; 2]], color: Color) -> Result<(), RenderError> {
        let (vx, vy): (Vec<i16>, Vec<i16>) = points.iter().map(|p| to_pixel(self.to_device(*p))).unzip();
        self.canvas
            .filled_polygon(&vx, &vy, to_abgr(color))
            .map_err(RenderError::Draw)
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<(), RenderError> {
        let (x, y) = to_pixel(self.to_device(center));
        let rad = (radius * self.transforms.current().scale()).round() as i16;
        self.canvas
            .filled_circle(x, y, rad, to_abgr(color))
            .map_err(RenderError::Draw)
    }

    fn fill_text(&mut self, text: &str, at: [f64; 2], style: TextStyle, color: Color) -> Result<(), RenderError> {
        let fonts = self.fonts;
        let font = fonts.get(style);
        let text_surface = font
            .render(text)
            .blended(to_sdl(color))
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        let texture_creator = self.canvas.texture_creator();
        let text_texture = texture_creator
            .create_texture_from_surface(&text_surface)
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        let texture_query = text_texture.query();
        // SDL places text by its top edge; shift up so `at` sits on the baseline
        let [x, y] = self.to_device(at);
        let target_rect = Rect::new(
            x.round() as i32,
            y.round() as i32 - font.ascent(),
            texture_query.width,
            texture_query.height,
        );
        self.canvas
            .copy(&text_texture, None, Some(target_rect))
            .map_err(RenderError::Draw)
    }
}

#[cfg(test)]
mod test_sdl_surface {
    use super::*;
    use crate::surface::{AXIS_COLOR, FORCE_COLOR};
    use sdl2::gfx::primitives::ToColor;

    #[test]
    fn test_gfx_color_bytes_in_rgba_order() {
        // memory order of the packed value is what SDL2_gfx draws with
        let bytes = to_abgr(FORCE_COLOR).as_u32().to_ne_bytes();
        assert_eq!(bytes, [0x34, 0x98, 0xdb, 0xff]);
        let bytes = to_abgr(AXIS_COLOR).as_u32().to_ne_bytes();
        assert_eq!(bytes, [0x7f, 0x8c, 0x8d, 0xff]);
    }

    #[test]
    fn test_text_color_is_plain_rgba() {
        assert_eq!(to_sdl(FORCE_COLOR).rgba(), (0x34, 0x98, 0xdb, 0xff));
    }
}
