//! Immediate-mode drawing contract shared by the window and headless backends.

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Builds a color from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Color {
        Color::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

pub const AXIS_COLOR: Color = Color::hex(0x7f8c8d);
pub const FORCE_COLOR: Color = Color::hex(0x3498db);
pub const VELOCITY_COLOR: Color = Color::hex(0x2ecc71);

/// Fonts the renderer asks for. Backends map these onto whatever they loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// 12px regular, used for the axis captions.
    Axis,
    /// 14px bold, used for vector labels.
    Label,
}

impl TextStyle {
    pub fn point_size(&self) -> u16 {
        match self {
            TextStyle::Axis => 12,
            TextStyle::Label => 14,
        }
    }

    pub fn bold(&self) -> bool {
        matches!(self, TextStyle::Label)
    }
}

/// 2x3 affine matrix laid out like a canvas transform:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.e += self.a * tx + self.c * ty;
        self.f += self.b * tx + self.d * ty;
    }

    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let Affine { a, b, c, d, .. } = *self;
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    pub fn apply(&self, p: [f64; 2]) -> [f64; 2] {
        [
            self.a * p[0] + self.c * p[1] + self.e,
            self.b * p[0] + self.d * p[1] + self.f,
        ]
    }

    /// Length scale of the transform, used for radii and line widths.
    pub fn scale(&self) -> f64 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}

/// Current transform plus the save/restore stack.
#[derive(Clone, Debug, Default)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    pub fn current(&self) -> &Affine {
        &self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores are ignored, as on an HTML canvas.
    pub fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    pub fn reset(&mut self) {
        self.current = Affine::IDENTITY;
        self.saved.clear();
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// A 2D immediate-mode drawing context.
///
/// Points handed to the drawing methods are in the local frame set up by
/// `translate`/`rotate`; implementations map them through
/// [`Surface::transform`] to device pixels. Text is anchored canvas-style at
/// the left end of its baseline.
pub trait Surface {
    /// Pixel size of the surface, or `None` when it can no longer be drawn to.
    fn dimensions(&self) -> Option<(u32, u32)>;

    fn transform(&self) -> &TransformStack;

    fn transform_mut(&mut self) -> &mut TransformStack;

    /// Wipes every pixel. The transform is left untouched.
    fn clear(&mut self) -> Result<(), RenderError>;

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Color) -> Result<(), RenderError>;

    fn fill_polygon(&mut self, points: &[[f64; 2]], color: Color) -> Result<(), RenderError>;

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<(), RenderError>;

    fn fill_text(&mut self, text: &str, at: [f64; 2], style: TextStyle, color: Color) -> Result<(), RenderError>;

    fn save(&mut self) {
        self.transform_mut().save();
    }

    fn restore(&mut self) {
        self.transform_mut().restore();
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.transform_mut().current.translate(tx, ty);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform_mut().current.rotate(angle);
    }

    /// Maps a local point to device pixels.
    fn to_device(&self, p: [f64; 2]) -> [f64; 2] {
        self.transform().current().apply(p)
    }
}

#[cfg(test)]
mod test_surface {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(p: [f64; 2], q: [f64; 2]) -> bool {
        (p[0] - q[0]).abs() < 1e-9 && (p[1] - q[1]).abs() < 1e-9
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(FORCE_COLOR, Color::rgb(0x34, 0x98, 0xdb));
        assert_eq!(AXIS_COLOR.a, 255);
    }

    #[test]
    fn test_translate_then_rotate() {
        let mut m = Affine::IDENTITY;
        m.translate(10.0, 20.0);
        m.rotate(FRAC_PI_2);
        // local +X now points along device +Y, around the translated origin
        assert!(close(m.apply([0.0, 0.0]), [10.0, 20.0]));
        assert!(close(m.apply([1.0, 0.0]), [10.0, 21.0]));
        assert!(close(m.apply([0.0, 1.0]), [9.0, 20.0]));
        assert!((m.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_save_restore() {
        let mut stack = TransformStack::default();
        stack.save();
        stack.current.translate(5.0, 5.0);
        assert_eq!(stack.depth(), 1);
        stack.restore();
        assert_eq!(*stack.current(), Affine::IDENTITY);
        stack.restore();
        assert_eq!(stack.depth(), 0);
    }
}
