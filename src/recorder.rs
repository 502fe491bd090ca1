//! Headless surface that keeps a log of what would have been drawn.

use log::info;

use crate::error::RenderError;
use crate::surface::{Color, Surface, TextStyle, TransformStack};

/// One draw call, with every coordinate already mapped to device pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: u32, height: u32 },
    Line { from: [f64; 2], to: [f64; 2], width: f64, color: Color },
    Polygon { points: Vec<[f64; 2]>, color: Color },
    Circle { center: [f64; 2], radius: f64, color: Color },
    Text { text: String, at: [f64; 2], style: TextStyle, color: Color },
}

pub struct Recorder {
    width: u32,
    height: u32,
    attached: bool,
    transforms: TransformStack,
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Recorder {
        Recorder {
            width,
            height,
            attached: true,
            transforms: TransformStack::default(),
            commands: Vec::new(),
        }
    }

    /// A recorder standing in for a canvas whose context could not be acquired.
    pub fn detached(width: u32, height: u32) -> Recorder {
        Recorder { attached: false, ..Recorder::new(width, height) }
    }

    pub fn print_to_log(&self) {
        info!("--- Recorded frame {}x{} ---", self.width, self.height);
        for command in &self.commands {
            info!("{:?}", command);
        }
        info!("----------------------------");
    }
}

impl Surface for Recorder {
    fn dimensions(&self) -> Option<(u32, u32)> {
        self.attached.then_some((self.width, self.height))
    }

    fn transform(&self) -> &TransformStack {
        &self.transforms
    }

    fn transform_mut(&mut self) -> &mut TransformStack {
        &mut self.transforms
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width: self.width, height: self.height });
        Ok(())
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Color) -> Result<(), RenderError> {
        let command = DrawCommand::Line {
            from: self.to_device(from),
            to: self.to_device(to),
            width: width * self.transforms.current().scale(),
            color,
        };
        self.commands.push(command);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[[f64; 2]], color: Color) -> Result<(), RenderError> {
        let points = points.iter().map(|p| self.to_device(*p)).collect();
        self.commands.push(DrawCommand::Polygon { points, color });
        Ok(())
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<(), RenderError> {
        let command = DrawCommand::Circle {
            center: self.to_device(center),
            radius: radius * self.transforms.current().scale(),
            color,
        };
        self.commands.push(command);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: [f64; 2], style: TextStyle, color: Color) -> Result<(), RenderError> {
        let at = self.to_device(at);
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style, color });
        Ok(())
    }
}

#[cfg(test)]
mod test_recorder {
    use super::*;

    #[test]
    fn test_clear_discards_previous_commands() {
        let mut rec = Recorder::new(100, 80);
        rec.fill_circle([1.0, 1.0], 2.0, Color::rgb(0, 0, 0)).unwrap();
        rec.clear().unwrap();
        assert_eq!(rec.commands, vec![DrawCommand::Clear { width: 100, height: 80 }]);
    }

    #[test]
    fn test_transformed_polygon() {
        let mut rec = Recorder::new(100, 100);
        rec.save();
        rec.translate(50.0, 40.0);
        rec.fill_polygon(&[[0.0, 0.0], [-10.0, 0.0]], Color::rgb(1, 2, 3)).unwrap();
        rec.restore();
        rec.fill_polygon(&[[0.0, 0.0]], Color::rgb(1, 2, 3)).unwrap();
        match &rec.commands[..] {
            [DrawCommand::Polygon { points: a, .. }, DrawCommand::Polygon { points: b, .. }] => {
                assert_eq!(a, &vec![[50.0, 40.0], [40.0, 40.0]]);
                assert_eq!(b, &vec![[0.0, 0.0]]);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_detached_has_no_dimensions() {
        assert_eq!(Recorder::detached(10, 10).dimensions(), None);
        assert_eq!(Recorder::new(10, 20).dimensions(), Some((10, 20)));
    }
}
