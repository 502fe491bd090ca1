//! Vector-to-canvas rendering pipeline.

use log::{error, warn};

use crate::error::RenderError;
use crate::library::*;
use crate::surface::{AXIS_COLOR, Color, Surface, TextStyle};

/// Visual multiplier from magnitude units to pixels.
pub const VECTOR_SCALE_FACTOR: f64 = 1.2;

/// A vector as handed over by the input layer. Lives for one render call.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector2D {
    pub magnitude: f64,
    /// Degrees, 0 along +X and increasing counter-clockwise. Not normalized.
    pub direction_degrees: f64,
    pub color: Color,
    pub label: String,
}

impl Vector2D {
    pub fn new(magnitude: f64, direction_degrees: f64, color: Color, label: &str) -> Vector2D {
        Vector2D {
            magnitude,
            direction_degrees,
            color,
            label: label.to_string(),
        }
    }
}

/// The drawing area of one frame. Every vector starts at its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasFrame {
    pub width: f64,
    pub height: f64,
}

impl CanvasFrame {
    pub fn new(width: u32, height: u32) -> CanvasFrame {
        CanvasFrame {
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn center(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }
}

/// Renderer tuning. None of it changes where a vector points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub scale_factor: f64,
    pub arrow_radius: f64,
    pub vector_width: f64,
    pub axis_width: f64,
    pub origin_radius: f64,
    pub axis_color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            scale_factor: VECTOR_SCALE_FACTOR,
            arrow_radius: 5.0,
            vector_width: 3.0,
            axis_width: 1.0,
            origin_radius: 3.0,
            axis_color: AXIS_COLOR,
        }
    }
}

/// Tip of a vector in screen pixels.
///
/// Screen Y grows downward, so the sine term is subtracted to keep 90° pointing up.
pub fn project_vector(origin: [f64; 2], magnitude: f64, direction_degrees: f64, scale_factor: f64) -> [f64; 2] {
    let radians = degrees_to_radians(direction_degrees);
    let length = magnitude * scale_factor;
    [
        origin[0] + length * radians.cos(),
        origin[1] - length * radians.sin(),
    ]
}

/// Arrowhead triangle in the tip's local frame, +X along the heading.
pub fn arrowhead_shape(radius: f64) -> [[f64; 2]; 3] {
    [[0.0, 0.0], [-radius * 2.0, -radius], [-radius * 2.0, radius]]
}

/// Offset from the tip to the label's baseline anchor.
///
/// `direction_radians` is the vector's direction, counter-clockwise from +X.
/// Leftward labels are pushed further left per extra character so they
/// clear the arrowhead.
pub fn label_offset(direction_radians: f64, label: &str) -> [f64; 2] {
    let screen = -direction_radians;
    let len = label.chars().count();
    let dx = if screen.cos() > 0.0 {
        10.0
    } else {
        -20.0 - 5.0 * len.saturating_sub(1) as f64
    };
    let dy = if screen.sin() < 0.0 { -10.0 } else { 20.0 };
    [dx, dy]
}

#[derive(Clone, Debug, Default)]
pub struct VectorRenderer {
    pub style: Style,
}

impl VectorRenderer {
    pub fn new(style: Style) -> VectorRenderer {
        VectorRenderer { style }
    }

    /// Clears `surface` and redraws axes plus `vectors`, in order, from `origin`.
    ///
    /// Zero-length vectors are skipped. Nothing is drawn if the surface is gone.
    pub fn render_frame<S: Surface>(
        &self,
        surface: &mut S,
        origin: [f64; 2],
        vectors: &[Vector2D],
    ) -> Result<(), RenderError> {
        let Some((width, height)) = surface.dimensions() else {
            error!("Render aborted: drawing surface unavailable");
            return Err(RenderError::MissingSurface);
        };
        surface.transform_mut().reset();
        surface.clear()?;
        self.draw_axes(surface, CanvasFrame::new(width, height), origin)?;
        for vector in vectors {
            self.draw_vector(surface, origin, vector)?;
        }
        Ok(())
    }

    /// Draws both axes through `origin`, the origin dot and the "+X"/"+Y" captions.
    ///
    /// The axes span the whole `frame` and use the muted axis color.
    pub fn draw_axes<S: Surface>(&self, surface: &mut S, frame: CanvasFrame, origin: [f64; 2]) -> Result<(), RenderError> {
        let color = self.style.axis_color;
        let width = self.style.axis_width;
        surface.stroke_line([0.0, origin[1]], [frame.width, origin[1]], width, color)?;
        surface.stroke_line([origin[0], 0.0], [origin[0], frame.height], width, color)?;
        surface.fill_circle(origin, self.style.origin_radius, color)?;
        surface.fill_text("+X", [frame.width - 20.0, origin[1] - 5.0], TextStyle::Axis, color)?;
        surface.fill_text("+Y", [origin[0] + 5.0, 15.0], TextStyle::Axis, color)?;
        Ok(())
    }

    /// Draws one vector from `origin`: shaft, arrowhead and label.
    ///
    /// Zero-length vectors draw nothing. Vectors with a non-finite magnitude or
    /// direction are skipped with a warning.
    pub fn draw_vector<S: Surface>(&self, surface: &mut S, origin: [f64; 2], vector: &Vector2D) -> Result<(), RenderError> {
        if !vector.magnitude.is_finite() || !vector.direction_degrees.is_finite() {
            warn!(
                "Skipping vector {:?}: magnitude {} direction {}",
                vector.label, vector.magnitude, vector.direction_degrees
            );
            return Ok(());
        }
        if vector.magnitude == 0.0 {
            return Ok(());
        }

        let tip = project_vector(origin, vector.magnitude, vector.direction_degrees, self.style.scale_factor);
        surface.stroke_line(origin, tip, self.style.vector_width, vector.color)?;
        self.draw_arrowhead(surface, origin, tip, vector.color)?;

        let offset = label_offset(degrees_to_radians(vector.direction_degrees), &vector.label);
        let anchor = [tip[0] + offset[0], tip[1] + offset[1]];
        surface.fill_text(&vector.label, anchor, TextStyle::Label, vector.color)
    }

    /// Fills the arrowhead triangle at `to`, pointing along `from -> to`.
    ///
    /// The triangle is posed by translating to the tip and rotating by the
    /// heading; the surface transform is restored afterwards.
    pub fn draw_arrowhead<S: Surface>(&self, surface: &mut S, from: [f64; 2], to: [f64; 2], color: Color) -> Result<(), RenderError> {
        surface.save();
        surface.translate(to[0], to[1]);
        surface.rotate(heading(from, to));
        let result = surface.fill_polygon(&arrowhead_shape(self.style.arrow_radius), color);
        surface.restore();
        result
    }
}

#[cfg(test)]
mod test_renderer {
    use super::*;
    use crate::recorder::{DrawCommand, Recorder};
    use crate::surface::{FORCE_COLOR, VELOCITY_COLOR};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ORIGIN: [f64; 2] = [150.0, 150.0];
    const EPS: f64 = 1e-9;

    fn close(p: [f64; 2], q: [f64; 2]) -> bool {
        (p[0] - q[0]).abs() < EPS && (p[1] - q[1]).abs() < EPS
    }

    fn render(vectors: &[Vector2D]) -> Vec<DrawCommand> {
        let mut rec = Recorder::new(300, 300);
        VectorRenderer::default().render_frame(&mut rec, ORIGIN, vectors).unwrap();
        rec.commands
    }

    fn polygons(commands: &[DrawCommand]) -> Vec<Vec<[f64; 2]>> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { points, .. } => Some(points.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_reference_endpoints() {
        assert!(close(project_vector(ORIGIN, 50.0, 0.0, 1.2), [210.0, 150.0]));
        assert!(close(project_vector(ORIGIN, 50.0, 90.0, 1.2), [150.0, 90.0]));
    }

    #[test]
    fn test_cardinal_directions() {
        let right = project_vector(ORIGIN, 10.0, 0.0, 1.2);
        assert!(right[0] > ORIGIN[0] && (right[1] - ORIGIN[1]).abs() < EPS);
        let up = project_vector(ORIGIN, 10.0, 90.0, 1.2);
        assert!(up[1] < ORIGIN[1] && (up[0] - ORIGIN[0]).abs() < EPS);
        let left = project_vector(ORIGIN, 10.0, 180.0, 1.2);
        assert!(left[0] < ORIGIN[0] && (left[1] - ORIGIN[1]).abs() < EPS);
        let down = project_vector(ORIGIN, 10.0, 270.0, 1.2);
        assert!(down[1] > ORIGIN[1] && (down[0] - ORIGIN[0]).abs() < EPS);
    }

    #[test]
    fn test_projection_is_periodic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let m: f64 = rng.random_range(0.0..100.0);
            let theta: f64 = rng.random_range(-720.0..720.0);
            let a = project_vector(ORIGIN, m, theta, 1.2);
            let b = project_vector(ORIGIN, m, theta + 360.0, 1.2);
            assert!((a[0] - b[0]).abs() < 1e-6 && (a[1] - b[1]).abs() < 1e-6, "theta {}", theta);
        }
    }

    #[test]
    fn test_length_is_linear_in_magnitude() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let m: f64 = rng.random_range(0.0..100.0);
            let theta: f64 = rng.random_range(-360.0..360.0);
            let tip = project_vector(ORIGIN, m, theta, 1.2);
            let length = get_magnitude(find_vector(ORIGIN, tip));
            assert!((length - m * 1.2).abs() < 1e-9);
            let double = project_vector(ORIGIN, 2.0 * m, theta, 1.2);
            let half_way = [(ORIGIN[0] + double[0]) / 2.0, (ORIGIN[1] + double[1]) / 2.0];
            assert!((half_way[0] - tip[0]).abs() < 1e-9 && (half_way[1] - tip[1]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_magnitude_draws_only_axes() {
        let axes_only = render(&[]);
        let zero = render(&[Vector2D::new(0.0, 45.0, FORCE_COLOR, "F")]);
        assert_eq!(zero, axes_only);
        // clear, two axis lines, origin dot, two captions
        assert_eq!(axes_only.len(), 6);
        assert!(matches!(axes_only[0], DrawCommand::Clear { width: 300, height: 300 }));
    }

    #[test]
    fn test_vector_commands() {
        let commands = render(&[Vector2D::new(50.0, 0.0, FORCE_COLOR, "F")]);
        assert_eq!(commands.len(), 9);
        assert_eq!(
            commands[6],
            DrawCommand::Line { from: ORIGIN, to: [210.0, 150.0], width: 3.0, color: FORCE_COLOR }
        );
        match &commands[8] {
            DrawCommand::Text { text, at, style, color } => {
                assert_eq!(text, "F");
                assert_eq!(*style, TextStyle::Label);
                assert_eq!(*color, FORCE_COLOR);
                assert!(close(*at, [220.0, 170.0]));
            }
            other => panic!("expected label, got {:?}", other),
        }
    }

    #[test]
    fn test_arrowhead_is_rigid() {
        let mut rng = StdRng::seed_from_u64(3);
        let radius = Style::default().arrow_radius;
        let canonical = arrowhead_shape(radius);
        for _ in 0..100 {
            let theta: f64 = rng.random_range(-400.0..400.0);
            let tip = project_vector(ORIGIN, 40.0, theta, 1.2);
            let commands = render(&[Vector2D::new(40.0, theta, VELOCITY_COLOR, "V")]);
            let polys = polygons(&commands);
            assert_eq!(polys.len(), 1);
            let angle = heading(ORIGIN, tip);
            for (vertex, expected) in polys[0].iter().zip(canonical.iter()) {
                let local = rotate(find_vector(tip, *vertex), -angle);
                assert!(close(local, *expected), "theta {}: {:?} vs {:?}", theta, local, expected);
            }
        }
    }

    #[test]
    fn test_arrowhead_points_along_vector() {
        let commands = render(&[Vector2D::new(50.0, 90.0, FORCE_COLOR, "F")]);
        let polys = polygons(&commands);
        // tip at (150, 90); the back corners sit below it
        assert!(close(polys[0][0], [150.0, 90.0]));
        assert!(close(polys[0][1], [145.0, 100.0]));
        assert!(close(polys[0][2], [155.0, 100.0]));
    }

    #[test]
    fn test_later_vectors_paint_last() {
        let commands = render(&[
            Vector2D::new(50.0, 0.0, FORCE_COLOR, "F"),
            Vector2D::new(30.0, 0.0, VELOCITY_COLOR, "V"),
        ]);
        let last_line = commands
            .iter()
            .rev()
            .find(|c| matches!(c, DrawCommand::Line { .. }));
        assert!(matches!(last_line, Some(DrawCommand::Line { color, .. }) if *color == VELOCITY_COLOR));
    }

    #[test]
    fn test_render_is_idempotent() {
        let vectors = [
            Vector2D::new(50.0, 45.0, FORCE_COLOR, "F"),
            Vector2D::new(30.0, 135.0, VELOCITY_COLOR, "V"),
        ];
        let renderer = VectorRenderer::default();
        let mut rec = Recorder::new(300, 300);
        renderer.render_frame(&mut rec, ORIGIN, &vectors).unwrap();
        let first = rec.commands.clone();
        renderer.render_frame(&mut rec, ORIGIN, &vectors).unwrap();
        assert_eq!(rec.commands, first);
        assert_eq!(rec.transform().depth(), 0);
    }

    #[test]
    fn test_missing_surface_draws_nothing() {
        let mut rec = Recorder::detached(300, 300);
        let result = VectorRenderer::default().render_frame(
            &mut rec,
            ORIGIN,
            &[Vector2D::new(50.0, 0.0, FORCE_COLOR, "F")],
        );
        assert_eq!(result, Err(RenderError::MissingSurface));
        assert!(rec.commands.is_empty());
    }

    #[test]
    fn test_non_finite_vector_is_skipped() {
        let axes_only = render(&[]);
        assert_eq!(render(&[Vector2D::new(f64::NAN, 0.0, FORCE_COLOR, "F")]), axes_only);
        assert_eq!(render(&[Vector2D::new(10.0, f64::INFINITY, FORCE_COLOR, "F")]), axes_only);
    }

    #[test]
    fn test_label_offsets() {
        assert_eq!(label_offset(degrees_to_radians(45.0), "F"), [10.0, -10.0]);
        assert_eq!(label_offset(degrees_to_radians(225.0), "F"), [-20.0, 20.0]);
        assert_eq!(label_offset(degrees_to_radians(225.0), "Fx"), [-25.0, 20.0]);
        assert_eq!(label_offset(degrees_to_radians(0.0), "V"), [10.0, 20.0]);
    }

    #[test]
    fn test_label_offset_uses_exact_direction() {
        // cos(270°) is a hair below zero, so the label goes left of the tip
        assert_eq!(label_offset(degrees_to_radians(270.0), "V"), [-20.0, 20.0]);
        assert_eq!(label_offset(degrees_to_radians(90.0), "V"), [10.0, -10.0]);

        let commands = render(&[Vector2D::new(50.0, 270.0, VELOCITY_COLOR, "V")]);
        match commands.last() {
            Some(DrawCommand::Text { text, at, .. }) => {
                assert_eq!(text, "V");
                assert!(close(*at, [130.0, 230.0]), "label at {:?}", at);
            }
            other => panic!("expected label, got {:?}", other),
        }
    }
}
