//! Force and velocity vector visualizer.
//!
//! The core is [`renderer::VectorRenderer`], a stateless mapping from a list of
//! vectors to drawing commands on any [`surface::Surface`].

pub mod controls;
pub mod error;
pub mod explanations;
pub mod recorder;
pub mod renderer;
#[cfg(feature = "gui")]
pub mod sdl_surface;
pub mod surface;

pub mod library {
    use std::f64::consts::PI;

    pub fn degrees_to_radians(degrees: f64) -> f64 {
        degrees * (PI / 180.0)
    }

    pub fn find_vector(x: [f64; 2], y: [f64; 2]) -> [f64; 2] {
        [y[0] - x[0], y[1] - x[1]]
    }

    pub fn get_magnitude(vec: [f64; 2]) -> f64 {
        (vec[0].powi(2) + vec[1].powi(2)).sqrt()
    }

    /// Heading of the segment `from -> to` in screen space.
    pub fn heading(from: [f64; 2], to: [f64; 2]) -> f64 {
        let vec = find_vector(from, to);
        vec[1].atan2(vec[0])
    }

    pub fn rotate(vec: [f64; 2], angle: f64) -> [f64; 2] {
        let (sin, cos) = angle.sin_cos();
        [vec[0] * cos - vec[1] * sin, vec[0] * sin + vec[1] * cos]
    }
}

#[cfg(test)]
mod test_library {
    use super::library::*;

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((degrees_to_radians(-90.0) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate([1.0, 0.0], std::f64::consts::FRAC_PI_2);
        assert!(r[0].abs() < 1e-12);
        assert!((r[1] - 1.0).abs() < 1e-12);
        assert!((get_magnitude(rotate([3.0, 4.0], 1.3)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading([0.0, 0.0], [1.0, 0.0]), 0.0);
        assert!((heading([5.0, 5.0], [5.0, 0.0]) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
