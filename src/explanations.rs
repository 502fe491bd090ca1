//! Static text shown next to the canvas.

use crate::controls::Preset;

pub const EXPLANATION: [&str; 5] = [
    "Vectors (like force and velocity) are quantities that have both magnitude (size/length) and direction.",
    "A force vector's magnitude represents the strength of the force, and its direction indicates how the force is applied.",
    "A velocity vector's magnitude represents the speed of an object, and its direction indicates the direction of its motion.",
    "The direction of a vector is often described by an angle relative to a reference axis (e.g., the positive x-axis).",
    "Force and velocity are distinct. An object can experience a force in one direction while moving in a completely different direction, such as a ball thrown upwards (velocity upwards, gravity force downwards).",
];

pub struct Example {
    pub title: &'static str,
    pub text: &'static str,
    pub preset: Preset,
}

pub const EXAMPLES: [Example; 4] = [
    Example {
        title: "Aligned Vectors",
        text: "Force and velocity point the same way. This might represent an object accelerating in its direction of motion.",
        preset: Preset { force: (50.0, 45.0), velocity: (30.0, 45.0) },
    },
    Example {
        title: "Opposed Vectors",
        text: "Force and velocity point in opposite directions. This could represent a braking force or air resistance opposing motion.",
        preset: Preset { force: (50.0, 0.0), velocity: (30.0, 180.0) },
    },
    Example {
        title: "Perpendicular Vectors",
        text: "Force and velocity at 90° to each other. This is characteristic of circular motion where the force is centripetal.",
        preset: Preset { force: (50.0, 0.0), velocity: (30.0, 90.0) },
    },
    Example {
        title: "Zero Magnitude",
        text: "The force vector disappears. No force is applied, or the object is at rest if velocity is also zero.",
        preset: Preset { force: (0.0, 45.0), velocity: (30.0, 90.0) },
    },
];

/// Explanation and example cases as plain text, examples numbered by their key.
pub fn render_text() -> String {
    let mut out = String::from("About vectors:\n");
    for point in EXPLANATION {
        out.push_str(&format!("  * {}\n", point));
    }
    out.push_str("\nExample cases to explore:\n");
    for (i, example) in EXAMPLES.iter().enumerate() {
        let Preset { force, velocity } = example.preset;
        out.push_str(&format!(
            "  [{}] {} (Force: {} at {}°, Velocity: {} at {}°): {}\n",
            i + 1,
            example.title,
            force.0,
            force.1,
            velocity.0,
            velocity.1,
            example.text
        ));
    }
    out
}
