//! The four numeric inputs the user edits, and how key presses change them.

use crate::renderer::Vector2D;
use crate::surface::{FORCE_COLOR, VELOCITY_COLOR};

pub const MAGNITUDE_RANGE: (f64, f64) = (0.0, 100.0);
pub const DIRECTION_RANGE: (f64, f64) = (0.0, 360.0);
const FINE_STEP: f64 = 1.0;
const COARSE_STEP: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    ForceMagnitude,
    ForceDirection,
    VelocityMagnitude,
    VelocityDirection,
}

impl Field {
    const ORDER: [Field; 4] = [
        Field::ForceMagnitude,
        Field::ForceDirection,
        Field::VelocityMagnitude,
        Field::VelocityDirection,
    ];

    fn index(self) -> usize {
        Field::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::ForceMagnitude => "force magnitude",
            Field::ForceDirection => "force direction",
            Field::VelocityMagnitude => "velocity magnitude",
            Field::VelocityDirection => "velocity direction",
        }
    }

    fn range(self) -> (f64, f64) {
        match self {
            Field::ForceMagnitude | Field::VelocityMagnitude => MAGNITUDE_RANGE,
            Field::ForceDirection | Field::VelocityDirection => DIRECTION_RANGE,
        }
    }
}

/// Magnitude and direction pairs for both vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub force: (f64, f64),
    pub velocity: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    NextField,
    PreviousField,
    Increase { coarse: bool },
    Decrease { coarse: bool },
    Apply(Preset),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    pub force: (f64, f64),
    pub velocity: (f64, f64),
    pub focus: Field,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            force: (50.0, 45.0),
            velocity: (30.0, 90.0),
            focus: Field::ForceMagnitude,
        }
    }
}

impl Controls {
    pub fn from_preset(preset: Preset) -> Controls {
        Controls {
            force: preset.force,
            velocity: preset.velocity,
            ..Controls::default()
        }
    }

    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::ForceMagnitude => self.force.0,
            Field::ForceDirection => self.force.1,
            Field::VelocityMagnitude => self.velocity.0,
            Field::VelocityDirection => self.velocity.1,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::ForceMagnitude => &mut self.force.0,
            Field::ForceDirection => &mut self.force.1,
            Field::VelocityMagnitude => &mut self.velocity.0,
            Field::VelocityDirection => &mut self.velocity.1,
        }
    }

    /// Applies `command`. Returns true when a vector value changed and the
    /// frame has to be redrawn.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::NextField => {
                self.focus = Field::ORDER[(self.focus.index() + 1) % Field::ORDER.len()];
                false
            }
            Command::PreviousField => {
                let len = Field::ORDER.len();
                self.focus = Field::ORDER[(self.focus.index() + len - 1) % len];
                false
            }
            Command::Increase { coarse } => self.nudge(if coarse { COARSE_STEP } else { FINE_STEP }),
            Command::Decrease { coarse } => self.nudge(-(if coarse { COARSE_STEP } else { FINE_STEP })),
            Command::Apply(preset) => {
                let changed = self.force != preset.force || self.velocity != preset.velocity;
                self.force = preset.force;
                self.velocity = preset.velocity;
                changed
            }
        }
    }

    fn nudge(&mut self, step: f64) -> bool {
        let focus = self.focus;
        let (min, max) = focus.range();
        let value = self.value_mut(focus);
        let nudged = (*value + step).clamp(min, max);
        let changed = nudged != *value;
        *value = nudged;
        changed
    }

    pub fn vectors(&self) -> [Vector2D; 2] {
        [
            Vector2D::new(self.force.0, self.force.1, FORCE_COLOR, "F"),
            Vector2D::new(self.velocity.0, self.velocity.1, VELOCITY_COLOR, "V"),
        ]
    }

    /// One-line summary, shown in the window title.
    pub fn summary(&self) -> String {
        format!(
            "F {:.0} @ {:.0}°  V {:.0} @ {:.0}°  [{}]",
            self.force.0,
            self.force.1,
            self.velocity.0,
            self.velocity.1,
            self.focus.name()
        )
    }
}
