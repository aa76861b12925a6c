use std::fmt;

use serde::{Deserialize, Serialize};
use vb_utils::BoundingBox;

/// Tunables for the agent physics pipeline, passed in at construction.
/// Defaults are the measured vanilla-survival values: accelerations in
/// blocks/tick^2, drags as per-tick fractions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub vertical_drag: f64,
    pub ground_drag: f64,
    pub walk_accel: f64,
    pub sprint_accel: f64,
    pub jump_accel: f64,
    /// Offset from the obstructing cell's y when the head clamps
    /// against a ceiling.
    pub vertical_offset: f64,
    /// Offset from the obstructing cell's face when a horizontal axis
    /// clamps against a wall.
    pub horizontal_offset: f64,
    /// Agent collision envelope extents. Wiki lists the player at 0.6
    /// wide; 0.8 leaves a little wiggle room.
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.08,
            vertical_drag: 0.02,
            ground_drag: 0.41,
            walk_accel: 0.15,
            sprint_accel: 0.20,
            jump_accel: 0.45,
            vertical_offset: -1.80,
            horizontal_offset: -0.04,
            width: 0.8,
            height: 1.8,
            depth: 0.8,
        }
    }
}

impl PhysicsConfig {
    /// The agent's own collision box.
    pub fn envelope(&self) -> BoundingBox {
        BoundingBox::new(self.width, self.height, self.depth)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.width > 0.0
            && self.height > 0.0
            && self.depth > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.depth.is_finite();
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }
}

/// Rejected at construction; the engine never runs with a degenerate
/// collision envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidBounds { width: f64, height: f64, depth: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBounds {
                width,
                height,
                depth,
            } => write!(
                f,
                "agent bounding box must have positive extents, got {}x{}x{}",
                width, height, depth
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
