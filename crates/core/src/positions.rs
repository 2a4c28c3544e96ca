//! Position types shared by both editions

use serde::{Deserialize, Serialize};

/// Floating point world position (Bedrock wire precision)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Narrow a Java double precision position to wire precision
    pub fn from_f64(x: f64, y: f64, z: f64) -> Self {
        Self::new(x as f32, y as f32, z as f32)
    }

    pub fn add(self, x: f32, y: f32, z: f32) -> Self {
        Self::new(self.x + x, self.y + y, self.z + z)
    }

    /// Raise the position by `dy` blocks
    pub fn up(self, dy: f32) -> Self {
        self.add(0.0, dy, 0.0)
    }
}

/// Integer block position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3i {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn to_float(self) -> Vector3f {
        Vector3f::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Center of the block this position names
    pub fn center(self) -> Vector3f {
        self.to_float().add(0.5, 0.5, 0.5)
    }
}
