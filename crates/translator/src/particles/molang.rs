//! # Molang Variables
//!
//! Builders for the Molang variable tree carried in the
//! `molang_variables_json` field of a spawn particle effect packet. The
//! optional pack's particle definitions read these variables to reproduce
//! Java count, spread, speed and color.
//!
//! ## Wire Format
//!
//! ```text
//! [
//!   {"name": "variable.amount", "value": {"type": "float", "value": 4.0}},
//!   {"name": "variable.offset", "value": {"type": "member_array", "value": [
//!     {"name": ".x", "value": {"type": "float", "value": 2.0}},
//!     ...
//!   ]}}
//! ]
//! ```
//!
//! Sibling names are not required to be unique; the client reads member
//! arrays positionally.

use serde::{Deserialize, Serialize};

/// Number of instances the effect spawns
pub const AMOUNT: &str = "variable.amount";
/// Particle speed
pub const VELOCITY: &str = "variable.velocity";
/// Spawn volume on each axis
pub const OFFSET: &str = "variable.offset";
/// Dust color
pub const COLOR: &str = "variable.color";
/// Transition dust start color
pub const START_COLOR: &str = "variable.start_color";
/// Transition dust end color
pub const END_COLOR: &str = "variable.end_color";
/// Dust size
pub const SCALE: &str = "variable.scale";

/// Java offsets are standard deviations; the pack's emitters take the full
/// extent of the spawn box.
const OFFSET_SCALE: f32 = 4.0;

/// A named Molang variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MolangVariable {
    pub name: String,
    pub value: MolangValue,
}

/// The value of a [`MolangVariable`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MolangValue {
    Float(f32),
    MemberArray(Vec<MolangVariable>),
}

impl MolangVariable {
    /// A float leaf
    pub fn float(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value: MolangValue::Float(value),
        }
    }

    /// A member array of child variables
    pub fn member_array(name: impl Into<String>, children: Vec<MolangVariable>) -> Self {
        Self {
            name: name.into(),
            value: MolangValue::MemberArray(children),
        }
    }

    /// A member array with `.x`, `.y` and `.z` leaves
    pub fn vector3(name: impl Into<String>, x: f32, y: f32, z: f32) -> Self {
        Self::member_array(
            name,
            vec![Self::float(".x", x), Self::float(".y", y), Self::float(".z", z)],
        )
    }

    /// A member array with `.r`, `.g` and `.b` leaves
    pub fn color(name: impl Into<String>, red: f32, green: f32, blue: f32) -> Self {
        Self::member_array(
            name,
            vec![Self::float(".r", red), Self::float(".g", green), Self::float(".b", blue)],
        )
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            MolangValue::Float(value) => Some(value),
            MolangValue::MemberArray(_) => None,
        }
    }

    pub fn children(&self) -> Option<&[MolangVariable]> {
        match &self.value {
            MolangValue::Float(_) => None,
            MolangValue::MemberArray(children) => Some(children),
        }
    }

    /// Whether every float leaf under this variable is finite
    ///
    /// JSON has no NaN or infinity, so a tree failing this check cannot be
    /// decoded by the client.
    pub fn is_finite(&self) -> bool {
        match &self.value {
            MolangValue::Float(value) => value.is_finite(),
            MolangValue::MemberArray(children) => children.iter().all(MolangVariable::is_finite),
        }
    }
}

/// The variables every optional pack particle reads
///
/// `variable.amount` is at least 1: a Java count of 0 still spawns one
/// particle.
pub fn default_variables(count: i32, offset: [f32; 3], velocity: f32) -> Vec<MolangVariable> {
    vec![
        MolangVariable::float(AMOUNT, count.max(1) as f32),
        MolangVariable::float(VELOCITY, velocity),
        MolangVariable::vector3(
            OFFSET,
            offset[0] * OFFSET_SCALE,
            offset[1] * OFFSET_SCALE,
            offset[2] * OFFSET_SCALE,
        ),
    ]
}

pub fn to_json(variables: &[MolangVariable]) -> serde_json::Result<String> {
    serde_json::to_string(variables)
}

pub fn from_json(json: &str) -> serde_json::Result<Vec<MolangVariable>> {
    serde_json::from_str(json)
}

/// Find a top-level variable by name
pub fn find<'a>(variables: &'a [MolangVariable], name: &str) -> Option<&'a MolangVariable> {
    variables.iter().find(|variable| variable.name == name)
}
