//! Core type definitions

use serde::{Deserialize, Serialize};

/// Java entity ID (32-bit signed, as sent by the Java server)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JavaEntityId(pub i32);

impl JavaEntityId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl From<i32> for JavaEntityId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Bedrock runtime entity ID (64-bit unsigned, assigned by the bridge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeEntityId(pub u64);

impl RuntimeEntityId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Java block state ID (index into the global block state palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState(pub u32);

impl BlockState {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for BlockState {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Java dimension the session is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
}

impl Dimension {
    /// Bedrock dimension ID used by dimension-addressed packets
    pub fn bedrock_id(&self) -> i32 {
        match self {
            Self::Overworld => 0,
            Self::Nether => 1,
            Self::End => 2,
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Overworld
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedrock_dimension_ids() {
        assert_eq!(Dimension::Overworld.bedrock_id(), 0);
        assert_eq!(Dimension::Nether.bedrock_id(), 1);
        assert_eq!(Dimension::End.bedrock_id(), 2);
    }
}
