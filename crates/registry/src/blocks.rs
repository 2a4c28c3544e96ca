//! Block state mapping table

use crate::{RegistryError, Result};
use bridge_core::BlockState;
use serde::Deserialize;

/// Java block state → Bedrock block runtime ID
///
/// Unknown states resolve to the Bedrock air runtime ID.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockMappings {
    /// Bedrock runtime ID of air
    air: u32,
    /// Bedrock runtime IDs indexed by Java block state ID
    states: Vec<u32>,
}

impl BlockMappings {
    /// Parse a `blocks.json` table
    ///
    /// # Format
    /// ```text
    /// { "air": 134, "states": [134, 1, 2, ...] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|source| RegistryError::InvalidFormat { table: "block", source })
    }

    #[inline]
    pub fn bedrock_block_id(&self, state: BlockState) -> u32 {
        self.states
            .get(state.get() as usize)
            .copied()
            .unwrap_or(self.air)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
