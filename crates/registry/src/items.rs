//! Item mapping table

use crate::{RegistryError, Result};
use bridge_protocol::{ItemData, ItemStack};
use serde::Deserialize;
use std::collections::HashMap;

/// Bedrock encoding of one Java item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ItemMapping {
    #[serde(rename = "bedrockId")]
    pub bedrock_id: i32,
    #[serde(rename = "bedrockData", default)]
    pub bedrock_data: i32,
}

/// Java item ID → [`ItemMapping`]
#[derive(Debug, Clone, Default)]
pub struct ItemMappings {
    mappings: HashMap<i32, ItemMapping>,
}

impl ItemMappings {
    /// Parse an `items.json` table
    ///
    /// # Format
    /// ```text
    /// { "1": {"bedrockId": 1}, "803": {"bedrockId": 351, "bedrockData": 4} }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, ItemMapping> = serde_json::from_str(json)
            .map_err(|source| RegistryError::InvalidFormat { table: "item", source })?;

        let mut mappings = HashMap::with_capacity(raw.len());
        for (key, mapping) in raw {
            let java_id = key.parse::<i32>().map_err(|_| RegistryError::InvalidEntry {
                table: "item",
                message: format!("item key {:?} is not a Java item ID", key),
            })?;
            mappings.insert(java_id, mapping);
        }

        Ok(Self { mappings })
    }

    #[inline]
    pub fn get(&self, java_id: i32) -> Option<&ItemMapping> {
        self.mappings.get(&java_id)
    }

    /// Translate a Java stack to a Bedrock item
    ///
    /// Empty stacks and unmapped items become air.
    pub fn translate(&self, stack: Option<&ItemStack>) -> ItemData {
        let Some(stack) = stack.filter(|s| s.amount > 0) else {
            return ItemData::AIR;
        };

        match self.mappings.get(&stack.id) {
            Some(mapping) => ItemData {
                id: mapping.bedrock_id,
                damage: mapping.bedrock_data,
                count: stack.amount,
            },
            None => {
                tracing::debug!("No Bedrock mapping for Java item {}", stack.id);
                ItemData::AIR
            }
        }
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
