//! Particle mapping table

use crate::{RegistryError, Result};
use bridge_protocol::{LevelEventType, ParticleType};
use serde::Deserialize;
use std::collections::HashMap;

/// Bedrock encodings of one Java particle type
///
/// # Fields
/// - `level_event_type`: position-only level event (authoritative for the
///   direct encoding when present)
/// - `identifier`: particle effect identifier, used for identifier-addressed
///   packets and for the optional pack's Molang-driven effects
///
/// A type with neither is known but unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ParticleMapping {
    #[serde(rename = "eventType", default)]
    pub level_event_type: Option<LevelEventType>,
    #[serde(rename = "bedrockId", default)]
    pub identifier: Option<String>,
}

impl ParticleMapping {
    pub fn level_event(level_event_type: LevelEventType) -> Self {
        Self {
            level_event_type: Some(level_event_type),
            identifier: None,
        }
    }

    pub fn identifier(identifier: impl Into<String>) -> Self {
        Self {
            level_event_type: None,
            identifier: Some(identifier.into()),
        }
    }
}

/// Java particle type → [`ParticleMapping`]
#[derive(Debug, Clone, Default)]
pub struct ParticleRegistry {
    mappings: HashMap<ParticleType, ParticleMapping>,
}

impl ParticleRegistry {
    /// Parse a `particles.json` table
    ///
    /// # Format
    /// ```text
    /// { "FLAME": {"eventType": "PARTICLE_FLAME"}, "ASH": {"bedrockId": "minecraft:ash"} }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let mappings: HashMap<ParticleType, ParticleMapping> = serde_json::from_str(json)
            .map_err(|source| RegistryError::InvalidFormat { table: "particle", source })?;

        if let Some(mapping) = mappings.values().find(|m| m.identifier.as_deref() == Some("")) {
            return Err(RegistryError::InvalidEntry {
                table: "particle",
                message: format!("empty identifier in {:?}", mapping),
            });
        }

        Ok(Self { mappings })
    }

    #[inline]
    pub fn get(&self, particle_type: ParticleType) -> Option<&ParticleMapping> {
        self.mappings.get(&particle_type)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
