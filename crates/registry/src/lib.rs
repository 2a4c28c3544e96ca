//! # Bridge Mapping Registries
//!
//! Static Java → Bedrock lookup tables consumed by the translators.
//!
//! ## Tables
//!
//! - [`ParticleRegistry`] - particle type → Bedrock level event / identifier
//! - [`BlockMappings`] - Java block state → Bedrock block runtime ID
//! - [`ItemMappings`] - Java item ID → Bedrock item ID and data
//!
//! Tables are loaded once at startup, either from the copies embedded in this
//! crate or from a mappings directory, and are never mutated afterwards.
//! Share them between sessions as `Arc<Registries>`.

mod blocks;
mod error;
mod items;
mod particles;

pub use blocks::BlockMappings;
pub use error::{RegistryError, Result};
pub use items::{ItemMapping, ItemMappings};
pub use particles::{ParticleMapping, ParticleRegistry};

use std::fs;
use std::path::Path;

const EMBEDDED_PARTICLES: &str = include_str!("../mappings/particles.json");
const EMBEDDED_BLOCKS: &str = include_str!("../mappings/blocks.json");
const EMBEDDED_ITEMS: &str = include_str!("../mappings/items.json");

/// All mapping tables a session needs
#[derive(Debug, Clone)]
pub struct Registries {
    pub particles: ParticleRegistry,
    pub blocks: BlockMappings,
    pub items: ItemMappings,
}

impl Registries {
    /// Load the tables compiled into this crate
    pub fn load_embedded() -> Result<Self> {
        let registries = Self {
            particles: ParticleRegistry::from_json(EMBEDDED_PARTICLES)?,
            blocks: BlockMappings::from_json(EMBEDDED_BLOCKS)?,
            items: ItemMappings::from_json(EMBEDDED_ITEMS)?,
        };
        registries.log_summary("embedded");
        Ok(registries)
    }

    /// Load `particles.json`, `blocks.json` and `items.json` from `dir`
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let registries = Self {
            particles: ParticleRegistry::from_json(&read_table(dir, "particles.json")?)?,
            blocks: BlockMappings::from_json(&read_table(dir, "blocks.json")?)?,
            items: ItemMappings::from_json(&read_table(dir, "items.json")?)?,
        };
        registries.log_summary(&dir.display().to_string());
        Ok(registries)
    }

    fn log_summary(&self, source: &str) {
        tracing::info!(
            "Loaded mappings from {}: {} particles, {} block states, {} items",
            source,
            self.particles.len(),
            self.blocks.len(),
            self.items.len()
        );
    }
}

fn read_table(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| RegistryError::FileError { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_protocol::ParticleType;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_tables_load() {
        let registries = Registries::load_embedded().unwrap();
        assert!(registries.particles.get(ParticleType::Flame).is_some());
        assert!(!registries.blocks.is_empty());
        assert!(!registries.items.is_empty());
    }

    #[test]
    fn test_load_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("particles.json"),
            r#"{"HEART": {"eventType": "PARTICLE_HEART"}}"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("blocks.json"), r#"{"air": 0, "states": [0, 1]}"#).unwrap();
        fs::write(temp_dir.path().join("items.json"), r#"{"1": {"bedrockId": 1}}"#).unwrap();

        let registries = Registries::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(registries.particles.len(), 1);
        assert_eq!(registries.blocks.len(), 2);
        assert_eq!(registries.items.len(), 1);
    }

    #[test]
    fn test_load_from_dir_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Registries::load_from_dir(temp_dir.path());
        assert!(matches!(result, Err(RegistryError::FileError { .. })));
    }
}
