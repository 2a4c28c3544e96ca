//! # Bedrock Edition Packet Definitions
//!
//! Packets sent upstream to the Bedrock client, and the Bedrock enums they
//! carry.
//!
//! ## Protocol Compatibility
//!
//! Enums are carried by name. Mapping them to the numeric `LevelEvent` and
//! `ContainerType` tables of a protocol version is the Bedrock codec's job.

use crate::nbt::NbtMap;
use bridge_core::{Vector3f, Vector3i};
use serde::{Deserialize, Serialize};

/// Bedrock level event types used by particle translation
///
/// Deserialized from `SCREAMING_SNAKE_CASE` names in the particle mapping
/// table (e.g. `"PARTICLE_FLAME"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelEventType {
    ParticleDestroyBlock,
    ParticleCrackBlock,
    ParticleBubble,
    ParticleCritical,
    ParticleSmoke,
    ParticleExplosion,
    ParticleEvaporation,
    ParticleFlame,
    ParticleLava,
    ParticleLargeSmoke,
    ParticleRedstone,
    ParticleItemBreak,
    ParticleSnowballPoof,
    ParticleHugeExplode,
    ParticleHeart,
    ParticleTerrain,
    ParticlePortal,
    ParticleWaterSplash,
    ParticleDripWater,
    ParticleDripLava,
    ParticleFallingDust,
    ParticleMobSpell,
    ParticleMobSpellAmbient,
    ParticleMobSpellInstantaneous,
    ParticleInk,
    ParticleSlime,
    ParticleRainSplash,
    ParticleVillagerAngry,
    ParticleVillagerHappy,
    ParticleEnchantmentTable,
    ParticleNote,
    ParticleWitchSpell,
    ParticleEndRod,
    ParticleDragonsBreath,
    ParticleSpit,
    ParticleTotem,
    ParticleFireworksSpark,
}

/// Bedrock container (window) types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerType {
    Container,
    Workbench,
    Furnace,
    Enchantment,
    BrewingStand,
    Anvil,
    Dispenser,
    Hopper,
    Beacon,
    Loom,
    Lectern,
    Grindstone,
    BlastFurnace,
    Smoker,
    Stonecutter,
    Cartography,
}

/// Bedrock slot categories
///
/// Identifies which logical compartment of a container a Bedrock slot index
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerSlotType {
    AnvilInput,
    AnvilMaterial,
    BeaconPayment,
    BrewingInput,
    BrewingFuel,
    BrewingResult,
    CraftingInput,
    CraftingOutput,
    EnchantingInput,
    EnchantingLapis,
    FurnaceFuel,
    FurnaceIngredient,
    FurnaceOutput,
    BlastFurnaceIngredient,
    SmokerIngredient,
    Hotbar,
    Inventory,
    LevelEntity,
    Cursor,
}

impl ContainerSlotType {
    /// Whether this category lives in the player's own inventory window
    pub fn is_player_inventory(&self) -> bool {
        matches!(self, Self::Inventory | Self::Hotbar)
    }
}

/// Bedrock item instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemData {
    /// Bedrock item runtime ID
    pub id: i32,
    /// Bedrock damage / variant data
    pub damage: i32,
    pub count: i32,
}

impl ItemData {
    pub const AIR: Self = Self { id: 0, damage: 0, count: 0 };

    pub fn is_air(&self) -> bool {
        self.id == 0
    }
}

/// Position-addressed level event
///
/// # Fields
/// - `event_type`: which event to play
/// - `position`: where to play it
/// - `data`: event-specific payload (block runtime ID, packed item, ARGB color)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEventPacket {
    pub event_type: LevelEventType,
    pub position: Vector3f,
    pub data: i32,
}

/// Identifier-addressed particle effect
///
/// `molang_variables_json` carries the serialized Molang variable array when
/// the optional pack's particle definitions are in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnParticleEffectPacket {
    pub identifier: String,
    pub dimension_id: i32,
    /// `-1` when the effect is not attached to an entity
    pub unique_entity_id: i64,
    pub position: Vector3f,
    pub molang_variables_json: Option<String>,
}

/// Level event carrying an NBT payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEventGenericPacket {
    pub event_id: i32,
    pub tag: NbtMap,
}

impl LevelEventGenericPacket {
    /// Event ID of the sculk vibration effect
    pub const VIBRATION_EVENT_ID: i32 = 2027;
}

/// Opens a container window on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerOpenPacket {
    pub id: u8,
    pub container_type: ContainerType,
    pub block_position: Vector3i,
    /// `-1` when the container is block-backed
    pub unique_entity_id: i64,
}

/// Closes a container window on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerClosePacket {
    pub id: u8,
    pub server_initiated: bool,
}

/// Updates one slot of a container window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySlotPacket {
    pub container_id: u32,
    pub slot: u32,
    pub item: ItemData,
}

/// Any packet the bridge sends upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "packet")]
pub enum BedrockPacket {
    LevelEvent(LevelEventPacket),
    SpawnParticleEffect(SpawnParticleEffectPacket),
    LevelEventGeneric(LevelEventGenericPacket),
    ContainerOpen(ContainerOpenPacket),
    ContainerClose(ContainerClosePacket),
    InventorySlot(InventorySlotPacket),
}

macro_rules! bedrock_packet {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for BedrockPacket {
            fn from(packet: $ty) -> Self {
                BedrockPacket::$variant(packet)
            }
        }
    };
}

bedrock_packet!(LevelEventPacket, LevelEvent);
bedrock_packet!(SpawnParticleEffectPacket, SpawnParticleEffect);
bedrock_packet!(LevelEventGenericPacket, LevelEventGeneric);
bedrock_packet!(ContainerOpenPacket, ContainerOpen);
bedrock_packet!(ContainerClosePacket, ContainerClose);
bedrock_packet!(InventorySlotPacket, InventorySlot);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_event_type_names() {
        let parsed: LevelEventType = serde_json::from_str("\"PARTICLE_VILLAGER_ANGRY\"").unwrap();
        assert_eq!(parsed, LevelEventType::ParticleVillagerAngry);
    }

    #[test]
    fn test_player_inventory_categories() {
        assert!(ContainerSlotType::Hotbar.is_player_inventory());
        assert!(ContainerSlotType::Inventory.is_player_inventory());
        assert!(!ContainerSlotType::FurnaceFuel.is_player_inventory());
    }
}
