//! # Container Slot Translation
//!
//! Maps linear Java slot indices to Bedrock (slot category, slot index)
//! pairs.
//!
//! A Java container window numbers its slots contiguously: the container's
//! own slots first, then the 27 main inventory slots, then the 9 hotbar
//! slots. Bedrock addresses the same slots by category.
//!
//! Every container subtype is a [`ContainerSlotTranslator`]: a base
//! [`SlotLayout`] plus a small table of slots whose category differs from
//! the base. A lookup consults the table first and falls back to the layout.

use crate::error::{Result, TranslateError};
use bridge_protocol::{ContainerSlotType, ContainerType, JavaContainerType};

/// Main inventory plus hotbar
pub const PLAYER_INVENTORY_SIZE: usize = 36;

const MAIN_INVENTORY_SIZE: i32 = 27;

/// Bedrock inventory slots 0-8 are the hotbar; the main inventory follows
const HOTBAR_SIZE: i32 = 9;

/// A Bedrock slot address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BedrockContainerSlot {
    pub slot_type: ContainerSlotType,
    pub slot: i32,
}

impl BedrockContainerSlot {
    pub const fn new(slot_type: ContainerSlotType, slot: i32) -> Self {
        Self { slot_type, slot }
    }
}

/// Base slot arrangement of a container family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLayout {
    /// Ingredient, fuel and result
    Furnace,
    /// `size` storage slots
    Generic { size: usize },
}

impl SlotLayout {
    /// Number of container-owned slots, excluding the player inventory
    pub const fn container_size(&self) -> usize {
        match self {
            Self::Furnace => 3,
            Self::Generic { size } => *size,
        }
    }

    /// Category of a container-owned slot (`slot < container_size`)
    fn container_slot_type(&self, slot: i32) -> ContainerSlotType {
        match self {
            Self::Furnace => match slot {
                0 => ContainerSlotType::FurnaceIngredient,
                1 => ContainerSlotType::FurnaceFuel,
                _ => ContainerSlotType::FurnaceOutput,
            },
            Self::Generic { .. } => ContainerSlotType::LevelEntity,
        }
    }
}

/// Slot translator for one container subtype
///
/// # Purpose
/// Resolves Java slot indices for a container subtype, and records the
/// Bedrock window type and the placeholder block used to open it.
///
/// # Thread Safety
/// Immutable; the shipped subtypes are `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSlotTranslator {
    name: &'static str,
    layout: SlotLayout,
    /// Slots whose category differs from the layout
    overrides: &'static [(i32, ContainerSlotType)],
    container_type: ContainerType,
    block_state: &'static str,
}

impl ContainerSlotTranslator {
    pub const fn new(
        name: &'static str,
        layout: SlotLayout,
        overrides: &'static [(i32, ContainerSlotType)],
        container_type: ContainerType,
        block_state: &'static str,
    ) -> Self {
        Self {
            name,
            layout,
            overrides,
            container_type,
            block_state,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn layout(&self) -> SlotLayout {
        self.layout
    }

    /// Bedrock window type
    pub const fn container_type(&self) -> ContainerType {
        self.container_type
    }

    /// Java block state placed client-side to back the window
    pub const fn block_state(&self) -> &'static str {
        self.block_state
    }

    /// Container slots plus the player inventory
    pub const fn total_slots(&self) -> usize {
        self.layout.container_size() + PLAYER_INVENTORY_SIZE
    }

    /// Translate a Java slot index
    ///
    /// # Errors
    /// [`TranslateError::SlotOutOfRange`] unless `0 <= slot < total_slots()`.
    pub fn translate(&self, slot: i32) -> Result<BedrockContainerSlot> {
        let index = self.java_slot_to_bedrock(slot)?;
        let size = self.layout.container_size() as i32;

        let slot_type = self
            .overrides
            .iter()
            .find(|(java_slot, _)| *java_slot == slot)
            .map(|(_, slot_type)| *slot_type)
            .unwrap_or_else(|| {
                if slot >= size {
                    player_slot_type(slot - size)
                } else {
                    self.layout.container_slot_type(slot)
                }
            });

        Ok(BedrockContainerSlot::new(slot_type, index))
    }

    /// Bedrock slot index of a Java slot, without its category
    pub fn java_slot_to_bedrock(&self, slot: i32) -> Result<i32> {
        self.check_range(slot)?;

        let size = self.layout.container_size() as i32;
        if slot < size {
            return Ok(slot);
        }

        let tmp = slot - size;
        if tmp < MAIN_INVENTORY_SIZE {
            Ok(tmp + HOTBAR_SIZE)
        } else {
            Ok(tmp - MAIN_INVENTORY_SIZE)
        }
    }

    fn check_range(&self, slot: i32) -> Result<()> {
        let total_slots = self.total_slots();
        if slot < 0 || slot as usize >= total_slots {
            return Err(TranslateError::SlotOutOfRange {
                container: self.name,
                slot,
                total_slots,
            });
        }
        Ok(())
    }
}

fn player_slot_type(tmp: i32) -> ContainerSlotType {
    if tmp < MAIN_INVENTORY_SIZE {
        ContainerSlotType::Inventory
    } else {
        ContainerSlotType::Hotbar
    }
}

//=== Subtypes ===//

const CHEST_BLOCK: &str = "minecraft:chest[facing=north,type=single,waterlogged=false]";

pub static FURNACE: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "furnace",
    SlotLayout::Furnace,
    &[],
    ContainerType::Furnace,
    "minecraft:furnace[facing=north,lit=false]",
);

pub static BLAST_FURNACE: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "blast_furnace",
    SlotLayout::Furnace,
    &[(0, ContainerSlotType::BlastFurnaceIngredient)],
    ContainerType::BlastFurnace,
    "minecraft:blast_furnace[facing=north,lit=false]",
);

pub static SMOKER: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "smoker",
    SlotLayout::Furnace,
    &[(0, ContainerSlotType::SmokerIngredient)],
    ContainerType::Smoker,
    "minecraft:smoker[facing=north,lit=false]",
);

pub static GENERIC_9X1: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "generic_9x1",
    SlotLayout::Generic { size: 9 },
    &[],
    ContainerType::Container,
    CHEST_BLOCK,
);

pub static GENERIC_9X2: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "generic_9x2",
    SlotLayout::Generic { size: 18 },
    &[],
    ContainerType::Container,
    CHEST_BLOCK,
);

pub static GENERIC_9X3: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "generic_9x3",
    SlotLayout::Generic { size: 27 },
    &[],
    ContainerType::Container,
    CHEST_BLOCK,
);

pub static GENERIC_9X4: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "generic_9x4",
    SlotLayout::Generic { size: 36 },
    &[],
    ContainerType::Container,
    CHEST_BLOCK,
);

pub static GENERIC_9X5: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "generic_9x5",
    SlotLayout::Generic { size: 45 },
    &[],
    ContainerType::Container,
    CHEST_BLOCK,
);

pub static GENERIC_9X6: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "generic_9x6",
    SlotLayout::Generic { size: 54 },
    &[],
    ContainerType::Container,
    CHEST_BLOCK,
);

pub static GENERIC_3X3: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "generic_3x3",
    SlotLayout::Generic { size: 9 },
    &[],
    ContainerType::Dispenser,
    "minecraft:dispenser[facing=north,triggered=false]",
);

pub static HOPPER: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "hopper",
    SlotLayout::Generic { size: 5 },
    &[],
    ContainerType::Hopper,
    "minecraft:hopper[enabled=true,facing=down]",
);

pub static SHULKER_BOX: ContainerSlotTranslator = ContainerSlotTranslator::new(
    "shulker_box",
    SlotLayout::Generic { size: 27 },
    &[],
    ContainerType::Container,
    "minecraft:shulker_box[facing=up]",
);

/// Container subtypes the bridge can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Furnace,
    BlastFurnace,
    Smoker,
    Generic9x1,
    Generic9x2,
    Generic9x3,
    Generic9x4,
    Generic9x5,
    Generic9x6,
    Generic3x3,
    Hopper,
    ShulkerBox,
}

impl ContainerKind {
    /// Resolve a Java menu type
    ///
    /// # Returns
    /// `None` for menus without a slot translator
    pub fn from_java(container_type: JavaContainerType) -> Option<Self> {
        let kind = match container_type {
            JavaContainerType::Furnace => Self::Furnace,
            JavaContainerType::BlastFurnace => Self::BlastFurnace,
            JavaContainerType::Smoker => Self::Smoker,
            JavaContainerType::Generic9x1 => Self::Generic9x1,
            JavaContainerType::Generic9x2 => Self::Generic9x2,
            JavaContainerType::Generic9x3 => Self::Generic9x3,
            JavaContainerType::Generic9x4 => Self::Generic9x4,
            JavaContainerType::Generic9x5 => Self::Generic9x5,
            JavaContainerType::Generic9x6 => Self::Generic9x6,
            JavaContainerType::Generic3x3 => Self::Generic3x3,
            JavaContainerType::Hopper => Self::Hopper,
            JavaContainerType::ShulkerBox => Self::ShulkerBox,
            _ => return None,
        };
        Some(kind)
    }

    pub fn translator(&self) -> &'static ContainerSlotTranslator {
        match self {
            Self::Furnace => &FURNACE,
            Self::BlastFurnace => &BLAST_FURNACE,
            Self::Smoker => &SMOKER,
            Self::Generic9x1 => &GENERIC_9X1,
            Self::Generic9x2 => &GENERIC_9X2,
            Self::Generic9x3 => &GENERIC_9X3,
            Self::Generic9x4 => &GENERIC_9X4,
            Self::Generic9x5 => &GENERIC_9X5,
            Self::Generic9x6 => &GENERIC_9X6,
            Self::Generic3x3 => &GENERIC_3X3,
            Self::Hopper => &HOPPER,
            Self::ShulkerBox => &SHULKER_BOX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(slot_type: ContainerSlotType, slot: i32) -> BedrockContainerSlot {
        BedrockContainerSlot::new(slot_type, slot)
    }

    #[test]
    fn test_furnace_layout() {
        assert_eq!(FURNACE.total_slots(), 39);
        assert_eq!(FURNACE.translate(0).unwrap(), slot(ContainerSlotType::FurnaceIngredient, 0));
        assert_eq!(FURNACE.translate(1).unwrap(), slot(ContainerSlotType::FurnaceFuel, 1));
        assert_eq!(FURNACE.translate(2).unwrap(), slot(ContainerSlotType::FurnaceOutput, 2));
    }

    #[test]
    fn test_player_inventory_slots() {
        assert_eq!(FURNACE.translate(3).unwrap(), slot(ContainerSlotType::Inventory, 9));
        assert_eq!(FURNACE.translate(29).unwrap(), slot(ContainerSlotType::Inventory, 35));
        assert_eq!(FURNACE.translate(30).unwrap(), slot(ContainerSlotType::Hotbar, 0));
        assert_eq!(FURNACE.translate(38).unwrap(), slot(ContainerSlotType::Hotbar, 8));
    }

    #[test]
    fn test_overrides_only_change_listed_slots() {
        for (subtype, category) in [
            (&BLAST_FURNACE, ContainerSlotType::BlastFurnaceIngredient),
            (&SMOKER, ContainerSlotType::SmokerIngredient),
        ] {
            assert_eq!(subtype.total_slots(), FURNACE.total_slots());
            assert_eq!(subtype.translate(0).unwrap(), slot(category, 0));

            for k in 1..subtype.total_slots() as i32 {
                assert_eq!(subtype.translate(k).unwrap(), FURNACE.translate(k).unwrap(), "slot {}", k);
            }
        }
    }

    #[test]
    fn test_override_on_player_inventory_slot() {
        static CURSOR_AT_3: ContainerSlotTranslator = ContainerSlotTranslator::new(
            "cursor_at_3",
            SlotLayout::Furnace,
            &[(3, ContainerSlotType::Cursor)],
            ContainerType::Furnace,
            "minecraft:furnace[facing=north,lit=false]",
        );

        assert_eq!(CURSOR_AT_3.translate(3).unwrap(), slot(ContainerSlotType::Cursor, 9));
        for k in (0..CURSOR_AT_3.total_slots() as i32).filter(|k| *k != 3) {
            assert_eq!(CURSOR_AT_3.translate(k).unwrap(), FURNACE.translate(k).unwrap(), "slot {}", k);
        }
    }

    #[test]
    fn test_generic_chest() {
        assert_eq!(GENERIC_9X3.total_slots(), 63);
        assert_eq!(GENERIC_9X3.translate(26).unwrap(), slot(ContainerSlotType::LevelEntity, 26));
        assert_eq!(GENERIC_9X3.translate(27).unwrap(), slot(ContainerSlotType::Inventory, 9));
        assert_eq!(GENERIC_9X6.translate(80).unwrap(), slot(ContainerSlotType::Inventory, 35));
        assert_eq!(GENERIC_9X6.translate(89).unwrap(), slot(ContainerSlotType::Hotbar, 8));
    }

    #[test]
    fn test_out_of_range_slots() {
        for bad in [-1, FURNACE.total_slots() as i32, 1000] {
            let err = FURNACE.translate(bad).unwrap_err();
            assert!(err.is_contract_violation());
            assert!(matches!(
                err,
                TranslateError::SlotOutOfRange {
                    container: "furnace",
                    total_slots: 39,
                    ..
                }
            ));
        }
        assert!(GENERIC_9X3.java_slot_to_bedrock(63).is_err());
    }

    #[test]
    fn test_java_slot_to_bedrock() {
        assert_eq!(SMOKER.java_slot_to_bedrock(0).unwrap(), 0);
        assert_eq!(SMOKER.java_slot_to_bedrock(5).unwrap(), 11);
        assert_eq!(SMOKER.java_slot_to_bedrock(33).unwrap(), 3);
    }

    #[test]
    fn test_container_kind_resolution() {
        let kind = ContainerKind::from_java(JavaContainerType::BlastFurnace).unwrap();
        assert_eq!(kind.translator().container_type(), ContainerType::BlastFurnace);
        assert_eq!(
            kind.translator().block_state(),
            "minecraft:blast_furnace[facing=north,lit=false]"
        );
        assert_eq!(ContainerKind::Generic3x3.translator().total_slots(), 45);
        assert!(ContainerKind::from_java(JavaContainerType::Merchant).is_none());
    }
}
