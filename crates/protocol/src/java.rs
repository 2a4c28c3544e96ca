//! # Java Edition Packet Definitions
//!
//! Clientbound packets received from the Java server that the translation
//! core consumes.
//!
//! ## Packet Organization
//!
//! - **Level**: particle spawns
//! - **Inventory**: container open/close and slot updates
//! - **Misc**: packets the bridge deliberately leaves to other layers
//!   (keep-alives, chat). They carry a kind so the dispatcher can skip them.
//!
//! ## Dispatch
//!
//! Every packet struct implements [`InboundPacket`], which binds it to one
//! [`JavaPacketKind`] and projects it out of the [`JavaPacket`] envelope.
//! Translators are written against the concrete struct and never match on
//! [`JavaPacket`] themselves.

use bridge_core::{BlockState, JavaEntityId, Vector3i};
use serde::{Deserialize, Serialize};

/// Dispatch key for all inbound Java packets
///
/// # Purpose
/// Identifies the concrete packet type carried by a [`JavaPacket`].
/// The translator registry is keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JavaPacketKind {
    //=== Level ===//
    /// `ClientboundLevelParticlesPacket`
    LevelParticles,

    //=== Inventory ===//
    /// `ClientboundOpenScreenPacket`
    OpenScreen,

    /// `ClientboundContainerSetSlotPacket`
    ContainerSetSlot,

    /// `ClientboundContainerClosePacket`
    ContainerClose,

    //=== Misc ===//
    /// `ClientboundKeepAlivePacket`
    KeepAlive,

    /// `ClientboundSystemChatPacket`
    SystemChat,
}

/// An inbound Java packet
///
/// # Invariant
/// `packet.kind()` always names the variant's payload type, so the projection
/// in [`InboundPacket::from_packet`] succeeds exactly for the bound kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "packet")]
pub enum JavaPacket {
    LevelParticles(ClientboundLevelParticlesPacket),
    OpenScreen(ClientboundOpenScreenPacket),
    ContainerSetSlot(ClientboundContainerSetSlotPacket),
    ContainerClose(ClientboundContainerClosePacket),
    KeepAlive(ClientboundKeepAlivePacket),
    SystemChat(ClientboundSystemChatPacket),
}

impl JavaPacket {
    /// Get the dispatch kind of this packet
    pub fn kind(&self) -> JavaPacketKind {
        match self {
            Self::LevelParticles(_) => JavaPacketKind::LevelParticles,
            Self::OpenScreen(_) => JavaPacketKind::OpenScreen,
            Self::ContainerSetSlot(_) => JavaPacketKind::ContainerSetSlot,
            Self::ContainerClose(_) => JavaPacketKind::ContainerClose,
            Self::KeepAlive(_) => JavaPacketKind::KeepAlive,
            Self::SystemChat(_) => JavaPacketKind::SystemChat,
        }
    }
}

/// A concrete inbound packet type bound to one [`JavaPacketKind`]
pub trait InboundPacket: Sized + Send + Sync + 'static {
    /// The kind this packet type is dispatched under
    const KIND: JavaPacketKind;

    /// Borrow this packet type out of the envelope, if the envelope carries it
    fn from_packet(packet: &JavaPacket) -> Option<&Self>;
}

macro_rules! inbound_packet {
    ($ty:ty, $variant:ident) => {
        impl InboundPacket for $ty {
            const KIND: JavaPacketKind = JavaPacketKind::$variant;

            #[inline]
            fn from_packet(packet: &JavaPacket) -> Option<&Self> {
                match packet {
                    JavaPacket::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for JavaPacket {
            fn from(packet: $ty) -> Self {
                JavaPacket::$variant(packet)
            }
        }
    };
}

inbound_packet!(ClientboundLevelParticlesPacket, LevelParticles);
inbound_packet!(ClientboundOpenScreenPacket, OpenScreen);
inbound_packet!(ClientboundContainerSetSlotPacket, ContainerSetSlot);
inbound_packet!(ClientboundContainerClosePacket, ContainerClose);
inbound_packet!(ClientboundKeepAlivePacket, KeepAlive);
inbound_packet!(ClientboundSystemChatPacket, SystemChat);

//=== Items ===//

/// Java item stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Java item registry ID
    pub id: i32,
    /// Stack size
    pub amount: i32,
}

impl ItemStack {
    pub const fn new(id: i32, amount: i32) -> Self {
        Self { id, amount }
    }
}

//=== Particles ===//

/// Java particle types
///
/// Serialized in `SCREAMING_SNAKE_CASE`, which is also the key format of the
/// particle mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticleType {
    AmbientEntityEffect,
    AngryVillager,
    Ash,
    Block,
    BlockMarker,
    Bubble,
    BubblePop,
    CampfireCosySmoke,
    Cloud,
    Composter,
    Crit,
    DamageIndicator,
    DragonBreath,
    DrippingLava,
    DrippingWater,
    Dust,
    DustColorTransition,
    Effect,
    ElderGuardian,
    Enchant,
    EnchantedHit,
    EndRod,
    EntityEffect,
    Explosion,
    ExplosionEmitter,
    FallingDust,
    Firework,
    Flame,
    HappyVillager,
    Heart,
    InstantEffect,
    Item,
    ItemSlime,
    ItemSnowball,
    LargeSmoke,
    Lava,
    Note,
    Poof,
    Portal,
    Rain,
    Smoke,
    SoulFireFlame,
    Spit,
    SquidInk,
    SweepAttack,
    TotemOfUndying,
    Vibration,
    Witch,
}

/// Particle type plus its kind-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub particle_type: ParticleType,
    #[serde(default)]
    pub data: ParticleData,
}

impl Particle {
    pub fn new(particle_type: ParticleType, data: ParticleData) -> Self {
        Self { particle_type, data }
    }

    /// A particle type that carries no payload
    pub fn simple(particle_type: ParticleType) -> Self {
        Self::new(particle_type, ParticleData::None)
    }
}

/// Kind-specific particle payload
///
/// # Invariant
/// The variant must match the declared [`ParticleType`]: `Block` for
/// `BLOCK`/`BLOCK_MARKER`, `FallingDust` for `FALLING_DUST`, `Dust` for `DUST`,
/// `DustColorTransition` for `DUST_COLOR_TRANSITION`, `Item` for `ITEM` and
/// `Vibration` for `VIBRATION`. A mismatch is a protocol desync.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParticleData {
    #[default]
    None,
    Block(BlockParticleData),
    FallingDust(FallingDustParticleData),
    Dust(DustParticleData),
    DustColorTransition(DustColorTransitionParticleData),
    Item(ItemParticleData),
    Vibration(VibrationParticleData),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockParticleData {
    pub block_state: BlockState,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingDustParticleData {
    pub block_state: BlockState,
}

/// Dust color (each channel 0-1) and scale (0.01-4)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DustParticleData {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub scale: f32,
}

/// Dust transitioning from the start color to the new color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DustColorTransitionParticleData {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub scale: f32,
    pub new_red: f32,
    pub new_green: f32,
    pub new_blue: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemParticleData {
    pub item: ItemStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VibrationParticleData {
    pub position_source: PositionSource,
    /// Ticks until the vibration reaches its target
    pub arrival_ticks: i32,
}

/// Where a vibration travels to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PositionSource {
    /// A fixed block
    Block { position: Vector3i },
    /// A live entity, raised by `y_offset`
    Entity { entity_id: JavaEntityId, y_offset: f32 },
}

/// Spawns one or more particles
///
/// # Fields
/// - `x`, `y`, `z`: origin
/// - `offset_*`: standard deviation of the spawn volume on each axis
/// - `velocity_offset`: particle speed
/// - `amount`: instance count; `0` means a single particle with no offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientboundLevelParticlesPacket {
    pub particle: Particle,
    #[serde(default)]
    pub long_distance: bool,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default)]
    pub offset_z: f32,
    #[serde(default)]
    pub velocity_offset: f32,
    #[serde(default)]
    pub amount: i32,
}

impl ClientboundLevelParticlesPacket {
    /// A packet at `(x, y, z)` with no spread, speed or count
    pub fn at(particle: Particle, x: f64, y: f64, z: f64) -> Self {
        Self {
            particle,
            long_distance: false,
            x,
            y,
            z,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_z: 0.0,
            velocity_offset: 0.0,
            amount: 0,
        }
    }
}

//=== Inventory ===//

/// Java menu types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JavaContainerType {
    Generic9x1,
    Generic9x2,
    Generic9x3,
    Generic9x4,
    Generic9x5,
    Generic9x6,
    Generic3x3,
    Anvil,
    Beacon,
    BlastFurnace,
    BrewingStand,
    Crafting,
    Enchantment,
    Furnace,
    Grindstone,
    Hopper,
    Lectern,
    Loom,
    Merchant,
    ShulkerBox,
    Smithing,
    Smoker,
    CartographyTable,
    Stonecutter,
}

/// Opens a container menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientboundOpenScreenPacket {
    pub container_id: i32,
    pub container_type: JavaContainerType,
    #[serde(default)]
    pub title: String,
}

/// Sets one slot of an open container
///
/// `slot` is the linear Java slot index: container slots first, then the
/// 27 main inventory slots, then the 9 hotbar slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientboundContainerSetSlotPacket {
    pub container_id: i32,
    #[serde(default)]
    pub state_id: i32,
    pub slot: i32,
    #[serde(default)]
    pub item: Option<ItemStack>,
}

/// Closes a container menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientboundContainerClosePacket {
    pub container_id: i32,
}

//=== Misc ===//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientboundKeepAlivePacket {
    pub ping_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientboundSystemChatPacket {
    pub content: String,
    #[serde(default)]
    pub overlay: bool,
}
