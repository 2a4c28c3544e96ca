//! # Bridge Translation Core
//!
//! Converts inbound Java packets into the Bedrock packets a client needs.
//!
//! ## Modules
//!
//! - `registry` - Packet kind → translator dispatch
//! - `session` - Per-connection state visible to translators
//! - `particles` - Particle translation (direct and Molang-enriched)
//! - `inventory` - Container windows and slot translation
//! - `entity` - Per-session entity cache
//! - `error` - Translation error types

pub mod entity;
pub mod error;
pub mod inventory;
pub mod particles;
pub mod registry;
pub mod session;

// Re-export commonly used types
pub use entity::{Entity, EntityCache};
pub use error::{Result, TranslateError};
pub use inventory::{BedrockContainerSlot, ContainerKind, ContainerSlotTranslator, OpenContainer, SlotLayout};
pub use particles::{MolangValue, MolangVariable, ParticleJitter, ParticleSpawner, ParticleTranslator};
pub use registry::{PacketTranslator, TranslatorRegistry};
pub use session::{BridgeSession, TranslatorSession};
