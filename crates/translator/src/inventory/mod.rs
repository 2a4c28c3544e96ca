//! # Inventory Translation
//!
//! Container window translators. A session tracks at most one open
//! container; slot updates for any other window are dropped.

mod slots;

pub use slots::*;

use crate::error::{Result, TranslateError};
use crate::registry::PacketTranslator;
use crate::session::TranslatorSession;
use bridge_core::Vector3i;
use bridge_protocol::{
    ClientboundContainerClosePacket, ClientboundContainerSetSlotPacket, ClientboundOpenScreenPacket,
    ContainerClosePacket, ContainerOpenPacket, InventorySlotPacket,
};

/// Bedrock window ID of the player's own inventory
pub const PLAYER_INVENTORY_ID: u32 = 0;

/// The container window open on a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenContainer {
    /// Window ID shared by the Java and Bedrock sides
    pub id: u8,
    pub kind: ContainerKind,
}

/// Bedrock window IDs are a single byte
fn window_id(container_id: i32) -> Result<u8> {
    u8::try_from(container_id)
        .map_err(|_| TranslateError::ContractViolation(format!("container ID {} is out of range", container_id)))
}

/// Opens a container window
pub struct OpenScreenTranslator;

impl PacketTranslator for OpenScreenTranslator {
    type Packet = ClientboundOpenScreenPacket;

    fn translate(&self, session: &mut dyn TranslatorSession, packet: &Self::Packet) -> Result<()> {
        let Some(kind) = ContainerKind::from_java(packet.container_type) else {
            tracing::debug!("Unsupported container type: {:?}", packet.container_type);
            return Ok(());
        };

        let id = window_id(packet.container_id)?;
        let translator = kind.translator();
        tracing::debug!(
            "Opening {} window {} ({:?}) backed by {}",
            translator.name(),
            id,
            packet.title,
            translator.block_state()
        );

        session.set_open_container(Some(OpenContainer { id, kind }));
        session.send_upstream(
            ContainerOpenPacket {
                id,
                container_type: translator.container_type(),
                block_position: Vector3i::default(),
                unique_entity_id: -1,
            }
            .into(),
        );
        Ok(())
    }
}

/// Updates one slot of the open container
pub struct ContainerSetSlotTranslator;

impl PacketTranslator for ContainerSetSlotTranslator {
    type Packet = ClientboundContainerSetSlotPacket;

    fn translate(&self, session: &mut dyn TranslatorSession, packet: &Self::Packet) -> Result<()> {
        let Some(open) = session
            .open_container()
            .filter(|open| i32::from(open.id) == packet.container_id)
        else {
            tracing::debug!("Slot update for container {} which is not open", packet.container_id);
            return Ok(());
        };

        let slot = open.kind.translator().translate(packet.slot)?;
        let container_id = if slot.slot_type.is_player_inventory() {
            PLAYER_INVENTORY_ID
        } else {
            u32::from(open.id)
        };

        let item = session.translate_item(packet.item.as_ref());
        session.send_upstream(
            InventorySlotPacket {
                container_id,
                slot: slot.slot as u32,
                item,
            }
            .into(),
        );
        Ok(())
    }
}

/// Closes the open container
pub struct ContainerCloseTranslator;

impl PacketTranslator for ContainerCloseTranslator {
    type Packet = ClientboundContainerClosePacket;

    fn translate(&self, session: &mut dyn TranslatorSession, packet: &Self::Packet) -> Result<()> {
        let id = window_id(packet.container_id)?;

        match session.open_container() {
            Some(open) if open.id != id => {
                tracing::debug!("Closing container {} while {} is open", id, open.id);
            }
            _ => {}
        }

        session.set_open_container(None);
        session.send_upstream(
            ContainerClosePacket {
                id,
                server_initiated: true,
            }
            .into(),
        );
        Ok(())
    }
}
