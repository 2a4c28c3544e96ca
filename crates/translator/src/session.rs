//! # Translation Sessions
//!
//! The narrow view of per-connection state that translators read and write.
//!
//! [`TranslatorSession`] is the seam between the translation core and the
//! connection layer. [`BridgeSession`] is the production implementation: it
//! owns the session's mutable state and hands outbound packets to the
//! transport through an unbounded channel.

use crate::entity::{Entity, EntityCache};
use crate::inventory::OpenContainer;
use bridge_core::{BlockState, Dimension, JavaEntityId};
use bridge_protocol::{BedrockPacket, ItemData, ItemStack};
use bridge_registry::Registries;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Per-connection state visible to translators
pub trait TranslatorSession {
    /// Java dimension the client is currently in
    fn dimension(&self) -> Dimension;

    /// Resolve a Java block state to the Bedrock runtime ID
    fn bedrock_block_id(&self, state: BlockState) -> u32;

    /// Translate a Java item stack (or empty slot) to a Bedrock item
    fn translate_item(&self, item: Option<&ItemStack>) -> ItemData;

    /// Look up a live entity by its Java ID
    fn entity_by_java_id(&self, java_id: JavaEntityId) -> Option<Entity>;

    /// Whether the client is assumed to have the optional pack applied
    fn optional_pack_assured(&self) -> bool;

    /// The container window currently open on the client
    fn open_container(&self) -> Option<OpenContainer>;

    fn set_open_container(&mut self, container: Option<OpenContainer>);

    /// Queue a packet for the Bedrock client
    ///
    /// Never blocks and never fails from the translator's point of view.
    fn send_upstream(&mut self, packet: BedrockPacket);
}

/// Production session
///
/// # Purpose
/// Holds one client's translation state.
///
/// # Thread Safety
/// Owned by the connection task; the only shared piece is the read-only
/// [`Registries`].
pub struct BridgeSession {
    /// Session identifier, recorded on the tracing span
    id: u64,

    registries: Arc<Registries>,

    dimension: Dimension,

    entities: EntityCache,

    optional_pack_assured: bool,

    open_container: Option<OpenContainer>,

    /// Outbound packets for the transport
    upstream: mpsc::UnboundedSender<BedrockPacket>,

    span: tracing::Span,
}

impl BridgeSession {
    /// Create a new session
    ///
    /// # Arguments
    /// * `id` - Session identifier
    /// * `registries` - Shared mapping tables
    /// * `optional_pack_assured` - Seeded from the bridge configuration
    ///
    /// # Returns
    /// The session and the receiving end of its outbound packet queue
    pub fn new(
        id: u64,
        registries: Arc<Registries>,
        optional_pack_assured: bool,
    ) -> (Self, mpsc::UnboundedReceiver<BedrockPacket>) {
        let (upstream, receiver) = mpsc::unbounded_channel();
        let span = tracing::debug_span!("session", id = id);

        tracing::debug!(parent: &span, "Creating session (optional pack: {})", optional_pack_assured);

        let session = Self {
            id,
            registries,
            dimension: Dimension::default(),
            entities: EntityCache::new(),
            optional_pack_assured,
            open_container: None,
            upstream,
            span,
        };

        (session, receiver)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Tracing span all of this session's log lines belong to
    pub fn span(&self) -> &tracing::Span {
        &self.span
    }

    pub fn set_dimension(&mut self, dimension: Dimension) {
        self.dimension = dimension;
    }

    pub fn set_optional_pack_assured(&mut self, assured: bool) {
        self.optional_pack_assured = assured;
    }

    pub fn entities(&self) -> &EntityCache {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut EntityCache {
        &mut self.entities
    }
}

impl TranslatorSession for BridgeSession {
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn bedrock_block_id(&self, state: BlockState) -> u32 {
        self.registries.blocks.bedrock_block_id(state)
    }

    fn translate_item(&self, item: Option<&ItemStack>) -> ItemData {
        self.registries.items.translate(item)
    }

    fn entity_by_java_id(&self, java_id: JavaEntityId) -> Option<Entity> {
        self.entities.entity_by_java_id(java_id).copied()
    }

    fn optional_pack_assured(&self) -> bool {
        self.optional_pack_assured
    }

    fn open_container(&self) -> Option<OpenContainer> {
        self.open_container
    }

    fn set_open_container(&mut self, container: Option<OpenContainer>) {
        self.open_container = container;
    }

    fn send_upstream(&mut self, packet: BedrockPacket) {
        if self.upstream.send(packet).is_err() {
            tracing::debug!(parent: &self.span, "Upstream closed, dropping packet");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::{RuntimeEntityId, Vector3f};
    use bridge_protocol::{ContainerClosePacket, ItemStack};

    fn session() -> (BridgeSession, mpsc::UnboundedReceiver<BedrockPacket>) {
        BridgeSession::new(1, Arc::new(Registries::load_embedded().unwrap()), false)
    }

    #[test]
    fn test_session_defaults() {
        let (session, _rx) = session();
        assert_eq!(session.id(), 1);
        assert_eq!(session.dimension(), Dimension::Overworld);
        assert!(!session.optional_pack_assured());
        assert!(session.open_container().is_none());
    }

    #[test]
    fn test_send_upstream_queues_in_order() {
        let (mut session, mut rx) = session();
        for id in 1..=3 {
            session.send_upstream(ContainerClosePacket { id, server_initiated: true }.into());
        }

        for id in 1..=3 {
            match rx.try_recv().unwrap() {
                BedrockPacket::ContainerClose(packet) => assert_eq!(packet.id, id),
                other => panic!("unexpected packet {:?}", other),
            }
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_send_after_receiver_dropped_is_silent() {
        let (mut session, rx) = session();
        drop(rx);
        session.send_upstream(ContainerClosePacket { id: 1, server_initiated: true }.into());
    }

    #[test]
    fn test_lookups_use_registries_and_cache() {
        let (mut session, _rx) = session();
        session.entities_mut().add_entity(Entity::new(
            JavaEntityId(3),
            RuntimeEntityId(30),
            Vector3f::new(1.0, 2.0, 3.0),
        ));

        assert_eq!(session.entity_by_java_id(JavaEntityId(3)).unwrap().runtime_id, RuntimeEntityId(30));
        assert_eq!(session.bedrock_block_id(BlockState(1)), 1);
        assert_eq!(session.bedrock_block_id(BlockState(100_000)), 134);
        assert_eq!(session.translate_item(Some(&ItemStack::new(803, 1))).id, 351);
    }
}
