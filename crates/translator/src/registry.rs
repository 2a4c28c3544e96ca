//! # Packet Translator Registry
//!
//! Type-safe routing of inbound Java packets to their translators.
//!
//! # Architecture
//!
//! ## Translator Registry
//!
//! The registry maps each [`JavaPacketKind`] to exactly one translator.
//! Translators are written against a concrete packet struct (via
//! [`PacketTranslator::Packet`]); the registry performs the only projection
//! from [`JavaPacket`] to that struct.
//!
//! # Performance
//!
//! - O(1) dispatch via direct HashMap lookup
//! - One virtual call per dispatched packet
//!
//! # Thread Safety
//!
//! The registry is built once at startup and then shared read-only
//! (`Arc<TranslatorRegistry>`) between all session tasks. Translators must
//! therefore be `Send + Sync`; all mutable state lives in the session.
//!
//! # Example
//!
//! ```no_run
//! use bridge_protocol::ClientboundKeepAlivePacket;
//! use bridge_translator::TranslatorRegistry;
//!
//! let mut registry = TranslatorRegistry::new();
//!
//! registry
//!     .register_function::<ClientboundKeepAlivePacket, _>(|_session, packet| {
//!         tracing::trace!("keep-alive {}", packet.ping_id);
//!         Ok(())
//!     })
//!     .expect("keep-alive is not bound yet");
//! ```

use crate::error::{Result, TranslateError};
use crate::inventory::{ContainerCloseTranslator, ContainerSetSlotTranslator, OpenScreenTranslator};
use crate::particles::ParticleTranslator;
use crate::session::TranslatorSession;
use bridge_protocol::{InboundPacket, JavaPacket, JavaPacketKind};
use bridge_registry::Registries;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Translates one kind of inbound packet
///
/// # Contract
/// - Side effects go through [`TranslatorSession::send_upstream`] only.
/// - Unmapped input is dropped with a debug log and `Ok(())`.
/// - Contract violations are returned, not logged and swallowed.
pub trait PacketTranslator: Send + Sync + 'static {
    /// The packet type this translator is bound to
    type Packet: InboundPacket;

    fn translate(&self, session: &mut dyn TranslatorSession, packet: &Self::Packet) -> Result<()>;
}

/// Closure-backed translator
struct FnTranslator<P, F> {
    function: F,
    _packet: PhantomData<fn(&P)>,
}

impl<P, F> PacketTranslator for FnTranslator<P, F>
where
    P: InboundPacket,
    F: Fn(&mut dyn TranslatorSession, &P) -> Result<()> + Send + Sync + 'static,
{
    type Packet = P;

    fn translate(&self, session: &mut dyn TranslatorSession, packet: &P) -> Result<()> {
        (self.function)(session, packet)
    }
}

/// Object-safe view of a translator, taking the packet envelope
trait BoundTranslator: Send + Sync {
    fn translate_packet(&self, session: &mut dyn TranslatorSession, packet: &JavaPacket) -> Result<()>;
}

impl<T: PacketTranslator> BoundTranslator for T {
    fn translate_packet(&self, session: &mut dyn TranslatorSession, packet: &JavaPacket) -> Result<()> {
        let concrete = <T::Packet as InboundPacket>::from_packet(packet).ok_or_else(|| {
            TranslateError::ContractViolation(format!(
                "translator for {:?} received a {:?} packet",
                <T::Packet as InboundPacket>::KIND,
                packet.kind()
            ))
        })?;

        self.translate(session, concrete)
    }
}

/// Registry of packet translators
///
/// # Purpose
/// Maintains a one-to-one mapping from packet kinds to translators and is
/// the single dispatch point for inbound packets.
///
/// # Thread Safety
/// Read-only after startup; safe to share across session tasks.
pub struct TranslatorRegistry {
    /// Map from packet kind to its translator
    translators: HashMap<JavaPacketKind, Box<dyn BoundTranslator>>,
}

impl TranslatorRegistry {
    /// Create a new translator registry
    ///
    /// # Returns
    /// An empty registry ready for translator registration
    #[inline]
    pub fn new() -> Self {
        Self {
            translators: HashMap::new(),
        }
    }

    /// Create the production registry
    ///
    /// # Arguments
    /// * `registries` - Mapping tables shared with the particle translator
    ///
    /// # Returns
    /// A registry with the particle and inventory translators bound
    pub fn with_defaults(registries: Arc<Registries>) -> Result<Self> {
        let mut registry = Self::new();

        registry.register(ParticleTranslator::new(registries))?;
        registry.register(OpenScreenTranslator)?;
        registry.register(ContainerSetSlotTranslator)?;
        registry.register(ContainerCloseTranslator)?;

        tracing::info!("Registered {} packet translators", registry.translator_count());
        Ok(registry)
    }

    /// Register a translator for its packet kind
    ///
    /// # Errors
    /// [`TranslateError::DuplicateBinding`] if the kind already has a translator.
    /// The existing binding is left untouched.
    pub fn register<T: PacketTranslator>(&mut self, translator: T) -> Result<()> {
        let kind = <T::Packet as InboundPacket>::KIND;
        if self.translators.contains_key(&kind) {
            return Err(TranslateError::DuplicateBinding(kind));
        }

        tracing::debug!("Registered translator for packet kind: {:?}", kind);
        self.translators.insert(kind, Box::new(translator));
        Ok(())
    }

    /// Register a function-based translator
    ///
    /// # Arguments
    /// * `P` - The packet type to translate
    /// * `function` - Called with the session and the concrete packet
    pub fn register_function<P, F>(&mut self, function: F) -> Result<()>
    where
        P: InboundPacket,
        F: Fn(&mut dyn TranslatorSession, &P) -> Result<()> + Send + Sync + 'static,
    {
        self.register(FnTranslator {
            function,
            _packet: PhantomData,
        })
    }

    /// Dispatch a packet to its registered translator
    ///
    /// # Returns
    /// - `Ok(())` - Packet translated, or no translator is bound to its kind
    /// - `Err(e)` - The translator's own error, unchanged
    pub fn dispatch(&self, session: &mut dyn TranslatorSession, packet: &JavaPacket) -> Result<()> {
        match self.translators.get(&packet.kind()) {
            Some(translator) => translator.translate_packet(session, packet),
            None => {
                tracing::trace!("No translator for packet kind: {:?}", packet.kind());
                Ok(())
            }
        }
    }

    /// Check if a translator is registered for a packet kind
    pub fn has_translator(&self, kind: JavaPacketKind) -> bool {
        self.translators.contains_key(&kind)
    }

    /// Get the number of registered translators
    pub fn translator_count(&self) -> usize {
        self.translators.len()
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::inventory::OpenContainer;
    use bridge_core::{BlockState, Dimension, JavaEntityId};
    use bridge_protocol::{
        BedrockPacket, ClientboundContainerClosePacket, ClientboundKeepAlivePacket,
        ClientboundSystemChatPacket, ContainerClosePacket, ItemData, ItemStack,
    };

    #[derive(Default)]
    struct RecordingSession {
        sent: Vec<BedrockPacket>,
    }

    impl TranslatorSession for RecordingSession {
        fn dimension(&self) -> Dimension {
            Dimension::Overworld
        }
        fn bedrock_block_id(&self, _state: BlockState) -> u32 {
            0
        }
        fn translate_item(&self, _item: Option<&ItemStack>) -> ItemData {
            ItemData::AIR
        }
        fn entity_by_java_id(&self, _java_id: JavaEntityId) -> Option<Entity> {
            None
        }
        fn optional_pack_assured(&self) -> bool {
            false
        }
        fn open_container(&self) -> Option<OpenContainer> {
            None
        }
        fn set_open_container(&mut self, _container: Option<OpenContainer>) {}
        fn send_upstream(&mut self, packet: BedrockPacket) {
            self.sent.push(packet);
        }
    }

    fn close_echo(registry: &mut TranslatorRegistry) -> Result<()> {
        registry.register_function::<ClientboundContainerClosePacket, _>(|session, packet| {
            session.send_upstream(
                ContainerClosePacket {
                    id: packet.container_id as u8,
                    server_initiated: true,
                }
                .into(),
            );
            Ok(())
        })
    }

    #[test]
    fn test_registry_register() {
        let mut registry = TranslatorRegistry::new();
        close_echo(&mut registry).unwrap();

        assert!(registry.has_translator(JavaPacketKind::ContainerClose));
        assert!(!registry.has_translator(JavaPacketKind::KeepAlive));
        assert_eq!(registry.translator_count(), 1);
    }

    #[test]
    fn test_registry_duplicate_binding() {
        let mut registry = TranslatorRegistry::new();
        close_echo(&mut registry).unwrap();

        let result = close_echo(&mut registry);
        assert!(matches!(
            result,
            Err(TranslateError::DuplicateBinding(JavaPacketKind::ContainerClose))
        ));
        assert_eq!(registry.translator_count(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registries = Arc::new(bridge_registry::Registries::load_embedded().unwrap());
        let mut registry = TranslatorRegistry::with_defaults(registries).unwrap();

        assert_eq!(registry.translator_count(), 4);
        assert!(registry.has_translator(JavaPacketKind::LevelParticles));
        assert!(registry.has_translator(JavaPacketKind::OpenScreen));
        assert!(registry.has_translator(JavaPacketKind::ContainerSetSlot));
        assert!(!registry.has_translator(JavaPacketKind::SystemChat));

        assert!(matches!(
            close_echo(&mut registry),
            Err(TranslateError::DuplicateBinding(JavaPacketKind::ContainerClose))
        ));
    }

    #[test]
    fn test_registry_dispatch() {
        let mut registry = TranslatorRegistry::new();
        close_echo(&mut registry).unwrap();

        let mut session = RecordingSession::default();
        let packet = ClientboundContainerClosePacket { container_id: 4 }.into();
        registry.dispatch(&mut session, &packet).unwrap();

        assert_eq!(
            session.sent,
            vec![BedrockPacket::ContainerClose(ContainerClosePacket {
                id: 4,
                server_initiated: true
            })]
        );
    }

    #[test]
    fn test_registry_no_translator_is_noop() {
        let registry = TranslatorRegistry::new();
        let mut session = RecordingSession::default();
        let packet = ClientboundSystemChatPacket {
            content: "hello".into(),
            overlay: false,
        }
        .into();

        assert!(registry.dispatch(&mut session, &packet).is_ok());
        assert!(session.sent.is_empty());
    }

    #[test]
    fn test_registry_propagates_translator_error() {
        let mut registry = TranslatorRegistry::new();
        registry
            .register_function::<ClientboundKeepAlivePacket, _>(|_session, packet| {
                Err(TranslateError::ContractViolation(format!("bad ping {}", packet.ping_id)))
            })
            .unwrap();

        let mut session = RecordingSession::default();
        let packet = ClientboundKeepAlivePacket { ping_id: -1 }.into();
        let err = registry.dispatch(&mut session, &packet).unwrap_err();

        assert!(err.is_contract_violation());
        assert_eq!(err.to_string(), "Contract violation: bad ping -1");
    }
}
