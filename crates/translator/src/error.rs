//! Error types for the translator crate

use bridge_core::BridgeError;
use bridge_protocol::{JavaPacketKind, ParticleType};

/// Translation error types
///
/// Unmapped or unsupported input is not an error: translators drop it with a
/// debug log and return `Ok(())`. Everything here either aborts startup
/// (`DuplicateBinding`) or fails the translation of a single message.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Two translators registered for the same packet kind
    #[error("A translator is already bound to {0:?}")]
    DuplicateBinding(JavaPacketKind),

    /// Particle payload variant does not match the declared particle type
    #[error("Particle {particle_type:?} carried {found} data")]
    ParticleDataMismatch {
        particle_type: ParticleType,
        found: &'static str,
    },

    /// Java slot index outside the container's slot range
    #[error("Slot {slot} is outside {container} (0..{total_slots})")]
    SlotOutOfRange {
        container: &'static str,
        slot: i32,
        total_slots: usize,
    },

    /// Any other broken packet contract
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Molang variable serialization failure
    #[error("Failed to serialize Molang variables: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TranslateError {
    /// Whether this error is a per-message contract violation
    ///
    /// The session survives these; the caller logs and moves on to the next
    /// message.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::ParticleDataMismatch { .. } | Self::SlotOutOfRange { .. } | Self::ContractViolation(_)
        )
    }
}

impl From<TranslateError> for BridgeError {
    fn from(err: TranslateError) -> Self {
        BridgeError::Translation(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;
