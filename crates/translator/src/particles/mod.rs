//! # Particle Translation
//!
//! Turns one Java `ClientboundLevelParticlesPacket` into the Bedrock packets
//! that reproduce it.
//!
//! ## Strategies
//!
//! - **Enriched**: a single spawn-effect packet whose Molang variables let
//!   the optional pack's particle definitions reproduce count, spread, speed
//!   and color on the client. Only used when the session assumes the pack is
//!   applied and the mapping names a particle identifier.
//! - **Direct**: vanilla Bedrock encodings (level events, generic level
//!   events and plain spawn-effect packets), fanned out to one packet per
//!   Java particle instance.
//!
//! Enriched wins when it applies; direct is the fallback. A particle neither
//! strategy can encode is dropped with a debug log.
//!
//! ## Fan-out
//!
//! A count of 0 spawns exactly one particle at the origin. A count of `n`
//! spawns `n` particles, each displaced on every axis by a standard-normal
//! draw scaled by the packet's offset for that axis (see [`ParticleJitter`]).

mod jitter;
pub mod molang;

pub use jitter::ParticleJitter;
pub use molang::{MolangValue, MolangVariable};

use crate::error::{Result, TranslateError};
use crate::registry::PacketTranslator;
use crate::session::TranslatorSession;
use bridge_core::{BlockState, Vector3f};
use bridge_protocol::{
    BedrockPacket, ClientboundLevelParticlesPacket, LevelEventGenericPacket, LevelEventPacket,
    LevelEventType, NbtMap, ParticleData, ParticleType, PositionSource, SpawnParticleEffectPacket,
};
use bridge_registry::{ParticleMapping, Registries};
use std::sync::Arc;

/// Ticks per second on the Java server
const TICKS_PER_SECOND: f32 = 20.0;

/// Travel speed of a Bedrock vibration signal
const VIBRATION_SPEED: f32 = 20.0;

/// `unique_entity_id` of a spawn effect not attached to an entity
const NO_ENTITY: i64 = -1;

/// One Bedrock packet template, instantiated per spawn position
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleSpawner {
    /// Position-only level event
    LevelEvent { event_type: LevelEventType, data: i32 },

    /// Identifier-addressed particle effect
    SpawnEffect {
        identifier: String,
        dimension_id: i32,
        molang_variables_json: Option<String>,
    },

    /// Sculk vibration travelling from the spawn position to `target`
    Vibration { target: Vector3f, time_to_live: f32 },
}

impl ParticleSpawner {
    /// Build the packet for a particle spawned at `position`
    pub fn spawn(&self, position: Vector3f) -> BedrockPacket {
        match self {
            Self::LevelEvent { event_type, data } => LevelEventPacket {
                event_type: *event_type,
                position,
                data: *data,
            }
            .into(),
            Self::SpawnEffect {
                identifier,
                dimension_id,
                molang_variables_json,
            } => SpawnParticleEffectPacket {
                identifier: identifier.clone(),
                dimension_id: *dimension_id,
                unique_entity_id: NO_ENTITY,
                position,
                molang_variables_json: molang_variables_json.clone(),
            }
            .into(),
            Self::Vibration { target, time_to_live } => LevelEventGenericPacket {
                event_id: LevelEventGenericPacket::VIBRATION_EVENT_ID,
                tag: NbtMap::builder()
                    .put_compound("origin", vec3_tag(position))
                    .put_compound("target", vec3_tag(*target))
                    .put_float("speed", VIBRATION_SPEED)
                    .put_float("timeToLive", *time_to_live)
                    .build(),
            }
            .into(),
        }
    }
}

fn vec3_tag(position: Vector3f) -> NbtMap {
    NbtMap::builder()
        .put_string("type", "vec3")
        .put_float("x", position.x)
        .put_float("y", position.y)
        .put_float("z", position.z)
        .build()
}

/// Translator for Java particle packets
///
/// # Thread Safety
/// Shared between sessions through the translator registry. The mapping
/// tables are read-only and [`ParticleJitter`] locks its seeded generator.
pub struct ParticleTranslator {
    registries: Arc<Registries>,
    jitter: ParticleJitter,
}

impl ParticleTranslator {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self::with_jitter(registries, ParticleJitter::default())
    }

    /// Create a translator with an explicit random source
    pub fn with_jitter(registries: Arc<Registries>, jitter: ParticleJitter) -> Self {
        Self { registries, jitter }
    }
}

impl PacketTranslator for ParticleTranslator {
    type Packet = ClientboundLevelParticlesPacket;

    fn translate(&self, session: &mut dyn TranslatorSession, packet: &Self::Packet) -> Result<()> {
        let particle_type = packet.particle.particle_type;
        let mapping = self.registries.particles.get(particle_type);
        let origin = Vector3f::from_f64(packet.x, packet.y, packet.z);

        if session.optional_pack_assured() {
            if let Some(spawner) = enriched_spawner(&*session, packet, mapping)? {
                session.send_upstream(spawner.spawn(origin));
                return Ok(());
            }
        }

        let Some(spawner) = direct_spawner(&*session, packet, mapping)? else {
            tracing::debug!("Unhandled particle type: {:?}", particle_type);
            return Ok(());
        };

        let count = packet.amount.max(0) as usize;
        if count == 0 {
            session.send_upstream(spawner.spawn(origin));
            return Ok(());
        }

        let positions = self.jitter.scatter(
            [packet.x, packet.y, packet.z],
            [packet.offset_x, packet.offset_y, packet.offset_z],
            count,
        );
        for position in positions {
            session.send_upstream(spawner.spawn(position));
        }

        Ok(())
    }
}

/// Resolve the optional pack encoding of a particle packet
///
/// # Returns
/// - `Ok(Some(spawner))` - a single Molang-driven spawn effect
/// - `Ok(None)` - the particle is excluded or has no identifier
/// - `Err(e)` - the payload does not match the particle type, or a Molang
///   value is NaN or infinite
pub fn enriched_spawner(
    session: &dyn TranslatorSession,
    packet: &ClientboundLevelParticlesPacket,
    mapping: Option<&ParticleMapping>,
) -> Result<Option<ParticleSpawner>> {
    let particle_type = packet.particle.particle_type;
    let mut variables = match particle_type {
        ParticleType::Block
        | ParticleType::BlockMarker
        | ParticleType::FallingDust
        | ParticleType::Item
        | ParticleType::Vibration => return Ok(None),
        ParticleType::Dust => match &packet.particle.data {
            ParticleData::Dust(dust) => vec![
                MolangVariable::color(molang::COLOR, dust.red, dust.green, dust.blue),
                MolangVariable::float(molang::SCALE, dust.scale),
            ],
            other => return Err(data_mismatch(particle_type, other)),
        },
        ParticleType::DustColorTransition => match &packet.particle.data {
            ParticleData::DustColorTransition(dust) => vec![
                MolangVariable::color(molang::START_COLOR, dust.red, dust.green, dust.blue),
                MolangVariable::color(molang::END_COLOR, dust.new_red, dust.new_green, dust.new_blue),
                MolangVariable::float(molang::SCALE, dust.scale),
            ],
            other => return Err(data_mismatch(particle_type, other)),
        },
        _ => Vec::new(),
    };

    let Some(identifier) = mapping.and_then(|m| m.identifier.as_deref()) else {
        return Ok(None);
    };

    variables.extend(molang::default_variables(
        packet.amount,
        [packet.offset_x, packet.offset_y, packet.offset_z],
        packet.velocity_offset,
    ));

    if !variables.iter().all(MolangVariable::is_finite) {
        return Err(TranslateError::ContractViolation(format!(
            "non-finite Molang value in {:?} particle",
            particle_type
        )));
    }

    Ok(Some(ParticleSpawner::SpawnEffect {
        identifier: identifier.to_string(),
        dimension_id: session.dimension().bedrock_id(),
        molang_variables_json: Some(molang::to_json(&variables)?),
    }))
}

/// Resolve the vanilla Bedrock encoding of a particle packet
///
/// # Returns
/// - `Ok(Some(spawner))` - the packet template for each particle instance
/// - `Ok(None)` - unmapped type, or a vibration whose entity is unknown
/// - `Err(e)` - the payload does not match the particle type
pub fn direct_spawner(
    session: &dyn TranslatorSession,
    packet: &ClientboundLevelParticlesPacket,
    mapping: Option<&ParticleMapping>,
) -> Result<Option<ParticleSpawner>> {
    let particle_type = packet.particle.particle_type;
    let data = &packet.particle.data;

    let spawner = match (particle_type, data) {
        (ParticleType::Block, ParticleData::Block(block)) => {
            block_event(session, LevelEventType::ParticleCrackBlock, block.block_state)
        }
        (ParticleType::BlockMarker, ParticleData::Block(block)) => {
            block_event(session, LevelEventType::ParticleTerrain, block.block_state)
        }
        (ParticleType::FallingDust, ParticleData::FallingDust(dust)) => {
            block_event(session, LevelEventType::ParticleFallingDust, dust.block_state)
        }
        (ParticleType::Item, ParticleData::Item(item)) => {
            let item = session.translate_item(Some(&item.item));
            ParticleSpawner::LevelEvent {
                event_type: LevelEventType::ParticleItemBreak,
                data: (item.id << 16) | item.damage,
            }
        }
        (ParticleType::Dust, ParticleData::Dust(dust)) => ParticleSpawner::LevelEvent {
            event_type: LevelEventType::ParticleFallingDust,
            data: argb(dust.red, dust.green, dust.blue),
        },
        (ParticleType::DustColorTransition, ParticleData::DustColorTransition(dust)) => {
            ParticleSpawner::LevelEvent {
                event_type: LevelEventType::ParticleFallingDust,
                data: argb(dust.red, dust.green, dust.blue),
            }
        }
        (ParticleType::Vibration, ParticleData::Vibration(vibration)) => {
            let target = match vibration.position_source {
                PositionSource::Block { position } => position.center(),
                PositionSource::Entity { entity_id, y_offset } => match session.entity_by_java_id(entity_id) {
                    Some(entity) => entity.position.up(y_offset),
                    None => {
                        tracing::debug!("Dropping vibration towards unknown entity {}", entity_id.get());
                        return Ok(None);
                    }
                },
            };
            ParticleSpawner::Vibration {
                target,
                time_to_live: vibration.arrival_ticks as f32 / TICKS_PER_SECOND,
            }
        }
        (
            ParticleType::Block
            | ParticleType::BlockMarker
            | ParticleType::FallingDust
            | ParticleType::Item
            | ParticleType::Dust
            | ParticleType::DustColorTransition
            | ParticleType::Vibration,
            other,
        ) => return Err(data_mismatch(particle_type, other)),
        _ => match mapping {
            Some(ParticleMapping {
                level_event_type: Some(event_type),
                ..
            }) => ParticleSpawner::LevelEvent {
                event_type: *event_type,
                data: 0,
            },
            Some(ParticleMapping {
                identifier: Some(identifier),
                ..
            }) => ParticleSpawner::SpawnEffect {
                identifier: identifier.clone(),
                dimension_id: session.dimension().bedrock_id(),
                molang_variables_json: None,
            },
            _ => return Ok(None),
        },
    };

    Ok(Some(spawner))
}

fn block_event(session: &dyn TranslatorSession, event_type: LevelEventType, state: BlockState) -> ParticleSpawner {
    ParticleSpawner::LevelEvent {
        event_type,
        data: session.bedrock_block_id(state) as i32,
    }
}

/// Pack an opaque RGB color (channels 0-1) as ARGB
fn argb(red: f32, green: f32, blue: f32) -> i32 {
    let channel = |value: f32| ((value * 255.0) as i32 & 0xFF) as u32;
    ((0xFF << 24) | (channel(red) << 16) | (channel(green) << 8) | channel(blue)) as i32
}

fn data_mismatch(particle_type: ParticleType, data: &ParticleData) -> TranslateError {
    let found = match data {
        ParticleData::None => "no",
        ParticleData::Block(_) => "block",
        ParticleData::FallingDust(_) => "falling dust",
        ParticleData::Dust(_) => "dust",
        ParticleData::DustColorTransition(_) => "dust color transition",
        ParticleData::Item(_) => "item",
        ParticleData::Vibration(_) => "vibration",
    };
    TranslateError::ParticleDataMismatch { particle_type, found }
}
