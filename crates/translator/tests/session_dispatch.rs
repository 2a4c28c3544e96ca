//! End-to-end dispatch through the production registry and session

use bridge_core::{BlockState, Dimension};
use bridge_protocol::{
    BedrockPacket, BlockParticleData, ClientboundContainerClosePacket, ClientboundContainerSetSlotPacket,
    ClientboundKeepAlivePacket, ClientboundLevelParticlesPacket, ClientboundOpenScreenPacket, DustParticleData,
    ItemStack, JavaContainerType, JavaPacket, LevelEventType, Particle, ParticleData, ParticleType,
};
use bridge_registry::Registries;
use bridge_translator::{BridgeSession, TranslatorRegistry};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

fn setup(optional_pack: bool) -> (TranslatorRegistry, BridgeSession, UnboundedReceiver<BedrockPacket>) {
    let registries = Arc::new(Registries::load_embedded().unwrap());
    let translators = TranslatorRegistry::with_defaults(Arc::clone(&registries)).unwrap();
    let (session, rx) = BridgeSession::new(7, registries, optional_pack);
    (translators, session, rx)
}

fn drain(rx: &mut UnboundedReceiver<BedrockPacket>) -> Vec<BedrockPacket> {
    let mut packets = Vec::new();
    while let Ok(packet) = rx.try_recv() {
        packets.push(packet);
    }
    packets
}

#[test]
fn test_particles_dispatch_in_order() {
    let (translators, mut session, mut rx) = setup(false);

    let mut hearts = ClientboundLevelParticlesPacket::at(Particle::simple(ParticleType::Heart), 0.0, 64.0, 0.0);
    hearts.amount = 4;
    hearts.offset_x = 0.5;
    let crack = ClientboundLevelParticlesPacket::at(
        Particle::new(ParticleType::Block, ParticleData::Block(BlockParticleData { block_state: BlockState(2) })),
        1.0,
        64.0,
        1.0,
    );

    translators.dispatch(&mut session, &JavaPacket::from(hearts)).unwrap();
    translators.dispatch(&mut session, &JavaPacket::from(crack)).unwrap();

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 5);
    let event_types: Vec<LevelEventType> = sent
        .iter()
        .map(|packet| match packet {
            BedrockPacket::LevelEvent(event) => event.event_type,
            other => panic!("unexpected packet {:?}", other),
        })
        .collect();
    assert_eq!(&event_types[..4], &[LevelEventType::ParticleHeart; 4]);
    assert_eq!(event_types[4], LevelEventType::ParticleCrackBlock);
}

#[test]
fn test_optional_pack_flag_switches_strategy() {
    let dust = ClientboundLevelParticlesPacket::at(
        Particle::new(
            ParticleType::Dust,
            ParticleData::Dust(DustParticleData {
                red: 1.0,
                green: 0.0,
                blue: 0.0,
                scale: 1.0,
            }),
        ),
        0.0,
        64.0,
        0.0,
    );
    let packet = JavaPacket::from(dust);

    let (translators, mut session, mut rx) = setup(false);
    translators.dispatch(&mut session, &packet).unwrap();
    assert!(matches!(drain(&mut rx).as_slice(), [BedrockPacket::LevelEvent(_)]));

    session.set_optional_pack_assured(true);
    session.set_dimension(Dimension::End);
    translators.dispatch(&mut session, &packet).unwrap();
    match drain(&mut rx).as_slice() {
        [BedrockPacket::SpawnParticleEffect(effect)] => {
            assert_eq!(effect.identifier, "bridgeopt:dust");
            assert_eq!(effect.dimension_id, 2);
            assert!(effect.molang_variables_json.is_some());
        }
        other => panic!("unexpected packets {:?}", other),
    }
}

#[test]
fn test_container_lifecycle() {
    let (translators, mut session, mut rx) = setup(false);

    let packets: Vec<JavaPacket> = vec![
        ClientboundOpenScreenPacket {
            container_id: 1,
            container_type: JavaContainerType::Generic9x3,
            title: "Chest".into(),
        }
        .into(),
        ClientboundContainerSetSlotPacket {
            container_id: 1,
            state_id: 1,
            slot: 4,
            item: Some(ItemStack::new(1, 64)),
        }
        .into(),
        ClientboundContainerSetSlotPacket {
            container_id: 1,
            state_id: 2,
            slot: 54,
            item: None,
        }
        .into(),
        ClientboundContainerClosePacket { container_id: 1 }.into(),
        ClientboundContainerSetSlotPacket {
            container_id: 1,
            state_id: 3,
            slot: 0,
            item: None,
        }
        .into(),
    ];

    for packet in &packets {
        translators.dispatch(&mut session, packet).unwrap();
    }

    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 4);
    assert!(matches!(sent[0], BedrockPacket::ContainerOpen(_)));
    match (&sent[1], &sent[2]) {
        (BedrockPacket::InventorySlot(chest), BedrockPacket::InventorySlot(hotbar)) => {
            assert_eq!((chest.container_id, chest.slot, chest.item.count), (1, 4, 64));
            assert_eq!((hotbar.container_id, hotbar.slot), (0, 0));
            assert!(hotbar.item.is_air());
        }
        other => panic!("unexpected packets {:?}", other),
    }
    assert!(matches!(sent[3], BedrockPacket::ContainerClose(_)));
}

#[test]
fn test_contract_violation_does_not_end_session() {
    let (translators, mut session, mut rx) = setup(false);

    let open: JavaPacket = ClientboundOpenScreenPacket {
        container_id: 2,
        container_type: JavaContainerType::Furnace,
        title: String::new(),
    }
    .into();
    let bad_slot: JavaPacket = ClientboundContainerSetSlotPacket {
        container_id: 2,
        state_id: 0,
        slot: 99,
        item: None,
    }
    .into();
    let good_slot: JavaPacket = ClientboundContainerSetSlotPacket {
        container_id: 2,
        state_id: 0,
        slot: 1,
        item: None,
    }
    .into();

    translators.dispatch(&mut session, &open).unwrap();
    let err = translators.dispatch(&mut session, &bad_slot).unwrap_err();
    assert!(err.is_contract_violation());
    translators.dispatch(&mut session, &good_slot).unwrap();

    assert_eq!(drain(&mut rx).len(), 2);
}

#[test]
fn test_unbound_packets_and_json_capture() {
    let (translators, mut session, mut rx) = setup(false);

    let keep_alive = JavaPacket::from(ClientboundKeepAlivePacket { ping_id: 9 });
    translators.dispatch(&mut session, &keep_alive).unwrap();
    assert!(drain(&mut rx).is_empty());

    let line = r#"{"packet":"LevelParticles","particle":{"particle_type":"FLAME"},"x":0.5,"y":65.0,"z":0.5}"#;
    let packet: JavaPacket = serde_json::from_str(line).unwrap();
    translators.dispatch(&mut session, &packet).unwrap();

    match drain(&mut rx).as_slice() {
        [BedrockPacket::SpawnParticleEffect(effect)] => {
            assert_eq!(effect.identifier, "minecraft:basic_flame_particle");
        }
        other => panic!("unexpected packets {:?}", other),
    }
}
