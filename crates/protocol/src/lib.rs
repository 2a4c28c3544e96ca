//! # Bridge Protocol Model
//!
//! Field-level models of the packets the translation core consumes and
//! produces. Byte layout is owned by the edition codecs that sit in front of
//! and behind the bridge; this crate only describes what each packet carries.
//!
//! ## Architecture
//!
//! ### 1. Java packets ([`java`])
//! Clientbound packets received from the Java server:
//! - [`JavaPacket`]: the closed set of inbound messages the bridge understands
//! - [`JavaPacketKind`]: the dispatch key for each message
//! - [`InboundPacket`]: typed projection from [`JavaPacket`] to a concrete packet
//!
//! ### 2. Bedrock packets ([`bedrock`])
//! Packets sent upstream to the Bedrock client, plus the Bedrock enums
//! (level events, container types, slot categories) they carry.
//!
//! ### 3. NBT ([`nbt`])
//! The compound tag model used by generic level events.
//!
//! ## Usage Example
//!
//! ```rust
//! use bridge_protocol::{InboundPacket, JavaPacket, ClientboundContainerClosePacket};
//!
//! let packet = JavaPacket::ContainerClose(ClientboundContainerClosePacket { container_id: 3 });
//! let close = ClientboundContainerClosePacket::from_packet(&packet).unwrap();
//! assert_eq!(close.container_id, 3);
//! ```

pub mod bedrock;
pub mod java;
pub mod nbt;

// Re-export commonly used items
pub use bedrock::*;
pub use java::*;
pub use nbt::*;
