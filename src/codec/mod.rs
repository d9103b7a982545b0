//! Codec module - serialization/deserialization for payloads.
//!
//! Frame payloads are protobuf messages encoded with `prost`. The framing
//! itself never looks inside them.
//!
//! - [`ProtobufCodec`] - encode, decode, and decode-into for `prost::Message`
//!
//! # Design
//!
//! Codecs are implemented as marker structs with static methods rather than trait objects.

mod protobuf;

pub use protobuf::ProtobufCodec;
