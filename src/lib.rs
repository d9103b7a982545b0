//! # protoframe
//!
//! Confluent Schema Registry wire framing for Protocol Buffers payloads.
//!
//! Every frame carries the registry schema id and the index path of the
//! message type inside its `.proto` file, so a consumer can fetch the schema
//! and pick the right message type before decoding the payload.
//!
//! ## Wire format
//!
//! ```text
//! ┌───────┬───────────┬──────────────────────┬──────────────────┐
//! │ 0x00  │ schema id │ index array          │ protobuf payload │
//! │ 1 byte│ u32 BE    │ zig-zag varints      │ remaining bytes  │
//! └───────┴───────────┴──────────────────────┴──────────────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use protoframe::{Deserializer, Serializer};
//!
//! let serializer = Serializer::builder().schema_id(42).build();
//! let bytes = serializer.serialize(&message)?;
//!
//! let mut decoded = MyMessage::default();
//! let schema_id = Deserializer::new().deserialize_into(&bytes, &mut decoded)?;
//! ```

pub mod codec;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod protocol;

mod serdes;

#[cfg(test)]
mod fixtures;

pub use config::{SerializerConfig, DEFAULT_SCHEMA_ID};
pub use error::{FramingError, IndexDecodeError, Result};
pub use protocol::{compose_frame, parse_frame, Frame, FrameInfo, MAGIC_BYTE};
pub use serdes::{deserialize, serialize, Deserializer, Serializer, SerializerBuilder};
