//! Protocol module - wire format, index arrays, and frames.
//!
//! This module implements the Confluent Schema Registry framing:
//! - 5-byte header encoding/decoding (magic byte + schema id)
//! - Message index array varint codec
//! - Frame composition and parsing

mod frame;
mod indexes;
mod wire_format;

pub use frame::{compose_frame, parse_frame, Frame, FrameInfo};
pub use indexes::{
    decode_indexes, encode_indexes, encode_indexes_into, encoded_indexes_len,
    size_of_encoded_indexes,
};
pub use wire_format::{SchemaHeader, HEADER_SIZE, MAGIC_BYTE};
