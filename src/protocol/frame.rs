//! Frame composition and parsing.
//!
//! A frame is the schema header, the message index array and the protobuf
//! payload, back to back. [`compose_frame`] and [`parse_frame`] work on
//! plain slices; [`Frame`] is the owned form with the index values decoded
//! and the payload shared via `bytes::Bytes`.
//!
//! # Example
//!
//! ```
//! use protoframe::protocol::{compose_frame, parse_frame};
//!
//! let bytes = compose_frame(1, &[0], b"\x0a\x05Hello");
//! assert_eq!(&bytes[..7], &[0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x00]);
//!
//! let info = parse_frame(&bytes).unwrap();
//! assert_eq!(info.schema_id, 1);
//! assert_eq!(&bytes[info.payload_offset..], b"\x0a\x05Hello");
//! ```

use bytes::Bytes;

use super::indexes::{decode_indexes, encode_indexes_into, encoded_indexes_len, size_of_encoded_indexes};
use super::wire_format::{SchemaHeader, HEADER_SIZE};
use crate::error::{FramingError, Result};

/// Location of the parts of a frame inside its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Registry schema identifier.
    pub schema_id: u32,
    /// Byte offset where the payload starts.
    pub payload_offset: usize,
}

/// A complete, decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Registry schema identifier.
    pub schema_id: u32,
    /// Message index path, outermost first.
    pub indexes: Vec<i32>,
    /// Protobuf payload (zero-copy via `bytes::Bytes`).
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(schema_id: u32, indexes: Vec<i32>, payload: Bytes) -> Self {
        Self {
            schema_id,
            indexes,
            payload,
        }
    }

    /// Parse a frame, decoding the index values.
    ///
    /// The payload is a slice of `data`, not a copy.
    pub fn parse(data: Bytes) -> Result<Self> {
        let header = SchemaHeader::decode(&data)?;

        let (indexes, index_len) = if data.len() == HEADER_SIZE {
            (Vec::new(), 0)
        } else {
            decode_indexes(&data[HEADER_SIZE..]).map_err(FramingError::BadIndexArray)?
        };

        let payload = data.slice(HEADER_SIZE + index_len..);
        Ok(Self {
            schema_id: header.schema_id,
            indexes,
            payload,
        })
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Total encoded size of this frame.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + encoded_indexes_len(&self.indexes) + self.payload.len()
    }

    /// Encode the frame into a contiguous buffer.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(compose_frame(self.schema_id, &self.indexes, &self.payload))
    }
}

/// Build a complete frame as a single byte vector.
///
/// Output is `[0x00][schema_id BE][index array][payload]`.
pub fn compose_frame(schema_id: u32, indexes: &[i32], payload: &[u8]) -> Vec<u8> {
    let mut buf =
        Vec::with_capacity(HEADER_SIZE + encoded_indexes_len(indexes) + payload.len());
    buf.extend_from_slice(&SchemaHeader::new(schema_id).encode());
    encode_indexes_into(indexes, &mut buf);
    buf.extend_from_slice(payload);

    tracing::trace!(
        schema_id,
        ?indexes,
        payload_len = payload.len(),
        frame_len = buf.len(),
        "composed frame"
    );
    buf
}

/// Parse the header and measure the index array of a frame.
///
/// Does not decode the payload; it starts at `payload_offset`. A bare
/// 5-byte header is read as an empty index array with an empty payload.
///
/// # Errors
///
/// - `FrameTooShort` if `data` is shorter than 5 bytes
/// - `BadMagicByte` if the first byte is not zero
/// - `BadIndexArray` if the index array is malformed
pub fn parse_frame(data: &[u8]) -> Result<FrameInfo> {
    let header = SchemaHeader::decode(data).map_err(|e| {
        tracing::debug!("Rejected frame header: {}", e);
        e
    })?;

    let index_len = if data.len() == HEADER_SIZE {
        0
    } else {
        size_of_encoded_indexes(&data[HEADER_SIZE..]).map_err(|e| {
            tracing::debug!("Rejected index array for schema {}: {}", header.schema_id, e);
            FramingError::BadIndexArray(e)
        })?
    };

    let info = FrameInfo {
        schema_id: header.schema_id,
        payload_offset: HEADER_SIZE + index_len,
    };
    tracing::trace!(
        schema_id = info.schema_id,
        payload_offset = info.payload_offset,
        "parsed frame"
    );
    Ok(info)
}
