//! Wire format encoding and decoding.
//!
//! Implements the 5-byte schema header that starts every frame:
//! ```text
//! ┌───────┬───────────┬─────────────┬─────────┐
//! │ Magic │ Schema ID │ Index array │ Payload │
//! │ 1 byte│ 4 bytes   │ varints     │ rest    │
//! │ 0x00  │ uint32 BE │             │         │
//! └───────┴───────────┴─────────────┴─────────┘
//! ```
//!
//! Only the first two fields have a fixed width; the index array is
//! handled by [`super::indexes`].

use crate::error::{FramingError, Result};

/// Magic byte for the Confluent wire format.
pub const MAGIC_BYTE: u8 = 0;

/// Header size in bytes (magic + schema id).
pub const HEADER_SIZE: usize = 5;

/// Decoded schema header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaHeader {
    /// Registry schema identifier.
    pub schema_id: u32,
}

impl SchemaHeader {
    /// Create a new header.
    pub fn new(schema_id: u32) -> Self {
        Self { schema_id }
    }

    /// Encode header to bytes (Big Endian).
    ///
    /// # Example
    ///
    /// ```
    /// use protoframe::protocol::SchemaHeader;
    ///
    /// let bytes = SchemaHeader::new(1).encode();
    /// assert_eq!(bytes, [0, 0, 0, 0, 1]);
    /// ```
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        self.encode_into(&mut buf);
        buf
    }

    /// Encode header into an existing buffer.
    ///
    /// # Panics
    ///
    /// Panics if buffer is smaller than `HEADER_SIZE` (5 bytes).
    pub fn encode_into(&self, buf: &mut [u8]) {
        debug_assert!(buf.len() >= HEADER_SIZE);
        buf[0] = MAGIC_BYTE;
        buf[1..5].copy_from_slice(&self.schema_id.to_be_bytes());
    }

    /// Decode and validate the header at the start of `buf`.
    ///
    /// Fails with `FrameTooShort` below 5 bytes and with `BadMagicByte`
    /// if the first byte is not zero.
    ///
    /// ```
    /// use protoframe::protocol::SchemaHeader;
    ///
    /// let header = SchemaHeader::decode(&[0, 0, 0, 1, 0, 0xAA]).unwrap();
    /// assert_eq!(header.schema_id, 256);
    /// ```
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(FramingError::FrameTooShort { len: buf.len() });
        }
        if buf[0] != MAGIC_BYTE {
            return Err(FramingError::BadMagicByte(buf[0]));
        }
        Ok(Self {
            schema_id: u32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]),
        })
    }
}
