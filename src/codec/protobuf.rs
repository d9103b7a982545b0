//! Protobuf codec using `prost`.
//!
//! # Example
//!
//! ```
//! use protoframe::codec::ProtobufCodec;
//!
//! #[derive(Clone, PartialEq, prost::Message)]
//! struct Greeting {
//!     #[prost(string, tag = "1")]
//!     text: String,
//! }
//!
//! let msg = Greeting { text: "Hello".to_string() };
//! let encoded = ProtobufCodec::encode(&msg);
//! assert_eq!(encoded, b"\x0a\x05Hello");
//!
//! let decoded: Greeting = ProtobufCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, msg);
//! ```

use prost::Message;

use crate::error::Result;

/// Protobuf codec for frame payloads.
pub struct ProtobufCodec;

impl ProtobufCodec {
    /// Encode a message to protobuf bytes.
    #[inline]
    pub fn encode<M: Message>(msg: &M) -> Vec<u8> {
        msg.encode_to_vec()
    }

    /// Decode protobuf bytes to a new message.
    ///
    /// # Errors
    ///
    /// Returns `PayloadDecode` if the bytes are not a valid encoding of `M`.
    #[inline]
    pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M> {
        Ok(M::decode(bytes)?)
    }

    /// Decode protobuf bytes into an existing message.
    ///
    /// The message is cleared first, so no fields from its previous value
    /// survive.
    ///
    /// # Errors
    ///
    /// Returns `PayloadDecode` if the bytes are not a valid encoding of `M`.
    pub fn merge<M: Message>(msg: &mut M, bytes: &[u8]) -> Result<()> {
        msg.clear();
        msg.merge(bytes)?;
        Ok(())
    }
}
