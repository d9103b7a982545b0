//! Message index array encoding.
//!
//! The index array is a count followed by that many indexes, each written
//! as a zig-zag signed varint (the protobuf `sint64` scheme):
//!
//! ```text
//! []      -> 00
//! [0]     -> 02 00
//! [1, 1]  -> 04 02 02
//! [64]    -> 02 80 01
//! ```
//!
//! Base-128 byte handling comes from `prost::encoding`.

use bytes::BufMut;
use prost::encoding::{decode_varint, encode_varint, encoded_len_varint};

use crate::error::IndexDecodeError;

#[inline]
fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline]
fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Read one signed varint at `offset`, returning the value and its length.
fn read_varint(data: &[u8], offset: usize) -> Option<(i64, usize)> {
    let mut buf = data.get(offset..)?;
    let before = buf.len();
    let raw = decode_varint(&mut buf).ok()?;
    Some((zigzag_decode(raw), before - buf.len()))
}

/// Walk an encoded index array, calling `visit` for each index.
///
/// Returns the number of bytes the array occupies.
fn walk_indexes<F>(data: &[u8], mut visit: F) -> Result<usize, IndexDecodeError>
where
    F: FnMut(usize, i64) -> Result<(), IndexDecodeError>,
{
    let (count, mut size) =
        read_varint(data, 0).ok_or(IndexDecodeError::InvalidCount { offset: 0 })?;
    if count < 0 {
        return Err(IndexDecodeError::NegativeCount { count });
    }

    for position in 0..count as usize {
        let (value, len) = read_varint(data, size)
            .ok_or(IndexDecodeError::InvalidIndex { position, offset: size })?;
        visit(position, value)?;
        size += len;
    }

    Ok(size)
}

/// Encode an index array into an existing buffer.
pub fn encode_indexes_into(indexes: &[i32], buf: &mut impl BufMut) {
    encode_varint(zigzag_encode(indexes.len() as i64), buf);
    for &index in indexes {
        encode_varint(zigzag_encode(i64::from(index)), buf);
    }
}

/// Encode an index array to bytes.
///
/// # Example
///
/// ```
/// use protoframe::protocol::encode_indexes;
///
/// assert_eq!(encode_indexes(&[]), vec![0x00]);
/// assert_eq!(encode_indexes(&[1, 1]), vec![0x04, 0x02, 0x02]);
/// ```
pub fn encode_indexes(indexes: &[i32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_indexes_len(indexes));
    encode_indexes_into(indexes, &mut buf);
    buf
}

/// Number of bytes `encode_indexes` produces for `indexes`.
pub fn encoded_indexes_len(indexes: &[i32]) -> usize {
    encoded_len_varint(zigzag_encode(indexes.len() as i64))
        + indexes
            .iter()
            .map(|&index| encoded_len_varint(zigzag_encode(i64::from(index))))
            .sum::<usize>()
}

/// Number of leading bytes of `data` that belong to an encoded index array.
///
/// Trailing bytes after the array are ignored. The index values are
/// skipped, not collected.
///
/// # Errors
///
/// Fails if the count or any index varint is truncated or overflows, or if
/// the count is negative.
///
/// ```
/// use protoframe::protocol::size_of_encoded_indexes;
///
/// // count 1, index 0, then payload bytes
/// assert_eq!(size_of_encoded_indexes(&[0x02, 0x00, 0x0a, 0x05]).unwrap(), 2);
/// assert!(size_of_encoded_indexes(&[]).is_err());
/// ```
pub fn size_of_encoded_indexes(data: &[u8]) -> Result<usize, IndexDecodeError> {
    walk_indexes(data, |_, _| Ok(()))
}

/// Decode an index array, returning the indexes and the bytes consumed.
///
/// # Errors
///
/// Same as [`size_of_encoded_indexes`], plus `IndexOutOfRange` for values
/// that do not fit in an `i32`.
pub fn decode_indexes(data: &[u8]) -> Result<(Vec<i32>, usize), IndexDecodeError> {
    let mut indexes = Vec::new();
    let size = walk_indexes(data, |position, value| {
        let index = i32::try_from(value)
            .map_err(|_| IndexDecodeError::IndexOutOfRange { position, value })?;
        indexes.push(index);
        Ok(())
    })?;
    Ok((indexes, size))
}
