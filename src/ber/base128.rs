//! Base-128 subidentifier encoding.
//!
//! Each subidentifier is split into 7-bit groups, most significant first.
//! Every group except the last has bit 8 set as a continuation marker.
//!
//! ```
//! use snmp_oid::ber::base128::{decode_subidentifier, encode_subidentifier};
//!
//! let (buf, len) = encode_subidentifier(16384);
//! assert_eq!(&buf[..len], &[0x81, 0x80, 0x00]);
//! assert_eq!(decode_subidentifier(&buf[..len], u32::from(u16::MAX)), Ok((16384, 3)));
//! ```

use crate::error::DecodeErrorKind;

/// Most groups a `u32` can need (`ceil(32 / 7)`).
pub const MAX_GROUPS: usize = 5;

/// Encode a subidentifier, returning the groups in wire order and their count.
pub fn encode_subidentifier(value: u32) -> ([u8; MAX_GROUPS], usize) {
    let mut buf = [0u8; MAX_GROUPS];

    if value < 0x80 {
        buf[0] = value as u8;
        return (buf, 1);
    }

    // Count how many 7-bit groups we need
    let mut temp = value;
    let mut count = 0;
    while temp > 0 {
        count += 1;
        temp >>= 7;
    }

    // Encode from MSB to LSB
    for (slot, i) in (0..count).rev().enumerate() {
        let mut byte = ((value >> (i * 7)) & 0x7F) as u8;
        if i > 0 {
            byte |= 0x80; // Continuation bit
        }
        buf[slot] = byte;
    }

    (buf, count)
}

/// Decode one subidentifier from the front of `data`, returning (value, bytes_consumed).
///
/// Stops at the first byte with bit 8 clear. Leading `0x80` groups
/// (non-minimal encodings) are accepted.
///
/// # Errors
///
/// - [`DecodeErrorKind::TruncatedSubidentifier`] if `data` ends while the
///   continuation bit is still set (including an empty `data`).
/// - [`DecodeErrorKind::ArcOutOfRange`] as soon as the accumulated value
///   exceeds `max`. `max` must be below `u32::MAX >> 7`.
pub fn decode_subidentifier(data: &[u8], max: u32) -> Result<(u32, usize), DecodeErrorKind> {
    let mut value: u32 = 0;

    for (i, &byte) in data.iter().enumerate() {
        value = (value << 7) | u32::from(byte & 0x7F);

        if value > max {
            return Err(DecodeErrorKind::ArcOutOfRange { value });
        }

        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }

    Err(DecodeErrorKind::TruncatedSubidentifier)
}
