//! BER length encoding and decoding.
//!
//! Length encoding follows X.690 Section 8.1.3:
//! - Short form: Single byte, bit 8=0, value 0-127
//! - Long form: Initial byte (bit 8=1, bits 7-1=count), followed by length bytes
//! - Indefinite form (0x80): Rejected (not permitted for primitive encodings)

use crate::error::{DecodeErrorKind, Error, Result};

/// Maximum length we'll accept (to prevent DoS).
///
/// An OBJECT IDENTIFIER of [`MAX_OID_LEN`](crate::oid::MAX_OID_LEN) 16-bit
/// arcs needs a few hundred bytes. 2MB bounds the buffer allocated for a
/// declared length before a single payload byte has been read.
pub const MAX_LENGTH: usize = 0x200000; // 2MB

/// Encode a length value, returning the octets in wire order and their count.
///
/// Uses short form for lengths <= 127, minimal long form otherwise.
pub fn encode_length(len: usize) -> ([u8; 5], usize) {
    let mut buf = [0u8; 5];

    if len <= 127 {
        buf[0] = len as u8;
        return (buf, 1);
    }

    let octets = (usize::BITS - len.leading_zeros()).div_ceil(8) as usize;
    // Lengths above u32::MAX are not representable in 4 octets
    let octets = octets.min(4);

    buf[0] = 0x80 | octets as u8;
    for i in 0..octets {
        buf[1 + i] = (len >> (8 * (octets - 1 - i))) as u8;
    }

    (buf, 1 + octets)
}

/// Decode a length from bytes, returning (length, bytes_consumed).
///
/// `base_offset` is the number of bytes taken from the source before
/// `data`; it is added to the consumed count reported on error.
pub fn decode_length(data: &[u8], base_offset: usize) -> Result<(usize, usize)> {
    let fail = |kind: DecodeErrorKind| {
        tracing::debug!(target: "snmp_oid::ber", { snmp.offset = base_offset, kind = %kind }, "invalid length octets");
        Error::decode(base_offset, base_offset + data.len(), kind)
    };

    let Some(&first) = data.first() else {
        return Err(fail(DecodeErrorKind::TruncatedData));
    };

    if first == 0x80 {
        return Err(fail(DecodeErrorKind::IndefiniteLength));
    }

    if first & 0x80 == 0 {
        // Short form
        return Ok((first as usize, 1));
    }

    let num_octets = (first & 0x7F) as usize;

    if num_octets > 4 {
        return Err(fail(DecodeErrorKind::LengthTooLong { octets: num_octets }));
    }

    if data.len() < 1 + num_octets {
        return Err(fail(DecodeErrorKind::TruncatedData));
    }

    let len = data[1..=num_octets]
        .iter()
        .fold(0usize, |len, &b| (len << 8) | b as usize);

    if len > MAX_LENGTH {
        return Err(fail(DecodeErrorKind::LengthExceedsMax {
            length: len,
            max: MAX_LENGTH,
        }));
    }

    Ok((len, 1 + num_octets))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(len: usize) -> Vec<u8> {
        let (buf, n) = encode_length(len);
        buf[..n].to_vec()
    }

    #[test]
    fn test_short_form() {
        assert_eq!(decode_length(&[0], 0).unwrap(), (0, 1));
        assert_eq!(decode_length(&[127], 0).unwrap(), (127, 1));
        assert_eq!(decode_length(&[6, 0x2B], 0).unwrap(), (6, 1));
    }

    #[test]
    fn test_long_form() {
        assert_eq!(decode_length(&[0x81, 128], 0).unwrap(), (128, 2));
        assert_eq!(decode_length(&[0x81, 255], 0).unwrap(), (255, 2));
        assert_eq!(decode_length(&[0x82, 0x01, 0x00], 0).unwrap(), (256, 3));
    }

    #[test]
    fn test_indefinite_rejected() {
        let err = decode_length(&[0x80], 1).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                kind: DecodeErrorKind::IndefiniteLength,
                consumed: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_too_many_octets_rejected() {
        assert!(matches!(
            decode_length(&[0x85], 0),
            Err(Error::Decode {
                kind: DecodeErrorKind::LengthTooLong { octets: 5 },
                ..
            })
        ));
    }

    #[test]
    fn test_truncated_long_form() {
        assert!(matches!(
            decode_length(&[0x82, 0x01], 0),
            Err(Error::Decode {
                kind: DecodeErrorKind::TruncatedData,
                ..
            })
        ));
        assert!(matches!(
            decode_length(&[], 0),
            Err(Error::Decode {
                kind: DecodeErrorKind::TruncatedData,
                ..
            })
        ));
    }

    #[test]
    fn test_accept_non_minimal_length() {
        // Non-minimal length encodings are valid per X.690 Section 8.1.3.5 Note 2
        assert_eq!(decode_length(&[0x82, 0x00, 0x05], 0).unwrap(), (5, 3));
        assert_eq!(decode_length(&[0x81, 0x01], 0).unwrap(), (1, 2));
    }

    #[test]
    fn test_max_length_enforced() {
        let max = MAX_LENGTH;
        let at_max = [0x83, (max >> 16) as u8, (max >> 8) as u8, max as u8];
        assert_eq!(decode_length(&at_max, 0).unwrap(), (MAX_LENGTH, 4));

        let over = MAX_LENGTH + 1;
        let over_bytes = [0x83, (over >> 16) as u8, (over >> 8) as u8, over as u8];
        assert!(matches!(
            decode_length(&over_bytes, 0),
            Err(Error::Decode {
                kind: DecodeErrorKind::LengthExceedsMax { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_encode_short() {
        assert_eq!(encoded(0), vec![0]);
        assert_eq!(encoded(6), vec![6]);
        assert_eq!(encoded(127), vec![127]);
    }

    #[test]
    fn test_encode_long() {
        assert_eq!(encoded(128), vec![0x81, 0x80]);
        assert_eq!(encoded(255), vec![0x81, 0xFF]);
        assert_eq!(encoded(256), vec![0x82, 0x01, 0x00]);
        assert_eq!(encoded(0x10000), vec![0x83, 0x01, 0x00, 0x00]);
        assert_eq!(encoded(0x01000000), vec![0x84, 0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_decode_agree() {
        for len in [0, 1, 127, 128, 300, 65535, MAX_LENGTH] {
            let bytes = encoded(len);
            assert_eq!(decode_length(&bytes, 0).unwrap(), (len, bytes.len()));
        }
    }
}
