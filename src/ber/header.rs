//! TLV header framing.
//!
//! Encoding goes through the [`HeaderEncoder`] trait so a [`Codec`](crate::Codec)
//! can be handed a different framing collaborator (for example one that
//! always emits long-form lengths to match a peer). [`BerHeader`] is the
//! standard X.690 framing and the default.

use std::io::Read;

use bytes::{BufMut, BytesMut};

use super::length::{decode_length, encode_length};
use crate::error::Result;
use crate::util::read_full;

/// Writes the tag and length octets that precede a primitive payload.
pub trait HeaderEncoder {
    /// Append the header for a `len`-byte payload with the given `tag`.
    fn encode_header(&self, tag: u8, len: usize, buf: &mut BytesMut);

    /// Upper bound on the header size, used to pre-size output buffers.
    fn max_header_len(&self) -> usize {
        6
    }
}

/// Standard BER header: one tag byte, then a short-form length below 128
/// or a minimal long-form length otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BerHeader;

impl HeaderEncoder for BerHeader {
    fn encode_header(&self, tag: u8, len: usize, buf: &mut BytesMut) {
        let (octets, n) = encode_length(len);
        buf.put_u8(tag);
        buf.put_slice(&octets[..n]);
    }
}

impl<H: HeaderEncoder + ?Sized> HeaderEncoder for &H {
    fn encode_header(&self, tag: u8, len: usize, buf: &mut BytesMut) {
        (**self).encode_header(tag, len, buf)
    }

    fn max_header_len(&self) -> usize {
        (**self).max_header_len()
    }
}

/// A decoded TLV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Tag byte.
    pub tag: u8,
    /// Declared content length.
    pub length: usize,
    /// Header bytes taken from the source.
    pub consumed: usize,
}

/// Read a single-byte tag and a definite BER length from `reader`.
///
/// Only the header octets are consumed; the content is left in the source.
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> Result<Header> {
    // tag, initial length octet, up to 4 long-form octets
    let mut buf = [0u8; 6];

    read_full(reader, &mut buf[..2])?;
    let tag = buf[0];
    let first = buf[1];

    let extra = match first & 0x7F {
        n @ 1..=4 if first & 0x80 != 0 => n as usize,
        _ => 0,
    };
    read_full(reader, &mut buf[2..2 + extra]).map_err(|e| e.with_prefix(2))?;

    let (length, n) = decode_length(&buf[1..2 + extra], 1)?;

    Ok(Header {
        tag,
        length,
        consumed: 1 + n,
    })
}
