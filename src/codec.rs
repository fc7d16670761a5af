//! OBJECT IDENTIFIER encoder and decoder.
//!
//! [`Codec`] turns an [`Oid`] into a complete BER TLV and reads one back from
//! a byte source. Behaviour is configured through [`CodecBuilder`]:
//!
//! - [`RootPolicy`]: which first-two-arc combinations may be encoded
//! - `max_arcs`: optional decode limit for untrusted payloads (unbounded by default)
//! - the [`HeaderEncoder`] used to frame the payload
//!
//! # Wire Format
//!
//! ```text
//! [0x06][length][lead subidentifier][base-128 subidentifier]...
//! ```
//!
//! The lead subidentifier merges the first two arcs (X.690 Section 8.19.4).
//! Under the default [`RootPolicy::Snmp`] it is always `0x2B` (`.1.3`).
//!
//! # Examples
//!
//! ```
//! use snmp_oid::{Codec, Oid};
//!
//! let codec = Codec::default();
//! let oid = Oid::parse("1.3.6.1.2.1").unwrap();
//!
//! let tlv = codec.encode(&oid).unwrap();
//! assert_eq!(&tlv[..], &[0x06, 0x06, 0x2B, 0x06, 0x01, 0x02, 0x01]);
//!
//! let mut source = &tlv[..];
//! let (decoded, consumed) = codec.read_tlv(&mut source).unwrap();
//! assert_eq!(decoded, oid);
//! assert_eq!(consumed, 8);
//! ```

use std::io::Read;

use bytes::{Bytes, BytesMut};
use smallvec::SmallVec;
use tokio::io::AsyncRead;

use crate::ber::base128::{decode_subidentifier, encode_subidentifier};
use crate::ber::header::{BerHeader, HeaderEncoder, read_header};
use crate::ber::length::MAX_LENGTH;
use crate::ber::tag;
use crate::error::{DecodeErrorKind, EncodeErrorKind, Error, Result};
use crate::format::hex;
use crate::oid::Oid;
use crate::util::{read_full, read_full_async};

/// Lead subidentifier for the `.1.3` (iso.org) root: `1 * 40 + 3`.
pub const SNMP_ROOT_SUBIDENTIFIER: u8 = 0x2B;

/// Largest lead subidentifier that still splits into 16-bit arcs (`2.65535`).
const MAX_LEAD_SUBIDENTIFIER: u32 = 80 + u16::MAX as u32;

/// Which roots the encoder accepts.
///
/// Decoding is not affected: any lead subidentifier is split per X.690.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootPolicy {
    /// Only `.1.3`, emitted as the fixed lead byte `0x2B`.
    ///
    /// An OID is rejected when either of its first two arcs differs from
    /// `1` and `3` respectively.
    #[default]
    Snmp,
    /// Any root allowed by X.690 Section 8.19.4: first arc 0, 1 or 2, and
    /// second arc at most 39 unless the first arc is 2. The lead
    /// subidentifier is `first * 40 + second`, multi-byte when it exceeds 127.
    X690,
}

impl RootPolicy {
    /// Check the first two arcs and compute the lead subidentifier.
    pub fn lead_subidentifier(
        self,
        first: u16,
        second: u16,
    ) -> std::result::Result<u32, EncodeErrorKind> {
        match self {
            Self::Snmp => {
                if first != 1 || second != 3 {
                    return Err(EncodeErrorKind::UnsupportedRoot { first, second });
                }
                Ok(u32::from(SNMP_ROOT_SUBIDENTIFIER))
            }
            Self::X690 => {
                if first > 2 || (first < 2 && second > 39) {
                    return Err(EncodeErrorKind::InvalidRoot { first, second });
                }
                Ok(u32::from(first) * 40 + u32::from(second))
            }
        }
    }
}

/// Split a lead subidentifier into the first two arcs (X.690 Section 8.19.4).
///
/// For a single lead byte below 120 this is `(byte / 40, byte % 40)`.
fn split_lead(lead: u32) -> (u16, u16) {
    // lead <= MAX_LEAD_SUBIDENTIFIER, so every remainder fits in 16 bits
    match lead {
        0..40 => (0, lead as u16),
        40..80 => (1, (lead - 40) as u16),
        _ => (2, (lead - 80) as u16),
    }
}

/// OBJECT IDENTIFIER encoder/decoder.
///
/// Cheap to clone and holds no state between calls; one instance may be
/// shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec<H = BerHeader> {
    root: RootPolicy,
    max_arcs: Option<usize>,
    header: H,
}

impl Default for Codec {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Codec {
    /// Create a builder with the default configuration.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }
}

impl<H: HeaderEncoder> Codec<H> {
    /// The configured root policy.
    pub fn root_policy(&self) -> RootPolicy {
        self.root
    }

    /// The configured decode arc limit, if any.
    pub fn max_arcs(&self) -> Option<usize> {
        self.max_arcs
    }

    /// Encode an OID as a complete TLV.
    ///
    /// # Errors
    ///
    /// - [`EncodeErrorKind::TooFewArcs`] if the OID has fewer than 2 arcs
    /// - [`EncodeErrorKind::UnsupportedRoot`] / [`EncodeErrorKind::InvalidRoot`]
    ///   if the first two arcs are rejected by the [`RootPolicy`]
    ///
    /// No bytes are produced on failure.
    pub fn encode(&self, oid: &Oid) -> Result<Bytes> {
        let arcs = oid.arcs();

        let (first, second) = match arcs {
            [first, second, ..] => (*first, *second),
            _ => {
                tracing::debug!(target: "snmp_oid::ber", { snmp.oid = %oid, count = arcs.len() }, "OID too short to encode");
                return Err(Error::encode(EncodeErrorKind::TooFewArcs { count: arcs.len() }));
            }
        };

        let lead = self.root.lead_subidentifier(first, second).map_err(|kind| {
            tracing::debug!(target: "snmp_oid::ber", { snmp.oid = %oid, kind = %kind }, "OID root rejected");
            Error::encode(kind)
        })?;

        let mut payload: SmallVec<[u8; 64]> = SmallVec::new();
        let (groups, n) = encode_subidentifier(lead);
        payload.extend_from_slice(&groups[..n]);

        for &arc in &arcs[2..] {
            let (groups, n) = encode_subidentifier(u32::from(arc));
            payload.extend_from_slice(&groups[..n]);
        }

        let mut buf = BytesMut::with_capacity(self.header.max_header_len() + payload.len());
        self.header
            .encode_header(tag::universal::OBJECT_IDENTIFIER, payload.len(), &mut buf);
        buf.extend_from_slice(&payload);

        tracing::trace!(target: "snmp_oid::ber", { snmp.oid = %oid, snmp.bytes = %hex::Bytes(&buf[..]) }, "encoded OID");

        Ok(buf.freeze())
    }

    /// Decode `length` content octets read from `reader`.
    ///
    /// Returns the OID and the number of bytes consumed (always `length`
    /// on success). The reader may return short reads; it is polled until
    /// `length` bytes have arrived.
    ///
    /// The lead subidentifier is split per X.690, so lead bytes `0x78..=0x7F`
    /// decode as `2.(x-80)` rather than `byte / 40, byte % 40`.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the source ends early or fails; `consumed` holds
    ///   the bytes read so far
    /// - [`Error::Decode`] for malformed content, with `offset` relative to
    ///   the start of the content
    pub fn decode<R: Read + ?Sized>(&self, length: usize, reader: &mut R) -> Result<(Oid, usize)> {
        let mut buf = payload_buffer(length)?;
        read_full(reader, &mut buf)?;
        Ok((self.decode_payload(&buf)?, length))
    }

    /// Async version of [`decode()`](Self::decode) over a tokio byte source.
    pub async fn decode_async<R: AsyncRead + Unpin + ?Sized>(
        &self,
        length: usize,
        reader: &mut R,
    ) -> Result<(Oid, usize)> {
        let mut buf = payload_buffer(length)?;
        read_full_async(reader, &mut buf).await?;
        Ok((self.decode_payload(&buf)?, length))
    }

    /// Read a complete OBJECT IDENTIFIER TLV from `reader`.
    ///
    /// The returned count includes the header octets. Decode errors keep a
    /// content-relative `offset` but report `consumed` from the start of the TLV.
    pub fn read_tlv<R: Read + ?Sized>(&self, reader: &mut R) -> Result<(Oid, usize)> {
        let header = read_header(reader)?;

        if header.tag != tag::universal::OBJECT_IDENTIFIER {
            let kind = DecodeErrorKind::UnexpectedTag {
                expected: tag::universal::OBJECT_IDENTIFIER,
                actual: header.tag,
            };
            tracing::debug!(target: "snmp_oid::ber", { snmp.offset = 0, kind = %kind }, "unexpected tag");
            return Err(Error::decode(0, header.consumed, kind));
        }

        let (oid, n) = self
            .decode(header.length, reader)
            .map_err(|e| e.with_prefix(header.consumed))?;

        Ok((oid, header.consumed + n))
    }

    /// Decode content octets that are already in memory.
    pub fn decode_payload(&self, data: &[u8]) -> Result<Oid> {
        let fail = |offset: usize, kind: DecodeErrorKind| {
            tracing::debug!(target: "snmp_oid::ber", { snmp.offset = offset, snmp.bytes = %hex::Bytes(data), kind = %kind }, "malformed OID content");
            Error::decode(offset, data.len(), kind)
        };

        if data.is_empty() {
            return Err(fail(0, DecodeErrorKind::EmptyContent));
        }

        let (lead, mut i) =
            decode_subidentifier(data, MAX_LEAD_SUBIDENTIFIER).map_err(|kind| fail(0, kind))?;

        let (first, second) = split_lead(lead);
        let mut arcs: SmallVec<[u16; 16]> = SmallVec::new();
        arcs.push(first);
        arcs.push(second);

        while i < data.len() {
            let (arc, consumed) =
                decode_subidentifier(&data[i..], u32::from(u16::MAX)).map_err(|kind| fail(i, kind))?;
            // bounded by u16::MAX above
            arcs.push(arc as u16);
            i += consumed;

            if let Some(max) = self.max_arcs
                && arcs.len() > max
            {
                return Err(fail(
                    i,
                    DecodeErrorKind::OidTooLong {
                        count: arcs.len(),
                        max,
                    },
                ));
            }
        }

        let oid = Oid::from_arcs(arcs);
        tracing::trace!(target: "snmp_oid::ber", { snmp.oid = %oid, length = data.len() }, "decoded OID");
        Ok(oid)
    }
}

/// Validate a declared content length and allocate its buffer.
fn payload_buffer(length: usize) -> Result<BytesMut> {
    if length == 0 {
        tracing::debug!(target: "snmp_oid::ber", { kind = %DecodeErrorKind::EmptyContent }, "zero-length OID");
        return Err(Error::decode(0, 0, DecodeErrorKind::EmptyContent));
    }
    if length > MAX_LENGTH {
        let kind = DecodeErrorKind::LengthExceedsMax {
            length,
            max: MAX_LENGTH,
        };
        tracing::debug!(target: "snmp_oid::ber", { kind = %kind }, "declared OID length too large");
        return Err(Error::decode(0, 0, kind));
    }
    Ok(BytesMut::zeroed(length))
}

/// Builder for [`Codec`].
///
/// # Example
///
/// ```
/// use snmp_oid::{Codec, Oid, RootPolicy};
///
/// let codec = Codec::builder()
///     .root_policy(RootPolicy::X690)
///     .max_arcs(64)
///     .build();
///
/// let tlv = codec.encode(&Oid::parse("2.999.3").unwrap()).unwrap();
/// assert_eq!(&tlv[..], &[0x06, 0x03, 0x88, 0x37, 0x03]);
/// ```
#[derive(Debug, Clone)]
pub struct CodecBuilder<H = BerHeader> {
    root: RootPolicy,
    max_arcs: Option<usize>,
    header: H,
}

impl CodecBuilder {
    /// Create a builder: SNMP root policy, no decode arc limit, [`BerHeader`] framing.
    pub fn new() -> Self {
        Self {
            root: RootPolicy::default(),
            max_arcs: None,
            header: BerHeader,
        }
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HeaderEncoder> CodecBuilder<H> {
    /// Set the root policy (default: [`RootPolicy::Snmp`]).
    pub fn root_policy(mut self, root: RootPolicy) -> Self {
        self.root = root;
        self
    }

    /// Limit the number of arcs accepted when decoding (default: unlimited).
    ///
    /// [`MAX_OID_LEN`](crate::MAX_OID_LEN) is the RFC 2578 ceiling for SNMP
    /// peers. The encoder does not apply this limit, so a codec with a limit
    /// may refuse bytes it produced itself. Values below 2 are raised to 2,
    /// since every decoded OID has at least the two root arcs.
    pub fn max_arcs(mut self, max_arcs: usize) -> Self {
        self.max_arcs = Some(max_arcs.max(2));
        self
    }

    /// Replace the header framing collaborator.
    pub fn header<H2: HeaderEncoder>(self, header: H2) -> CodecBuilder<H2> {
        CodecBuilder {
            root: self.root,
            max_arcs: self.max_arcs,
            header,
        }
    }

    /// Build the codec.
    pub fn build(self) -> Codec<H> {
        Codec {
            root: self.root,
            max_arcs: self.max_arcs,
            header: self.header,
        }
    }
}
