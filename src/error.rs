//! Error types for snmp-oid.
//!
//! This module provides:
//!
//! - [`Error`] - The main error type for parsing, encoding and decoding
//! - [`OidErrorKind`] - Why a dotted string was rejected
//! - [`EncodeErrorKind`] - Why an OID could not be encoded
//! - [`DecodeErrorKind`] - Why a BER payload was rejected
//!
//! All error enums are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//! Matches outside this crate need a wildcard arm:
//!
//! ```compile_fail
//! use snmp_oid::OidErrorKind;
//!
//! fn describe(kind: OidErrorKind) -> &'static str {
//!     match kind {
//!         OidErrorKind::EmptyArc { .. } => "empty",
//!         OidErrorKind::InvalidArc { .. } => "not a number",
//!         OidErrorKind::ArcOutOfRange { .. } => "too large",
//!         OidErrorKind::TooManyArcs { .. } => "too long",
//!     }
//! }
//! ```
//!
//! # Error Handling Patterns
//!
//! ```
//! use snmp_oid::{Error, Oid, OidErrorKind};
//!
//! match Oid::parse("1.3.6.1.4.1.99999") {
//!     Err(Error::InvalidOid { kind: OidErrorKind::ArcOutOfRange { position }, .. }) => {
//!         assert_eq!(position, 6);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! ## Byte Counts on Decode Failure
//!
//! Framed protocols need to know how far the source advanced even when
//! decoding fails. Every decode-side error reports it:
//!
//! ```
//! use snmp_oid::Codec;
//!
//! let mut source: &[u8] = &[0x2B, 0x06];
//! let err = Codec::default().decode(4, &mut source).unwrap_err();
//! assert_eq!(err.consumed(), Some(2));
//! ```

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// OID text parsing error kinds.
///
/// `position` is the zero-based index of the offending token after the
/// leading and trailing dots have been trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OidErrorKind {
    /// Token between two dots (or the whole input) is empty.
    EmptyArc { position: usize },
    /// Token contains something other than ASCII digits.
    InvalidArc { position: usize },
    /// Token value does not fit in 16 bits.
    ArcOutOfRange { position: usize },
    /// OID has too many arcs (exceeds the configured maximum).
    TooManyArcs { count: usize, max: usize },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyArc { position } => write!(f, "empty arc at position {}", position),
            Self::InvalidArc { position } => {
                write!(f, "arc at position {} is not a decimal number", position)
            }
            Self::ArcOutOfRange { position } => write!(
                f,
                "arc at position {} exceeds maximum {}",
                position,
                u16::MAX
            ),
            Self::TooManyArcs { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
        }
    }
}

/// BER encode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeErrorKind {
    /// Fewer than the two arcs the root merge needs.
    TooFewArcs { count: usize },
    /// Root is not `1.3` (SNMP root policy).
    UnsupportedRoot { first: u16, second: u16 },
    /// Root violates X.690 Section 8.19.4 (X.690 root policy).
    InvalidRoot { first: u16, second: u16 },
}

impl std::fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewArcs { count } => {
                write!(f, "OID must have at least 2 arcs, got {}", count)
            }
            Self::UnsupportedRoot { first, second } => {
                write!(f, "OID root .{}.{} is not .1.3", first, second)
            }
            Self::InvalidRoot { first, second } => {
                write!(f, "OID root .{}.{} violates X.690 arc limits", first, second)
            }
        }
    }
}

/// BER decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// Expected different tag.
    UnexpectedTag { expected: u8, actual: u8 },
    /// Data truncated unexpectedly.
    TruncatedData,
    /// Indefinite length not supported.
    IndefiniteLength,
    /// Length field too long.
    LengthTooLong { octets: usize },
    /// Length exceeds maximum.
    LengthExceedsMax { length: usize, max: usize },
    /// Zero-length OBJECT IDENTIFIER content.
    EmptyContent,
    /// Last byte of the payload still has its continuation bit set.
    TruncatedSubidentifier,
    /// Decoded arc does not fit in 16 bits.
    ArcOutOfRange { value: u32 },
    /// OID has too many arcs.
    OidTooLong { count: usize, max: usize },
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedTag { expected, actual } => {
                write!(f, "expected tag 0x{:02X}, got 0x{:02X}", expected, actual)
            }
            Self::TruncatedData => write!(f, "unexpected end of data"),
            Self::IndefiniteLength => write!(f, "indefinite length encoding not supported"),
            Self::LengthTooLong { octets } => {
                write!(f, "length encoding too long ({} octets)", octets)
            }
            Self::LengthExceedsMax { length, max } => {
                write!(f, "length {} exceeds maximum {}", length, max)
            }
            Self::EmptyContent => write!(f, "zero-length OBJECT IDENTIFIER"),
            Self::TruncatedSubidentifier => {
                write!(f, "subidentifier continues past end of content")
            }
            Self::ArcOutOfRange { value } => {
                write!(f, "arc value {} exceeds maximum {}", value, u16::MAX)
            }
            Self::OidTooLong { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
        }
    }
}

/// The main error type for all snmp-oid operations.
///
/// # Common Patterns
///
/// ```
/// use snmp_oid::{Error, DecodeErrorKind};
///
/// fn is_malformed(error: &Error) -> bool {
///     matches!(error,
///         Error::Decode { kind: DecodeErrorKind::TruncatedSubidentifier, .. } |
///         Error::Decode { kind: DecodeErrorKind::ArcOutOfRange { .. }, .. }
///     )
/// }
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid OID text.
    #[error("invalid OID{}: {kind}", input.as_ref().map(|s| format!(" {:?}", s)).unwrap_or_default())]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },

    /// BER encoding error.
    #[error("encode error: {kind}")]
    Encode { kind: EncodeErrorKind },

    /// BER decoding error.
    #[error("decode error at offset {offset}: {kind}")]
    Decode {
        offset: usize,
        consumed: usize,
        kind: DecodeErrorKind,
    },

    /// The byte source failed or ran dry before the declared length.
    #[error("I/O error after {consumed} bytes: {source}")]
    Io {
        consumed: usize,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a decode error.
    pub fn decode(offset: usize, consumed: usize, kind: DecodeErrorKind) -> Self {
        Self::Decode {
            offset,
            consumed,
            kind,
        }
    }

    /// Create an encode error.
    pub fn encode(kind: EncodeErrorKind) -> Self {
        Self::Encode { kind }
    }

    /// Create an I/O error carrying the number of bytes read before the failure.
    pub fn io(consumed: usize, source: std::io::Error) -> Self {
        Self::Io { consumed, source }
    }

    /// Create an invalid OID error from a kind (no input string).
    pub fn invalid_oid(kind: OidErrorKind) -> Self {
        Self::InvalidOid { kind, input: None }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Number of bytes taken from the byte source, for decode-side errors.
    ///
    /// Returns `None` for parse and encode errors, which never touch a source.
    pub fn consumed(&self) -> Option<usize> {
        match self {
            Self::Decode { consumed, .. } => Some(*consumed),
            Self::Io { consumed, .. } => Some(*consumed),
            _ => None,
        }
    }

    /// Shift the consumed count by bytes read before this error's context,
    /// e.g. a TLV header that preceded the payload.
    pub(crate) fn with_prefix(self, prefix: usize) -> Self {
        match self {
            Self::Decode {
                offset,
                consumed,
                kind,
            } => Self::Decode {
                offset,
                consumed: consumed + prefix,
                kind,
            },
            Self::Io { consumed, source } => Self::Io {
                consumed: consumed + prefix,
                source,
            },
            other => other,
        }
    }
}
