//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u16; 16]>` to avoid heap allocation for common OIDs.
//! Arcs are limited to 16 bits; wider subidentifiers are rejected both when
//! parsing text and when decoding BER.

use crate::codec::Codec;
use crate::error::{Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Maximum number of arcs (subidentifiers) allowed in an OID.
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a value".
///
/// This is the default decode limit of [`Codec`], and can be checked via
/// [`Oid::validate_length()`] for OIDs constructed from other sources.
pub const MAX_OID_LEN: usize = 128;

/// Object Identifier.
///
/// Stored as a sequence of 16-bit arc values. Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
///
/// An `Oid` is never mutated after construction; [`child()`](Self::child)
/// and [`parent()`](Self::parent) return new values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u16; 16]>,
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_oid::Oid;
    ///
    /// let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    ///
    /// let oid = Oid::new(0..5);
    /// assert_eq!(oid.arcs(), &[0, 1, 2, 3, 4]);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u16>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u16]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    pub(crate) fn from_arcs(arcs: SmallVec<[u16; 16]>) -> Self {
        Self { arcs }
    }

    /// Parse an OID from dotted string notation (e.g., `"1.3.6.1.2.1"`).
    ///
    /// Leading and trailing dots are ignored, so `".1.3.6.1"` and
    /// `"1.3.6.1."` parse to the same OID. Every remaining dot-separated
    /// token must be a non-empty run of ASCII digits with a value of at
    /// most 65535. The first bad token fails the whole call.
    ///
    /// An input that is empty after trimming (`""`, `"."`, `"..."`) is an
    /// [`EmptyArc`](OidErrorKind::EmptyArc) error, not an empty OID.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_oid::{Error, Oid, OidErrorKind};
    ///
    /// let oid = Oid::parse(".1.3.6.1.2.1").unwrap();
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    ///
    /// assert!(matches!(
    ///     Oid::parse("1.3..6"),
    ///     Err(Error::InvalidOid { kind: OidErrorKind::EmptyArc { position: 2 }, .. })
    /// ));
    /// assert!(Oid::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut arcs = SmallVec::new();

        for (position, part) in s.trim_matches('.').split('.').enumerate() {
            let arc = parse_arc(part, position).map_err(|kind| {
                tracing::debug!(target: "snmp_oid::oid", { snmp.input = s, kind = %kind }, "rejected OID text");
                Error::invalid_oid_with_input(kind, s)
            })?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Parse a compile-time OID literal, panicking if it is malformed.
    ///
    /// This is a shorthand for well-known constants such as
    /// `Oid::from_static("1.3.6.1.2.1.1.1.0")`. It only accepts `&'static str`
    /// so that runtime input has to go through the fallible [`parse()`](Self::parse).
    /// Prefer the [`oid!`](crate::oid!) macro when the arcs are known as numbers.
    ///
    /// # Panics
    ///
    /// Panics on any input [`parse()`](Self::parse) rejects. A malformed
    /// literal is a programming error, not a recoverable condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_oid::Oid;
    ///
    /// let sys_descr = Oid::from_static(".1.3.6.1.2.1.1.1.0");
    /// assert_eq!(sys_descr.len(), 9);
    /// ```
    #[track_caller]
    pub fn from_static(s: &'static str) -> Self {
        match Self::parse(s) {
            Ok(oid) => oid,
            Err(e) => panic!("invalid OID literal {:?}: {}", s, e),
        }
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u16] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// An OID always starts with itself, and any OID starts with an empty OID.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_oid::oid;
    ///
    /// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
    /// assert!(sys_descr.starts_with(&oid!(1, 3, 6, 1, 2, 1, 1)));
    /// assert!(!sys_descr.starts_with(&oid!(1, 3, 6, 1, 2, 1, 2)));
    /// ```
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Get the parent OID (all arcs except the last).
    ///
    /// Returns `None` if the OID is empty.
    pub fn parent(&self) -> Option<Oid> {
        if self.arcs.is_empty() {
            None
        } else {
            Some(Oid {
                arcs: SmallVec::from_slice(&self.arcs[..self.arcs.len() - 1]),
            })
        }
    }

    /// Create a child OID by appending an arc.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_oid::Oid;
    ///
    /// let system = Oid::from_static("1.3.6.1.2.1.1");
    /// let sys_descr_instance = system.child(1).child(0);
    /// assert_eq!(sys_descr_instance.to_string(), ".1.3.6.1.2.1.1.1.0");
    /// ```
    pub fn child(&self, arc: u16) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }

    /// Validate that the OID doesn't exceed [`MAX_OID_LEN`] arcs.
    pub fn validate_length(&self) -> Result<()> {
        if self.arcs.len() > MAX_OID_LEN {
            return Err(Error::invalid_oid(OidErrorKind::TooManyArcs {
                count: self.arcs.len(),
                max: MAX_OID_LEN,
            }));
        }
        Ok(())
    }

    /// Encode to a complete BER TLV (`06 <len> <content>`) with the default [`Codec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_oid::Oid;
    ///
    /// let oid = Oid::parse("1.3.6.1.2.1").unwrap();
    /// assert_eq!(&oid.to_ber().unwrap()[..], &[0x06, 0x06, 0x2B, 0x06, 0x01, 0x02, 0x01]);
    /// ```
    pub fn to_ber(&self) -> Result<bytes::Bytes> {
        Codec::default().encode(self)
    }

    /// Decode OBJECT IDENTIFIER content octets (no tag or length) with the default [`Codec`].
    pub fn from_ber(data: &[u8]) -> Result<Self> {
        let mut source = data;
        Codec::default()
            .decode(data.len(), &mut source)
            .map(|(oid, _)| oid)
    }
}

/// Parse a single dotted-decimal token.
fn parse_arc(part: &str, position: usize) -> std::result::Result<u16, OidErrorKind> {
    if part.is_empty() {
        return Err(OidErrorKind::EmptyArc { position });
    }
    // `u16::from_str` would accept a leading '+'
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OidErrorKind::InvalidArc { position });
    }
    part.parse()
        .map_err(|_| OidErrorKind::ArcOutOfRange { position })
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

/// Canonical dotted form with a leading dot (`.1.3.6.1`); empty OIDs render as `""`.
impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arc in &self.arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u16]> for Oid {
    fn from(arcs: &[u16]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u16; N]> for Oid {
    fn from(arcs: [u16; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from arc literals.
///
/// # Examples
///
/// ```
/// use snmp_oid::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), ".1.3.6.1.2.1.1.1.0");
///
/// // Trailing commas are allowed
/// let sys_name = oid!(1, 3, 6, 1, 2, 1, 1, 5, 0,);
/// assert_eq!(sys_name.len(), 9);
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
