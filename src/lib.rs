//! # snmp-oid
//!
//! SNMP OBJECT IDENTIFIER codec.
//!
//! Converts between three representations of an OID:
//!
//! - dotted-decimal text (`"1.3.6.1.2.1"`, leading and trailing dots optional)
//! - [`Oid`], an immutable sequence of 16-bit arcs
//! - the BER/X.690 wire encoding (`06 <len> <content>`)
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_oid::{Codec, Oid};
//!
//! fn main() -> Result<(), snmp_oid::Error> {
//!     let oid = Oid::parse("1.3.6.1.2.1")?;
//!     assert_eq!(oid.to_string(), ".1.3.6.1.2.1");
//!
//!     let codec = Codec::default();
//!     let tlv = codec.encode(&oid)?;
//!     assert_eq!(&tlv[..], &[0x06, 0x06, 0x2B, 0x06, 0x01, 0x02, 0x01]);
//!
//!     // Decode the content octets (the caller has already read tag and length)
//!     let mut source = &tlv[2..];
//!     let (decoded, consumed) = codec.decode(6, &mut source)?;
//!     assert_eq!(decoded, oid);
//!     assert_eq!(consumed, 6);
//!     Ok(())
//! }
//! ```
//!
//! ## Literals
//!
//! Use the [`oid!`] macro or [`Oid::from_static`] for constants. Both are
//! meant for values written in source code; [`Oid::from_static`] panics on
//! malformed text and must never see external input.
//!
//! ```rust
//! use snmp_oid::{Oid, oid};
//!
//! const SYS_DESCR: &str = "1.3.6.1.2.1.1.1.0";
//! assert_eq!(Oid::from_static(SYS_DESCR), oid!(1, 3, 6, 1, 2, 1, 1, 1, 0));
//! ```

pub mod ber;
pub mod codec;
pub mod error;
pub mod format;
pub mod oid;

pub(crate) mod util;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use ber::{BerHeader, HeaderEncoder};
pub use codec::{Codec, CodecBuilder, RootPolicy};
pub use error::{DecodeErrorKind, EncodeErrorKind, Error, OidErrorKind, Result};
pub use oid::{MAX_OID_LEN, Oid};
