//! BER encoding primitives for OBJECT IDENTIFIER values.
//!
//! - [`base128`]: subidentifier encoding (X.690 Section 8.19.2)
//! - [`length`]: definite-form length octets (X.690 Section 8.1.3)
//! - [`header`]: tag and length framing, pluggable via [`HeaderEncoder`]

pub mod base128;
pub mod header;
pub mod length;

pub use header::{BerHeader, Header, HeaderEncoder, read_header};

/// BER tag constants.
pub mod tag {
    /// Universal class tags.
    pub mod universal {
        pub const OBJECT_IDENTIFIER: u8 = 0x06;
    }
}
