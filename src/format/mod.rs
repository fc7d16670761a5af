//! Formatting utilities.
//!
//! The [`hex`] module renders wire bytes for logs and the `oidconv` tool.
//!
//! ```
//! use snmp_oid::format::hex;
//!
//! assert_eq!(hex::encode(&[0x06, 0x01, 0x2b]), "06012b");
//! assert_eq!(format!("{}", hex::Bytes(&[0x2b, 0x06])), "2b06");
//! ```

pub mod hex;
