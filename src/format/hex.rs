//! Hexadecimal encoding and decoding utilities.

use std::fmt;

/// Encode bytes as lowercase hex string.
///
/// # Examples
///
/// ```
/// use snmp_oid::format::hex::encode;
///
/// assert_eq!(encode(&[0x06, 0x03, 0x2b, 0x06, 0x01]), "06032b0601");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    Bytes(bytes).to_string()
}

/// Decode a hex string to bytes.
///
/// Whitespace and `:` between byte pairs are ignored, so dumps such as
/// `"06 03 2b 06 01"` and `"06:03:2B:06:01"` are accepted.
///
/// # Examples
///
/// ```
/// use snmp_oid::format::hex::decode;
///
/// assert_eq!(decode("06 03 2B 06 01").unwrap(), vec![0x06, 0x03, 0x2b, 0x06, 0x01]);
/// assert!(decode("xyz").is_err());
/// assert!(decode("abc").is_err()); // odd length
/// ```
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();

    if !digits.len().is_multiple_of(2) {
        return Err(DecodeError::OddLength);
    }

    digits
        .chunks_exact(2)
        .map(|pair| {
            // `u8::from_str_radix` would accept a '+' sign
            let nibble = |b: u8| char::from(b).to_digit(16).map(|d| d as u8);
            match (nibble(pair[0]), nibble(pair[1])) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(DecodeError::InvalidChar),
            }
        })
        .collect()
}

/// Error type for hex decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input has odd length (must be pairs of hex digits)
    #[error("odd number of hex digits")]
    OddLength,
    /// Invalid hexadecimal character
    #[error("invalid hex character")]
    InvalidChar,
}

/// Lazy hex formatter - only formats when actually displayed.
///
/// This avoids allocation when logging at disabled levels.
pub struct Bytes<'a>(pub &'a [u8]);

impl fmt::Debug for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
