//! Hex and UTF-8 conversions shared by the derivation pipeline.
//!
//! Hex output is always upper-case, the form the NXP TagWriter app
//! displays and expects. Decoding tolerates embedded whitespace so keys
//! can be pasted straight from datasheets or reader dumps.

use crate::error::{Error, Result};

/// Decode a hex string into bytes, stripping any whitespace first.
///
/// # Errors
/// Returns [`Error::InvalidHex`] if the stripped input contains non-hex
/// characters or has an odd number of digits.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&stripped).map_err(|_| Error::InvalidHex)
}

/// Encode bytes as an upper-case hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Encode a string's UTF-8 byte sequence as upper-case hex.
pub fn utf8_to_hex(input: &str) -> String {
    hex::encode_upper(input.as_bytes())
}

/// Whether the input is a non-empty string of hex digits.
pub fn is_valid_hex(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_hexdigit())
}

/// Render a hex UID as colon-separated byte pairs, upper-cased.
///
/// Display formatting only; carries no security role.
pub fn format_uid(uid: &str) -> String {
    let upper = uid.to_uppercase();
    let chars: Vec<char> = upper.chars().collect();
    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let bytes = hex!("00ff04a5b6c7d8e9f01080");
        let encoded = bytes_to_hex(&bytes);
        assert_eq!(encoded, "00FF04A5B6C7D8E9F01080");
        assert_eq!(hex_to_bytes(&encoded).unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_hex_to_bytes_strips_whitespace() {
        assert_eq!(
            hex_to_bytes("40 41 42 43\n4445").unwrap(),
            hex!("404142434445").to_vec()
        );
    }

    #[test]
    fn test_hex_to_bytes_rejects_non_hex() {
        assert!(matches!(hex_to_bytes("zz"), Err(Error::InvalidHex)));
        assert!(matches!(hex_to_bytes("0f0"), Err(Error::InvalidHex)));
    }

    #[test]
    fn test_utf8_to_hex() {
        assert_eq!(utf8_to_hex("https://a"), "68747470733A2F2F61");
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("0123456789abcdefABCDEF"));
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("0F 0A"));
        assert!(!is_valid_hex("0x0F"));
    }

    #[test]
    fn test_format_uid() {
        assert_eq!(format_uid("04a5b6c7d8e9f0"), "04:A5:B6:C7:D8:E9:F0");
        assert_eq!(format_uid("04a5b"), "04:A5:B");
        assert_eq!(format_uid(""), "");
    }
}
