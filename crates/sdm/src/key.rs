use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::encoding::hex_to_bytes;
use crate::error::{Error, Result};

/// Master key length in bytes (AES-128)
pub const MASTER_KEY_LENGTH: usize = 16;

/// The deployment-wide AES-128 master key tags are provisioned under.
///
/// The key is injected into every derivation call rather than read from
/// ambient configuration, so the engine stays independently testable.
/// The backing bytes are wiped on drop and never appear in `Debug`
/// output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey([u8; MASTER_KEY_LENGTH]);

impl MasterKey {
    /// Parse a master key from 32 hex digits, tolerating whitespace.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHex`] for non-hex input and
    /// [`Error::InvalidKeyLength`] if it decodes to anything other than
    /// 16 bytes.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex_to_bytes(input)?;
        if bytes.len() != MASTER_KEY_LENGTH {
            return Err(Error::InvalidKeyLength {
                expected: MASTER_KEY_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut key = [0u8; MASTER_KEY_LENGTH];
        key.copy_from_slice(&bytes);
        Ok(Self(key))
    }

    /// Construct a key from raw bytes.
    pub const fn from_bytes(bytes: [u8; MASTER_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The raw key bytes.
    pub const fn as_bytes(&self) -> &[u8; MASTER_KEY_LENGTH] {
        &self.0
    }

    /// The key as 32 upper-case hex digits.
    ///
    /// This is the representation configuration-export flows embed; do
    /// not let it cross a trust boundary.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Whether this is the all-zero development key.
    pub fn is_default(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for MasterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let key = MasterKey::from_hex("404142434445464748494A4B4C4D4E4F").unwrap();
        assert_eq!(
            key.as_bytes(),
            &[
                0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c,
                0x4d, 0x4e, 0x4f
            ]
        );
        assert_eq!(key.to_hex(), "404142434445464748494A4B4C4D4E4F");
    }

    #[test]
    fn test_from_hex_tolerates_whitespace() {
        let key = MasterKey::from_hex("4041 4243 4445 4647 4849 4A4B 4C4D 4E4F").unwrap();
        assert_eq!(key.to_hex(), "404142434445464748494A4B4C4D4E4F");
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert!(matches!(
            MasterKey::from_hex("404142"),
            Err(Error::InvalidKeyLength {
                expected: 16,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        assert!(matches!(
            MasterKey::from_hex("not-a-key-not-a-key-not-a-key-00"),
            Err(Error::InvalidHex)
        ));
    }

    #[test]
    fn test_is_default() {
        assert!(MasterKey::from_bytes([0u8; 16]).is_default());
        assert!(!MasterKey::from_bytes([1u8; 16]).is_default());
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let key = MasterKey::from_hex("404142434445464748494A4B4C4D4E4F").unwrap();
        let rendered = format!("{key:?}");
        assert_eq!(rendered, "MasterKey(..)");
        assert!(!rendered.contains("40"));
    }
}
