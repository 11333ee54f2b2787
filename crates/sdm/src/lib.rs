//! Parameter derivation for NTAG 424 DNA tag programming.
//!
//! Turns a master key, a target URL and a handful of SDM flags into the
//! hex-encoded parameter set the NXP TagWriter app consumes (encrypted
//! file data, access-rights byte, TagTamper status-control key). All
//! routines here are pure and synchronous; configuration loading and
//! transport concerns live with the caller.

mod crypto;
mod encoding;
mod error;
mod key;
mod params;

pub use crypto::{BLOCK_SIZE, decrypt, derive_read_key, encrypt, pad_block, unpad_block};
pub use encoding::{bytes_to_hex, format_uid, hex_to_bytes, is_valid_hex, utf8_to_hex};
pub use error::{Error, Result};
pub use key::{MASTER_KEY_LENGTH, MasterKey};
pub use params::{DEFAULT_ACCESS_RIGHTS, TagConfig, TagWriterParams, derive, normalize_url};
