//! Assembly of the NXP TagWriter parameter set.

use bytes::BytesMut;

use crate::crypto;
use crate::encoding::{bytes_to_hex, hex_to_bytes, is_valid_hex, utf8_to_hex};
use crate::error::{Error, Result};
use crate::key::MasterKey;

/// Access-rights byte granting open read access, the TagWriter default.
pub const DEFAULT_ACCESS_RIGHTS: &str = "0F";

/// Per-request options for a derivation.
#[derive(Debug, Clone)]
pub struct TagConfig {
    /// SDM access-rights byte as two hex digits
    pub access_rights: String,
    /// Mirror the TagTamper status into the tag's NDEF message
    pub enable_tag_tamper: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            access_rights: DEFAULT_ACCESS_RIGHTS.to_string(),
            enable_tag_tamper: false,
        }
    }
}

/// The parameter set NXP TagWriter consumes when programming a tag.
///
/// Produced fresh per request and never mutated. The master key rides
/// along so configuration-export flows can render it; anything crossing
/// a trust boundary must strip it first.
#[derive(Debug, Clone)]
pub struct TagWriterParams {
    /// The padded URL under AES-128-CBC with a zero IV, upper-case hex
    pub sdm_enc_file_data: String,
    /// Access-rights byte, passed through from the request
    pub access_rights: String,
    /// Meta-read key slot. Currently the access-rights byte verbatim;
    /// per-tag diversification is deliberately not wired in here (see
    /// [`crate::derive_read_key`]).
    pub sdm_meta_read_key: String,
    /// TagTamper status-control key: `"01"` when tamper mirroring is
    /// enabled, `"00"` otherwise
    pub tt_status_ctl_key: String,
    /// The master key the parameters were derived under
    pub master_key: MasterKey,
}

/// Prefix `https://` onto a URL that carries no scheme.
///
/// No further validation, percent-encoding, or scheme whitelisting
/// happens here; well-formedness is the boundary's concern.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Derive the TagWriter parameter set for a URL under the master key.
///
/// The URL is normalized, hex-encoded from its UTF-8 bytes, padded to
/// the block size and encrypted with AES-128-CBC under a zero IV with
/// the cipher's own padding disabled. The remaining fields are copied
/// or switched from `config`.
///
/// # Errors
/// Fails with [`Error::InvalidHex`] if `config.access_rights` contains
/// non-hex characters. Malformed URLs are not rejected here.
pub fn derive(master_key: &MasterKey, url: &str, config: &TagConfig) -> Result<TagWriterParams> {
    if !is_valid_hex(&config.access_rights) {
        return Err(Error::InvalidHex);
    }

    let url = normalize_url(url);
    let url_hex = utf8_to_hex(&url);
    let mut data = BytesMut::from(hex_to_bytes(&url_hex)?.as_slice());
    let ciphertext = crypto::encrypt(master_key, &mut data);

    Ok(TagWriterParams {
        sdm_enc_file_data: bytes_to_hex(&ciphertext),
        access_rights: config.access_rights.clone(),
        sdm_meta_read_key: config.access_rights.clone(),
        tt_status_ctl_key: if config.enable_tag_tamper { "01" } else { "00" }.to_string(),
        master_key: master_key.clone(),
    })
}
