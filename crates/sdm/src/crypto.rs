//! AES primitives for SDM provisioning.
//!
//! The NXP TagWriter parameter set uses AES-128 in CBC mode with an
//! all-zero IV and the cipher's own padding disabled; block padding is
//! applied to the payload beforehand. These routines reproduce that
//! byte-level behavior exactly.

use aes::cipher::{BlockDecryptMut, BlockEncryptMut, Iv, Key, KeyIvInit, block_padding::NoPadding};
use bytes::{Bytes, BytesMut};
use cipher::block_padding::UnpadError;

use crate::encoding::{bytes_to_hex, hex_to_bytes};
use crate::error::Result;
use crate::key::MasterKey;

/// Cipher block size in bytes; every SDM payload is padded to this.
pub const BLOCK_SIZE: usize = 16;

type Encryptor = cbc::Encryptor<aes::Aes128>;
type Decryptor = cbc::Decryptor<aes::Aes128>;

/// Pad the buffer to a whole number of blocks.
///
/// Appends `n` bytes of value `n` where `n = 16 - (len % 16)`. An
/// already-aligned buffer gains a full block of `0x10` bytes; that is
/// the defined behavior, so the pad length can always be read back from
/// the final byte.
pub fn pad_block(data: &mut BytesMut) {
    let len = data.len();
    let pad = BLOCK_SIZE - len % BLOCK_SIZE;
    data.resize(len + pad, pad as u8);
}

/// Strip the padding applied by [`pad_block`], validating every pad byte.
///
/// # Errors
/// Fails with an unpad error if the final byte is not a plausible pad
/// length or the trailing bytes disagree with it.
pub fn unpad_block(data: &mut BytesMut) -> Result<()> {
    let pad = *data.last().ok_or(UnpadError)? as usize;
    if pad == 0 || pad > BLOCK_SIZE || pad > data.len() {
        return Err(UnpadError.into());
    }
    if !data[data.len() - pad..].iter().all(|b| *b as usize == pad) {
        return Err(UnpadError.into());
    }

    data.truncate(data.len() - pad);
    Ok(())
}

/// Encrypt the buffer under the master key with AES-128-CBC and a zero IV.
///
/// The buffer is padded in place with [`pad_block`] first; the cipher
/// itself runs without padding, so ciphertext length equals the padded
/// plaintext length.
///
/// # Arguments
/// * `key` - The master key to encrypt under.
/// * `data` - The payload; padded in place and overwritten.
///
/// # Returns
/// The ciphertext, a whole number of blocks.
pub fn encrypt(key: &MasterKey, data: &mut BytesMut) -> Bytes {
    pad_block(data);
    let iv = Iv::<Encryptor>::default();

    let len = data.len();
    // SAFETY: pad_block left the buffer a whole number of blocks, so
    // encryption without cipher-side padding cannot fail.
    let ciphertext = Encryptor::new(Key::<Encryptor>::from_slice(key.as_bytes()), &iv)
        .encrypt_padded_mut::<NoPadding>(data, len)
        .unwrap();

    Bytes::copy_from_slice(ciphertext)
}

/// Decrypt a ciphertext produced by [`encrypt`].
///
/// The returned plaintext still carries its block padding; callers undo
/// it with [`unpad_block`].
///
/// # Errors
/// Fails with an unpad error if the ciphertext is not a whole number of
/// blocks.
pub fn decrypt(key: &MasterKey, data: &mut BytesMut) -> Result<Bytes> {
    let iv = Iv::<Decryptor>::default();
    let plaintext = Decryptor::new(Key::<Decryptor>::from_slice(key.as_bytes()), &iv)
        .decrypt_padded_mut::<NoPadding>(data)?;

    Ok(Bytes::copy_from_slice(plaintext))
}

/// Diversify a per-tag read key from the tag UID and SDM read counter.
///
/// This is the tag manager's placeholder scheme: one CBC pass over
/// `UID || counter` under the master key. It is not the AES key
/// diversification the NTAG 424 DNA datasheet specifies (NIST SP
/// 800-108), so the output must not be loaded onto tags that need to
/// interoperate with standard SDM verifiers.
///
/// # Arguments
/// * `key` - The master key.
/// * `uid` - Tag UID as hex.
/// * `read_counter` - SDM read counter as hex.
///
/// # Returns
/// The diversified key material as upper-case hex.
pub fn derive_read_key(key: &MasterKey, uid: &str, read_counter: &str) -> Result<String> {
    let mut data = BytesMut::from(hex_to_bytes(&format!("{uid}{read_counter}"))?.as_slice());
    Ok(bytes_to_hex(&encrypt(key, &mut data)))
}
