//! src/crypto/cipher.rs
//! AES-CBC decryption with PKCS#7 unpadding (AES-128/192/256)

use crate::aliases::{DerivedKey, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use crate::error::PeppercryptError;
use crate::key_size::KeySize;
use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Decrypt `ciphertext` in AES-CBC mode and strip PKCS#7 padding.
///
/// # Errors
///
/// - [`PeppercryptError::InvalidKeyLength`] if `key` does not match `key_size`
/// - [`PeppercryptError::Cipher`] if the ciphertext is empty or not block-aligned
/// - [`PeppercryptError::Padding`] if the final block's padding is invalid
pub fn aes_cbc_decrypt(
    key: &DerivedKey,
    iv: &Iv16,
    ciphertext: &[u8],
    key_size: KeySize,
) -> Result<Vec<u8>, PeppercryptError> {
    let key_bytes = &key.expose_secret()[..];
    if key_bytes.len() != key_size.key_len() {
        return Err(PeppercryptError::InvalidKeyLength {
            expected: key_size.key_len(),
            actual: key_bytes.len(),
        });
    }
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(PeppercryptError::Cipher(format!(
            "ciphertext length {} is not a positive multiple of {AES_BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let iv_bytes = &iv.expose_secret()[..];
    let mut buf = ciphertext.to_vec();
    let plain_len = match key_size {
        KeySize::Aes128 => unpad_in_place(Aes128CbcDec::new_from_slices(key_bytes, iv_bytes), &mut buf)?,
        KeySize::Aes192 => unpad_in_place(Aes192CbcDec::new_from_slices(key_bytes, iv_bytes), &mut buf)?,
        KeySize::Aes256 => unpad_in_place(Aes256CbcDec::new_from_slices(key_bytes, iv_bytes), &mut buf)?,
    };
    buf.truncate(plain_len);
    Ok(buf)
}

#[inline(always)]
fn unpad_in_place<D, E>(decryptor: Result<D, E>, buf: &mut [u8]) -> Result<usize, PeppercryptError>
where
    D: BlockDecryptMut,
    E: std::fmt::Display,
{
    let decryptor =
        decryptor.map_err(|e| PeppercryptError::Cipher(format!("cipher init failed: {e}")))?;
    decryptor
        .decrypt_padded_mut::<Pkcs7>(buf)
        .map(|plain| plain.len())
        .map_err(|_| PeppercryptError::Padding)
}
