//! src/decryptor/decrypt.rs
//! Frame decryption pipeline: verify first, then decrypt

use crate::aliases::{DerivedKey, SecretString};
use crate::codec::{normalize, Encoding};
use crate::consts::PBKDF2_ITERATIONS;
use crate::crypto::cipher::aes_cbc_decrypt;
use crate::crypto::digest::SaltDigest;
use crate::crypto::hmac::{expected_tag, verify_tag};
use crate::crypto::kdf::direct::decode_direct_key;
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_sha1_key;
use crate::error::PeppercryptError;
use crate::frame::EncryptedFrame;
use crate::key_size::KeySize;
use tracing::debug;
#[cfg(feature = "diagnostics")]
use tracing::trace;

/// Where the AES key for a frame comes from.
#[derive(Clone, Copy)]
pub enum KeySource<'a> {
    /// Shared secret run through PBKDF2-HMAC-SHA1 with the frame's salt digest.
    Secret(&'a SecretString),
    /// Key precomputed by the peer, as hex.
    Precomputed(&'a SecretString),
}

impl KeySource<'_> {
    fn resolve(
        self,
        salt_digest: &SaltDigest,
        key_size: KeySize,
    ) -> Result<DerivedKey, PeppercryptError> {
        match self {
            KeySource::Secret(secret) => {
                derive_pbkdf2_sha1_key(secret, salt_digest, PBKDF2_ITERATIONS, key_size)
            }
            KeySource::Precomputed(hex_key) => {
                decode_direct_key(&hex_key.expose_secret()[..], key_size)
            }
        }
    }
}

/// Decrypt one frame, reporting exactly which step failed.
///
/// Order of operations:
/// 1. normalise `value` to hex
/// 2. split the frame (rejects short input before any crypto)
/// 3. compute the salt digest once
/// 4. recompute and verify the tag; stop on mismatch
/// 5. derive or decode the key
/// 6. AES-CBC decrypt, then UTF-8 decode
///
/// Nothing is decrypted unless the tag verifies.
///
/// # Errors
///
/// Any [`PeppercryptError`]. Callers making a production decision on the
/// outcome should use [`collapse`] (or the `Option` entry points) instead.
pub fn decrypt_frame(
    value: &str,
    key_source: KeySource<'_>,
    pepper: &SecretString,
    hmac_key: &SecretString,
    encoding: Encoding,
    key_size: KeySize,
) -> Result<String, PeppercryptError> {
    let hex_frame = normalize(value, encoding)?;
    let frame = EncryptedFrame::parse(&hex_frame)?;

    let salt_digest = SaltDigest::compute(frame.salt(), &pepper.expose_secret()[..]);
    let tag = expected_tag(hmac_key.expose_secret().as_bytes(), &frame, &salt_digest)?;

    #[cfg(feature = "diagnostics")]
    trace!(
        %encoding,
        %key_size,
        frame_tag = frame.tag(),
        salt = frame.salt(),
        iv = frame.iv(),
        ciphertext = frame.ciphertext(),
        salt_digest = salt_digest.as_str(),
        expected_tag = tag.as_str(),
        "frame sections"
    );

    verify_tag(frame.tag(), &tag)?;

    let key = key_source.resolve(&salt_digest, key_size)?;

    #[cfg(feature = "diagnostics")]
    trace!(
        derived_key = %crate::codec::bytes_to_hex(&key.expose_secret()[..]),
        "key ready"
    );

    let iv = frame.iv_bytes()?;
    let ciphertext = frame.ciphertext_bytes()?;
    let plaintext = aes_cbc_decrypt(&key, &iv, &ciphertext, key_size)?;

    String::from_utf8(plaintext).map_err(|_| PeppercryptError::Decode)
}

/// Collapse a detailed result into "plaintext or nothing".
///
/// The error kind is dropped on purpose and never logged.
#[inline]
pub fn collapse(result: Result<String, PeppercryptError>) -> Option<String> {
    match result {
        Ok(plaintext) => Some(plaintext),
        Err(_) => {
            debug!("decryption failed");
            None
        }
    }
}

/// Decrypt `value` with a key derived from `secret`, reporting the failing step.
///
/// # Errors
///
/// [`PeppercryptError::UnsupportedKeySize`] if `key_bits` is not 128, 192 or
/// 256, otherwise any error of [`decrypt_frame`].
pub fn try_decrypt(
    value: &str,
    secret: &str,
    pepper: &str,
    hmac_key: &str,
    encoding: Encoding,
    key_bits: u32,
) -> Result<String, PeppercryptError> {
    let key_size = KeySize::try_from(key_bits)?;
    let secret = SecretString::new(secret.to_owned());
    decrypt_frame(
        value,
        KeySource::Secret(&secret),
        &SecretString::new(pepper.to_owned()),
        &SecretString::new(hmac_key.to_owned()),
        encoding,
        key_size,
    )
}

/// Decrypt `value` with a precomputed hex key, reporting the failing step.
///
/// # Errors
///
/// As [`try_decrypt`], plus [`PeppercryptError::InvalidKeyLength`] if
/// `hex_key` does not decode to `key_bits / 8` bytes.
pub fn try_decrypt_with_key(
    value: &str,
    hex_key: &str,
    pepper: &str,
    hmac_key: &str,
    encoding: Encoding,
    key_bits: u32,
) -> Result<String, PeppercryptError> {
    let key_size = KeySize::try_from(key_bits)?;
    let hex_key = SecretString::new(hex_key.to_owned());
    decrypt_frame(
        value,
        KeySource::Precomputed(&hex_key),
        &SecretString::new(pepper.to_owned()),
        &SecretString::new(hmac_key.to_owned()),
        encoding,
        key_size,
    )
}

/// Decrypt `value` with a key derived from `secret`.
///
/// Returns `None` on any failure: bad key, tampered frame and malformed input
/// are indistinguishable to the caller.
///
/// # Example
///
/// ```
/// use peppercrypt_rs::{decrypt, Encoding};
///
/// // Too short to be a frame: no plaintext, no reason given.
/// assert_eq!(decrypt("00", "key", "pepper", "hmacKey", Encoding::Hex, 128), None);
/// ```
#[must_use]
pub fn decrypt(
    value: &str,
    secret: &str,
    pepper: &str,
    hmac_key: &str,
    encoding: Encoding,
    key_bits: u32,
) -> Option<String> {
    collapse(try_decrypt(value, secret, pepper, hmac_key, encoding, key_bits))
}

/// Decrypt `value` with a precomputed hex key. `None` on any failure.
#[must_use]
pub fn decrypt_with_key(
    value: &str,
    hex_key: &str,
    pepper: &str,
    hmac_key: &str,
    encoding: Encoding,
    key_bits: u32,
) -> Option<String> {
    collapse(try_decrypt_with_key(
        value, hex_key, pepper, hmac_key, encoding, key_bits,
    ))
}
