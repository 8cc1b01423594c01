//! src/crypto/hmac.rs
//! HMAC-SHA256 frame tag: recompute and verify
//!
//! The tag message is the hex text of `ciphertext || salt_digest || iv`, in
//! that order. Peers hash the text, not the bytes it encodes.

use crate::aliases::HmacSha256;
use crate::codec::bytes_to_hex;
use crate::crypto::compare::constant_time_eq;
use crate::crypto::digest::SaltDigest;
use crate::error::PeppercryptError;
use crate::frame::EncryptedFrame;
use hmac::Mac;

#[inline]
fn keyed_mac(key: &[u8]) -> Result<HmacSha256, PeppercryptError> {
    <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|e| PeppercryptError::Cipher(format!("HMAC key rejected: {e}")))
}

/// HMAC-SHA256 of `data` under `key`, as 64 lowercase hex characters.
pub fn hmac256_hex(key: &[u8], data: &[u8]) -> Result<String, PeppercryptError> {
    let mut mac = keyed_mac(key)?;
    mac.update(data);
    Ok(bytes_to_hex(&mac.finalize().into_bytes()))
}

/// Recompute the tag a peer would have written for `frame`.
pub fn expected_tag(
    hmac_key: &[u8],
    frame: &EncryptedFrame<'_>,
    salt_digest: &SaltDigest,
) -> Result<String, PeppercryptError> {
    let mut mac = keyed_mac(hmac_key)?;
    mac.update(frame.ciphertext().as_bytes());
    mac.update(salt_digest.as_bytes());
    mac.update(frame.iv().as_bytes());
    Ok(bytes_to_hex(&mac.finalize().into_bytes()))
}

/// Verify the frame's embedded tag against `expected` in constant time.
///
/// # Errors
///
/// [`PeppercryptError::IntegrityCheckFailed`] on any mismatch.
pub fn verify_tag(frame_tag: &str, expected: &str) -> Result<(), PeppercryptError> {
    if constant_time_eq(frame_tag.as_bytes(), expected.as_bytes()) {
        Ok(())
    } else {
        Err(PeppercryptError::IntegrityCheckFailed)
    }
}
