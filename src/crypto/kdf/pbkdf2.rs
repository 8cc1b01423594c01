//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{DerivedKey, HmacSha1, SecretString};
use crate::crypto::digest::SaltDigest;
use crate::error::PeppercryptError;
use crate::key_size::KeySize;

use pbkdf2::pbkdf2;

/// Derive a PBKDF2-HMAC-SHA1 key of `key_size.key_len()` bytes.
///
/// The salt is the salt digest's hex text (40 ASCII bytes), not its raw bytes.
/// Production callers pass [`PBKDF2_ITERATIONS`](crate::consts::PBKDF2_ITERATIONS).
///
/// # Security
/// - Secret is read only through `expose_secret()`
/// - Output is returned in a secure-gate buffer
pub fn derive_pbkdf2_sha1_key(
    secret: &SecretString,
    salt_digest: &SaltDigest,
    iterations: u32,
    key_size: KeySize,
) -> Result<DerivedKey, PeppercryptError> {
    if iterations == 0 {
        return Err(PeppercryptError::Cipher(
            "PBKDF2 iterations must be ≥1".into(),
        ));
    }

    let mut out_key = vec![0u8; key_size.key_len()];
    pbkdf2::<HmacSha1>(
        secret.expose_secret().as_bytes(),
        salt_digest.as_bytes(),
        iterations,
        &mut out_key,
    )
    .map_err(|e| PeppercryptError::Cipher(format!("PBKDF2 failed: {e}")))?;

    Ok(DerivedKey::new(out_key))
}
