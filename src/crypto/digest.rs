//! src/crypto/digest.rs
//! SHA-1 digests and the salt+pepper digest derived from them

use crate::codec::bytes_to_hex;
use sha1::{Digest, Sha1};

/// SHA-1 of `data` as 40 lowercase hex characters.
#[inline]
#[must_use]
pub fn sha1_hex(data: &[u8]) -> String {
    bytes_to_hex(&Sha1::digest(data))
}

/// `SHA1(salt || pepper)` as lowercase hex.
///
/// Computed once per frame and shared by reference: it is the PBKDF2 salt
/// and the middle component of the tag message. Both uses take the hex text,
/// not the raw digest bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SaltDigest(String);

impl SaltDigest {
    /// Hash the frame's hex salt text concatenated with the pepper.
    #[must_use]
    pub fn compute(salt_hex: &str, pepper: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(salt_hex.as_bytes());
        hasher.update(pepper.as_bytes());
        Self(bytes_to_hex(&hasher.finalize()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

// Keyed material: keep it out of Debug output.
impl std::fmt::Debug for SaltDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SaltDigest([REDACTED])")
    }
}
