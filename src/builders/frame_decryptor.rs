//! src/builders/frame_decryptor.rs
//! Reusable decryptor holding the shared pepper and HMAC key

use crate::aliases::SecretString;
use crate::codec::Encoding;
use crate::decryptor::{collapse, decrypt_frame, KeySource};
use crate::error::PeppercryptError;
use crate::key_size::KeySize;

/// Decryptor for frames sharing one pepper and HMAC key.
///
/// Defaults: hex input, AES-256.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`) and holds no mutable state.
/// One instance can serve concurrent calls from many threads.
///
/// # Example
///
/// ```
/// use peppercrypt_rs::{Encoding, FrameDecryptor, KeySize};
///
/// let decryptor = FrameDecryptor::new("pepper", "hmacKey")
///     .with_encoding(Encoding::Base64)
///     .with_key_size(KeySize::Aes128);
///
/// assert_eq!(decryptor.key_size(), KeySize::Aes128);
/// assert_eq!(decryptor.decrypt("AAAA", "key"), None);
/// ```
pub struct FrameDecryptor {
    pepper: SecretString,
    hmac_key: SecretString,
    encoding: Encoding,
    key_size: KeySize,
}

impl FrameDecryptor {
    /// Create a decryptor for the given pepper and HMAC key.
    #[must_use]
    pub fn new(pepper: impl Into<String>, hmac_key: impl Into<String>) -> Self {
        Self {
            pepper: SecretString::new(pepper.into()),
            hmac_key: SecretString::new(hmac_key.into()),
            encoding: Encoding::default(),
            key_size: KeySize::default(),
        }
    }

    /// Set the text encoding of incoming frames.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the AES key size frames were encrypted with.
    #[must_use]
    pub fn with_key_size(mut self, key_size: KeySize) -> Self {
        self.key_size = key_size;
        self
    }

    /// Set the AES key size from a bit count.
    ///
    /// # Errors
    ///
    /// [`PeppercryptError::UnsupportedKeySize`] unless `bits` is 128, 192 or 256.
    pub fn with_key_bits(self, bits: u32) -> Result<Self, PeppercryptError> {
        Ok(self.with_key_size(KeySize::try_from(bits)?))
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub const fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Decrypt with a PBKDF2-derived key, reporting the failing step.
    pub fn try_decrypt(&self, value: &str, secret: &str) -> Result<String, PeppercryptError> {
        let secret = SecretString::new(secret.to_owned());
        self.run(value, KeySource::Secret(&secret))
    }

    /// Decrypt with a precomputed hex key, reporting the failing step.
    pub fn try_decrypt_with_key(
        &self,
        value: &str,
        hex_key: &str,
    ) -> Result<String, PeppercryptError> {
        let hex_key = SecretString::new(hex_key.to_owned());
        self.run(value, KeySource::Precomputed(&hex_key))
    }

    /// Decrypt with a PBKDF2-derived key. `None` on any failure.
    #[must_use]
    pub fn decrypt(&self, value: &str, secret: &str) -> Option<String> {
        collapse(self.try_decrypt(value, secret))
    }

    /// Decrypt with a precomputed hex key. `None` on any failure.
    #[must_use]
    pub fn decrypt_with_key(&self, value: &str, hex_key: &str) -> Option<String> {
        collapse(self.try_decrypt_with_key(value, hex_key))
    }

    #[inline(always)]
    fn run(&self, value: &str, key_source: KeySource<'_>) -> Result<String, PeppercryptError> {
        decrypt_frame(
            value,
            key_source,
            &self.pepper,
            &self.hmac_key,
            self.encoding,
            self.key_size,
        )
    }
}

// Secrets stay out of Debug output.
impl std::fmt::Debug for FrameDecryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameDecryptor")
            .field("encoding", &self.encoding)
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}
