//! # Error Types
//!
//! Every fallible operation in this crate returns
//! [`Result<T, PeppercryptError>`](PeppercryptError).
//!
//! The variants are only visible through the `try_*` entry points. The
//! production entry points collapse all of them into `None` so a caller (or an
//! attacker observing the caller) cannot tell a bad key from tampered data.

use thiserror::Error;

/// The error type for all decryption operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeppercryptError {
    /// Input text is not valid hex or base64 for the position it occupies.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The hex frame is not longer than tag + salt + IV.
    ///
    /// The contained value is the frame length in hex characters.
    #[error("Frame too short: {len} hex chars (need more than 608)")]
    FrameTooShort { len: usize },

    /// The recomputed HMAC-SHA256 tag does not match the one in the frame.
    #[error("Integrity check failed: tag mismatch")]
    IntegrityCheckFailed,

    /// Requested AES key size is not 128, 192 or 256 bits.
    #[error("Unsupported key size: {0} bits")]
    UnsupportedKeySize(u32),

    /// A precomputed key does not have the byte length the key size requires.
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// PKCS#7 padding of the final block is invalid.
    #[error("Padding error: invalid PKCS#7 padding")]
    Padding,

    /// Block cipher or KDF rejected its input.
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Decrypted bytes are not valid UTF-8.
    #[error("Decode error: plaintext is not valid UTF-8")]
    Decode,
}
