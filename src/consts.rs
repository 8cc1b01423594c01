//! # Constants
//!
//! Frame layout and key-derivation parameters shared with the encrypting side.
//! These are protocol values: changing any of them breaks compatibility with
//! every frame produced by a peer, so none of them is runtime configurable.

/// PBKDF2-HMAC-SHA1 iteration count used to derive the AES key.
///
/// Fixed at `100` by the companion encryptor. A mismatch does not fail inside
/// the KDF; it produces the wrong key and surfaces only as a decryption failure.
pub const PBKDF2_ITERATIONS: u32 = 100;

/// Length of the HMAC-SHA256 tag section, in hex characters (32 bytes).
pub const TAG_HEX_LEN: usize = 64;

/// Length of the salt section, in hex characters (256 bytes).
pub const SALT_HEX_LEN: usize = 512;

/// Length of the IV section, in hex characters (16 bytes).
pub const IV_HEX_LEN: usize = 32;

/// Length of a SHA-1 salt digest, in hex characters.
pub const SALT_DIGEST_HEX_LEN: usize = 40;

/// Largest AES key length in bytes (AES-256).
pub const MAX_KEY_LENGTH: usize = 32;

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// Offset of the salt section.
pub const SALT_OFFSET: usize = TAG_HEX_LEN;

/// Offset of the IV section.
pub const IV_OFFSET: usize = SALT_OFFSET + SALT_HEX_LEN;

/// Offset of the ciphertext section.
pub const CIPHERTEXT_OFFSET: usize = IV_OFFSET + IV_HEX_LEN;

/// A frame must be strictly longer than this many hex characters.
pub const MIN_FRAME_HEX_LEN: usize = CIPHERTEXT_OFFSET;
