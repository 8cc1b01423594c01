//! src/crypto/kdf/direct.rs
//! Precomputed keys supplied as hex — no derivation

use crate::aliases::DerivedKey;
use crate::codec::hex_to_bytes;
use crate::error::PeppercryptError;
use crate::key_size::KeySize;

/// Decode a precomputed hex key and check it fits `key_size`.
///
/// # Errors
///
/// - [`PeppercryptError::MalformedEncoding`] if `hex_key` is not valid hex
/// - [`PeppercryptError::InvalidKeyLength`] if it decodes to the wrong number of bytes
pub fn decode_direct_key(hex_key: &str, key_size: KeySize) -> Result<DerivedKey, PeppercryptError> {
    let bytes = hex_to_bytes(hex_key)?;
    if bytes.len() != key_size.key_len() {
        return Err(PeppercryptError::InvalidKeyLength {
            expected: key_size.key_len(),
            actual: bytes.len(),
        });
    }
    Ok(DerivedKey::new(bytes))
}
