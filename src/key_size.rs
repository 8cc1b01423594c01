//! AES key size selection.

use crate::consts::MAX_KEY_LENGTH;
use crate::error::PeppercryptError;
use std::fmt;

/// AES variant used for the CBC layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeySize {
    Aes128,
    Aes192,
    #[default]
    Aes256,
}

impl KeySize {
    /// Key size in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }

    /// Key length in bytes: `bits / 8`.
    ///
    /// Equal to `floor(32 / (256 / bits))` for every supported size, which is
    /// how peers describe the same quantity.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => MAX_KEY_LENGTH / 2,
            KeySize::Aes192 => MAX_KEY_LENGTH * 3 / 4,
            KeySize::Aes256 => MAX_KEY_LENGTH,
        }
    }
}

impl TryFrom<u32> for KeySize {
    type Error = PeppercryptError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            128 => Ok(KeySize::Aes128),
            192 => Ok(KeySize::Aes192),
            256 => Ok(KeySize::Aes256),
            other => Err(PeppercryptError::UnsupportedKeySize(other)),
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}
