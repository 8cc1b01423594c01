//! # Text Codecs
//!
//! Hex <-> bytes conversion and input normalisation. Frames are always parsed
//! as lowercase-hex text; base64 input is decoded and re-encoded as hex first.

use crate::error::PeppercryptError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use std::borrow::Cow;
use std::fmt;

/// Standard alphabet, padding optional. Peers in the wild emit both.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Text encoding of a caller-supplied frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Frame is already hex text; used as-is.
    #[default]
    Hex,
    /// Frame is base64 text; decoded and converted to hex before parsing.
    Base64,
}

impl Encoding {
    /// Resolve an encoding name. Only the exact, lowercase `"base64"` selects
    /// base64; every other name, including `"BASE64"` and unknown ones, means hex.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "base64" {
            Encoding::Base64
        } else {
            Encoding::Hex
        }
    }
}

impl From<&str> for Encoding {
    fn from(name: &str) -> Self {
        Encoding::from_name(name)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Hex => f.write_str("hex"),
            Encoding::Base64 => f.write_str("base64"),
        }
    }
}

/// Lowercase hex encoding of `bytes`.
#[inline]
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex text into bytes.
///
/// # Errors
///
/// [`PeppercryptError::MalformedEncoding`] on odd length or a non-hex digit.
#[inline]
pub fn hex_to_bytes(hex_text: &str) -> Result<Vec<u8>, PeppercryptError> {
    hex::decode(hex_text).map_err(|e| PeppercryptError::MalformedEncoding(format!("hex: {e}")))
}

/// Decode hex text into a fixed-size array.
///
/// # Errors
///
/// [`PeppercryptError::MalformedEncoding`] if the text is not exactly `2 * N`
/// hex digits.
#[inline]
pub fn hex_to_array<const N: usize>(hex_text: &str) -> Result<[u8; N], PeppercryptError> {
    let mut out = [0u8; N];
    hex::decode_to_slice(hex_text, &mut out)
        .map_err(|e| PeppercryptError::MalformedEncoding(format!("hex: {e}")))?;
    Ok(out)
}

/// Convert base64 text to lowercase hex text.
///
/// ASCII whitespace (including MIME line breaks) is ignored.
///
/// # Errors
///
/// [`PeppercryptError::MalformedEncoding`] if the text is not valid base64.
pub fn base64_to_hex(value: &str) -> Result<String, PeppercryptError> {
    let bytes = if value.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = value.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        LENIENT_BASE64.decode(compact)
    } else {
        LENIENT_BASE64.decode(value)
    }
    .map_err(|e| PeppercryptError::MalformedEncoding(format!("base64: {e}")))?;

    Ok(bytes_to_hex(&bytes))
}

/// Normalise a caller-supplied frame to hex text.
///
/// Hex input is borrowed unchanged; base64 input is decoded and re-encoded.
///
/// # Errors
///
/// [`PeppercryptError::MalformedEncoding`] if base64 input does not decode.
pub fn normalize(value: &str, encoding: Encoding) -> Result<Cow<'_, str>, PeppercryptError> {
    match encoding {
        Encoding::Hex => Ok(Cow::Borrowed(value)),
        Encoding::Base64 => base64_to_hex(value).map(Cow::Owned),
    }
}
