//! # Frame Parsing
//!
//! A frame is one hex string laid out as:
//!
//! | Section    | Offset | Length (hex chars) |
//! |------------|--------|--------------------|
//! | tag        | 0      | 64                 |
//! | salt       | 64     | 512                |
//! | iv         | 576    | 32                 |
//! | ciphertext | 608    | remaining          |
//!
//! Parsing only splits the text. Sections stay hex until the step that needs
//! them as bytes, because the tag is computed over their hex form.

use crate::aliases::Iv16;
use crate::codec::{hex_to_array, hex_to_bytes};
use crate::consts::{CIPHERTEXT_OFFSET, IV_OFFSET, MIN_FRAME_HEX_LEN, SALT_OFFSET, TAG_HEX_LEN};
use crate::error::PeppercryptError;

/// Borrowed view of the four sections of a hex frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedFrame<'a> {
    tag: &'a str,
    salt: &'a str,
    iv: &'a str,
    ciphertext: &'a str,
}

impl<'a> EncryptedFrame<'a> {
    /// Split a hex frame into tag, salt, IV and ciphertext.
    ///
    /// Runs before any cryptographic work, so undersized input never reaches
    /// the digest, KDF or cipher.
    ///
    /// # Errors
    ///
    /// - [`PeppercryptError::FrameTooShort`] if `hex_frame` has 608 or fewer characters
    /// - [`PeppercryptError::MalformedEncoding`] if it contains non-ASCII characters
    pub fn parse(hex_frame: &'a str) -> Result<Self, PeppercryptError> {
        let len = hex_frame.chars().count();
        if len <= MIN_FRAME_HEX_LEN {
            return Err(PeppercryptError::FrameTooShort { len });
        }
        // Offsets are character offsets; ASCII keeps them equal to byte offsets.
        if !hex_frame.is_ascii() {
            return Err(PeppercryptError::MalformedEncoding(
                "frame contains non-ASCII characters".into(),
            ));
        }

        Ok(Self {
            tag: &hex_frame[..TAG_HEX_LEN],
            salt: &hex_frame[SALT_OFFSET..IV_OFFSET],
            iv: &hex_frame[IV_OFFSET..CIPHERTEXT_OFFSET],
            ciphertext: &hex_frame[CIPHERTEXT_OFFSET..],
        })
    }

    /// Embedded HMAC-SHA256 tag (64 hex chars).
    #[inline]
    pub fn tag(&self) -> &'a str {
        self.tag
    }

    /// Salt chosen by the encryptor (512 hex chars).
    #[inline]
    pub fn salt(&self) -> &'a str {
        self.salt
    }

    /// IV as hex text (32 hex chars).
    #[inline]
    pub fn iv(&self) -> &'a str {
        self.iv
    }

    /// Ciphertext as hex text.
    #[inline]
    pub fn ciphertext(&self) -> &'a str {
        self.ciphertext
    }

    /// Decode the IV section into a secure 16-byte buffer.
    pub fn iv_bytes(&self) -> Result<Iv16, PeppercryptError> {
        Ok(Iv16::new(hex_to_array::<16>(self.iv)?))
    }

    /// Decode the ciphertext section into bytes.
    pub fn ciphertext_bytes(&self) -> Result<Vec<u8>, PeppercryptError> {
        hex_to_bytes(self.ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_hex(ciphertext: &str) -> String {
        format!(
            "{}{}{}{}",
            "a".repeat(64),
            "b".repeat(512),
            "0c".repeat(16),
            ciphertext
        )
    }

    #[test]
    fn splits_sections_at_fixed_offsets() {
        let hex = frame_hex("00112233445566778899aabbccddeeff");
        let frame = EncryptedFrame::parse(&hex).unwrap();

        assert_eq!(frame.tag(), "a".repeat(64));
        assert_eq!(frame.salt(), "b".repeat(512));
        assert_eq!(frame.iv(), "0c".repeat(16));
        assert_eq!(frame.ciphertext(), "00112233445566778899aabbccddeeff");
        assert_eq!(frame.iv_bytes().unwrap().expose_secret(), &[0x0c; 16]);
        assert_eq!(frame.ciphertext_bytes().unwrap().len(), 16);
    }

    #[test]
    fn exactly_header_length_is_too_short() {
        let hex = frame_hex("");
        assert_eq!(hex.len(), 608);
        assert_eq!(
            EncryptedFrame::parse(&hex).unwrap_err(),
            PeppercryptError::FrameTooShort { len: 608 }
        );
    }

    #[test]
    fn one_char_past_header_parses() {
        let hex = frame_hex("0");
        let frame = EncryptedFrame::parse(&hex).unwrap();
        assert_eq!(frame.ciphertext(), "0");
        // Odd-length ciphertext only fails once decoded.
        assert!(matches!(
            frame.ciphertext_bytes(),
            Err(PeppercryptError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn empty_input_is_too_short() {
        assert_eq!(
            EncryptedFrame::parse("").unwrap_err(),
            PeppercryptError::FrameTooShort { len: 0 }
        );
    }

    #[test]
    fn non_ascii_frame_is_rejected() {
        let mut hex = frame_hex("00112233445566778899aabbccddeeff");
        hex.push('é');
        assert!(matches!(
            EncryptedFrame::parse(&hex),
            Err(PeppercryptError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Two UTF-8 bytes per character
        for chars in [300usize, 305, 608] {
            assert_eq!(
                EncryptedFrame::parse(&"é".repeat(chars)).unwrap_err(),
                PeppercryptError::FrameTooShort { len: chars }
            );
        }
        assert!(matches!(
            EncryptedFrame::parse(&"é".repeat(609)),
            Err(PeppercryptError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn non_hex_iv_fails_on_decode() {
        let hex = format!("{}{}{}{}", "a".repeat(64), "b".repeat(512), "zz".repeat(16), "00".repeat(16));
        let frame = EncryptedFrame::parse(&hex).unwrap();
        assert!(matches!(
            frame.iv_bytes(),
            Err(PeppercryptError::MalformedEncoding(_))
        ));
    }
}
