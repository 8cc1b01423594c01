//! # Builders
//!
//! Builder-style configuration for repeated decryption.
//!
//! ## Modules
//!
//! - [`frame_decryptor`] - [`FrameDecryptor`](frame_decryptor::FrameDecryptor): pepper + HMAC key + encoding + key size
//!
//! ## Usage
//!
//! Prefer a builder when many frames share the same pepper and HMAC key; the
//! free functions at the crate root are one-shot equivalents.

pub mod frame_decryptor;
