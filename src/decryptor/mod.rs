// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Production API: `decrypt` / `decrypt_with_key` return `Option<String>`.
//! Diagnostic API: `try_decrypt` / `try_decrypt_with_key` / `decrypt_frame`
//! return the specific [`PeppercryptError`](crate::PeppercryptError).

pub(crate) mod decrypt;

pub use decrypt::{
    collapse, decrypt, decrypt_frame, decrypt_with_key, try_decrypt, try_decrypt_with_key,
    KeySource,
};
