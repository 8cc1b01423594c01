// src/crypto/mod.rs

//! Low-level crypto steps of the decryption pipeline.
//!
//! Each sub-module wraps one primitive crate; the orchestration lives in
//! [`crate::decryptor`].

pub mod cipher;
pub mod compare;
pub mod digest;
pub mod hmac;
pub mod kdf;
