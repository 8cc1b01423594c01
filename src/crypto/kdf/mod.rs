//! # Key Derivation
//!
//! Two ways to obtain the AES key for a frame:
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA1 over a shared secret, salted with the frame's salt digest
//! - [`direct`] - a key precomputed by the peer, supplied as hex
//!
//! Either way the result is a [`DerivedKey`](crate::aliases::DerivedKey) whose
//! length matches the requested [`KeySize`](crate::KeySize).

pub mod direct;
pub mod pbkdf2;
