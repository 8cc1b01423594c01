// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod codec;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod error;
pub mod frame;
pub mod key_size;

// High-level API — this is what most callers import
pub use decryptor::{decrypt, decrypt_with_key};
pub use error::PeppercryptError;

// Diagnostic API: same pipeline, specific error kinds. Keep out of production decision paths.
pub use decryptor::{try_decrypt, try_decrypt_with_key};

pub use builders::frame_decryptor::FrameDecryptor;
pub use codec::Encoding;
pub use frame::EncryptedFrame;
pub use key_size::KeySize;

// Primitive helpers, hex in / hex out
pub use crypto::compare::constant_time_eq;
pub use crypto::digest::{sha1_hex, SaltDigest};
pub use crypto::hmac::hmac256_hex;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, decrypt_batch_with_key};
