//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material, backed by [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every secret requires an explicit `.expose_secret()` to read, so nothing is
//! printed or copied by accident.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - frame tag computation
//! - [`HmacSha1`] - PBKDF2 pseudorandom function
//!
//! ### Fixed-Size Secrets
//! - [`Iv16`] - 16-byte AES-CBC initialization vector
//!
//! ### Dynamic Secrets
//! - [`SecretString`] - password, pepper and HMAC key strings
//! - [`DerivedKey`] - AES key bytes (16, 24 or 32)

use hmac::Hmac;
use sha1::Sha1;
use sha2::Sha256;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha1 = Hmac<Sha1>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Iv16 = SpanBuffer<16>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type SecretString = secure_gate::Dynamic<String>;
pub type DerivedKey = secure_gate::Dynamic<Vec<u8>>;
