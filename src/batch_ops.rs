//! Parallel decryption of independent frames.

use rayon::prelude::*;

use crate::builders::frame_decryptor::FrameDecryptor;

/// Decrypt every frame in `values` with a PBKDF2-derived key, in parallel.
///
/// Results keep input order. Each entry collapses independently: one bad
/// frame yields `None` at its index and does not affect the others.
pub fn decrypt_batch<S>(values: &[S], secret: &str, decryptor: &FrameDecryptor) -> Vec<Option<String>>
where
    S: AsRef<str> + Sync,
{
    values
        .par_iter()
        .map(|value| decryptor.decrypt(value.as_ref(), secret))
        .collect()
}

/// Decrypt every frame in `values` with a precomputed hex key, in parallel.
pub fn decrypt_batch_with_key<S>(
    values: &[S],
    hex_key: &str,
    decryptor: &FrameDecryptor,
) -> Vec<Option<String>>
where
    S: AsRef<str> + Sync,
{
    values
        .par_iter()
        .map(|value| decryptor.decrypt_with_key(value.as_ref(), hex_key))
        .collect()
}
