//! src/crypto/compare.rs
//! Constant-time equality for tag comparison

use subtle::ConstantTimeEq;

/// OR-accumulate the XOR of every position of two equal-length slices.
///
/// Visits every position; the result is zero iff the slices are equal.
pub(crate) fn xor_accumulate(a: &[u8], b: &[u8]) -> u8 {
    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    acc
}

/// Compare two byte strings without an early exit on the first difference.
///
/// A length mismatch returns `false` immediately: lengths are fixed by the
/// frame format and are not secret. Equal-length inputs are always compared
/// in full, and the final zero test goes through `subtle` so it compiles to
/// a branch-free [`subtle::Choice`].
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    bool::from(xor_accumulate(a, b).ct_eq(&0u8))
}
