//! tests/common.rs
//! Shared constants and a reference encryptor used to produce test frames

#![allow(dead_code)] // Each test binary uses a different subset

use aes::{Aes128, Aes192, Aes256};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use sha2::Sha256;

/// Shared secrets matching the reference vectors in tests/vector/data/
pub const TEST_SECRET: &str = "key";
pub const TEST_PEPPER: &str = "pepper";
pub const TEST_HMAC_KEY: &str = "hmacKey";

/// Must match the crate's PBKDF2 iteration count
pub const TEST_ITERATIONS: u32 = 100;

pub const KEY_BITS: [u32; 3] = [128, 192, 256];

/// Plaintexts covering empty, sub-block, exact-block, multi-block and non-ASCII input
pub const TEST_PLAINTEXTS: &[&str] = &[
    "",
    "ABC",
    "exactly sixteen!",
    "a longer message that spans several AES blocks in CBC mode",
    "パスワード 🔐 ünïcödé",
];

/// Deterministic 256-byte salt as 512 hex chars
pub fn test_salt_hex(seed: u8) -> String {
    let bytes: Vec<u8> = (0..256u16).map(|i| (i as u8) ^ seed).collect();
    hex::encode(bytes)
}

pub fn test_iv(seed: u8) -> [u8; 16] {
    let mut iv = [0u8; 16];
    for (i, b) in iv.iter_mut().enumerate() {
        *b = seed.wrapping_mul(31).wrapping_add(i as u8);
    }
    iv
}

pub fn salt_digest_hex(salt_hex: &str, pepper: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(pepper.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn derive_key(secret: &str, salt_digest_hex: &str, key_bits: u32) -> Vec<u8> {
    let mut key = vec![0u8; key_bits as usize / 8];
    pbkdf2::pbkdf2::<Hmac<Sha1>>(
        secret.as_bytes(),
        salt_digest_hex.as_bytes(),
        TEST_ITERATIONS,
        &mut key,
    )
    .unwrap();
    key
}

fn aes_cbc_encrypt(key: &[u8], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let mut buf = vec![0u8; plaintext.len() + 16];
    buf[..plaintext.len()].copy_from_slice(plaintext);
    let len = match key.len() {
        16 => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
            .unwrap()
            .encrypt_padded_mut::<Pkcs7>(&mut buf, plaintext.len())
            .unwrap()
            .len(),
        24 => cbc::Encryptor::<Aes192>::new_from_slices(key, iv)
            .unwrap()
            .encrypt_padded_mut::<Pkcs7>(&mut buf, plaintext.len())
            .unwrap()
            .len(),
        32 => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
            .unwrap()
            .encrypt_padded_mut::<Pkcs7>(&mut buf, plaintext.len())
            .unwrap()
            .len(),
        other => panic!("unsupported key length {other}"),
    };
    buf.truncate(len);
    buf
}

/// Build a hex frame for `plaintext` under an explicit AES key
pub fn encrypt_frame_with_key(
    plaintext: &str,
    key: &[u8],
    pepper: &str,
    hmac_key: &str,
    salt_hex: &str,
    iv: [u8; 16],
) -> String {
    let salt_digest = salt_digest_hex(salt_hex, pepper);
    let ciphertext_hex = hex::encode(aes_cbc_encrypt(key, &iv, plaintext.as_bytes()));
    let iv_hex = hex::encode(iv);

    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(hmac_key.as_bytes()).unwrap();
    mac.update(ciphertext_hex.as_bytes());
    mac.update(salt_digest.as_bytes());
    mac.update(iv_hex.as_bytes());
    let tag_hex = hex::encode(mac.finalize().into_bytes());

    format!("{tag_hex}{salt_hex}{iv_hex}{ciphertext_hex}")
}

/// Build a hex frame for `plaintext` with a PBKDF2 key derived from `secret`
pub fn encrypt_frame(
    plaintext: &str,
    secret: &str,
    pepper: &str,
    hmac_key: &str,
    key_bits: u32,
    seed: u8,
) -> String {
    let salt_hex = test_salt_hex(seed);
    let key = derive_key(secret, &salt_digest_hex(&salt_hex, pepper), key_bits);
    encrypt_frame_with_key(plaintext, &key, pepper, hmac_key, &salt_hex, test_iv(seed))
}

pub fn hex_to_base64(hex_frame: &str) -> String {
    STANDARD.encode(hex::decode(hex_frame).unwrap())
}

/// Flip one bit of the byte at `byte_index` of a hex frame
pub fn flip_bit(hex_frame: &str, byte_index: usize, bit: u8) -> String {
    let mut bytes = hex::decode(hex_frame).unwrap();
    bytes[byte_index] ^= 1 << bit;
    hex::encode(bytes)
}
