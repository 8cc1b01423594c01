//! benches/kdf.rs
//! Key setup cost: PBKDF2-HMAC-SHA1 vs. decoding a precomputed key
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use peppercrypt_rs::aliases::SecretString;
use peppercrypt_rs::consts::PBKDF2_ITERATIONS;
use peppercrypt_rs::crypto::kdf::direct::decode_direct_key;
use peppercrypt_rs::crypto::kdf::pbkdf2::derive_pbkdf2_sha1_key;
use peppercrypt_rs::{KeySize, SaltDigest};
use std::hint::black_box;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");

    let secret = SecretString::new("benchmark-secret".to_string());
    let digest = SaltDigest::compute(&"5a".repeat(256), "benchmark-pepper");

    for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
        group.bench_with_input(BenchmarkId::new("pbkdf2_sha1", size), &size, |b, &size| {
            b.iter(|| {
                let key = derive_pbkdf2_sha1_key(
                    black_box(&secret),
                    black_box(&digest),
                    PBKDF2_ITERATIONS,
                    size,
                )
                .unwrap();
                black_box(key);
            });
        });

        let hex_key = "ab".repeat(size.key_len());
        group.bench_with_input(BenchmarkId::new("direct_hex", size), &size, |b, &size| {
            b.iter(|| black_box(decode_direct_key(black_box(&hex_key), size).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
