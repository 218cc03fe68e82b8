// Performance benchmarks for the identity read path
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use identity_reloader::ssl::pem::{decode_certificates, decode_private_key};
use identity_reloader::ssl::structs::credential_snapshot::CredentialSnapshot;
use identity_reloader::ssl::structs::credential_store::CredentialStore;
use std::hint::black_box;
use std::sync::Arc;

const LEAF1_KEY: &str = include_str!("../tests/fixtures/leaf1.key.pem");
const CHAIN1: &str = include_str!("../tests/fixtures/chain1.pem");

fn create_store() -> Arc<CredentialStore> {
    let key = decode_private_key(LEAF1_KEY.as_bytes()).unwrap();
    let chain = decode_certificates(CHAIN1.as_bytes()).unwrap();
    let store = Arc::new(CredentialStore::new());
    store.set(CredentialSnapshot::new(key, chain).unwrap());
    store
}

fn bench_store_get(c: &mut Criterion) {
    let store = create_store();
    c.bench_function("store_get", |b| {
        b.iter(|| black_box(store.get()))
    });
}

fn bench_certified_key(c: &mut Criterion) {
    let store = create_store();
    c.bench_function("store_certified_key", |b| {
        b.iter(|| black_box(store.certified_key()))
    });
}

fn bench_concurrent_reads(c: &mut Criterion) {
    let store = create_store();
    let mut group = c.benchmark_group("concurrent_reads");
    for readers in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(readers), &readers, |b, &readers| {
            b.iter(|| {
                std::thread::scope(|scope| {
                    for _ in 0..readers {
                        scope.spawn(|| {
                            for _ in 0..1_000 {
                                black_box(store.certified_key());
                            }
                        });
                    }
                });
            })
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_private_key", |b| {
        b.iter(|| black_box(decode_private_key(black_box(LEAF1_KEY.as_bytes())).unwrap()))
    });
    c.bench_function("decode_certificates", |b| {
        b.iter(|| black_box(decode_certificates(black_box(CHAIN1.as_bytes())).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_store_get,
    bench_certified_key,
    bench_concurrent_reads,
    bench_decode
);

criterion_main!(benches);
