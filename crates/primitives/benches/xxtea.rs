//! Benchmarks for the fixed-block XXTEA cipher and its OFB mode

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scytale_primitives::block::xxtea::{Xxtea, XXTEA_BLOCK_SIZE};
use scytale_primitives::block::{BlockCipher, Ofb};

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxtea_block");
    group.throughput(Throughput::Bytes(XXTEA_BLOCK_SIZE as u64));

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut key = [0u8; 16];
    rng.fill(&mut key);
    let engine = Xxtea::new(&key).unwrap();

    let mut block = [0u8; XXTEA_BLOCK_SIZE];
    rng.fill(&mut block[..]);

    group.bench_function("encrypt", |b| {
        b.iter(|| {
            engine.encrypt_block(black_box(&mut block)).unwrap();
        });
    });

    group.bench_function("decrypt", |b| {
        b.iter(|| {
            engine.decrypt_block(black_box(&mut block)).unwrap();
        });
    });

    group.finish();
}

fn bench_ofb(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxtea_ofb");
    group.throughput(Throughput::Bytes(XXTEA_BLOCK_SIZE as u64));

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut key = [0u8; 16];
    rng.fill(&mut key);
    let mut iv = [0u8; XXTEA_BLOCK_SIZE];
    rng.fill(&mut iv[..]);

    let mut ofb = Ofb::new(Xxtea::new(&key).unwrap(), &iv).unwrap();
    let mut block = [0u8; XXTEA_BLOCK_SIZE];
    rng.fill(&mut block[..]);

    group.bench_function("process_block", |b| {
        b.iter(|| {
            ofb.process_block(black_box(&mut block)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_block, bench_ofb);
criterion_main!(benches);
