use bfcrypt_algorithms::block::{BlockCipher, Blowfish};
use bfcrypt_symmetric::{BlowfishCipher, Mode, Padding};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("Blowfish key schedule");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [4usize, 16, 56] {
        let mut key = vec![0u8; size];
        rng.fill_bytes(&mut key);
        group.bench_with_input(BenchmarkId::from_parameter(size), &key, |b, key| {
            b.iter(|| Blowfish::new(black_box(key)).unwrap());
        });
    }

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let cipher = Blowfish::new(b"benchmark key").unwrap();
    let mut block = [0u8; 8];

    c.bench_function("Blowfish encrypt_block", |b| {
        b.iter(|| cipher.encrypt_block(black_box(&mut block)).unwrap());
    });
    c.bench_function("Blowfish decrypt_block", |b| {
        b.iter(|| cipher.decrypt_block(black_box(&mut block)).unwrap());
    });
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Blowfish modes");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let iv = BlowfishCipher::generate_iv(&mut rng);

    let modes = [
        (Mode::Ecb, Padding::Pkcs7),
        (Mode::cbc(&iv), Padding::Pkcs7),
        (Mode::pcbc(&iv), Padding::Pkcs7),
        (Mode::cfb(&iv), Padding::NoPadding),
        (Mode::ofb(&iv), Padding::NoPadding),
        (Mode::ctr(&iv), Padding::NoPadding),
    ];

    // Test different data sizes
    for size in [64usize, 1024, 16384] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));

        for (mode, padding) in &modes {
            let cipher = BlowfishCipher::new(&key, mode, *padding).unwrap();
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &data, |b, data| {
                b.iter(|| cipher.encrypt(black_box(data)).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block, bench_modes);
criterion_main!(benches);
