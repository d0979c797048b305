use blurhash_decoder::{base83, decode, is_valid, Blurhash};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const KNOWN_HASH: &str = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

/// Build a valid hash for the grid with varied AC digits.
fn synthetic_hash(cx: u32, cy: u32) -> String {
    let mut hash = base83::encode(u64::from((cx - 1) + (cy - 1) * 9), 1).unwrap();
    hash.push_str(&base83::encode(40, 1).unwrap());
    hash.push_str(&base83::encode(0x6a_8f_b3, 4).unwrap());
    for k in 1..u64::from(cx * cy) {
        hash.push_str(&base83::encode((k * 1237) % 6859, 2).unwrap());
    }
    hash
}

// ---------------------------------------------------------------------------
// Decode benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &(w, h) in &[(32u32, 32u32), (128, 128), (256, 256)] {
        let label = format!("{w}x{h}");
        group.throughput(Throughput::Elements((w as u64) * (h as u64)));
        group.bench_with_input(BenchmarkId::new("4x3", &label), KNOWN_HASH, |b, hash| {
            b.iter(|| decode(hash, w, h, 1.0).unwrap());
        });
    }

    group.finish();
}

fn bench_decode_component_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_components");

    for &(cx, cy) in &[(1u32, 1u32), (4, 3), (4, 4), (9, 9)] {
        let hash = synthetic_hash(cx, cy);
        let label = format!("{cx}x{cy}");
        group.bench_with_input(BenchmarkId::new("64x64", &label), &hash, |b, hash| {
            b.iter(|| decode(hash, 64, 64, 1.0).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Parsing benchmarks
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("base83_decode_4_chars", |b| {
        let s = base83::encode(123456, 4).unwrap();
        b.iter(|| base83::decode(&s).unwrap());
    });

    group.bench_function("is_valid_4x3", |b| {
        b.iter(|| is_valid(KNOWN_HASH));
    });

    let large = synthetic_hash(9, 9);
    group.bench_function("parse_9x9", |b| {
        b.iter(|| Blurhash::parse(&large).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// sRGB / linear conversion benchmarks
// ---------------------------------------------------------------------------

fn bench_srgb_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("srgb_linear");

    group.bench_function("srgb_to_linear_256_values", |b| {
        b.iter(|| {
            let mut sum = 0.0f64;
            for i in 0..=255u8 {
                sum += blurhash_decoder::srgb_to_linear(i);
            }
            sum
        });
    });

    group.bench_function("linear_to_srgb_256_values", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for i in 0..256u32 {
                let linear = i as f64 / 255.0;
                sum += blurhash_decoder::linear_to_srgb(linear) as u32;
            }
            sum
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_decode,
    bench_decode_component_counts,
    bench_parse,
    bench_srgb_linear,
);
criterion_main!(benches);
