use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genalg_codec::{BitMapping, VectorCodec};
use rand::Rng;
use std::hint::black_box;

fn bench_codecs(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mappings = [("Natural", BitMapping::Natural), ("Gray", BitMapping::Gray)];

    // (Name, vector length)
    let sizes = vec![("Small", 10), ("Medium", 1_000), ("Large", 100_000)];

    for bits in [8u32, 13, 32] {
        for (size_name, size) in &sizes {
            let input: Vec<f64> = (0..*size).map(|_| rng.gen_range(-120.0..120.0)).collect();

            let mut group_encode = c.benchmark_group(format!("Encode_{size_name}_{bits}b"));
            group_encode.throughput(Throughput::Elements(*size as u64));
            for (name, mapping) in mappings {
                let codec = VectorCodec::new(bits, -100.0, 100.0, mapping).unwrap();
                group_encode.bench_with_input(BenchmarkId::new(name, size), &input, |b, i| {
                    b.iter(|| codec.encode(black_box(i)))
                });
            }
            group_encode.finish();

            let mut group_decode = c.benchmark_group(format!("Decode_{size_name}_{bits}b"));
            group_decode.throughput(Throughput::Elements(*size as u64));
            for (name, mapping) in mappings {
                let codec = VectorCodec::new(bits, -100.0, 100.0, mapping).unwrap();
                let encoded = codec.encode(&input);
                group_decode.bench_with_input(BenchmarkId::new(name, size), &encoded, |b, e| {
                    b.iter(|| codec.decode(black_box(e), *size).unwrap())
                });
            }
            group_decode.finish();
        }
    }
}

fn bench_batches(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let codec = VectorCodec::new(16, -5.0, 5.0, BitMapping::Gray).unwrap();
    let population: Vec<Vec<f64>> = (0..1_000)
        .map(|_| (0..50).map(|_| rng.gen_range(-5.0..5.0)).collect())
        .collect();

    let mut group = c.benchmark_group("Population_1000x50");
    group.throughput(Throughput::Elements(population.len() as u64));
    group.bench_function("Sequential", |b| {
        b.iter(|| {
            black_box(&population)
                .iter()
                .map(|v| codec.encode(v))
                .collect::<Vec<_>>()
        })
    });
    group.bench_function("Parallel", |b| {
        b.iter(|| codec.encode_batch(black_box(population.as_slice())))
    });
    group.finish();
}

criterion_group!(benches, bench_codecs, bench_batches);
criterion_main!(benches);
