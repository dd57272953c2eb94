//! Benchmarks for the pixel channel reordering passes

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use richlabel::pixel::{convert_inbound, swap_alpha_channel};

fn bitmap(width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 4).map(|i| (i * 31 % 251) as u8).collect()
}

fn bench_convert_inbound(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_inbound");

    for (width, height) in [(64, 16), (256, 64), (1024, 256), (2048, 1024)] {
        let source = bitmap(width, height);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &source,
            |b, source| {
                let mut buffer = source.clone();
                b.iter(|| convert_inbound(black_box(&mut buffer)));
            },
        );
    }

    group.finish();
}

fn bench_swap_alpha(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_alpha_channel");

    for (width, height) in [(64, 16), (256, 64), (1024, 256), (2048, 1024)] {
        let source = bitmap(width, height);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &source,
            |b, source| {
                let mut buffer = source.clone();
                b.iter(|| swap_alpha_channel(black_box(&mut buffer)));
            },
        );
    }

    group.finish();
}

fn bench_full_round_trip(c: &mut Criterion) {
    let source = bitmap(1024, 256);
    c.bench_function("inbound_then_swap_1024x256", |b| {
        let mut buffer = source.clone();
        b.iter(|| {
            convert_inbound(&mut buffer);
            swap_alpha_channel(&mut buffer);
            black_box(&buffer);
        });
    });
}

criterion_group!(benches, bench_convert_inbound, bench_swap_alpha, bench_full_round_trip);
criterion_main!(benches);
