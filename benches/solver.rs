use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use raptor10::matrix::assemble;
use raptor10::solver::solve;
use raptor10::tables::DefaultTables;
use raptor10::{params, RaptorConfig, Raptor};

fn bench_decoding_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding_schedule");
    for k in [16u32, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("solve", k), &k, |b, &k| {
            let p = params::derive(k, &DefaultTables).unwrap();
            let esis: Vec<u64> = (0..k as u64).collect();
            b.iter(|| {
                let mut matrix = assemble(&p, &DefaultTables, &esis);
                solve(&mut matrix, &p, true).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_next_encoding_symbol(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for k in [16u32, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("next_encoding_symbol", k), &k, |b, &k| {
            let mut r = Raptor::new(k, RaptorConfig::default()).unwrap();
            for esi in 0..k as u64 {
                r.add_symbol(esi, vec![esi as u8; 64]);
            }
            r.calculate_intermediate_symbols().unwrap();
            b.iter(|| r.next_encoding_symbol().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decoding_schedule, bench_next_encoding_symbol);
criterion_main!(benches);
