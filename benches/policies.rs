use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{compare, PageId, PolicyKind, SimConfig, MAX_REFERENCES};

/// Deterministic reference string with some locality.
fn reference_string(len: usize, distinct: u32) -> Vec<PageId> {
    let mut state: u32 = 0x2545_f491;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            PageId::new(state % distinct)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let sequence = reference_string(MAX_REFERENCES, 12);
    let mut group = c.benchmark_group("policy");

    for frames_count in [3usize, 8] {
        let config = SimConfig::new(frames_count).unwrap();
        for kind in PolicyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), frames_count),
                &sequence,
                |b, sequence| b.iter(|| kind.evaluate(black_box(sequence), &config).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let sequence = reference_string(MAX_REFERENCES, 12);
    let config = SimConfig::new(4).unwrap();

    c.bench_function("compare/100x4", |b| {
        b.iter(|| compare(black_box(&sequence), &config).unwrap())
    });
}

criterion_group!(benches, bench_policies, bench_compare);
criterion_main!(benches);
