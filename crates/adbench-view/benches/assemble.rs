use adbench_model::BenchmarkDataset;
use adbench_view::assemble;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_assemble(c: &mut Criterion) {
    let dataset = BenchmarkDataset::builtin().expect("builtin dataset");
    c.bench_function("assemble_builtin_dashboard", |b| {
        b.iter(|| assemble(black_box(&dataset)))
    });
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
