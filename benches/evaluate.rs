// benches/evaluate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use visibility_audit::{Evaluator, ScoringPolicy};

const READY: &str = include_str!("../tests/fixtures/ready.html");

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = Evaluator::new(ScoringPolicy::default()).with_year(2026);
    // roughly the size of a real landing page
    let large = READY.repeat(40);

    c.bench_function("evaluate_ready", |b| {
        b.iter(|| {
            let report = evaluator.evaluate(black_box(READY), "https://example.com");
            black_box(report.score())
        })
    });

    c.bench_function("evaluate_large", |b| {
        b.iter(|| {
            let report = evaluator.evaluate(black_box(&large), "https://example.com");
            black_box(report.score())
        })
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
