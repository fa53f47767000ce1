use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rowsql::{RenderMode, RenderOptions, StatementRequest, Value};

/// Request with `n` columns, every other one included.
fn build_request(n: usize) -> StatementRequest {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let values: Vec<Value> = (0..n).map(|i| Value::from(i as i64)).collect();
    let flags: Vec<bool> = (0..n).map(|i| i % 2 == 0).collect();
    StatementRequest::new("t")
        .all(columns, values, flags)
        .unique("id", 1)
}

fn bench_render_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/update");

    for n in [1, 5, 10, 50, 100] {
        let req = build_request(n);
        group.bench_with_input(BenchmarkId::new("parameterized", n), &req, |b, req| {
            b.iter(|| black_box(req.render_update(RenderMode::Parameterized)));
        });
        group.bench_with_input(BenchmarkId::new("literal", n), &req, |b, req| {
            b.iter(|| black_box(req.render_update(RenderMode::InsecureLiteral)));
        });
    }

    group.finish();
}

fn bench_render_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/insert");

    for n in [1, 5, 10, 50, 100] {
        let req = build_request(n);
        group.bench_with_input(BenchmarkId::new("values", n), &req, |b, req| {
            b.iter(|| black_box(req.render_insert(true)));
        });

        let legacy = build_request(n).options(RenderOptions::new().legacy_insert());
        group.bench_with_input(BenchmarkId::new("legacy", n), &legacy, |b, req| {
            b.iter(|| black_box(req.render_insert(true)));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let req = build_request(n);
                black_box(req.render_update(true))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_update,
    bench_render_insert,
    bench_build_and_render
);
criterion_main!(benches);
