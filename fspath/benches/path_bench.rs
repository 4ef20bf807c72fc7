//! Benchmarks for the lexical path layer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fspath::PurePath;

fn bench_components(c: &mut Criterion) {
    let path = PurePath::from("/usr/local/share/doc/package/README.md");
    c.bench_function("components_count", |b| {
        b.iter(|| black_box(&path).components().count())
    });
}

fn bench_lexically_normal(c: &mut Criterion) {
    let path = PurePath::from("/a/./b/../c/d/../../e/f/./g/..");
    c.bench_function("lexically_normal", |b| {
        b.iter(|| black_box(&path).lexically_normal())
    });
}

fn bench_comparison(c: &mut Criterion) {
    let a = PurePath::from("/usr/local/share//doc/package");
    let b_path = PurePath::from("/usr/local/share/doc/package");
    c.bench_function("path_eq_redundant_separators", |b| {
        b.iter(|| black_box(&a) == black_box(&b_path))
    });
}

fn bench_join(c: &mut Criterion) {
    let base = PurePath::from("/srv/data");
    c.bench_function("join_relative", |b| {
        b.iter(|| black_box(&base).join("logs/app/current.log"))
    });
}

fn bench_lexically_relative(c: &mut Criterion) {
    let target = PurePath::from("/a/b/c/d/e");
    let base = PurePath::from("/a/b/x/y");
    c.bench_function("lexically_relative", |b| {
        b.iter(|| black_box(&target).lexically_relative(black_box(&base)))
    });
}

criterion_group!(
    benches,
    bench_components,
    bench_lexically_normal,
    bench_comparison,
    bench_join,
    bench_lexically_relative
);
criterion_main!(benches);
