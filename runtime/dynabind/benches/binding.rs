//! Binding cache benchmarks.
//!
//! Compares the cached path (same type every read) against the miss path
//! (fresh type every read), and times the full fresh-type driver loop.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dyb_bind::Binder;
use dyb_object::{DynObject, ExpectedType, Resolution, ResolverHook, TypeBuilder, Value};
use dynabind::harness::{self, HarnessConfig};

fn dummy_hook() -> ResolverHook {
    ResolverHook::custom(|_, _| Ok(Resolution::Found(Value::from("dummy"))))
}

/// Same concrete type on every read: detection runs once, then every read hits.
fn bench_cached_read(c: &mut Criterion) {
    let binder = Binder::new();
    let site = binder.declare_site("test", ExpectedType::Any);

    let dyna = binder
        .types()
        .define(TypeBuilder::new(binder.interner().intern("Dyna")).hook(dummy_hook()));
    let dyna = Value::object(DynObject::new(dyna));

    let x = binder.interner().intern("test");
    let plain = binder
        .types()
        .define(TypeBuilder::new(binder.interner().intern("Plain")).member(x));
    let plain = Value::object(DynObject::new(plain).with(x, Value::from(1_i64)));

    let mut group = c.benchmark_group("binding/cached");
    group.bench_function("custom_resolve", |b| {
        b.iter(|| black_box(binder.evaluate(site, black_box(&dyna))));
    });
    group.bench_function("static_lookup", |b| {
        b.iter(|| black_box(binder.evaluate(site, black_box(&plain))));
    });
    group.finish();
}

/// Fresh type on every read: every read misses and re-runs detection.
fn bench_fresh_type_read(c: &mut Criterion) {
    let binder = Binder::new();
    let site = binder.declare_site("test", ExpectedType::Any);
    let hook = dummy_hook();
    let name = binder.interner().intern("DummyType");

    c.bench_function("binding/fresh_type", |b| {
        b.iter(|| {
            let ty = binder.types().define(TypeBuilder::new(name).hook(hook.clone()));
            let obj = Value::object(DynObject::new(ty));
            black_box(binder.evaluate(site, &obj))
        });
    });
}

/// The full driver loop at several sizes.
fn bench_harness(c: &mut Criterion) {
    let mut group = c.benchmark_group("binding/harness");
    group.sample_size(10);

    for loops in [100, 1000, 5000] {
        let config = HarnessConfig {
            loops,
            report_every: 0,
            ..HarnessConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(loops), &config, |b, config| {
            b.iter(|| black_box(harness::run(config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cached_read, bench_fresh_type_read, bench_harness);
criterion_main!(benches);
