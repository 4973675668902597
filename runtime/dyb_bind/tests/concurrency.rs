//! Concurrent first access against one `(site, type)` pair.
//!
//! Many threads may detect and build the strategy at once; the first insert
//! wins and every thread must see the same result it would see alone.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use dyb_bind::{Binder, SiteState};
use dyb_object::{BindErrorKind, DynObject, ExpectedType, Resolution, TypeBuilder, Value};
use rayon::prelude::*;

const THREADS: usize = 64;

#[test]
fn concurrent_first_access_custom_resolver() {
    let binder = Binder::new();
    let site = binder.declare_site("test", ExpectedType::Str);
    let ty = binder.types().define(
        TypeBuilder::new(binder.interner().intern("Dyna"))
            .resolver(|_, _| Ok(Resolution::Found(Value::from("dummy")))),
    );
    let key = ty.key();
    let obj = Value::object(DynObject::new(ty));

    let results: Vec<_> = (0..THREADS)
        .into_par_iter()
        .map(|_| binder.evaluate(site, &obj))
        .collect();

    assert!(results.iter().all(|r| r == &Ok(Value::from("dummy"))));

    let binding = binder.sites().site(site).unwrap();
    assert_eq!(binding.state(key), SiteState::CustomResolve);
    assert_eq!(binding.cached_types(), 1);

    let stats = binding.stats();
    assert!(stats.detections >= 1);
    assert_eq!(stats.evaluations(), THREADS as u64);
}

#[test]
fn concurrent_first_access_static_lookup() {
    let binder = Binder::new();
    let site = binder.declare_site("missing", ExpectedType::Any);
    let x = binder.interner().intern("x");
    let ty = binder.types().define(TypeBuilder::new(binder.interner().intern("Plain")).member(x));
    let obj = Value::object(DynObject::new(ty).with(x, Value::from(1_i64)));

    let kinds: Vec<_> = (0..THREADS)
        .into_par_iter()
        .map(|_| binder.evaluate(site, &obj).err().map(|e| e.kind))
        .collect();

    assert!(kinds
        .iter()
        .all(|k| matches!(k, Some(BindErrorKind::MemberNotFound { .. }))));
}

#[test]
fn concurrent_access_across_fresh_types() {
    let binder = Binder::new();
    let site = binder.declare_site("test", ExpectedType::Any);

    (0..THREADS).into_par_iter().for_each(|i| {
        let ty = binder.types().define(
            TypeBuilder::new(binder.interner().intern_owned(format!("DummyType{i}")))
                .resolver(|_, _| Ok(Resolution::Found(Value::from("dummy")))),
        );
        let obj = Value::object(DynObject::new(ty));
        assert_eq!(binder.evaluate(site, &obj), Ok(Value::from("dummy")));
        assert_eq!(binder.evaluate(site, &obj), Ok(Value::from("dummy")));
    });

    let stats = binder.stats();
    assert_eq!(stats.detections, THREADS as u64);
    assert_eq!(stats.hits, THREADS as u64);
    assert_eq!(binder.sites().site(site).unwrap().cached_types(), THREADS);
}
