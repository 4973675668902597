use super::*;
use dyb_object::{DynObject, Resolution, TypeBuilder, TypeRegistry, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_declare_mints_distinct_sites() {
    let table = SiteTable::new(SharedInterner::new());

    let a = table.declare("test", ExpectedType::Any, Precedence::ResolverFirst);
    let b = table.declare("test", ExpectedType::Any, Precedence::ResolverFirst);

    assert_ne!(a.id(), b.id());
    assert_eq!(a.member(), b.member());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_site_lookup() {
    let table = SiteTable::new(SharedInterner::new());
    let site = table.declare("x", ExpectedType::Int, Precedence::MemberFirst);

    let found = table.site(site.id());
    assert_eq!(found.map(|s| (s.expected(), s.precedence())), Some((ExpectedType::Int, Precedence::MemberFirst)));
    assert!(table.site(SiteId::from_raw(42)).is_none());
}

#[test]
fn test_clear_tears_down_caches() {
    let interner = SharedInterner::new();
    let registry = TypeRegistry::new();
    let table = SiteTable::new(interner.clone());
    let ty = registry.define(
        TypeBuilder::new(interner.intern("Dyna"))
            .resolver(|_, _| Ok(Resolution::Found(Value::from("dummy")))),
    );
    let obj = DynObject::new(ty);

    let site = table.declare("test", ExpectedType::Any, Precedence::ResolverFirst);
    assert_eq!(site.evaluate(&obj), Ok(Value::from("dummy")));
    let old_id = site.id();

    table.clear();
    assert!(table.is_empty());
    assert!(table.site(old_id).is_none());

    let fresh = table.declare("test", ExpectedType::Any, Precedence::ResolverFirst);
    assert_ne!(fresh.id(), old_id);
    assert_eq!(fresh.evaluate(&obj), Ok(Value::from("dummy")));
    assert_eq!(fresh.stats().detections, 1);
}

#[test]
fn test_stats_sum_over_sites() {
    let interner = SharedInterner::new();
    let registry = TypeRegistry::new();
    let table = SiteTable::new(interner.clone());
    let x = interner.intern("x");
    let ty = registry.define(TypeBuilder::new(interner.intern("Plain")).member(x));
    let obj = DynObject::new(ty).with(x, Value::from(1_i64));

    let a = table.declare("x", ExpectedType::Any, Precedence::ResolverFirst);
    let b = table.declare("x", ExpectedType::Any, Precedence::ResolverFirst);
    for _ in 0..3 {
        assert_eq!(a.evaluate(&obj), Ok(Value::from(1_i64)));
    }
    assert_eq!(b.evaluate(&obj), Ok(Value::from(1_i64)));

    let stats = table.stats();
    assert_eq!(stats.detections, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 2);
}
