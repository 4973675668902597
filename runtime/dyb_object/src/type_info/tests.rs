use super::*;
use crate::Resolution;
use dyb_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn test_members_get_sequential_slots() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let ty = TypeBuilder::new(interner.intern("Point"))
        .members([x, y])
        .build(TypeKey::from_raw(0));

    assert_eq!(ty.member_slot(x), Some(SlotIndex::new(0)));
    assert_eq!(ty.member_slot(y), Some(SlotIndex::new(1)));
    assert_eq!(ty.member_slot(interner.intern("z")), None);
    assert_eq!(ty.member_count(), 2);
}

#[test]
fn test_duplicate_member_is_ignored() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let ty = TypeBuilder::new(interner.intern("Point"))
        .member(x)
        .member(x)
        .build(TypeKey::from_raw(0));

    assert_eq!(ty.members(), &[x]);
}

#[test]
fn test_default_hook_is_not_an_override() {
    let interner = StringInterner::new();
    let ty = TypeBuilder::new(interner.intern("Plain")).build(TypeKey::from_raw(0));

    assert!(!ty.has_custom_resolver());
    assert!(matches!(ty.hook(), ResolverHook::Default));
}

#[test]
fn test_resolver_marks_override() {
    let interner = StringInterner::new();
    let ty = TypeBuilder::new(interner.intern("Dyna"))
        .resolver(|_, _| Ok(Resolution::NotFound))
        .build(TypeKey::from_raw(3));

    assert!(ty.has_custom_resolver());
    assert_eq!(ty.key(), TypeKey::from_raw(3));
}

#[test]
fn test_explicit_default_hook_is_not_an_override() {
    let interner = StringInterner::new();
    let ty = TypeBuilder::new(interner.intern("Plain"))
        .resolver(|_, _| Ok(Resolution::NotFound))
        .hook(ResolverHook::Default)
        .build(TypeKey::from_raw(0));

    assert!(!ty.has_custom_resolver());
}
