use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_builtins_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();

    let null = interner.intern("null");
    let int = interner.intern("int");

    assert_eq!(interner.len(), before);
    assert_eq!(interner.lookup(null), "null");
    assert_eq!(interner.lookup(int), "int");
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let name1 = interner.intern("shared");
    let name2 = interner2.intern("shared");

    assert_eq!(name1, name2);
}

#[test]
fn test_intern_owned_already_interned() {
    let interner = StringInterner::new();

    let name1 = interner.intern("DummyType0");
    let name2 = interner.intern_owned(String::from("DummyType0"));

    assert_eq!(name1, name2);
    assert_eq!(interner.lookup(name2), "DummyType0");
}

#[test]
fn test_len_counts_new_names_once() {
    let interner = StringInterner::new();
    let before = interner.len();

    interner.intern("test");
    interner.intern("test");
    interner.intern_owned(String::from("other"));

    assert_eq!(interner.len(), before + 2);
    assert!(!interner.is_empty());
}

#[test]
fn test_concurrent_interning_agrees() {
    let interner = SharedInterner::new();
    let names: Vec<Name> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let interner = interner.clone();
                scope.spawn(move || interner.intern("racy"))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| panic!("intern thread panicked")))
            .collect()
    });

    assert!(names.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_lookup_of_foreign_name_does_not_panic() {
    let big = StringInterner::new();
    let small = StringInterner::new();
    let names: Vec<Name> = (0..64).map(|i| big.intern_owned(format!("member{i}"))).collect();

    let foreign = names
        .iter()
        .copied()
        .find(|name| small.try_lookup(*name).is_none());
    let Some(foreign) = foreign else {
        panic!("every name fell inside the smaller interner");
    };
    assert_eq!(small.lookup(foreign), StringInterner::UNKNOWN);
    assert_eq!(big.try_lookup(foreign), Some(big.lookup(foreign)));
}
