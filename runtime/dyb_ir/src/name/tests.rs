use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_shard_and_local_split() {
    let name = Name::new(5, 1000);
    assert_eq!((name.shard(), name.local()), (5, 1000));

    let last = Name::new(15, Name::MAX_LOCAL);
    assert_eq!(last.shard(), Name::NUM_SHARDS - 1);
    assert_eq!(Name::from_raw(last.raw()), last);
}

#[test]
fn test_empty_is_default() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_eq!(Name::EMPTY.raw(), 0);
}

#[test]
fn test_shards_do_not_collide() {
    assert_ne!(Name::new(0, 7), Name::new(1, 7));
    assert_eq!(format!("{:?}", Name::new(3, 7)), "Name(3:7)");
}
