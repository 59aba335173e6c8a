use super::*;

#[test]
fn next_at_follows_the_clock() {
    let mut ids = IdGenerator::default();
    assert_eq!(ids.next_at(1_000), 1_000);
    assert_eq!(ids.next_at(2_000), 2_000);
}

#[test]
fn same_millisecond_bumps_by_one() {
    let mut ids = IdGenerator::default();
    let a = ids.next_at(5_000);
    let b = ids.next_at(5_000);
    let c = ids.next_at(5_000);
    assert_eq!((a, b, c), (5_000, 5_001, 5_002));
}

#[test]
fn clock_going_backwards_stays_monotonic() {
    let mut ids = IdGenerator::seeded(9_000);
    assert_eq!(ids.next_at(1_000), 9_001);
}

#[test]
fn observe_only_raises_floor() {
    let mut ids = IdGenerator::seeded(50);
    ids.observe(10);
    assert_eq!(ids.next_at(0), 51);
    ids.observe(100);
    assert_eq!(ids.next_at(0), 101);
}

#[test]
fn next_id_is_strictly_increasing() {
    let mut ids = IdGenerator::default();
    let first = ids.next_id();
    let second = ids.next_id();
    assert!(second > first);
}
