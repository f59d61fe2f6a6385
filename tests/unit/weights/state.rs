use super::*;

fn map(w: f64) -> WeightMap {
    WeightMap::from_pairs([("a", w)])
}

#[test]
fn dispatch_ids_increase() {
    let mut s = WeightState::new(map(1.0));
    assert_eq!(s.dispatch(), InputSeq(1));
    assert_eq!(s.dispatch(), InputSeq(2));
    assert_eq!(s.committed_seq(), None);
}

#[test]
fn in_order_commits_apply() {
    let mut s = WeightState::new(map(1.0));
    let a = s.dispatch();
    assert!(s.commit(a, map(0.2)));
    let b = s.dispatch();
    assert!(s.commit(b, map(0.3)));
    assert_eq!(s.current().weight_of("a"), 0.3);
    assert_eq!(s.committed_seq(), Some(b));
}

#[test]
fn older_result_completing_late_is_discarded() {
    let mut s = WeightState::new(map(1.0));
    let older = s.dispatch();
    let newer = s.dispatch();
    assert!(s.is_superseded(older));
    assert!(!s.is_superseded(newer));

    assert!(s.commit(newer, map(0.7)));
    assert!(!s.commit(older, map(0.1)));
    assert_eq!(s.current().weight_of("a"), 0.7);
}

#[test]
fn older_result_completing_first_is_still_committed() {
    let mut s = WeightState::new(map(1.0));
    let older = s.dispatch();
    let newer = s.dispatch();
    assert!(s.commit(older, map(0.1)));
    assert!(s.commit(newer, map(0.7)));
    assert_eq!(s.current().weight_of("a"), 0.7);
}

#[test]
fn snapshots_are_unaffected_by_later_commits() {
    let mut s = WeightState::new(map(1.0));
    let snapshot = s.current();
    let seq = s.dispatch();
    s.commit(seq, map(0.0));
    assert_eq!(snapshot.weight_of("a"), 1.0);
    assert_eq!(s.current().weight_of("a"), 0.0);
}
