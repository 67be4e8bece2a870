use super::*;

#[test]
fn undo_then_redo_round_trips() {
    let mut h = History::new(10);
    h.checkpoint(1);
    h.checkpoint(2);

    assert_eq!(h.undo(3), Some(2));
    assert_eq!(h.undo(2), Some(1));
    assert_eq!(h.undo(1), None);
    assert!(h.can_redo());

    assert_eq!(h.redo(1), Some(2));
    assert_eq!(h.redo(2), Some(3));
    assert_eq!(h.redo(3), None);
}

#[test]
fn checkpoint_discards_redo_branch() {
    let mut h = History::new(10);
    h.checkpoint("a");
    assert_eq!(h.undo("b"), Some("a"));
    h.checkpoint("a");
    assert!(!h.can_redo());
    assert_eq!(h.len(), 1);
}

#[test]
fn oldest_checkpoint_is_evicted() {
    let mut h = History::new(3);
    for i in 0..5 {
        h.checkpoint(i);
    }
    assert_eq!(h.len(), 3);
    assert_eq!(h.undo(5), Some(4));
    assert_eq!(h.undo(4), Some(3));
    assert_eq!(h.undo(3), Some(2));
    assert_eq!(h.undo(2), None);
}

#[test]
fn default_limit_is_fifty() {
    let mut h: History<usize> = History::default();
    for i in 0..80 {
        h.checkpoint(i);
    }
    assert_eq!(h.len(), HISTORY_LIMIT);
    h.clear();
    assert!(h.is_empty());
    assert!(!h.can_undo());
}
