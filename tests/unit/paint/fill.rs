use std::collections::HashSet;

use super::*;

fn coords(updates: &[PixelUpdate]) -> HashSet<(usize, usize)> {
    updates.iter().map(|u| (u.row, u.col)).collect()
}

#[test]
fn uniform_grid_is_filled_completely() {
    let frame = Frame::empty(4, 6);
    let updates = flood_fill(&frame, 2, 3, 0.7).unwrap();
    assert_eq!(updates.len(), 24);
    let set = coords(&updates);
    assert_eq!(set.len(), 24);
    for r in 0..4 {
        for c in 0..6 {
            assert!(set.contains(&(r, c)));
        }
    }
    assert!(updates.iter().all(|u| u.value == 0.7));
}

#[test]
fn second_fill_is_a_no_op() {
    let frame = Frame::empty(3, 3);
    let filled = flood_filled(&frame, 1, 1, 1.0).unwrap();
    assert!(flood_fill(&filled, 1, 1, 1.0).unwrap().is_empty());
}

#[test]
fn isolated_cell_is_never_included() {
    let mut frame = Frame::empty(5, 5);
    frame.set(2, 2, 0.5).unwrap();
    let updates = flood_fill(&frame, 0, 0, 1.0).unwrap();
    assert_eq!(updates.len(), 24);
    assert!(!coords(&updates).contains(&(2, 2)));
}

#[test]
fn isolated_start_cell_yields_single_update() {
    let mut frame = Frame::empty(3, 3);
    frame.set(1, 1, 0.5).unwrap();
    let updates = flood_fill(&frame, 1, 1, 1.0).unwrap();
    assert_eq!(
        updates,
        vec![PixelUpdate {
            row: 1,
            col: 1,
            value: 1.0
        }]
    );
}

#[test]
fn diagonal_neighbours_are_not_connected() {
    // 1 0
    // 0 1
    let frame = Frame::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    let updates = flood_fill(&frame, 0, 0, 0.5).unwrap();
    assert_eq!(coords(&updates), HashSet::from([(0, 0)]));
}

#[test]
fn region_stops_at_wall() {
    // A vertical wall of 1s splits the grid in two.
    let mut frame = Frame::empty(4, 5);
    for r in 0..4 {
        frame.set(r, 2, 1.0).unwrap();
    }
    let updates = flood_fill(&frame, 0, 0, 0.3).unwrap();
    assert_eq!(updates.len(), 8);
    assert!(updates.iter().all(|u| u.col < 2));
}

#[test]
fn near_equal_values_are_separate_regions() {
    let frame = Frame::from_rows(vec![vec![0.5, 0.5 + 1e-9, 0.5]]).unwrap();
    let updates = flood_fill(&frame, 0, 0, 1.0).unwrap();
    assert_eq!(coords(&updates), HashSet::from([(0, 0)]));
}

#[test]
fn out_of_bounds_start_is_rejected() {
    let frame = Frame::empty(3, 3);
    let err = flood_fill(&frame, 3, 0, 1.0).unwrap_err();
    assert!(matches!(err, GlowgridError::OutOfBounds { row: 3, .. }));
}

#[test]
fn fill_value_is_clamped_so_repeat_fill_stays_idempotent() {
    let frame = Frame::empty(2, 2);
    let filled = flood_filled(&frame, 0, 0, 1.5).unwrap();
    assert!(filled.cells().iter().all(|&v| v == 1.0));
    assert!(flood_fill(&filled, 0, 0, 1.5).unwrap().is_empty());
}

#[test]
fn original_frame_is_untouched() {
    let frame = Frame::empty(3, 3);
    let filled = flood_filled(&frame, 0, 0, 1.0).unwrap();
    assert!(frame.cells().iter().all(|&v| v == 0.0));
    assert!(filled.cells().iter().all(|&v| v == 1.0));
}
