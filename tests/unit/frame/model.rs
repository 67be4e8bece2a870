use super::*;

#[test]
fn empty_frame_is_all_zero_with_requested_shape() {
    let f = empty_frame(3, 4);
    assert_eq!(f.size(), GridSize::new(3, 4));
    assert!(f.cells().iter().all(|&v| v == 0.0));
    assert_eq!(f.rows_iter().count(), 3);
    assert!(f.rows_iter().all(|row| row.len() == 4));
}

#[test]
fn from_rows_clamps_and_rejects_ragged() {
    let f = Frame::from_rows(vec![vec![-1.0, 0.5], vec![2.0, f64::NAN]]).unwrap();
    assert_eq!(f.to_rows(), vec![vec![0.0, 0.5], vec![1.0, 0.0]]);

    let err = Frame::from_rows(vec![vec![0.0, 0.0], vec![0.0]]).unwrap_err();
    assert!(matches!(err, GlowgridError::Validation(_)));
}

#[test]
fn clone_is_independent() {
    let original = Frame::filled(2, 2, 0.5);
    let mut copy = clone_frame(&original);
    copy.set(0, 0, 1.0).unwrap();
    assert_eq!(original.get(0, 0), Some(0.5));
    assert_eq!(copy.get(0, 0), Some(1.0));
}

#[test]
fn set_rejects_out_of_bounds_and_clamps() {
    let mut f = Frame::empty(2, 3);
    let err = f.set(2, 0, 1.0).unwrap_err();
    assert!(matches!(
        err,
        GlowgridError::OutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 3
        }
    ));
    f.set(1, 2, 7.0).unwrap();
    assert_eq!(f.get(1, 2), Some(1.0));
    assert_eq!(f.get(1, 3), None);
}

#[test]
fn resize_pads_with_zero_and_truncates() {
    let f = Frame::from_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();

    let grown = resize_frame(&f, 3, 3);
    assert_eq!(
        grown.to_rows(),
        vec![
            vec![0.1, 0.2, 0.0],
            vec![0.3, 0.4, 0.0],
            vec![0.0, 0.0, 0.0]
        ]
    );

    let shrunk = resize_frame(&f, 1, 1);
    assert_eq!(shrunk.to_rows(), vec![vec![0.1]]);

    // Lossy: growing back does not recover discarded cells.
    assert_eq!(shrunk.resized(2, 2).get(1, 1), Some(0.0));
}

#[test]
fn apply_updates_skips_cells_outside_grid() {
    let mut f = Frame::empty(2, 2);
    let applied = f.apply_updates(&[
        PixelUpdate {
            row: 0,
            col: 1,
            value: 0.75,
        },
        PixelUpdate {
            row: 5,
            col: 5,
            value: 1.0,
        },
    ]);
    assert_eq!(applied, 1);
    assert_eq!(f.get(0, 1), Some(0.75));
}

#[test]
fn approx_eq_uses_tolerance_and_size() {
    let a = Frame::filled(2, 2, 0.5);
    let b = Frame::filled(2, 2, 0.5005);
    assert!(a.approx_eq(&b, 0.001));
    assert!(!a.approx_eq(&Frame::filled(2, 2, 0.6), 0.001));
    assert!(!a.approx_eq(&Frame::filled(2, 3, 0.5), 0.001));
}

#[test]
fn serializes_as_nested_rows() {
    let f = Frame::from_rows(vec![vec![0.0, 1.0], vec![0.5, 0.25]]).unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, "[[0.0,1.0],[0.5,0.25]]");
    let back: Frame = serde_json::from_str(&json).unwrap();
    assert_eq!(back, f);

    assert!(serde_json::from_str::<Frame>("[[0.0],[0.0,1.0]]").is_err());
}

#[test]
fn zero_column_frame_keeps_its_rows_through_json() {
    let f = Frame::empty(3, 0);
    assert_eq!(f.rows_iter().count(), 3);
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, "[[],[],[]]");
    let back: Frame = serde_json::from_str(&json).unwrap();
    assert_eq!(back.size(), GridSize::new(3, 0));
}
