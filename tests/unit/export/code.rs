use super::*;

#[test]
fn values_drop_trailing_zeros() {
    assert_eq!(format_value(1.0), "1");
    assert_eq!(format_value(0.5), "0.5");
    assert_eq!(format_value(0.25), "0.25");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(-0.0), "0");
    assert_eq!(format_value(0.333), "0.33");
    assert_eq!(format_value(0.996), "1");
    assert_eq!(format_value(0.05), "0.05");
}

#[test]
fn frame_literal_layout() {
    let frame = Frame::from_rows(vec![vec![0.0, 1.0], vec![0.5, 0.25]]).unwrap();
    assert_eq!(format_frame(&frame), "[\n  [0, 1],\n  [0.5, 0.25]\n]");
    assert_eq!(
        pattern_code(&frame),
        "const pattern: Frame = [\n  [0, 1],\n  [0.5, 0.25]\n];"
    );
}

#[test]
fn frames_literal_nests_indentation() {
    let a = Frame::filled(1, 2, 1.0);
    let b = Frame::empty(1, 2);
    let expected = "const frames: Frame[] = [\n  [\n    [1, 1]\n  ],\n  [\n    [0, 0]\n  ]\n];";
    assert_eq!(frames_code([&a, &b]), expected);
}
