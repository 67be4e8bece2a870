use super::*;

fn state_with(values: &[f64]) -> EditorState {
    let frames = values.iter().map(|&v| Frame::filled(3, 3, v)).collect();
    EditorState::with_animation(Animation::new(frames).unwrap())
}

fn first_cells(state: &EditorState) -> Vec<f64> {
    state
        .animation()
        .frames()
        .iter()
        .map(|f| f.get(0, 0).unwrap())
        .collect()
}

#[test]
fn defaults_match_a_fresh_session() {
    let s = EditorState::new();
    assert_eq!(s.grid_size(), GridSize::new(9, 9));
    assert_eq!(s.animation().len(), 1);
    assert_eq!(s.fps().get(), 12);
    assert!(s.is_looping());
    assert!(!s.is_playing());
    assert_eq!(s.tool(), Tool::Brush);
    assert_eq!(s.brush_brightness(), 1.0);
    assert_eq!(s.tween_easing(), Easing::Smoothstep);
    assert!(!s.onion_skin().enabled);
    assert!(!s.can_undo());
}

#[test]
fn index_and_fps_are_clamped() {
    let mut s = state_with(&[0.0, 0.5]);
    s.set_current_index(7);
    assert_eq!(s.current_index(), 1);
    s.set_fps(90.0);
    assert_eq!(s.fps().get(), EDITOR_MAX_FPS);
    s.set_fps(0.0);
    assert_eq!(s.fps().get(), 1);
    s.set_brush_brightness(3.0);
    assert_eq!(s.brush_brightness(), 1.0);
}

#[test]
fn single_frame_cannot_play() {
    let mut s = EditorState::new();
    assert!(!s.toggle_playing());

    let mut s = state_with(&[0.0, 1.0]);
    s.set_paused(true);
    assert!(s.toggle_playing());
    assert!(!s.is_paused());
    assert!(!s.toggle_playing());
    assert!(!s.toggle_loop());
    assert!(!s.playback_config().looping);
}

#[test]
fn add_duplicate_and_delete_track_current_index() {
    let mut s = state_with(&[0.2, 0.4]);
    s.duplicate_frame().unwrap();
    assert_eq!(s.current_index(), 1);
    assert_eq!(first_cells(&s), vec![0.2, 0.2, 0.4]);

    s.add_frame().unwrap();
    assert_eq!(s.current_index(), 2);
    assert_eq!(first_cells(&s), vec![0.2, 0.2, 0.0, 0.4]);

    assert!(s.delete_frame());
    assert_eq!(s.current_index(), 1);
    assert_eq!(first_cells(&s), vec![0.2, 0.2, 0.4]);

    s.set_current_index(0);
    assert!(s.delete_frame());
    assert!(s.delete_frame());
    assert!(!s.delete_frame());
    assert_eq!(s.animation().len(), 1);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn load_frames_rejects_bad_input_without_changes() {
    let mut s = state_with(&[0.3, 0.6]);
    s.set_current_index(1);
    assert!(s.load_frames(Vec::new()).is_err());
    let mixed = vec![Frame::empty(2, 2), Frame::empty(3, 3)];
    assert!(matches!(
        s.load_frames(mixed),
        Err(GlowgridError::DimensionMismatch { .. })
    ));
    assert_eq!(s.animation().len(), 2);
    assert_eq!(s.current_index(), 1);

    s.load_pattern(Frame::filled(5, 7, 1.0)).unwrap();
    assert_eq!(s.grid_size(), GridSize::new(5, 7));
    assert_eq!(s.current_index(), 0);
}

#[test]
fn grid_resize_pads_and_truncates_all_frames() {
    let mut s = state_with(&[1.0, 0.5]);
    s.set_grid_size(4, 2).unwrap();
    assert_eq!(s.grid_size(), GridSize::new(4, 2));
    for f in s.animation().frames() {
        assert_eq!(f.get(3, 1), Some(0.0));
        assert!(f.get(0, 0).unwrap() > 0.0);
    }
    assert!(s.set_grid_size(0, 2).is_err());
}

#[test]
fn pixel_edits_target_current_frame() {
    let mut s = state_with(&[0.0, 0.0]);
    s.set_current_index(1);
    s.set_pixel(1, 1, 0.7).unwrap();
    assert_eq!(s.current_frame().get(1, 1), Some(0.7));
    assert_eq!(s.animation().get(0).unwrap().get(1, 1), Some(0.0));
    assert!(matches!(
        s.set_pixel(3, 0, 1.0),
        Err(GlowgridError::OutOfBounds { .. })
    ));

    s.set_brush_brightness(0.4);
    s.fill_frame();
    assert!(s.current_frame().cells().iter().all(|&v| v == 0.4));
    s.clear_frame();
    assert!(s.current_frame().cells().iter().all(|&v| v == 0.0));
}

#[test]
fn tools_paint_erase_and_fill() {
    let mut s = state_with(&[0.0]);
    s.set_pixel(1, 0, 1.0).unwrap();
    s.set_pixel(1, 1, 1.0).unwrap();
    s.set_pixel(1, 2, 1.0).unwrap();

    assert_eq!(s.apply_tool(0, 0).unwrap(), 1);
    assert_eq!(s.apply_tool(0, 0).unwrap(), 0);

    s.set_tool(Tool::Eraser);
    assert_eq!(s.apply_tool(0, 0).unwrap(), 1);
    assert_eq!(s.current_frame().get(0, 0), Some(0.0));

    // Row 1 splits the grid; the fill stays in the bottom row.
    s.set_tool(Tool::Fill);
    s.set_brush_brightness(0.5);
    assert_eq!(s.apply_tool(2, 0).unwrap(), 3);
    assert_eq!(s.current_frame().get(2, 2), Some(0.5));
    assert_eq!(s.current_frame().get(0, 0), Some(0.0));

    assert!(matches!(
        s.apply_tool(9, 9),
        Err(GlowgridError::OutOfBounds { .. })
    ));
}

#[test]
fn selection_operations() {
    let mut s = EditorState::new();
    s.select_frame(2);
    assert_eq!(s.selection(), &[2]);
    s.toggle_frame_selection(4);
    s.toggle_frame_selection(2);
    assert_eq!(s.selection(), &[4]);
    s.select_frame_range(5, 2);
    assert_eq!(s.selection(), &[2, 3, 4, 5]);
    s.clear_selection();
    assert!(s.selection().is_empty());
}

#[test]
fn tween_replaces_inner_frames_and_clears_selection() {
    let mut s = state_with(&[0.0, 0.9, 0.9, 1.0]);
    s.set_tween_easing(Easing::Linear);
    s.select_frame_range(0, 3);
    s.set_current_index(3);

    let splice = s.generate_tween(0, 3, 3).unwrap().unwrap();
    assert_eq!(splice.insert_index, 1);
    assert_eq!(splice.inserted, 3);
    assert_eq!(splice.replaced, 2);
    assert_eq!(first_cells(&s), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert!(s.selection().is_empty());

    s.select_frame(1);
    assert_eq!(s.generate_tween(2, 2, 3).unwrap(), None);
    assert_eq!(s.selection(), &[1]);
}

#[test]
fn tween_that_shrinks_keeps_index_in_range() {
    let mut s = state_with(&[0.0, 0.1, 0.2, 0.3, 0.4, 1.0]);
    s.set_current_index(5);
    s.generate_tween(0, 5, 1).unwrap();
    assert_eq!(s.animation().len(), 3);
    assert_eq!(s.current_index(), 2);
}

#[test]
fn reorder_follows_current_frame() {
    let mut s = state_with(&[0.0, 0.1, 0.2, 0.3]);
    s.set_current_index(1);
    s.reorder_frames(1, 3).unwrap();
    assert_eq!(s.current_index(), 3);
    assert_eq!(first_cells(&s), vec![0.0, 0.2, 0.3, 0.1]);

    s.reorder_frames(0, 3).unwrap();
    assert_eq!(s.current_index(), 2);

    s.reorder_frames(3, 0).unwrap();
    assert_eq!(s.current_index(), 3);

    s.select_frame(0);
    assert!(s.reorder_frames(0, 9).is_err());
    s.reorder_frames(1, 1).unwrap();
    assert_eq!(s.selection(), &[0]);
}

#[test]
fn onion_layers_follow_current_frame() {
    let mut s = state_with(&[0.0, 0.5, 1.0]);
    assert!(s.onion_skin_layers().is_empty());
    assert!(s.toggle_onion_skin());
    s.set_current_index(1);
    s.set_onion_skin_opacity(50.0, 120.0);
    let layers = s.onion_skin_layers();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].opacity, 0.5);
    assert_eq!(layers[1].opacity, 1.0);

    s.set_onion_skin_mode(OnionSkinMode::Next);
    s.set_current_index(2);
    assert!(s.onion_skin_layers().is_empty());
    s.set_onion_skin_enabled(false);
    s.set_current_index(0);
    assert!(s.onion_skin_layers().is_empty());
}

#[test]
fn undo_and_redo_restore_checkpoints() {
    let mut s = state_with(&[0.0]);
    s.checkpoint();
    s.set_pixel(0, 0, 1.0).unwrap();
    s.checkpoint();
    s.add_frame().unwrap();
    assert_eq!(s.animation().len(), 2);

    assert!(s.undo());
    assert_eq!(s.animation().len(), 1);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.current_frame().get(0, 0), Some(1.0));

    assert!(s.undo());
    assert_eq!(s.current_frame().get(0, 0), Some(0.0));
    assert!(!s.undo());

    assert!(s.redo());
    assert_eq!(s.current_frame().get(0, 0), Some(1.0));
    assert!(s.redo());
    assert_eq!(s.animation().len(), 2);
    assert!(!s.redo());
    assert!(s.can_undo());
}
