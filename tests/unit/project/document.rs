use super::*;

#[test]
fn minimal_document_uses_defaults() {
    let json = r#"{ "rows": 2, "cols": 3, "frames": [[[0, 1, 0.5], [0, 0, 0]]] }"#;
    let p = Project::from_reader(json.as_bytes()).unwrap();
    assert_eq!(p.size(), GridSize::new(2, 3));
    assert_eq!(p.fps.get(), 12);
    assert!(p.looping);
    assert_eq!(p.palette, Palette::default());
    assert_eq!(p.frames[0].get(0, 2), Some(0.5));
}

#[test]
fn values_are_clamped_on_load() {
    let json = r#"{ "rows": 1, "cols": 2, "frames": [[[-1, 7]]] }"#;
    let p = Project::from_reader(json.as_bytes()).unwrap();
    assert_eq!(p.frames[0].cells(), &[0.0, 1.0]);
}

#[test]
fn malformed_json_is_a_serde_error() {
    for bad in [
        "{",
        r#"{ "rows": 1, "cols": 1 }"#,
        r#"{ "rows": 1, "cols": 2, "frames": [[[0, 1], [0]]] }"#,
        r#"{ "rows": 1, "cols": 1, "fps": 0, "frames": [[[0]]] }"#,
    ] {
        assert!(
            matches!(Project::from_reader(bad.as_bytes()), Err(GlowgridError::Serde(_))),
            "{bad}"
        );
    }
}

#[test]
fn validate_rejects_structural_problems() {
    let mut p = Project::new(2, 2).unwrap();
    p.validate().unwrap();

    p.frames.push(Frame::empty(3, 3));
    assert!(matches!(p.validate(), Err(GlowgridError::Validation(_))));

    p.frames.clear();
    assert!(p.validate().is_err());

    assert!(Project::new(0, 4).is_err());
}

#[test]
fn json_roundtrip_preserves_settings() {
    let mut p = Project::new(3, 3).unwrap();
    p.looping = false;
    p.fps = Fps::new(24).unwrap();
    p.frames[0] = Frame::filled(3, 3, 0.25);

    let mut buf = Vec::new();
    p.to_writer(&mut buf).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.contains("\"loop\": false"));

    let back = Project::from_reader(buf.as_slice()).unwrap();
    assert_eq!(back, p);
}

#[test]
fn editor_roundtrip() {
    let json = r#"{ "rows": 2, "cols": 2, "fps": 45, "loop": false,
                    "frames": [[[0, 0], [0, 0]], [[1, 1], [1, 1]]] }"#;
    let p = Project::from_reader(json.as_bytes()).unwrap();
    let state = p.into_editor().unwrap();
    assert_eq!(state.animation().len(), 2);
    assert_eq!(state.fps().get(), 30);
    assert!(!state.is_looping());

    let back = Project::from_editor(&state);
    assert_eq!(back.frames.len(), 2);
    assert_eq!(back.fps.get(), 30);
    assert!(!back.looping);
}

#[test]
fn save_and_load_from_disk() {
    let dir = std::env::temp_dir().join(format!("glowgrid-project-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("p.json");

    let p = Project::new(4, 5).unwrap();
    p.save(&path).unwrap();
    assert_eq!(Project::from_path(&path).unwrap(), p);

    let missing = Project::from_path(dir.join("missing.json"));
    assert!(matches!(missing, Err(GlowgridError::Other(_))));
    std::fs::remove_dir_all(&dir).unwrap();
}
