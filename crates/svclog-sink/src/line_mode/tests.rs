use super::LineMode;

#[test]
fn bool_flag_selects_mode() {
    for flag in [true, false] {
        let mode = LineMode::from(flag);
        assert_eq!(bool::from(mode), flag);
        assert_eq!(mode.append_newline(), flag);
    }
}

#[test]
fn default_is_with_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}

#[test]
fn terminate_adds_missing_newline() {
    let mut buffer = b"ready".to_vec();
    LineMode::WithNewline.terminate(&mut buffer);
    assert_eq!(buffer, b"ready\n");
}

#[test]
fn terminate_keeps_existing_newline() {
    let mut buffer = b"boom\n".to_vec();
    LineMode::WithNewline.terminate(&mut buffer);
    assert_eq!(buffer, b"boom\n");
}

#[test]
fn terminate_is_noop_without_newline_mode() {
    let mut buffer = b"partial".to_vec();
    LineMode::WithoutNewline.terminate(&mut buffer);
    assert_eq!(buffer, b"partial");
}

#[test]
fn terminate_turns_empty_render_into_blank_line() {
    let mut buffer = Vec::new();
    LineMode::WithNewline.terminate(&mut buffer);
    assert_eq!(buffer, b"\n");
}
