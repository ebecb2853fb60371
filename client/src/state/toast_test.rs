use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().current.is_none());
}

#[test]
fn show_replaces_previous_toast() {
    let mut state = ToastState::default();
    let first = state.show(ToastKind::Info, "first");
    let second = state.show(ToastKind::Error, "second");

    assert_ne!(first, second);
    let current = state.current.expect("toast visible");
    assert_eq!(current.id, second);
    assert_eq!(current.kind, ToastKind::Error);
    assert_eq!(current.message, "second");
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show(ToastKind::Success, "saved");
    state.show(ToastKind::Warning, "check fields");

    state.dismiss(first);
    assert_eq!(state.current.as_ref().map(|t| t.message.as_str()), Some("check fields"));
}

#[test]
fn dismiss_matching_id_clears_toast() {
    let mut state = ToastState::default();
    let id = state.show(ToastKind::Info, "reset");
    state.dismiss(id);
    assert!(state.current.is_none());
}

#[test]
fn kinds_map_to_distinct_classes() {
    let classes = [
        ToastKind::Success.class(),
        ToastKind::Error.class(),
        ToastKind::Info.class(),
        ToastKind::Warning.class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
