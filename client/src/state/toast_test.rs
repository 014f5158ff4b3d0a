use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");
    assert!(b > a);
    assert_eq!(
        state.items.iter().map(|t| t.message.as_str()).collect::<Vec<_>>(),
        vec!["saved", "failed"]
    );
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let _b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "two");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn oldest_toasts_drop_past_cap() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE_TOASTS + 2) {
        state.push(ToastKind::Error, format!("t{i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items[0].message, "t2");
}

#[test]
fn kind_css_modifiers() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}
