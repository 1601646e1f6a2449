use super::*;

#[test]
fn push_appends_default_toast() {
    let mut state = ToastState::default();
    let id = state.push("Success!", "Property submitted for verification.");

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, id);
    assert_eq!(state.items[0].variant, ToastVariant::Default);
    assert_eq!(state.items[0].title, "Success!");
}

#[test]
fn push_destructive_sets_variant() {
    let mut state = ToastState::default();
    state.push_destructive("Error", "Passwords do not match");
    assert_eq!(state.items[0].variant, ToastVariant::Destructive);
    assert_eq!(state.items[0].variant.class(), "toast toast--destructive");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push("a", "");
    let second = state.push("b", "");

    state.dismiss(first);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    let id = state.push("a", "");
    state.dismiss(id);
    state.dismiss(id);
    assert!(state.items.is_empty());
}

#[test]
fn oldest_toasts_drop_past_cap() {
    let mut state = ToastState::default();
    for n in 0..MAX_VISIBLE + 2 {
        state.push(format!("t{n}"), "");
    }

    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].title, "t2");
    assert_eq!(state.items.last().map(|t| t.title.as_str()), Some("t4"));
}
