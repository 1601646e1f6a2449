use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
}

#[test]
fn other_keys_do_not_dismiss() {
    for key in ["Enter", "Esc", "escape", " ", "Tab"] {
        assert!(!is_dismiss_key(key), "{key}");
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_reads_are_inert_outside_browser() {
    assert!(scroll_y().abs() < f64::EPSILON);
    assert_eq!(element_top("how-it-works"), None);
}
