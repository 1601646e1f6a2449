use super::*;

// =============================================================
// is_active
// =============================================================

#[test]
fn is_active_matches_exact_path() {
    assert!(is_active("/landlord/inbox", "/landlord/inbox"));
}

#[test]
fn is_active_matches_nested_path() {
    assert!(is_active("/landlord/properties/new", "/landlord/properties"));
    assert!(is_active("/landlord/inbox/42", "/landlord/inbox"));
}

#[test]
fn is_active_rejects_shared_prefix_without_separator() {
    assert!(!is_active("/landlord/inboxes", "/landlord/inbox"));
    assert!(!is_active("/landlord", "/landlord/inbox"));
}

// =============================================================
// active_nav_item
// =============================================================

#[test]
fn every_item_is_uniquely_active_on_its_own_path() {
    for item in NAV_ITEMS {
        for path in [item.path.to_owned(), format!("{}/detail", item.path)] {
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|candidate| active_nav_item(&path) == Some(*candidate))
                .collect();
            assert_eq!(active, vec![item], "path {path}");
        }
    }
}

#[test]
fn add_property_wins_over_my_properties() {
    let item = active_nav_item("/landlord/properties/new").unwrap();
    assert_eq!(item.title, "Add Property");
}

#[test]
fn sibling_of_new_still_highlights_my_properties() {
    let item = active_nav_item("/landlord/properties/3").unwrap();
    assert_eq!(item.title, "My Properties");
}

#[test]
fn unrelated_paths_highlight_nothing() {
    assert_eq!(active_nav_item("/"), None);
    assert_eq!(active_nav_item("/landlord"), None);
    assert_eq!(active_nav_item("/landlord/dashboards"), None);
}

// =============================================================
// SidebarState
// =============================================================

#[test]
fn sidebar_starts_expanded() {
    let state = SidebarState::default();
    assert!(!state.collapsed);
    assert_eq!(state.brand(), "NyumbaYangu");
}

#[test]
fn toggle_flips_and_restores() {
    let mut state = SidebarState::default();
    state.toggle();
    assert!(state.collapsed);
    assert_eq!(state.brand(), "NY");
    state.toggle();
    assert!(!state.collapsed);
}

#[test]
fn collapse_is_idempotent() {
    let mut state = SidebarState::default();
    state.collapse();
    state.collapse();
    assert!(state.collapsed);
}
