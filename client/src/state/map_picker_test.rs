use super::*;

const MOMBASA: Coordinate = Coordinate::new(-4.0435, 39.6682);

#[test]
fn new_picker_has_no_selection_and_centres_on_nairobi() {
    let picker = MapPicker::default();
    assert!(!picker.can_confirm());
    assert_eq!(picker.center(), NAIROBI);
}

#[test]
fn click_selects_and_marks_without_panning() {
    let mut picker = MapPicker::default();
    let update = picker.handle(PickerEvent::Clicked(MOMBASA));
    assert_eq!(picker.selected, Some(MOMBASA));
    assert_eq!(update, MapUpdate { marker: Some(MOMBASA), pan_to: None });
    assert!(picker.can_confirm());
}

#[test]
fn place_search_selects_and_pans() {
    let mut picker = MapPicker::default();
    let update = picker.handle(PickerEvent::PlaceFound(MOMBASA));
    assert_eq!(update.pan_to, Some(MOMBASA));
    assert_eq!(picker.center(), MOMBASA);
}

#[test]
fn geolocation_success_clears_locating_flag() {
    let mut picker = MapPicker::default();
    assert!(picker.handle(PickerEvent::LocateStarted).is_empty());
    assert!(picker.locating);

    let update = picker.handle(PickerEvent::Located(MOMBASA));
    assert!(!picker.locating);
    assert_eq!(picker.selected, Some(MOMBASA));
    assert_eq!(update, MapUpdate { marker: Some(MOMBASA), pan_to: Some(MOMBASA) });
}

#[test]
fn geolocation_failure_is_silent() {
    let mut picker = MapPicker::default();
    picker.handle(PickerEvent::Clicked(NAIROBI));
    picker.handle(PickerEvent::LocateStarted);

    let update = picker.handle(PickerEvent::LocateFailed);

    assert!(update.is_empty());
    assert!(!picker.locating);
    assert_eq!(picker.selected, Some(NAIROBI));
}

#[test]
fn closing_keeps_selection() {
    let mut picker = MapPicker::default();
    picker.open_dialog();
    picker.handle(PickerEvent::Clicked(MOMBASA));
    picker.close_dialog();
    assert!(!picker.open);
    assert_eq!(picker.selected, Some(MOMBASA));
}

#[test]
fn mount_waits_for_library_then_retries() {
    // Opened before the loader finished: nothing to mount yet.
    assert!(!mount_due(false, true, false));
    // Library arrives while the panel is still open.
    assert!(mount_due(false, true, true));
}

#[test]
fn mount_needs_a_container() {
    assert!(!mount_due(false, false, true));
}

#[test]
fn mounted_widget_is_never_mounted_again() {
    assert!(!mount_due(true, true, true));
}
