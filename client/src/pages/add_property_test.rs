use super::*;
use crate::map::NAIROBI;

// =============================================================
// destination
// =============================================================

#[test]
fn accepted_submit_returns_to_property_list() {
    let mut form = AddPropertyForm::default();
    let outcome = form.submit(Some(NAIROBI));
    assert_eq!(destination(outcome), Some("/landlord/properties"));
}

#[test]
fn submit_without_pin_stays_on_page() {
    let mut form = AddPropertyForm::default();
    let outcome = form.submit(None);
    assert_eq!(destination(outcome), None);
    assert!(form.pin_error.is_some());
}

#[test]
fn dropping_a_pin_after_a_blocked_submit_unblocks_navigation() {
    let mut form = AddPropertyForm::default();
    assert_eq!(destination(form.submit(None)), None);
    form.pin_selected();
    assert_eq!(destination(form.submit(Some(NAIROBI))), Some(PROPERTIES_PATH));
    assert_eq!(form.pin_error, None);
}
