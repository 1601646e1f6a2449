use super::*;
use crate::map::NAIROBI;

// =============================================================
// Amenities
// =============================================================

#[test]
fn vocabulary_has_twelve_labelled_amenities() {
    let labels: Vec<_> = Amenity::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(
        labels,
        vec![
            "WiFi",
            "Water",
            "Parking",
            "Security",
            "Garden",
            "Pool",
            "Gym",
            "Balcony",
            "Air Conditioning",
            "Furnished",
            "Pet Friendly",
            "Laundry",
        ]
    );
}

#[test]
fn single_toggle_flips_one_checkbox() {
    let mut form = AddPropertyForm::default();
    form.toggle_amenity(Amenity::Parking);
    assert!(form.has_amenity(Amenity::Parking));
    assert_eq!(form.amenities().collect::<Vec<_>>(), vec![Amenity::Parking]);
    form.toggle_amenity(Amenity::Parking);
    assert!(!form.has_amenity(Amenity::Parking));
}

#[test]
fn toggling_twice_restores_selection() {
    let mut form = AddPropertyForm::default();
    form.set_amenity(Amenity::Water, true);
    form.set_amenity(Amenity::Gym, true);
    let before: Vec<_> = form.amenities().collect();

    for amenity in Amenity::ALL {
        form.toggle_amenity(amenity);
        form.toggle_amenity(amenity);
        assert_eq!(form.amenities().collect::<Vec<_>>(), before, "{amenity:?}");
    }
}

#[test]
fn set_amenity_is_idempotent() {
    let mut form = AddPropertyForm::default();
    form.set_amenity(Amenity::Pool, true);
    form.set_amenity(Amenity::Pool, true);
    assert_eq!(form.amenities().count(), 1);
    form.set_amenity(Amenity::Pool, false);
    form.set_amenity(Amenity::Pool, false);
    assert!(!form.has_amenity(Amenity::Pool));
}

#[test]
fn amenities_iterate_in_vocabulary_order() {
    let mut form = AddPropertyForm::default();
    form.set_amenity(Amenity::Laundry, true);
    form.set_amenity(Amenity::Wifi, true);
    assert_eq!(form.amenities().collect::<Vec<_>>(), vec![Amenity::Wifi, Amenity::Laundry]);
}

// =============================================================
// PropertyKind
// =============================================================

#[test]
fn property_kind_parses_option_values() {
    assert_eq!("bedsitter".parse::<PropertyKind>(), Ok(PropertyKind::Bedsitter));
    assert_eq!("castle".parse::<PropertyKind>(), Err(()));
    for kind in PropertyKind::ALL {
        assert_eq!(kind.value().parse::<PropertyKind>(), Ok(kind));
    }
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_without_pin_is_blocked_with_message() {
    let mut form = AddPropertyForm { title: "Kilimani 2BR".to_owned(), ..AddPropertyForm::default() };

    let outcome = form.submit(None);

    assert_eq!(outcome, SubmitOutcome::MissingPin);
    assert_eq!(form.pin_error, Some(PIN_REQUIRED));
    assert!(form.pin_touched);
    assert_eq!(form.title, "Kilimani 2BR");
}

#[test]
fn repeated_blocked_submits_keep_blocking() {
    let mut form = AddPropertyForm::default();
    for _ in 0..3 {
        assert_eq!(form.submit(None), SubmitOutcome::MissingPin);
    }
    assert_eq!(form.pin_error, Some(PIN_REQUIRED));
}

#[test]
fn submit_with_pin_is_accepted_and_clears_error() {
    let mut form = AddPropertyForm::default();
    form.submit(None);

    let outcome = form.submit(Some(NAIROBI));

    assert_eq!(outcome, SubmitOutcome::Submitted { at: NAIROBI });
    assert_eq!(form.pin_error, None);
}

#[test]
fn picking_a_pin_clears_error() {
    let mut form = AddPropertyForm::default();
    form.submit(None);
    form.pin_selected();
    assert_eq!(form.pin_error, None);
    assert!(form.pin_touched);
}
