use super::*;

fn listing(title: &str) -> Listing {
    Listing {
        title: title.to_owned(),
        location: "Nairobi, Westlands".to_owned(),
        price: "Ksh 45,000/mo".to_owned(),
        image: String::new(),
        description: String::new(),
        badge: "New".to_owned(),
        badge_tone: crate::data::BadgeTone::New,
    }
}

fn fill(form: &mut RegistrationForm, name: &str, email: &str, password: &str) {
    form.full_name = name.to_owned();
    form.email = email.to_owned();
    form.password = password.to_owned();
}

// =============================================================
// AuthModal
// =============================================================

#[test]
fn auth_modal_defaults_closed_on_tenant() {
    let modal = AuthModal::default();
    assert!(!modal.open);
    assert_eq!(modal.tab, AuthTab::Tenant);
}

#[test]
fn open_sets_flag_and_tab_together() {
    let mut modal = AuthModal::default();
    modal.open(AuthTab::Owner);
    assert!(modal.open);
    assert_eq!(modal.tab, AuthTab::Owner);
}

#[test]
fn close_resets_tab_and_forms() {
    let mut modal = AuthModal::default();
    modal.open(AuthTab::Owner);
    fill(modal.form_mut(AuthTab::Owner), "Jane", "jane@example.com", "pw");
    modal.close();
    assert_eq!(modal, AuthModal::default());
}

#[test]
fn tab_round_trip_leaves_tenant_fields_untouched() {
    let mut modal = AuthModal::default();
    modal.open(AuthTab::Tenant);
    fill(modal.form_mut(AuthTab::Tenant), "Amina", "amina@example.com", "secret");
    let before = modal.active_form().clone();

    modal.select_tab(AuthTab::Owner);
    fill(modal.form_mut(AuthTab::Owner), "Otieno", "otieno@example.com", "hunter2");
    modal.select_tab(AuthTab::Tenant);

    assert_eq!(modal.active_form(), &before);
}

#[test]
fn owner_form_starts_empty_after_tenant_input() {
    let mut modal = AuthModal::default();
    modal.open(AuthTab::Tenant);
    fill(modal.form_mut(AuthTab::Tenant), "Amina", "amina@example.com", "secret");
    modal.select_tab(AuthTab::Owner);
    assert_eq!(modal.active_form(), &RegistrationForm::default());
}

#[test]
fn submit_returns_active_registration_and_closes() {
    let mut modal = AuthModal::default();
    modal.open(AuthTab::Owner);
    fill(modal.form_mut(AuthTab::Owner), "  Otieno  ", "o@example.com", "pw");

    let registration = modal.submit();

    assert_eq!(registration, Registration { tab: AuthTab::Owner, full_name: "Otieno".to_owned() });
    assert!(!modal.open);
    assert_eq!(modal.tab, AuthTab::Tenant);
}

#[test]
fn tab_labels() {
    assert_eq!(AuthTab::Tenant.submit_label(), "Register as Tenant");
    assert_eq!(AuthTab::Owner.submit_label(), "Register as Owner");
    assert_eq!(AuthTab::Owner.form_id(), "form-owner");
}

// =============================================================
// LandingState
// =============================================================

#[test]
fn details_modal_opens_with_listing_and_clears_on_close() {
    let mut state = LandingState::default();
    state.open_details(listing("Family House"));
    assert_eq!(state.details.as_ref().map(|l| l.title.as_str()), Some("Family House"));
    state.close_details();
    assert!(state.details.is_none());
}

#[test]
fn favorites_toggle_per_card() {
    let mut state = LandingState::default();
    state.toggle_favorite(1);
    assert!(state.is_favorite(1));
    assert!(!state.is_favorite(0));
    state.toggle_favorite(1);
    assert!(!state.is_favorite(1));
}

#[test]
fn mobile_menu_toggles() {
    let mut state = LandingState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn set_active_section_reports_changes_only() {
    let mut state = LandingState::default();
    assert!(state.set_active_section("why-us".to_owned()));
    assert!(!state.set_active_section("why-us".to_owned()));
    assert!(state.set_active_section(String::new()));
    assert_eq!(state.active_section, "");
}

#[test]
fn carousel_offset_is_one_card_width() {
    assert_eq!(carousel_offset(1), 320.0);
    assert_eq!(carousel_offset(-1), -320.0);
    assert_eq!(carousel_offset(0), 0.0);
}
