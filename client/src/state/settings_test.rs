use super::*;

fn passwords(current: &str, new: &str, confirm: &str) -> PasswordForm {
    PasswordForm { current: current.to_owned(), new: new.to_owned(), confirm: confirm.to_owned() }
}

#[test]
fn profile_defaults_to_demo_landlord() {
    let profile = ProfileForm::default();
    assert_eq!(profile.full_name, "John Doe");
    assert_eq!(profile.initials(), "JD");
}

#[test]
fn initials_ignore_extra_whitespace() {
    let profile = ProfileForm { full_name: "  Grace   Wanjiku Muthoni ".to_owned(), ..ProfileForm::default() };
    assert_eq!(profile.initials(), "GWM");
}

#[test]
fn initials_of_empty_name_are_empty() {
    let profile = ProfileForm { full_name: String::new(), ..ProfileForm::default() };
    assert_eq!(profile.initials(), "");
}

#[test]
fn mismatched_confirmation_keeps_fields() {
    let mut form = passwords("old", "new-one", "new-two");
    assert_eq!(form.submit(), PasswordOutcome::Mismatch);
    assert_eq!(form, passwords("old", "new-one", "new-two"));
}

#[test]
fn matching_confirmation_clears_fields() {
    let mut form = passwords("old", "fresh", "fresh");
    assert_eq!(form.submit(), PasswordOutcome::Changed);
    assert_eq!(form, PasswordForm::default());
}
