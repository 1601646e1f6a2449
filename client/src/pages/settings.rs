//! Account settings: profile, password and inert preference panels.

use leptos::prelude::*;

use crate::components::toast_host::{notify, notify_destructive};
use crate::state::settings::{PasswordForm, PasswordOutcome, ProfileForm};
use crate::state::toast::ToastState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let profile = RwSignal::new(ProfileForm::default());
    let password = RwSignal::new(PasswordForm::default());

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("profile updated");
        notify(toasts, "Profile Updated", "Your profile information has been updated successfully.");
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match password.try_update(PasswordForm::submit) {
            Some(PasswordOutcome::Mismatch) => notify_destructive(
                toasts,
                "Password Mismatch",
                "New password and confirmation password don't match.",
            ),
            Some(PasswordOutcome::Changed) => {
                log::info!("password changed");
                notify(toasts, "Password Changed", "Your password has been updated successfully.");
            }
            None => {}
        }
    };

    view! {
        <div class="page settings">
            <header class="page__header">
                <h1 class="page__title">"Account Settings"</h1>
                <p class="page__subtitle">"Manage your account information and preferences"</p>
            </header>

            <section class="card">
                <h2 class="card__title">"☺ Profile Information"</h2>
                <form class="form" on:submit=on_profile_submit>
                    <div class="profile-photo">
                        <div class="avatar">{move || profile.with(ProfileForm::initials)}</div>
                        <div>
                            <p class="profile-photo__label">"Profile Picture"</p>
                            <button type="button" class="btn btn--outline btn--sm">"Change Photo"</button>
                            <button type="button" class="btn btn--outline btn--sm">"Remove"</button>
                        </div>
                    </div>
                    <hr class="separator"/>
                    <div class="form__row">
                        <label class="form__field">
                            "Full Name"
                            <input
                                class="input"
                                required
                                prop:value=move || profile.with(|p| p.full_name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    profile.update(|p| p.full_name = value);
                                }
                            />
                        </label>
                        <label class="form__field">
                            "Phone Number"
                            <input
                                class="input"
                                required
                                prop:value=move || profile.with(|p| p.phone.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    profile.update(|p| p.phone = value);
                                }
                            />
                        </label>
                    </div>
                    <label class="form__field">
                        "Email Address"
                        <input
                            class="input"
                            type="email"
                            required
                            prop:value=move || profile.with(|p| p.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                profile.update(|p| p.email = value);
                            }
                        />
                    </label>
                    <button type="submit" class="btn btn--accent">"Update Profile"</button>
                </form>
            </section>

            <section class="card">
                <h2 class="card__title">"Change Password"</h2>
                <p class="card__subtitle">"Update your password to keep your account secure"</p>
                <form class="form" on:submit=on_password_submit>
                    <label class="form__field">
                        "Current Password"
                        <input
                            class="input"
                            type="password"
                            required
                            prop:value=move || password.with(|p| p.current.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                password.update(|p| p.current = value);
                            }
                        />
                    </label>
                    <div class="form__row">
                        <label class="form__field">
                            "New Password"
                            <input
                                class="input"
                                type="password"
                                required
                                prop:value=move || password.with(|p| p.new.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    password.update(|p| p.new = value);
                                }
                            />
                        </label>
                        <label class="form__field">
                            "Confirm New Password"
                            <input
                                class="input"
                                type="password"
                                required
                                prop:value=move || password.with(|p| p.confirm.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    password.update(|p| p.confirm = value);
                                }
                            />
                        </label>
                    </div>
                    <button type="submit" class="btn btn--accent">"Change Password"</button>
                </form>
            </section>

            <section class="card">
                <h2 class="card__title">"Notification Preferences"</h2>
                <p class="card__subtitle">"Choose how you want to receive notifications"</p>
                <div class="preference">
                    <div>
                        <p class="preference__name">"Email Notifications"</p>
                        <p class="preference__hint">"Receive updates about your properties via email"</p>
                    </div>
                    <button type="button" class="btn btn--outline btn--sm">"Manage"</button>
                </div>
                <hr class="separator"/>
                <div class="preference">
                    <div>
                        <p class="preference__name">"SMS Notifications"</p>
                        <p class="preference__hint">"Get important alerts via SMS"</p>
                    </div>
                    <button type="button" class="btn btn--outline btn--sm">"Manage"</button>
                </div>
            </section>

            <section class="card card--danger">
                <h2 class="card__title">"🗑 Danger Zone"</h2>
                <p class="card__subtitle">"These actions cannot be undone. Please proceed with caution."</p>
                <div class="preference preference--danger">
                    <div>
                        <p class="preference__name">"Delete Account"</p>
                        <p class="preference__hint">"Permanently delete your account and all associated data"</p>
                    </div>
                    <button type="button" class="btn btn--destructive btn--sm">"Delete Account"</button>
                </div>
            </section>
        </div>
    }
}
