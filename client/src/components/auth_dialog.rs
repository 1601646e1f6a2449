//! "Get Started" registration dialog with tenant and owner tabs.
//!
//! DESIGN
//! ======
//! Only the active tab's form is in the DOM. Field values live in
//! `LandingState::auth`, one form per tab, so switching tabs back and forth
//! redraws the same values instead of carrying them across.

use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::state::landing::{AuthTab, LandingState, RegistrationForm};
use crate::state::toast::ToastState;
use crate::util::dom::{focus_on_mount, is_dismiss_key};

#[component]
pub fn AuthDialog(landing: RwSignal<LandingState>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let dialog = NodeRef::<leptos::html::Div>::new();
    focus_on_mount(dialog);

    let close = move || landing.update(|l| l.auth.close());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(registration) = landing.try_update(|l| l.auth.submit()) else {
            return;
        };
        log::info!("registration submitted as {:?}", registration.tab);
        let role = match registration.tab {
            AuthTab::Tenant => "tenant",
            AuthTab::Owner => "property owner",
        };
        notify(
            toasts,
            "Registration Received",
            &format!("Welcome {}! Your {role} account request has been received.", registration.full_name),
        );
    };

    let tab_button = move |tab: AuthTab| {
        view! {
            <button
                type="button"
                class="auth-dialog__tab"
                class:auth-dialog__tab--active=move || landing.with(|l| l.auth.tab == tab)
                on:click=move |_| landing.update(|l| l.auth.select_tab(tab))
            >
                {tab.label()}
            </button>
        }
    };

    let field = move |tab: AuthTab,
                      kind: &'static str,
                      placeholder: &'static str,
                      read: fn(&RegistrationForm) -> &str,
                      write: fn(&mut RegistrationForm, String)| {
        view! {
            <input
                class="input"
                type=kind
                placeholder=placeholder
                required
                prop:value=move || landing.with(|l| read(l.auth.form(tab)).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    landing.update(|l| write(l.auth.form_mut(tab), value));
                }
            />
        }
    };

    view! {
        <div id="auth-modal" class="modal__backdrop" on:click=move |_| close()>
            <div
                class="card modal auth-dialog"
                node_ref=dialog
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="modal__close" title="Close" on:click=move |_| close()>
                    "×"
                </button>
                <h2 class="modal__title">"Get Started"</h2>
                <div class="auth-dialog__tabs">{tab_button(AuthTab::Tenant)} {tab_button(AuthTab::Owner)}</div>
                {move || {
                    let tab = landing.with(|l| l.auth.tab);
                    view! {
                        <form id=tab.form_id() class="auth-dialog__form" on:submit=on_submit>
                            {field(tab, "text", "Full Name", |f| f.full_name.as_str(), |f, v| f.full_name = v)}
                            {field(tab, "email", "Email", |f| f.email.as_str(), |f, v| f.email = v)}
                            {field(tab, "password", "Password", |f| f.password.as_str(), |f, v| f.password = v)}
                            <button type="submit" class="btn btn--primary">{tab.submit_label()}</button>
                        </form>
                    }
                }}
            </div>
        </div>
    }
}
