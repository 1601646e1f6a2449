//! Global toast stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<ToastState>`; any page raises a toast with
//! [`notify`] or [`notify_destructive`] and `ToastHost` renders the stack.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, ToastVariant};

/// Show a default toast.
pub fn notify(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    show(toasts, title, description, ToastVariant::Default);
}

/// Show an error-styled toast.
pub fn notify_destructive(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    show(toasts, title, description, ToastVariant::Destructive);
}

fn show(toasts: RwSignal<ToastState>, title: &str, description: &str, variant: ToastVariant) {
    let Some(id) = toasts.try_update(|state| match variant {
        ToastVariant::Default => state.push(title, description),
        ToastVariant::Destructive => state.push_destructive(title, description),
    }) else {
        return;
    };
    log::debug!("toast {id}: {title}");

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let delay = u64::from(crate::state::toast::TOAST_DURATION_MS);
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
        toasts.update(|state| state.dismiss(id));
    });
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.class() role="status">
                            <div class="toast__text">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
