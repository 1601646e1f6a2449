//! Tenant inquiries.

use leptos::prelude::*;

use crate::components::error_panel::{ErrorPanel, load};
use crate::components::toast_host::notify;
use crate::data::{Catalog, Message};
use crate::state::inbox::InboxState;
use crate::state::toast::ToastState;

#[component]
pub fn InboxPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let inbox = RwSignal::new(InboxState::default());

    let body = match load(catalog.messages.as_ref()) {
        Ok(messages) if messages.is_empty() => view! {
            <div class="card empty-card">
                <span class="empty-card__icon">"✉"</span>
                <h3>"No Messages Yet"</h3>
                <p>"You'll see messages from interested tenants here"</p>
            </div>
        }
        .into_any(),
        Ok(messages) => {
            let all = StoredValue::new(messages.clone());
            view! {
                <p class="inbox__unread">
                    {move || all.with_value(|m| format!("{} unread", inbox.with(|s| s.unread_count(m))))}
                </p>
                <div class="message-list">
                    {messages.into_iter().map(|message| message_card(message, inbox, toasts)).collect_view()}
                </div>
            }
            .into_any()
        }
        Err(error) => view! { <ErrorPanel error=error/> }.into_any(),
    };

    view! {
        <div class="page inbox">
            <header class="page__header">
                <h1 class="page__title">"Inbox"</h1>
                <p class="page__subtitle">"Messages from potential tenants"</p>
            </header>
            {body}
        </div>
    }
}

fn message_card(message: Message, inbox: RwSignal<InboxState>, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = message.id;
    let sender = message.sender.clone();
    let record = StoredValue::new(message.clone());
    let unread = move || record.with_value(|m| inbox.with(|s| s.is_unread(m)));

    let on_reply = move |_: leptos::ev::MouseEvent| {
        notify(toasts, "Reply", &format!("Replying to {sender} is not available yet."));
    };

    view! {
        <div class="card message-card" class:message-card--unread=unread>
            <div class="message-card__avatar">"☺"</div>
            <div class="message-card__body">
                <div class="message-card__heading">
                    <h3>{message.sender}</h3>
                    <div class="message-card__meta">
                        <Show when=unread>
                            <span class="badge badge--secondary">"New"</span>
                        </Show>
                        <span class="message-card__time">"◷ " {message.time}</span>
                    </div>
                </div>
                <p class="message-card__property">{format!("Re: {}", message.property)}</p>
                <p class="message-card__text">{message.body}</p>
                <div class="message-card__actions">
                    <button type="button" class="btn btn--accent btn--sm" on:click=on_reply>
                        "Reply"
                    </button>
                    <button
                        type="button"
                        class="btn btn--outline btn--sm"
                        on:click=move |_| inbox.update(|s| s.mark_read(id))
                    >
                        "Mark as Read"
                    </button>
                </div>
            </div>
        </div>
    }
}
