//! Pill showing a verification status.

use leptos::prelude::*;

use crate::data::VerificationStatus;

#[component]
pub fn StatusBadge(status: VerificationStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-badge--{}", status.modifier())>{status.badge_label()}</span>
    }
}
