//! Verification centre: identity check, per-property review and guidelines.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use leptos::prelude::*;

use crate::components::error_panel::{ErrorPanel, load};
use crate::components::status_badge::StatusBadge;
use crate::data::{Catalog, IdVerification, PropertyVerification, VerificationStatus, format_date};

/// Secondary and primary button labels offered for a property under review.
fn follow_up_actions(status: VerificationStatus) -> Option<(&'static str, &'static str)> {
    match status {
        VerificationStatus::Pending => Some(("View Status", "Add Docs")),
        VerificationStatus::Rejected => Some(("View Feedback", "Resubmit")),
        VerificationStatus::Verified | VerificationStatus::NotSubmitted => None,
    }
}

#[component]
pub fn VerificationPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();

    let identity = match load(catalog.identity.as_ref()) {
        Ok(records) => identity_card(records.into_iter().next()).into_any(),
        Err(error) => view! { <ErrorPanel error=error/> }.into_any(),
    };
    let properties = match load(catalog.verifications.as_ref()) {
        Ok(records) => records.into_iter().map(property_row).collect_view().into_any(),
        Err(error) => view! { <ErrorPanel error=error/> }.into_any(),
    };

    view! {
        <div class="page verification">
            <header class="page__header">
                <h1 class="page__title">"Verification Center"</h1>
                <p class="page__subtitle">"Manage your ID and property verification status"</p>
            </header>

            {identity}

            <section class="card">
                <h2 class="card__title">"Property Verification Status"</h2>
                <p class="card__subtitle">"Each property requires verification before it can go live"</p>
                <div class="verification-list">{properties}</div>
            </section>

            <section class="card guidelines">
                <h2 class="card__title">"▤ Verification Guidelines"</h2>
                <div>
                    <h4>"Required Documents for ID Verification:"</h4>
                    <ul>
                        <li>"Valid National ID or Passport"</li>
                        <li>"Clear, high-resolution photo"</li>
                        <li>"All details must be clearly visible"</li>
                    </ul>
                </div>
                <div>
                    <h4>"Required Documents for Property Verification:"</h4>
                    <ul>
                        <li>"Property ownership documents (Title deed, Sale agreement)"</li>
                        <li>"Recent utility bill (KPLC, Water, etc.)"</li>
                        <li>"Lease agreement (if applicable)"</li>
                        <li>"Local authority permits (if required)"</li>
                    </ul>
                </div>
                <div>
                    <h4>"Verification Process:"</h4>
                    <ul>
                        <li>"Documents are reviewed within 24-48 hours"</li>
                        <li>"You'll be notified via email about the status"</li>
                        <li>"Rejected submissions include feedback for resubmission"</li>
                        <li>"Verified properties go live immediately"</li>
                    </ul>
                </div>
            </section>
        </div>
    }
}

/// A missing record renders as "not submitted".
fn identity_card(record: Option<IdVerification>) -> impl IntoView {
    let status = record.as_ref().map_or(VerificationStatus::NotSubmitted, |r| r.status);
    let summary = record
        .as_ref()
        .map_or_else(|| "Upload your ID to verify your identity".to_owned(), IdVerification::summary);

    view! {
        <section class="card">
            <h2 class="card__title">
                <span class=format!("status-icon status-icon--{}", status.modifier())>{status.icon()}</span>
                "ID Verification"
            </h2>
            <div class="verification-item">
                <div>
                    <div class="verification-item__heading">
                        <h3>"Identity Document"</h3>
                        <StatusBadge status=status/>
                    </div>
                    <p class="verification-item__detail">{summary}</p>
                </div>
                <Show when=move || status != VerificationStatus::Verified>
                    <button type="button" class="btn btn--accent">"⇪ Upload ID"</button>
                </Show>
            </div>
        </section>
    }
}

fn property_row(record: PropertyVerification) -> impl IntoView {
    let actions = follow_up_actions(record.status).map(|(secondary, primary)| {
        view! {
            <div class="verification-item__actions">
                <button type="button" class="btn btn--outline btn--sm">{secondary}</button>
                <button type="button" class="btn btn--accent btn--sm">"⇪ " {primary}</button>
            </div>
        }
    });

    view! {
        <div class="verification-item verification-item--bordered">
            <div>
                <div class="verification-item__heading">
                    <span class=format!("status-icon status-icon--{}", record.status.modifier())>
                        {record.status.icon()}
                    </span>
                    <h3>{record.property_name}</h3>
                    <StatusBadge status=record.status/>
                </div>
                <div class="verification-item__detail">
                    <p>{format!("Documents: {}", record.documents.join(", "))}</p>
                    <p>{format!("Submitted: {}", format_date(record.submitted_date))}</p>
                    {record.verified_date.map(|date| view! { <p>{format!("Verified: {}", format_date(date))}</p> })}
                </div>
            </div>
            {actions}
        </div>
    }
}
