//! Landlord home: welcome banner, headline numbers and recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Default landing route of the console. The four numbers are derived from
//! the property records on every render rather than stored anywhere.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::error_panel::{ErrorPanel, load};
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::data::{Activity, Catalog, DashboardStats};

const PROFILE_PROGRESS: u8 = 70;

/// One headline card: title, rendered value, icon glyph and colour tone.
#[derive(Clone, Debug, PartialEq, Eq)]
struct StatEntry {
    title: &'static str,
    value: String,
    icon: &'static str,
    tone: &'static str,
}

fn stat_entries(stats: DashboardStats) -> [StatEntry; 4] {
    [
        StatEntry { title: "Properties Posted", value: stats.posted.to_string(), icon: "▦", tone: "primary" },
        StatEntry { title: "Total Views", value: stats.total_views.to_string(), icon: "◉", tone: "accent" },
        StatEntry { title: "Verified Listings", value: stats.verified.to_string(), icon: "✔", tone: "success" },
        StatEntry { title: "Pending Approval", value: stats.pending.to_string(), icon: "◷", tone: "warning" },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let stats = load(catalog.properties.as_ref()).map(|properties| DashboardStats::from_properties(&properties));
    let activity = load(catalog.activity.as_ref());

    let stats_view = match stats {
        Ok(stats) => view! {
            <div class="stat-grid">
                {stat_entries(stats)
                    .into_iter()
                    .map(|entry| view! { <StatCard title=entry.title value=entry.value icon=entry.icon tone=entry.tone/> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        Err(error) => view! { <ErrorPanel error=error/> }.into_any(),
    };

    let activity_view = match activity {
        Ok(items) if items.is_empty() => view! {
            <p class="empty-state">"No recent activity yet. Start by posting a property!"</p>
        }
        .into_any(),
        Ok(items) => view! { <ul class="activity-list">{items.into_iter().map(activity_row).collect_view()}</ul> }.into_any(),
        Err(error) => view! { <ErrorPanel error=error/> }.into_any(),
    };

    view! {
        <div class="page dashboard">
            <div class="card welcome-banner">
                <img
                    class="welcome-banner__avatar"
                    src="https://randomuser.me/api/portraits/men/32.jpg"
                    alt="User Avatar"
                />
                <div class="welcome-banner__text">
                    <h2 class="welcome-banner__title">"Welcome back, John!"</h2>
                    <p>"Let's make renting easier for everyone today."</p>
                    <div class="progress">
                        <div class="progress__bar" style=format!("width: {PROFILE_PROGRESS}%")></div>
                    </div>
                    <span class="progress__label">{format!("Profile {PROFILE_PROGRESS}% complete")}</span>
                </div>
                <a href="/landlord/properties/new" class="btn btn--highlight btn--lg">
                    "+ Post New Property"
                </a>
            </div>

            {stats_view}

            <section class="card dashboard__activity">
                <h2 class="section-title">"Recent Activity"</h2>
                {activity_view}
            </section>

            <div class="quick-actions">
                <a href="/landlord/properties" class="card quick-action">
                    <span class="quick-action__icon">"▦"</span>
                    <h3>"Manage Properties"</h3>
                    <p>"View and edit your property listings"</p>
                </a>
                <a href="/landlord/verification" class="card quick-action">
                    <span class="quick-action__icon">"✔"</span>
                    <h3>"Verification Status"</h3>
                    <p>"Check your verification progress"</p>
                </a>
                <a href="/landlord/properties/new" class="card quick-action">
                    <span class="quick-action__icon">"+"</span>
                    <h3>"Add New Property"</h3>
                    <p>"List a new rental property"</p>
                </a>
                <a href="#" class="card quick-action" aria-label="Get Help">
                    <span class="quick-action__icon">"?"</span>
                    <h3>"Get Help"</h3>
                    <p>"Need assistance? Contact our support team."</p>
                </a>
            </div>

            <p class="dashboard__footer">"Powered by NyumbaYangu"</p>
        </div>
    }
}

fn activity_row(activity: Activity) -> impl IntoView {
    view! {
        <li class="activity-list__row">
            <div>
                <h4 class="activity-list__property">{activity.property}</h4>
                <p class="activity-list__location">{activity.location}</p>
            </div>
            <div class="activity-list__meta">
                <StatusBadge status=activity.status/>
                <span class="activity-list__date">{activity.date}</span>
            </div>
        </li>
    }
}
