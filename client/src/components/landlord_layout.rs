//! Shell shared by every `/landlord/*` route.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::LandlordSidebar;

/// Sidebar plus the nested route's page.
#[component]
pub fn LandlordLayout() -> impl IntoView {
    view! {
        <div class="landlord-layout">
            <LandlordSidebar/>
            <main class="landlord-layout__main">
                <div class="landlord-layout__content">
                    <Outlet/>
                </div>
            </main>
        </div>
    }
}
