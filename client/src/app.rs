//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::landlord_layout::LandlordLayout;
use crate::components::toast_host::ToastHost;
use crate::data::Catalog;
use crate::pages::{
    add_property::AddPropertyPage, dashboard::DashboardPage, inbox::InboxPage, landing::LandingPage,
    not_found::NotFoundPage, properties::PropertiesPage, settings::SettingsPage, verification::VerificationPage,
};
use crate::state::toast::ToastState;

/// Google Maps loader URL for `key`. Place search uses the core geocoder, so
/// no extra libraries are requested.
pub fn maps_script_url(key: &str) -> String {
    format!("https://maps.googleapis.com/maps/api/js?key={key}")
}

/// Google Maps key for the HTML shell, provided by the host as context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapsApiKey(pub Option<String>);

/// HTML shell rendered on the server for SSR + hydration.
///
/// The Maps script is only emitted when the host provided a key; without it
/// the location picker stays on its loading placeholder.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let maps_script = use_context::<MapsApiKey>()
        .and_then(|key| key.0)
        .map(|key| view! { <script src=maps_script_url(&key) defer></script> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                {maps_script}
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the record catalog and the toast stack, then routes. Every
/// `/landlord/*` page renders inside `LandlordLayout`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Catalog::fixtures());
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/nyumba.css"/>
        <Title text="NyumbaYangu"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <ParentRoute path=StaticSegment("landlord") view=LandlordLayout>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("properties") view=PropertiesPage/>
                    <Route path=(StaticSegment("properties"), StaticSegment("new")) view=AddPropertyPage/>
                    <Route path=StaticSegment("verification") view=VerificationPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("inbox") view=InboxPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
