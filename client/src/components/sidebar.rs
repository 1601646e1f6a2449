//! Collapsible landlord navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `LandlordLayout`; the highlighted entry follows the router
//! location, so nested pages never need to report where they are.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::sidebar::{NAV_ITEMS, SidebarState, active_nav_item};

#[component]
pub fn LandlordSidebar() -> impl IntoView {
    let sidebar = RwSignal::new(SidebarState::default());
    let location = use_location();
    let navigate = use_navigate();

    let collapsed = move || sidebar.with(|s| s.collapsed);
    let active_path = Memo::new(move |_| location.pathname.with(|path| active_nav_item(path).map(|item| item.path)));

    let on_logout = move |_: leptos::ev::MouseEvent| {
        log::info!("landlord logout");
        navigate("/", NavigateOptions::default());
    };

    view! {
        <button class="sidebar-toggle" on:click=move |_| sidebar.update(SidebarState::toggle) title="Toggle navigation">
            {move || if collapsed() { "☰" } else { "✕" }}
        </button>

        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__brand">{move || sidebar.get().brand()}</div>
            <nav class="sidebar__nav">
                <ul>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let path = item.path;
                            view! {
                                <li>
                                    <a
                                        href=path
                                        class="sidebar__link"
                                        class:sidebar__link--active=move || active_path.get() == Some(path)
                                        title=item.title
                                    >
                                        <span class="sidebar__icon">{item.icon}</span>
                                        <Show when=move || !collapsed()>
                                            <span>{item.title}</span>
                                        </Show>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <button class="sidebar__logout" on:click=on_logout>
                <span class="sidebar__icon">"⎋"</span>
                <Show when=move || !collapsed()>
                    <span>"Logout"</span>
                </Show>
            </button>
        </aside>

        <Show when=move || !collapsed()>
            <div class="sidebar-overlay" on:click=move |_| sidebar.update(SidebarState::collapse)></div>
        </Show>
    }
}
