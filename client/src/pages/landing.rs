//! Public marketing page.
//!
//! DESIGN
//! ======
//! All page state sits in one `RwSignal<LandingState>`. The scroll spy is the
//! only browser listener; it is installed on mount, removed on cleanup and
//! writes the signal only when the highlighted section actually changes.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::auth_dialog::AuthDialog;
use crate::components::details_modal::DetailsModal;
use crate::components::error_panel::{ErrorPanel, load};
use crate::components::listing_card::ListingCard;
use crate::data::Catalog;
use crate::state::landing::{AuthTab, LandingState, carousel_offset};
use crate::util::dom;

const CAROUSEL_ID: &str = "carousel-track";

/// In-page anchors shown in the top navigation, in display order.
const NAV_LINKS: [(&str, &str); 4] = [
    ("how-it-works", "How It Works"),
    ("why-us", "Why Choose Us"),
    ("about-us", "About Us"),
    ("footer-contact", "Contact"),
];

const STEPS: [(&str, &str, &str); 4] = [
    ("✚", "Sign Up", "Register as a tenant or landlord in just 1 minute."),
    ("⌂", "Post or Browse", "List your property or find your perfect home."),
    ("✔", "Get Verified", "Our team verifies all listings and users for safety."),
    ("🤝", "Rent Safely", "Connect directly, no middlemen, no scams."),
];

const FEATURES: [(&str, &str, &str); 4] = [
    ("▦", "Property Management", "Easily list and manage all your rental properties in one place"),
    ("⛨", "Verified Listings", "Build trust with verified property documentation and landlord credentials"),
    ("☺", "Direct Tenant Contact", "Connect directly with potential tenants through our messaging system"),
    ("✔", "Easy Verification", "Quick and simple property verification process to get your listings live"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let landing = RwSignal::new(LandingState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::scroll_spy::{active_section, measure};

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let current = active_section(dom::scroll_y(), measure(dom::element_top));
            landing.maybe_update(|l| l.set_active_section(current));
        });
        on_cleanup(move || handle.remove());
    }

    let carousel = match load(catalog.listings.as_ref()) {
        Ok(listings) => listings
            .into_iter()
            .enumerate()
            .map(|(index, listing)| {
                let details = listing.clone();
                view! {
                    <ListingCard
                        listing=listing
                        favorite=Signal::derive(move || landing.with(|l| l.is_favorite(index)))
                        on_favorite=Callback::new(move |()| landing.update(|l| l.toggle_favorite(index)))
                        on_details=Callback::new(move |()| {
                            let listing = details.clone();
                            landing.update(|l| l.open_details(listing));
                        })
                    />
                }
            })
            .collect_view()
            .into_any(),
        Err(error) => view! { <ErrorPanel error=error/> }.into_any(),
    };

    let close_details = Callback::new(move |()| landing.update(LandingState::close_details));
    let nav_class = move |id: &'static str| landing.with(|l| l.active_section == id);

    view! {
        <div class="landing">
            <nav id="main-navbar" class="landing-nav">
                <div class="landing-nav__inner">
                    <a href="/" class="brand">
                        <span class="brand__icon">"⌂"</span>
                        "Nyumba"
                        <span class="brand__accent">"Yangu"</span>
                    </a>
                    <div class="landing-nav__links">
                        {NAV_LINKS
                            .iter()
                            .map(|&(id, label)| {
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="landing-nav__link"
                                        class:landing-nav__link--active=move || nav_class(id)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a href="/landlord/dashboard" class="landing-nav__link">
                            "Get Started"
                        </a>
                    </div>
                    <button
                        class="landing-nav__menu"
                        title="Menu"
                        on:click=move |_| landing.update(LandingState::toggle_mobile_menu)
                    >
                        "☰"
                    </button>
                </div>
                <div id="mobile-menu" class="landing-nav__mobile" class:is-open=move || landing.with(|l| l.mobile_menu_open)>
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| view! { <a href=format!("#{id}") class="landing-nav__link">{label}</a> })
                        .collect_view()}
                    <a href="/landlord/dashboard" class="landing-nav__link">
                        "Get Started"
                    </a>
                </div>
            </nav>

            <section class="hero">
                <div class="hero__panel">
                    <h1 class="hero__title">"🏡 Find a Home You Can Trust"</h1>
                    <p class="hero__lead">
                        "NyumbaYangu is a Kenyan rental platform built for students, professionals, and families. Agent-free, verified, and secure."
                    </p>
                    <form class="hero__search" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                        <input class="input" type="text" placeholder="Search by location, property type..."/>
                        <button type="submit" class="btn btn--highlight">"Search"</button>
                    </form>
                </div>
            </section>

            <section class="featured">
                <h2 class="section-title">"Featured Listings"</h2>
                <div id="carousel-container" class="carousel">
                    <button
                        id="carousel-prev"
                        class="carousel__arrow"
                        title="Previous"
                        on:click=move |_| dom::scroll_horizontally(CAROUSEL_ID, carousel_offset(-1))
                    >
                        "‹"
                    </button>
                    <div id=CAROUSEL_ID class="carousel__track">{carousel}</div>
                    <button
                        id="carousel-next"
                        class="carousel__arrow"
                        title="Next"
                        on:click=move |_| dom::scroll_horizontally(CAROUSEL_ID, carousel_offset(1))
                    >
                        "›"
                    </button>
                </div>
                <div class="featured__more">
                    <a href="/listings" class="btn btn--primary">"View All Listings"</a>
                </div>
            </section>

            {move || {
                landing
                    .with(|l| l.details.clone())
                    .map(|listing| view! { <DetailsModal listing=listing on_close=close_details/> })
            }}

            <Show when=move || landing.with(|l| l.auth.open)>
                <AuthDialog landing=landing/>
            </Show>

            <section id="how-it-works" class="steps">
                <h2 class="section-title">"How NyumbaYangu Works"</h2>
                <div class="steps__grid">
                    {STEPS
                        .iter()
                        .map(|&(icon, title, text)| {
                            view! {
                                <div class="card step">
                                    <span class="step__icon">{icon}</span>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="why-us" class="features">
                <h2 class="section-title">"Why Choose NyumbaYangu?"</h2>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, text)| {
                            view! {
                                <div class="card feature">
                                    <span class="feature__icon">{icon}</span>
                                    <div>
                                        <h3>{title}</h3>
                                        <p>{text}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="connect">
                <div class="card connect__card">
                    <div>
                        <h2 class="section-title">"Connecting Tenants & Landlords"</h2>
                        <p>
                            "NyumbaYangu brings together real people, tenants and property owners, making renting safe, easy, and direct for everyone in Kenya."
                        </p>
                    </div>
                    <img src="/symbolimage.png" alt="NyumbaYangu community" class="connect__image"/>
                </div>
            </section>

            <section id="cta" class="cta">
                <h2 class="section-title">"Ready to find your next home?"</h2>
                <p>"Join thousands of Kenyans who have found their perfect homes through NyumbaYangu."</p>
                <button class="btn btn--highlight btn--lg" on:click=move |_| landing.update(|l| l.auth.open(AuthTab::Tenant))>
                    "Get Started"
                </button>
                <p class="cta__note">"It's free and only takes 1 minute."</p>
            </section>

            <section id="about-us" class="about">
                <div class="about__text">
                    <h2 class="section-title">"About Us"</h2>
                    <p>
                        "NyumbaYangu is a Kenyan rental platform dedicated to connecting tenants and property owners directly, safely, and transparently. Our mission is to eliminate middlemen, scams, and hidden fees, making the rental process simple and trustworthy for students, professionals and families alike."
                    </p>
                    <p>
                        "We verify every listing and user, offer a secure in-app messaging system, and provide a beautiful, easy-to-use dashboard for both tenants and landlords. Join us and experience a new era of renting in Kenya!"
                    </p>
                </div>
                <div class="about__team">
                    <div class="about__avatars">
                        {(0..4).map(|_| view! { <span class="about__avatar" aria-label="Team Member">"☺"</span> }).collect_view()}
                    </div>
                    <span>"Meet our team"</span>
                </div>
            </section>

            <footer class="footer">
                <div class="footer__grid">
                    <div>
                        <div class="brand">
                            <span class="brand__icon">"⌂"</span>
                            "Nyumba"
                            <span class="brand__accent">"Yangu"</span>
                        </div>
                        <p>"Kenya's trusted rental platform connecting verified landlords with tenants directly."</p>
                    </div>
                    <div id="footer-contact">
                        <h3>"Contact Us"</h3>
                        <ul class="footer__contact">
                            <li>"✉ info@nyumbayangu.co.ke"</li>
                            <li>"☎ +254 700 123456"</li>
                        </ul>
                    </div>
                    <div>
                        <h3>"Follow Us"</h3>
                        <div class="footer__social">
                            <a href="#" aria-label="Facebook">"f"</a>
                            <a href="#" aria-label="Twitter">"t"</a>
                            <a href="#" aria-label="Instagram">"i"</a>
                            <a href="#" aria-label="LinkedIn">"in"</a>
                        </div>
                    </div>
                </div>
                <p class="footer__legal">"© 2025 NyumbaYangu. All rights reserved."</p>
            </footer>
        </div>
    }
}
