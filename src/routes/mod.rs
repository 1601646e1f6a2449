//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR pages, the compiled `/pkg` assets and
//! a health probe. There are no API routes; every page renders from fixtures
//! compiled into the client crate.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list};
use nyumba_client::app::{App, MapsApiKey, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// Load Leptos options from `[package.metadata.leptos]` (or `LEPTOS_*` env)
/// and build the full router.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be loaded.
pub fn app(config: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(router(conf.leptos_options, config))
}

/// Router for already-resolved Leptos options.
pub fn router(leptos_options: LeptosOptions, config: &HostConfig) -> Router {
    let routes = generate_route_list(App);
    let maps_key = MapsApiKey(config.maps_api_key.clone());
    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));

    let provide_maps_key = move || provide_context(maps_key.clone());

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, provide_maps_key.clone(), {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(file_and_error_handler_with_context(provide_maps_key, shell))
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
