//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders the page, `/pkg` serves the compiled WASM/JS/CSS, and
//! everything else falls through to the static assets directory (project
//! thumbnails, résumé). The host keeps no state between requests.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full host router: SSR page, compiled bundle, static assets and health.
pub fn app(config: &ServerConfig) -> Router {
    let leptos_options = config.leptos.clone();
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    static_routes(&site_root, &config.assets_dir)
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http())
}

/// Health probe, compiled bundle and asset fallback.
pub(crate) fn static_routes(site_root: &Path, assets_dir: &Path) -> Router {
    let assets = ServeDir::new(assets_dir).append_index_html_on_directories(false);
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
