//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders and serves the web client. Identity, profiles,
//! contracts and clients live in managed services the browser reaches
//! directly; nothing here proxies them. Server-side rendering runs without a
//! session, so gated pages render their loading placeholder until the
//! browser hydrates and resolves the user.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Non-Leptos endpoints plus the request-level layers.
pub fn api_routes(config: &ServerConfig) -> Router {
    let router = Router::new().route("/healthz", get(health::healthz)).layer(TraceLayer::new_for_http());

    if config.cors_allow_any {
        let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// Leptos SSR frontend: API routes + SSR routes + `/pkg` assets.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section or
/// `LEPTOS_*` environment).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS emitted by the client build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}
