//! Tumblr web frontend
//!
//! Server-rendered pages over the posts GraphQL API. Page data is prefetched
//! into a query cache, dehydrated into the page props and hydrated back into
//! the cache the page renders from.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod pages;

#[cfg(test)]
mod test_utils;


use adapters::GraphqlSdk;
use config::Config;
use domain::ports::PostsSdk;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sdk: Arc<dyn PostsSdk>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_version: Option<String>,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let api_version = match state.sdk.version().await {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::warn!("GraphQL API unreachable: {}", e);
            None
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        api_version,
    })
}

/// Build the router with every page route
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/dashboard", get(handlers::dashboard))
        .route("/health", get(health))
        // /login, /register, /terms, /privacy, /jobs and /support have no page yet
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tumblr_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tumblr web...");

    let config = Config::from_env();

    let sdk = GraphqlSdk::new(&config.graphql_url, config.graphql_token.as_deref())
        .context("Failed to build GraphQL client")?;
    tracing::info!("Using GraphQL API at {}", config.graphql_url);

    let state = AppState {
        sdk: Arc::new(sdk),
        config: config.clone(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
