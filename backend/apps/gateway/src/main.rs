//! Gateway Server Entry Point
//!
//! Public auth surface (`/auth/signup`, `/auth/login`, `/auth/user`).
//! Uses `anyhow` for startup errors, but application-level errors should
//! use `kernel::error::AppError`.

use auth::{AuthConfig, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::config::HttpConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HttpConfig::from_env(DEFAULT_PORT)?;
    let auth_config = AuthConfig::from_env(config.env)?;

    if config.env.is_local() && std::env::var("JWT_SECRET").is_err() {
        tracing::warn!("JWT_SECRET not set, using a random secret; tokens will not survive a restart");
    }
    tracing::info!(config = ?auth_config, "Auth configured");

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let routes = Router::new().nest("/auth", auth_router(&auth_config)?);
    let app = match config.prefix() {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    }
    .layer(TraceLayer::new_for_http())
    .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(env = ?config.env, "Listening on {}", addr);
    if let Some(base_url) = &config.base_url {
        tracing::info!("Gateway available at {}", base_url);
    }

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
