//! API Server Entry Point
//!
//! User persistence service. Uses `anyhow` for startup errors, but
//! application-level errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use platform::config::{HttpConfig, parsed_or, required};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user::{PgUserStore, user_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,user=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HttpConfig::from_env(DEFAULT_PORT)?;
    let lookup = |name: &str| env::var(name).ok();

    // Database connection
    let database_url = required(lookup, "DATABASE_URL")?;
    let max_connections = parsed_or(lookup, "DATABASE_MAX_CONNECTIONS", 5u32)?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

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
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let routes = user_router(PgUserStore::new(pool));
    let app = match config.prefix() {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    }
    .layer(TraceLayer::new_for_http())
    .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(env = ?config.env, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
