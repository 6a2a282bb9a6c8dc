//! User Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::domain::repository::UserStore;
use crate::infra::postgres::PgUserStore;
use crate::presentation::handlers::{self, UserAppState};

/// Create the user router with PostgreSQL storage
pub fn user_router(store: PgUserStore) -> Router {
    user_router_generic(store)
}

/// Create a user router for any store implementation
pub fn user_router_generic<S>(store: S) -> Router
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let state = UserAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route(
            "/user",
            get(handlers::get_user::<S>).post(handlers::create_user::<S>),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
