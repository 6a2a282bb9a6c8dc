//! Auth Router

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::application::AuthConfig;
use crate::domain::user_api::UserApi;
use crate::error::AuthResult;
use crate::infra::{HttpUserApi, JwtTokenIssuer, SiweVerifier};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer;

/// Create the auth router backed by the HTTP user API
pub fn auth_router(config: &AuthConfig) -> AuthResult<Router> {
    let user_api = HttpUserApi::new(config.user_api_url.clone(), config.user_api_timeout)?;

    let state = AuthAppState {
        verifier: Arc::new(SiweVerifier::new(config.siwe_domain.clone())),
        tokens: Arc::new(JwtTokenIssuer::new(&config.jwt_secret, config.token_ttl)),
        user_api: Arc::new(user_api),
    };

    Ok(auth_router_generic(state))
}

/// Create an auth router for any user API implementation
pub fn auth_router_generic<U>(state: AuthAppState<U>) -> Router
where
    U: UserApi + Send + Sync + 'static,
{
    let protected = Router::new()
        .route("/user", get(handlers::current_user::<U>))
        .route_layer(from_fn_with_state(state.clone(), require_bearer::<U>));

    Router::new()
        .route("/signup", post(handlers::sign_up::<U>))
        .route("/login", post(handlers::login::<U>))
        .merge(protected)
        .with_state(state)
}
