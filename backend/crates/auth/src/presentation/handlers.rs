//! HTTP Handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use kernel::contract::user::UserDto;
use kernel::validation::ValidationErrors;

use crate::application::{CurrentUserUseCase, LoginUseCase, SignUpUseCase};
use crate::domain::token::{AuthResponse, TokenClaims, TokenIssuer};
use crate::domain::user_api::UserApi;
use crate::domain::verifier::SignatureVerifier;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, SignUpRequest};

/// Shared state for auth handlers
pub struct AuthAppState<U>
where
    U: UserApi + Send + Sync + 'static,
{
    pub verifier: Arc<dyn SignatureVerifier>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub user_api: Arc<U>,
}

impl<U> Clone for AuthAppState<U>
where
    U: UserApi + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            tokens: self.tokens.clone(),
            user_api: self.user_api.clone(),
        }
    }
}

fn rejected(rejection: JsonRejection) -> AuthError {
    AuthError::Validation(ValidationErrors(vec![rejection.body_text()]))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<U>(
    State(state): State<AuthAppState<U>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    U: UserApi + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(rejected)?;
    let input = req.validate()?;

    let use_case = SignUpUseCase::new(
        state.verifier.clone(),
        state.tokens.clone(),
        state.user_api.clone(),
    );
    let response = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<U>(
    State(state): State<AuthAppState<U>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<AuthResponse>>
where
    U: UserApi + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(rejected)?;
    let input = req.validate()?;

    let use_case = LoginUseCase::new(
        state.verifier.clone(),
        state.tokens.clone(),
        state.user_api.clone(),
    );
    let response = use_case.execute(input).await?;

    Ok(Json(response))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /user (bearer token required)
pub async fn current_user<U>(
    State(state): State<AuthAppState<U>>,
    Extension(claims): Extension<TokenClaims>,
) -> AuthResult<Json<UserDto>>
where
    U: UserApi + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.user_api.clone());
    let user = use_case.execute(&claims).await?;

    Ok(Json(user))
}
