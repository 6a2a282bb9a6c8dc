//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use kernel::contract::user::{CreateUserRequest, UserDto, UserLookup};
use kernel::validation::ValidationErrors;
use serde_json::{Value, json};

use crate::application::UserService;
use crate::domain::repository::UserStore;
use crate::error::{UserError, UserResult};
use crate::presentation::dto;

/// Shared state for user handlers
#[derive(Clone)]
pub struct UserAppState<S>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
}

fn rejected(reason: String) -> UserError {
    UserError::Validation(ValidationErrors(vec![reason]))
}

/// POST /user
pub async fn create_user<S>(
    State(state): State<UserAppState<S>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> UserResult<(StatusCode, Json<UserDto>)>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| rejected(e.body_text()))?;
    let command = dto::signup_command(req)?;

    let service = UserService::new(state.store.clone());
    let user = service.signup(command).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /user?id=..&address=..
pub async fn get_user<S>(
    State(state): State<UserAppState<S>>,
    query: Result<Query<UserLookup>, QueryRejection>,
) -> UserResult<Json<UserDto>>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let Query(lookup) = query.map_err(|e| rejected(e.body_text()))?;
    let criteria = dto::user_criteria(lookup)?;

    let service = UserService::new(state.store.clone());
    let user = service.find(&criteria).await?;

    Ok(Json(user.into()))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
