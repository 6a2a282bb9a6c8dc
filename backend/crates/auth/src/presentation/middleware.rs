//! Bearer Token Middleware

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;

use crate::domain::user_api::UserApi;
use crate::error::{AuthError, AuthResult};
use crate::presentation::handlers::AuthAppState;

/// Verify the `Authorization: Bearer` token and attach its claims
///
/// A missing header, a wrong scheme, a bad signature and an expired token all
/// answer 401 before the handler runs.
pub async fn require_bearer<U>(
    State(state): State<AuthAppState<U>>,
    mut req: Request,
    next: Next,
) -> AuthResult<Response>
where
    U: UserApi + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers())?;
    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Bearer token rejected");
        AuthError::Unauthorized
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
