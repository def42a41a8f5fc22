//! Bearer-token authentication middleware.

use super::{ApiError, AppState};
use crate::identity::domain::UserId;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// The authenticated caller, inserted as a request extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

/// Rejects requests without a recognised token and records the caller.
///
/// Accepts `Authorization: Bearer <token>` and the `Token <token>` form.
///
/// # Errors
///
/// Returns [`ApiError::Unauthenticated`] when the header is absent,
/// malformed, or names an unknown token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or(ApiError::Unauthenticated)?;
    let user = state
        .identity()
        .authenticate(&token)
        .await?
        .ok_or(ApiError::Unauthenticated)?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, rest) = value.trim().split_once(' ')?;
    let token = rest.trim();
    let known_scheme = scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token");
    (known_scheme && !token.is_empty()).then(|| token.to_owned())
}
