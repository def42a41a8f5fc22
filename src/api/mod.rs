//! Thin REST layer mapping HTTP routes onto the board and task services.
//!
//! Every route under `/api` passes through [`require_auth`], which resolves
//! the bearer token to a [`CurrentUser`] before any handler runs. Handlers
//! translate request bodies into service calls and service errors into
//! [`ApiError`] responses; none of them touch the store directly.

mod auth;
mod dto;
mod error;
mod extract;
mod routes;
mod state;

pub use auth::{CurrentUser, require_auth};
pub use dto::{BoardResponse, TaskResponse, UserResponse};
pub use error::ApiError;
pub use state::AppState;

use axum::{Router, middleware::from_fn_with_state};

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::boards::router())
        .merge(routes::tasks::router())
        .layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(routes::health::router())
        .nest("/api", api)
        .with_state(state)
}
