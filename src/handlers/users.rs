//! User CRUD handlers
//!
//! Same thin-layer shape as the film handlers; the user registry additionally
//! defaults a missing `name` to `login` on create.

use axum::{Json, extract::State};

use crate::{error::Result, models::User, state::AppState};

/// GET /users
///
/// Lists all stored users, in no particular order.
///
/// # HTTP Status Codes
/// - `200 OK`: always
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    tracing::info!("user list requested");
    Json(state.users.list())
}

/// POST /users
///
/// Creates a user from the request body. The body's `id` is ignored; the
/// registry assigns a fresh one. A missing `name` is filled in from `login`.
///
/// # HTTP Status Codes
/// - `200 OK`: user stored, body is the stored entity with its new id
/// - `400 BAD_REQUEST`: first violated validation rule, as `{"error", "code"}`
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<User>> {
    tracing::info!("user create requested");
    let stored = state.users.create(user)?;
    tracing::info!(id = stored.id, "user created");
    Ok(Json(stored))
}

/// PUT /users
///
/// Replaces the stored user at the body's `id` with the body verbatim. A
/// payload missing `name`, `email` or `login` is passed through unchanged
/// without writing (see `Registry::update`).
///
/// # HTTP Status Codes
/// - `200 OK`: body is the result entity
/// - `404 NOT_FOUND`: no user with the supplied id
pub async fn update_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<User>> {
    tracing::info!(id = user.id, "user update requested");
    let result = state.users.update(user)?;
    tracing::info!(id = result.id, "user updated");
    Ok(Json(result))
}
