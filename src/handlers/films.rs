//! Film CRUD handlers
//!
//! Handlers follow the thin-layer pattern: they log the request, delegate to
//! the film registry, and return responses. All id assignment, validation and
//! update semantics live in the registry.

use axum::{Json, extract::State};

use crate::{error::Result, models::Film, state::AppState};

/// GET /films
///
/// Lists all stored films, in no particular order.
///
/// # HTTP Status Codes
/// - `200 OK`: always
pub async fn list_films(State(state): State<AppState>) -> Json<Vec<Film>> {
    tracing::info!("film list requested");
    Json(state.films.list())
}

/// POST /films
///
/// Creates a film from the request body. The body's `id` is ignored; the
/// registry assigns a fresh one.
///
/// # HTTP Status Codes
/// - `200 OK`: film stored, body is the stored entity with its new id
/// - `400 BAD_REQUEST`: first violated validation rule, as `{"error", "code"}`
pub async fn create_film(
    State(state): State<AppState>,
    Json(film): Json<Film>,
) -> Result<Json<Film>> {
    tracing::info!("film create requested");
    let stored = state.films.create(film)?;
    tracing::info!(id = stored.id, "film created");
    Ok(Json(stored))
}

/// PUT /films
///
/// Replaces the stored film at the body's `id` with the body verbatim. A
/// payload missing `name` or `description` is passed through unchanged
/// without writing (see `Registry::update`).
///
/// # HTTP Status Codes
/// - `200 OK`: body is the result entity
/// - `404 NOT_FOUND`: no film with the supplied id
pub async fn update_film(
    State(state): State<AppState>,
    Json(film): Json<Film>,
) -> Result<Json<Film>> {
    tracing::info!(id = film.id, "film update requested");
    let result = state.films.update(film)?;
    tracing::info!(id = result.id, "film updated");
    Ok(Json(result))
}
