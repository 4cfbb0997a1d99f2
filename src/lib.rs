pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod state;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use registry::{Registry, Resource};
pub use state::AppState;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}

/// Build the application router.
///
/// Shared between the binary and the integration test harness so both serve
/// the exact same surface.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/films",
            get(handlers::list_films)
                .post(handlers::create_film)
                .put(handlers::update_film),
        )
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .put(handlers::update_user),
        )
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
