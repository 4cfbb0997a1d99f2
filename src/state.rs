use crate::{
    models::{Film, User},
    registry::Registry,
};

/// Application state shared across all HTTP handlers
///
/// Holds one registry per entity kind. The registries are independent: film
/// and user ids are drawn from separate namespaces.
#[derive(Clone, Default)]
pub struct AppState {
    /// In-memory film store
    pub films: Registry<Film>,
    /// In-memory user store
    pub users: Registry<User>,
}

impl AppState {
    /// Create a new AppState with empty registries
    pub fn new() -> Self {
        Self {
            films: Registry::new(),
            users: Registry::new(),
        }
    }
}
