use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::registry::Resource;
use crate::validation;

/// A film in the catalog.
///
/// `id` is 0 until the registry assigns one on create. `name` and
/// `description` are optional because update payloads may omit them; an
/// update missing either is passed through as a no-op (see `Registry`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default)]
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Serializes as `yyyy-MM-dd`.
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration: i64,
}

impl Resource for Film {
    const KIND: &'static str = "film";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> crate::error::Result<()> {
        validation::validate_film(self)
    }

    fn is_partial(&self) -> bool {
        self.name.is_none() || self.description.is_none()
    }
}
