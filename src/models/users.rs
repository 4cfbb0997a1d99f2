use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::registry::Resource;
use crate::validation;

/// A registered user.
///
/// `email`, `login` and `name` are optional on the wire: an update payload
/// missing any of them is passed through as a no-op, and a create payload
/// missing `name` falls back to `login` (see `prepare`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    /// Serializes as `yyyy-MM-dd`.
    pub birthday: NaiveDate,
}

impl Resource for User {
    const KIND: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> crate::error::Result<()> {
        validation::validate_user(self)
    }

    fn is_partial(&self) -> bool {
        self.name.is_none() || self.email.is_none() || self.login.is_none()
    }

    fn prepare(&mut self) {
        if self.name.is_none() {
            self.name = self.login.clone();
        }
    }
}
