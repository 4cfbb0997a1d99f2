//! Create-time validation rule chains.
//!
//! Each entity has a fixed, ordered list of rules evaluated with early
//! returns, so only the first violated rule is ever reported. The chains are
//! pure: they never touch storage and retain no state between calls.

use chrono::{NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::models::{Film, User};

/// Release dates before the first public film screening are rejected.
const FIRST_FILM_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
    Some(date) => date,
    None => unreachable!(),
};

/// Maximum film description length, in characters.
const MAX_DESCRIPTION_LEN: usize = 200;

/// Validates a film create payload.
///
/// Rules in order: non-blank name, description length, release date floor,
/// non-negative duration. A missing name or description fails the same rule
/// a blank one would.
pub fn validate_film(film: &Film) -> Result<()> {
    if film.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        return Err(Error::Validation("Film name cannot be empty".to_string()));
    }

    let description = film.description.as_deref().unwrap_or("");
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(Error::Validation(format!(
            "Film description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }

    if film.release_date < FIRST_FILM_DATE {
        return Err(Error::Validation(
            "Film release date cannot be before 1895-12-28".to_string(),
        ));
    }

    if film.duration < 0 {
        return Err(Error::Validation(
            "Film duration cannot be negative".to_string(),
        ));
    }

    Ok(())
}

/// Validates a user create payload.
///
/// Rules in order: email present and contains `@`, login present with no
/// spaces, birthday not in the future relative to the server clock.
pub fn validate_user(user: &User) -> Result<()> {
    let email = user.email.as_deref().unwrap_or("");
    if email.trim().is_empty() || !email.contains('@') {
        return Err(Error::Validation(
            "Email cannot be blank and must contain @".to_string(),
        ));
    }

    let login = user.login.as_deref().unwrap_or("");
    if login.is_empty() || login.contains(' ') {
        return Err(Error::Validation(
            "Login cannot be empty or contain spaces".to_string(),
        ));
    }

    if user.birthday > Utc::now().date_naive() {
        return Err(Error::Validation(
            "Birthday cannot be in the future".to_string(),
        ));
    }

    Ok(())
}
