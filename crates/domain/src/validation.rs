// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a campaign title.
///
/// Titles must be non-empty after trimming and at most 200 characters.
///
/// # Errors
///
/// Returns `DomainError::InvalidTitle` if the title is empty or too long.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    let trimmed: &str = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title must not be empty",
        )));
    }
    if trimmed.chars().count() > 200 {
        return Err(DomainError::InvalidTitle(String::from(
            "Title must be at most 200 characters",
        )));
    }
    Ok(())
}

/// Validates an actor identifier.
///
/// Actors are display names (or the literal `System`) and must be
/// non-empty after trimming.
///
/// # Errors
///
/// Returns `DomainError::InvalidActor` if the actor is empty.
pub fn validate_actor(actor: &str) -> Result<(), DomainError> {
    if actor.trim().is_empty() {
        return Err(DomainError::InvalidActor(String::from(
            "Actor must not be empty",
        )));
    }
    Ok(())
}
