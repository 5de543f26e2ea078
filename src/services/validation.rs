//! Field validation for the user creation form.
//!
//! Pure functions only: no storage access, no logging. Every failing field
//! is reported, so the form can show all messages at once.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;

use crate::models::avatar::AvatarCatalog;
use crate::models::user::{User, UserDraft};

pub const MIN_USERNAME_CHARS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Avatar,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Avatar => f.write_str("avatar"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a draft against the form rules and turn it into a [`User`].
pub fn validate(draft: &UserDraft, catalog: &AvatarCatalog) -> Result<User, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if draft.username.chars().count() < MIN_USERNAME_CHARS {
        errors.push(ValidationError::new(
            Field::Username,
            format!("The name must be at least {MIN_USERNAME_CHARS} characters long."),
        ));
    }

    if draft.avatar.is_empty() {
        errors.push(ValidationError::new(Field::Avatar, "An avatar is required."));
    } else if !catalog.accepts(&draft.avatar) {
        errors.push(ValidationError::new(
            Field::Avatar,
            format!("Unknown avatar \"{}\".", draft.avatar),
        ));
    }

    if errors.is_empty() {
        Ok(User {
            username: draft.username.clone(),
            avatar: draft.avatar.clone(),
        })
    } else {
        Err(errors)
    }
}

/// First message reported for `field`, if any.
pub fn message_for(errors: &[ValidationError], field: Field) -> Option<&str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}
