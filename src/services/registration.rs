//! User creation: validate, check for a duplicate name, append, write back.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::models::avatar::AvatarCatalog;
use crate::models::user::{User, UserDraft};
use crate::services::store::{username_taken, StorageBackend, StoreError, UserStore};
use crate::services::validation::{validate, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid input ({} field errors)", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error("user already exists: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl SubmitError {
    /// Message suitable for the form's notice banner.
    pub fn notice(&self) -> String {
        match self {
            Self::Invalid(_) => "Please fix the highlighted fields.".to_string(),
            Self::Duplicate(name) => format!("The user \"{name}\" already exists."),
            Self::Storage(StoreError::Quota) => {
                "Browser storage is full; the user was not saved.".to_string()
            }
            Self::Storage(StoreError::Corrupt(_)) => {
                "Saved users could not be read; nothing was changed.".to_string()
            }
            Self::Storage(StoreError::Encode(_)) => {
                "The user could not be saved.".to_string()
            }
            Self::Storage(StoreError::Unavailable(_)) => {
                "Browser storage is unavailable; the user was not saved.".to_string()
            }
        }
    }
}

/// Append an already-validated user unless the name is taken.
///
/// The store is re-read on every call and existing entries are written back
/// untouched. On `Duplicate` nothing is written.
pub fn register<B: StorageBackend>(store: &UserStore<B>, user: User) -> Result<User, SubmitError> {
    let mut records = store.load_records()?;
    if username_taken(&records, &user.username) {
        return Err(SubmitError::Duplicate(user.username));
    }
    records.push(serde_json::to_value(&user).map_err(StoreError::Encode)?);
    store.save_records(&records)?;
    Ok(user)
}

/// Full form submission. `Ok` means the form may close.
pub fn submit<B: StorageBackend>(
    draft: &UserDraft,
    catalog: &AvatarCatalog,
    store: &UserStore<B>,
) -> Result<User, SubmitError> {
    let user = validate(draft, catalog).map_err(SubmitError::Invalid)?;
    match register(store, user) {
        Ok(user) => {
            log::debug!("registered user {}", user.username);
            Ok(user)
        }
        Err(e @ SubmitError::Duplicate(_)) => {
            log::warn!("{e}");
            Err(e)
        }
        Err(e) => {
            log::error!("user registration failed: {e}");
            Err(e)
        }
    }
}
