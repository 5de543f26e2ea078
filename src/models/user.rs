use serde::{Deserialize, Serialize};

use super::avatar::INITIALS_AVATAR;

/// A persisted user record. This is exactly what lands in the store array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub avatar: String,
}

/// Unvalidated form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub avatar: String,
}

impl UserDraft {
    pub fn new(username: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar: avatar.into(),
        }
    }
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            avatar: String::from(INITIALS_AVATAR), // initials fallback
        }
    }
}
