#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::rc::Rc;

use crate::models::avatar::AvatarCatalog;

/// localStorage key holding the JSON array of users.
pub const STORAGE_KEY: &str = "users";

const AVATARS_JSON: &str = include_str!("../assets/avatars.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid avatar catalog: {0}")]
    Avatars(#[from] serde_json::Error),
}

/// Startup configuration shared with components through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub avatars: Rc<AvatarCatalog>,
}

impl AppConfig {
    pub fn from_parts(storage_key: &str, avatars_json: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            storage_key: storage_key.to_string(),
            avatars: Rc::new(AvatarCatalog::from_json(avatars_json)?),
        })
    }

    /// Embedded defaults. A broken avatar asset leaves only the initials option.
    pub fn load() -> Self {
        Self::from_parts(STORAGE_KEY, AVATARS_JSON).unwrap_or_else(|e| {
            log::error!("{e}");
            Self {
                storage_key: STORAGE_KEY.to_string(),
                avatars: Rc::new(AvatarCatalog::default()),
            }
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}
