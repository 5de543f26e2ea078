//! Persistence for user records.
//!
//! DESIGN
//! ======
//! The store is one JSON array under a single key. Raw key/value access goes
//! through [`StorageBackend`] so the browser's `localStorage` can be swapped
//! for [`MemoryStorage`] in tests or when storage is disabled. Nothing is
//! cached: every `load` reads the key again.
//!
//! ERROR HANDLING
//! ==============
//! JS exceptions from `localStorage` are mapped to [`StoreError`]. A payload
//! that no longer parses is reported as `Corrupt` and is never overwritten.
//! Appends go through untyped JSON entries so records written by anything
//! else survive unchanged; only the outer array shape is trusted.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::user::User;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored users are corrupt: {0}")]
    Corrupt(serde_json::Error),
    #[error("users could not be encoded: {0}")]
    Encode(serde_json::Error),
    #[error("storage quota exceeded")]
    Quota,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    fn from_js(err: &JsValue) -> Self {
        match err.dyn_ref::<web_sys::DomException>() {
            Some(dom) if dom.name() == "QuotaExceededError" => Self::Quota,
            Some(dom) => Self::Unavailable(dom.message()),
            None => Self::Unavailable(format!("{err:?}")),
        }
    }
}

/// Synchronous string key/value storage.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

// =============================================================================
// BACKENDS
// =============================================================================

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::from_js(&e))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|e| StoreError::from_js(&e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::from_js(&e))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key` with a raw payload.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser storage when available, otherwise an in-memory stand-in.
pub fn open_backend() -> Rc<dyn StorageBackend> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("localStorage unavailable, users will not survive reload: {e}");
            Rc::new(MemoryStorage::new())
        }
    }
}

// =============================================================================
// USER STORE
// =============================================================================

pub struct UserStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> UserStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Raw payload currently under the key.
    pub fn raw(&self) -> Result<Option<String>, StoreError> {
        self.backend.get_item(&self.key)
    }

    /// Payload under the key, with a missing or blank value read as `[]`.
    fn payload(&self) -> Result<Option<String>, StoreError> {
        Ok(self.raw()?.filter(|raw| !raw.trim().is_empty()))
    }

    /// All stored users in insertion order. A missing key is an empty store.
    pub fn load(&self) -> Result<Vec<User>, StoreError> {
        match self.payload()? {
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the key with `users`.
    pub fn save(&self, users: &[User]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(users).map_err(StoreError::Encode)?;
        self.backend.set_item(&self.key, &payload)
    }

    /// Stored entries as untyped JSON. Only the outer array is required;
    /// entries keep whatever fields they were written with.
    pub fn load_records(&self) -> Result<Vec<Value>, StoreError> {
        match self.payload()? {
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_records(&self, records: &[Value]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(records).map_err(StoreError::Encode)?;
        self.backend.set_item(&self.key, &payload)
    }
}

/// Exact, case-sensitive match on each entry's `username` string.
/// Entries without one never match.
pub fn username_taken(records: &[Value], username: &str) -> bool {
    records
        .iter()
        .any(|r| r.get("username").and_then(Value::as_str) == Some(username))
}
