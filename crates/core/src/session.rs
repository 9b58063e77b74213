//! Persisted session record.
//!
//! A client's identity claim lives under a single well-known key in that
//! client's [`SessionStorage`]. Reads fail closed: a missing key, a value
//! that does not parse, or an unknown role all read back as "no session".

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Storage key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "user";

/// Who is signed in, and as what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
}

/// Minimal string key/value storage, the shape of a browser's local storage.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// Process-local [`SessionStorage`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }
}

/// Reads and writes the [`Session`] record in a [`SessionStorage`].
#[derive(Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist `session`, replacing whatever was stored before.
    pub fn write(&self, session: &Session) {
        // A struct of a string and a unit enum always serializes.
        let value = serde_json::to_string(session).unwrap_or_default();
        self.storage.set(SESSION_KEY, value);
    }

    /// The stored session, or `None` if absent or unreadable.
    pub fn read(&self) -> Option<Session> {
        let raw = self.storage.get(SESSION_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_KEY);
    }

    /// Direct access to the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
