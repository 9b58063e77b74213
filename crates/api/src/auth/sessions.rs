use std::collections::HashMap;
use std::sync::Arc;

use nftfy_core::session::{MemoryStorage, Session, SessionStore};
use tokio::sync::RwLock;

use super::token::{generate_session_token, hash_session_token};

/// One client's session storage.
pub type ClientStore = SessionStore<MemoryStorage>;

/// Session storage for every signed-in client, keyed by token hash.
///
/// Each client gets its own [`ClientStore`], the server-side counterpart of
/// that client's local storage. Thread-safe via interior `RwLock`; designed
/// to be wrapped in `Arc` and shared across the application.
pub struct SessionRegistry {
    clients: RwLock<HashMap<String, Arc<ClientStore>>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Create storage for a new client and write `session` into it.
    ///
    /// Returns `(plaintext_token, token_hash)`.
    pub async fn sign_in(&self, session: &Session) -> (String, String) {
        let (token, hash) = generate_session_token();
        let store = ClientStore::new(MemoryStorage::new());
        store.write(session);
        self.clients.write().await.insert(hash.clone(), Arc::new(store));
        (token, hash)
    }

    /// The storage addressed by `token`, if any.
    pub async fn store_for(&self, token: &str) -> Option<Arc<ClientStore>> {
        let hash = hash_session_token(token);
        self.clients.read().await.get(&hash).cloned()
    }

    /// Write `session` into the storage already addressed by `token`,
    /// replacing whatever was stored there.
    ///
    /// Returns `false` if the token is unknown; nothing is created then.
    pub async fn overwrite(&self, token: &str, session: &Session) -> bool {
        match self.store_for(token).await {
            Some(store) => {
                store.write(session);
                true
            }
            None => false,
        }
    }

    /// Read the session for `token`. Unknown tokens and unreadable records
    /// both come back as `None`.
    pub async fn read(&self, token: &str) -> Option<Session> {
        self.store_for(token).await?.read()
    }

    /// Clear the session for `token` and drop its storage.
    ///
    /// Returns `true` if the token was known.
    pub async fn sign_out(&self, token: &str) -> bool {
        let hash = hash_session_token(token);
        match self.clients.write().await.remove(&hash) {
            Some(store) => {
                store.clear();
                true
            }
            None => false,
        }
    }

    /// Number of clients currently holding storage.
    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }
}
