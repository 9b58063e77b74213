//! Opaque session tokens.
//!
//! Tokens are random UUIDs handed to the client once at login. The server
//! only keeps their SHA-256 hash, so a dump of server state does not yield
//! usable tokens.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash is kept server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
