//! Session tokens and the per-client session registry.
//!
//! - [`token`] -- opaque session token generation and hashing.
//! - [`sessions`] -- token-addressed session storage, one store per client.

pub mod sessions;
pub mod token;
