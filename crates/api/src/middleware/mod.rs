//! Session extractors and route guards.
//!
//! - [`session::AuthToken`] -- Requires a Bearer token, without checking it.
//! - [`session::CurrentSession`] -- The caller's session, if any. Never rejects.
//! - [`guard::RequireAdmin`] -- Admin shell guard.
//! - [`guard::RequireStartup`] -- Startup shell guard.

pub mod guard;
pub mod session;
