//! Domain logic for the NFTfy marketplace builder.
//!
//! Nothing in this crate knows about HTTP. The API crate composes these
//! pieces behind axum handlers and extractors.

pub mod credentials;
pub mod error;
pub mod navigation;
pub mod roles;
pub mod session;
pub mod submit;
pub mod wizard;
