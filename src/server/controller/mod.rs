//! HTTP request handlers.
//!
//! Controllers are thin: they pull dependencies out of [`AppState`](crate::server::state::AppState),
//! call into services or the guild directory and convert domain models into DTOs.

pub mod status;
pub mod template;
