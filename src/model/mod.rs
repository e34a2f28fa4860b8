//! Data transfer objects returned by the HTTP API.

pub mod api;
pub mod discord;
pub mod replication;
pub mod status;
pub mod template;
