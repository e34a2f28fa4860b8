//! Service layer for business logic and orchestration.
//!
//! Services sit between the callers (bot, controllers) and the data layer:
//!
//! - **replication** - The guild structure replication engine (clone and reset)
//! - **template** - Capture and replay of stored guild templates

pub mod replication;
pub mod template;
