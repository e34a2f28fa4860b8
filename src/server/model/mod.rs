//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Guild
//! snapshots are built from Serenity's cache by the bot, replication parameters and
//! reports flow through the replication engine, and templates are converted from
//! entity models at the repository boundary and to DTOs at the controller boundary.

pub mod guild;
pub mod replication;
pub mod template;
