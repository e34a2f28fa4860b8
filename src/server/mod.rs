//! Guild replication backend.
//!
//! This module contains the Discord bot, the guild structure replication engine, the
//! guild template store and a small status HTTP API. The bot uses Serenity, the
//! template store uses SeaORM and the HTTP API uses Axum.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Replication engine and template orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Guild snapshots, replication parameters and reports
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, guild directory)
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum route configuration
//! - **Bot** (`bot/`) - Discord gateway client and Serenity-backed engine collaborators
//!
//! # Replication Flow
//!
//! 1. A caller resolves source and destination through a `GuildDirectory`
//! 2. `CloneService` checks preconditions and runs the clone phases in order
//! 3. Each phase issues create/delete calls through a `CallPolicy`
//! 4. Per-entity outcomes are collected into a `ReplicationReport`

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
