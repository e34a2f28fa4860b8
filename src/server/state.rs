//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for the template store
//! - Guild directory backed by the bot's cache
//! - Discord mutation client and the call policy replication runs use
//! - Process start time for uptime reporting

use std::{sync::Arc, time::Instant};

use sea_orm::DatabaseConnection;

use crate::server::service::replication::{
    remote::{GuildDirectory, RemoteApi},
    CallPolicy, CloneService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle, the
/// collaborators are reference counted and the rest is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Resolves guilds the bot is a member of.
    pub directory: Arc<dyn GuildDirectory>,

    /// Issues role and channel mutations against Discord.
    pub remote: Arc<dyn RemoteApi>,

    /// Pacing and retry policy applied to every mutation of a replication run.
    pub policy: CallPolicy,

    /// When the process started serving.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `directory` - Guild directory, normally backed by the bot's cache
    /// - `remote` - Mutation client, normally backed by the bot's HTTP client
    /// - `policy` - Call policy from configuration
    ///
    /// # Returns
    /// - `AppState` - State with `started_at` set to now
    pub fn new(
        db: DatabaseConnection,
        directory: Arc<dyn GuildDirectory>,
        remote: Arc<dyn RemoteApi>,
        policy: CallPolicy,
    ) -> Self {
        Self {
            db,
            directory,
            remote,
            policy,
            started_at: Instant::now(),
        }
    }

    /// Clone service bound to this state's collaborators.
    pub fn clone_service(&self) -> CloneService<'_> {
        CloneService::new(self.directory.as_ref(), self.remote.as_ref(), self.policy)
    }
}
