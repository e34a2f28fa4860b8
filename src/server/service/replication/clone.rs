use crate::server::{
    error::replication::ReplicationError,
    model::{
        guild::GuildSnapshot,
        replication::{CloneOptions, ReplicationReport},
    },
    service::replication::{
        call::CallPolicy,
        driver::PhaseDriver,
        plan::CLONE_PHASES,
        remote::{GuildDirectory, ProgressSink, RemoteApi},
    },
};

/// Replicates the structure of a source guild onto a destination guild.
pub struct CloneService<'a> {
    directory: &'a dyn GuildDirectory,
    remote: &'a dyn RemoteApi,
    policy: CallPolicy,
}

impl<'a> CloneService<'a> {
    /// Creates a new CloneService instance.
    ///
    /// # Arguments
    /// - `directory` - Resolves destination guild IDs to snapshots
    /// - `remote` - Client issuing role and channel mutations
    /// - `policy` - Pacing and retry policy applied to every mutation
    ///
    /// # Returns
    /// - `CloneService` - New service instance
    pub fn new(
        directory: &'a dyn GuildDirectory,
        remote: &'a dyn RemoteApi,
        policy: CallPolicy,
    ) -> Self {
        Self {
            directory,
            remote,
            policy,
        }
    }

    /// Clones the roles and channel hierarchy of `source` onto `destination_id`.
    ///
    /// Fails before issuing any mutation when the destination is unknown or the bot
    /// lacks Administrator there; the failure is also sent to `progress`. Otherwise
    /// every enabled phase runs in order: roles, wipe of the destination's channels,
    /// categories, text channels, voice channels. Each phase is announced on
    /// `progress` before it starts, followed by a terminal message naming the
    /// destination. Failed entity calls are logged and recorded in the returned
    /// report and never abort the run.
    ///
    /// # Arguments
    /// - `source` - Snapshot of the guild to replicate, never mutated
    /// - `destination_id` - ID of the guild to replicate onto
    /// - `options` - Toggles selecting roles, channels and permissions
    /// - `progress` - Sink receiving human-readable progress messages
    ///
    /// # Returns
    /// - `Ok(ReplicationReport)` - Per-phase outcome of the run
    /// - `Err(ReplicationError::DestinationNotFound)` - Destination unknown to the bot
    /// - `Err(ReplicationError::InsufficientPermission)` - Bot is not an administrator
    pub async fn clone_guild(
        &self,
        source: &GuildSnapshot,
        destination_id: u64,
        options: CloneOptions,
        progress: &dyn ProgressSink,
    ) -> Result<ReplicationReport, ReplicationError> {
        let destination = match self.resolve_destination(destination_id) {
            Ok(destination) => destination,
            Err(err) => {
                tracing::warn!(
                    "Clone of guild {} into {} rejected: {}",
                    source.guild_id,
                    destination_id,
                    err
                );
                progress.notify(&format!("Error: {}", err)).await;
                return Err(err);
            }
        };

        tracing::info!(
            "Cloning guild {} ({}) into {} ({})",
            source.name,
            source.guild_id,
            destination.name,
            destination.guild_id
        );
        progress.notify("Starting clone process...").await;

        let mut driver = PhaseDriver::new(self.remote, self.policy, source, &destination, options);
        let mut report = ReplicationReport::new(destination.guild_id, destination.name.clone());

        for phase in CLONE_PHASES.iter().filter(|phase| phase.is_enabled(&options)) {
            progress.notify(phase.kind.announcement()).await;
            report.phases.push(driver.run_phase(phase.kind).await);
        }

        let failures = report.failure_count();
        if failures == 0 {
            tracing::info!("Clone into guild {} completed", destination.guild_id);
            progress
                .notify(&format!(
                    "Clone completed successfully!\nServer: {}",
                    destination.name
                ))
                .await;
        } else {
            tracing::warn!(
                "Clone into guild {} completed with {} failures",
                destination.guild_id,
                failures
            );
            progress
                .notify(&format!(
                    "Clone completed with {} failures.\nServer: {}",
                    failures, destination.name
                ))
                .await;
        }

        Ok(report)
    }

    fn resolve_destination(&self, destination_id: u64) -> Result<GuildSnapshot, ReplicationError> {
        let destination = self
            .directory
            .lookup(destination_id)
            .ok_or(ReplicationError::DestinationNotFound(destination_id))?;

        if !destination.administrator {
            return Err(ReplicationError::InsufficientPermission {
                guild_id: destination.guild_id,
                guild_name: destination.name,
            });
        }

        Ok(destination)
    }
}
