use crate::server::{
    error::replication::ReplicationError,
    model::replication::{CloneOptions, ReplicationReport},
    service::replication::{
        call::CallPolicy,
        driver::PhaseDriver,
        plan::RESET_PHASES,
        remote::{GuildDirectory, ProgressSink, RemoteApi},
    },
};

/// Wipes the structure of a guild.
pub struct ResetService<'a> {
    directory: &'a dyn GuildDirectory,
    remote: &'a dyn RemoteApi,
    policy: CallPolicy,
}

impl<'a> ResetService<'a> {
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

    /// Deletes every channel of a guild, then every role the bot can delete.
    ///
    /// Managed roles, the "everyone" role and roles the bot cannot edit are left in
    /// place. Failed deletions are logged and skipped.
    ///
    /// # Arguments
    /// - `guild_id` - ID of the guild to wipe
    /// - `progress` - Sink receiving human-readable progress messages
    ///
    /// # Returns
    /// - `Ok(ReplicationReport)` - Per-phase outcome of the reset
    /// - `Err(ReplicationError::GuildNotFound)` - Guild unknown to the bot
    pub async fn reset_guild(
        &self,
        guild_id: u64,
        progress: &dyn ProgressSink,
    ) -> Result<ReplicationReport, ReplicationError> {
        let Some(guild) = self.directory.lookup(guild_id) else {
            let err = ReplicationError::GuildNotFound(guild_id);
            tracing::warn!("Reset of guild {} rejected: {}", guild_id, err);
            progress.notify(&format!("Error: {}", err)).await;
            return Err(err);
        };

        tracing::info!("Resetting guild {} ({})", guild.name, guild.guild_id);
        progress.notify("Starting cleanup...").await;

        let options = CloneOptions::default();
        let mut driver = PhaseDriver::new(self.remote, self.policy, &guild, &guild, options);
        let mut report = ReplicationReport::new(guild.guild_id, guild.name.clone());

        for phase in RESET_PHASES.iter().filter(|phase| phase.is_enabled(&options)) {
            report.phases.push(driver.run_phase(phase.kind).await);
        }

        let failures = report.failure_count();
        if failures == 0 {
            progress.notify("Cleanup completed!").await;
        } else {
            tracing::warn!(
                "Reset of guild {} completed with {} failures",
                guild.guild_id,
                failures
            );
            progress
                .notify(&format!("Cleanup completed with {} failures.", failures))
                .await;
        }

        Ok(report)
    }
}
