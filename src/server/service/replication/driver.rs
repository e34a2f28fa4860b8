use crate::server::{
    model::{
        guild::{ChannelKind, ChannelSnapshot, GuildSnapshot},
        replication::{CloneOptions, CreateChannelParam, PhaseKind, PhaseReport},
    },
    service::replication::{
        call::CallPolicy,
        plan,
        remap::IdRemapper,
        remote::RemoteApi,
    },
};

/// Executes the phases of one replication run against a destination guild.
///
/// Holds the state shared across phases of a run, most importantly the
/// [`IdRemapper`] which the role and category phases fill in and the channel phases
/// read from. A driver is built per run and dropped with it.
pub(crate) struct PhaseDriver<'a> {
    remote: &'a dyn RemoteApi,
    policy: CallPolicy,
    source: &'a GuildSnapshot,
    destination: &'a GuildSnapshot,
    options: CloneOptions,
    remapper: IdRemapper,
}

impl<'a> PhaseDriver<'a> {
    /// Creates a driver for a run from `source` into `destination`.
    ///
    /// The remapper is seeded with the guild ID pair before any phase runs.
    pub(crate) fn new(
        remote: &'a dyn RemoteApi,
        policy: CallPolicy,
        source: &'a GuildSnapshot,
        destination: &'a GuildSnapshot,
        options: CloneOptions,
    ) -> Self {
        Self {
            remote,
            policy,
            source,
            destination,
            options,
            remapper: IdRemapper::seeded(source.guild_id, destination.guild_id),
        }
    }

    pub(crate) fn remapper(&self) -> &IdRemapper {
        &self.remapper
    }

    /// Runs every entity call of one phase, recording each outcome.
    ///
    /// A failed call is logged and recorded, never propagated; the phase always runs
    /// to the end of its entity list.
    pub(crate) async fn run_phase(&mut self, kind: PhaseKind) -> PhaseReport {
        tracing::info!(
            "{} (guild {})",
            kind.announcement(),
            self.destination.guild_id
        );

        let mut report = PhaseReport::new(kind);

        match kind {
            PhaseKind::CreateRoles => self.create_roles(&mut report).await,
            PhaseKind::DeleteChannels => self.delete_channels(&mut report).await,
            PhaseKind::CreateCategories => self.create_categories(&mut report).await,
            PhaseKind::CreateTextChannels => {
                self.create_nested_channels(ChannelKind::Text, &mut report)
                    .await
            }
            PhaseKind::CreateVoiceChannels => {
                self.create_nested_channels(ChannelKind::Voice, &mut report)
                    .await
            }
            PhaseKind::DeleteRoles => self.delete_roles(&mut report).await,
        }

        report
    }

    async fn create_roles(&mut self, report: &mut PhaseReport) {
        let remote = self.remote;
        let guild_id = self.destination.guild_id;

        for role in plan::roles_to_create(self.source) {
            let param = plan::role_param(role, &self.options);

            match self
                .policy
                .run(move || remote.create_role(guild_id, param.clone()))
                .await
            {
                Ok(created) => {
                    self.remapper.set(role.role_id, created.role_id);
                    report.record_success(&role.name);
                }
                Err(err) => {
                    tracing::error!(
                        "Failed to create role {} in guild {}: {}",
                        role.name,
                        guild_id,
                        err
                    );
                    report.record_failure(&role.name, &err);
                }
            }
        }
    }

    async fn delete_channels(&mut self, report: &mut PhaseReport) {
        let remote = self.remote;

        for channel in &self.destination.channels {
            let channel_id = channel.channel_id;

            match self.policy.run(move || remote.delete_channel(channel_id)).await {
                Ok(()) => report.record_success(&channel.name),
                Err(err) => {
                    tracing::error!(
                        "Failed to delete channel {} in guild {}: {}",
                        channel.name,
                        self.destination.guild_id,
                        err
                    );
                    report.record_failure(&channel.name, &err);
                }
            }
        }
    }

    async fn create_categories(&mut self, report: &mut PhaseReport) {
        for category in plan::categories_to_create(self.source) {
            let overwrites = plan::overwrites_for(category, &self.options, &self.remapper);
            let param = plan::category_param(category, overwrites);

            if let Some(created) = self.create_channel(category, param, report).await {
                self.remapper.set(category.channel_id, created.channel_id);
            }
        }
    }

    async fn create_nested_channels(&mut self, kind: ChannelKind, report: &mut PhaseReport) {
        for channel in plan::nested_channels_to_create(self.source, kind) {
            let parent_id = channel
                .parent_id
                .and_then(|parent_id| self.remapper.get(parent_id));

            if parent_id.is_none() {
                tracing::warn!(
                    "Parent category of channel {} was not recreated, creating it without a parent",
                    channel.name
                );
            }

            let overwrites = plan::overwrites_for(channel, &self.options, &self.remapper);
            let param = match kind {
                ChannelKind::Voice => plan::voice_param(
                    channel,
                    parent_id,
                    overwrites,
                    self.destination.max_bitrate,
                ),
                _ => plan::text_param(channel, parent_id, overwrites),
            };

            self.create_channel(channel, param, report).await;
        }
    }

    /// Creates one channel, recording the outcome under the source channel's name.
    async fn create_channel(
        &self,
        source: &ChannelSnapshot,
        param: CreateChannelParam,
        report: &mut PhaseReport,
    ) -> Option<ChannelSnapshot> {
        let remote = self.remote;
        let guild_id = self.destination.guild_id;

        match self
            .policy
            .run(move || remote.create_channel(guild_id, param.clone()))
            .await
        {
            Ok(created) => {
                report.record_success(&source.name);
                Some(created)
            }
            Err(err) => {
                tracing::error!(
                    "Failed to create channel {} in guild {}: {}",
                    source.name,
                    guild_id,
                    err
                );
                report.record_failure(&source.name, &err);
                None
            }
        }
    }

    async fn delete_roles(&mut self, report: &mut PhaseReport) {
        let remote = self.remote;
        let guild_id = self.destination.guild_id;

        for role in plan::roles_to_delete(self.destination) {
            let role_id = role.role_id;

            match self
                .policy
                .run(move || remote.delete_role(guild_id, role_id))
                .await
            {
                Ok(()) => report.record_success(&role.name),
                Err(err) => {
                    tracing::error!(
                        "Failed to delete role {} in guild {}: {}",
                        role.name,
                        guild_id,
                        err
                    );
                    report.record_failure(&role.name, &err);
                }
            }
        }
    }
}
