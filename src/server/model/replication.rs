//! Parameter and result models for guild replication.
//!
//! `CreateRoleParam`/`CreateChannelParam` describe a single create call against the
//! destination guild. `PhaseReport` and `ReplicationReport` accumulate the outcome of
//! every per-entity call so partial failures can be inspected by callers instead of
//! only appearing in logs.

use crate::{
    model::{
        replication::{EntityFailureDto, ReplicationReportDto},
        template::ApplyTemplateDto,
    },
    server::{
        error::replication::RemoteError,
        model::guild::{ChannelKind, PermissionOverwriteParam},
    },
};

/// Feature toggles for a clone run. All enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneOptions {
    /// Create the source's non-managed roles in the destination.
    pub clone_roles: bool,
    /// Wipe the destination's channels and recreate the source's categories and channels.
    pub clone_channels: bool,
    /// Copy role permission bitmasks and channel permission overwrites.
    pub clone_permissions: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            clone_roles: true,
            clone_channels: true,
            clone_permissions: true,
        }
    }
}

impl CloneOptions {
    /// Reads the toggles of a template apply request.
    pub fn from_dto(dto: &ApplyTemplateDto) -> Self {
        Self {
            clone_roles: dto.clone_roles,
            clone_channels: dto.clone_channels,
            clone_permissions: dto.clone_permissions,
        }
    }
}

/// Parameters for creating a role.
///
/// There is no position: Discord places each new role directly above "everyone",
/// so the hierarchy follows creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleParam {
    pub name: String,
    pub color: u32,
    pub hoist: bool,
    pub permissions: u64,
    pub mentionable: bool,
}

/// Parameters for creating a channel.
///
/// Kind-specific fields are `None` when they do not apply to `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateChannelParam {
    pub name: String,
    pub kind: ChannelKind,
    pub parent_id: Option<u64>,
    pub position: u16,
    pub topic: Option<String>,
    pub nsfw: bool,
    pub rate_limit_per_user: Option<u16>,
    pub bitrate: Option<u32>,
    pub user_limit: Option<u32>,
    pub overwrites: Vec<PermissionOverwriteParam>,
}

/// The phases a replication run is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    CreateRoles,
    DeleteChannels,
    CreateCategories,
    CreateTextChannels,
    CreateVoiceChannels,
    DeleteRoles,
}

impl PhaseKind {
    /// Progress message emitted when the phase starts.
    pub fn announcement(self) -> &'static str {
        match self {
            Self::CreateRoles => "Cloning roles...",
            Self::DeleteChannels => "Deleting existing channels...",
            Self::CreateCategories => "Cloning categories...",
            Self::CreateTextChannels => "Cloning text channels...",
            Self::CreateVoiceChannels => "Cloning voice channels...",
            Self::DeleteRoles => "Deleting roles...",
        }
    }
}

/// A single entity whose create or delete call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFailure {
    /// Name of the role or channel the call was made for.
    pub name: String,
    /// Display form of the error returned by the remote API.
    pub error: String,
}

/// Outcome of one phase: names of entities handled successfully and those that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: PhaseKind,
    pub succeeded: Vec<String>,
    pub failed: Vec<EntityFailure>,
}

impl PhaseReport {
    pub fn new(phase: PhaseKind) -> Self {
        Self {
            phase,
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn record_success(&mut self, name: &str) {
        self.succeeded.push(name.to_string());
    }

    pub fn record_failure(&mut self, name: &str, error: &RemoteError) {
        self.failed.push(EntityFailure {
            name: name.to_string(),
            error: error.to_string(),
        });
    }
}

/// Outcome of a full clone or reset run against one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationReport {
    /// Guild that was mutated.
    pub guild_id: u64,
    pub guild_name: String,
    /// Reports of the phases that ran, in execution order.
    pub phases: Vec<PhaseReport>,
}

impl ReplicationReport {
    pub fn new(guild_id: u64, guild_name: String) -> Self {
        Self {
            guild_id,
            guild_name,
            phases: Vec::new(),
        }
    }

    /// Returns the report of `kind` if that phase ran.
    pub fn phase(&self, kind: PhaseKind) -> Option<&PhaseReport> {
        self.phases.iter().find(|report| report.phase == kind)
    }

    pub fn success_count(&self) -> usize {
        self.phases.iter().map(|report| report.succeeded.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.phases.iter().map(|report| report.failed.len()).sum()
    }

    /// True when no per-entity call failed.
    pub fn is_complete(&self) -> bool {
        self.failure_count() == 0
    }

    /// Converts the report into a DTO, flattening failures of every phase.
    pub fn into_dto(self) -> ReplicationReportDto {
        let succeeded = self.success_count();

        ReplicationReportDto {
            guild_id: self.guild_id,
            guild_name: self.guild_name,
            succeeded,
            failed: self
                .phases
                .into_iter()
                .flat_map(|phase| phase.failed)
                .map(|failure| EntityFailureDto {
                    name: failure.name,
                    error: failure.error,
                })
                .collect(),
        }
    }
}
