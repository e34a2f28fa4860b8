//! Guild template service.
//!
//! Captures guild structures into stored templates and replays them onto other guilds
//! through the replication engine.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::template::GuildTemplateDto,
    server::{
        data::template::GuildTemplateRepository,
        error::template::TemplateError,
        model::{
            replication::{CloneOptions, ReplicationReport},
            template::GuildTemplate,
        },
        service::replication::{
            remote::{GuildDirectory, ProgressSink},
            CloneService,
        },
    },
};

/// Service for capturing, listing and applying guild templates.
pub struct TemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Snapshots a guild and stores it as a template.
    ///
    /// # Arguments
    /// - `directory` - Resolves the guild to capture
    /// - `guild_id` - ID of the guild to capture
    /// - `name` - Template name, defaults to `clone_{guild_id}_{YYYYmmdd_HHMMSS}`
    ///
    /// # Returns
    /// - `Ok(GuildTemplate)` - The stored template
    /// - `Err(TemplateError::SourceNotFound)` - Guild unknown to the bot
    /// - `Err(TemplateError::AlreadyExists)` - A template with that name exists
    /// - `Err(TemplateError::Db)` - Database error
    pub async fn capture(
        &self,
        directory: &dyn GuildDirectory,
        guild_id: u64,
        name: Option<String>,
    ) -> Result<GuildTemplate, TemplateError> {
        let snapshot = directory
            .lookup(guild_id)
            .ok_or(TemplateError::SourceNotFound(guild_id))?;

        let name = name.unwrap_or_else(|| default_template_name(guild_id, Utc::now()));

        // The unique index on name decides between concurrent captures
        let template = GuildTemplateRepository::new(self.db)
            .create(name.clone(), &snapshot)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => TemplateError::AlreadyExists(name),
                _ => TemplateError::Db(err),
            })?;

        tracing::info!(
            "Captured guild {} ({}) as template {}",
            snapshot.name,
            guild_id,
            template.name
        );

        Ok(template)
    }

    /// Lists all templates, newest first, with their structure counts.
    pub async fn list(&self) -> Result<Vec<GuildTemplateDto>, TemplateError> {
        let templates = GuildTemplateRepository::new(self.db).get_all().await?;

        Ok(templates.into_iter().map(GuildTemplate::into_dto).collect())
    }

    /// Gets a template by name.
    ///
    /// # Returns
    /// - `Ok(GuildTemplate)` - The stored template
    /// - `Err(TemplateError::NotFound)` - No template with that name
    pub async fn get(&self, name: &str) -> Result<GuildTemplate, TemplateError> {
        GuildTemplateRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }

    /// Replays a stored template onto a destination guild.
    ///
    /// The stored snapshot is used as the clone source, so the source guild does not
    /// need to exist anymore. Its recorded guild ID seeds the ID remapper, which
    /// retargets overwrites on the source's "everyone" role.
    ///
    /// # Arguments
    /// - `name` - Name of the template to apply
    /// - `cloner` - Clone service bound to the bot's directory and remote API
    /// - `destination_id` - ID of the guild to replicate onto
    /// - `options` - Toggles selecting roles, channels and permissions
    /// - `progress` - Sink receiving human-readable progress messages
    ///
    /// # Returns
    /// - `Ok(ReplicationReport)` - Per-phase outcome of the run
    /// - `Err(TemplateError::NotFound)` - No template with that name
    /// - `Err(TemplateError::Replication)` - Destination unknown or not administered
    pub async fn apply(
        &self,
        name: &str,
        cloner: &CloneService<'_>,
        destination_id: u64,
        options: CloneOptions,
        progress: &dyn ProgressSink,
    ) -> Result<ReplicationReport, TemplateError> {
        let template = self.get(name).await?;

        let mut source = template.snapshot;
        source.guild_id = template.source_guild_id;

        tracing::info!("Applying template {} to guild {}", name, destination_id);

        let report = cloner
            .clone_guild(&source, destination_id, options, progress)
            .await?;

        Ok(report)
    }

    /// Deletes a template by name.
    ///
    /// # Returns
    /// - `Ok(())` - Template deleted
    /// - `Err(TemplateError::NotFound)` - No template with that name
    pub async fn delete(&self, name: &str) -> Result<(), TemplateError> {
        let deleted = GuildTemplateRepository::new(self.db)
            .delete_by_name(name)
            .await?;

        if !deleted {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        tracing::info!("Deleted template {}", name);

        Ok(())
    }
}

/// Name given to a captured template when none is provided.
fn default_template_name(guild_id: u64, now: DateTime<Utc>) -> String {
    format!("clone_{}_{}", guild_id, now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Tests the default template name format.
    ///
    /// Expected: "clone_{guild_id}_{YYYYmmdd_HHMMSS}"
    #[test]
    fn formats_default_name() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 3).unwrap();

        assert_eq!(
            default_template_name(123, now),
            "clone_123_20261018_090503"
        );
    }
}
