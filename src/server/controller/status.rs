use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::{
        discord::GuildDto,
        status::{HealthDto, StatusDto},
    },
    server::{error::AppError, model::guild::GuildSnapshot, state::AppState},
};

/// Reports that the bot is online along with uptime and guild totals.
///
/// # Arguments
/// - `state` - Application state containing the guild directory and start time
///
/// # Returns
/// - `200 OK` - Bot status
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let guilds = state.directory.guilds();
    let status = status_from_guilds(&guilds, state.started_at.elapsed().as_secs());

    Ok(Json(status))
}

/// Liveness check.
///
/// # Returns
/// - `200 OK` - Always, with the current timestamp
pub async fn get_health() -> Result<impl IntoResponse, AppError> {
    Ok(Json(HealthDto {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    }))
}

/// Lists the guilds the bot is a member of.
///
/// The `administrator` flag tells whether a guild can be used as a clone destination.
///
/// # Arguments
/// - `state` - Application state containing the guild directory
///
/// # Returns
/// - `200 OK` - Guilds sorted by name
pub async fn get_guilds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut guilds: Vec<GuildDto> = state
        .directory
        .guilds()
        .into_iter()
        .map(|guild| GuildDto {
            guild_id: guild.guild_id,
            name: guild.name,
            member_count: guild.member_count,
            administrator: guild.administrator,
        })
        .collect();
    guilds.sort_by(|a, b| a.name.cmp(&b.name).then(a.guild_id.cmp(&b.guild_id)));

    Ok(Json(guilds))
}

fn status_from_guilds(guilds: &[GuildSnapshot], uptime_seconds: u64) -> StatusDto {
    StatusDto {
        status: "Bot online".to_string(),
        uptime_seconds,
        guild_count: guilds.len(),
        total_members: guilds.iter().map(|guild| guild.member_count).sum(),
    }
}
