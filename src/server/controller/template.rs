use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::template::{ApplyTemplateDto, CaptureTemplateDto},
    server::{
        error::AppError,
        model::replication::CloneOptions,
        service::{replication::LogProgress, template::TemplateService},
        state::AppState,
    },
};

/// Captures a guild the bot is a member of into a new template.
///
/// # Arguments
/// - `state` - Application state containing the database and guild directory
/// - `payload` - Guild to capture and optional template name
///
/// # Returns
/// - `201 Created` - Summary of the stored template
/// - `404 Not Found` - Guild unknown to the bot
/// - `409 Conflict` - A template with that name exists
/// - `500 Internal Server Error` - Database error
pub async fn capture_template(
    State(state): State<AppState>,
    Json(payload): Json<CaptureTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let template = TemplateService::new(&state.db)
        .capture(state.directory.as_ref(), payload.guild_id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(template.into_dto())))
}

/// Replays a stored template onto a destination guild.
///
/// Runs the whole clone before responding. Progress messages go to the log; the
/// response lists every entity whose call failed.
///
/// # Arguments
/// - `state` - Application state containing the database and replication collaborators
/// - `name` - Name of the template to apply
/// - `payload` - Destination guild and clone toggles
///
/// # Returns
/// - `200 OK` - Outcome of the run, including per-entity failures
/// - `403 Forbidden` - Bot lacks Administrator on the destination
/// - `404 Not Found` - Template or destination unknown
/// - `500 Internal Server Error` - Database error
pub async fn apply_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<ApplyTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    let progress = LogProgress::new(format!("template {}", name));
    let cloner = state.clone_service();

    let report = TemplateService::new(&state.db)
        .apply(
            &name,
            &cloner,
            payload.destination_id,
            CloneOptions::from_dto(&payload),
            &progress,
        )
        .await?;

    Ok(Json(report.into_dto()))
}

/// Lists stored guild templates, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Template summaries with structure counts
/// - `500 Internal Server Error` - Database error
pub async fn get_all_templates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let templates = TemplateService::new(&state.db).list().await?;

    Ok(Json(templates))
}

/// Gets one stored guild template by name.
///
/// # Returns
/// - `200 OK` - Template summary
/// - `404 Not Found` - No template with that name
/// - `500 Internal Server Error` - Database error
pub async fn get_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let template = TemplateService::new(&state.db).get(&name).await?;

    Ok(Json(template.into_dto()))
}

/// Deletes a stored guild template.
///
/// # Returns
/// - `204 No Content` - Template deleted
/// - `404 Not Found` - No template with that name
/// - `500 Internal Server Error` - Database error
pub async fn delete_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    TemplateService::new(&state.db).delete(&name).await?;

    Ok(StatusCode::NO_CONTENT)
}
