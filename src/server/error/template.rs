use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{replication::ReplicationError, InternalServerError},
};

#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template is stored under the given name.
    #[error("Template '{0}' not found")]
    NotFound(String),

    /// A template with the given name already exists.
    #[error("Template '{0}' already exists")]
    AlreadyExists(String),

    /// The guild to capture is unknown to the bot.
    #[error("Server {0} not found")]
    SourceNotFound(u64),

    /// Applying the template failed a replication precondition.
    #[error(transparent)]
    Replication(#[from] ReplicationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Converts template errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` and `SourceNotFound`
/// - 409 Conflict - For `AlreadyExists`
/// - Variable - For `Replication`, delegated to `ReplicationError::into_response()`
/// - 500 Internal Server Error - For database errors
impl IntoResponse for TemplateError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) | Self::SourceNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AlreadyExists(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Replication(err) => err.into_response(),
            Self::Db(err) => InternalServerError(err).into_response(),
        }
    }
}
