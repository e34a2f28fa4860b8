//! Errors raised by the guild replication engine.
//!
//! `ReplicationError` covers fatal preconditions that abort a run before any
//! mutation. `RemoteError` is the failure of a single create/delete call; the engine
//! records it against the entity and moves on.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serenity::http::HttpError;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Delay used when Discord reports rate limiting without a usable retry-after.
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);

/// Fatal replication errors. Messages are shown to the requesting user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplicationError {
    /// The destination guild is unknown to the bot.
    #[error("Destination server {0} not found. Check the ID and make sure the bot is a member of that server.")]
    DestinationNotFound(u64),

    /// The bot lacks the Administrator permission on the destination guild.
    #[error("The bot needs Administrator permission on the destination server {guild_name}.")]
    InsufficientPermission {
        /// Destination guild ID
        guild_id: u64,
        /// Destination guild name
        guild_name: String,
    },

    /// The guild to reset is unknown to the bot.
    #[error("Server {0} not found.")]
    GuildNotFound(u64),
}

/// Failure of a single remote API call.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Discord answered 429; the call may be retried after `retry_after`.
    #[error("Rate limited by Discord, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    /// Any other error from the Discord API client.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),

    /// The call was refused before reaching Discord.
    #[error("{0}")]
    Rejected(String),
}

/// Classifies Serenity errors, separating rate limiting from other failures.
impl From<serenity::Error> for RemoteError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response)) = err {
            if response.status_code.as_u16() == 429 {
                return RemoteError::RateLimited {
                    retry_after: DEFAULT_RETRY_AFTER,
                };
            }
        }

        RemoteError::Discord(Box::new(err))
    }
}

/// Converts replication errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `DestinationNotFound` and `GuildNotFound`
/// - 403 Forbidden - For `InsufficientPermission`
impl IntoResponse for ReplicationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DestinationNotFound(_) | Self::GuildNotFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientPermission { .. } => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
