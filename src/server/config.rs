use std::{str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    service::replication::CallPolicy,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CLONE_PACING_MS: u64 = 250;
const DEFAULT_CLONE_MAX_RETRIES: u32 = 2;

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Port the status HTTP server listens on.
    pub port: u16,

    /// Delay after each Discord mutation during a replication run.
    pub clone_pacing: Duration,
    /// Retries of a rate-limited Discord mutation.
    pub clone_max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            port: optional("PORT", DEFAULT_PORT)?,
            clone_pacing: Duration::from_millis(optional(
                "CLONE_PACING_MS",
                DEFAULT_CLONE_PACING_MS,
            )?),
            clone_max_retries: optional("CLONE_MAX_RETRIES", DEFAULT_CLONE_MAX_RETRIES)?,
        })
    }

    /// Call policy applied to every replication run.
    pub fn call_policy(&self) -> CallPolicy {
        CallPolicy::new(self.clone_pacing, self.clone_max_retries)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_var(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}
