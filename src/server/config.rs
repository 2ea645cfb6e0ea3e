use crate::server::{
    error::{config::ConfigError, AppError},
    model::engagement::CounterPolicy,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const MIN_JWT_SECRET_LEN: usize = 32;

/// Daily rank job slots, twenty seconds apart, in `tokio-cron-scheduler` six-field syntax.
const DEFAULT_RANK_ROLLBACK_CRON: &str = "0 0 1 * * *";
const DEFAULT_RANK_TARGETS_CRON: &str = "20 0 1 * * *";
const DEFAULT_RANK_ACTORS_CRON: &str = "40 0 1 * * *";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Treatment of counter decrements below zero.
    pub counter_policy: CounterPolicy,
    /// Allowed CORS origin; any origin when unset.
    pub cors_origin: Option<String>,
    /// HS256 secret member access tokens are signed with.
    pub jwt_secret: String,

    pub rank_rollback_cron: String,
    pub rank_targets_cron: String,
    pub rank_actors_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            counter_policy: parse_counter_policy(std::env::var("COUNTER_POLICY").ok())?,
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty()),
            jwt_secret: parse_jwt_secret(std::env::var("JWT_SECRET").ok())?,
            rank_rollback_cron: env_or("RANK_ROLLBACK_CRON", DEFAULT_RANK_ROLLBACK_CRON),
            rank_targets_cron: env_or("RANK_TARGETS_CRON", DEFAULT_RANK_TARGETS_CRON),
            rank_actors_cron: env_or("RANK_ACTORS_CRON", DEFAULT_RANK_ACTORS_CRON),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parses `COUNTER_POLICY`: `floor` (default) or `allow_negative`.
fn parse_counter_policy(value: Option<String>) -> Result<CounterPolicy, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") | Some("floor") => Ok(CounterPolicy::FloorAtZero),
        Some("allow_negative") => Ok(CounterPolicy::AllowNegative),
        Some(other) => Err(ConfigError::InvalidValue {
            name: "COUNTER_POLICY".to_string(),
            value: other.to_string(),
        }),
    }
}

/// Requires a non-empty `JWT_SECRET` of at least [`MIN_JWT_SECRET_LEN`] bytes.
fn parse_jwt_secret(value: Option<String>) -> Result<String, ConfigError> {
    match value {
        None => Err(ConfigError::MissingEnvVar("JWT_SECRET".to_string())),
        Some(secret) if secret.trim().is_empty() => {
            Err(ConfigError::MissingEnvVar("JWT_SECRET".to_string()))
        }
        Some(secret) if secret.len() < MIN_JWT_SECRET_LEN => Err(ConfigError::InvalidValue {
            name: "JWT_SECRET".to_string(),
            value: format!("<{} bytes, need {}>", secret.len(), MIN_JWT_SECRET_LEN),
        }),
        Some(secret) => Ok(secret),
    }
}
