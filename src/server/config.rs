use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "website/static";

/// Which lock backend arbitrates proposals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockBackendKind {
    /// Locks live in the `proposal_lock` table and are shared by every process on the database.
    #[default]
    Database,
    /// Locks live in this process only.
    Memory,
}

impl FromStr for LockBackendKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "database" => Ok(Self::Database),
            "memory" => Ok(Self::Memory),
            _ => Err("expected `database` or `memory`".to_string()),
        }
    }
}

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Token for the gold bot; the gold bot is not started when unset.
    pub gold_discord_bot_token: Option<String>,

    pub host: String,
    pub port: u16,
    pub static_dir: String,

    pub lock_backend: LockBackendKind,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            gold_discord_bot_token: var("GOLD_DISCORD_BOT_TOKEN"),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            static_dir: var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            lock_backend: parse_or(
                "PROPOSAL_LOCK_BACKEND",
                var("PROPOSAL_LOCK_BACKEND"),
                LockBackendKind::default(),
            )?,
        })
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: err.to_string(),
                value,
            }),
    }
}
