// Process configuration read from the environment (after loading `.env`).

use anyhow::{Context, Result, bail};
use std::env;
use std::net::SocketAddr;

use crate::modules::identity::use_cases::authenticate::handler::DEFAULT_SESSION_TTL_SECONDS;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shift_requests.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Sqlite,
    /// Volatile store seeded with demo users and requests.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub port: u16,
    pub frontend_url: Option<String>,
    pub session_ttl_seconds: i64,
    pub storage_mode: StorageMode,
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} is not a valid number: {raw:?}")),
        None => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let storage_mode = match var("STORAGE_MODE").as_deref() {
            None | Some("sqlite") => StorageMode::Sqlite,
            Some("memory") => StorageMode::Memory,
            Some(other) => bail!("STORAGE_MODE must be sqlite or memory, got {other:?}"),
        };
        let session_ttl_seconds = parsed("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL_SECONDS)?;
        if session_ttl_seconds <= 0 {
            bail!("SESSION_TTL_SECONDS must be positive, got {session_ttl_seconds}");
        }

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: parsed("PORT", DEFAULT_PORT)?,
            frontend_url: var("FRONTEND_URL"),
            session_ttl_seconds,
            storage_mode,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.bind_addr, self.port))
    }
}
