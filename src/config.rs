// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    secret_key: Option<String>,
    debug: bool,
    allowed_hosts: Vec<String>,
    database_url: String,
    database_max_connections: u32,
    trusted_origins: Vec<String>,
    listen_addr: String,
    media_root: PathBuf,
    static_root: PathBuf,
    session_ttl: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3?mode=rwc";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_ALLOWED_HOSTS: &str = "localhost 127.0.0.1";
const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 14;
const DEFAULT_MAX_CONNECTIONS: u32 = 8;

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim(), "True" | "true" | "1")
}

/// Splits on whitespace and commas, dropping empty entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: std::str::FromStr>(
    name: &str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{name} must be a positive integer"))),
    }
}

impl AppConfig {
    /// Reads the process environment. `main` loads `.env` beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let debug = lookup("DEBUG").map(|raw| parse_bool(&raw)).unwrap_or(true);

        let secret_key = lookup("SECRET_KEY").filter(|key| !key.trim().is_empty());
        match &secret_key {
            Some(key) if key.len() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) => {
                return Err(ConfigError::Invalid(
                    "SECRET_KEY must be a 32-byte hex string".into(),
                ));
            }
            None if !debug => return Err(ConfigError::Missing("SECRET_KEY")),
            _ => {}
        }

        let allowed_hosts =
            parse_list(&lookup("ALLOWED_HOSTS").unwrap_or_else(|| DEFAULT_ALLOWED_HOSTS.into()));
        let trusted_origins = parse_list(&lookup("CSRF_TRUSTED_ORIGINS").unwrap_or_default());

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let database_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be a positive integer".into(),
            ));
        }

        let session_ttl_secs = parse_number(
            "SESSION_TTL_SECONDS",
            lookup("SESSION_TTL_SECONDS"),
            DEFAULT_SESSION_TTL_SECS,
        )?;

        Ok(Self {
            secret_key,
            debug,
            allowed_hosts,
            database_url,
            database_max_connections,
            trusted_origins,
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into()),
            media_root: lookup("MEDIA_ROOT").unwrap_or_else(|| "media".into()).into(),
            static_root: lookup("STATIC_ROOT").unwrap_or_else(|| "static".into()).into(),
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }

    /// `None` means sessions are signed with a key generated at startup.
    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn trusted_origins(&self) -> &[String] {
        &self.trusted_origins
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn media_root(&self) -> &PathBuf {
        &self.media_root
    }

    pub fn static_root(&self) -> &PathBuf {
        &self.static_root
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Cookies carry `Secure` outside debug.
    pub fn secure_cookies(&self) -> bool {
        !self.debug
    }
}
