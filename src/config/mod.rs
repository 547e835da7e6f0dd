//! Configuration module for the VoiceIt backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Which document store backs the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// SQLite file via sqlx
    Sqlite,
    /// In-process store, optionally persisted to a JSON file
    Memory,
}

impl StorageKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(StorageKind::Sqlite),
            "memory" | "local" => Some(StorageKind::Memory),
            _ => None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Storage backend
    pub storage: StorageKind,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// JSON file backing the memory store, if any
    pub local_path: Option<PathBuf>,
    /// Admin login email
    pub admin_email: String,
    /// Admin login password; login is disabled when unset
    pub admin_password: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Attempts per storage write, including the first one
    pub write_retries: u32,
    /// How long a change long-poll waits before returning unchanged
    pub long_poll_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("VOICEIT_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid VOICEIT_BIND_ADDR: {}", e)))?;

        let storage_raw = env::var("VOICEIT_STORAGE").unwrap_or_else(|_| "sqlite".to_string());
        let storage = StorageKind::parse(&storage_raw).ok_or_else(|| {
            AppError::Internal(format!("Invalid VOICEIT_STORAGE: {}", storage_raw))
        })?;

        let db_path = env::var("VOICEIT_DB_PATH")
            .unwrap_or_else(|_| "./data/voiceit.sqlite".to_string())
            .into();

        let local_path = env::var("VOICEIT_LOCAL_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let admin_email =
            env::var("VOICEIT_ADMIN_EMAIL").unwrap_or_else(|_| "admin@voiceit.com".to_string());
        let admin_password = env::var("VOICEIT_ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        let log_level = env::var("VOICEIT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("VOICEIT_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let write_retries = retry_attempts(parse_number("VOICEIT_WRITE_RETRIES", 3)?)?;
        let long_poll_timeout = Duration::from_secs(parse_number("VOICEIT_LONG_POLL_SECS", 25)?);

        Ok(Self {
            bind_addr,
            storage,
            db_path,
            local_path,
            admin_email,
            admin_password,
            log_level,
            log_format,
            write_retries,
            long_poll_timeout,
        })
    }
}

fn parse_number(name: &str, default: u64) -> Result<u64, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

/// At least one attempt; values that do not fit a `u32` are rejected.
fn retry_attempts(value: u64) -> Result<u32, AppError> {
    u32::try_from(value)
        .map(|attempts| attempts.max(1))
        .map_err(|_| AppError::Internal(format!("Invalid VOICEIT_WRITE_RETRIES: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        for name in [
            "VOICEIT_BIND_ADDR",
            "VOICEIT_STORAGE",
            "VOICEIT_DB_PATH",
            "VOICEIT_LOCAL_PATH",
            "VOICEIT_ADMIN_EMAIL",
            "VOICEIT_ADMIN_PASSWORD",
            "VOICEIT_LOG_LEVEL",
            "VOICEIT_LOG_FORMAT",
            "VOICEIT_WRITE_RETRIES",
            "VOICEIT_LONG_POLL_SECS",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert_eq!(config.db_path, PathBuf::from("./data/voiceit.sqlite"));
        assert!(config.local_path.is_none());
        assert_eq!(config.admin_email, "admin@voiceit.com");
        assert!(config.admin_password.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.write_retries, 3);
        assert_eq!(config.long_poll_timeout, Duration::from_secs(25));
    }

    #[test]
    fn test_storage_kind_parse() {
        assert_eq!(StorageKind::parse("SQLite"), Some(StorageKind::Sqlite));
        assert_eq!(StorageKind::parse("memory"), Some(StorageKind::Memory));
        assert_eq!(StorageKind::parse("local"), Some(StorageKind::Memory));
        assert_eq!(StorageKind::parse("firestore"), None);
    }

    #[test]
    fn test_retry_attempts_bounds() {
        assert_eq!(retry_attempts(0).unwrap(), 1);
        assert_eq!(retry_attempts(5).unwrap(), 5);
        assert!(retry_attempts(u64::from(u32::MAX) + 1).is_err());
    }
}
