// src/config.rs
//
// Runtime configuration, read from the environment

use std::path::PathBuf;
use std::time::Duration;

use crate::db::default_database_path;
use crate::domain::RuleTables;
use crate::error::{AppError, AppResult};

pub const DEFAULT_SCRYFALL_API_BASE: &str = "https://api.scryfall.com";
pub const DEFAULT_RATE_LIMIT_MS: u64 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub scryfall_api_base: String,
    /// Minimum spacing between two card-database requests
    pub rate_limit: Duration,
    pub request_timeout: Duration,
    /// Optional JSON override of the built-in rule tables
    pub rules_file: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment
    ///
    /// - `COMMANDER_DB_PATH`
    /// - `SCRYFALL_API_BASE`
    /// - `SCRYFALL_RATE_LIMIT_MS`
    /// - `SCRYFALL_TIMEOUT_SECS`
    /// - `COMMANDER_RULES_FILE`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match non_empty(lookup("COMMANDER_DB_PATH")) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let scryfall_api_base = non_empty(lookup("SCRYFALL_API_BASE"))
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SCRYFALL_API_BASE.to_string());

        let rate_limit_ms = parse_u64(
            "SCRYFALL_RATE_LIMIT_MS",
            lookup("SCRYFALL_RATE_LIMIT_MS"),
            DEFAULT_RATE_LIMIT_MS,
        )?;
        let timeout_secs = parse_u64(
            "SCRYFALL_TIMEOUT_SECS",
            lookup("SCRYFALL_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(AppError::Config(
                "SCRYFALL_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            database_path,
            scryfall_api_base,
            rate_limit: Duration::from_millis(rate_limit_ms),
            request_timeout: Duration::from_secs(timeout_secs),
            rules_file: non_empty(lookup("COMMANDER_RULES_FILE")).map(PathBuf::from),
        })
    }

    /// Rule tables from `rules_file`, or the built-in Commander tables
    pub fn load_rules(&self) -> AppResult<RuleTables> {
        match &self.rules_file {
            Some(path) => {
                log::info!("Loading rule tables from {}", path.display());
                RuleTables::from_json_file(path)
            }
            None => Ok(RuleTables::commander_defaults()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_u64(key: &str, value: Option<String>, default: u64) -> AppResult<u64> {
    match non_empty(value) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got {:?}", key, raw))),
        None => Ok(default),
    }
}
