//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LOANTRAIL_STORE_BASE_URL`: Record-store base URL (required)
//! - `LOANTRAIL_STORE_API_KEY`: Record-store API key (required)
//! - `LOANTRAIL_STORE_TIMEOUT`: Store request timeout in seconds
//! - `LOANTRAIL_CACHE_TTL`: Profile cache TTL in seconds
//! - `LOANTRAIL_SNAPSHOT_INTERVAL`: Leaderboard snapshot interval in seconds
//! - `LOANTRAIL_LEADERBOARD_SIZE`: Entries per leaderboard snapshot
//! - `LOANTRAIL_SCHEDULER_ENABLED`: Whether the snapshot scheduler runs
//! - `LOANTRAIL_HOST`: HTTP bind host
//! - `LOANTRAIL_PORT`: HTTP bind port
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./loantrail.json` or `./loantrail.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use loantrail_domain::{
    CacheConfig, Config, LoanTrailError, Result, SchedulerConfig, ServerConfig, StoreConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `LoanTrailError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The store URL and API key are required; everything else falls back to
/// its default.
///
/// # Errors
/// Returns `LoanTrailError::Config` if required variables are missing or
/// have invalid values.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("LOANTRAIL_STORE_BASE_URL")?;
    let api_key = env_var("LOANTRAIL_STORE_API_KEY")?;

    let cache_defaults = CacheConfig::default();
    let scheduler_defaults = SchedulerConfig::default();
    let server_defaults = ServerConfig::default();

    Ok(Config {
        store: StoreConfig {
            base_url,
            api_key,
            timeout_seconds: env_parsed(
                "LOANTRAIL_STORE_TIMEOUT",
                loantrail_domain::DEFAULT_STORE_TIMEOUT_SECS,
            )?,
        },
        cache: CacheConfig {
            profile_ttl_seconds: env_parsed(
                "LOANTRAIL_CACHE_TTL",
                cache_defaults.profile_ttl_seconds,
            )?,
        },
        scheduler: SchedulerConfig {
            snapshot_interval_seconds: env_parsed(
                "LOANTRAIL_SNAPSHOT_INTERVAL",
                scheduler_defaults.snapshot_interval_seconds,
            )?,
            leaderboard_size: env_parsed(
                "LOANTRAIL_LEADERBOARD_SIZE",
                scheduler_defaults.leaderboard_size,
            )?,
            enabled: env_bool("LOANTRAIL_SCHEDULER_ENABLED", scheduler_defaults.enabled),
        },
        server: ServerConfig {
            host: std::env::var("LOANTRAIL_HOST").unwrap_or(server_defaults.host),
            port: env_parsed("LOANTRAIL_PORT", server_defaults.port)?,
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LoanTrailError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LoanTrailError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LoanTrailError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LoanTrailError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LoanTrailError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LoanTrailError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LoanTrailError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, the parent directory, and the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("loantrail.json"),
            cwd.join("loantrail.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("loantrail.json"),
                exe_dir.join("loantrail.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        LoanTrailError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, falling back to a default
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| LoanTrailError::Config(format!("Invalid value for {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
