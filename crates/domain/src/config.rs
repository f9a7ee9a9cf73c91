//! Application configuration structures
//!
//! Loaded by the infra config loader from environment variables or files.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LEADERBOARD_SIZE, DEFAULT_PROFILE_CACHE_TTL_SECS, DEFAULT_SNAPSHOT_INTERVAL_SECS,
    DEFAULT_STORE_TIMEOUT_SECS,
};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Hosted record-store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the record-store REST endpoint
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    #[serde(default = "default_store_timeout")]
    pub timeout_seconds: u64,
}

/// Profile read-cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_ttl")]
    pub profile_ttl_seconds: u64,
}

/// Leaderboard snapshot scheduler settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_snapshot_interval")]
    pub snapshot_interval_seconds: u64,
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// HTTP server bind settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { profile_ttl_seconds: DEFAULT_PROFILE_CACHE_TTL_SECS }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            snapshot_interval_seconds: DEFAULT_SNAPSHOT_INTERVAL_SECS,
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            enabled: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

fn default_store_timeout() -> u64 {
    DEFAULT_STORE_TIMEOUT_SECS
}

fn default_cache_ttl() -> u64 {
    DEFAULT_PROFILE_CACHE_TTL_SECS
}

fn default_snapshot_interval() -> u64 {
    DEFAULT_SNAPSHOT_INTERVAL_SECS
}

fn default_leaderboard_size() -> usize {
    DEFAULT_LEADERBOARD_SIZE
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
