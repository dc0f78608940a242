use serde::Deserialize;

use casework_core::config::Config;

/// Records service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsConfig {
    /// PostgreSQL connection URL. Required when the store is enabled.
    /// Env var: `DATABASE_URL`.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Document store enablement flag (default true). Env var: `STORE_ENABLED`.
    #[serde(default = "default_store_enabled")]
    pub store_enabled: bool,
    /// TCP port for the HTTP server (default 3114). Env var: `RECORDS_PORT`.
    #[serde(default = "default_records_port")]
    pub records_port: u16,
}

fn default_store_enabled() -> bool {
    true
}

fn default_records_port() -> u16 {
    3114
}

impl Config for RecordsConfig {}
