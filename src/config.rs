//! Configuration for the larder service

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::Deserialize;

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Address the admin API listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Apply pending migrations at startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            bind_addr: default_bind_addr(),
            run_migrations: true,
        }
    }
}

impl Config {
    /// Load from the YAML file named by `LARDER_CONFIG` (if set), overlaid
    /// with `LARDER_`-prefixed environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Ok(path) = std::env::var("LARDER_CONFIG") {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment.merge(Env::prefixed("LARDER_")).extract()?;
        Ok(config)
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:8087".to_string()
}

fn default_true() -> bool {
    true
}
