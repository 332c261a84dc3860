//! Runtime configuration from the environment (and `.env`).

use crate::processing::{DistanceMetric, MergeOptions};
use std::error::Error;

/// Default log4rs config file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_DISTANCE: &str = "NETMERGE_DISTANCE";
pub const ENV_MAX_COUNT: &str = "NETMERGE_MAX_COUNT";
pub const ENV_LOG_CONFIG: &str = "NETMERGE_LOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub metric: DistanceMetric,
    pub max_count: u8,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            metric: DistanceMetric::default(),
            max_count: 0,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Load from process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve each key; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(metric) = lookup(ENV_DISTANCE) {
            config.metric = metric
                .parse()
                .map_err(|e| format!("{ENV_DISTANCE}: {e}"))?;
        }
        if let Some(max_count) = lookup(ENV_MAX_COUNT) {
            config.max_count = max_count
                .trim()
                .parse()
                .map_err(|e| format!("{ENV_MAX_COUNT}={max_count}: {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }

        log::debug!("Config loaded: {config:?}");
        Ok(config)
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            max_count: self.max_count,
            metric: self.metric,
        }
    }
}
