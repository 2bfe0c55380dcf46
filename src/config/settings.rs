//! Application configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Upstream webserver settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Refresh scheduling settings
    #[serde(default)]
    pub poll: PollConfig,
    /// Variables fetched on every tick
    #[serde(default = "default_watch")]
    pub watch: Vec<String>,
}

/// Upstream webserver settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the simulation webserver
    pub base_url: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Refresh scheduling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds between refresh ticks
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Samples kept per variable for history views
    #[serde(default = "default_history_points")]
    pub history_points: usize,
}

fn default_version() -> u32 {
    1
}

fn default_request_timeout_ms() -> u64 {
    rdash_core::DEFAULT_REQUEST_TIMEOUT.as_millis() as u64
}

fn default_interval_secs() -> u64 {
    rdash_core::DEFAULT_POLL_INTERVAL.as_secs()
}

fn default_history_points() -> usize {
    rdash_core::DEFAULT_HISTORY_POINTS
}

fn default_watch() -> Vec<String> {
    [
        "CORE_TEMP",
        "CORE_PRESSURE",
        "CORE_INTEGRITY",
        "CORE_WEAR",
        "CORE_STEAM_PRESENT",
        "RODS_POS_ACTUAL",
        "RODS_ALIGNED",
        "COOLANT_CORE_PRESSURE",
        "COOLANT_CORE_FLOW_SPEED",
        "GENERATOR_0_KW",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8785/".to_string(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            history_points: default_history_points(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerConfig::default(),
            poll: PollConfig::default(),
            watch: default_watch(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults when no
    /// file exists yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "rdash", "rdash")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll.interval_secs.max(1))
    }

    /// Per-request timeout, clamped strictly below the poll interval so
    /// a stalled request cannot overlap the next tick.
    pub fn request_timeout(&self) -> Duration {
        let interval = self.poll_interval();
        let timeout = Duration::from_millis(self.server.request_timeout_ms.max(1));
        if timeout >= interval {
            log::warn!(
                "Request timeout {:?} >= poll interval {:?}, clamping",
                timeout,
                interval
            );
            interval.mul_f64(0.5)
        } else {
            timeout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.server.base_url, "http://localhost:8785/");
        assert_eq!(config.poll.interval_secs, 2);
        assert_eq!(config.poll.history_points, 30);
        assert!(config.watch.contains(&"CORE_TEMP".to_string()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server.base_url, config.server.base_url);
        assert_eq!(back.watch, config.watch);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{"server": {"base_url": "http://reactor.local:9000/"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.base_url, "http://reactor.local:9000/");
        assert_eq!(config.server.request_timeout_ms, 1000);
        assert_eq!(config.poll.interval_secs, 2);
        assert!(!config.watch.is_empty());
    }

    #[test]
    fn test_timeout_stays_below_interval() {
        let config = AppConfig::default();
        assert!(config.request_timeout() < config.poll_interval());

        let mut generous = AppConfig::default();
        generous.server.request_timeout_ms = 10_000;
        assert!(generous.request_timeout() < generous.poll_interval());
    }

    #[test]
    fn test_save_and_load_path() {
        let path = std::env::temp_dir().join("rdash-test-config/config.json");
        let mut config = AppConfig::default();
        config.watch = vec!["CORE_TEMP".to_string()];
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.watch, vec!["CORE_TEMP".to_string()]);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
