use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::utils::time::parse_duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_PRODUCTION_URL: &str =
    "https://raw.githubusercontent.com/Bgenggadmin/bg-production-master/main/production_logs.csv";
pub const DEFAULT_LOGISTICS_URL: &str =
    "https://raw.githubusercontent.com/Bgenggadmin/bg-logistics-master/main/logistics_logs.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_production_url")]
    pub production_url: String,
    #[serde(default = "default_logistics_url")]
    pub logistics_url: String,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: String,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_period")]
    pub default_period: String,
    #[serde(default = "default_detail_rows")]
    pub detail_rows: usize,
}

fn default_production_url() -> String {
    DEFAULT_PRODUCTION_URL.to_string()
}
fn default_logistics_url() -> String {
    DEFAULT_LOGISTICS_URL.to_string()
}
fn default_cache_ttl() -> String {
    "5m".to_string()
}
fn default_http_timeout() -> u64 {
    30
}
fn default_period() -> String {
    Period::Weekly.to_string()
}
fn default_detail_rows() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            production_url: default_production_url(),
            logistics_url: default_logistics_url(),
            cache_ttl: default_cache_ttl(),
            http_timeout_secs: default_http_timeout(),
            default_period: default_period(),
            detail_rows: default_detail_rows(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rlogdash")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rlogdash")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rlogdash.conf")
    }

    /// Load configuration from `path`, or return defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn cache_ttl(&self) -> AppResult<Duration> {
        parse_duration(&self.cache_ttl)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn default_period(&self) -> AppResult<Period> {
        self.default_period.parse()
    }

    /// Problems a user should fix; empty when the configuration is usable.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.production_url.trim().is_empty() {
            issues.push("production_url is empty".to_string());
        }
        if self.logistics_url.trim().is_empty() {
            issues.push("logistics_url is empty".to_string());
        }
        match self.cache_ttl() {
            Ok(d) if d.is_zero() => issues.push("cache_ttl must be greater than zero".to_string()),
            Ok(_) => {}
            Err(e) => issues.push(e.to_string()),
        }
        if self.http_timeout_secs == 0 {
            issues.push("http_timeout_secs must be greater than zero".to_string());
        }
        if let Err(e) = self.default_period() {
            issues.push(e.to_string());
        }

        issues
    }
}
