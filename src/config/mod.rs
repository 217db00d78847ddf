use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Shared endpoint: GET returns the job list, POST receives punches.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Read the job list from this JSON file instead of the endpoint.
    #[serde(default)]
    pub jobs_file: Option<String>,
    /// Command printing `lat,lon[,accuracy]` on stdout.
    #[serde(default)]
    pub gps_command: Option<String>,
    #[serde(default = "default_gps_timeout")]
    pub gps_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_session")]
    pub session: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_gps_timeout() -> u64 {
    8
}
fn default_request_timeout() -> u64 {
    10
}
fn default_session() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            endpoint: None,
            jobs_file: None,
            gps_command: None,
            gps_timeout_secs: default_gps_timeout(),
            request_timeout_secs: default_request_timeout(),
            session: default_session(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `TIMECLOCK_HOME` overrides it.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("TIMECLOCK_HOME") {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.gps_timeout_secs == 0 {
            return Err(AppError::Config("gps_timeout_secs must be > 0".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config("request_timeout_secs must be > 0".into()));
        }
        if self.session.trim().is_empty() {
            return Err(AppError::Config("session must not be empty".into()));
        }
        Ok(())
    }

    /// Write the configuration file and create the config directory.
    /// In test mode only the directory is created.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !is_test {
            let yaml = serde_yaml::to_string(self)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("endpoint: https://example.org/exec\n").unwrap();
        assert_eq!(cfg.endpoint.as_deref(), Some("https://example.org/exec"));
        assert_eq!(cfg.gps_timeout_secs, 8);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.session, "default");
        assert!(cfg.jobs_file.is_none());
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let cfg = Config {
            gps_timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }
}
