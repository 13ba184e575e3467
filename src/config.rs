use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ClientError;

pub const CONFIG_FILE: &str = "config.json";
pub const STORAGE_FILE: &str = "storage.json";
pub const LOG_FILE: &str = "recofilm.log";

/// Client settings, read from `config.json` in the config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// The backend has no sessions; every write goes to this user.
    pub user_id: i64,
    pub default_limit: u32,
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            user_id: 1,
            default_limit: 10,
            request_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let config = match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str::<Self>(&raw)
                .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.default_limit == 0 {
            return Err(ClientError::Config(
                "default_limit must be greater than zero".to_string(),
            ));
        }
        Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("base_url {:?}: {}", self.base_url, e)))?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Absolute URL of a page on the web app.
    pub fn web_url(&self, path_and_query: &str) -> Result<Url, ClientError> {
        resolve(&parse_base_url(&self.base_url)?, path_and_query)
    }
}

/// Parse a base URL so that relative joins land under its path.
pub fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Resolve a site path (`/api/movies`, `/search?name=x`) below `base`,
/// keeping any path prefix `base` carries.
pub fn resolve(base: &Url, path: &str) -> Result<Url, ClientError> {
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// Where the client keeps its files.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub storage_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Result<Self, ClientError> {
        let dirs = directories::ProjectDirs::from("org", "recofilm", "recofilm").ok_or_else(|| {
            ClientError::Config("Could not determine home directory".to_string())
        })?;
        Ok(Self {
            config_file: dirs.config_dir().join(CONFIG_FILE),
            storage_file: dirs.data_dir().join(STORAGE_FILE),
            log_file: dirs.data_dir().join(LOG_FILE),
        })
    }
}
