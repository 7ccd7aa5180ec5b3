use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const BASE_URL_ENV: &str = "NAVHUB_BASE_URL";
pub const DATA_DIR_ENV: &str = "NAVHUB_DATA_DIR";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: PathBuf,
    #[serde(default = "default_prefs_path")]
    pub prefs_path: PathBuf,
    #[serde(skip, default = "default_config_path")]
    pub config_path: PathBuf,
    #[serde(default = "default_max_results")]
    pub max_results: u16,
    #[serde(default)]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            locales_dir: default_locales_dir(),
            prefs_path: default_prefs_path(),
            config_path: default_config_path(),
            max_results: default_max_results(),
            base_url: base_url_from_env(),
        }
    }
}

/// App-data root: env override first, then a home-relative dir, temp as the
/// last resort so tests and CI never fail on a missing home.
pub fn stable_app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("navhub");
        }
    }
    if let Ok(local) = std::env::var("LOCALAPPDATA") {
        if !local.is_empty() {
            return PathBuf::from(local).join("navhub");
        }
    }
    std::env::temp_dir().join("navhub")
}

fn default_data_dir() -> PathBuf {
    stable_app_data_dir().join("data")
}

fn default_locales_dir() -> PathBuf {
    stable_app_data_dir().join("locales")
}

fn default_prefs_path() -> PathBuf {
    stable_app_data_dir().join("prefs.json")
}

fn default_config_path() -> PathBuf {
    stable_app_data_dir().join("config.toml")
}

fn default_max_results() -> u16 {
    20
}

fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_default()
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.max_results < 5 || cfg.max_results > 100 {
        return Err("max_results out of range".into());
    }

    if cfg.data_dir.as_os_str().is_empty() {
        return Err("data_dir is required".into());
    }

    if cfg.locales_dir.as_os_str().is_empty() {
        return Err("locales_dir is required".into());
    }

    if cfg.prefs_path.as_os_str().is_empty() {
        return Err("prefs_path is required".into());
    }

    if cfg.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    Ok(())
}

/// Loads config from the given path (or the default location). A missing
/// file yields the defaults; a malformed file is a hard error.
pub fn load(path_override: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = path_override
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    let raw = match std::fs::read_to_string(&config_path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            let mut config = Config::default();
            config.config_path = config_path;
            return Ok(config);
        }
        Err(error) => return Err(ConfigError::Io(error)),
    };

    let mut config: Config =
        toml::from_str(&raw).map_err(|error| ConfigError::Parse(error.to_string()))?;
    config.config_path = config_path;
    if config.base_url.is_empty() {
        config.base_url = base_url_from_env();
    }
    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    let encoded =
        toml::to_string_pretty(config).map_err(|error| ConfigError::Parse(error.to_string()))?;
    if let Some(parent) = config.config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&config.config_path, encoded)?;
    Ok(())
}
