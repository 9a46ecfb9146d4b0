use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "PDIFF_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "pdiff.toml";

pub const DEFAULT_MANIFEST_PATH: &str = "public/docs/plugins.json";
pub const DEFAULT_BASE_REF: &str = "HEAD~1";
pub const DEFAULT_INDENT: &str = "   ";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<String>,
}

impl Config {
    /// Path of the config file to load.
    ///
    /// `PDIFF_CONFIG` wins when set and non-empty, then `pdiff.toml` in the
    /// working directory, then the per-user config directory.
    pub fn path() -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        #[cfg(not(target_os = "windows"))]
        {
            dirs::home_dir().map(|home| {
                home.join(".config")
                    .join("pdiff")
                    .join(LOCAL_CONFIG_FILE)
            })
        }

        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|dir| dir.join("pdiff").join(LOCAL_CONFIG_FILE))
        }
    }

    /// Load the config, falling back to defaults when no file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.manifest_path.is_none()
            && self.base_ref.is_none()
            && self.git_path.is_none()
            && self.indent.is_none()
    }

    /// Explicitly set values, for diagnostics
    pub fn values_iter(&self) -> Vec<(&str, String)> {
        let mut values = Vec::new();
        if let Some(ref val) = self.manifest_path {
            values.push(("manifest-path", val.display().to_string()));
        }
        if let Some(ref val) = self.base_ref {
            values.push(("base-ref", val.clone()));
        }
        if let Some(ref val) = self.git_path {
            values.push(("git-path", val.display().to_string()));
        }
        if let Some(ref val) = self.indent {
            values.push(("indent", format!("{:?}", val)));
        }
        values
    }

    pub fn get_manifest_path(&self) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH))
    }

    pub fn get_base_ref(&self) -> &str {
        self.base_ref.as_deref().unwrap_or(DEFAULT_BASE_REF)
    }

    pub fn get_indent(&self) -> &str {
        self.indent.as_deref().unwrap_or(DEFAULT_INDENT)
    }
}
