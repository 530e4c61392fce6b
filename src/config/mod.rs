//! Configuration loading and defaults
//!
//! A small JSON file that seeds the form: default author, license and badge
//! toggle, plus where `render --save` writes the README.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::export::README_FILE_NAME;
use crate::metadata::{License, ProjectMetadata};

/// Default config file name in the working directory
pub const CONFIG_FILE_NAME: &str = ".readmegen.json";

fn default_license() -> Option<License> {
    Some(License::Mit)
}

fn default_badges() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from(README_FILE_NAME)
}

/// Values the form starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub author: String,

    #[serde(default = "default_license", with = "crate::metadata::license::optional")]
    pub license: Option<License>,

    #[serde(default = "default_badges")]
    pub badges: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: String::new(),
            license: default_license(),
            badges: default_badges(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,

    /// Default README output path
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Per-user config location, e.g. `~/.config/readmegen/config.json`
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("readmegen").join("config.json"))
    }

    /// Load `path` if it exists, then the per-user config, else defaults
    pub fn discover<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        if let Some(user) = Self::user_path().filter(|p| p.exists()) {
            tracing::debug!("Loading user config from {}", user.display());
            return Self::load(user);
        }

        Ok(Self::default())
    }

    /// Starting metadata for a new form
    pub fn seed_metadata(&self) -> ProjectMetadata {
        ProjectMetadata {
            author: self.defaults.author.clone(),
            license: self.defaults.license,
            badges: self.defaults.badges,
            ..ProjectMetadata::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_seeds_form_defaults() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("README.md"));
        assert_eq!(config.seed_metadata(), ProjectMetadata::default());
    }

    #[test]
    fn test_partial_config_file() {
        let config: Config =
            serde_json::from_str(r#"{"defaults":{"author":"Ada","license":"ISC"}}"#).unwrap();
        assert_eq!(config.output, PathBuf::from("README.md"));

        let meta = config.seed_metadata();
        assert_eq!(meta.author, "Ada");
        assert_eq!(meta.license, Some(License::Isc));
        assert!(meta.badges);
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = Config {
            defaults: Defaults {
                badges: false,
                ..Defaults::default()
            },
            output: PathBuf::from("docs/README.md"),
        };
        config.save(&path).unwrap();

        assert_eq!(Config::discover(&path).unwrap(), config);
    }
}
