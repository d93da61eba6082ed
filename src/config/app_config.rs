use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{KeyarmorError, Result};

/// keyarmor configuration read from `<config_dir>/keyarmor/config.toml`.
///
/// Every section and key is optional; a missing default file means
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub gpg: GpgSection,
    pub cache: CacheSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist and parse. The default location is
    /// optional and falls back to `AppConfig::default()` when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(KeyarmorError::InvalidConfig {
                        detail: format!("config file not found: {}", path.display()),
                    });
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config_dir>/keyarmor/config.toml`, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keyarmor").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|detail| KeyarmorError::InvalidConfig {
            detail: format!("Failed to parse {}: {detail}", path.display()),
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

/// The `[gpg]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GpgSection {
    /// Path or name of the gpg binary.
    pub binary: Option<PathBuf>,
}

/// The `[cache]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSection {
    pub enabled: bool,
    /// Cache file location; defaults to `~/.keyarmor_key_cache`.
    pub file: Option<PathBuf>,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert!(config.gpg.binary.is_none());
        assert!(config.cache.enabled);
        assert!(config.cache.file.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let config = AppConfig::parse(
            r#"
            [gpg]
            binary = "/usr/local/bin/gpg2"

            [cache]
            enabled = false
            file = "/tmp/keycache.json"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.gpg.binary.as_deref(),
            Some(Path::new("/usr/local/bin/gpg2"))
        );
        assert!(!config.cache.enabled);
        assert_eq!(
            config.cache.file.as_deref(),
            Some(Path::new("/tmp/keycache.json"))
        );
    }

    #[test]
    fn partial_cache_section_keeps_caching_on() {
        let config = AppConfig::parse("[cache]\nfile = \"/tmp/k\"\n").unwrap();
        assert!(config.cache.enabled);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::parse("[gpg]\nbinray = \"gpg\"\n").is_err());
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[cache]\nenabled = false\n").unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert!(!config.cache.enabled);
    }
}
