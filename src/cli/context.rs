use std::path::PathBuf;

use crate::adapters::gpg::gpg_tool::{DEFAULT_GPG_BIN, GpgTool};
use crate::adapters::key_cache::file_key_cache::FileKeyCache;
use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::services::key_exporter::KeyExporter;

/// Effective settings after merging CLI flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub gpg_path: PathBuf,
    /// `None` when caching is off or no home directory could be resolved.
    pub cache_path: Option<PathBuf>,
    pub cache_enabled: bool,
}

impl Settings {
    /// Flags (and their env vars) override the config file, which overrides
    /// built-in defaults.
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        Self::merge(
            cli.gpg.clone(),
            cli.cache_file.clone(),
            cli.no_cache,
            config,
            FileKeyCache::default_path,
        )
    }

    fn merge(
        gpg: Option<PathBuf>,
        cache_file: Option<PathBuf>,
        no_cache: bool,
        config: &AppConfig,
        default_cache_path: impl FnOnce() -> Option<PathBuf>,
    ) -> Self {
        let gpg_path = gpg
            .or_else(|| config.gpg.binary.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GPG_BIN));

        let cache_enabled = !no_cache && config.cache.enabled;
        let cache_path = if cache_enabled {
            cache_file
                .or_else(|| config.cache.file.clone())
                .or_else(default_cache_path)
        } else {
            None
        };

        Self {
            gpg_path,
            cache_path,
            cache_enabled,
        }
    }

    pub fn gpg_tool(&self) -> GpgTool {
        GpgTool::with_path(self.gpg_path.clone())
    }

    pub fn key_cache(&self) -> Option<FileKeyCache> {
        self.cache_path.clone().map(FileKeyCache::new)
    }

    /// Build the exporter wired to gpg and the file cache.
    pub fn exporter(&self) -> KeyExporter<GpgTool, FileKeyCache> {
        KeyExporter::new(self.gpg_tool(), self.key_cache())
    }
}
