use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::errors::{KeyarmorError, Result};
use crate::core::models::cached_key::CachedKey;
use crate::core::traits::key_cache::KeyCache;

/// File name of the cache inside the user's home directory.
pub const CACHE_FILE_NAME: &str = ".keyarmor_key_cache";

/// Single-slot public key cache persisted as one JSON document.
///
/// Every save overwrites the whole file. The file only ever holds a public
/// key, so it is created with mode `0644` on Unix.
#[derive(Debug, Clone)]
pub struct FileKeyCache {
    path: PathBuf,
}

impl FileKeyCache {
    /// Create a cache backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.keyarmor_key_cache`, or `None` when the home directory is unknown.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir()
            .filter(|home| !home.as_os_str().is_empty())
            .map(|home| home.join(CACHE_FILE_NAME))
    }

    /// Return the file path this cache reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyCache for FileKeyCache {
    fn load(&self) -> Result<Option<CachedKey>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record = serde_json::from_slice(&raw).map_err(|e| KeyarmorError::CacheUnusable {
            path: self.path.clone(),
            detail: format!("malformed record: {e}"),
        })?;
        Ok(Some(record))
    }

    fn save(&self, record: &CachedKey) -> Result<()> {
        let json = serde_json::to_vec(record).map_err(|e| KeyarmorError::CacheUnusable {
            path: self.path.clone(),
            detail: format!("cannot serialize record: {e}"),
        })?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(&self.path)?;
        file.write_all(&json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache() -> (tempfile::TempDir, FileKeyCache) {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileKeyCache::new(dir.path().join(CACHE_FILE_NAME));
        (dir, cache)
    }

    #[test]
    fn missing_file_is_empty_slot() {
        let (_dir, cache) = temp_cache();
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let (_dir, cache) = temp_cache();
        let record = CachedKey::new("ABC123", b"armored key".to_vec());

        cache.save(&record).unwrap();

        assert_eq!(cache.load().unwrap(), Some(record));
    }

    #[test]
    fn save_overwrites_previous_record() {
        let (_dir, cache) = temp_cache();
        cache
            .save(&CachedKey::new("FIRST", b"a much longer first body".to_vec()))
            .unwrap();
        cache.save(&CachedKey::new("SECOND", b"b".to_vec())).unwrap();

        let loaded = cache.load().unwrap().unwrap();
        assert_eq!(loaded.key_id, "SECOND");
        assert_eq!(loaded.body, b"b");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_dir, cache) = temp_cache();
        fs::write(cache.path(), "{ not json").unwrap();
        assert!(cache.load().is_err());
    }

    #[test]
    fn reads_records_from_other_writers() {
        let (_dir, cache) = temp_cache();
        fs::write(cache.path(), r#"{"keyId":"ABC123","body":"YXJtb3I="}"#).unwrap();

        let loaded = cache.load().unwrap().unwrap();
        assert!(loaded.is_hit_for("ABC123"));
        assert_eq!(loaded.body, b"armor");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileKeyCache::new(dir.path().join("nope").join(CACHE_FILE_NAME));
        assert!(cache.save(&CachedKey::new("A", b"x".to_vec())).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_readable_owner_writable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, cache) = temp_cache();
        cache.save(&CachedKey::new("A", b"x".to_vec())).unwrap();

        let mode = fs::metadata(cache.path()).unwrap().permissions().mode();
        // umask may clear group/other bits but never adds any
        assert_eq!(mode & 0o777 & !0o644, 0);
        assert_eq!(mode & 0o600, 0o600);
    }
}
