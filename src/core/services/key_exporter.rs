use tracing::debug;

use crate::core::errors::{KeyarmorError, Result};
use crate::core::models::cached_key::CachedKey;
use crate::core::traits::key_cache::KeyCache;
use crate::core::traits::key_tool::KeyTool;

/// Exports armored keys through a `KeyTool`, caching public keys in a
/// single-slot `KeyCache` when one is available.
///
/// `cache` is `None` when no cache location could be resolved (e.g. no
/// home directory) or caching is turned off. Exports then always go to
/// the tool.
pub struct KeyExporter<T: KeyTool, C: KeyCache> {
    pub tool: T,
    pub cache: Option<C>,
}

impl<T: KeyTool, C: KeyCache> KeyExporter<T, C> {
    pub fn new(tool: T, cache: Option<C>) -> Self {
        Self { tool, cache }
    }

    /// Export the armored public key for `key_id`.
    ///
    /// A valid cached record is returned without running the tool. The tool
    /// reports a missing key on stderr while still exiting 0, so any stderr
    /// output fails the export. Successful exports replace the cached record.
    pub fn export_public_key(&self, key_id: &str) -> Result<Vec<u8>> {
        if let Some(record) = self.try_load_cached()
            && record.is_hit_for(key_id)
        {
            debug!(key_id, "public key served from cache");
            return Ok(record.body);
        }

        let output = self.tool.run(&["-a", "--export", key_id])?;
        if !output.success {
            return Err(KeyarmorError::ToolFailed {
                program: self.tool.program().to_string(),
                status: output.status.clone(),
                stderr: output.stderr_text(),
            });
        }
        if !output.stderr.is_empty() {
            return Err(KeyarmorError::KeyExport {
                message: output.stderr_text(),
            });
        }

        let _stored = self.try_store_cached(&CachedKey::new(key_id, output.stdout.clone()));
        Ok(output.stdout)
    }

    /// Export the armored secret key for `key_id`. Never cached.
    pub fn export_secret_key(&self, key_id: &str) -> Result<Vec<u8>> {
        let output = self.tool.run(&["-a", "--export-secret-key", key_id])?;
        if !output.success {
            return Err(KeyarmorError::ToolFailed {
                program: self.tool.program().to_string(),
                status: output.status.clone(),
                stderr: output.stderr_text(),
            });
        }
        Ok(output.stdout)
    }

    /// Best-effort read of the cached record. Any fault is a miss.
    fn try_load_cached(&self) -> Option<CachedKey> {
        let cache = self.cache.as_ref()?;
        match cache.load() {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "ignoring unreadable key cache");
                None
            }
        }
    }

    /// Best-effort write of the cached record. Returns whether it was stored.
    fn try_store_cached(&self, record: &CachedKey) -> bool {
        let Some(cache) = self.cache.as_ref() else {
            return false;
        };
        match cache.save(record) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, key_id = %record.key_id, "key cache not written");
                false
            }
        }
    }
}
