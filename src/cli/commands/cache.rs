use sha2::{Digest, Sha256};

use crate::cli::context::Settings;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::cached_key::CachedKey;
use crate::core::traits::key_cache::KeyCache;

/// Execute `keyarmor cache`: describe what the cache slot holds.
///
/// Read problems are shown, not returned; an unusable cache is just a miss.
pub fn execute(settings: &Settings) -> Result<()> {
    let Some(cache) = settings.key_cache() else {
        if settings.cache_enabled {
            output::warning("No home directory found, public key cache unavailable.");
        } else {
            output::warning("Public key cache is disabled.");
        }
        return Ok(());
    };

    output::header("Public key cache");
    output::field("File", &cache.path().display().to_string());

    match cache.load() {
        Ok(Some(record)) => describe(&record),
        Ok(None) => output::field("Status", "empty"),
        Err(e) => {
            output::field("Status", "unreadable (next export will refresh it)");
            output::warning(&e.to_string());
        }
    }
    Ok(())
}

fn describe(record: &CachedKey) {
    let status = if record.body.is_empty() {
        "empty body (never served)"
    } else {
        "valid"
    };
    output::field("Status", status);
    output::field("Key ID", &record.key_id);
    output::field("Size", &format!("{} bytes", record.body.len()));
    output::field("SHA-256", &body_digest(&record.body));
    if let Some(at) = record.cached_at {
        output::field("Cached at", &at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
    }
}

/// Hex SHA-256 of the cached body, to compare against a fresh export.
fn body_digest(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    format!("{:x}", hasher.finalize())
}
