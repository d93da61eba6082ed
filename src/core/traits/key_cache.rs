use crate::core::errors::Result;
use crate::core::models::cached_key::CachedKey;

/// Port for the single-slot public key cache.
///
/// Implementations report faults through `Result`; the exporter decides
/// that none of them are fatal.
pub trait KeyCache {
    /// Read the current record. `Ok(None)` means the slot is empty.
    fn load(&self) -> Result<Option<CachedKey>>;

    /// Replace whatever the slot holds with `record`.
    fn save(&self, record: &CachedKey) -> Result<()>;
}
