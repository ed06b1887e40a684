//! The key-value seam between the graph engine and its backing store.
//!
//! The model follows a networked key-value service: plain records and
//! hash records (field → value), each entry carrying an optional lease.
//! Every call is atomic for a single key, or a single field of a hash key.
//! There is no multi-key atomicity.

use std::time::Duration;

use chargegraph_core::GraphResult;

/// Backing store used by the directory and the edge store.
///
/// Implementations must report backend failures as
/// `GraphError::StoreUnavailable` rather than as absent data.
pub trait KvBackend: Send + Sync {
    /// Upsert a plain record. `ttl` replaces any previous lease.
    fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> GraphResult<()>;

    /// Read a live plain record.
    fn get(&self, key: &str) -> GraphResult<Option<String>>;

    /// Delete a plain or hash record. Returns whether a live record existed.
    fn delete(&self, key: &str) -> GraphResult<bool>;

    /// Whether a live plain record exists.
    fn contains(&self, key: &str) -> GraphResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Upsert one field of a hash record. The lease applies to that field.
    fn hash_put(&self, key: &str, field: &str, value: &str, ttl: Option<Duration>)
        -> GraphResult<()>;

    /// Delete one field of a hash record. Returns whether it was live.
    fn hash_delete(&self, key: &str, field: &str) -> GraphResult<bool>;

    /// All live fields of a hash record; empty if the key is absent.
    fn hash_get_all(&self, key: &str) -> GraphResult<Vec<(String, String)>>;

    /// Keys of live records starting with `prefix`.
    fn scan_prefix(&self, prefix: &str) -> GraphResult<Vec<String>>;
}
