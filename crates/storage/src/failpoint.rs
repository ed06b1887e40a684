//! Failure injection for any [`KvBackend`].
//!
//! `FailpointStore` forwards every call to an inner backend unless an armed
//! failpoint matches, in which case the call fails with `StoreUnavailable`
//! without touching the inner store. It also counts calls per operation,
//! which lets tests assert how many round trips an algorithm made.

use std::sync::Arc;
use std::time::Duration;

use chargegraph_core::{GraphError, GraphResult};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::backend::KvBackend;

/// Backend operation a failpoint can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailOp {
    /// [`KvBackend::put`]
    Put,
    /// [`KvBackend::get`]
    Get,
    /// [`KvBackend::delete`]
    Delete,
    /// [`KvBackend::contains`]
    Contains,
    /// [`KvBackend::hash_put`]
    HashPut,
    /// [`KvBackend::hash_delete`]
    HashDelete,
    /// [`KvBackend::hash_get_all`]
    HashGetAll,
    /// [`KvBackend::scan_prefix`]
    ScanPrefix,
}

#[derive(Debug, Clone)]
struct Failpoint {
    op: FailOp,
    key: Option<String>,
    /// Calls to let through before firing.
    skip: usize,
    /// Remaining firings, `None` for unlimited.
    remaining: Option<usize>,
}

/// Backend wrapper that fails selected calls.
pub struct FailpointStore {
    inner: Arc<dyn KvBackend>,
    failpoints: Mutex<Vec<Failpoint>>,
    calls: Mutex<FxHashMap<FailOp, usize>>,
}

impl FailpointStore {
    /// Wrap `inner` with no failpoints armed.
    pub fn new(inner: Arc<dyn KvBackend>) -> Self {
        Self {
            inner,
            failpoints: Mutex::new(Vec::new()),
            calls: Mutex::new(FxHashMap::default()),
        }
    }

    /// Fail every call to `op` (on `key`, if given) until disarmed.
    pub fn fail_always(&self, op: FailOp, key: Option<&str>) {
        self.arm(op, key, 0, None);
    }

    /// Let `skip` matching calls through, then fail the next one only.
    pub fn fail_once_after(&self, op: FailOp, key: Option<&str>, skip: usize) {
        self.arm(op, key, skip, Some(1));
    }

    fn arm(&self, op: FailOp, key: Option<&str>, skip: usize, remaining: Option<usize>) {
        self.failpoints.lock().push(Failpoint {
            op,
            key: key.map(str::to_string),
            skip,
            remaining,
        });
    }

    /// Remove every failpoint.
    pub fn disarm_all(&self) {
        self.failpoints.lock().clear();
    }

    /// Calls made to `op` so far, failed ones included.
    pub fn calls(&self, op: FailOp) -> usize {
        self.calls.lock().get(&op).copied().unwrap_or(0)
    }

    /// Reset every call counter.
    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    fn check(&self, op: FailOp, key: &str) -> GraphResult<()> {
        *self.calls.lock().entry(op).or_insert(0) += 1;

        let mut failpoints = self.failpoints.lock();
        let hit = failpoints.iter_mut().position(|fp| {
            if fp.op != op || fp.key.as_deref().map_or(false, |k| k != key) {
                return false;
            }
            if fp.skip > 0 {
                fp.skip -= 1;
                return false;
            }
            true
        });
        let Some(idx) = hit else {
            return Ok(());
        };
        if let Some(remaining) = failpoints[idx].remaining.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                failpoints.remove(idx);
            }
        }
        tracing::debug!(target: "chargegraph::storage", ?op, key, "failpoint fired");
        Err(GraphError::store_unavailable(format!(
            "injected failure on {:?} '{}'",
            op, key
        )))
    }
}

impl KvBackend for FailpointStore {
    fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> GraphResult<()> {
        self.check(FailOp::Put, key)?;
        self.inner.put(key, value, ttl)
    }

    fn get(&self, key: &str) -> GraphResult<Option<String>> {
        self.check(FailOp::Get, key)?;
        self.inner.get(key)
    }

    fn delete(&self, key: &str) -> GraphResult<bool> {
        self.check(FailOp::Delete, key)?;
        self.inner.delete(key)
    }

    fn contains(&self, key: &str) -> GraphResult<bool> {
        self.check(FailOp::Contains, key)?;
        self.inner.contains(key)
    }

    fn hash_put(
        &self,
        key: &str,
        field: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> GraphResult<()> {
        self.check(FailOp::HashPut, key)?;
        self.inner.hash_put(key, field, value, ttl)
    }

    fn hash_delete(&self, key: &str, field: &str) -> GraphResult<bool> {
        self.check(FailOp::HashDelete, key)?;
        self.inner.hash_delete(key, field)
    }

    fn hash_get_all(&self, key: &str) -> GraphResult<Vec<(String, String)>> {
        self.check(FailOp::HashGetAll, key)?;
        self.inner.hash_get_all(key)
    }

    fn scan_prefix(&self, prefix: &str) -> GraphResult<Vec<String>> {
        self.check(FailOp::ScanPrefix, prefix)?;
        self.inner.scan_prefix(prefix)
    }
}

impl std::fmt::Debug for FailpointStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailpointStore")
            .field("armed", &self.failpoints.lock().len())
            .finish()
    }
}
