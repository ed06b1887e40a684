//! Sharded in-process store with per-entry leases
//!
//! # Design
//!
//! - DashMap keyed by namespace (the key text before the first `:`)
//! - FxHashMap inside each shard: O(1) lookups
//! - Leases are absolute expiry timestamps taken from the store's [`Clock`]
//!
//! Expired entries are invisible to every read. They are physically
//! removed when a read or write finds them expired, and by a sweep over all
//! shards that runs at most once per sweep interval (see
//! [`ShardedStore::purge_expired`]).
//!
//! # Thread Safety
//!
//! - Reads only take the target shard's read guard
//! - Writes only lock the target shard
//! - Different namespaces never contend

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chargegraph_core::{GraphError, GraphResult};
use dashmap::DashMap;
use rustc_hash::FxHashMap;

use crate::backend::KvBackend;
use crate::clock::{Clock, SystemClock};

/// Separator between a key's namespace and the rest of the key.
const NAMESPACE_SEP: char = ':';

/// Minimum time between two full expiry sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// A stored value with its lease.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    /// Absolute expiry in epoch milliseconds, `None` for no lease.
    expires_at: Option<i64>,
}

impl Entry {
    fn is_live(&self, now: i64) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

#[derive(Debug, Clone)]
enum Record {
    Plain(Entry),
    Hash(FxHashMap<String, Entry>),
}

impl Record {
    fn is_live(&self, now: i64) -> bool {
        match self {
            Record::Plain(e) => e.is_live(now),
            Record::Hash(fields) => fields.values().any(|e| e.is_live(now)),
        }
    }
}

/// Per-namespace shard
#[derive(Debug)]
pub struct Shard {
    data: FxHashMap<String, Record>,
}

impl Shard {
    /// Create a new empty shard
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }

    /// Number of keys in this shard, expired ones included
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if shard is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for Shard {
    fn default() -> Self {
        Self::new()
    }
}

fn namespace_of(key: &str) -> &str {
    key.split_once(NAMESPACE_SEP).map_or(key, |(ns, _)| ns)
}

fn wrong_type(key: &str, expected: &str) -> GraphError {
    GraphError::internal(format!("key '{}' does not hold a {} record", key, expected))
}

/// In-process [`KvBackend`] with lease expiry.
///
/// # Example
///
/// ```ignore
/// use chargegraph_storage::{KvBackend, ShardedStore};
/// use std::time::Duration;
///
/// let store = ShardedStore::new();
/// store.hash_put("charges:1", "2", "3.5", Some(Duration::from_secs(60)))?;
/// ```
pub struct ShardedStore {
    shards: DashMap<String, Shard>,
    clock: Arc<dyn Clock>,
    sweep_interval_ms: i64,
    /// Clock reading at the last full sweep.
    last_sweep: AtomicI64,
}

impl ShardedStore {
    /// Create a store driven by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a store driven by the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let now = clock.now_millis();
        Self {
            shards: DashMap::new(),
            clock,
            sweep_interval_ms: millis(DEFAULT_SWEEP_INTERVAL),
            last_sweep: AtomicI64::new(now),
        }
    }

    /// Change how often operations trigger a full expiry sweep
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval_ms = millis(interval);
        self
    }

    /// Number of namespaces holding data
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Total keys across shards, expired ones included
    pub fn total_entries(&self) -> usize {
        self.shards.iter().map(|entry| entry.value().len()).sum()
    }

    fn expiry(&self, now: i64, ttl: Option<Duration>) -> Option<i64> {
        ttl.map(|d| now.saturating_add(millis(d)))
    }

    /// Current time, running a full sweep first if one is due.
    ///
    /// Must be called before any shard guard is taken.
    fn tick(&self) -> i64 {
        let now = self.clock.now_millis();
        let last = self.last_sweep.load(Ordering::Relaxed);
        if now.saturating_sub(last) >= self.sweep_interval_ms
            && self
                .last_sweep
                .compare_exchange(last, now, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
        {
            self.purge_expired();
        }
        now
    }

    /// Drop `key` if it is fully expired, and expired fields of a hash.
    fn evict(&self, key: &str, now: i64) {
        let Some(mut shard) = self.shards.get_mut(namespace_of(key)) else {
            return;
        };
        let remove = match shard.data.get_mut(key) {
            Some(Record::Hash(fields)) => {
                fields.retain(|_, e| e.is_live(now));
                fields.is_empty()
            }
            Some(record) => !record.is_live(now),
            None => false,
        };
        if remove {
            shard.data.remove(key);
        }
    }

    /// Physically remove expired entries. Returns the number removed.
    ///
    /// Operations call this on their own once per sweep interval.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_millis();
        let mut removed = 0;
        for mut shard in self.shards.iter_mut() {
            shard.data.retain(|_, record| {
                if let Record::Hash(fields) = record {
                    let before = fields.len();
                    fields.retain(|_, e| e.is_live(now));
                    removed += before - fields.len();
                    return !fields.is_empty();
                }
                let live = record.is_live(now);
                if !live {
                    removed += 1;
                }
                live
            });
        }
        self.shards.retain(|_, shard| !shard.is_empty());
        self.last_sweep.store(now, Ordering::Relaxed);
        if removed > 0 {
            tracing::debug!(target: "chargegraph::storage", removed, "purged expired entries");
        }
        removed
    }
}

impl KvBackend for ShardedStore {
    fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> GraphResult<()> {
        let now = self.tick();
        let entry = Entry {
            value: value.to_string(),
            expires_at: self.expiry(now, ttl),
        };
        self.shards
            .entry(namespace_of(key).to_string())
            .or_insert_with(Shard::new)
            .data
            .insert(key.to_string(), Record::Plain(entry));
        Ok(())
    }

    fn get(&self, key: &str) -> GraphResult<Option<String>> {
        let now = self.tick();
        let Some(shard) = self.shards.get(namespace_of(key)) else {
            return Ok(None);
        };
        let expired = match shard.data.get(key) {
            Some(Record::Plain(e)) if e.is_live(now) => return Ok(Some(e.value.clone())),
            Some(record @ Record::Hash(_)) if record.is_live(now) => {
                return Err(wrong_type(key, "plain"))
            }
            Some(_) => true,
            None => false,
        };
        drop(shard);
        if expired {
            self.evict(key, now);
        }
        Ok(None)
    }

    fn delete(&self, key: &str) -> GraphResult<bool> {
        let now = self.tick();
        let removed = self
            .shards
            .get_mut(namespace_of(key))
            .and_then(|mut shard| shard.data.remove(key));
        Ok(removed.map_or(false, |record| record.is_live(now)))
    }

    fn hash_put(
        &self,
        key: &str,
        field: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> GraphResult<()> {
        let now = self.tick();
        let entry = Entry {
            value: value.to_string(),
            expires_at: self.expiry(now, ttl),
        };
        let mut shard = self
            .shards
            .entry(namespace_of(key).to_string())
            .or_insert_with(Shard::new);
        let record = shard
            .data
            .entry(key.to_string())
            .or_insert_with(|| Record::Hash(FxHashMap::default()));
        if matches!(record, Record::Plain(e) if e.is_live(now)) {
            return Err(wrong_type(key, "hash"));
        }
        if let Record::Plain(_) = record {
            *record = Record::Hash(FxHashMap::default());
        }
        if let Record::Hash(fields) = record {
            fields.retain(|_, e| e.is_live(now));
            fields.insert(field.to_string(), entry);
        }
        Ok(())
    }

    fn hash_delete(&self, key: &str, field: &str) -> GraphResult<bool> {
        let now = self.tick();
        let Some(mut shard) = self.shards.get_mut(namespace_of(key)) else {
            return Ok(false);
        };
        let (existed, now_empty) = match shard.data.get_mut(key) {
            Some(Record::Hash(fields)) => {
                let existed = fields.remove(field).map_or(false, |e| e.is_live(now));
                (existed, fields.is_empty())
            }
            Some(record @ Record::Plain(_)) if record.is_live(now) => {
                return Err(wrong_type(key, "hash"))
            }
            Some(Record::Plain(_)) | None => (false, false),
        };
        if now_empty {
            shard.data.remove(key);
        }
        Ok(existed)
    }

    fn hash_get_all(&self, key: &str) -> GraphResult<Vec<(String, String)>> {
        let now = self.tick();
        let Some(shard) = self.shards.get(namespace_of(key)) else {
            return Ok(Vec::new());
        };
        let (live, expired) = match shard.data.get(key) {
            Some(Record::Hash(fields)) => {
                let live: Vec<(String, String)> = fields
                    .iter()
                    .filter(|(_, e)| e.is_live(now))
                    .map(|(f, e)| (f.clone(), e.value.clone()))
                    .collect();
                let expired = live.len() < fields.len();
                (live, expired)
            }
            Some(record @ Record::Plain(_)) if record.is_live(now) => {
                return Err(wrong_type(key, "hash"))
            }
            Some(Record::Plain(_)) => (Vec::new(), true),
            None => (Vec::new(), false),
        };
        drop(shard);
        if expired {
            self.evict(key, now);
        }
        Ok(live)
    }

    fn scan_prefix(&self, prefix: &str) -> GraphResult<Vec<String>> {
        let now = self.tick();
        let mut keys: Vec<String> = self
            .shards
            .iter()
            .flat_map(|shard| {
                shard
                    .data
                    .iter()
                    .filter(|(k, record)| k.starts_with(prefix) && record.is_live(now))
                    .map(|(k, _)| k.clone())
                    .collect::<Vec<_>>()
            })
            .collect();
        keys.sort();
        Ok(keys)
    }
}

fn millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}

impl Default for ShardedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShardedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedStore")
            .field("shard_count", &self.shard_count())
            .field("total_entries", &self.total_entries())
            .finish()
    }
}
