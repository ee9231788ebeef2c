//! Recency-stamped residency store with a high/low watermark pair.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use tilestream_core::{ContentCache, TileId};

/// Sizing for the cache, in resident tiles.
///
/// `is_full` trips at `max_items`, while the unload sweep drains back down
/// to `min_items`. The gap between the two gives the traversal headroom to
/// keep admitting content between sweeps instead of thrashing at a single
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LruCacheConfig {
    /// Resident-tile count the unload sweep drains down to.
    pub min_items: usize,
    /// Resident-tile count at which the cache reports full.
    pub max_items: usize,
}

impl Default for LruCacheConfig {
    fn default() -> Self {
        Self {
            min_items: 6000,
            max_items: 8000,
        }
    }
}

/// Bounded residency store for tile content.
///
/// Each resident tile carries a monotonic recency stamp, refreshed through
/// the cache contract's `mark_used` every frame the traversal retains it.
/// The store never evicts on its own; the host runs
/// [`unload_unused`](LruCache::unload_unused) between frames and releases
/// the corresponding content in the callback.
pub struct LruCache {
    config: LruCacheConfig,
    stamp: u64,
    entries: FxHashMap<TileId, u64>,
}

impl LruCache {
    /// Create a cache with the given watermarks.
    ///
    /// # Panics
    ///
    /// Panics if `min_items > max_items`.
    #[must_use]
    pub fn new(config: LruCacheConfig) -> Self {
        assert!(
            config.min_items <= config.max_items,
            "min_items must not exceed max_items"
        );
        Self {
            config,
            stamp: 0,
            entries: FxHashMap::default(),
        }
    }

    /// Current watermark configuration.
    #[must_use]
    pub fn config(&self) -> &LruCacheConfig {
        &self.config
    }

    /// Number of resident tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is resident.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the given tile's content is resident.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Resident-tile count at which admission stops.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.max_items
    }

    /// Admit a tile's content. Refreshes recency if already resident.
    /// Returns false — and admits nothing — when the cache is full.
    pub fn try_insert(&mut self, id: TileId) -> bool {
        let stamp = self.next_stamp();
        if let Some(entry) = self.entries.get_mut(&id) {
            *entry = stamp;
            return true;
        }
        if self.entries.len() >= self.config.max_items {
            return false;
        }
        self.entries.insert(id, stamp);
        true
    }

    /// Drop a tile's content record. Returns true if it was resident.
    pub fn remove(&mut self, id: TileId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Evict least-recently-used entries not claimed by `in_use`, oldest
    /// first, until residency reaches `min_items` or only claimed entries
    /// remain. Fires `on_unload` once per evicted tile and returns the
    /// eviction count.
    pub fn unload_unused(
        &mut self,
        in_use: impl Fn(TileId) -> bool,
        mut on_unload: impl FnMut(TileId),
    ) -> usize {
        if self.entries.len() <= self.config.min_items {
            return 0;
        }

        let mut candidates: Vec<(TileId, u64)> = self
            .entries
            .iter()
            .filter(|(id, _)| !in_use(**id))
            .map(|(id, stamp)| (*id, *stamp))
            .collect();
        candidates.sort_by_key(|&(_, stamp)| stamp);

        let excess = self.entries.len() - self.config.min_items;
        let mut unloaded = 0;
        for (id, _) in candidates.into_iter().take(excess) {
            self.entries.remove(&id);
            on_unload(id);
            unloaded += 1;
        }

        if unloaded > 0 {
            tracing::trace!(unloaded, resident = self.entries.len(), "evicted tile content");
        }
        unloaded
    }

    fn next_stamp(&mut self) -> u64 {
        self.stamp += 1;
        self.stamp
    }
}

impl ContentCache for LruCache {
    /// Refresh recency for a resident tile; a tile whose content was never
    /// admitted has no residency to refresh.
    fn mark_used(&mut self, id: TileId) {
        let stamp = self.next_stamp();
        if let Some(entry) = self.entries.get_mut(&id) {
            *entry = stamp;
        }
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.config.max_items
    }
}
