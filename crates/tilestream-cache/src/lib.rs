//! Bounded LRU residency cache for tile content.
//!
//! Implements the traversal core's [`ContentCache`](tilestream_core::ContentCache)
//! contract: per-frame marking refreshes a tile's recency, fullness gates
//! further content requests, and an explicit unload sweep evicts the
//! least-recently-used entries that nothing claims.

mod lru;

pub use lru::{LruCache, LruCacheConfig};
