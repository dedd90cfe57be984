#![forbid(unsafe_code)]

//! LRU cache of cluster widths.
//!
//! A demo screen redraws the same handful of icons and labels on every
//! frame. The cache memoises [`WidthCalculator::cluster_width`] per
//! `(cluster text, mode)` pair so toggling modes never serves a stale width.
//!
//! # Example
//! ```
//! use cellwidth_core::WidthMode;
//! use cellwidth_text::{ColumnWidth, WidthCache, WidthCalculator, clusters};
//!
//! let calc = WidthCalculator::default();
//! let mut cache = WidthCache::new(64);
//! let gear = clusters("\u{2699}\u{FE0F}").next().unwrap();
//!
//! assert_eq!(cache.get_or_compute(&gear, WidthMode::Narrow, &calc), ColumnWidth::Wide);
//! assert_eq!(cache.get_or_compute(&gear, WidthMode::Narrow, &calc), ColumnWidth::Wide);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use cellwidth_core::WidthMode;
use lru::LruCache;
use rustc_hash::FxHasher;

use crate::cluster::Cluster;
use crate::width::{ColumnWidth, WidthCalculator};

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache performance counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache keyed by a 64-bit FxHash of the cluster text and mode.
///
/// Not thread-safe; keep one per draw loop.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, ColumnWidth>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache holding up to `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Cached width of `cluster` under `mode`, computing it on a miss.
    pub fn get_or_compute(
        &mut self,
        cluster: &Cluster<'_>,
        mode: WidthMode,
        calc: &WidthCalculator,
    ) -> ColumnWidth {
        let key = cache_key(cluster.as_str(), mode);
        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }
        self.misses += 1;
        let width = calc.cluster_width(cluster, mode);
        self.cache.put(key, width);
        width
    }

    /// Cached width without computing or touching LRU order.
    #[must_use]
    pub fn peek(&self, cluster: &Cluster<'_>, mode: WidthMode) -> Option<ColumnWidth> {
        self.cache.peek(&cache_key(cluster.as_str(), mode)).copied()
    }

    #[must_use]
    pub fn contains(&self, cluster: &Cluster<'_>, mode: WidthMode) -> bool {
        self.cache.contains(&cache_key(cluster.as_str(), mode))
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn cache_key(text: &str, mode: WidthMode) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    mode.hash(&mut hasher);
    hasher.finish()
}
