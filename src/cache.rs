use std::num::NonZeroUsize;
use std::path::Path;
use std::path::PathBuf;

use lru::LruCache;
#[cfg(feature = "poem")]
use poem_openapi::Object;
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

/// Hit/miss counters of a [`TextCache`].
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[cfg_attr(feature = "poem", derive(Object))]
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub struct CacheStats {
    /// Lookups that found a verdict.
    pub hits: u64,
    /// Lookups that did not.
    pub misses: u64,
}

/// Remembers whether a path was classified as textual.
///
/// Entries are never refreshed on their own: if a file changes on disk its
/// old verdict stays until [`TextCache::invalidate`] or [`TextCache::clear`]
/// is called.
pub struct TextCache {
    lru: LruCache<PathBuf, bool>,
    stats: CacheStats,
}

impl TextCache {
    /// Creates a cache that never evicts.
    pub fn new() -> Self {
        TextCache {
            lru: LruCache::unbounded(),
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache holding at most `capacity` verdicts, evicting the least
    /// recently used one.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        TextCache {
            lru: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached verdict for `key`, if any.
    pub fn get(&mut self, key: &Path) -> Option<bool> {
        let ret = self.lru.get(key).copied();
        if ret.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        ret
    }

    /// Stores a verdict for `key`, replacing any previous one.
    pub fn put(&mut self, key: PathBuf, value: bool) {
        self.lru.put(key, value);
    }

    /// Forgets the verdict for `key` and returns it.
    pub fn invalidate(&mut self, key: &Path) -> Option<bool> {
        self.lru.pop(key)
    }

    /// Forgets all verdicts. Counters are kept.
    pub fn clear(&mut self) {
        self.lru.clear();
    }

    /// Number of cached verdicts.
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    /// Whether no verdict is cached.
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// Hit/miss counters since creation.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl Default for TextCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_hits_and_misses() {
        let mut cache = TextCache::new();
        assert_eq!(cache.get(Path::new("a")), None);
        cache.put("a".into(), true);
        assert_eq!(cache.get(Path::new("a")), Some(true));
        assert_eq!(cache.get(Path::new("b")), None);
        assert_eq!(cache.stats(), &CacheStats { hits: 1, misses: 2 });
    }

    #[test]
    fn invalidate_and_clear() {
        let mut cache = TextCache::default();
        cache.put("a".into(), true);
        cache.put("b".into(), false);
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.invalidate(Path::new("b")), Some(false));
        assert_eq!(cache.invalidate(Path::new("b")), None);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn unbounded_keeps_everything() {
        let mut cache = TextCache::new();
        for i in 0..5000 {
            cache.put(PathBuf::from(format!("f{i}")), i % 2 == 0);
        }
        assert_eq!(cache.len(), 5000);
        assert_eq!(cache.get(Path::new("f0")), Some(true));
    }

    #[test]
    fn bounded_evicts_least_recently_used() {
        let mut cache = TextCache::with_capacity(NonZeroUsize::new(2).unwrap());
        cache.put("a".into(), true);
        cache.put("b".into(), true);
        cache.get(Path::new("a"));
        cache.put("c".into(), false);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(Path::new("b")), None);
        assert_eq!(cache.get(Path::new("a")), Some(true));
    }
}
