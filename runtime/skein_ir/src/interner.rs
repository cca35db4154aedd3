//! Sharded content interner for canonical text instances.
//!
//! Maps exact UTF-16 content to the single canonical value registered for
//! it. The value type is the kind discriminator: a `ContentInterner<Text>`
//! only ever holds text, so keys from different kinds cannot collide.
//!
//! Entries are never evicted. Lookup and insert-if-absent are atomic per
//! shard, so concurrent callers always observe one canonical instance.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Number of independently locked shards.
pub const NUM_SHARDS: usize = 16;

/// Per-shard storage.
struct InternShard<V> {
    /// Map from exact content to the canonical value.
    map: FxHashMap<Box<[u16]>, V>,
}

impl<V> InternShard<V> {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

/// Sharded content interner for concurrent access.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Wrap in [`SharedContentInterner`] to share
/// one interner between runtime handles.
pub struct ContentInterner<V> {
    shards: [RwLock<InternShard<V>>; NUM_SHARDS],
    /// Total count of canonical entries across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl<V: Clone> ContentInterner<V> {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(InternShard::new())),
            total_count: AtomicUsize::new(0),
        }
    }

    /// Compute shard for a buffer based on its leading units.
    #[inline]
    fn shard_for(content: &[u16]) -> usize {
        let mut hash = 0u32;
        for &unit in content.iter().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(unit));
        }
        (hash as usize) % NUM_SHARDS
    }

    /// Look up the canonical value for `content` without registering it.
    pub fn get(&self, content: &[u16]) -> Option<V> {
        let shard = &self.shards[Self::shard_for(content)];
        shard.read().map.get(content).cloned()
    }

    /// Return the canonical value for `content`, creating it with `make` on
    /// first sight.
    ///
    /// `make` receives an owned copy of the content and runs at most once per
    /// distinct content for the lifetime of the interner.
    pub fn intern_with<F>(&self, content: &[u16], make: F) -> V
    where
        F: FnOnce(Box<[u16]>) -> V,
    {
        let shard_idx = Self::shard_for(content);
        let shard = &self.shards[shard_idx];

        // Fast path: already interned
        if let Some(existing) = shard.read().map.get(content) {
            return existing.clone();
        }

        // Slow path: need to insert
        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(existing) = guard.map.get(content) {
            return existing.clone();
        }

        let value = make(Box::from(content));
        guard.map.insert(Box::from(content), value.clone());

        // Relaxed is fine: the count carries no ordering obligations
        let total = self.total_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(shard = shard_idx, total, "interned new content");

        value
    }

    /// Number of canonical entries (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for ContentInterner<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ContentInterner<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentInterner")
            .field("len", &self.total_count.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Shared handle to one interner.
///
/// Created once at runtime start and cloned into every construction path
/// that needs canonical instances; never cleared.
pub struct SharedContentInterner<V>(Arc<ContentInterner<V>>);

impl<V: Clone> SharedContentInterner<V> {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedContentInterner(Arc::new(ContentInterner::new()))
    }

    /// Whether two handles refer to the same interner.
    pub fn same_interner(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<V> Clone for SharedContentInterner<V> {
    fn clone(&self) -> Self {
        SharedContentInterner(Arc::clone(&self.0))
    }
}

impl<V: Clone> Default for SharedContentInterner<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::ops::Deref for SharedContentInterner<V> {
    type Target = ContentInterner<V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V> fmt::Debug for SharedContentInterner<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedContentInterner").field(&*self.0).finish()
    }
}
