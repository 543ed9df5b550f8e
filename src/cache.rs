use crate::CornerRadii;
use lru::LruCache;
use lyon::tessellation::VertexBuffers;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

/// Tessellated outline in shape-local coordinates (origin at the top-left corner).
pub(crate) type OutlineBuffers = VertexBuffers<[f32; 2], u16>;

const DEFAULT_CAPACITY: usize = 256;

/// Memoizes outline tessellations of procedural images.
///
/// Outlines are stored in local space and keyed by everything that changes their geometry:
/// size, fitted radii and border width. Moving or recoloring an image therefore reuses the
/// cached outline.
pub struct TessellationCache {
    outlines: LruCache<u64, OutlineBuffers>,
}

impl TessellationCache {
    /// A cache holding at most `capacity` outlines.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            outlines: LruCache::new(capacity),
        }
    }

    /// Number of cached outlines.
    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    /// Whether no outline is cached.
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }

    /// Drops every cached outline.
    pub fn clear(&mut self) {
        self.outlines.clear();
    }

    pub(crate) fn get_outline(&mut self, cache_key: &u64) -> Option<&OutlineBuffers> {
        self.outlines.get(cache_key)
    }

    pub(crate) fn insert_outline(&mut self, cache_key: u64, outline: OutlineBuffers) {
        self.outlines.put(cache_key, outline);
    }
}

impl Default for TessellationCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

impl std::fmt::Debug for TessellationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TessellationCache")
            .field("len", &self.outlines.len())
            .field("capacity", &self.outlines.cap())
            .finish()
    }
}

pub(crate) fn outline_cache_key(size: (f32, f32), radii: &CornerRadii, border_width: f32) -> u64 {
    let mut hasher = DefaultHasher::new();
    size.0.to_bits().hash(&mut hasher);
    size.1.to_bits().hash(&mut hasher);
    for radius in radii.to_array() {
        radius.to_bits().hash(&mut hasher);
    }
    border_width.to_bits().hash(&mut hasher);
    hasher.finish()
}
