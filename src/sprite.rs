//! Sprites and the cached lookup of the default placeholder sprite.
//!
//! A procedural image can be drawn without any user supplied sprite. In that case the host
//! assigns a well-known placeholder resource, and it needs to be able to tell that
//! placeholder apart from a sprite the user picked. [`DefaultSpriteCache`] loads the
//! placeholder once through a [`ResourceLoader`] and answers identity queries against it.

use ahash::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

/// Name of the placeholder resource looked up by [`DefaultSpriteCache`].
pub const DEFAULT_SPRITE_NAME: &str = "procedural_ui_image_default_sprite";

/// Decoded RGBA8 image data.
#[derive(Clone, PartialEq, Eq)]
pub struct Sprite {
    name: String,
    dimensions: (u32, u32),
    pixels: Vec<u8>,
}

impl Sprite {
    /// Creates a sprite. `pixels` is expected to hold `width * height * 4` bytes.
    pub fn new(name: impl Into<String>, dimensions: (u32, u32), pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            dimensions.0 as usize * dimensions.1 as usize * 4,
            "sprite pixel data does not match its dimensions"
        );
        Self {
            name: name.into(),
            dimensions,
            pixels,
        }
    }

    /// A 1x1 opaque white sprite, the usual content of the placeholder resource.
    pub fn white_pixel(name: impl Into<String>) -> Self {
        Self::new(name, (1, 1), vec![255; 4])
    }

    /// The name the sprite was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Tightly packed RGBA8 rows.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("name", &self.name)
            .field("dimensions", &self.dimensions)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Shared reference to a loaded sprite. Two handles refer to the same resource only if they
/// point at the same allocation, see [`same_sprite`].
pub type SpriteHandle = Arc<Sprite>;

/// Identity comparison of two sprite handles. Content is never compared.
#[inline]
pub fn same_sprite(a: &SpriteHandle, b: &SpriteHandle) -> bool {
    Arc::ptr_eq(a, b)
}

/// Looks up named sprite resources on behalf of the crate.
///
/// Any `Fn(&str) -> Option<SpriteHandle>` is a loader, which keeps test doubles short.
pub trait ResourceLoader {
    /// Returns the resource registered as `name`, or `None` if it does not exist.
    fn load_named(&self, name: &str) -> Option<SpriteHandle>;
}

impl<F> ResourceLoader for F
where
    F: Fn(&str) -> Option<SpriteHandle>,
{
    fn load_named(&self, name: &str) -> Option<SpriteHandle> {
        self(name)
    }
}

/// An in-memory [`ResourceLoader`] backed by a name to sprite map.
///
/// Cloning the loader shares the underlying storage, so sprites can be inserted from one
/// thread while another one resolves them.
#[derive(Clone, Default)]
pub struct MemoryResourceLoader {
    sprites: Arc<RwLock<HashMap<String, SpriteHandle>>>,
}

impl MemoryResourceLoader {
    /// An empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `sprite` under `name`, replacing any previous entry, and returns the handle
    /// that later lookups will hand out.
    pub fn insert(&self, name: impl Into<String>, sprite: Sprite) -> SpriteHandle {
        let handle = Arc::new(sprite);
        self.write().insert(name.into(), handle.clone());
        handle
    }

    /// Removes the sprite stored under `name`.
    pub fn remove(&self, name: &str) -> Option<SpriteHandle> {
        self.write().remove(name)
    }

    /// Number of registered sprites.
    pub fn len(&self) -> usize {
        self.sprites
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no sprite is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, SpriteHandle>> {
        self.sprites.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResourceLoader for MemoryResourceLoader {
    fn load_named(&self, name: &str) -> Option<SpriteHandle> {
        self.sprites
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

impl fmt::Debug for MemoryResourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryResourceLoader")
            .field("sprites", &self.len())
            .finish()
    }
}

/// Lazily loaded handle to the placeholder sprite.
///
/// - The first successful lookup of [`DEFAULT_SPRITE_NAME`] is kept until [`reset`] is
///   called; later calls never query the loader again.
/// - A failed lookup is not remembered. Every following call asks the loader again until
///   the resource shows up.
///
/// The slot sits behind a mutex that is held while the loader runs, so concurrent first
/// callers trigger a single successful load.
///
/// [`reset`]: DefaultSpriteCache::reset
///
/// # Examples
///
/// ```rust
/// use procedural_image::{DefaultSpriteCache, MemoryResourceLoader, Sprite, DEFAULT_SPRITE_NAME};
///
/// let loader = MemoryResourceLoader::new();
/// let placeholder = loader.insert(DEFAULT_SPRITE_NAME, Sprite::white_pixel("placeholder"));
///
/// let cache = DefaultSpriteCache::new();
/// assert!(cache.is_default(&placeholder, &loader));
///
/// // Same pixels, different resource.
/// let lookalike = std::sync::Arc::new(Sprite::white_pixel("placeholder"));
/// assert!(!cache.is_default(&lookalike, &loader));
/// ```
#[derive(Debug, Default)]
pub struct DefaultSpriteCache {
    slot: Mutex<Option<SpriteHandle>>,
}

impl DefaultSpriteCache {
    /// An empty cache. `const`, so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Eagerly resolves the placeholder. Equivalent to [`DefaultSpriteCache::get_or_load`];
    /// useful to pay the lookup cost at a known point during start-up.
    pub fn init(&self, loader: &(impl ResourceLoader + ?Sized)) -> Option<SpriteHandle> {
        self.get_or_load(loader)
    }

    /// Returns the placeholder sprite, loading it on first use.
    pub fn get_or_load(&self, loader: &(impl ResourceLoader + ?Sized)) -> Option<SpriteHandle> {
        let mut slot = self.lock();
        if let Some(handle) = slot.as_ref() {
            return Some(handle.clone());
        }

        match loader.load_named(DEFAULT_SPRITE_NAME) {
            Some(handle) => {
                tracing::trace!(name = DEFAULT_SPRITE_NAME, "default sprite loaded");
                *slot = Some(handle.clone());
                Some(handle)
            }
            None => {
                tracing::debug!(
                    name = DEFAULT_SPRITE_NAME,
                    "default sprite resource not found, will retry on next access"
                );
                None
            }
        }
    }

    /// The cached placeholder, without attempting a load.
    pub fn cached(&self) -> Option<SpriteHandle> {
        self.lock().clone()
    }

    /// Whether `candidate` is the very placeholder resource.
    ///
    /// Loads the placeholder if needed. When no placeholder is available nothing can be the
    /// default, so this returns `false`.
    pub fn is_default(
        &self,
        candidate: &SpriteHandle,
        loader: &(impl ResourceLoader + ?Sized),
    ) -> bool {
        self.get_or_load(loader)
            .is_some_and(|default| same_sprite(&default, candidate))
    }

    /// Forgets the cached placeholder. The next access queries the loader again.
    pub fn reset(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<SpriteHandle>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static GLOBAL_DEFAULT_SPRITE_CACHE: OnceLock<DefaultSpriteCache> = OnceLock::new();

/// The process-wide [`DefaultSpriteCache`].
///
/// Hosts that only ever deal with a single resource system can use this instead of
/// threading a cache through their code. Tests should prefer a local
/// [`DefaultSpriteCache`], or call [`DefaultSpriteCache::reset`] between cases.
pub fn global_default_sprite_cache() -> &'static DefaultSpriteCache {
    GLOBAL_DEFAULT_SPRITE_CACHE.get_or_init(DefaultSpriteCache::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    /// Counts lookups and optionally serves the placeholder.
    struct CountingLoader {
        calls: AtomicUsize,
        sprite: Option<SpriteHandle>,
    }

    impl CountingLoader {
        fn serving(sprite: Option<SpriteHandle>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                sprite,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ResourceLoader for CountingLoader {
        fn load_named(&self, name: &str) -> Option<SpriteHandle> {
            assert_eq!(name, DEFAULT_SPRITE_NAME);
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sprite.clone()
        }
    }

    fn placeholder() -> SpriteHandle {
        Arc::new(Sprite::white_pixel(DEFAULT_SPRITE_NAME))
    }

    #[test]
    fn successful_load_is_cached() {
        let loader = CountingLoader::serving(Some(placeholder()));
        let cache = DefaultSpriteCache::new();

        let first = cache.get_or_load(&loader).unwrap();
        let second = cache.get_or_load(&loader).unwrap();

        assert!(same_sprite(&first, &second));
        assert_eq!(loader.calls(), 1);
    }

    #[test]
    fn failed_load_is_retried_on_every_call() {
        let loader = CountingLoader::serving(None);
        let cache = DefaultSpriteCache::new();

        assert!(cache.get_or_load(&loader).is_none());
        assert!(cache.get_or_load(&loader).is_none());
        assert!(cache.cached().is_none());
        assert_eq!(loader.calls(), 2);
    }

    #[test]
    fn resource_appearing_later_is_picked_up() {
        let loader = MemoryResourceLoader::new();
        let cache = DefaultSpriteCache::new();
        assert!(cache.get_or_load(&loader).is_none());

        let handle = loader.insert(DEFAULT_SPRITE_NAME, Sprite::white_pixel("late"));
        let loaded = cache.get_or_load(&loader).unwrap();
        assert!(same_sprite(&loaded, &handle));
    }

    #[test]
    fn is_default_compares_identity_not_content() {
        let default = placeholder();
        let loader = CountingLoader::serving(Some(default.clone()));
        let cache = DefaultSpriteCache::new();

        let lookalike = placeholder();
        assert_eq!(*lookalike, *default);

        assert!(cache.is_default(&default, &loader));
        assert!(!cache.is_default(&lookalike, &loader));
        assert_eq!(loader.calls(), 1);
    }

    #[test]
    fn nothing_is_default_without_a_placeholder() {
        let loader = CountingLoader::serving(None);
        let cache = DefaultSpriteCache::new();
        assert!(!cache.is_default(&placeholder(), &loader));
    }

    #[test]
    fn reset_forces_a_new_lookup() {
        let loader = CountingLoader::serving(Some(placeholder()));
        let cache = DefaultSpriteCache::new();

        cache.init(&loader);
        cache.reset();
        assert!(cache.cached().is_none());

        cache.get_or_load(&loader);
        assert_eq!(loader.calls(), 2);
    }

    #[test]
    fn closures_act_as_loaders() {
        let default = placeholder();
        let served = default.clone();
        let loader = move |name: &str| (name == DEFAULT_SPRITE_NAME).then(|| served.clone());

        let cache = DefaultSpriteCache::new();
        assert!(cache.is_default(&default, &loader));
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        const THREADS: usize = 8;

        let sprite = placeholder();
        let loader = CountingLoader::serving(Some(Arc::clone(&sprite)));
        let cache = DefaultSpriteCache::new();
        let barrier = Barrier::new(THREADS);

        let (cache, loader, barrier) = (&cache, &loader, &barrier);
        let handles: Vec<Option<SpriteHandle>> = thread::scope(|scope| {
            let workers: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(move || {
                        barrier.wait();
                        cache.get_or_load(loader)
                    })
                })
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().unwrap())
                .collect()
        });

        assert_eq!(loader.calls(), 1);
        assert_eq!(handles.len(), THREADS);
        for handle in &handles {
            assert!(same_sprite(handle.as_ref().unwrap(), &sprite));
        }
    }

    #[test]
    fn global_cache_is_shared() {
        assert!(std::ptr::eq(
            global_default_sprite_cache(),
            global_default_sprite_cache()
        ));
    }

    #[test]
    fn memory_loader_remove_drops_entry() {
        let loader = MemoryResourceLoader::new();
        loader.insert("a", Sprite::white_pixel("a"));
        assert_eq!(loader.len(), 1);
        assert!(loader.remove("a").is_some());
        assert!(loader.is_empty());
        assert!(loader.load_named("a").is_none());
    }
}
