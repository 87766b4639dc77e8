use rustc_hash::FxHashMap;
use slotmap::{Key, SlotMap};
use uuid::Uuid;

/// Handle-addressed storage for one asset family.
///
/// Assets are owned by the storage and addressed through `slotmap` keys; the
/// key doubles as the asset identity used by render-side caches. An optional
/// UUID index deduplicates assets registered from an external source.
///
/// The renderer core runs on a single thread, so the storage is plain data
/// mutated through `&mut self`.
pub struct AssetStorage<H: Key, T> {
    map: SlotMap<H, T>,
    lookup: FxHashMap<Uuid, H>,
}

impl<H: Key, T> Default for AssetStorage<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Key, T> AssetStorage<H, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: SlotMap::with_key(),
            lookup: FxHashMap::default(),
        }
    }

    /// Adds an asset and returns its handle.
    pub fn add(&mut self, asset: impl Into<T>) -> H {
        self.map.insert(asset.into())
    }

    /// Adds an asset keyed by UUID. Registering the same UUID twice returns
    /// the first handle and drops the new asset.
    pub fn add_with_uuid(&mut self, uuid: Uuid, asset: impl Into<T>) -> H {
        if let Some(&handle) = self.lookup.get(&uuid) {
            return handle;
        }
        let handle = self.map.insert(asset.into());
        self.lookup.insert(uuid, handle);
        handle
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: H) -> Option<&T> {
        self.map.get(handle)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.map.get_mut(handle)
    }

    #[must_use]
    pub fn get_handle_by_uuid(&self, uuid: &Uuid) -> Option<H> {
        self.lookup.get(uuid).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, handle: H) -> bool {
        self.map.contains_key(handle)
    }

    /// Removes an asset, returning it if it was present.
    pub fn remove(&mut self, handle: H) -> Option<T> {
        self.lookup.retain(|_, h| *h != handle);
        self.map.remove(handle)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> {
        self.map.iter()
    }
}
