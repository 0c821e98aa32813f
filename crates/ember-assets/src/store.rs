use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Process-wide string-keyed store for loaded assets. The loader writes
/// entries from the driving thread; other systems read through the same
/// shared handle. Keys are unique per logical asset name; a re-insert
/// replaces the previous entry.
pub struct AssetStore<T> {
    entries: RwLock<HashMap<String, Arc<T>>>,
}

impl<T> AssetStore<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, key: impl Into<String>, value: T) {
        self.entries.write().insert(key.into(), Arc::new(value));
    }

    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        self.entries.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Re-key every entry whose key contains `marker` under the
    /// marker-less name, so variant assets become addressable by their
    /// logical path.
    pub fn strip_key_marker(&self, marker: &str) {
        let mut entries = self.entries.write();
        let variants: Vec<String> = entries
            .keys()
            .filter(|k| k.contains(marker))
            .cloned()
            .collect();
        for key in variants {
            if let Some(value) = entries.remove(&key) {
                entries.insert(key.replace(marker, ""), value);
            }
        }
    }
}

impl<T> Default for AssetStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
