//! In-memory [`ThemeHost`] for tests and non-browser environments.
//!
//! Several hosts can share one store as sibling "tabs". A write from one tab
//! notifies the listeners of every other tab, but not its own, which is how
//! browsers deliver `storage` events.

#[cfg(test)]
#[path = "memory_host_test.rs"]
mod memory_host_test;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::host::{StorageChange, StorageHandler, Subscription, ThemeHost};

type SharedHandler = Arc<dyn Fn(StorageChange) + Send + Sync>;

struct Listener {
    id: u64,
    tab: u64,
    handler: SharedHandler,
}

#[derive(Default)]
struct Store {
    items: HashMap<String, String>,
    listeners: Vec<Listener>,
    next_id: u64,
}

impl Store {
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Default)]
struct Tab {
    classes: BTreeSet<String>,
    prefers_dark: bool,
    writes: usize,
}

/// A fake browser tab. Clones refer to the same tab; use
/// [`MemoryHost::sibling`] to open another tab on the same store.
#[derive(Clone)]
pub struct MemoryHost {
    store: Arc<Mutex<Store>>,
    tab: Arc<Mutex<Tab>>,
    tab_id: u64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryHost {
    pub fn new() -> Self {
        let mut store = Store::default();
        let tab_id = store.allocate_id();
        Self {
            store: Arc::new(Mutex::new(store)),
            tab: Arc::new(Mutex::new(Tab::default())),
            tab_id,
        }
    }

    /// Another tab sharing this tab's store, with its own DOM and listeners.
    #[must_use]
    pub fn sibling(&self) -> Self {
        let tab_id = lock(&self.store).allocate_id();
        Self {
            store: Arc::clone(&self.store),
            tab: Arc::new(Mutex::new(Tab::default())),
            tab_id,
        }
    }

    /// Seed a stored value without notifying anyone.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        lock(&self.store)
            .items
            .insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_prefers_dark(self, prefers_dark: bool) -> Self {
        lock(&self.tab).prefers_dark = prefers_dark;
        self
    }

    pub fn item(&self, key: &str) -> Option<String> {
        lock(&self.store).items.get(key).cloned()
    }

    /// Remove a stored value, notifying other tabs with an empty `new_value`.
    pub fn remove(&self, key: &str) {
        let removed = lock(&self.store).items.remove(key).is_some();
        if removed {
            self.broadcast(&StorageChange {
                key: Some(key.to_owned()),
                new_value: None,
            });
        }
    }

    /// Clear the store, notifying other tabs with an empty `key`.
    pub fn clear(&self) {
        lock(&self.store).items.clear();
        self.broadcast(&StorageChange::default());
    }

    /// Deliver `change` to this tab's listeners as if another tab made it.
    /// The store itself is left untouched.
    pub fn emit(&self, change: StorageChange) {
        let handlers = self.handlers(|tab| tab == self.tab_id);
        for handler in handlers {
            handler(change.clone());
        }
    }

    /// Marker classes currently on this tab's root element.
    pub fn marker_classes(&self) -> Vec<String> {
        lock(&self.tab).classes.iter().cloned().collect()
    }

    /// Number of `write` calls made through this tab.
    pub fn write_count(&self) -> usize {
        lock(&self.tab).writes
    }

    /// Number of listeners registered by this tab.
    pub fn listener_count(&self) -> usize {
        lock(&self.store)
            .listeners
            .iter()
            .filter(|l| l.tab == self.tab_id)
            .count()
    }

    fn handlers(&self, wanted: impl Fn(u64) -> bool) -> Vec<SharedHandler> {
        lock(&self.store)
            .listeners
            .iter()
            .filter(|l| wanted(l.tab))
            .map(|l| Arc::clone(&l.handler))
            .collect()
    }

    // Handlers run with no lock held; they may write back through any tab.
    fn broadcast(&self, change: &StorageChange) {
        let handlers = self.handlers(|tab| tab != self.tab_id);
        for handler in handlers {
            handler(change.clone());
        }
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHost")
            .field("tab_id", &self.tab_id)
            .field("classes", &self.marker_classes())
            .finish_non_exhaustive()
    }
}

impl ThemeHost for MemoryHost {
    fn read(&self, key: &str) -> Option<String> {
        self.item(key)
    }

    fn write(&self, key: &str, value: &str) {
        lock(&self.tab).writes += 1;
        let previous = lock(&self.store)
            .items
            .insert(key.to_owned(), value.to_owned());
        if previous.as_deref() != Some(value) {
            self.broadcast(&StorageChange::new(key, value));
        }
    }

    fn prefers_dark(&self, _query: &str) -> bool {
        lock(&self.tab).prefers_dark
    }

    fn set_marker(&self, add: &str, remove: &str) {
        let mut tab = lock(&self.tab);
        tab.classes.remove(remove);
        tab.classes.insert(add.to_owned());
    }

    fn subscribe(&self, handler: StorageHandler) -> Subscription {
        let id = {
            let mut store = lock(&self.store);
            let id = store.allocate_id();
            store.listeners.push(Listener {
                id,
                tab: self.tab_id,
                handler: Arc::from(handler),
            });
            id
        };
        let store = Arc::downgrade(&self.store);
        Subscription::new(move || {
            if let Some(store) = store.upgrade() {
                lock(&store).listeners.retain(|l| l.id != id);
            }
        })
    }
}
