//! Capability interface over the browser singletons the theme depends on.
//!
//! TRADE-OFFS
//! ==========
//! Every browser call is best-effort: a missing window, disabled storage or a
//! failed write degrades to a no-op rather than an error, and non-browser
//! builds compile the same API down to inert stubs.

use std::fmt;

/// A change to the shared store observed from another execution context.
///
/// Mirrors the fields of the DOM `StorageEvent` the theme cares about. `key`
/// is `None` when the whole store was cleared; `new_value` is `None` when the
/// key was removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
    pub new_value: Option<String>,
}

impl StorageChange {
    pub fn new(key: impl Into<String>, new_value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            new_value: Some(new_value.into()),
        }
    }
}

/// Callback invoked for each incoming [`StorageChange`].
pub type StorageHandler = Box<dyn Fn(StorageChange) + Send + Sync>;

/// Access to storage, the color-scheme query, the root element and storage
/// events.
pub trait ThemeHost: Send + Sync {
    /// Read a persisted value.
    fn read(&self, key: &str) -> Option<String>;

    /// Persist a value.
    fn write(&self, key: &str, value: &str);

    /// Whether `query` (a `prefers-color-scheme` media query) matches.
    fn prefers_dark(&self, query: &str) -> bool;

    /// Swap the root element's theme marker: drop `remove`, add `add`.
    fn set_marker(&self, add: &str, remove: &str);

    /// Listen for changes made to the store by other execution contexts.
    ///
    /// The listener stays registered until the returned guard is dropped.
    fn subscribe(&self, handler: StorageHandler) -> Subscription;
}

/// Guard for a registered listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for hosts that cannot listen.
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// [`ThemeHost`] backed by `window`, `localStorage` and `document`.
///
/// Without the `browser` feature every method is a no-op: reads return
/// nothing, the system never prefers dark, and subscriptions are inert.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(feature = "browser")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ThemeHost for BrowserHost {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "browser")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (key, value);
        }
    }

    fn prefers_dark(&self, query: &str) -> bool {
        #[cfg(feature = "browser")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(query).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = query;
            false
        }
    }

    fn set_marker(&self, add: &str, remove: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let class_list = el.class_list();
                let _ = class_list.remove_1(remove);
                let _ = class_list.add_1(add);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (add, remove);
        }
    }

    fn subscribe(&self, handler: StorageHandler) -> Subscription {
        #[cfg(feature = "browser")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(window) = web_sys::window() else {
                return Subscription::inert();
            };
            let listener = Closure::<dyn Fn(web_sys::StorageEvent)>::new(
                move |ev: web_sys::StorageEvent| {
                    handler(StorageChange {
                        key: ev.key(),
                        new_value: ev.new_value(),
                    });
                },
            );
            if window
                .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
                .is_err()
            {
                return Subscription::inert();
            }
            Subscription::new(move || {
                let _ = window
                    .remove_event_listener_with_callback("storage", listener.as_ref().unchecked_ref());
            })
        }
        #[cfg(not(feature = "browser"))]
        {
            drop(handler);
            Subscription::inert()
        }
    }
}
