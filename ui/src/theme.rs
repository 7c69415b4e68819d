//! The dark mode store: a persisted boolean display mode shared through context.

use crate::compat;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key under which the display mode is persisted.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage access failed: {0}")]
    Access(String),
}

/// Durable string key-value storage, e.g. the browser's `localStorage`.
pub trait PersistentStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage kept in memory. Clones share the same entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStorage {
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl PersistentStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn encode(dark: bool) -> &'static str {
    if dark {
        "true"
    } else {
        "false"
    }
}

fn decode(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Holds the display mode and writes every change through to storage.
pub struct ThemeStore {
    dark_mode: bool,
    storage: Rc<dyn PersistentStorage>,
}

impl ThemeStore {
    /// Resolves the initial mode: `override_mode`, then the persisted value, then `default`.
    ///
    /// An unreadable or unrecognised persisted value counts as absent.
    pub fn init(
        storage: Rc<dyn PersistentStorage>,
        override_mode: Option<bool>,
        default: bool,
    ) -> Self {
        let dark_mode = override_mode
            .or_else(|| Self::persisted(storage.as_ref()))
            .unwrap_or(default);

        compat::apply_root_theme(dark_mode);
        Self { dark_mode, storage }
    }

    fn persisted(storage: &dyn PersistentStorage) -> Option<bool> {
        match storage.load(DARK_MODE_STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = decode(&raw);
                if parsed.is_none() {
                    warn!("ignoring persisted dark mode value {:?}", raw);
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                warn!("could not read dark mode preference: {}", e);
                None
            }
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Updates the mode, persists it and applies it to the document root.
    pub fn set_dark_mode(&mut self, next: bool) {
        self.dark_mode = next;
        if let Err(e) = self.storage.save(DARK_MODE_STORAGE_KEY, encode(next)) {
            warn!("could not persist dark mode preference: {}", e);
        }
        compat::apply_root_theme(next);
    }

    pub fn toggle(&mut self) {
        self.set_dark_mode(!self.dark_mode);
    }
}

/// Reactive handle to the [`ThemeStore`] provided through context.
#[derive(Clone, Copy)]
pub struct DarkMode {
    store: Signal<ThemeStore>,
}

impl DarkMode {
    /// Current mode. Subscribes the calling component.
    pub fn get(&self) -> bool {
        self.store.read().dark_mode()
    }

    pub fn set(&mut self, next: bool) {
        self.store.write().set_dark_mode(next);
    }

    pub fn toggle(&mut self) {
        self.store.write().toggle();
    }
}

/// Creates the dark mode store backed by the platform storage and provides it to children.
pub fn use_dark_mode_provider(override_mode: Option<bool>, default: bool) -> DarkMode {
    use_dark_mode_provider_with(compat::local_storage(), override_mode, default)
}

pub fn use_dark_mode_provider_with(
    storage: Rc<dyn PersistentStorage>,
    override_mode: Option<bool>,
    default: bool,
) -> DarkMode {
    use_context_provider(move || DarkMode {
        store: Signal::new(ThemeStore::init(storage, override_mode, default)),
    })
}

/// Returns the [`DarkMode`] handle of the nearest provider.
///
/// # Panics
/// If no ancestor called [`use_dark_mode_provider`].
pub fn use_dark_mode() -> DarkMode {
    try_use_context::<DarkMode>().expect("use_dark_mode must be used within a DarkModeProvider")
}

/// Mirrors the display mode on a wrapper element so styles apply even where the
/// document root is not reachable.
#[component]
pub fn ThemeScope(children: Element) -> Element {
    let dark_mode = use_dark_mode();
    let class = if dark_mode.get() {
        compat::DARK_CLASS
    } else {
        "light"
    };

    rsx! {
        div {
            class: "theme-scope {class}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl PersistentStorage for BrokenStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Access("SecurityError".into()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn storage_with(value: Option<&str>) -> MemoryStorage {
        let storage = MemoryStorage::default();
        if let Some(value) = value {
            storage.save(DARK_MODE_STORAGE_KEY, value).unwrap();
        }
        storage
    }

    #[test]
    fn falls_back_to_default_without_persisted_value() {
        let store = ThemeStore::init(Rc::new(storage_with(None)), None, false);
        assert!(!store.dark_mode());

        let store = ThemeStore::init(Rc::new(storage_with(None)), None, true);
        assert!(store.dark_mode());
    }

    #[test]
    fn persisted_value_beats_default() {
        let store = ThemeStore::init(Rc::new(storage_with(Some("true"))), None, false);
        assert!(store.dark_mode());
    }

    #[test]
    fn override_beats_persisted_value() {
        let storage = storage_with(Some("true"));
        let store = ThemeStore::init(Rc::new(storage.clone()), Some(false), true);
        assert!(!store.dark_mode());
        // initialising does not rewrite storage
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn unrecognised_persisted_value_is_ignored() {
        let store = ThemeStore::init(Rc::new(storage_with(Some("undefined"))), None, false);
        assert!(!store.dark_mode());
    }

    #[test]
    fn toggle_flips_and_persists() {
        let storage = storage_with(None);
        let mut store = ThemeStore::init(Rc::new(storage.clone()), None, false);

        store.toggle();
        assert!(store.dark_mode());
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("true"));

        store.toggle();
        assert!(!store.dark_mode());
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn persisted_value_survives_a_reload() {
        let storage = storage_with(None);
        let mut store = ThemeStore::init(Rc::new(storage.clone()), None, false);
        store.set_dark_mode(true);

        let reloaded = ThemeStore::init(Rc::new(storage), None, false);
        assert!(reloaded.dark_mode());
    }

    #[test]
    fn broken_storage_is_not_fatal() {
        let mut store = ThemeStore::init(Rc::new(BrokenStorage), None, true);
        assert!(store.dark_mode());
        store.toggle();
        assert!(!store.dark_mode());
    }

    #[component]
    fn Scoped(dark_mode: bool) -> Element {
        use_dark_mode_provider_with(Rc::new(MemoryStorage::default()), Some(dark_mode), false);
        rsx! {
            ThemeScope { "content" }
        }
    }

    #[test]
    fn scope_reflects_the_mode() {
        let mut dom = VirtualDom::new_with_props(Scoped, ScopedProps { dark_mode: true });
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("theme-scope dark"));

        let mut dom = VirtualDom::new_with_props(Scoped, ScopedProps { dark_mode: false });
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("theme-scope light"));
    }
}
