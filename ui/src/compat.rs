// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Class asserted on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use crate::theme::{PersistentStorage, StorageError};
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsValue;
    use web_sys::Storage;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// `window.localStorage`. Access is re-checked on every call because
    /// browsers may revoke it (private mode, quota, sandboxed iframes).
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn storage(&self) -> Result<Storage, StorageError> {
            web_sys::window()
                .ok_or(StorageError::Unavailable)?
                .local_storage()
                .map_err(js_error)?
                .ok_or(StorageError::Unavailable)
        }
    }

    impl PersistentStorage for BrowserStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?.get_item(key).map_err(js_error)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?.set_item(key, value).map_err(js_error)
        }
    }

    fn js_error(e: JsValue) -> StorageError {
        StorageError::Access(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }

    pub fn local_storage() -> Rc<dyn PersistentStorage> {
        Rc::new(BrowserStorage)
    }

    /// Adds or removes the dark class on `<html>`.
    pub fn apply_root_theme(dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force(super::DARK_CLASS, dark) {
            dioxus_logger::tracing::warn!("failed to apply theme to document root: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use crate::theme::{MemoryStorage, PersistentStorage};
    use std::rc::Rc;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// No browser storage outside wasm; preferences live for the process only.
    pub fn local_storage() -> Rc<dyn PersistentStorage> {
        Rc::new(MemoryStorage::default())
    }

    pub fn apply_root_theme(dark: bool) {
        dioxus_logger::tracing::debug!("root theme: dark={}", dark);
    }
}
