//! `localStorage`-backed theme persistence and the `<html data-theme>` attribute.

use folio_app::ports::{DocumentRoot, ThemeStore};
use folio_domain::error::StorageError;
use folio_domain::theme::Theme;
use wasm_bindgen::JsCast;

/// Key used to persist the theme preference in `localStorage`.
const STORAGE_KEY: &str = "theme";

/// Reads and writes the theme under [`STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageThemeStore;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::new("no window"))?
        .local_storage()
        .map_err(|err| StorageError::new(format!("{err:?}")))?
        .ok_or_else(|| StorageError::new("localStorage unavailable"))
}

impl ThemeStore for LocalStorageThemeStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(|err| StorageError::new(format!("{err:?}")))
    }

    fn write(&self, theme: Theme) -> Result<(), StorageError> {
        local_storage()?
            .set_item(STORAGE_KEY, theme.as_str())
            .map_err(|err| StorageError::new(format!("{err:?}")))
    }
}

/// The `<html>` element of the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocumentRoot;

impl DocumentRoot for HtmlDocumentRoot {
    fn set_theme_attribute(&self, theme: Theme) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            leptos::logging::warn!("no document element to apply theme to");
            return;
        };
        let html = el.unchecked_into::<web_sys::HtmlElement>();
        if let Err(err) = html.dataset().set("theme", theme.as_str()) {
            leptos::logging::warn!("failed to set data-theme: {err:?}");
        }
    }
}
