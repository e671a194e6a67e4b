//! Theme persistence port and the document attribute it mirrors.

use std::rc::Rc;

use folio_domain::error::StorageError;
use folio_domain::theme::Theme;

/// Key-value persistence for the theme preference.
pub trait ThemeStore {
    /// Raw persisted value, `None` when nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store is unavailable.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be written.
    fn write(&self, theme: Theme) -> Result<(), StorageError>;
}

/// The document-level element whose `data-theme` attribute drives styling.
pub trait DocumentRoot {
    fn set_theme_attribute(&self, theme: Theme);
}

impl<T: ThemeStore + ?Sized> ThemeStore for Rc<T> {
    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&self, theme: Theme) -> Result<(), StorageError> {
        (**self).write(theme)
    }
}

impl<T: DocumentRoot + ?Sized> DocumentRoot for Rc<T> {
    fn set_theme_attribute(&self, theme: Theme) {
        (**self).set_theme_attribute(theme);
    }
}
