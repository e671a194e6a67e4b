//! In-memory port fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_domain::error::StorageError;
use folio_domain::theme::Theme;

use crate::ports::{DocumentRoot, ThemeStore};

/// Cloneable in-memory theme store; clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryThemeStore {
    value: Rc<RefCell<Option<String>>>,
    broken: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(value.to_string());
        store
    }

    /// A store whose every read and write fails.
    pub fn broken() -> Self {
        let store = Self::default();
        store.broken.set(true);
        store
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if self.broken.get() {
            return Err(StorageError::new("storage disabled"));
        }
        Ok(self.value.borrow().clone())
    }

    fn write(&self, theme: Theme) -> Result<(), StorageError> {
        if self.broken.get() {
            return Err(StorageError::new("storage disabled"));
        }
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}

/// Records the last `data-theme` value applied.
#[derive(Clone, Default)]
pub struct RecordingDocument {
    attribute: Rc<Cell<Option<Theme>>>,
}

impl RecordingDocument {
    pub fn attribute(&self) -> Option<&'static str> {
        self.attribute.get().map(Theme::as_str)
    }
}

impl DocumentRoot for RecordingDocument {
    fn set_theme_attribute(&self, theme: Theme) {
        self.attribute.set(Some(theme));
    }
}
