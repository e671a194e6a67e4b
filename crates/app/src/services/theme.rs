//! Theme synchroniser: keeps state, storage and the document attribute in step.

use folio_domain::theme::Theme;

use crate::ports::{DocumentRoot, ThemeStore};

/// Owns the current theme and mirrors it into a [`ThemeStore`] and a
/// [`DocumentRoot`].
///
/// Storage failures never surface: they are logged and the in-memory theme
/// and document attribute still follow the user.
pub struct ThemeSynchronizer<S, D> {
    store: S,
    document: D,
    current: Theme,
}

impl<S: ThemeStore, D: DocumentRoot> ThemeSynchronizer<S, D> {
    /// Resolve the persisted preference and apply it to the document.
    ///
    /// Missing or unreadable values resolve to [`Theme::Light`]. An
    /// unrecognised value is overwritten so storage agrees with the document.
    pub fn init(store: S, document: D) -> Self {
        let persisted = match store.read() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "could not read theme preference");
                None
            }
        };
        let current = Theme::from_persisted(persisted.as_deref());

        if persisted.as_deref().is_some_and(|raw| raw != current.as_str()) {
            tracing::debug!(?persisted, %current, "normalising unrecognised theme value");
            persist(&store, current);
        }

        document.set_theme_attribute(current);
        tracing::debug!(%current, "theme initialised");

        Self {
            store,
            document,
            current,
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it and reapply the document attribute.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        persist(&self.store, next);
        self.document.set_theme_attribute(next);
        self.current = next;
        tracing::debug!(theme = %next, "theme toggled");
        next
    }
}

fn persist<S: ThemeStore>(store: &S, theme: Theme) {
    if let Err(err) = store.write(theme) {
        tracing::warn!(error = %err, %theme, "could not persist theme preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryThemeStore, RecordingDocument};

    type TestSync = ThemeSynchronizer<MemoryThemeStore, RecordingDocument>;

    fn init(store: &MemoryThemeStore, doc: &RecordingDocument) -> TestSync {
        ThemeSynchronizer::init(store.clone(), doc.clone())
    }

    #[test]
    fn should_apply_persisted_value_to_document_on_init() {
        for value in ["light", "dark"] {
            let store = MemoryThemeStore::with_value(value);
            let doc = RecordingDocument::default();
            let sync = init(&store, &doc);

            assert_eq!(sync.current().as_str(), value);
            assert_eq!(doc.attribute(), Some(value));
            assert_eq!(store.writes(), 0);
        }
    }

    #[test]
    fn should_resolve_light_when_nothing_persisted() {
        let store = MemoryThemeStore::default();
        let doc = RecordingDocument::default();
        let sync = init(&store, &doc);

        assert_eq!(sync.current(), Theme::Light);
        assert_eq!(doc.attribute(), Some("light"));
        assert_eq!(store.value(), None);
    }

    #[test]
    fn should_normalise_unrecognised_value_to_light() {
        let store = MemoryThemeStore::with_value("neon");
        let doc = RecordingDocument::default();
        let sync = init(&store, &doc);

        assert_eq!(sync.current(), Theme::Light);
        assert_eq!(doc.attribute(), Some("light"));
        assert_eq!(store.value().as_deref(), Some("light"));
    }

    #[test]
    fn should_keep_storage_and_document_in_step_on_each_toggle() {
        let store = MemoryThemeStore::default();
        let doc = RecordingDocument::default();
        let mut sync = init(&store, &doc);

        assert_eq!(sync.toggle(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
        assert_eq!(doc.attribute(), Some("dark"));

        assert_eq!(sync.toggle(), Theme::Light);
        assert_eq!(store.value().as_deref(), Some("light"));
        assert_eq!(doc.attribute(), Some("light"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn should_fail_open_when_storage_is_broken() {
        let store = MemoryThemeStore::broken();
        let doc = RecordingDocument::default();
        let mut sync = init(&store, &doc);

        assert_eq!(sync.current(), Theme::Light);
        assert_eq!(sync.toggle(), Theme::Dark);
        assert_eq!(doc.attribute(), Some("dark"));
    }
}
