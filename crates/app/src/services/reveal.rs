//! Scroll reveal: a scoped subscription turning intersections into one-shot
//! "became visible" notifications.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_domain::section::{RevealSet, RevealThreshold, SectionId};

use crate::ports::{IntersectionCallback, ObservationHandle, ViewportWatcher};

/// Guard over a live viewport observation.
///
/// Acquired with [`mount`](Self::mount), released by [`unmount`](Self::unmount)
/// or on drop. Each section is reported to the callback at most once, and
/// nothing is reported after release even if the environment still fires.
pub struct ScrollReveal<H: ObservationHandle> {
    handle: Option<H>,
    active: Rc<Cell<bool>>,
}

impl<H: ObservationHandle> ScrollReveal<H> {
    /// Start watching `sections`, calling `on_reveal` once per section when
    /// at least `threshold` of it is inside the viewport.
    ///
    /// When the watcher is unavailable every section is revealed immediately
    /// so content never stays hidden.
    pub fn mount<W, F>(
        watcher: &W,
        sections: &[SectionId],
        threshold: RevealThreshold,
        on_reveal: F,
    ) -> Self
    where
        W: ViewportWatcher<Handle = H>,
        F: Fn(SectionId) + 'static,
    {
        let active = Rc::new(Cell::new(true));
        let on_reveal: Rc<dyn Fn(SectionId)> = Rc::new(on_reveal);
        let seen = Rc::new(RefCell::new(RevealSet::new()));

        let notify: IntersectionCallback = {
            let active = Rc::clone(&active);
            let on_reveal = Rc::clone(&on_reveal);
            Rc::new(move |section: SectionId, ratio: f64| {
                if !active.get() || !threshold.is_met(ratio) {
                    return;
                }
                let first = seen.borrow_mut().reveal(section);
                if first {
                    on_reveal(section);
                }
            })
        };

        let handle = watcher.observe(sections, threshold, notify);
        if handle.is_none() {
            tracing::warn!("viewport observation unavailable, revealing every section");
            for section in sections {
                on_reveal(*section);
            }
        } else {
            tracing::debug!(count = sections.len(), "scroll reveal mounted");
        }

        Self { handle, active }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.active.get()
    }

    /// Stop observing. Idempotent.
    pub fn unmount(&mut self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
        }
        tracing::debug!("scroll reveal unmounted");
    }
}

impl<H: ObservationHandle> Drop for ScrollReveal<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct FakeViewport {
        callback: Rc<RefCell<Option<IntersectionCallback>>>,
        observed: Rc<RefCell<Vec<SectionId>>>,
        disconnects: Rc<Cell<usize>>,
        unavailable: bool,
    }

    impl FakeViewport {
        fn scroll(&self, section: SectionId, ratio: f64) {
            let callback = self.callback.borrow().clone();
            if let Some(cb) = callback {
                cb(section, ratio);
            }
        }
    }

    struct FakeHandle(Rc<Cell<usize>>);

    impl ObservationHandle for FakeHandle {
        fn disconnect(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl ViewportWatcher for FakeViewport {
        type Handle = FakeHandle;

        fn observe(
            &self,
            sections: &[SectionId],
            _threshold: RevealThreshold,
            on_intersect: IntersectionCallback,
        ) -> Option<FakeHandle> {
            if self.unavailable {
                return None;
            }
            self.observed.borrow_mut().extend_from_slice(sections);
            *self.callback.borrow_mut() = Some(on_intersect);
            Some(FakeHandle(Rc::clone(&self.disconnects)))
        }
    }

    type Revealed = Rc<RefCell<Vec<SectionId>>>;

    fn mount(viewport: &FakeViewport) -> (ScrollReveal<FakeHandle>, Revealed) {
        let revealed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&revealed);
        let guard = ScrollReveal::mount(
            viewport,
            &SectionId::ALL,
            RevealThreshold::DEFAULT,
            move |section| sink.borrow_mut().push(section),
        );
        (guard, revealed)
    }

    #[test]
    fn should_observe_every_requested_section() {
        let viewport = FakeViewport::default();
        let (_guard, revealed) = mount(&viewport);

        assert_eq!(*viewport.observed.borrow(), SectionId::ALL);
        assert!(revealed.borrow().is_empty());
    }

    #[test]
    fn should_ignore_intersections_below_threshold() {
        let viewport = FakeViewport::default();
        let (_guard, revealed) = mount(&viewport);

        viewport.scroll(SectionId::Skills, 0.05);
        assert!(revealed.borrow().is_empty());
    }

    #[test]
    fn should_notify_once_per_section() {
        let viewport = FakeViewport::default();
        let (_guard, revealed) = mount(&viewport);

        viewport.scroll(SectionId::Skills, 0.2);
        viewport.scroll(SectionId::Skills, 0.0);
        viewport.scroll(SectionId::Skills, 0.9);
        viewport.scroll(SectionId::Projects, 0.15);

        assert_eq!(*revealed.borrow(), [SectionId::Skills, SectionId::Projects]);
    }

    #[test]
    fn should_disconnect_once_when_dropped() {
        let viewport = FakeViewport::default();
        let (mut guard, revealed) = mount(&viewport);

        guard.unmount();
        assert!(!guard.is_mounted());
        drop(guard);
        assert_eq!(viewport.disconnects.get(), 1);

        viewport.scroll(SectionId::About, 1.0);
        assert!(revealed.borrow().is_empty());
    }

    #[test]
    fn should_reveal_everything_when_observation_unavailable() {
        let viewport = FakeViewport {
            unavailable: true,
            ..FakeViewport::default()
        };
        let (guard, revealed) = mount(&viewport);

        assert_eq!(*revealed.borrow(), SectionId::ALL);
        drop(guard);
        assert_eq!(viewport.disconnects.get(), 0);
    }
}
