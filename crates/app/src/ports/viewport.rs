//! Viewport port: intersection notifications for page sections.

use std::rc::Rc;

use folio_domain::section::{RevealThreshold, SectionId};

/// Invoked with the section and its current intersection ratio.
pub type IntersectionCallback = Rc<dyn Fn(SectionId, f64)>;

/// Live observation returned by [`ViewportWatcher::observe`].
pub trait ObservationHandle {
    /// Stop observing. Must be safe to call more than once.
    fn disconnect(&mut self);
}

/// Watches section elements and reports when they intersect the viewport.
pub trait ViewportWatcher {
    type Handle: ObservationHandle;

    /// Start observing `sections`.
    ///
    /// Returns `None` when observation is not available in this environment;
    /// callers then treat every section as visible.
    fn observe(
        &self,
        sections: &[SectionId],
        threshold: RevealThreshold,
        on_intersect: IntersectionCallback,
    ) -> Option<Self::Handle>;
}
