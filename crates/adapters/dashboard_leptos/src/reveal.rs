//! `IntersectionObserver` implementation of the viewport port.

use std::str::FromStr;

use folio_app::ports::{IntersectionCallback, ObservationHandle, ViewportWatcher};
use folio_domain::section::{RevealThreshold, SectionId};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches section elements found by their anchor id.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionWatcher;

/// Guard that disconnects the observer on drop.
///
/// Owns the JS callback, which must outlive the observer's registration.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ObservationHandle for ObserverHandle {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportWatcher for IntersectionWatcher {
    type Handle = ObserverHandle;

    fn observe(
        &self,
        sections: &[SectionId],
        threshold: RevealThreshold,
        on_intersect: IntersectionCallback,
    ) -> Option<ObserverHandle> {
        let document = web_sys::window()?.document()?;

        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Ok(section) = SectionId::from_str(&target.id()) else {
                        continue;
                    };
                    let ratio = entry.intersection_ratio();
                    on_intersect(section, ratio);
                    if threshold.is_met(ratio) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.fraction()));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                leptos::logging::warn!("failed to create IntersectionObserver: {err:?}");
                return None;
            }
        };

        for section in sections {
            match document.get_element_by_id(section.anchor()) {
                Some(el) => observer.observe(&el),
                None => leptos::logging::warn!("section #{section} not in the document"),
            }
        }

        Some(ObserverHandle {
            observer,
            _callback: callback,
        })
    }
}
