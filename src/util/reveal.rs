//! One-shot "scrolled into view" detection.
//!
//! TRADE-OFFS
//! ==========
//! The observer disconnects itself after the first intersection and its
//! callback is leaked for the page lifetime. The projects section is never
//! unmounted, so there is nothing to reclaim.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to a reveal callback that runs at most once, no matter how
/// many clones fire it.
#[derive(Clone)]
pub struct RevealOnce {
    on_visible: Rc<dyn Fn()>,
    fired: Rc<Cell<bool>>,
}

impl RevealOnce {
    pub fn new(on_visible: impl Fn() + 'static) -> Self {
        Self {
            on_visible: Rc::new(on_visible),
            fired: Rc::new(Cell::new(false)),
        }
    }

    /// Run the callback unless any clone already has.
    pub fn fire(&self) {
        if self.fired.replace(true) {
            return;
        }
        (self.on_visible)();
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Run `on_visible` once when `target` first crosses `threshold` visibility.
///
/// When the browser has no `IntersectionObserver`, the section is revealed
/// immediately.
#[cfg(feature = "csr")]
pub fn observe_once(target: &web_sys::Element, threshold: f64, on_visible: impl Fn() + 'static) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let reveal = RevealOnce::new(on_visible);
    let reveal_on_intersect = reveal.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                reveal_on_intersect.fire();
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("reveal observer unavailable: {err:?}");
            reveal.fire();
            return;
        }
    };
    observer.observe(target);
    callback.forget();
}
