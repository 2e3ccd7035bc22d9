//! Click origin checks for overlay dismissal.
//!
//! Instead of every control calling `stop_propagation`, the overlay only
//! dismisses when the element that was actually clicked carries
//! [`BACKDROP_ATTR`]. Controls never carry it, so their clicks can bubble
//! freely.

use leptos::ev::MouseEvent;

#[cfg(feature = "csr")]
use crate::consts::BACKDROP_ATTR;

/// Whether the click started on an element marked as backdrop.
#[cfg(feature = "csr")]
pub fn is_backdrop_click(ev: &MouseEvent) -> bool {
    use wasm_bindgen::JsCast as _;

    ev.target().is_some_and(|target| {
        target
            .dyn_ref::<web_sys::Element>()
            .is_some_and(|el| el.has_attribute(BACKDROP_ATTR))
    })
}

/// Whether the click started on an element marked as backdrop.
#[cfg(not(feature = "csr"))]
pub fn is_backdrop_click(_ev: &MouseEvent) -> bool {
    false
}
