//! Horizontal touch coordinates for swipe detection.

use leptos::ev::TouchEvent;

/// `clientX` of the first finger still on the surface (touchstart).
#[cfg(feature = "csr")]
pub fn start_x(ev: &TouchEvent) -> Option<f64> {
    ev.target_touches().get(0).map(|t| f64::from(t.client_x()))
}

/// `clientX` of the first finger that just lifted (touchend).
#[cfg(feature = "csr")]
pub fn end_x(ev: &TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| f64::from(t.client_x()))
}

#[cfg(not(feature = "csr"))]
pub fn start_x(_ev: &TouchEvent) -> Option<f64> {
    None
}

#[cfg(not(feature = "csr"))]
pub fn end_x(_ev: &TouchEvent) -> Option<f64> {
    None
}
