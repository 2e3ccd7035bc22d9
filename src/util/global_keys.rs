//! Window-level keydown subscription scoped to a reactive owner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Overlays listen on `window` so shortcuts work without focus. The listener
//! is shared with the rest of the page, so it must be removed when the
//! component that registered it is disposed. [`ListenerGuard`] owns the
//! removal and runs it exactly once, whether released explicitly, by owner
//! cleanup, or on drop.

#[cfg(test)]
#[path = "global_keys_test.rs"]
mod global_keys_test;

use std::fmt;

use leptos::prelude::on_cleanup;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Handle that removes a listener when released or dropped.
pub struct ListenerGuard {
    release: Option<Release>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Guard with nothing to release (non-browser builds).
    #[must_use]
    pub fn inert() -> Self {
        Self { release: None }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Hand the guard to the current reactive owner; it is released when the
    /// owner cleans up (component unmount).
    pub fn release_on_cleanup(self) {
        on_cleanup(move || drop(self));
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("active", &self.is_active()).finish()
    }
}

/// Subscribe `handler` to every `keydown` on `window`, receiving `event.key`.
#[cfg(feature = "csr")]
pub fn listen_keydown(handler: impl Fn(&str) + Send + Sync + 'static) -> ListenerGuard {
    let handle = leptos::prelude::window_event_listener(leptos::ev::keydown, move |ev| {
        handler(&ev.key());
    });
    ListenerGuard::new(move || handle.remove())
}

/// Subscribe `handler` to every `keydown` on `window`, receiving `event.key`.
#[cfg(not(feature = "csr"))]
pub fn listen_keydown(handler: impl Fn(&str) + Send + Sync + 'static) -> ListenerGuard {
    drop(handler);
    ListenerGuard::inert()
}
