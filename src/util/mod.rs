//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper isolates a web-sys concern behind a plain function. Builds
//! without the `csr` feature get inert twins so state and component code
//! compile and test natively.

pub mod event_origin;
pub mod global_keys;
pub mod reveal;
pub mod touch;
