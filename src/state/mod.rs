//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Plain structs with no browser dependencies, so navigation and selection
//! rules are unit-tested natively. Components wrap them in signals.

pub mod carousel;
pub mod projects;
