//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the projects section and its gallery overlay while
//! reading/writing shared state from Leptos context providers.

pub mod carousel;
pub mod project_card;
pub mod projects_section;
