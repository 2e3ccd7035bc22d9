//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::projects_section::ProjectsSection;
use crate::state::projects::ProjectsState;

/// Root application component.
///
/// Provides the projects selection state to the section and its overlay.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let projects = RwSignal::new(ProjectsState::default());
    provide_context(projects);

    view! {
        <Title text="Portfolio"/>
        <main class="portfolio">
            <ProjectsSection/>
        </main>
    }
}
