//! "Project Showcase" section: the card grid plus the gallery overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the decision of when a [`Carousel`] exists. Selecting a card mounts
//! one for that project's gallery; the carousel's `on_close` clears the
//! selection, which unmounts it. Re-opening therefore starts from slide 0.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::project_card::ProjectCard;
use crate::state::projects::{ProjectCatalog, ProjectsState};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let catalog = StoredValue::new(ProjectCatalog::builtin());
    let section_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(section) = section_ref.get() else {
                return;
            };
            crate::util::reveal::observe_once(&section, crate::consts::REVEAL_THRESHOLD, move || {
                projects.update(|s| s.revealed = true);
            });
        });
    }

    // Outside the browser there is no observer, so render revealed.
    let visible = move || cfg!(not(feature = "csr")) || projects.with(|s| s.revealed);

    let on_open = Callback::new(move |id: u32| {
        log::debug!("opening gallery for project {id}");
        projects.update(|s| s.open(id));
    });
    let on_close = Callback::new(move |()| projects.update(ProjectsState::close));

    // Only remount the carousel when the selection itself changes.
    let selected_id = Memo::new(move |_| projects.with(|s| s.selected));
    let selected = move || {
        selected_id
            .get()
            .and_then(|id| catalog.with_value(|c| c.get(id).cloned()))
    };

    view! {
        <section id="projects" class="projects" class:projects--visible=visible node_ref=section_ref>
            <div class="projects__container">
                <h2 class="projects__title">
                    <span class="projects__title-number">"03."</span>
                    "Project Showcase"
                </h2>
                <div class="projects__grid">
                    {catalog
                        .with_value(|c| c.iter().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project=project index=index on_open=on_open/> }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                selected()
                    .map(|project| {
                        view! {
                            <Carousel images=project.images title=project.title on_close=on_close/>
                        }
                    })
            }}
        </section>
    }
}
