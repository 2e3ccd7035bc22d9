//! Card for a single portfolio project in the showcase grid.

use leptos::prelude::*;

use crate::state::projects::{Project, card_animation_delay, opens_on_key};

const GITHUB_ICON_PATH: &str = "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22";

/// A project card. Clicking the cover (or Enter/Space while it is focused)
/// asks the grid to open the gallery for `project.id`.
#[component]
pub fn ProjectCard(project: Project, index: usize, on_open: Callback<u32>) -> impl IntoView {
    let open_label = project.open_label();
    let gallery_count = project.has_gallery().then_some(project.images.len());
    let Project {
        id,
        title,
        description,
        tech,
        github,
        image,
        ..
    } = project;

    let on_cover_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if opens_on_key(&ev.key()) {
            ev.prevent_default();
            on_open.run(id);
        }
    };

    let cover = (!image.is_empty()).then(|| {
        view! {
            <div
                class="project-card__cover"
                role="button"
                tabindex="0"
                aria-label=open_label
                on:click=move |_| on_open.run(id)
                on:keydown=on_cover_keydown
            >
                <img src=image alt=title.clone() class="project-card__image"/>
                <div class="project-card__overlay">"Click to view"</div>
                {gallery_count
                    .map(|count| {
                        view! {
                            <div class="project-card__badge">
                                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <rect x="3" y="3" width="18" height="18" rx="2"></rect>
                                    <circle cx="8.5" cy="8.5" r="1.5"></circle>
                                    <path d="M21 15l-5-5L5 21"></path>
                                </svg>
                                {count}
                            </div>
                        }
                    })}
            </div>
        }
    });

    view! {
        <div class="project-card" style=card_animation_delay(index)>
            {cover}
            <div class="project-card__header">
                <h3 class="project-card__title">{title}</h3>
                <div class="project-card__links">
                    <a href=github class="project-card__link" aria-label="GitHub">
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d=GITHUB_ICON_PATH></path>
                        </svg>
                    </a>
                </div>
            </div>
            <p class="project-card__description">{description}</p>
            <div class="project-card__tech">
                {tech
                    .into_iter()
                    .map(|tag| view! { <span class="project-card__tag">{tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
