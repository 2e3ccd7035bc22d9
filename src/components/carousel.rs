//! Full-screen image carousel overlay.
//!
//! ARCHITECTURE
//! ============
//! The overlay is portalled into `<body>` so a transformed or clipped card
//! ancestor cannot constrain its fixed positioning. DOM events are reduced to
//! [`CarouselCommand`]s; all index math lives in
//! [`crate::state::carousel::CarouselState`].
//!
//! Dismissal is reported through `on_close` only. The parent decides when to
//! unmount, which disposes this component's owner and with it the window
//! keydown listener.

use leptos::portal::Portal;
use leptos::prelude::*;

use crate::state::carousel::{
    CarouselCommand, CarouselState, ClickTarget, OverlayPart, Transition, command_for_click,
    command_for_key, command_for_overlay_click, dot_label, slide_alt,
};
use crate::util::event_origin::is_backdrop_click;
use crate::util::global_keys::listen_keydown;
use crate::util::touch;

const CLOSE_LABEL: &str = "Close carousel";
const PREVIOUS_LABEL: &str = "Previous image";
const NEXT_LABEL: &str = "Next image";

/// Image carousel for one project gallery. Always opens on the first image.
#[component]
pub fn Carousel(
    images: Vec<String>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = match CarouselState::new(images.len()) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("carousel for {title:?} not shown: {err}");
            return ().into_any();
        }
    };
    log::debug!("carousel opened for {title:?} ({} images)", images.len());

    let state = RwSignal::new(initial);
    let images = StoredValue::new(images);
    let title = StoredValue::new(title);

    let dispatch = move |command: CarouselCommand| {
        if command == CarouselCommand::Dismiss {
            log::debug!("carousel dismissed at slide {}", state.with_untracked(CarouselState::current));
            on_close.run(());
            return;
        }
        let mut transition = Transition::Unchanged;
        state.update(|s| transition = s.apply(command));
        if let Transition::Moved { from, to } = transition {
            log::debug!("carousel moved {from} -> {to}");
        }
    };

    listen_keydown(move |key| {
        if let Some(command) = command_for_key(key) {
            dispatch(command);
        }
    })
    .release_on_cleanup();

    let click = move |target: ClickTarget| dispatch(command_for_click(target));

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if let Some(command) = command_for_overlay_click(is_backdrop_click(&ev)) {
            dispatch(command);
        }
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = touch::start_x(&ev) {
            state.update_untracked(|s| s.touch_start(x));
        }
    };

    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        let Some(x) = touch::end_x(&ev) else {
            state.update_untracked(CarouselState::touch_cancel);
            return;
        };
        let mut swiped = None;
        state.update_untracked(|s| swiped = s.touch_end(x));
        if let Some(direction) = swiped {
            log::debug!("swipe resolved: {direction:?}");
            state.notify();
        }
    };

    view! {
        <Portal>
            <div
                class="carousel"
                data-carousel-backdrop=OverlayPart::Overlay.backdrop_marker()
                on:click=on_backdrop
            >
                <div class="carousel__container" data-carousel-backdrop=OverlayPart::Container.backdrop_marker()>
                    <button
                        class="carousel__close"
                        on:click=move |_| click(ClickTarget::CloseButton)
                        aria-label=CLOSE_LABEL
                    >
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <line x1="18" y1="6" x2="6" y2="18"></line>
                            <line x1="6" y1="6" x2="18" y2="18"></line>
                        </svg>
                    </button>

                    <div
                        class="carousel__content"
                        data-carousel-backdrop=OverlayPart::Content.backdrop_marker()
                        on:touchstart=on_touch_start
                        on:touchend=on_touch_end
                        on:touchcancel=move |_| state.update_untracked(CarouselState::touch_cancel)
                    >
                        <button
                            class="carousel__nav carousel__nav--prev"
                            on:click=move |_| click(ClickTarget::PreviousButton)
                            aria-label=PREVIOUS_LABEL
                        >
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <polyline points="15 18 9 12 15 6"></polyline>
                            </svg>
                        </button>

                        <div class="carousel__slides" data-carousel-backdrop=OverlayPart::Slides.backdrop_marker()>
                            {images
                                .get_value()
                                .into_iter()
                                .enumerate()
                                .map(|(index, src)| {
                                    let alt = title.with_value(|t| slide_alt(t, index));
                                    view! {
                                        <div
                                            class="carousel__slide"
                                            class:carousel__slide--active=move || state.with(|s| s.is_active(index))
                                            data-carousel-backdrop=OverlayPart::Slide.backdrop_marker()
                                        >
                                            <img src=src alt=alt/>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <button
                            class="carousel__nav carousel__nav--next"
                            on:click=move |_| click(ClickTarget::NextButton)
                            aria-label=NEXT_LABEL
                        >
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <polyline points="9 18 15 12 9 6"></polyline>
                            </svg>
                        </button>
                    </div>

                    <div class="carousel__dots" data-carousel-backdrop=OverlayPart::Dots.backdrop_marker()>
                        {(0..state.with_untracked(CarouselState::slide_count))
                            .map(|index| {
                                view! {
                                    <button
                                        class="carousel__dot"
                                        class:carousel__dot--active=move || state.with(|s| s.is_active(index))
                                        on:click=move |_| click(ClickTarget::Dot(index))
                                        aria-label=dot_label(index)
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="carousel__counter">
                        {move || state.with(CarouselState::counter_label)}
                    </div>
                </div>
            </div>
        </Portal>
    }
    .into_any()
}
