use super::*;

fn state(len: usize) -> CarouselState {
    match CarouselState::new(len) {
        Ok(s) => s,
        Err(err) => panic!("unexpected error for len {len}: {err}"),
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rejects_empty_gallery() {
    assert_eq!(CarouselState::new(0), Err(CarouselError::EmptyGallery));
}

#[test]
fn new_starts_at_first_slide() {
    let s = state(4);
    assert_eq!(s.current(), 0);
    assert_eq!(s.slide_count(), 4);
    assert_eq!(s.pending_touch_start(), None);
}

#[test]
fn empty_gallery_error_message() {
    assert_eq!(CarouselError::EmptyGallery.to_string(), "carousel needs at least one image");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_cycles_back_to_start_after_len_steps() {
    for len in 1..=7 {
        let mut s = state(len);
        for _ in 0..len {
            s.next();
        }
        assert_eq!(s.current(), 0, "len {len}");
    }
}

#[test]
fn previous_from_first_wraps_to_last() {
    for len in 1..=7 {
        let mut s = state(len);
        s.previous();
        assert_eq!(s.current(), len - 1, "len {len}");
    }
}

#[test]
fn next_from_last_wraps_to_first() {
    let mut s = state(3);
    s.jump_to(2);
    assert_eq!(s.next(), Transition::Moved { from: 2, to: 0 });
}

#[test]
fn single_image_navigation_is_unchanged() {
    let mut s = state(1);
    assert_eq!(s.next(), Transition::Unchanged);
    assert_eq!(s.previous(), Transition::Unchanged);
    assert_eq!(s.current(), 0);
}

#[test]
fn jump_to_sets_exact_index_from_any_state() {
    let mut s = state(5);
    for start in 0..5 {
        for target in 0..5 {
            s.jump_to(start);
            s.jump_to(target);
            assert_eq!(s.current(), target);
        }
    }
}

#[test]
fn jump_to_out_of_range_is_ignored() {
    let mut s = state(3);
    s.jump_to(1);
    assert_eq!(s.jump_to(3), Transition::Unchanged);
    assert_eq!(s.jump_to(usize::MAX), Transition::Unchanged);
    assert_eq!(s.current(), 1);
}

#[test]
fn dismiss_does_not_move_index() {
    let mut s = state(4);
    s.jump_to(2);
    assert_eq!(s.apply(CarouselCommand::Dismiss), Transition::Dismissed);
    assert_eq!(s.current(), 2);
}

#[test]
fn is_active_marks_only_current() {
    let mut s = state(4);
    s.jump_to(3);
    let active: Vec<usize> = (0..4).filter(|i| s.is_active(*i)).collect();
    assert_eq!(active, vec![3]);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn keys_map_to_commands() {
    assert_eq!(command_for_key("Escape"), Some(CarouselCommand::Dismiss));
    assert_eq!(command_for_key("ArrowLeft"), Some(CarouselCommand::Previous));
    assert_eq!(command_for_key("ArrowRight"), Some(CarouselCommand::Next));
    assert_eq!(command_for_key("Enter"), None);
    assert_eq!(command_for_key("ArrowUp"), None);
}

#[test]
fn escape_at_any_index_dismisses_without_moving() {
    let mut s = state(3);
    for index in 0..3 {
        s.jump_to(index);
        let mut dismissals = 0;
        if let Some(command) = command_for_key("Escape") {
            if s.apply(command) == Transition::Dismissed {
                dismissals += 1;
            }
        }
        assert_eq!(dismissals, 1);
        assert_eq!(s.current(), index);
    }
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn controls_map_to_commands() {
    assert_eq!(command_for_click(ClickTarget::Backdrop), CarouselCommand::Dismiss);
    assert_eq!(command_for_click(ClickTarget::CloseButton), CarouselCommand::Dismiss);
    assert_eq!(command_for_click(ClickTarget::PreviousButton), CarouselCommand::Previous);
    assert_eq!(command_for_click(ClickTarget::NextButton), CarouselCommand::Next);
    assert_eq!(command_for_click(ClickTarget::Dot(2)), CarouselCommand::JumpTo(2));
}

#[test]
fn only_layout_wrappers_carry_backdrop_marker() {
    let marked: Vec<OverlayPart> = OverlayPart::ALL
        .into_iter()
        .filter(|part| part.backdrop_marker().is_some())
        .collect();
    assert_eq!(
        marked,
        vec![
            OverlayPart::Overlay,
            OverlayPart::Container,
            OverlayPart::Content,
            OverlayPart::Slides,
            OverlayPart::Slide,
            OverlayPart::Dots,
        ]
    );
}

#[test]
fn clicks_on_interactive_parts_never_dismiss_through_overlay() {
    for part in [
        OverlayPart::Image,
        OverlayPart::Counter,
        OverlayPart::PreviousButton,
        OverlayPart::NextButton,
        OverlayPart::Dot,
        OverlayPart::CloseButton,
    ] {
        let marked = part.backdrop_marker().is_some();
        assert_eq!(command_for_overlay_click(marked), None, "{part:?}");
    }
}

#[test]
fn clicks_on_wrappers_dismiss_through_overlay() {
    for part in OverlayPart::ALL.into_iter().filter(|p| p.is_backdrop()) {
        let marked = part.backdrop_marker().is_some();
        assert_eq!(command_for_overlay_click(marked), Some(CarouselCommand::Dismiss), "{part:?}");
    }
}

#[test]
fn close_button_dismisses_exactly_once() {
    // Own handler fires; the bubbled click reaches the overlay unmarked.
    let mut dismissals = 0;
    if command_for_click(ClickTarget::CloseButton) == CarouselCommand::Dismiss {
        dismissals += 1;
    }
    let marked = OverlayPart::CloseButton.backdrop_marker().is_some();
    if command_for_overlay_click(marked) == Some(CarouselCommand::Dismiss) {
        dismissals += 1;
    }
    assert_eq!(dismissals, 1);
}

// =============================================================
// Swipe
// =============================================================

#[test]
fn classify_swipe_thresholds() {
    assert_eq!(classify_swipe(200.0, 100.0, 50.0), Some(SwipeDirection::Next));
    assert_eq!(classify_swipe(100.0, 200.0, 50.0), Some(SwipeDirection::Previous));
    assert_eq!(classify_swipe(100.0, 80.0, 50.0), None);
    assert_eq!(classify_swipe(100.0, 50.0, 50.0), None);
    assert_eq!(classify_swipe(50.0, 100.0, 50.0), None);
}

#[test]
fn right_to_left_swipe_moves_next_once() {
    let mut s = state(3);
    s.touch_start(200.0);
    assert_eq!(s.touch_end(100.0), Some(SwipeDirection::Next));
    assert_eq!(s.current(), 1);
}

#[test]
fn left_to_right_swipe_moves_previous_once() {
    let mut s = state(3);
    s.touch_start(100.0);
    assert_eq!(s.touch_end(200.0), Some(SwipeDirection::Previous));
    assert_eq!(s.current(), 2);
}

#[test]
fn short_swipe_does_not_navigate() {
    let mut s = state(3);
    s.touch_start(100.0);
    assert_eq!(s.touch_end(80.0), None);
    assert_eq!(s.current(), 0);
    assert_eq!(s.pending_touch_start(), None);
}

#[test]
fn touch_end_without_fresh_start_does_not_navigate() {
    let mut s = state(3);
    s.touch_start(200.0);
    s.touch_end(100.0);
    assert_eq!(s.touch_end(0.0), None);
    assert_eq!(s.current(), 1);
}

#[test]
fn touch_cancel_clears_gesture() {
    let mut s = state(3);
    s.touch_start(200.0);
    s.touch_cancel();
    assert_eq!(s.pending_touch_start(), None);
    assert_eq!(s.touch_end(0.0), None);
    assert_eq!(s.current(), 0);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn counter_label_is_one_based() {
    let mut s = state(5);
    assert_eq!(s.counter_label(), "1 / 5");
    s.jump_to(4);
    assert_eq!(s.counter_label(), "5 / 5");
}

#[test]
fn accessible_labels() {
    assert_eq!(slide_alt("Kanban board", 0), "Kanban board - slide 1");
    assert_eq!(dot_label(2), "Go to slide 3");
}
