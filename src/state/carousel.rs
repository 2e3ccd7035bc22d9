//! Carousel navigation state: current slide, wraparound, and swipe tracking.
//!
//! DESIGN
//! ======
//! The component layer only translates DOM events into [`CarouselCommand`]s
//! and touch coordinates. Every index transition happens here so the looping
//! and swipe rules can be exercised without a browser.
//!
//! The current index is kept valid with modular arithmetic on every step.
//! Nothing is ever clamped, and construction rejects an empty gallery so the
//! modulus is never zero.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::SWIPE_THRESHOLD_PX;

/// Errors raised while building a carousel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The gallery has no images to show.
    #[error("carousel needs at least one image")]
    EmptyGallery,
}

/// A single user intent against the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Next,
    Previous,
    JumpTo(usize),
    Dismiss,
}

/// Result of applying a [`CarouselCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current slide changed.
    Moved { from: usize, to: usize },
    /// Nothing changed (single-image gallery, same dot, or ignored index).
    Unchanged,
    /// The caller should run its close callback.
    Dismissed,
}

/// Direction resolved from a completed touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled right-to-left.
    Next,
    /// Finger travelled left-to-right.
    Previous,
}

impl SwipeDirection {
    #[must_use]
    pub fn command(self) -> CarouselCommand {
        match self {
            Self::Next => CarouselCommand::Next,
            Self::Previous => CarouselCommand::Previous,
        }
    }
}

/// A control whose own click handler issues a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content, or a layout wrapper marked as such.
    Backdrop,
    CloseButton,
    PreviousButton,
    NextButton,
    Dot(usize),
}

/// Map a click origin to the command it triggers.
#[must_use]
pub fn command_for_click(target: ClickTarget) -> CarouselCommand {
    match target {
        ClickTarget::Backdrop | ClickTarget::CloseButton => CarouselCommand::Dismiss,
        ClickTarget::PreviousButton => CarouselCommand::Previous,
        ClickTarget::NextButton => CarouselCommand::Next,
        ClickTarget::Dot(index) => CarouselCommand::JumpTo(index),
    }
}

/// Every element the overlay renders, for deciding which ones count as backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPart {
    Overlay,
    Container,
    Content,
    Slides,
    Slide,
    Dots,
    CloseButton,
    PreviousButton,
    NextButton,
    Image,
    Dot,
    Counter,
}

impl OverlayPart {
    pub const ALL: [Self; 12] = [
        Self::Overlay,
        Self::Container,
        Self::Content,
        Self::Slides,
        Self::Slide,
        Self::Dots,
        Self::CloseButton,
        Self::PreviousButton,
        Self::NextButton,
        Self::Image,
        Self::Dot,
        Self::Counter,
    ];

    /// Layout wrappers are backdrop; anything the user aims at is not.
    #[must_use]
    pub fn is_backdrop(self) -> bool {
        matches!(
            self,
            Self::Overlay | Self::Container | Self::Content | Self::Slides | Self::Slide | Self::Dots
        )
    }

    /// Value for the `data-carousel-backdrop` attribute; `None` omits it.
    #[must_use]
    pub fn backdrop_marker(self) -> Option<&'static str> {
        self.is_backdrop().then_some("")
    }
}

/// Command for a click that bubbled to the overlay, given whether the element
/// actually clicked carries the backdrop marker.
#[must_use]
pub fn command_for_overlay_click(target_marked: bool) -> Option<CarouselCommand> {
    target_marked.then(|| command_for_click(ClickTarget::Backdrop))
}

/// Map a `KeyboardEvent.key` value to a command, if the key is bound.
#[must_use]
pub fn command_for_key(key: &str) -> Option<CarouselCommand> {
    match key {
        "Escape" => Some(CarouselCommand::Dismiss),
        "ArrowLeft" => Some(CarouselCommand::Previous),
        "ArrowRight" => Some(CarouselCommand::Next),
        _ => None,
    }
}

/// Resolve a gesture from its start and end X coordinates.
///
/// Travel must strictly exceed `threshold` in either direction.
#[must_use]
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    let dx = start_x - end_x;
    if dx > threshold {
        Some(SwipeDirection::Next)
    } else if -dx > threshold {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

/// Per-instance carousel state. A fresh instance always starts at slide 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    touch_start_x: Option<f64>,
}

impl CarouselState {
    /// Build state for a gallery of `len` images.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::EmptyGallery`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyGallery);
        }
        Ok(Self {
            len,
            current: 0,
            touch_start_x: None,
        })
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Counter text, e.g. `"2 / 5"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }

    pub fn next(&mut self) -> Transition {
        self.move_to((self.current + 1) % self.len)
    }

    pub fn previous(&mut self) -> Transition {
        self.move_to((self.current + self.len - 1) % self.len)
    }

    /// Select slide `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> Transition {
        if index >= self.len {
            return Transition::Unchanged;
        }
        self.move_to(index)
    }

    /// Apply a command. [`CarouselCommand::Dismiss`] never touches the index.
    pub fn apply(&mut self, command: CarouselCommand) -> Transition {
        match command {
            CarouselCommand::Next => self.next(),
            CarouselCommand::Previous => self.previous(),
            CarouselCommand::JumpTo(index) => self.jump_to(index),
            CarouselCommand::Dismiss => Transition::Dismissed,
        }
    }

    /// Record where a touch gesture began, replacing any unfinished one.
    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Record where the gesture ended and navigate if it was a swipe.
    ///
    /// The start point is consumed, so a touch-end with no matching
    /// touch-start never navigates.
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start_x = self.touch_start_x.take()?;
        let direction = classify_swipe(start_x, x, SWIPE_THRESHOLD_PX)?;
        self.apply(direction.command());
        Some(direction)
    }

    /// Abandon the in-flight gesture (e.g. `touchcancel`).
    pub fn touch_cancel(&mut self) {
        self.touch_start_x = None;
    }

    #[cfg(test)]
    fn pending_touch_start(&self) -> Option<f64> {
        self.touch_start_x
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.current;
        if from == to {
            return Transition::Unchanged;
        }
        self.current = to;
        Transition::Moved { from, to }
    }
}

/// Accessible alt text for slide `index` (0-based).
#[must_use]
pub fn slide_alt(title: &str, index: usize) -> String {
    format!("{title} - slide {}", index + 1)
}

/// Accessible label for the dot selecting slide `index` (0-based).
#[must_use]
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}
