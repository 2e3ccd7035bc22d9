//! Shared tuning constants for the portfolio UI.

// ── Carousel ────────────────────────────────────────────────────

/// Minimum horizontal travel, in CSS pixels, before a touch gesture counts as
/// a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Attribute marking elements whose own clicks dismiss the carousel.
pub const BACKDROP_ATTR: &str = "data-carousel-backdrop";

// ── Projects grid ───────────────────────────────────────────────

/// Fraction of the projects section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Per-card entrance animation delay step, in seconds.
pub const CARD_STAGGER_SECS: f64 = 0.1;
