//! Application-wide constants
//!
//! This module contains the magic numbers used throughout the application,
//! providing a single source of truth for default values. Most of them can be
//! overridden from the settings file.

/// Settings file location
pub mod config {
    /// Directory created under the platform config dir
    pub const APP_DIR: &str = "audiobook-carousel";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";
}

/// Active field configuration limits
pub mod fields {
    /// Maximum number of fields shown on the center card
    pub const MAX_ACTIVE: usize = 5;
}

/// Swipe gesture detection
pub mod swipe {
    /// Minimum travel along the dominant axis before a swipe fires (logical px)
    pub const MIN_DISTANCE: f32 = 50.0;
}

/// Responsive layout breakpoints and bubble ring geometry
pub mod layout {
    /// Viewports narrower than this use the compact layout
    pub const NARROW_BREAKPOINT: f32 = 768.0;

    /// Bubble ring radius on wide viewports
    pub const WIDE_BUBBLE_RADIUS: f32 = 420.0;

    /// Bubble ring radius on narrow viewports (keeps bubbles on-screen)
    pub const NARROW_BUBBLE_RADIUS: f32 = 120.0;

    /// Neighbours rendered on each side of the center book
    pub const WIDE_WINDOW_REACH: i32 = 2;
    pub const NARROW_WINDOW_REACH: i32 = 1;
}

/// Per-offset slide styling
pub mod slides {
    /// Scale of the first neighbour before falloff is applied
    pub const SIDE_SCALE_BASE: f32 = 0.85;
    pub const SCALE_FALLOFF: f32 = 0.08;

    /// Opacity of the first neighbour before falloff is applied
    pub const SIDE_OPACITY_BASE: f32 = 0.7;
    pub const OPACITY_FALLOFF: f32 = 0.15;

    /// Blur radius added per step away from the center
    pub const BLUR_PER_STEP: f32 = 1.5;

    /// Horizontal distance between slide centers
    pub const WIDE_SPACING: f32 = 280.0;
    pub const NARROW_SPACING: f32 = 180.0;

    /// Horizontal travel of slides entering or leaving the window
    pub const ENTRY_TRAVEL: f32 = 600.0;

    /// Slide transition duration in seconds
    pub const TRANSITION_SECS: f32 = 0.35;
}

/// Edit mode save choreography
pub mod edit {
    /// Artificial delay while the "Saving..." affordance is shown
    pub const SAVE_DELAY_MS: u64 = 400;

    /// Delay after "Saved!" before the overlay closes
    pub const CLOSE_DELAY_MS: u64 = 600;

    /// Bubbles fly from their default positions onto the ring when opened
    pub const BUBBLE_INTRO_MS: u64 = 300;
}

/// Bounds applied when validating the settings file
pub mod validation {
    pub const MIN_SWIPE_DISTANCE: f32 = 1.0;
    pub const MAX_SWIPE_DISTANCE: f32 = 1000.0;

    pub const MIN_BUBBLE_RADIUS: f32 = 10.0;
    pub const MAX_BUBBLE_RADIUS: f32 = 2000.0;

    pub const MAX_DELAY_MS: u64 = 10_000;

    pub const MIN_WINDOW_DIMENSION: f32 = 320.0;
    pub const MAX_WINDOW_DIMENSION: f32 = 8192.0;
}
