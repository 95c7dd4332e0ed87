//! Carousel position, render window and per-slide styling

use std::collections::HashSet;
use tracing::{debug, info};

use crate::assignment::ActiveFields;
use crate::constants::{layout, slides};
use crate::editor::{EditSession, SaveTimings};
use crate::swipe::SwipeDirection;
use crate::types::ViewportClass;

/// Direction of the last navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Keys the carousel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// A book placed at `offset` slots from the center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSlot {
    pub offset: i32,
    pub book_index: usize,
}

/// Neighbours drawn on each side of the center for a viewport class
pub fn window_reach(class: ViewportClass) -> i32 {
    match class {
        ViewportClass::Wide => layout::WIDE_WINDOW_REACH,
        ViewportClass::Narrow => layout::NARROW_WINDOW_REACH,
    }
}

#[derive(Debug)]
pub struct CarouselController {
    len: usize,
    index: usize,
    direction: Option<Direction>,
    /// Signed count of steps taken, drives the slide animation
    scroll: i64,
    active_fields: ActiveFields,
    loaded_covers: HashSet<String>,
}

impl CarouselController {
    /// `len` must be non-zero; the catalogue guarantees it
    pub fn new(len: usize, active_fields: ActiveFields) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            direction: None,
            scroll: 0,
            active_fields,
            loaded_covers: HashSet::new(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn scroll(&self) -> i64 {
        self.scroll
    }

    pub fn active_fields(&self) -> &ActiveFields {
        &self.active_fields
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.direction = Some(Direction::Forward);
        self.scroll += 1;
        debug!(index = self.index, "Carousel advanced");
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.direction = Some(Direction::Backward);
        self.scroll -= 1;
        debug!(index = self.index, "Carousel retreated");
    }

    /// Returns true when the key moved the carousel
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::ArrowLeft => self.prev(),
            NavKey::ArrowRight => self.next(),
            NavKey::Other => return false,
        }
        true
    }

    /// Swiping left reveals the next book
    pub fn handle_swipe(&mut self, swipe: SwipeDirection) -> bool {
        match swipe {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.prev(),
            SwipeDirection::Up | SwipeDirection::Down => return false,
        }
        true
    }

    /// Slides around the center, left to right
    pub fn window(&self, class: ViewportClass) -> Vec<SlideSlot> {
        let reach = window_reach(class);
        (-reach..=reach).map(|offset| self.slot(offset)).collect()
    }

    /// The slide that just left the window, drawn while the transition runs
    pub fn exiting_slot(&self, class: ViewportClass) -> Option<SlideSlot> {
        let edge = window_reach(class) + 1;
        match self.direction? {
            Direction::Forward => Some(self.slot(-edge)),
            Direction::Backward => Some(self.slot(edge)),
        }
    }

    fn slot(&self, offset: i32) -> SlideSlot {
        let book_index = (self.index as i64 + offset as i64).rem_euclid(self.len as i64) as usize;
        SlideSlot { offset, book_index }
    }

    pub fn mark_cover_loaded(&mut self, title: &str) {
        if self.loaded_covers.insert(title.to_string()) {
            debug!(title, "Cover loaded");
        }
    }

    pub fn is_cover_loaded(&self, title: &str) -> bool {
        self.loaded_covers.contains(title)
    }

    /// Start an edit session seeded with the current configuration
    pub fn open_editor(&self, timings: SaveTimings) -> EditSession {
        EditSession::new(self.active_fields.clone(), timings)
    }

    pub fn apply_fields(&mut self, fields: ActiveFields) {
        info!(fields = ?fields.as_slice(), "Applied new card configuration");
        self.active_fields = fields;
    }
}

/// Visual treatment of a slide at a (possibly fractional) offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideStyle {
    pub scale: f32,
    pub opacity: f32,
    pub translate_x: f32,
    pub blur: f32,
}

impl SlideStyle {
    /// Style of the slide `steps` whole positions from the center
    fn step(steps: u32) -> (f32, f32, f32) {
        if steps == 0 {
            return (1.0, 1.0, 0.0);
        }
        let n = steps as f32;
        (
            slides::SIDE_SCALE_BASE - slides::SCALE_FALLOFF * n,
            slides::SIDE_OPACITY_BASE - slides::OPACITY_FALLOFF * n,
            slides::BLUR_PER_STEP * n,
        )
    }

    /// Interpolates between neighbouring whole offsets. Past the window
    /// edge the slide keeps the edge style, fades out and travels off by
    /// the entry distance.
    pub fn at(offset: f32, class: ViewportClass, spacing: f32) -> Self {
        let reach = window_reach(class) as f32;
        let distance = offset.abs();
        let sign = offset.signum();

        if distance > reach {
            let (scale, opacity, blur) = Self::step(reach as u32);
            let overshoot = (distance - reach).min(1.0);
            return Self {
                scale,
                opacity: opacity * (1.0 - overshoot),
                translate_x: sign * (reach * spacing + overshoot * slides::ENTRY_TRAVEL),
                blur,
            };
        }

        let lower = distance.floor();
        let t = distance - lower;
        let (s0, o0, b0) = Self::step(lower as u32);
        let (s1, o1, b1) = Self::step(lower as u32 + 1);

        Self {
            scale: lerp(s0, s1, t),
            opacity: lerp(o0, o1, t),
            translate_x: offset * spacing,
            blur: lerp(b0, b1, t),
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
