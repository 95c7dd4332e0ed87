//! Edit-mode session: a working copy of the active fields plus the save
//! choreography that hands it back to the carousel

use std::time::{Duration, Instant};
use tracing::info;

use crate::assignment::{ActiveFields, AssignmentMachine};
use crate::bubbles::{self, Bubble};
use crate::config::{EditSettings, LayoutSettings};
use crate::constants;

/// Delays of the save affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTimings {
    pub save_delay: Duration,
    pub close_delay: Duration,
}

impl Default for SaveTimings {
    fn default() -> Self {
        Self {
            save_delay: Duration::from_millis(constants::edit::SAVE_DELAY_MS),
            close_delay: Duration::from_millis(constants::edit::CLOSE_DELAY_MS),
        }
    }
}

impl From<&EditSettings> for SaveTimings {
    fn from(settings: &EditSettings) -> Self {
        Self {
            save_delay: Duration::from_millis(settings.save_delay_ms),
            close_delay: Duration::from_millis(settings.close_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePhase {
    Editing,
    Saving { since: Instant },
    Saved { since: Instant },
    /// Result already handed out
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    Pending,
    Commit(ActiveFields),
}

#[derive(Debug)]
pub struct EditSession {
    machine: AssignmentMachine,
    phase: SavePhase,
    timings: SaveTimings,
    opened_at: Instant,
}

impl EditSession {
    pub fn new(seed: ActiveFields, timings: SaveTimings) -> Self {
        info!(fields = seed.len(), "Edit mode opened");
        Self {
            machine: AssignmentMachine::new(seed),
            phase: SavePhase::Editing,
            timings,
            opened_at: Instant::now(),
        }
    }

    pub fn machine(&self) -> &AssignmentMachine {
        &self.machine
    }

    /// Mutable access to the working copy; `None` once a save has started
    pub fn machine_mut(&mut self) -> Option<&mut AssignmentMachine> {
        matches!(self.phase, SavePhase::Editing).then_some(&mut self.machine)
    }

    /// True while the save choreography runs; input is locked
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, SavePhase::Editing)
    }

    pub fn selected_count(&self) -> usize {
        self.machine.fields().len()
    }

    pub fn save_label(&self) -> &'static str {
        match self.phase {
            SavePhase::Editing => "Save Configuration",
            SavePhase::Saving { .. } => "Saving...",
            SavePhase::Saved { .. } | SavePhase::Closed => "Saved!",
        }
    }

    /// Bubble positions for the current working copy
    pub fn bubbles(&self, viewport_width: f32, layout: &LayoutSettings) -> Vec<Bubble> {
        let radius = bubbles::ring_radius(viewport_width, layout);
        bubbles::layout_bubbles(self.machine.fields().as_slice(), radius)
    }

    /// Fraction of the bubble fly-out animation completed at `now`
    pub fn intro_progress(&self, now: Instant) -> f32 {
        let total = Duration::from_millis(constants::edit::BUBBLE_INTRO_MS);
        let elapsed = now.saturating_duration_since(self.opened_at);
        (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
    }

    /// Start the save timers. Ignored unless still editing.
    pub fn request_save(&mut self, now: Instant) -> bool {
        if self.is_busy() {
            return false;
        }
        self.machine.end_drag();
        self.phase = SavePhase::Saving { since: now };
        info!(fields = ?self.machine.fields().as_slice(), "Saving field configuration");
        true
    }

    /// Advance the save timers, yielding the new configuration exactly once
    pub fn poll(&mut self, now: Instant) -> EditEvent {
        if let SavePhase::Saving { since } = self.phase {
            let saved_at = since + self.timings.save_delay;
            if now >= saved_at {
                self.phase = SavePhase::Saved { since: saved_at };
            }
        }

        if let SavePhase::Saved { since } = self.phase
            && now >= since + self.timings.close_delay
        {
            self.phase = SavePhase::Closed;
            info!("Edit mode closed after save");
            return EditEvent::Commit(self.machine.fields().clone());
        }

        EditEvent::Pending
    }

    /// Time until the next phase change, for scheduling a repaint
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let deadline = match self.phase {
            SavePhase::Saving { since } => since + self.timings.save_delay,
            SavePhase::Saved { since } => since + self.timings.close_delay,
            SavePhase::Editing | SavePhase::Closed => return None,
        };
        Some(deadline.saturating_duration_since(now))
    }

    /// Discard the working copy
    pub fn cancel(self) {
        info!(
            fields = ?self.machine.fields().as_slice(),
            "Edit mode cancelled, changes discarded"
        );
    }
}
