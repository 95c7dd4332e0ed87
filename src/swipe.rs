//! Swipe gesture detection for a single active touch or pointer

use tracing::debug;

use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct SwipeDetector {
    min_distance: f32,
    start: Option<Position>,
    latest: Option<Position>,
}

impl SwipeDetector {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            start: None,
            latest: None,
        }
    }

    /// Begin tracking a touch; restarts any gesture already in progress
    pub fn touch_start(&mut self, pos: Position) {
        self.start = Some(pos);
        self.latest = None;
    }

    pub fn touch_move(&mut self, pos: Position) {
        if self.start.is_some() {
            self.latest = Some(pos);
        }
    }

    /// Finish the gesture, returning at most one swipe
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let (start, latest) = (self.start.take(), self.latest.take());
        let delta = latest?.delta_from(start?);
        let direction = classify(delta, self.min_distance);
        debug!(dx = delta.x, dy = delta.y, ?direction, "Swipe gesture ended");
        direction
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.latest = None;
    }
}

/// The dominant axis wins when it reaches `min_distance`; ties fire nothing
pub fn classify(delta: Position, min_distance: f32) -> Option<SwipeDirection> {
    let (abs_x, abs_y) = (delta.x.abs(), delta.y.abs());

    if abs_x > abs_y && abs_x >= min_distance {
        Some(if delta.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    } else if abs_y > abs_x && abs_y >= min_distance {
        Some(if delta.y > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(detector: &mut SwipeDetector, from: (f32, f32), to: (f32, f32)) -> Option<SwipeDirection> {
        detector.touch_start(Position::new(from.0, from.1));
        detector.touch_move(Position::new(to.0, to.1));
        detector.touch_end()
    }

    #[test]
    fn test_exact_threshold_horizontal_fires() {
        let mut detector = SwipeDetector::new(50.0);
        assert_eq!(swipe(&mut detector, (100.0, 100.0), (50.0, 100.0)), Some(SwipeDirection::Left));
        assert_eq!(swipe(&mut detector, (100.0, 100.0), (150.0, 100.0)), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_below_threshold_fires_nothing() {
        let mut detector = SwipeDetector::new(50.0);
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (49.9, 0.0)), None);
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (0.0, -49.0)), None);
    }

    #[test]
    fn test_equal_diagonal_fires_nothing() {
        let mut detector = SwipeDetector::new(50.0);
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (120.0, 120.0)), None);
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (-80.0, 80.0)), None);
    }

    #[test]
    fn test_vertical_swipes() {
        let mut detector = SwipeDetector::new(50.0);
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (10.0, 90.0)), Some(SwipeDirection::Down));
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (-10.0, -60.0)), Some(SwipeDirection::Up));
    }

    #[test]
    fn test_dominant_axis_wins() {
        let mut detector = SwipeDetector::new(50.0);
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (-70.0, 65.0)), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_release_without_move_fires_nothing() {
        let mut detector = SwipeDetector::new(50.0);
        detector.touch_start(Position::new(10.0, 10.0));
        assert_eq!(detector.touch_end(), None);
        assert!(detector.start.is_none());
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut detector = SwipeDetector::new(50.0);
        detector.touch_move(Position::new(300.0, 0.0));
        assert_eq!(detector.touch_end(), None);
    }

    #[test]
    fn test_one_event_per_gesture() {
        let mut detector = SwipeDetector::new(50.0);
        assert_eq!(swipe(&mut detector, (0.0, 0.0), (200.0, 0.0)), Some(SwipeDirection::Right));
        // State was reset by the first release
        assert_eq!(detector.touch_end(), None);
    }

    #[test]
    fn test_restart_discards_previous_touch() {
        let mut detector = SwipeDetector::new(50.0);
        detector.touch_start(Position::new(0.0, 0.0));
        detector.touch_move(Position::new(200.0, 0.0));
        detector.touch_start(Position::new(200.0, 0.0));
        detector.touch_move(Position::new(210.0, 0.0));
        assert_eq!(detector.touch_end(), None);
    }

    #[test]
    fn test_cancel() {
        let mut detector = SwipeDetector::new(50.0);
        detector.touch_start(Position::new(0.0, 0.0));
        detector.touch_move(Position::new(-200.0, 0.0));
        detector.cancel();
        assert_eq!(detector.touch_end(), None);
    }
}
