//! Swipe gesture interpretation.
//!
//! A drag navigates only when its horizontal displacement exceeds
//! [`SWIPE_THRESHOLD`] and dominates the vertical one. Default scrolling is
//! suppressed only after the drag has moved horizontally past
//! [`MOTION_THRESHOLD`], so vertical scrolls are never hijacked at start.

use crate::constants::gesture::{MOTION_THRESHOLD, SWIPE_THRESHOLD};
use crate::types::NavCommand;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

/// Tracks one pointer drag at a time.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    /// Create an idle tracker.
    pub const fn new() -> Self {
        Self { start: None }
    }

    /// Whether a drag is in progress.
    pub const fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Pointer went down.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some(Point { x, y });
    }

    /// Pointer moved. Returns `true` when the host should suppress its
    /// default scroll handling for this move.
    pub fn motion(&self, x: f64, y: f64) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let dx = (x - start.x).abs();
        let dy = (y - start.y).abs();
        dx > MOTION_THRESHOLD && dx > dy
    }

    /// Pointer went up. Leftward swipes advance, rightward ones retreat.
    pub fn end(&mut self, x: f64, y: f64) -> Option<NavCommand> {
        let start = self.start.take()?;
        let dx = x - start.x;
        let dy = y - start.y;
        if dx.abs() <= SWIPE_THRESHOLD || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0.0 { NavCommand::Advance } else { NavCommand::Retreat })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(dx: f64, dy: f64) -> Option<NavCommand> {
        let mut t = SwipeTracker::new();
        t.begin(200.0, 100.0);
        t.end(200.0 + dx, 100.0 + dy)
    }

    #[test]
    fn left_swipe_past_threshold_advances() {
        assert_eq!(swipe(-60.0, 0.0), Some(NavCommand::Advance));
    }

    #[test]
    fn right_swipe_past_threshold_retreats() {
        assert_eq!(swipe(60.0, 5.0), Some(NavCommand::Retreat));
    }

    #[test]
    fn short_swipes_do_nothing() {
        assert_eq!(swipe(-30.0, 0.0), None);
        assert_eq!(swipe(-50.0, 0.0), None);
    }

    #[test]
    fn vertical_drags_do_not_navigate() {
        assert_eq!(swipe(-60.0, 120.0), None);
    }

    #[test]
    fn scroll_suppressed_only_after_horizontal_motion() {
        let mut t = SwipeTracker::new();
        assert!(!t.motion(50.0, 0.0));

        t.begin(0.0, 0.0);
        assert!(!t.motion(5.0, 0.0));
        assert!(!t.motion(4.0, 40.0));
        assert!(t.motion(-11.0, 2.0));
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.end(-100.0, 0.0), None);
    }

    #[test]
    fn each_drag_navigates_once() {
        let mut t = SwipeTracker::new();
        t.begin(100.0, 0.0);
        assert_eq!(t.end(30.0, 0.0), Some(NavCommand::Advance));
        assert!(!t.is_tracking());
        assert_eq!(t.end(0.0, 0.0), None);
    }
}
