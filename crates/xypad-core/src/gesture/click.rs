//! Double-click detection for presses outside the pad

use std::time::{Duration, Instant};

use crate::types::Point;

/// Default maximum gap between the two presses of a double-click
pub const DEFAULT_DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(400);

/// Maximum pointer travel between the two presses of a double-click (pixels)
pub const DOUBLE_CLICK_DISTANCE: f32 = 6.0;

/// Classification of a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

/// Tracks consecutive presses to recognise double-clicks
///
/// A third press after a double-click starts a new sequence, so four quick
/// presses register as two double-clicks.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    last_press: Option<(Instant, Point)>,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_INTERVAL)
    }
}

impl ClickTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_press: None,
        }
    }

    /// Register a press and classify it
    pub fn press(&mut self, position: Point, now: Instant) -> ClickKind {
        let is_double = self.last_press.is_some_and(|(at, pos)| {
            now.saturating_duration_since(at) <= self.interval
                && pos.distance(position) <= DOUBLE_CLICK_DISTANCE
        });

        if is_double {
            self.last_press = None;
            ClickKind::Double
        } else {
            self.last_press = Some((now, position));
            ClickKind::Single
        }
    }

    /// Forget the pending press
    pub fn reset(&mut self) {
        self.last_press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_within_interval() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::default();
        let p = Point::new(5.0, 5.0);

        assert_eq!(clicks.press(p, t0), ClickKind::Single);
        assert_eq!(clicks.press(p, t0 + Duration::from_millis(250)), ClickKind::Double);
        // Third press starts over
        assert_eq!(clicks.press(p, t0 + Duration::from_millis(300)), ClickKind::Single);
    }

    #[test]
    fn test_slow_or_distant_presses_are_single() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::default();

        clicks.press(Point::new(5.0, 5.0), t0);
        assert_eq!(
            clicks.press(Point::new(5.0, 5.0), t0 + Duration::from_millis(600)),
            ClickKind::Single
        );
        assert_eq!(
            clicks.press(Point::new(40.0, 5.0), t0 + Duration::from_millis(700)),
            ClickKind::Single
        );
    }
}
