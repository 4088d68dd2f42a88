//! Horizontal swipe detection for the gallery viewers.

use crate::config::SWIPE_THRESHOLD_PX;
use crate::state::gallery::Direction;
use log::debug;

/// Turns a touch start/end pair into a gallery step.
///
/// Coordinates are logical pixels. The recorded start is cleared after every
/// `touch_end`, whether or not it produced a swipe.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    start: Option<(f32, f32)>,
    threshold: f32,
}

impl SwipeDetector {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finishes the gesture. A leftward swipe moves to the next image.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        let delta_x = start_x - x;
        let delta_y = start_y - y;

        if delta_x.abs() <= delta_y.abs() || delta_x.abs() <= self.threshold {
            return None;
        }

        let direction = if delta_x > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        };
        debug!("Swipe {:?} (dx={}, dy={})", direction, delta_x, delta_y);
        Some(direction)
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new()
    }
}
