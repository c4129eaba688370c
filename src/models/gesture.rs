//! Swipe recognition for touch control.

use log::debug;

use super::board::Direction;

/// Minimum travel along the dominant axis, in pixels, for a drag to count
/// as a swipe.
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Tracks one finger from press to lift and turns the drag into a direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    end: Option<(f32, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
        self.end = Some((x, y));
    }

    pub fn update(&mut self, x: f32, y: f32) {
        if self.start.is_some() {
            self.end = Some((x, y));
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Ends the drag. Maps it to the direction of its dominant axis when it
    /// traveled far enough, and to nothing otherwise.
    pub fn finish(&mut self) -> Option<Direction> {
        let start = self.start.take()?;
        let end = self.end.take()?;
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        let direction = if dx.abs() > dy.abs() {
            if dx > SWIPE_THRESHOLD {
                Some(Direction::Right)
            } else if dx < -SWIPE_THRESHOLD {
                Some(Direction::Left)
            } else {
                None
            }
        } else if dy > SWIPE_THRESHOLD {
            Some(Direction::Down)
        } else if dy < -SWIPE_THRESHOLD {
            Some(Direction::Up)
        } else {
            None
        };
        if let Some(direction) = direction {
            debug!("Swipe of ({dx}, {dy}) mapped to {direction:?}");
        }
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: (f32, f32), to: (f32, f32)) -> Option<Direction> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(from.0, from.1);
        tracker.update(to.0, to.1);
        tracker.finish()
    }

    #[test]
    fn long_drags_map_to_their_dominant_axis() {
        assert_eq!(swipe((10.0, 10.0), (60.0, 20.0)), Some(Direction::Right));
        assert_eq!(swipe((60.0, 10.0), (10.0, 20.0)), Some(Direction::Left));
        assert_eq!(swipe((10.0, 10.0), (20.0, 55.0)), Some(Direction::Down));
        assert_eq!(swipe((10.0, 55.0), (20.0, 10.0)), Some(Direction::Up));
    }

    #[test]
    fn short_drags_map_to_nothing() {
        assert_eq!(swipe((10.0, 10.0), (35.0, 10.0)), None);
        assert_eq!(swipe((10.0, 10.0), (10.0, 30.0)), None);
        assert_eq!(swipe((10.0, 10.0), (10.0, 10.0)), None);
    }

    #[test]
    fn lift_without_press_maps_to_nothing() {
        let mut tracker = SwipeTracker::new();
        tracker.update(100.0, 100.0);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn finishing_clears_the_drag() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0, 0.0);
        tracker.update(80.0, 0.0);
        assert_eq!(tracker.finish(), Some(Direction::Right));
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn cancel_discards_the_drag() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0, 0.0);
        tracker.update(80.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.finish(), None);
    }
}
