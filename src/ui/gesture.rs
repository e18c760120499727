// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture recognition
//!
//! Turns a touch start/move/end sequence into a horizontal swipe direction.

use iced::Point;

/// Direction a completed swipe maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right: show the previous item.
    Previous,
    /// Finger moved left: show the next item.
    Next,
}

/// Tracks one touch sequence at a time
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    /// Horizontal distance a swipe must exceed (strictly)
    threshold: f32,

    /// Position where the touch started
    start_position: Option<Point>,

    /// Signed horizontal travel since the start
    delta_x: f32,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_position: None,
            delta_x: 0.0,
        }
    }

    /// Records the origin, discarding any unfinished sequence.
    pub fn start(&mut self, position: Point) {
        self.start_position = Some(position);
        self.delta_x = 0.0;
    }

    /// Updates the horizontal travel. Ignored without a start.
    pub fn move_to(&mut self, position: Point) {
        if let Some(start) = self.start_position {
            self.delta_x = position.x - start.x;
        }
    }

    /// Finishes the sequence and reports the swipe, if any.
    pub fn end(&mut self) -> Option<SwipeDirection> {
        let started = self.start_position.take().is_some();
        let delta_x = std::mem::take(&mut self.delta_x);
        if !started || delta_x.abs() <= self.threshold {
            return None;
        }
        if delta_x > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            Some(SwipeDirection::Next)
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_position.is_some()
    }

    #[must_use]
    pub fn delta_x(&self) -> f32 {
        self.delta_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(recognizer: &mut GestureRecognizer, from: f32, to: f32) -> Option<SwipeDirection> {
        recognizer.start(Point::new(from, 10.0));
        recognizer.move_to(Point::new(to, 12.0));
        recognizer.end()
    }

    #[test]
    fn right_swipe_goes_previous() {
        let mut recognizer = GestureRecognizer::new(50.0);
        assert_eq!(swipe(&mut recognizer, 100.0, 180.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn left_swipe_goes_next() {
        let mut recognizer = GestureRecognizer::new(50.0);
        assert_eq!(swipe(&mut recognizer, 200.0, 120.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn sixty_pixel_left_swipe_goes_next() {
        let mut recognizer = GestureRecognizer::new(50.0);
        assert_eq!(swipe(&mut recognizer, 100.0, 40.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn threshold_is_strict() {
        let mut recognizer = GestureRecognizer::new(50.0);
        assert_eq!(swipe(&mut recognizer, 100.0, 150.0), None);
        assert_eq!(swipe(&mut recognizer, 100.0, 151.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn state_resets_after_end() {
        let mut recognizer = GestureRecognizer::new(50.0);
        swipe(&mut recognizer, 0.0, 300.0);
        assert!(!recognizer.is_tracking());
        assert_eq!(recognizer.delta_x(), 0.0);
        assert_eq!(recognizer.end(), None);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut recognizer = GestureRecognizer::new(50.0);
        recognizer.move_to(Point::new(500.0, 0.0));
        assert_eq!(recognizer.delta_x(), 0.0);
        assert_eq!(recognizer.end(), None);
    }

    #[test]
    fn new_start_overwrites_unfinished_sequence() {
        let mut recognizer = GestureRecognizer::new(50.0);
        recognizer.start(Point::new(0.0, 0.0));
        recognizer.move_to(Point::new(200.0, 0.0));
        recognizer.start(Point::new(300.0, 0.0));
        recognizer.move_to(Point::new(310.0, 0.0));
        assert_eq!(recognizer.end(), None);
    }
}
