// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! Slide index state machine with wrap-around navigation, periodic autoplay,
//! hover pause on pointer devices and swipe support on touch devices.

use crate::error::{Error, Result};
use crate::timing::{TimerHandle, TimerQueue};
use crate::ui::gesture::{GestureRecognizer, SwipeDirection};
use crate::ui::view_sync::{ViewSync, ViewUpdate};
use iced::Point;
use std::time::Duration;

/// Timers owned by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Autoplay interval elapsed.
    Advance,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    /// Track element exists; without it every operation is a no-op.
    present: bool,
    current: usize,
    total: usize,
    /// Autoplay preference. Pausing does not clear it.
    is_playing: bool,
    /// Pending advance; `Some` iff autoplay is running.
    autoplay: Option<TimerHandle>,
    /// Paused because the pointer is over the track.
    hover_paused: bool,
    interval: Duration,
    gesture: GestureRecognizer,
}

impl Carousel {
    #[must_use]
    pub fn new(present: bool, autoplay: bool, interval: Duration, swipe_threshold: f32) -> Self {
        Self {
            present,
            current: 0,
            total: 0,
            is_playing: autoplay,
            autoplay: None,
            hover_paused: false,
            interval,
            gesture: GestureRecognizer::new(swipe_threshold),
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Re-derives the slide count, rebuilds the dots and makes sure autoplay
    /// runs exactly once.
    pub fn rebuild<T: From<Timer>>(
        &mut self,
        total: usize,
        timers: &mut TimerQueue<T>,
        sync: &mut ViewSync,
    ) {
        if !self.present {
            return;
        }
        self.total = total;
        if total == 0 {
            self.current = 0;
            self.pause_autoplay(timers);
            return;
        }
        if self.current >= total {
            self.current = 0;
        }
        sync.push(ViewUpdate::CarouselDots {
            count: total,
            active: self.current,
        });
        sync.push(ViewUpdate::CarouselTrack {
            offset_percent: track_offset(self.current),
        });
        if !self.hover_paused {
            self.start_autoplay(timers);
        }
    }

    /// Shows slide `index`. Out-of-range indices are rejected.
    pub fn go_to(&mut self, index: usize, sync: &mut ViewSync) -> Result<()> {
        if !self.present {
            return Ok(());
        }
        if index >= self.total {
            return Err(Error::MissingTarget(format!(
                "slide {index} of {}",
                self.total
            )));
        }
        self.current = index;
        sync.push(ViewUpdate::CarouselTrack {
            offset_percent: track_offset(index),
        });
        sync.push(ViewUpdate::CarouselDotActive(index));
        Ok(())
    }

    pub fn next(&mut self, sync: &mut ViewSync) {
        if self.total == 0 {
            return;
        }
        let index = (self.current + 1) % self.total;
        self.show(index, sync);
    }

    pub fn previous(&mut self, sync: &mut ViewSync) {
        if self.total == 0 {
            return;
        }
        let index = (self.current + self.total - 1) % self.total;
        self.show(index, sync);
    }

    fn show(&mut self, index: usize, sync: &mut ViewSync) {
        // Index is computed modulo `total`, so it is always in range.
        if let Err(err) = self.go_to(index, sync) {
            tracing::warn!(%err, "carousel navigation rejected");
        }
    }

    /// Named-direction navigation: `"next"` or `"prev"`.
    pub fn update(&mut self, direction: &str, sync: &mut ViewSync) -> Result<()> {
        match direction {
            "next" => self.next(sync),
            "prev" => self.previous(sync),
            other => return Err(Error::MissingTarget(format!("carousel direction {other:?}"))),
        }
        Ok(())
    }

    /// Starts autoplay unless disabled, already running or there is nothing
    /// to rotate.
    pub fn start_autoplay<T: From<Timer>>(&mut self, timers: &mut TimerQueue<T>) {
        if !self.present || !self.is_playing || self.total == 0 {
            return;
        }
        if self.autoplay.is_some_and(|handle| timers.is_pending(handle)) {
            return;
        }
        self.autoplay = Some(timers.schedule(self.interval, Timer::Advance.into()));
    }

    pub fn pause_autoplay<T>(&mut self, timers: &mut TimerQueue<T>) {
        if let Some(handle) = self.autoplay.take() {
            timers.cancel(handle);
        }
    }

    pub fn pointer_entered<T>(&mut self, is_mobile: bool, timers: &mut TimerQueue<T>) {
        if is_mobile || !self.present {
            return;
        }
        self.hover_paused = true;
        self.pause_autoplay(timers);
    }

    pub fn pointer_left<T: From<Timer>>(&mut self, is_mobile: bool, timers: &mut TimerQueue<T>) {
        if is_mobile || !self.present {
            return;
        }
        self.hover_paused = false;
        self.start_autoplay(timers);
    }

    pub fn touch_started(&mut self, position: Point) {
        self.gesture.start(position);
    }

    pub fn touch_moved(&mut self, position: Point) {
        self.gesture.move_to(position);
    }

    pub fn touch_ended(&mut self, sync: &mut ViewSync) {
        match self.gesture.end() {
            Some(SwipeDirection::Previous) => self.previous(sync),
            Some(SwipeDirection::Next) => self.next(sync),
            None => {}
        }
    }

    pub fn on_timer<T: From<Timer>>(
        &mut self,
        timer: Timer,
        timers: &mut TimerQueue<T>,
        sync: &mut ViewSync,
    ) {
        match timer {
            Timer::Advance => {
                self.autoplay = None;
                self.next(sync);
                self.start_autoplay(timers);
            }
        }
    }
}

fn track_offset(index: usize) -> i32 {
    i32::try_from(index).map_or(i32::MIN, |index| index.saturating_mul(-100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::Timestamp;

    fn carousel(total: usize) -> (Carousel, TimerQueue<Timer>, ViewSync) {
        let mut carousel = Carousel::new(true, true, Duration::from_millis(5000), 50.0);
        let mut timers = TimerQueue::new();
        let mut sync = ViewSync::default();
        carousel.rebuild(total, &mut timers, &mut sync);
        sync.drain();
        (carousel, timers, sync)
    }

    fn run_until(
        carousel: &mut Carousel,
        timers: &mut TimerQueue<Timer>,
        sync: &mut ViewSync,
        millis: u64,
    ) {
        let until = Timestamp::from_millis(millis);
        while let Some(fired) = timers.pop_due(until) {
            carousel.on_timer(fired.task, timers, sync);
        }
        timers.advance_to(until);
    }

    #[test]
    fn go_to_then_next_wraps() {
        let (mut carousel, _, mut sync) = carousel(3);
        carousel.go_to(2, &mut sync).unwrap();
        carousel.next(&mut sync);
        assert_eq!(carousel.current(), 0);
        assert_eq!(
            sync.drain(),
            vec![
                ViewUpdate::CarouselTrack { offset_percent: -200 },
                ViewUpdate::CarouselDotActive(2),
                ViewUpdate::CarouselTrack { offset_percent: 0 },
                ViewUpdate::CarouselDotActive(0),
            ]
        );
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let (mut carousel, _, mut sync) = carousel(4);
        carousel.previous(&mut sync);
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn out_of_range_go_to_is_rejected() {
        let (mut carousel, _, mut sync) = carousel(3);
        assert!(carousel.go_to(3, &mut sync).is_err());
        assert_eq!(carousel.current(), 0);
        assert!(sync.is_empty());
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let (mut carousel, timers, mut sync) = carousel(0);
        carousel.next(&mut sync);
        carousel.previous(&mut sync);
        assert_eq!(carousel.current(), 0);
        assert!(sync.is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let (mut carousel, mut timers, mut sync) = carousel(3);
        run_until(&mut carousel, &mut timers, &mut sync, 4999);
        assert_eq!(carousel.current(), 0);
        run_until(&mut carousel, &mut timers, &mut sync, 10_000);
        assert_eq!(carousel.current(), 2);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn hover_pauses_and_resumes_on_desktop() {
        let (mut carousel, mut timers, mut sync) = carousel(3);
        carousel.pointer_entered(false, &mut timers);
        assert!(!carousel.is_autoplaying());
        assert!(timers.is_empty());

        run_until(&mut carousel, &mut timers, &mut sync, 20_000);
        assert_eq!(carousel.current(), 0);

        carousel.pointer_left(false, &mut timers);
        assert!(carousel.is_autoplaying());
    }

    #[test]
    fn hover_ignored_on_mobile() {
        let (mut carousel, mut timers, _) = carousel(3);
        carousel.pointer_entered(true, &mut timers);
        assert!(carousel.is_autoplaying());
    }

    #[test]
    fn start_autoplay_is_idempotent() {
        let (mut carousel, mut timers, _) = carousel(3);
        carousel.start_autoplay(&mut timers);
        carousel.start_autoplay(&mut timers);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn rebuild_keeps_single_timer_and_valid_index() {
        let (mut carousel, mut timers, mut sync) = carousel(5);
        carousel.go_to(4, &mut sync).unwrap();

        carousel.rebuild(5, &mut timers, &mut sync);
        assert_eq!(carousel.current(), 4);
        assert_eq!(timers.len(), 1);

        carousel.rebuild(3, &mut timers, &mut sync);
        assert_eq!(carousel.current(), 0);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn rebuild_to_zero_cancels_autoplay() {
        let (mut carousel, mut timers, mut sync) = carousel(3);
        carousel.rebuild(0, &mut timers, &mut sync);
        assert!(!carousel.is_autoplaying());
        assert!(timers.is_empty());
    }

    #[test]
    fn rebuild_while_hovered_stays_paused() {
        let (mut carousel, mut timers, mut sync) = carousel(3);
        carousel.pointer_entered(false, &mut timers);
        carousel.rebuild(3, &mut timers, &mut sync);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn swipe_navigates() {
        let (mut carousel, _, mut sync) = carousel(3);
        carousel.touch_started(Point::new(200.0, 0.0));
        carousel.touch_moved(Point::new(100.0, 0.0));
        carousel.touch_ended(&mut sync);
        assert_eq!(carousel.current(), 1);

        carousel.touch_started(Point::new(100.0, 0.0));
        carousel.touch_moved(Point::new(200.0, 0.0));
        carousel.touch_ended(&mut sync);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn update_accepts_named_directions() {
        let (mut carousel, _, mut sync) = carousel(3);
        carousel.update("next", &mut sync).unwrap();
        assert_eq!(carousel.current(), 1);
        carousel.update("prev", &mut sync).unwrap();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.update("sideways", &mut sync).is_err());
    }

    #[test]
    fn disabled_autoplay_never_schedules() {
        let mut carousel = Carousel::new(true, false, Duration::from_millis(5000), 50.0);
        let mut timers: TimerQueue<Timer> = TimerQueue::new();
        let mut sync = ViewSync::default();
        carousel.rebuild(3, &mut timers, &mut sync);
        assert!(timers.is_empty());
    }

    #[test]
    fn next_then_previous_returns_from_every_slide() {
        for total in 1..=5 {
            let (mut carousel, _, mut sync) = carousel(total);
            for index in 0..total {
                carousel.go_to(index, &mut sync).unwrap();
                carousel.next(&mut sync);
                assert_eq!(carousel.current(), (index + 1) % total);
                carousel.previous(&mut sync);
                assert_eq!(carousel.current(), index);

                carousel.previous(&mut sync);
                carousel.next(&mut sync);
                assert_eq!(carousel.current(), index);
            }
        }
    }
}
