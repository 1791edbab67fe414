// Carousel controller - owns the current slide index and the auto-advance timer
//
// This is the heart of the application: a small state machine over
// {current_index, total_slides, auto_advance}. Navigation wraps cyclically in
// both directions. Any manual interaction (next/previous/select) halts the
// auto-advance timer; it stays halted until explicitly restarted.
//
// The timer itself is behind the Scheduler trait so tests can drive the
// controller without real delays.

use crate::scheduler::Scheduler;
use std::fmt;
use std::time::Duration;

/// Navigation direction for cyclic stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Errors the controller can report
///
/// Both failure modes are rejected loudly: an empty deck would make the
/// cyclic index arithmetic meaningless, and an out-of-range jump would
/// desync the indicator row from the track offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// Refused to initialize: a carousel needs at least one slide
    EmptyDeck,
    /// Rejected jump target; state is left untouched
    IndexOutOfRange { index: usize, total: usize },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::EmptyDeck => write!(f, "carousel requires at least one slide"),
            CarouselError::IndexOutOfRange { index, total } => {
                write!(f, "slide index {} out of range (deck has {})", index, total)
            }
        }
    }
}

impl std::error::Error for CarouselError {}

/// Carousel state and navigation logic
///
/// Exclusively owned by the TUI's `App`; every mutation happens on the event
/// loop task, so timer ticks and key presses serialize naturally.
pub struct Carousel {
    current_index: usize,
    total_slides: usize,
    interval: Duration,
    auto_advance: bool,
    scheduler: Box<dyn Scheduler>,
}

impl Carousel {
    /// Create a controller for a deck of `total_slides` slides and start
    /// auto-advance at the given interval.
    ///
    /// Starts at slide 0 with indicator 0 active. Errors on an empty deck
    /// before any index arithmetic can happen.
    pub fn new(
        total_slides: usize,
        interval: Duration,
        scheduler: Box<dyn Scheduler>,
    ) -> Result<Self, CarouselError> {
        if total_slides == 0 {
            return Err(CarouselError::EmptyDeck);
        }

        let mut carousel = Self {
            current_index: 0,
            total_slides,
            interval,
            auto_advance: false,
            scheduler,
        };
        carousel.start_auto_advance();
        Ok(carousel)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn auto_advance_active(&self) -> bool {
        self.auto_advance
    }

    /// Horizontal offset of the sliding track, as a percentage of one
    /// viewport width. Slide 0 is at 0, slide 2 at -200, and so on.
    pub fn offset_percent(&self) -> i64 {
        -(self.current_index as i64 * 100)
    }

    /// Whether indicator `i` is the active dot. True for exactly one index:
    /// the current slide.
    pub fn is_active_indicator(&self, i: usize) -> bool {
        i == self.current_index
    }

    /// Step one slide in the given direction, wrapping cyclically.
    /// Backward from slide 0 lands on the last slide, never below zero.
    pub fn advance(&mut self, direction: Direction) {
        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1) % self.total_slides,
            Direction::Backward => {
                (self.current_index + self.total_slides - 1) % self.total_slides
            }
        };
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range targets are rejected and the current slide is unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.total_slides {
            return Err(CarouselError::IndexOutOfRange {
                index,
                total: self.total_slides,
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Manual "next" control: advance forward, then halt auto-advance.
    pub fn next(&mut self) {
        self.advance(Direction::Forward);
        self.stop_auto_advance();
    }

    /// Manual "previous" control: advance backward, then halt auto-advance.
    pub fn previous(&mut self) {
        self.advance(Direction::Backward);
        self.stop_auto_advance();
    }

    /// Manual dot press: jump to the pressed indicator, then halt
    /// auto-advance. A rejected jump still halts the timer - the user
    /// interacted either way.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        let result = self.go_to(index);
        self.stop_auto_advance();
        result
    }

    /// Begin (or restart) the recurring auto-advance timer.
    pub fn start_auto_advance(&mut self) {
        self.scheduler.start(self.interval);
        self.auto_advance = true;
    }

    /// Cancel the auto-advance timer. Idempotent.
    pub fn stop_auto_advance(&mut self) {
        self.scheduler.cancel();
        self.auto_advance = false;
    }

    /// Timer callback: advance forward, but only while auto-advance is
    /// active. A tick already queued when the timer was cancelled must not
    /// move the index.
    ///
    /// Returns whether the tick was applied.
    pub fn auto_tick(&mut self) -> bool {
        if !self.auto_advance {
            return false;
        }
        self.advance(Direction::Forward);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test scheduler that records start/cancel calls instead of spawning
    /// anything, so tests simulate time by calling auto_tick directly.
    #[derive(Clone, Default)]
    struct RecordingScheduler {
        state: Arc<Mutex<SchedulerCalls>>,
    }

    #[derive(Default)]
    struct SchedulerCalls {
        running: bool,
        starts: usize,
        cancels: usize,
    }

    impl RecordingScheduler {
        fn is_running(&self) -> bool {
            self.state.lock().unwrap().running
        }

        fn starts(&self) -> usize {
            self.state.lock().unwrap().starts
        }

        fn cancels(&self) -> usize {
            self.state.lock().unwrap().cancels
        }
    }

    impl Scheduler for RecordingScheduler {
        fn start(&mut self, _interval: Duration) {
            let mut state = self.state.lock().unwrap();
            state.running = true;
            state.starts += 1;
        }

        fn cancel(&mut self) {
            let mut state = self.state.lock().unwrap();
            state.running = false;
            state.cancels += 1;
        }

        fn is_running(&self) -> bool {
            self.state.lock().unwrap().running
        }
    }

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn carousel(total: usize) -> (Carousel, RecordingScheduler) {
        let scheduler = RecordingScheduler::default();
        let carousel = Carousel::new(total, INTERVAL, Box::new(scheduler.clone()))
            .expect("non-empty deck");
        (carousel, scheduler)
    }

    #[test]
    fn empty_deck_is_refused() {
        let scheduler = RecordingScheduler::default();
        let result = Carousel::new(0, INTERVAL, Box::new(scheduler.clone()));
        assert!(matches!(result, Err(CarouselError::EmptyDeck)));
        // The timer must never have started
        assert_eq!(scheduler.starts(), 0);
    }

    #[test]
    fn initialize_starts_at_zero_with_auto_advance() {
        let (carousel, scheduler) = carousel(3);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_active_indicator(0));
        assert!(carousel.auto_advance_active());
        assert!(scheduler.is_running());
    }

    #[test]
    fn forward_cycles_through_all_slides_and_wraps() {
        let (mut carousel, _) = carousel(4);
        let mut seen = Vec::new();
        for _ in 0..4 {
            carousel.advance(Direction::Forward);
            seen.push(carousel.current_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);
    }

    #[test]
    fn backward_from_zero_wraps_to_last() {
        let (mut carousel, _) = carousel(5);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn single_slide_always_stays_at_zero() {
        let (mut carousel, _) = carousel(1);
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.current_index(), 0);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn four_slide_scenario() {
        // 4 slides: three forward steps reach 3, one more wraps to 0,
        // one backward step wraps to 3 again.
        let (mut carousel, _) = carousel(4);
        for _ in 0..3 {
            carousel.advance(Direction::Forward);
        }
        assert_eq!(carousel.current_index(), 3);
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.current_index(), 0);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn go_to_moves_indicator_and_offset() {
        let (mut carousel, _) = carousel(3);
        carousel.go_to(2).expect("in range");
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.is_active_indicator(2));
        assert!(!carousel.is_active_indicator(0));
        assert!(!carousel.is_active_indicator(1));
        assert_eq!(carousel.offset_percent(), -200);
    }

    #[test]
    fn go_to_out_of_range_is_rejected_and_state_untouched() {
        let (mut carousel, _) = carousel(3);
        carousel.go_to(1).expect("in range");

        let err = carousel.go_to(3).unwrap_err();
        assert_eq!(err, CarouselError::IndexOutOfRange { index: 3, total: 3 });
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_active_indicator(1));
    }

    #[test]
    fn exactly_one_indicator_active_after_any_operation() {
        let (mut carousel, _) = carousel(4);
        let active_count = |c: &Carousel| {
            (0..c.total_slides())
                .filter(|&i| c.is_active_indicator(i))
                .count()
        };

        assert_eq!(active_count(&carousel), 1);
        carousel.advance(Direction::Forward);
        assert_eq!(active_count(&carousel), 1);
        carousel.advance(Direction::Backward);
        assert_eq!(active_count(&carousel), 1);
        carousel.go_to(2).expect("in range");
        assert_eq!(active_count(&carousel), 1);
        assert!(carousel.is_active_indicator(carousel.current_index()));
    }

    #[test]
    fn manual_next_stops_auto_advance() {
        let (mut carousel, scheduler) = carousel(3);
        carousel.next();
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.auto_advance_active());
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.cancels(), 1);
    }

    #[test]
    fn manual_previous_stops_auto_advance() {
        let (mut carousel, scheduler) = carousel(3);
        carousel.previous();
        assert_eq!(carousel.current_index(), 2);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn dot_press_stops_auto_advance() {
        let (mut carousel, scheduler) = carousel(3);
        carousel.select(2).expect("in range");
        assert_eq!(carousel.current_index(), 2);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn rejected_dot_press_still_stops_auto_advance() {
        let (mut carousel, scheduler) = carousel(3);
        assert!(carousel.select(9).is_err());
        assert_eq!(carousel.current_index(), 0);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn ticks_only_apply_while_auto_advance_is_active() {
        let (mut carousel, _) = carousel(3);
        assert!(carousel.auto_tick());
        assert_eq!(carousel.current_index(), 1);

        carousel.stop_auto_advance();
        // A tick that was already in flight when the timer was cancelled
        assert!(!carousel.auto_tick());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut carousel, scheduler) = carousel(3);
        carousel.stop_auto_advance();
        carousel.stop_auto_advance();
        assert!(!carousel.auto_advance_active());
        assert_eq!(scheduler.cancels(), 2);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn restart_resumes_ticking() {
        let (mut carousel, scheduler) = carousel(3);
        carousel.next();
        assert!(!carousel.auto_advance_active());

        carousel.start_auto_advance();
        assert!(carousel.auto_advance_active());
        assert!(scheduler.is_running());
        assert!(carousel.auto_tick());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn offset_tracks_current_index() {
        let (mut carousel, _) = carousel(4);
        assert_eq!(carousel.offset_percent(), 0);
        carousel.advance(Direction::Forward);
        assert_eq!(carousel.offset_percent(), -100);
        carousel.go_to(3).expect("in range");
        assert_eq!(carousel.offset_percent(), -300);
    }
}
