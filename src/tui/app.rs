// TUI application state
//
// Owns the carousel controller, the loaded deck, and everything the renderer
// needs. All mutation happens on the event loop task.

use crate::carousel::{Carousel, CarouselError};
use crate::deck::Deck;
use crate::events::SessionStats;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use std::time::Instant;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The carousel itself
    #[default]
    Deck,
    /// Keybindings and usage
    Help,
    /// Captured system logs
    Logs,
}

impl View {
    /// Get the next view in the cycle ('v' key)
    pub fn next(self) -> Self {
        match self {
            View::Deck => View::Help,
            View::Help => View::Logs,
            View::Logs => View::Deck,
        }
    }

    /// Get display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Deck => "Deck",
            View::Help => "Help",
            View::Logs => "Logs",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// The loaded slide deck (read-only after startup)
    pub deck: Deck,

    /// Carousel controller: index, wrap arithmetic, auto-advance timer
    pub carousel: Carousel,

    /// Interaction counters for the status bar
    pub stats: SessionStats,

    /// Current color theme
    pub theme: Theme,

    /// Current view being displayed
    pub view: View,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Log buffer for the Logs view
    pub log_buffer: LogBuffer,
}

impl App {
    pub fn new(deck: Deck, carousel: Carousel, theme: Theme, log_buffer: LogBuffer) -> Self {
        Self {
            deck,
            carousel,
            stats: SessionStats::default(),
            theme,
            view: View::default(),
            should_quit: false,
            start_time: Instant::now(),
            log_buffer,
        }
    }

    /// Next-button press: step forward and halt auto-advance
    pub fn next_slide(&mut self) {
        self.carousel.next();
        self.stats.manual_next += 1;
        tracing::debug!(
            "Manual next -> slide {}/{}",
            self.carousel.current_index() + 1,
            self.carousel.total_slides()
        );
    }

    /// Previous-button press: step backward and halt auto-advance
    pub fn previous_slide(&mut self) {
        self.carousel.previous();
        self.stats.manual_prev += 1;
        tracing::debug!(
            "Manual previous -> slide {}/{}",
            self.carousel.current_index() + 1,
            self.carousel.total_slides()
        );
    }

    /// Indicator-dot press: jump straight to a slide and halt auto-advance.
    /// Out-of-range targets are rejected by the controller and logged.
    pub fn press_dot(&mut self, index: usize) {
        match self.carousel.select(index) {
            Ok(()) => {
                self.stats.dot_jumps += 1;
                tracing::debug!("Dot press -> slide {}", index + 1);
            }
            Err(CarouselError::IndexOutOfRange { index, total }) => {
                self.stats.rejected_jumps += 1;
                tracing::warn!("Ignoring jump to slide {}: deck has {}", index + 1, total);
            }
            Err(e) => tracing::error!("Dot press failed: {}", e),
        }
    }

    /// Restart auto-advance after a manual interaction stopped it
    pub fn resume_auto_advance(&mut self) {
        self.carousel.start_auto_advance();
        tracing::info!(
            "Auto-advance resumed ({}ms interval)",
            self.carousel.interval().as_millis()
        );
    }

    /// Timer tick from the scheduler task. Ticks that raced a cancellation
    /// are dropped by the controller and not counted.
    pub fn on_auto_tick(&mut self) {
        if self.carousel.auto_tick() {
            self.stats.auto_ticks += 1;
        } else {
            tracing::trace!("Dropped stale auto-advance tick");
        }
    }

    /// Cycle to the next theme ('t' key)
    pub fn cycle_theme(&mut self) {
        self.theme = Theme::by_name(self.theme.next_name());
        tracing::debug!("Theme -> {}", self.theme.name);
    }

    /// Toggle between the deck and an auxiliary view; pressing the same
    /// view key again returns to the deck.
    pub fn toggle_view(&mut self, view: View) {
        self.view = if self.view == view { View::Deck } else { view };
    }

    /// Cycle to the next view ('v' key)
    pub fn cycle_view(&mut self) {
        self.view = self.view.next();
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Scheduler;
    use std::time::Duration;

    struct NullScheduler {
        running: bool,
    }

    impl Scheduler for NullScheduler {
        fn start(&mut self, _interval: Duration) {
            self.running = true;
        }
        fn cancel(&mut self) {
            self.running = false;
        }
        fn is_running(&self) -> bool {
            self.running
        }
    }

    fn app() -> App {
        let deck = Deck::sample();
        let carousel = Carousel::new(
            deck.len(),
            Duration::from_millis(5000),
            Box::new(NullScheduler { running: false }),
        )
        .unwrap();
        App::new(deck, carousel, Theme::default(), LogBuffer::new())
    }

    #[test]
    fn manual_navigation_updates_stats_and_stops_timer() {
        let mut app = app();
        app.next_slide();
        app.previous_slide();
        assert_eq!(app.stats.manual_next, 1);
        assert_eq!(app.stats.manual_prev, 1);
        assert!(!app.carousel.auto_advance_active());
    }

    #[test]
    fn rejected_dot_press_is_counted_not_applied() {
        let mut app = app();
        app.press_dot(99);
        assert_eq!(app.stats.rejected_jumps, 1);
        assert_eq!(app.stats.dot_jumps, 0);
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn auto_ticks_stop_counting_after_interaction() {
        let mut app = app();
        app.on_auto_tick();
        assert_eq!(app.stats.auto_ticks, 1);
        assert_eq!(app.carousel.current_index(), 1);

        app.next_slide();
        let index = app.carousel.current_index();
        app.on_auto_tick();
        // Stale tick: no movement, no count
        assert_eq!(app.stats.auto_ticks, 1);
        assert_eq!(app.carousel.current_index(), index);

        app.resume_auto_advance();
        app.on_auto_tick();
        assert_eq!(app.stats.auto_ticks, 2);
    }

    #[test]
    fn toggling_the_active_view_returns_to_deck() {
        let mut app = app();
        app.toggle_view(View::Help);
        assert_eq!(app.view, View::Help);
        app.toggle_view(View::Logs);
        assert_eq!(app.view, View::Logs);
        app.toggle_view(View::Logs);
        assert_eq!(app.view, View::Deck);
    }
}
