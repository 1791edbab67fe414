// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: init/cleanup of the alternate screen,
// the event loop, and key dispatch. The loop multiplexes three sources with
// tokio::select! - keyboard input, a redraw tick, and control events from
// the auto-advance scheduler - so every state change runs on this one task.

pub mod app;
pub mod components;
pub mod layout;
pub mod ui;

use crate::events::ControlEvent;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal when
/// done - including on error, so a failure never leaves the shell in raw mode.
pub async fn run_tui(app: &mut App, control_rx: &mut mpsc::Receiver<ControlEvent>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, app, control_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles three kinds of events:
/// 1. Keyboard input (manual carousel controls)
/// 2. Redraw ticks (keeps uptime and dots fresh)
/// 3. Scheduler control events (auto-advance)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    control_rx: &mut mpsc::Receiver<ControlEvent>,
) -> Result<()> {
    let mut redraw = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic redraw
            _ = redraw.tick() => {}

            // Auto-advance timer
            Some(control) = control_rx.recv() => {
                match control {
                    ControlEvent::AutoTick => app.on_auto_tick(),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input - the carousel's manual controls
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Only act on presses; repeats and releases would double-fire navigation
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,

        // Next trigger
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => app.next_slide(),

        // Previous trigger
        KeyCode::Left | KeyCode::Char('p') => app.previous_slide(),

        // Indicator dots: '1' addresses slide 0
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.press_dot(index);
        }

        KeyCode::Char('a') => app.resume_auto_advance(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('v') => app.cycle_view(),
        KeyCode::Char('l') => app.toggle_view(View::Logs),
        KeyCode::Char('?') => app.toggle_view(View::Help),
        KeyCode::Esc => app.view = View::Deck,

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;
    use crate::deck::Deck;
    use crate::logging::LogBuffer;
    use crate::scheduler::Scheduler;
    use crate::theme::Theme;

    struct NullScheduler(bool);

    impl Scheduler for NullScheduler {
        fn start(&mut self, _interval: Duration) {
            self.0 = true;
        }
        fn cancel(&mut self) {
            self.0 = false;
        }
        fn is_running(&self) -> bool {
            self.0
        }
    }

    fn app() -> App {
        let deck = Deck::sample();
        let carousel = Carousel::new(
            deck.len(),
            Duration::from_millis(5000),
            Box::new(NullScheduler(false)),
        )
        .unwrap();
        App::new(deck, carousel, Theme::default(), LogBuffer::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::from(code));
    }

    #[test]
    fn arrow_keys_navigate_and_stop_auto_advance() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.carousel.current_index(), 1);
        assert!(!app.carousel.auto_advance_active());

        press(&mut app, KeyCode::Left);
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn digit_keys_map_to_zero_based_dots() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.carousel.current_index(), 2);
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.carousel.current_index(), 0);
        assert_eq!(app.stats.rejected_jumps, 1);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn v_cycles_deck_help_logs_and_back() {
        let mut app = app();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view, View::Help);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view, View::Logs);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view, View::Deck);
    }

    #[test]
    fn a_resumes_auto_advance() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert!(!app.carousel.auto_advance_active());
        press(&mut app, KeyCode::Char('a'));
        assert!(app.carousel.auto_advance_active());
    }
}
