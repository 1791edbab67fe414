// UI rendering logic
//
// Layout and view dispatch. ratatui redraws the whole frame every tick, so
// everything here is a pure function of &App.

use super::app::{App, View};
use super::components::{dots, slide_panel, status_bar, title_bar};
use crate::logging::LogLevel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Four vertical sections:
    // - Title bar (2 lines: text + rule)
    // - Main content (fills remaining space)
    // - Indicator dots (1 line)
    // - Status bar (2 lines: rule + text)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    match app.view {
        View::Deck => slide_panel::render(f, chunks[1], app),
        View::Help => render_help_view(f, chunks[1], app),
        View::Logs => render_logs_view(f, chunks[1], app),
    }

    dots::render(f, chunks[2], app);
    status_bar::render(f, chunks[3], app);
}

/// Render the Help view - keybindings
fn render_help_view(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("  {:<12}", k),
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(what, Style::default().fg(app.theme.quote)),
        ])
    };

    let lines = vec![
        Line::default(),
        key("\u{2192} / n / Space", "next slide (stops auto-advance)"),
        key("\u{2190} / p", "previous slide (stops auto-advance)"),
        key("1-9", "jump to that dot (stops auto-advance)"),
        key("", "slides past the ninth are arrow-only"),
        key("a", "resume auto-advance"),
        key("t", "cycle theme"),
        key("v", "cycle view (deck / help / logs)"),
        key("l", "toggle logs view"),
        key("?", "toggle this help"),
        key("Esc", "back to the deck"),
        key("q", "quit"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Help "),
    );
    f.render_widget(help, area);
}

/// Render the Logs view - captured tracing output, most recent at the bottom
fn render_logs_view(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.log_buffer.get_all();
    let visible = area.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => app.theme.log_error,
                LogLevel::Warn => app.theme.log_warn,
                LogLevel::Info => app.theme.log_info,
                LogLevel::Debug | LogLevel::Trace => app.theme.log_debug,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(app.theme.role),
                ),
                Span::styled(format!("{:<5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(entry.message.clone(), Style::default().fg(app.theme.quote)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Logs "),
    );
    f.render_widget(list, area);
}
