// Title bar component
//
// Deck title on the left, slide counter on the right.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let counter = format!(
        "slide {}/{}",
        app.carousel.current_index() + 1,
        app.carousel.total_slides()
    );

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", app.deck.title),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("\u{2502} {}", counter),
            Style::default().fg(app.theme.border),
        ),
    ]);

    let bar = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(bar, area);
}
