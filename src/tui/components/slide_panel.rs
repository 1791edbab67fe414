// Slide panel component
//
// Renders the sliding track. The track is the full strip of slides laid out
// side by side, one viewport each; the controller's offset (a multiple of
// -100%) selects which viewport-sized window is visible. In a terminal there
// is no partial scroll position, so the window always lands exactly on one
// slide.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the visible window of the slide track
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let offset = app.carousel.offset_percent();
    // offset is -(index * 100); recover the slide the window has landed on
    let visible = (-offset / 100) as usize;

    let Some(slide) = app.deck.slides.get(visible) else {
        // Controller invariant guarantees the index is in range; render
        // nothing rather than panic if it ever breaks
        tracing::error!("Track offset {}% has no slide under it", offset);
        return;
    };

    let bp = Breakpoint::from_width(area.width);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Generous side margins on wide terminals keep quote lines readable
    let margin = match bp {
        Breakpoint::Wide => inner.width / 6,
        Breakpoint::Normal => 2,
        Breakpoint::Compact => 1,
    };
    let text_area = Rect {
        x: inner.x + margin,
        y: inner.y,
        width: inner.width.saturating_sub(margin * 2),
        height: inner.height,
    };

    let quote = format!("\u{201c}{}\u{201d}", slide.quote);
    let attribution = format!("\u{2014} {}", slide.author);

    let mut lines: Vec<Line> = Vec::new();

    // Vertically center: estimate how many rows the wrapped quote takes
    let quote_rows = wrapped_rows(&quote, text_area.width);
    let body_rows = quote_rows + 2 + if slide.role.is_some() { 2 } else { 1 };
    let top_pad = (text_area.height as usize).saturating_sub(body_rows) / 2;
    for _ in 0..top_pad {
        lines.push(Line::default());
    }

    lines.push(Line::styled(
        quote,
        Style::default()
            .fg(app.theme.quote)
            .add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::default());
    lines.push(Line::styled(
        attribution,
        Style::default()
            .fg(app.theme.author)
            .add_modifier(Modifier::BOLD),
    ));
    if let Some(role) = &slide.role {
        lines.push(Line::from(Span::styled(
            role.clone(),
            Style::default().fg(app.theme.role),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, text_area);
}

/// Rows a string occupies when wrapped to `width` columns, by display width
/// (emojis and CJK count double)
fn wrapped_rows(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    let cells = text.width();
    cells.div_ceil(width as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_rows_rounds_up() {
        assert_eq!(wrapped_rows("abcd", 10), 1);
        assert_eq!(wrapped_rows("abcdefghij", 10), 1);
        assert_eq!(wrapped_rows("abcdefghijk", 10), 2);
    }

    #[test]
    fn wrapped_rows_uses_display_width() {
        // CJK characters occupy two cells each
        assert_eq!(wrapped_rows("你好你好你好", 6), 2);
        assert_eq!(wrapped_rows("", 10), 1);
    }
}
