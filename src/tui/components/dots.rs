// Indicator dots component
//
// One dot per slide, in slide order; exactly one is active and it always
// matches the carousel's current index. Dots 1-9 are addressable from the
// keyboard, so those get their number as a hint on wide terminals.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ACTIVE_DOT: &str = "\u{25cf}"; // ●
const INACTIVE_DOT: &str = "\u{25cb}"; // ○

/// Render the indicator row
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let show_numbers = bp.at_least(Breakpoint::Wide);

    let mut spans = Vec::with_capacity(app.carousel.total_slides() * 2);
    for i in 0..app.carousel.total_slides() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        let (glyph, style) = if app.carousel.is_active_indicator(i) {
            (
                ACTIVE_DOT,
                Style::default()
                    .fg(app.theme.dot_active)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (INACTIVE_DOT, Style::default().fg(app.theme.dot_inactive))
        };

        if show_numbers && i < 9 {
            spans.push(Span::styled(format!("{}{}", glyph, i + 1), style));
        } else {
            spans.push(Span::styled(glyph, style));
        }
    }

    let row = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(row, area);
}
