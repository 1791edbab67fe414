// Status bar component
//
// Uptime, auto-advance state, interaction counters, key hints. Adapts to
// terminal width: hints disappear first, then counters.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let auto = if app.carousel.auto_advance_active() {
        format!(
            "\u{25b6} auto {:.1}s",
            app.carousel.interval().as_secs_f64()
        )
    } else {
        "\u{23f8} stopped (a to resume)".to_string()
    };

    let mut status = format!(" {} \u{2502} {}", app.uptime(), auto);

    if bp.at_least(Breakpoint::Normal) {
        status.push_str(&format!(
            " \u{2502} {} manual / {} auto",
            app.stats.total_interactions(),
            app.stats.auto_ticks
        ));
    }

    if bp.at_least(Breakpoint::Wide) {
        status.push_str(&format!(
            " \u{2502} [{}] \u{2190}\u{2192}:navigate 1-9:jump a:auto t:theme v:view ?:help q:quit",
            app.view.name()
        ));
    }

    let bar = Paragraph::new(status)
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(bar, area);
}
