// Theme support for the TUI
//
// Small fixed set of palettes, selectable from the config file and cycled
// with 't' at runtime. Named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Slide panel
    pub quote: Color,
    pub author: Color,
    pub role: Color,

    // Indicator dots
    pub dot_active: Color,
    pub dot_inactive: Color,

    // Chrome
    pub title: Color,
    pub border: Color,
    pub status_bar: Color,
    pub highlight: Color,
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Theme {
    /// Load theme by name; unknown names fall back to midnight
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "paper" => Self::paper(),
            "ember" => Self::ember(),
            _ => Self::midnight(),
        }
    }

    /// Name of the next theme in the cycle ('t' key)
    pub fn next_name(&self) -> &'static str {
        match self.name.as_str() {
            "midnight" => "paper",
            "paper" => "ember",
            _ => "midnight",
        }
    }

    /// Midnight - cool blues on the terminal's own background
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            quote: Color::Rgb(0xdc, 0xe4, 0xf5),
            author: Color::Rgb(0x8b, 0xe9, 0xfd),
            role: Color::Rgb(0x62, 0x72, 0xa4),
            dot_active: Color::Rgb(0x8b, 0xe9, 0xfd),
            dot_inactive: Color::Rgb(0x44, 0x47, 0x5a),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),
            border: Color::Rgb(0x62, 0x72, 0xa4),
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),
            log_error: Color::Rgb(0xff, 0x55, 0x55),
            log_warn: Color::Rgb(0xf1, 0xfa, 0x8c),
            log_info: Color::Rgb(0x50, 0xfa, 0x7b),
            log_debug: Color::Rgb(0x62, 0x72, 0xa4),
        }
    }

    /// Paper - plain ANSI colors, inherits the terminal palette
    pub fn paper() -> Self {
        Self {
            name: "paper".to_string(),
            quote: Color::White,
            author: Color::Cyan,
            role: Color::Gray,
            dot_active: Color::Cyan,
            dot_inactive: Color::DarkGray,
            title: Color::Cyan,
            border: Color::White,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::DarkGray,
        }
    }

    /// Ember - warm oranges, gruvbox-ish
    pub fn ember() -> Self {
        Self {
            name: "ember".to_string(),
            quote: Color::Rgb(0xeb, 0xdb, 0xb2),
            author: Color::Rgb(0xfe, 0x80, 0x19),
            role: Color::Rgb(0xa8, 0x99, 0x84),
            dot_active: Color::Rgb(0xfe, 0x80, 0x19),
            dot_inactive: Color::Rgb(0x50, 0x49, 0x45),
            title: Color::Rgb(0xfa, 0xbd, 0x2f),
            border: Color::Rgb(0xa8, 0x99, 0x84),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            log_error: Color::Rgb(0xfb, 0x49, 0x34),
            log_warn: Color::Rgb(0xfa, 0xbd, 0x2f),
            log_info: Color::Rgb(0xb8, 0xbb, 0x26),
            log_debug: Color::Rgb(0xa8, 0x99, 0x84),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_midnight() {
        assert_eq!(Theme::by_name("does-not-exist").name, "midnight");
    }

    #[test]
    fn theme_cycle_visits_every_theme() {
        let start = Theme::midnight();
        let second = Theme::by_name(start.next_name());
        let third = Theme::by_name(second.next_name());
        let back = Theme::by_name(third.next_name());

        assert_eq!(second.name, "paper");
        assert_eq!(third.name, "ember");
        assert_eq!(back.name, "midnight");
    }
}
