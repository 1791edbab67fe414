/// Responsive breakpoints for layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered
/// in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 50 cols: drop hints, minimal padding
    Compact,
    /// 50-89 cols: standard layout
    Normal,
    /// 90+ cols: generous quote margins, full status bar
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=49 => Breakpoint::Compact,
            50..=89 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(20), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(49), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(50), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(89), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(90), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        assert!(Breakpoint::Wide.at_least(Breakpoint::Compact));
        assert!(Breakpoint::Normal.at_least(Breakpoint::Normal));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }
}
