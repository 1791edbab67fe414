// Control events and session statistics
//
// Background tasks never touch carousel state directly; they send control
// events over an mpsc channel and the event loop applies them. Using an enum
// keeps the channel type-safe and leaves room for more event sources.

/// Events delivered to the TUI event loop from background tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The auto-advance timer fired
    AutoTick,
}

/// Interaction counters for the status bar
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    /// Auto-advance ticks that actually moved the carousel
    pub auto_ticks: usize,
    /// Manual "next" presses
    pub manual_next: usize,
    /// Manual "previous" presses
    pub manual_prev: usize,
    /// Direct jumps via indicator dots
    pub dot_jumps: usize,
    /// Dot jumps rejected for being out of range
    pub rejected_jumps: usize,
}

impl SessionStats {
    /// Total manual interactions (the ones that halt auto-advance)
    pub fn total_interactions(&self) -> usize {
        self.manual_next + self.manual_prev + self.dot_jumps + self.rejected_jumps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactions_count_rejections_too() {
        let stats = SessionStats {
            auto_ticks: 10,
            manual_next: 2,
            manual_prev: 1,
            dot_jumps: 3,
            rejected_jumps: 1,
        };
        // Auto ticks are not interactions
        assert_eq!(stats.total_interactions(), 7);
    }
}
