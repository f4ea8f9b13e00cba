//! Channel polling
//!
//! Background task results are drained once per tick; each poller reports
//! whether the screen needs a redraw.

mod analysis;

pub use analysis::poll_analysis;

/// Result of a polling operation that may trigger UI updates
#[derive(Debug, Default)]
pub struct PollResult {
    /// Whether any data was received that requires a redraw
    pub needs_redraw: bool,
}

impl PollResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: PollResult) {
        self.needs_redraw |= other.needs_redraw;
    }
}
