//! Event loop
//!
//! Input is polled with the configured tick rate; between events the
//! background channels are drained and the screen is redrawn only when
//! something changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use crate::tui::app::App;
use crate::tui::polling::{poll_analysis, PollResult};

impl App {
    pub async fn run(&mut self, terminal: &mut DefaultTerminal, tick_rate: Duration) -> Result<()> {
        let mut needs_redraw = true;

        while !self.should_quit {
            if needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                needs_redraw = false;
            }

            // Input polling blocks; keep the runtime's other workers free for the analysis task
            if tokio::task::block_in_place(|| event::poll(tick_rate))? {
                match event::read()? {
                    Event::Key(key) => {
                        self.handle_key(key);
                        needs_redraw = true;
                    }
                    Event::Resize(..) => needs_redraw = true,
                    _ => {}
                }
            }

            self.tick = self.tick.wrapping_add(1);
            needs_redraw |= self.poll_background().needs_redraw;
        }

        tracing::info!("Dashboard closed");
        Ok(())
    }

    /// Drain all background channels
    pub(crate) fn poll_background(&mut self) -> PollResult {
        let mut result = PollResult::new();
        result.merge(poll_analysis(&mut self.analysis));
        result.needs_redraw |= self.expire_copy_notice(Instant::now());
        result
    }
}
