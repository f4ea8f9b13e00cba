//! Terminal dashboard

mod app;
mod clipboard;
mod components;
mod handlers;
mod markdown;
mod polling;
mod themes;
mod utils;
mod views;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use siemdeck_core::{AnalysisClient, AnalysisSession, Config};

use app::App;

/// Runs a restore step when dropped, including on early `?` returns and
/// while unwinding from a panic
struct RestoreOnDrop<F: FnMut() -> io::Result<()>>(F);

impl<F: FnMut() -> io::Result<()>> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.0)() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Run the interactive dashboard until the user quits
pub async fn run(config: &Config, client: AnalysisClient) -> Result<()> {
    let session = AnalysisSession::new(client, Duration::from_secs(config.ai.timeout_secs));
    let mut app = App::new(config.ui.start_view, session);

    enable_raw_mode()?;
    let _restore = RestoreOnDrop(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    app.run(&mut terminal, Duration::from_millis(config.ui.tick_rate_ms.max(10)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup(restored: &Cell<u32>, fail_at_step: bool) -> io::Result<()> {
        let _restore = RestoreOnDrop(|| {
            restored.set(restored.get() + 1);
            Ok(())
        });
        if fail_at_step {
            return Err(io::Error::other("alternate screen unavailable"));
        }
        Ok(())
    }

    #[test]
    fn test_restore_runs_on_early_error() {
        let restored = Cell::new(0);
        assert!(setup(&restored, true).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_on_normal_exit() {
        let restored = Cell::new(0);
        assert!(setup(&restored, false).is_ok());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_failed_restore_does_not_panic() {
        drop(RestoreOnDrop(|| Err(io::Error::other("not a tty"))));
    }
}
