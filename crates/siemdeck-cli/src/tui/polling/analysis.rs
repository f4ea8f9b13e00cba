//! Analysis result polling

use siemdeck_core::analysis::{AnalysisSession, AnalysisState};

use super::PollResult;

/// Poll the analysis session. While a request is loading the spinner needs
/// a redraw every tick.
pub fn poll_analysis(session: &mut AnalysisSession) -> PollResult {
    let mut result = PollResult::new();
    if session.poll() {
        if let AnalysisState::Ready { alert_id, outcome } = session.state() {
            tracing::debug!(%alert_id, success = outcome.is_success(), "Analysis ready for display");
        }
        result.needs_redraw = true;
    }
    result.needs_redraw |= session.is_loading();
    result
}
