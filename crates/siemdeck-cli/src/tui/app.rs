//! Dashboard application state

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use siemdeck_core::analysis::AnalysisSession;
use siemdeck_core::content::{
    alerts_newest_first, code_examples, Alert, CodeExample, View, DELIVERABLES, PLAN_PHASES,
};

use super::clipboard::SnippetClipboard;
use super::themes::Theme;

/// How long copy feedback stays on screen
const COPY_NOTICE_TTL: Duration = Duration::from_secs(2);

/// Feedback for the last snippet copy
#[derive(Debug, Clone)]
pub struct CopyNotice {
    pub snippet_id: &'static str,
    /// Clipboard error, if the copy failed
    pub error: Option<String>,
    shown_at: Instant,
}

impl CopyNotice {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= COPY_NOTICE_TTL
    }
}

pub struct App {
    pub theme: Theme,
    pub view: View,
    pub should_quit: bool,

    /// Reference time for relative alert and log timestamps
    pub now: DateTime<Utc>,

    /// Alerts in display order
    pub alerts: Vec<&'static Alert>,
    /// Cursor in the alert list
    pub alert_cursor: usize,
    /// Alert whose details and insight pane are shown
    pub selected_alert: Option<&'static Alert>,
    pub show_details: bool,
    pub analysis: AnalysisSession,

    pub phase_cursor: usize,
    pub expanded_phase: Option<usize>,
    pub deliverable_cursor: usize,
    /// Selected snippet in the code views
    pub snippet_cursor: usize,
    pub copy_notice: Option<CopyNotice>,
    clipboard: SnippetClipboard,

    /// Vertical scroll of the current text view, reset on navigation
    pub scroll: u16,
    /// Event loop iterations, drives the loading spinner
    pub tick: u64,
}

impl App {
    pub fn new(start_view: View, analysis: AnalysisSession) -> Self {
        Self {
            theme: Theme::default(),
            view: start_view,
            should_quit: false,
            now: Utc::now(),
            alerts: alerts_newest_first(),
            alert_cursor: 0,
            selected_alert: None,
            show_details: false,
            analysis,
            phase_cursor: 0,
            expanded_phase: None,
            deliverable_cursor: 0,
            snippet_cursor: 0,
            copy_notice: None,
            clipboard: SnippetClipboard::default(),
            scroll: 0,
            tick: 0,
        }
    }

    /// Switch views. Leaving a view drops the alert selection and any
    /// in-flight analysis.
    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        tracing::debug!(from = ?self.view, to = ?view, "Navigate");
        self.view = view;
        self.scroll = 0;
        self.selected_alert = None;
        self.show_details = false;
        self.snippet_cursor = 0;
        self.copy_notice = None;
        self.analysis.clear();
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.view {
            View::Overview => (&mut self.phase_cursor, PLAN_PHASES.len()),
            View::Alerts => (&mut self.alert_cursor, self.alerts.len()),
            View::Deliverables => (&mut self.deliverable_cursor, DELIVERABLES.len()),
            view if view.has_snippets() => {
                // Scroll is relative to the selected snippet
                self.scroll = 0;
                (&mut self.snippet_cursor, code_examples(view).len())
            }
            _ => {
                self.scroll_by(delta);
                return;
            }
        };
        if len == 0 {
            return;
        }
        *cursor = (*cursor as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = (self.scroll as isize + delta).clamp(0, u16::MAX as isize) as u16;
    }

    /// Enter on the current view
    pub fn activate(&mut self) {
        match self.view {
            View::Overview => {
                let cursor = self.phase_cursor;
                self.expanded_phase = match self.expanded_phase {
                    Some(open) if open == cursor => None,
                    _ => Some(cursor),
                };
            }
            View::Alerts => self.select_alert(),
            View::Deliverables => {
                if let Some(item) = DELIVERABLES.get(self.deliverable_cursor) {
                    self.navigate(item.link);
                }
            }
            _ => {}
        }
    }

    /// Select the alert under the cursor. A different alert drops the
    /// previous analysis.
    pub fn select_alert(&mut self) {
        let Some(alert) = self.alerts.get(self.alert_cursor).copied() else {
            return;
        };
        if self.selected_alert.map(|a| a.id) != Some(alert.id) {
            self.analysis.clear();
            self.show_details = false;
        }
        self.selected_alert = Some(alert);
    }

    /// Request analysis for the selected alert
    pub fn analyze_selected(&mut self) {
        if let Some(alert) = self.selected_alert {
            self.analysis.request(alert);
        }
    }

    /// Retry is only meaningful once an analysis was requested
    pub fn retry_analysis(&mut self) {
        if self.selected_alert.is_some() {
            self.analysis.retry();
        }
    }

    /// Snippet under the cursor in a code view
    pub fn selected_snippet(&self) -> Option<&'static CodeExample> {
        code_examples(self.view).get(self.snippet_cursor).copied()
    }

    /// Copy the selected snippet's code to the system clipboard
    pub fn copy_selected_snippet(&mut self) {
        let Some(example) = self.selected_snippet() else {
            return;
        };
        let result = self.clipboard.copy(example.code);
        self.record_copy(example.id, result);
    }

    pub(crate) fn record_copy(&mut self, snippet_id: &'static str, result: Result<(), String>) {
        match &result {
            Ok(()) => tracing::info!(snippet = snippet_id, "Copied snippet to clipboard"),
            Err(e) => tracing::warn!(snippet = snippet_id, error = %e, "Clipboard copy failed"),
        }
        self.copy_notice = Some(CopyNotice {
            snippet_id,
            error: result.err(),
            shown_at: Instant::now(),
        });
    }

    /// Drop copy feedback that has been shown long enough. Returns true if
    /// one was removed.
    pub(crate) fn expire_copy_notice(&mut self, now: Instant) -> bool {
        if self.copy_notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.copy_notice = None;
            return true;
        }
        false
    }

    pub fn toggle_details(&mut self) {
        if self.view == View::Alerts && self.selected_alert.is_some() {
            self.show_details = !self.show_details;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siemdeck_core::analysis::{AnalysisClient, AnalysisState};
    use siemdeck_core::content::{CICD_EXAMPLES, DETECTION_RULES, IAC_EXAMPLES};

    fn app(view: View) -> App {
        App::new(
            view,
            AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(1)),
        )
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = app(View::Alerts);
        app.move_cursor(-1);
        assert_eq!(app.alert_cursor, 0);
        app.move_cursor(100);
        assert_eq!(app.alert_cursor, app.alerts.len() - 1);
    }

    #[test]
    fn test_phase_expansion_toggles() {
        let mut app = app(View::Overview);
        app.move_cursor(2);
        app.activate();
        assert_eq!(app.expanded_phase, Some(2));
        app.activate();
        assert_eq!(app.expanded_phase, None);
    }

    #[test]
    fn test_navigation_clears_selection_and_analysis() {
        let mut app = app(View::Alerts);
        app.activate();
        app.analyze_selected();
        assert!(matches!(app.analysis.state(), AnalysisState::Ready { .. }));

        app.navigate(View::Logs);
        assert!(app.selected_alert.is_none());
        assert_eq!(app.analysis.state(), &AnalysisState::Idle);
    }

    #[test]
    fn test_selecting_another_alert_drops_analysis() {
        let mut app = app(View::Alerts);
        app.activate();
        app.analyze_selected();
        app.move_cursor(1);
        app.activate();
        assert_eq!(app.analysis.state(), &AnalysisState::Idle);
        assert_eq!(app.selected_alert.map(|a| a.id), Some(app.alerts[1].id));
    }

    #[test]
    fn test_deliverable_navigates_to_linked_view() {
        let mut app = app(View::Deliverables);
        app.move_cursor(3);
        app.activate();
        assert_eq!(app.view, View::Runbook);
    }

    #[test]
    fn test_snippet_cursor_picks_copy_target() {
        let mut app = app(View::Artifacts);
        assert_eq!(app.selected_snippet().map(|c| c.id), Some(IAC_EXAMPLES[0].id));

        app.scroll_by(5);
        app.move_cursor(IAC_EXAMPLES.len() as isize);
        assert_eq!(app.selected_snippet().map(|c| c.id), Some(CICD_EXAMPLES[0].id));
        assert_eq!(app.scroll, 0);

        app.move_cursor(100);
        assert_eq!(app.snippet_cursor, code_examples(View::Artifacts).len() - 1);

        app.navigate(View::Rules);
        assert_eq!(app.snippet_cursor, 0);
        assert_eq!(app.selected_snippet().map(|c| c.id), Some(DETECTION_RULES[0].id));
    }

    #[test]
    fn test_no_snippet_outside_code_views() {
        let mut app = app(View::Logs);
        assert!(app.selected_snippet().is_none());
        app.copy_selected_snippet();
        assert!(app.copy_notice.is_none());
    }

    #[test]
    fn test_copy_notice_expires() {
        let mut app = app(View::Rules);
        app.record_copy("kql-5xx", Ok(()));
        let notice = app.copy_notice.clone().unwrap();
        assert_eq!(notice.snippet_id, "kql-5xx");
        assert!(notice.error.is_none());

        assert!(!app.expire_copy_notice(notice.shown_at));
        assert!(app.copy_notice.is_some());
        assert!(app.expire_copy_notice(notice.shown_at + COPY_NOTICE_TTL));
        assert!(app.copy_notice.is_none());
    }

    #[test]
    fn test_failed_copy_keeps_error() {
        let mut app = app(View::Playbooks);
        app.record_copy("python-elk-handler", Err("no display".to_string()));
        assert_eq!(
            app.copy_notice.and_then(|n| n.error),
            Some("no display".to_string())
        );
    }

    #[test]
    fn test_text_views_scroll_instead_of_moving_cursor() {
        let mut app = app(View::Runbook);
        app.move_cursor(3);
        app.move_cursor(-1);
        assert_eq!(app.scroll, 2);
        app.move_cursor(-10);
        assert_eq!(app.scroll, 0);
    }
}
