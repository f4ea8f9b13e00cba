//! Static dashboard content
//!
//! Everything the views display is compiled in. Nothing here is mutated at
//! runtime; alert and log timestamps are computed relative to "now" on render.

mod alerts;
mod artifacts;
mod deliverables;
mod metrics;
mod phases;
mod runbook;
mod types;

pub use alerts::{MOCK_ALERTS, MOCK_LOGS};
pub use artifacts::{CICD_EXAMPLES, DETECTION_RULES, IAC_EXAMPLES, PLAYBOOK_EXAMPLES};
pub use deliverables::DELIVERABLES;
pub use metrics::{series_max, ACCESS_ACTIVITY, DASHBOARD_NOTES, DATA_TRANSFER, ERROR_RATE};
pub use phases::PLAN_PHASES;
pub use runbook::RUNBOOK_SECTIONS;
pub use types::{
    AccessPoint, Alert, CodeExample, DeliverableItem, ErrorRatePoint, LogEntry, LogLevel,
    PhaseStatus, PlanPhase, RunbookSection, Severity, TransferPoint, View,
};

/// Look up a mock alert by id
pub fn find_alert(id: &str) -> Option<&'static Alert> {
    MOCK_ALERTS.iter().find(|a| a.id == id)
}

/// Alerts ordered newest first, the order the alert list displays them in
pub fn alerts_newest_first() -> Vec<&'static Alert> {
    let mut alerts: Vec<&'static Alert> = MOCK_ALERTS.iter().collect();
    alerts.sort_by_key(|a| a.minutes_ago);
    alerts
}

/// Snippet groups shown by a code view, in display order
pub fn snippet_groups(view: View) -> Vec<&'static [CodeExample]> {
    match view {
        View::Rules => vec![DETECTION_RULES],
        View::Playbooks => vec![PLAYBOOK_EXAMPLES],
        View::Artifacts => vec![IAC_EXAMPLES, CICD_EXAMPLES],
        _ => Vec::new(),
    }
}

/// All snippets of a code view, flattened in display order
pub fn code_examples(view: View) -> Vec<&'static CodeExample> {
    snippet_groups(view).into_iter().flatten().collect()
}
