//! Content table types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::icons::Icon;

/// Dashboard views, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Overview,
    Dashboard,
    Alerts,
    Logs,
    Rules,
    Playbooks,
    Artifacts,
    Runbook,
    Deliverables,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Overview,
        View::Dashboard,
        View::Alerts,
        View::Logs,
        View::Rules,
        View::Playbooks,
        View::Artifacts,
        View::Runbook,
        View::Deliverables,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "Project Phases",
            View::Dashboard => "SIEM Dashboard",
            View::Alerts => "Alerts",
            View::Logs => "Log Viewer",
            View::Rules => "Detection Rules",
            View::Playbooks => "Response Playbooks",
            View::Artifacts => "Code Artifacts",
            View::Runbook => "Runbook",
            View::Deliverables => "Deliverables",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            View::Overview => Icon::Home,
            View::Dashboard => Icon::ChartPie,
            View::Alerts => Icon::Alert,
            View::Logs => Icon::List,
            View::Rules => Icon::Eye,
            View::Playbooks => Icon::Play,
            View::Artifacts => Icon::FileCode,
            View::Runbook => Icon::BookOpen,
            View::Deliverables => Icon::ClipboardCheck,
        }
    }

    /// Views that list copyable code snippets
    pub fn has_snippets(self) -> bool {
        matches!(self, View::Rules | View::Playbooks | View::Artifacts)
    }

    /// Position in [`View::ALL`]
    pub fn index(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// View at `index`, if any (used for the number-key shortcuts)
    pub fn from_index(index: usize) -> Option<View> {
        View::ALL.get(index).copied()
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Completed,
    InProgress,
    Pending,
    Conceptual,
}

impl PhaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            PhaseStatus::Completed => "Completed",
            PhaseStatus::InProgress => "In Progress",
            PhaseStatus::Pending => "Pending",
            PhaseStatus::Conceptual => "Conceptual",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            PhaseStatus::Completed => Icon::CheckCircle,
            PhaseStatus::InProgress => Icon::Clock,
            PhaseStatus::Pending => Icon::Exclamation,
            PhaseStatus::Conceptual => Icon::AcademicCap,
        }
    }
}

/// One phase of the project plan
#[derive(Debug, Clone)]
pub struct PlanPhase {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub key_actions: &'static [&'static str],
    pub status: PhaseStatus,
    pub deliverables: &'static [&'static str],
    pub details: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Severity::Critical | Severity::High => Icon::Warning,
            Severity::Medium | Severity::Low => Icon::Info,
        }
    }
}

/// A mock security alert
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    /// Age relative to "now" when displayed
    pub minutes_ago: i64,
    pub source: &'static str,
    pub rule_id: Option<&'static str>,
    pub details: &'static [(&'static str, &'static str)],
}

impl Alert {
    pub fn timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::minutes(self.minutes_ago)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            LogLevel::Debug => Icon::Bug,
            LogLevel::Info => Icon::Info,
            LogLevel::Warn => Icon::Warning,
            LogLevel::Error => Icon::ErrorCircle,
        }
    }
}

/// A mock log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: &'static str,
    pub seconds_ago: i64,
    pub level: LogLevel,
    pub message: &'static str,
    pub source: Option<&'static str>,
}

impl LogEntry {
    pub fn timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(self.seconds_ago)
    }
}

/// A code snippet shown verbatim, with a description that goes through the formatter
#[derive(Debug, Clone)]
pub struct CodeExample {
    pub id: &'static str,
    pub title: &'static str,
    pub language: &'static str,
    pub description: Option<&'static str>,
    pub code: &'static str,
}

/// A runbook section; `content` is formatter input
#[derive(Debug, Clone)]
pub struct RunbookSection {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

/// A checklist entry that links to the view showcasing it
#[derive(Debug, Clone)]
pub struct DeliverableItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reference: &'static str,
    pub link: View,
    pub link_text: &'static str,
}

/// Point on the error-rate trend chart
#[derive(Debug, Clone, Copy)]
pub struct ErrorRatePoint {
    pub time: &'static str,
    pub errors: u64,
    pub critical: u64,
}

/// Daily access counts
#[derive(Debug, Clone, Copy)]
pub struct AccessPoint {
    pub day: &'static str,
    pub logins: u64,
    pub elevations: u64,
    pub failed_logins: u64,
}

/// Per-service transfer volume in GB
#[derive(Debug, Clone, Copy)]
pub struct TransferPoint {
    pub service: &'static str,
    pub egress_gb: u64,
    pub ingress_gb: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_navigation_cycles() {
        assert_eq!(View::Overview.next(), View::Dashboard);
        assert_eq!(View::Deliverables.next(), View::Overview);
        assert_eq!(View::Overview.prev(), View::Deliverables);
        for view in View::ALL {
            assert_eq!(view.next().prev(), view);
            assert_eq!(View::from_index(view.index()), Some(view));
        }
        assert_eq!(View::from_index(9), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_alert_timestamp_is_relative() {
        let now = Utc::now();
        let alert = Alert {
            id: "a",
            title: "t",
            severity: Severity::Low,
            description: "d",
            minutes_ago: 90,
            source: "s",
            rule_id: None,
            details: &[],
        };
        assert_eq!(now - alert.timestamp(now), Duration::minutes(90));
    }
}
