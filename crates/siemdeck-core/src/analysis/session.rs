//! Single-in-flight analysis requests
//!
//! The dashboard asks for an analysis when an alert is selected. At most one
//! request runs at a time: a newer request cancels the older one, and any
//! result that still arrives for a superseded request is dropped by
//! generation number.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::client::AnalysisClient;
use super::types::{AnalysisError, AnalysisOutcome};
use crate::content::Alert;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Loading {
        alert_id: String,
    },
    Ready {
        alert_id: String,
        outcome: AnalysisOutcome,
    },
}

/// Alert fields the request needs, owned so the task can outlive the borrow
#[derive(Debug, Clone)]
struct Subject {
    id: String,
    title: String,
    description: String,
}

struct Completion {
    generation: u64,
    alert_id: String,
    outcome: AnalysisOutcome,
}

pub struct AnalysisSession {
    client: AnalysisClient,
    timeout: Duration,
    state: AnalysisState,
    subject: Option<Subject>,
    generation: u64,
    cancel: CancellationToken,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl AnalysisSession {
    pub fn new(client: AnalysisClient, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            timeout,
            state: AnalysisState::Idle,
            subject: None,
            generation: 0,
            cancel: CancellationToken::new(),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AnalysisState::Loading { .. })
    }

    /// Alert the current state refers to, if any
    pub fn alert_id(&self) -> Option<&str> {
        self.subject.as_ref().map(|s| s.id.as_str())
    }

    /// Request analysis of `alert`. No-op if that alert is already loading or loaded.
    pub fn request(&mut self, alert: &Alert) {
        if self.alert_id() == Some(alert.id) && self.state != AnalysisState::Idle {
            return;
        }
        self.subject = Some(Subject {
            id: alert.id.to_string(),
            title: alert.title.to_string(),
            description: alert.description.to_string(),
        });
        self.start();
    }

    /// Re-issue the request for the current alert
    pub fn retry(&mut self) {
        if self.subject.is_none() {
            return;
        }
        debug!(alert_id = ?self.alert_id(), "Retrying analysis");
        self.start();
    }

    /// Cancel any request and forget the current alert
    pub fn clear(&mut self) {
        self.supersede();
        self.subject = None;
        self.state = AnalysisState::Idle;
    }

    /// Drain finished requests. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(done) if done.generation == self.generation => {
                    info!(alert_id = %done.alert_id, success = done.outcome.is_success(), "Analysis finished");
                    self.state = AnalysisState::Ready {
                        alert_id: done.alert_id,
                        outcome: done.outcome,
                    };
                    changed = true;
                }
                Ok(stale) => {
                    debug!(
                        alert_id = %stale.alert_id,
                        generation = stale.generation,
                        "Dropping superseded analysis"
                    );
                }
                // The session holds a sender, so the channel never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Cancel the in-flight request (if any) and advance the generation
    fn supersede(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.generation += 1;
    }

    fn start(&mut self) {
        let Some(subject) = self.subject.clone() else {
            return;
        };
        self.supersede();

        // Nothing to wait for without a backend
        if !self.client.is_enabled() {
            self.state = AnalysisState::Ready {
                alert_id: subject.id,
                outcome: AnalysisOutcome::from_result(Err(AnalysisError::Unavailable)),
            };
            return;
        }

        self.state = AnalysisState::Loading {
            alert_id: subject.id.clone(),
        };

        let generation = self.generation;
        let token = self.cancel.clone();
        let client = self.client.clone();
        let timeout = self.timeout;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => Err(AnalysisError::Cancelled),
                result = tokio::time::timeout(
                    timeout,
                    client.analyze(&subject.title, &subject.description),
                ) => result.unwrap_or_else(|_| Err(AnalysisError::TimedOut(timeout.as_secs()))),
            };

            if matches!(result, Err(AnalysisError::Cancelled)) {
                debug!(alert_id = %subject.id, "Analysis cancelled");
                return;
            }

            let _ = tx.send(Completion {
                generation,
                alert_id: subject.id,
                outcome: AnalysisOutcome::from_result(result),
            });
        });
    }
}

impl Drop for AnalysisSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::client::AnalysisBackend;
    use crate::content::find_alert;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Echoes the alert title; titles containing "Exfiltration" take a while
    struct Echo {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AnalysisBackend for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if prompt.contains("Exfiltration") {
                tokio::time::sleep(Duration::from_millis(300)).await;
            }
            let title = prompt
                .lines()
                .find_map(|l| l.strip_prefix("Alert Title: "))
                .unwrap_or_default();
            Ok(format!("analysis of {}", title))
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    struct Hang;

    #[async_trait]
    impl AnalysisBackend for Hang {
        async fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }

        fn name(&self) -> &str {
            "hang"
        }
    }

    fn echo_session() -> (AnalysisSession, Arc<Echo>) {
        let backend = Arc::new(Echo {
            calls: AtomicUsize::new(0),
        });
        let session = AnalysisSession::new(
            AnalysisClient::Enabled(backend.clone()),
            Duration::from_secs(5),
        );
        (session, backend)
    }

    async fn wait_ready(session: &mut AnalysisSession) {
        for _ in 0..200 {
            if session.poll() && matches!(session.state(), AnalysisState::Ready { .. }) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("analysis never finished: {:?}", session.state());
    }

    #[tokio::test]
    async fn test_poll_on_idle_is_unchanged() {
        let (mut session, _) = echo_session();
        assert!(!session.poll());
        assert_eq!(session.state(), &AnalysisState::Idle);
    }

    #[tokio::test]
    async fn test_request_loads_then_ready() {
        let (mut session, _) = echo_session();
        let alert = find_alert("alert-001").unwrap();

        session.request(alert);
        assert!(session.is_loading());

        wait_ready(&mut session).await;
        match session.state() {
            AnalysisState::Ready { alert_id, outcome } => {
                assert_eq!(alert_id, "alert-001");
                assert_eq!(
                    outcome,
                    &AnalysisOutcome::Success("analysis of \"Spike in HTTP 5xx Errors\"".into())
                );
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_newer_request_supersedes_older() {
        let (mut session, _) = echo_session();

        session.request(find_alert("alert-004").unwrap());
        session.request(find_alert("alert-002").unwrap());
        wait_ready(&mut session).await;

        // Give the slow first request time to finish had it not been cancelled
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!session.poll());
        assert!(matches!(
            session.state(),
            AnalysisState::Ready { alert_id, .. } if alert_id == "alert-002"
        ));
    }

    #[tokio::test]
    async fn test_stale_generation_is_dropped() {
        let (mut session, _) = echo_session();
        session.request(find_alert("alert-001").unwrap());
        wait_ready(&mut session).await;

        let _ = session.tx.send(Completion {
            generation: session.generation - 1,
            alert_id: "alert-003".to_string(),
            outcome: AnalysisOutcome::Success("old".to_string()),
        });
        assert!(!session.poll());
        assert!(matches!(
            session.state(),
            AnalysisState::Ready { alert_id, .. } if alert_id == "alert-001"
        ));
    }

    #[tokio::test]
    async fn test_same_alert_is_not_requested_twice() {
        let (mut session, backend) = echo_session();
        let alert = find_alert("alert-001").unwrap();

        session.request(alert);
        session.request(alert);
        wait_ready(&mut session).await;
        session.request(alert);

        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_reinvokes_backend() {
        let (mut session, backend) = echo_session();
        session.retry();
        assert_eq!(session.state(), &AnalysisState::Idle);

        session.request(find_alert("alert-005").unwrap());
        wait_ready(&mut session).await;
        session.retry();
        assert!(session.is_loading());
        wait_ready(&mut session).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_clear_returns_to_idle() {
        let (mut session, _) = echo_session();
        session.request(find_alert("alert-004").unwrap());
        session.clear();

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!session.poll());
        assert_eq!(session.state(), &AnalysisState::Idle);
        assert_eq!(session.alert_id(), None);
    }

    #[tokio::test]
    async fn test_disabled_client_is_immediately_unavailable() {
        let mut session = AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(5));
        session.request(find_alert("alert-001").unwrap());
        assert!(matches!(
            session.state(),
            AnalysisState::Ready {
                outcome: AnalysisOutcome::Unavailable { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_hung_request_times_out() {
        let mut session = AnalysisSession::new(
            AnalysisClient::with_backend(Hang),
            Duration::from_millis(50),
        );
        session.request(find_alert("alert-001").unwrap());
        wait_ready(&mut session).await;
        assert!(matches!(
            session.state(),
            AnalysisState::Ready {
                outcome: AnalysisOutcome::Failure { .. },
                ..
            }
        ));
    }
}
