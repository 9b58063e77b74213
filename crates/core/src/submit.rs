//! Marketplace submission.
//!
//! [`SubmitCollaborator`] is the external service that accepts an assembled
//! payload: one call, one outcome, no retries. [`SimulatedSubmitter`] stands
//! in for it with a fixed delay. [`SubmitGate`] keeps at most one attempt in
//! flight per wizard.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;
use crate::wizard::payload::MarketplacePayload;
use crate::wizard::review::marketplace_domain;

/// Acknowledgement returned by the collaborator on acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub marketplace_name: String,
    pub domain: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission timed out after {elapsed_ms}ms")]
    TimedOut { elapsed_ms: u64 },
}

#[async_trait]
pub trait SubmitCollaborator: Send + Sync {
    async fn submit(&self, payload: &MarketplacePayload) -> Result<SubmissionReceipt, SubmitError>;
}

/// Accepts every payload after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmitCollaborator for SimulatedSubmitter {
    async fn submit(&self, payload: &MarketplacePayload) -> Result<SubmissionReceipt, SubmitError> {
        tokio::time::sleep(self.delay).await;

        let business = &payload.business_details;
        Ok(SubmissionReceipt {
            id: Uuid::new_v4(),
            marketplace_name: business.name.clone(),
            domain: marketplace_domain(&business.name, &payload.marketplace_config.custom_domain),
            submitted_at: Utc::now(),
        })
    }
}

/// Call `collaborator`, giving up after `timeout`.
pub async fn submit_with_timeout(
    collaborator: &dyn SubmitCollaborator,
    payload: &MarketplacePayload,
    timeout: Duration,
) -> Result<SubmissionReceipt, SubmitError> {
    match tokio::time::timeout(timeout, collaborator.submit(payload)).await {
        Ok(result) => result,
        Err(_) => Err(SubmitError::TimedOut {
            elapsed_ms: timeout.as_millis() as u64,
        }),
    }
}

// ---------------------------------------------------------------------------
// In-flight gate
// ---------------------------------------------------------------------------

/// At-most-one-in-flight flag for a wizard's submit control.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: AtomicBool,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control is currently disabled.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the gate. `None` if an attempt is already pending.
    pub fn try_acquire(&self) -> Option<SubmitPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit { gate: self })
    }

    /// Run `attempt` while holding the gate.
    ///
    /// Fails with [`CoreError::Conflict`] without polling `attempt` if
    /// another attempt holds the gate. The gate is released when `attempt`
    /// resolves, or if this future is dropped first.
    pub async fn run<F: Future>(&self, attempt: F) -> Result<F::Output, CoreError> {
        let _permit = self.try_acquire().ok_or_else(|| {
            CoreError::Conflict("A submission is already in progress".to_string())
        })?;
        Ok(attempt.await)
    }
}

/// Held for the duration of one submit attempt; releases the gate on drop.
#[derive(Debug)]
pub struct SubmitPermit<'a> {
    gate: &'a SubmitGate,
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    use super::*;
    use crate::wizard::payload::BusinessDetails;
    use assert_matches::assert_matches;

    fn payload() -> MarketplacePayload {
        MarketplacePayload {
            business_details: BusinessDetails {
                name: "Acme Corp".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Never finishes on its own; counts how often it was called.
    struct Stalled {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SubmitCollaborator for Stalled {
        async fn submit(&self, _: &MarketplacePayload) -> Result<SubmissionReceipt, SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn simulated_submitter_accepts_with_derived_domain() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(5));
        let receipt = submitter.submit(&payload()).await.unwrap();
        assert_eq!(receipt.marketplace_name, "Acme Corp");
        assert_eq!(receipt.domain, "acme-corp.nftbuilder.app");
    }

    #[tokio::test]
    async fn timeout_is_reported_as_failure() {
        let stalled = Stalled {
            calls: AtomicUsize::new(0),
        };
        let result = submit_with_timeout(&stalled, &payload(), Duration::from_millis(20)).await;
        assert_matches!(result, Err(SubmitError::TimedOut { elapsed_ms: 20 }));
        assert_eq!(stalled.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn permit_blocks_second_acquire_until_dropped() {
        let gate = SubmitGate::new();
        let permit = gate.try_acquire().expect("gate starts open");
        assert!(gate.is_in_flight());
        assert!(gate.try_acquire().is_none());

        drop(permit);
        assert!(!gate.is_in_flight());
        assert!(gate.try_acquire().is_some());
    }

    #[tokio::test]
    async fn gate_disabled_while_pending_and_released_on_completion() {
        let gate = Arc::new(SubmitGate::new());
        let submitter = SimulatedSubmitter::new(Duration::from_millis(50));

        let task = {
            let gate = Arc::clone(&gate);
            tokio::spawn(async move {
                let payload = payload();
                gate.run(submitter.submit(&payload)).await
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(gate.is_in_flight());
        let second = gate.run(async {}).await;
        assert_matches!(second, Err(CoreError::Conflict(_)));
        // The refused attempt must not release the first one's claim.
        assert!(gate.is_in_flight());

        let first = task.await.unwrap();
        assert_matches!(first, Ok(Ok(_)));
        assert!(!gate.is_in_flight());
    }

    #[tokio::test]
    async fn gate_released_after_failure() {
        let gate = SubmitGate::new();
        let stalled = Stalled {
            calls: AtomicUsize::new(0),
        };

        let outcome = gate
            .run(submit_with_timeout(&stalled, &payload(), Duration::from_millis(10)))
            .await;
        assert_matches!(outcome, Ok(Err(SubmitError::TimedOut { .. })));
        assert!(!gate.is_in_flight());
    }
}
