//! Bounded deployment-status polling.
//!
//! An explicit loop over `pending → checking → {ready | failed | timed-out}`
//! rather than a self-rescheduling timer: each check is awaited to
//! completion before the next delay starts, so checks are strictly
//! sequential and a slow status fetch stretches wall-clock time instead of
//! overlapping requests. The delay source is the injected [`Sleeper`] port,
//! which makes the loop deterministic under test.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::application::ports::Sleeper;
use crate::domain::deployment::{DeploymentStatus, PollOutcome, classify_status};
use crate::domain::error::ApiError;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Attempt budget and pacing for one polling operation. Fixed for the
/// operation's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(5),
        }
    }
}

// ── Cancellation handle ───────────────────────────────────────────────────────

/// Cancels a running [`StatusPoller`]. Cheap to clone; may be triggered from
/// another task (e.g. a Ctrl-C handler).
#[derive(Clone)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    /// Stop the operation: no further check executes, and no terminal
    /// outcome is delivered — even for a check already in flight.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// ── Poller ────────────────────────────────────────────────────────────────────

/// Watches one deployment until a terminal state. Consumed by `run`, which
/// guarantees at most one terminal outcome per instance.
pub struct StatusPoller<S> {
    deployment_id: String,
    config: PollConfig,
    sleeper: S,
    cancelled: Arc<AtomicBool>,
}

impl<S: Sleeper> StatusPoller<S> {
    pub fn new(deployment_id: impl Into<String>, config: PollConfig, sleeper: S) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            config,
            sleeper,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A cancellation handle for this operation.
    #[must_use]
    pub fn handle(&self) -> PollHandle {
        PollHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Drive the loop to its single terminal outcome.
    ///
    /// Per check: bump the attempt counter, fetch status, then
    /// - fetch error → transient; the attempt still counts and the loop
    ///   continues (only a *successful* fetch reporting failure, or budget
    ///   exhaustion, terminates);
    /// - `ready` → [`PollOutcome::Ready`] with the service URL;
    /// - `failed` status or `error` field → [`PollOutcome::Failed`];
    /// - budget exhausted → [`PollOutcome::TimedOut`] (distinct from
    ///   failure: the backend never said the job died).
    ///
    /// Returns `None` iff cancelled; a cancellation observed after an
    /// in-flight fetch resolves discards that fetch's result.
    pub async fn run<F, Fut>(self, mut fetch: F) -> Option<PollOutcome>
    where
        F: FnMut(&str) -> Fut,
        Fut: Future<Output = Result<DeploymentStatus, ApiError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                return None;
            }
            attempt += 1;

            let result = fetch(&self.deployment_id).await;
            if self.cancelled.load(Ordering::SeqCst) {
                return None; // in-flight result discarded
            }
            if let Ok(status) = &result {
                if let Some(outcome) = classify_status(status) {
                    return Some(outcome);
                }
            }
            if attempt >= self.config.max_attempts {
                return Some(PollOutcome::TimedOut { attempts: attempt });
            }
            // Next check is scheduled relative to this check's completion.
            self.sleeper.sleep(self.config.interval).await;
        }
    }
}
