//! `AsyncResource` — declarative wrapper around an asynchronous producer.
//!
//! A consumer (CLI command, TUI pane) declares a zero-argument async
//! producer plus a dependency value; the resource invokes the producer,
//! tracks `{data, loading, error}`, and re-invokes whenever the dependency
//! value changes or `refetch()` is called explicitly.
//!
//! Concurrency contract: every invocation is tagged with a monotonically
//! increasing token at the moment it is armed. A completing invocation
//! applies its result only if it is still the most recently started one;
//! stale completions (superseded by a newer dependency change or an
//! overlapping refetch) are discarded silently. Results therefore land in
//! completion order with last-started-wins, and a slow superseded fetch can
//! never clobber a newer result.

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use anyhow::Result;

/// Point-in-time view of a resource's state. `error` and `data` are mutually
/// exclusive outputs of a single invocation: success clears the error,
/// failure clears the data.
#[derive(Debug, Clone)]
pub struct ResourceSnapshot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

struct Inner<T, D> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    deps: Option<D>,
    /// Token of the most recently armed invocation.
    latest: u64,
    /// Set by `detach()`; once set, no state mutation is ever applied again.
    detached: bool,
}

/// An asynchronous value with loading/error tracking and automatic
/// re-invocation on dependency change.
pub struct AsyncResource<T, D, F> {
    inner: Mutex<Inner<T, D>>,
    producer: F,
}

impl<T, D, F, Fut> AsyncResource<T, D, F>
where
    T: Clone,
    D: PartialEq,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    /// Create a resource around `producer`. No invocation is started; the
    /// first `sync_deps()` or `refetch()` triggers one.
    ///
    /// The producer must be safe to call repeatedly — the resource performs
    /// no side-effect deduplication on its behalf.
    pub fn new(producer: F) -> Self {
        Self {
            inner: Mutex::new(Inner {
                data: None,
                loading: false,
                error: None,
                deps: None,
                latest: 0,
                detached: false,
            }),
            producer,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T, D>> {
        // A poisoned lock only means a consumer panicked mid-snapshot; the
        // state itself is always internally consistent.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Current `{data, loading, error}`. Synchronous, no side effects.
    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<T> {
        let inner = self.lock();
        ResourceSnapshot {
            data: inner.data.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    /// Invoke the producer now, independent of dependency tracking.
    ///
    /// Arms the resource (`loading = true`, `error` cleared) strictly before
    /// the producer runs, so the armed state is observable before any await.
    /// The returned future completes when this invocation has settled —
    /// applied or discarded — letting callers sequence work after a refresh.
    ///
    /// Producer failures never propagate: they are stringified into `error`
    /// and `data` is cleared.
    pub async fn refetch(&self) {
        let Some(token) = self.arm() else {
            return; // detached — no further invocations
        };
        let result = (self.producer)().await;
        let mut inner = self.lock();
        if inner.detached || inner.latest != token {
            return; // stale invocation — discarded silently
        }
        inner.loading = false;
        match result {
            Ok(value) => {
                inner.data = Some(value);
                inner.error = None;
            }
            Err(err) => {
                inner.data = None;
                inner.error = Some(format!("{err:#}"));
            }
        }
    }

    /// Compare `deps` against the last-seen snapshot by value equality; on
    /// change, store it and behave exactly like [`refetch`](Self::refetch).
    /// Unchanged dependencies trigger nothing.
    pub async fn sync_deps(&self, deps: D) {
        let changed = {
            let mut inner = self.lock();
            if inner.detached || inner.deps.as_ref() == Some(&deps) {
                false
            } else {
                inner.deps = Some(deps);
                true
            }
        };
        if changed {
            self.refetch().await;
        }
    }

    /// Tear down: in-flight completions become no-ops (not errors) and
    /// later refetches are ignored.
    pub fn detach(&self) {
        self.lock().detached = true;
    }

    /// Arm a new invocation and return its token, or `None` when detached.
    fn arm(&self) -> Option<u64> {
        let mut inner = self.lock();
        if inner.detached {
            return None;
        }
        inner.latest += 1;
        inner.loading = true;
        inner.error = None;
        Some(inner.latest)
    }
}
