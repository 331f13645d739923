//! Deadline and cancellation state carried into every call.

use std::future;
use std::time::Duration;

use futures_util::future::select_all;
use tokio::sync::watch;
use tokio::time::Instant;

/// Deadline and cancellation scope of a caller.
///
/// Contexts are cheap to clone. Deriving a context never loosens it: a
/// derived deadline is the earlier of the two, and a derived context is
/// cancelled whenever any of its ancestors is.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: Vec<watch::Receiver<bool>>,
}

impl CallContext {
    /// A context with no deadline that is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Bound the context by an absolute deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Bound the context by a timeout starting now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Derive a context that can be cancelled through the returned handle.
    pub fn with_cancel(mut self) -> (Self, Canceller) {
        let (tx, rx) = watch::channel(false);
        self.cancel.push(rx);
        (self, Canceller { tx })
    }

    /// The context's own deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether any cancellation handle in scope has fired.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.iter().any(|rx| *rx.borrow())
    }

    /// The earlier of the context deadline and `timeout` from now.
    pub(crate) fn effective_deadline(&self, timeout: Duration) -> Option<Instant> {
        let by_timeout = Instant::now().checked_add(timeout);
        match (self.deadline, by_timeout) {
            (Some(deadline), Some(by_timeout)) => Some(deadline.min(by_timeout)),
            (deadline, by_timeout) => deadline.or(by_timeout),
        }
    }

    /// Resolves once the context is cancelled. Never resolves otherwise.
    pub(crate) async fn cancelled(&self) {
        if self.cancel.is_empty() {
            return future::pending().await;
        }

        let waits = self.cancel.iter().cloned().map(|mut rx| {
            Box::pin(async move {
                // A dropped handle without cancel() leaves the context live.
                let fired = rx.wait_for(|cancelled| *cancelled).await.is_ok();
                if !fired {
                    future::pending::<()>().await;
                }
            })
        });
        select_all(waits).await;
    }
}

/// Cancels the [`CallContext`] it was created with, and every context derived from it.
#[derive(Debug)]
pub struct Canceller {
    tx: watch::Sender<bool>,
}

impl Canceller {
    /// Cancel the context. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}
