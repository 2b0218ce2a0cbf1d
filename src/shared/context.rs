//! Request Context
//!
//! Cancellation and deadline carried through every use case and
//! repository call.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::errors::ServiceError;

/// Cancellation token plus an optional deadline for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled unless [`cancel`](Self::cancel) is called
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now
    ///
    /// A timeout too large to represent as an instant means no deadline.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once cancelled or past the deadline
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.token.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Resolves when the context is cancelled or its deadline passes.
    pub async fn done(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    () = self.token.cancelled() => {}
                    () = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// Drive `operation` to completion unless the context finishes first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::cancelled`] when the context is done before or
    /// while the future runs, otherwise whatever the future returns.
    pub async fn run<T, F>(&self, operation: &str, future: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        if self.is_done() {
            return Err(ServiceError::cancelled(operation));
        }

        tokio::select! {
            biased;
            () = self.done() => {
                tracing::debug!(operation, "Operation abandoned, request context finished");
                Err(ServiceError::cancelled(operation))
            }
            result = future => result,
        }
    }
}
