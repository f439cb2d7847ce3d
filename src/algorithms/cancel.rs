//! Cooperative cancellation for long-running algorithm runs
//!
//! Algorithms poll their [`RunContext`] at loop boundaries (per pass for
//! Bellman-Ford, per intermediate vertex for Floyd-Warshall, per pop for the
//! queue-driven searches) and stop with `Cancelled` or `DeadlineExceeded`.

use crate::error::{GraphError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared flag that stops every run holding a clone of it
///
/// # Example
///
/// ```
/// use trueno_graph_algos::{CancellationToken, RunContext};
///
/// let token = CancellationToken::new();
/// let ctx = RunContext::unbounded().with_token(token.clone());
/// assert!(ctx.check("bfs").is_ok());
///
/// token.cancel();
/// assert!(ctx.check("bfs").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Create a token that is not cancelled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-run limits: an optional token and an optional deadline
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    token: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl RunContext {
    /// Context with no token and no deadline
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Attach a cancellation token
    #[must_use]
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Stop at the given instant
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stop once `timeout` has elapsed from now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Fail if the run should stop
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if the token fired, `DeadlineExceeded` if the
    /// deadline has passed
    pub fn check(&self, algorithm: &'static str) -> Result<()> {
        if self.token.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Err(GraphError::Cancelled { algorithm });
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(GraphError::DeadlineExceeded { algorithm });
        }
        Ok(())
    }
}
