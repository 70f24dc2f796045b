//! Cooperative cancellation for long-running sweeps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::BenchError;

/// Cooperative cancellation token using an atomic bool.
///
/// Cloned into the Ctrl+C handler. The sweep checks it between rows, and a
/// bounded recursive run polls it through [`TimeoutCancellationToken`].
///
/// # Example
/// ```
/// use fibbench_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), BenchError> {
        if self.is_cancelled() {
            Err(BenchError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// A cancellation token with a timeout.
///
/// Combines an outer [`CancellationToken`] with an absolute deadline. The
/// token counts as cancelled once either the outer token is cancelled or the
/// deadline has passed.
#[derive(Clone, Debug)]
pub struct TimeoutCancellationToken {
    inner: CancellationToken,
    /// `None` when the timeout is too large to represent.
    deadline: Option<Instant>,
}

impl TimeoutCancellationToken {
    /// Create a token that expires `timeout` from now.
    #[must_use]
    pub fn new(inner: CancellationToken, timeout: Duration) -> Self {
        Self {
            inner,
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Check if cancellation has been requested (either manual or timeout).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled() || self.is_timed_out()
    }

    /// Whether the deadline has passed.
    #[must_use]
    pub fn is_timed_out(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Get the remaining time before the deadline.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline.map_or(Duration::MAX, |deadline| {
            deadline.saturating_duration_since(Instant::now())
        })
    }

    /// Get the outer token.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_token() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check_cancelled().is_ok());
        token.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check_cancelled(), Err(BenchError::Cancelled)));
    }

    #[test]
    fn timeout_token_expires() {
        let token = TimeoutCancellationToken::new(CancellationToken::new(), Duration::ZERO);
        assert!(token.is_timed_out());
        assert!(token.is_cancelled());
        assert_eq!(token.remaining(), Duration::ZERO);
        assert!(!token.token().is_cancelled());
    }

    #[test]
    fn timeout_token_follows_outer_token() {
        let outer = CancellationToken::new();
        let token = TimeoutCancellationToken::new(outer.clone(), Duration::from_secs(3600));
        assert!(!token.is_cancelled());
        assert!(token.remaining() > Duration::from_secs(3500));
        outer.cancel();
        assert!(token.is_cancelled());
        assert!(!token.is_timed_out());
    }

    #[test]
    fn huge_timeout_does_not_overflow() {
        let token = TimeoutCancellationToken::new(CancellationToken::new(), Duration::MAX);
        assert!(!token.is_timed_out());
    }

    #[test]
    fn clones_share_state() {
        let token = CancellationToken::new();
        let handler_side = token.clone();
        handler_side.cancel();
        assert!(token.is_cancelled());
    }
}
