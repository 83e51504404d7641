use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::error::RecallError;

/// Which cancellation source fired first for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CancelCause {
    /// The caller cancelled through its own token.
    Caller,
    /// The internally scheduled deadline elapsed.
    Timeout {
        /// The configured timeout, in milliseconds.
        timeout_ms: u64,
    },
}

/// The merged cancellation signal governing a single in-flight request.
///
/// Combines an optional caller-supplied [`CancellationToken`] with an optional
/// internally scheduled timeout into the one token handed to the transport.
/// Whichever source fires first records itself as the [`CancelCause`]; the
/// loser is inert. Exactly one timer exists per request, owned by the watcher
/// task, and [`teardown`](Self::teardown) releases it on every exit path —
/// [`Drop`] covers early returns.
#[derive(Debug)]
pub(crate) struct EffectiveCancellation {
    token: CancellationToken,
    cause: Arc<OnceLock<CancelCause>>,
    watcher: Option<JoinHandle<()>>,
}

impl EffectiveCancellation {
    pub(crate) fn new(caller: Option<CancellationToken>, timeout: Option<Duration>) -> Self {
        let Some(timeout) = timeout else {
            // Zero-overhead passthrough: the effective signal is the caller's
            // token (or a token that can never fire).
            return Self {
                token: caller.unwrap_or_default(),
                cause: Arc::new(OnceLock::new()),
                watcher: None,
            };
        };

        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        let token = CancellationToken::new();
        let cause = Arc::new(OnceLock::new());

        if let Some(caller) = &caller
            && caller.is_cancelled()
        {
            // The caller signal was already cancelled when the request started:
            // fire immediately with the caller as the cause. The timer is never
            // started.
            let _ = cause.set(CancelCause::Caller);
            token.cancel();
            return Self {
                token,
                cause,
                watcher: None,
            };
        }

        let watcher = tokio::spawn({
            let token = token.clone();
            let cause = Arc::clone(&cause);
            async move {
                let fired = match caller {
                    Some(caller) => {
                        tokio::select! {
                            () = caller.cancelled() => CancelCause::Caller,
                            () = tokio::time::sleep(timeout) => CancelCause::Timeout { timeout_ms },
                        }
                    }
                    None => {
                        tokio::time::sleep(timeout).await;
                        CancelCause::Timeout { timeout_ms }
                    }
                };
                // Record the cause before cancelling so any observer of the
                // token sees it; the first trigger wins.
                let _ = cause.set(fired);
                token.cancel();
            }
        });

        Self {
            token,
            cause,
            watcher: Some(watcher),
        }
    }

    /// The merged token to hand to the transport.
    pub(crate) fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// The source that triggered cancellation, if any fired.
    pub(crate) fn cause(&self) -> Option<CancelCause> {
        self.cause.get().copied().or_else(|| {
            // Passthrough mode has no watcher, so a cancelled token can only
            // mean the caller fired.
            self.token.is_cancelled().then_some(CancelCause::Caller)
        })
    }

    /// Releases the timer and the caller-signal listener.
    ///
    /// Idempotent: safe to call on an already-fired timer, a never-started
    /// timer, or repeatedly.
    pub(crate) fn teardown(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
    }

    /// Returns `true` while the watcher task (and its timer) is still alive.
    #[cfg(test)]
    pub(crate) fn timer_armed(&self) -> bool {
        self.watcher
            .as_ref()
            .is_some_and(|watcher| !watcher.is_finished())
    }

    /// Reclassifies a transport failure according to the recorded cause.
    ///
    /// A generic cancellation caused by the internal timeout becomes a
    /// [`RecallError::Timeout`]; everything else — already-normalized errors
    /// included — passes through unchanged.
    pub(crate) fn reclassify(&self, error: RecallError) -> RecallError {
        match (error, self.cause()) {
            (RecallError::Cancelled, Some(CancelCause::Timeout { timeout_ms })) => {
                RecallError::Timeout { timeout_ms }
            }
            (error, _) => error,
        }
    }
}

impl Drop for EffectiveCancellation {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_timeout_passes_caller_token_through() {
        let caller = CancellationToken::new();
        let cancel = EffectiveCancellation::new(Some(caller.clone()), None);

        assert!(!cancel.timer_armed());
        assert!(cancel.cause().is_none());

        caller.cancel();
        assert!(cancel.token().is_cancelled());
        assert_eq!(cancel.cause(), Some(CancelCause::Caller));
    }

    #[tokio::test]
    async fn test_no_sources_never_cancels() {
        let cancel = EffectiveCancellation::new(None, None);
        assert!(!cancel.timer_armed());
        assert!(!cancel.token().is_cancelled());
        assert!(cancel.cause().is_none());
    }

    #[tokio::test]
    async fn test_already_cancelled_caller_never_starts_timer() {
        let caller = CancellationToken::new();
        caller.cancel();

        let cancel =
            EffectiveCancellation::new(Some(caller), Some(Duration::from_millis(1_000)));
        assert!(!cancel.timer_armed());
        assert!(cancel.token().is_cancelled());
        assert_eq!(cancel.cause(), Some(CancelCause::Caller));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fires_with_configured_duration() {
        let cancel = EffectiveCancellation::new(None, Some(Duration::from_millis(100)));
        let token = cancel.token();

        token.cancelled().await;
        assert_eq!(cancel.cause(), Some(CancelCause::Timeout { timeout_ms: 100 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_caller_beats_timer() {
        let caller = CancellationToken::new();
        let cancel =
            EffectiveCancellation::new(Some(caller.clone()), Some(Duration::from_millis(1_000)));
        let token = cancel.token();

        caller.cancel();
        token.cancelled().await;
        assert_eq!(cancel.cause(), Some(CancelCause::Caller));
    }

    #[tokio::test]
    async fn test_teardown_is_idempotent() {
        let mut cancel = EffectiveCancellation::new(None, Some(Duration::from_secs(60)));
        assert!(cancel.timer_armed());

        cancel.teardown();
        cancel.teardown();
        assert!(!cancel.timer_armed());
        assert!(!cancel.token().is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reclassify_maps_timeout_cancellation() {
        let cancel = EffectiveCancellation::new(None, Some(Duration::from_millis(100)));
        cancel.token().cancelled().await;

        let error = cancel.reclassify(RecallError::Cancelled);
        assert!(matches!(error, RecallError::Timeout { timeout_ms: 100 }));
    }

    #[tokio::test]
    async fn test_reclassify_leaves_other_errors_unchanged() {
        let caller = CancellationToken::new();
        caller.cancel();
        let cancel = EffectiveCancellation::new(Some(caller), Some(Duration::from_secs(1)));

        // Caller-initiated cancellation stays caller-initiated.
        let error = cancel.reclassify(RecallError::Cancelled);
        assert!(matches!(error, RecallError::Cancelled));

        // Already-normalized errors are never re-wrapped.
        let error = cancel.reclassify(RecallError::Timeout { timeout_ms: 42 });
        assert!(matches!(error, RecallError::Timeout { timeout_ms: 42 }));
    }
}
