//! Screen-lifetime cancellation.
//!
//! Every task a screen spawns (timers, gateway calls, its actor) is tied to
//! the screen's [`ScreenScope`]. Disposing the scope cancels all of them at
//! once, and nothing tied to it writes state afterwards.

use std::future::Future;

use tokio_util::sync::CancellationToken;

#[derive(Clone, Default)]
pub struct ScreenScope {
    token: CancellationToken,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel all outstanding work for the screen. Idempotent.
    pub fn dispose(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("screen scope disposed");
            self.token.cancel();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once the scope is disposed.
    pub async fn disposed(&self) {
        self.token.cancelled().await;
    }

    /// Spawn `task` on the current runtime, tied to this scope.
    ///
    /// Returns a token that cancels just this task. Disposing the scope
    /// cancels it as well.
    pub fn spawn<F>(&self, task: F) -> CancellationToken
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.token.child_token();
        let guard = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => {}
                _ = task => {}
            }
        });
        token
    }
}
