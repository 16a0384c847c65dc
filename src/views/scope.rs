use std::{future::Future, sync::Arc};

use tokio::sync::watch;

/// Cancellation scope tied to the lifetime of one rendered view.
///
/// Results produced after the scope is cancelled are dropped by [`ViewScope::run`]
/// so a torn-down view never receives a late update.
#[derive(Clone, Debug)]
pub struct ViewScope {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the scope is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // the sender lives as long as any clone of the scope, so this only errs after teardown
        let closed = rx.wait_for(|c| *c).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }

    /// Drive `fut` unless the scope is cancelled first. `None` means the result
    /// (if any) was discarded.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => (!self.is_cancelled()).then_some(out),
        }
    }

    /// Cancels the scope when dropped.
    pub fn guard(&self) -> ScopeGuard {
        ScopeGuard { scope: self.clone() }
    }
}

pub struct ScopeGuard {
    scope: ViewScope,
}

impl ScopeGuard {
    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
