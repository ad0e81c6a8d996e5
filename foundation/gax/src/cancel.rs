use std::future::Future;

use tokio_util::sync::CancellationToken as InternalCancellationToken;

/// Wraps tokio_util's token so that callers do not have to depend on tokio-util directly.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    inner: InternalCancellationToken,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token that is cancelled together with this one.
    pub fn child_token(&self) -> CancellationToken {
        Self {
            inner: self.inner.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.inner.cancelled().await
    }

    /// Drives `fut` to completion unless the token is cancelled first.
    /// Returns `None` when cancellation won.
    pub async fn run_until_cancelled<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.inner.cancelled() => None,
            v = fut => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::cancel::CancellationToken;

    #[tokio::test]
    async fn test_run_until_cancelled() {
        let token = CancellationToken::new();
        assert_eq!(token.run_until_cancelled(async { 1 }).await, Some(1));

        let child = token.child_token();
        token.cancel();
        assert!(child.is_cancelled());
        let result = child
            .run_until_cancelled(tokio::time::sleep(Duration::from_secs(10)))
            .await;
        assert!(result.is_none());
    }
}
