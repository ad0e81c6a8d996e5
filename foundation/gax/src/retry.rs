use std::future::Future;
use std::iter::Take;
use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;
use tonic::{Code, Status};

use crate::cancel::CancellationToken;

/// Backoff and retryable codes for a single call.
///
/// The n-th delay is `factor * from_millis^n` milliseconds capped at `max_delay`,
/// so `from_millis: 2, factor: 500` waits 1s, 2s, 4s and so on.
#[derive(Clone, Debug)]
pub struct RetrySetting {
    pub from_millis: u64,
    pub max_delay: Option<Duration>,
    pub factor: u64,
    /// Maximum number of retries after the first attempt.
    pub take: usize,
    pub codes: Vec<Code>,
}

impl RetrySetting {
    pub fn strategy(&self) -> Take<ExponentialBackoff> {
        let mut st = ExponentialBackoff::from_millis(self.from_millis).factor(self.factor);
        if let Some(max_delay) = self.max_delay {
            st = st.max_delay(max_delay);
        }
        st.take(self.take)
    }

    pub fn should_retry(&self, status: &Status) -> bool {
        self.codes.contains(&status.code())
    }

    /// A setting that never retries.
    pub fn none() -> Self {
        Self {
            take: 0,
            codes: vec![],
            ..Default::default()
        }
    }
}

impl Default for RetrySetting {
    fn default() -> Self {
        Self {
            from_millis: 10,
            max_delay: Some(Duration::from_secs(1)),
            factor: 1u64,
            take: 5,
            codes: vec![Code::Unavailable, Code::Unknown, Code::Aborted],
        }
    }
}

fn client_cancel() -> Status {
    Status::cancelled("client cancel")
}

/// Runs `action` until it succeeds, fails with a non retryable code or the backoff is exhausted.
pub async fn invoke<A, R>(
    cancel: Option<CancellationToken>,
    retry: Option<RetrySetting>,
    mut action: impl FnMut() -> A,
) -> Result<R, Status>
where
    A: Future<Output = Result<R, Status>>,
{
    let fn_loop = async {
        let retry = retry.unwrap_or_default();
        let mut strategy = retry.strategy();
        loop {
            let status = match action().await {
                Ok(s) => return Ok(s),
                Err(e) => e,
            };
            if !retry.should_retry(&status) {
                return Err(status);
            }
            match strategy.next() {
                None => return Err(status),
                Some(duration) => {
                    tracing::debug!("retrying after {:?}: code={:?}", duration, status.code());
                    tokio::time::sleep(duration).await
                }
            };
        }
    };

    match cancel {
        Some(cancel) => cancel.run_until_cancelled(fn_loop).await.unwrap_or_else(|| Err(client_cancel())),
        None => fn_loop.await,
    }
}

/// Same as [`invoke`] but threads `v` through every attempt so that the
/// caller can take back ownership of its input after a failure.
pub async fn invoke_fn<R, V, A>(
    cancel: Option<CancellationToken>,
    retry: Option<RetrySetting>,
    mut f: impl FnMut(V) -> A,
    mut v: V,
) -> Result<R, Status>
where
    A: Future<Output = Result<R, (Status, V)>>,
{
    let fn_loop = async {
        let retry = retry.unwrap_or_default();
        let mut strategy = retry.strategy();
        loop {
            let status = match f(v).await {
                Ok(s) => return Ok(s),
                Err((status, back)) => {
                    v = back;
                    status
                }
            };
            if !retry.should_retry(&status) {
                return Err(status);
            }
            match strategy.next() {
                None => return Err(status),
                Some(duration) => {
                    tracing::debug!("retrying after {:?}: code={:?}", duration, status.code());
                    tokio::time::sleep(duration).await
                }
            };
        }
    };

    match cancel {
        Some(cancel) => cancel.run_until_cancelled(fn_loop).await.unwrap_or_else(|| Err(client_cancel())),
        None => fn_loop.await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use tonic::{Code, Status};

    use crate::cancel::CancellationToken;
    use crate::retry::{invoke, invoke_fn, RetrySetting};

    fn fast() -> RetrySetting {
        RetrySetting {
            from_millis: 1,
            max_delay: Some(Duration::from_millis(1)),
            factor: 1,
            take: 3,
            codes: vec![Code::Unavailable],
        }
    }

    #[test]
    fn test_strategy() {
        let setting = RetrySetting {
            from_millis: 2,
            max_delay: Some(Duration::from_secs(3)),
            factor: 500,
            take: 4,
            codes: vec![],
        };
        let delays: Vec<Duration> = setting.strategy().collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(3),
                Duration::from_secs(3)
            ]
        );
        assert_eq!(RetrySetting::none().strategy().count(), 0);
    }

    #[tokio::test]
    async fn test_retry_until_exhausted() {
        let counter = Arc::new(AtomicUsize::new(0));
        let result: Result<(), Status> = invoke(None, Some(fast()), || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(Status::unavailable("down"))
            }
        })
        .await;
        assert_eq!(result.unwrap_err().code(), Code::Unavailable);
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_non_retryable_code() {
        let counter = Arc::new(AtomicUsize::new(0));
        let result: Result<(), Status> = invoke(None, Some(fast()), || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(Status::not_found("missing"))
            }
        })
        .await;
        assert_eq!(result.unwrap_err().code(), Code::NotFound);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invoke_fn_reuses_value() {
        let result = invoke_fn(
            None,
            Some(fast()),
            |attempt: usize| async move {
                if attempt < 2 {
                    Err((Status::unavailable("again"), attempt + 1))
                } else {
                    Ok(attempt)
                }
            },
            0,
        )
        .await;
        assert_eq!(result.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_cancel() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });
        let result: Result<(), Status> = invoke(Some(cancel), Some(fast()), || async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;
        assert_eq!(result.unwrap_err().code(), Code::Cancelled);
    }
}
