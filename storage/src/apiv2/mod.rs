use std::future::Future;
use std::time::Duration;

use google_cloud_gax::cancel::CancellationToken;
use google_cloud_gax::grpc::{Code, Status};
use google_cloud_gax::retry::RetrySetting;

pub mod conn_pool;
pub mod storage_client;
pub mod storage_control_client;

/// Backoff for idempotent data plane calls: 1s, 2s, 4s ... capped at 60s.
pub fn default_retry_setting() -> RetrySetting {
    RetrySetting {
        from_millis: 2,
        max_delay: Some(Duration::from_secs(60)),
        factor: 500,
        take: 8,
        codes: vec![Code::DeadlineExceeded, Code::Unavailable],
    }
}

/// Control plane calls also retry on server overload and internal errors.
pub fn default_control_retry_setting() -> RetrySetting {
    RetrySetting {
        codes: vec![
            Code::DeadlineExceeded,
            Code::Unavailable,
            Code::ResourceExhausted,
            Code::Internal,
            Code::Unknown,
        ],
        ..default_retry_setting()
    }
}

/// Runs a call that cannot be replayed, such as one that consumes a request stream.
pub(crate) async fn cancellable<R>(
    cancel: Option<CancellationToken>,
    call: impl Future<Output = Result<R, Status>>,
) -> Result<R, Status> {
    match cancel {
        Some(cancel) => cancel
            .run_until_cancelled(call)
            .await
            .unwrap_or_else(|| Err(Status::cancelled("client cancel"))),
        None => call.await,
    }
}

/// Fills an empty `request_id` so that retried mutations are deduplicated server side.
pub(crate) fn ensure_request_id(request_id: &mut String) {
    if request_id.is_empty() {
        *request_id = uuid::Uuid::new_v4().to_string();
    }
}
