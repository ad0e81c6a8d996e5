use std::time::Duration;

use google_cloud_gax::cancel::CancellationToken;
use google_cloud_gax::conn::Channel;
use google_cloud_gax::create_request;
use google_cloud_gax::grpc::{Code, Response, Status};
use google_cloud_gax::retry::{invoke, RetrySetting};
use google_cloud_googleapis::longrunning::operations_client::OperationsClient as InternalOperationsClient;
use google_cloud_googleapis::longrunning::{
    CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, Operation, WaitOperationRequest,
};

pub fn default_retry_setting() -> RetrySetting {
    RetrySetting {
        from_millis: 50,
        max_delay: Some(Duration::from_secs(10)),
        factor: 1u64,
        take: 20,
        codes: vec![Code::Unavailable, Code::Unknown],
    }
}

fn name_params(name: &str) -> String {
    format!("name={name}")
}

/// Client for `google.longrunning.Operations`.
///
/// Every call carries `x-goog-request-params` computed from the operation name.
/// Services that route by another key install their own mapping with [`OperationsClient::with_request_params`].
#[derive(Clone, Debug)]
pub struct OperationsClient {
    inner: InternalOperationsClient<Channel>,
    request_params: fn(&str) -> String,
}

impl OperationsClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: InternalOperationsClient::new(channel),
            request_params: name_params,
        }
    }

    pub fn with_request_params(mut self, request_params: fn(&str) -> String) -> Self {
        self.request_params = request_params;
        self
    }

    /// Gets the latest state of a long-running operation.
    pub async fn get_operation(
        &self,
        req: GetOperationRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Operation>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let params = (self.request_params)(&req.name);
        let action = || async {
            let request = create_request(params.clone(), req.clone());
            self.inner.clone().get_operation(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Deletes the operation record. The operation itself keeps running.
    pub async fn delete_operation(
        &self,
        req: DeleteOperationRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let params = (self.request_params)(&req.name);
        let action = || async {
            let request = create_request(params.clone(), req.clone());
            self.inner.clone().delete_operation(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Starts best effort cancellation. A cancelled operation finishes with `Code::Cancelled`.
    pub async fn cancel_operation(
        &self,
        req: CancelOperationRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let params = (self.request_params)(&req.name);
        let action = || async {
            let request = create_request(params.clone(), req.clone());
            self.inner.clone().cancel_operation(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    pub async fn wait_operation(
        &self,
        req: WaitOperationRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Operation>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let params = (self.request_params)(&req.name);
        let action = || async {
            let request = create_request(params.clone(), req.clone());
            self.inner.clone().wait_operation(request).await
        };
        invoke(cancel, Some(setting), action).await
    }
}
