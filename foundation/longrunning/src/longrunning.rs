use std::marker::PhantomData;
use std::time::Duration;

use google_cloud_gax::cancel::CancellationToken;
use google_cloud_gax::grpc::{Code, Status};
use google_cloud_gax::retry::{invoke_fn, RetrySetting};
use google_cloud_googleapis::longrunning::{
    operation, CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, Operation as InternalOperation,
};

use crate::autogen::operations_client::OperationsClient;

/// Polling schedule used by [`Operation::wait`] when no setting is given.
/// Waits 5s, 10s, 20s, 40s and then 45s between polls, about five minutes in total.
pub fn default_wait_setting() -> RetrySetting {
    RetrySetting {
        from_millis: 2,
        max_delay: Some(Duration::from_secs(45)),
        factor: 2500,
        take: 9,
        codes: vec![Code::DeadlineExceeded],
    }
}

/// A typed handle on a `google.longrunning.Operation` whose response unpacks to `T`.
pub struct Operation<T: prost::Message + Default> {
    inner: InternalOperation,
    client: OperationsClient,
    _marker: PhantomData<T>,
}

impl<T: prost::Message + Default> Operation<T> {
    pub fn new(client: OperationsClient, inner: InternalOperation) -> Self {
        Self {
            client,
            inner,
            _marker: PhantomData,
        }
    }

    /// Server assigned name, unique within the service that created the operation.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn done(&self) -> bool {
        self.inner.done
    }

    /// Raw metadata of the last observed state, if any.
    pub fn metadata(&self) -> Option<&prost_types::Any> {
        self.inner.metadata.as_ref()
    }

    /// Decodes the metadata of the last observed state as `M`.
    pub fn decoded_metadata<M: prost::Message + Default>(&self) -> Result<Option<M>, Status> {
        match &self.inner.metadata {
            Some(any) => M::decode(any.value.as_slice())
                .map(Some)
                .map_err(|e| Status::internal(format!("failed to decode operation metadata: {e}"))),
            None => Ok(None),
        }
    }

    /// Fetches the latest state unless the operation is already done.
    ///
    /// Returns `Ok(None)` while the operation is running. A finished operation
    /// yields its decoded response or the error it completed with.
    pub async fn poll(&mut self) -> Result<Option<T>, Status> {
        if !self.done() {
            let operation = self
                .client
                .get_operation(
                    GetOperationRequest {
                        name: self.name().to_string(),
                    },
                    None,
                    None,
                )
                .await?;
            self.inner = operation.into_inner()
        }
        if !self.done() {
            return Ok(None);
        }
        match &self.inner.result {
            Some(operation::Result::Response(message)) => T::decode(message.value.as_slice())
                .map(Some)
                .map_err(|e| Status::internal(format!("failed to decode operation response: {e}"))),
            Some(operation::Result::Error(status)) => {
                let tonic_code = Code::from(status.code);
                Err(Status::new(tonic_code, status.message.to_string()))
            }
            None => Ok(None),
        }
    }

    /// Polls until the operation is done or the schedule runs out, in which case
    /// `Code::DeadlineExceeded` is returned.
    pub async fn wait(
        &mut self,
        cancel: Option<CancellationToken>,
        option: Option<RetrySetting>,
    ) -> Result<Option<T>, Status> {
        let settings = option.unwrap_or_else(default_wait_setting);
        invoke_fn(
            cancel,
            Some(settings),
            |me| async move {
                let poll_result: Option<T> = match me.poll().await {
                    Ok(s) => s,
                    Err(e) => return Err((e, me)),
                };
                if me.done() {
                    Ok(poll_result)
                } else {
                    tracing::trace!("operation {} is still running", me.name());
                    Err((Status::deadline_exceeded("wait timeout"), me))
                }
            },
            self,
        )
        .await
    }

    /// Requests cancellation. The server may still complete the operation.
    pub async fn cancel(&mut self) -> Result<(), Status> {
        self.client
            .cancel_operation(
                CancelOperationRequest {
                    name: self.name().to_string(),
                },
                None,
                None,
            )
            .await
            .map(|_x| ())
    }

    /// Drops the operation record without cancelling it.
    pub async fn delete(&mut self) -> Result<(), Status> {
        self.client
            .delete_operation(
                DeleteOperationRequest {
                    name: self.name().to_string(),
                },
                None,
                None,
            )
            .await
            .map(|_x| ())
    }
}
