use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use tokio_stream::{Stream, StreamExt};

use google_cloud_gax::cancel::CancellationToken;
use google_cloud_gax::conn::Channel;
use google_cloud_gax::grpc::{Response, Status, Streaming};
use google_cloud_gax::retry::{invoke, RetrySetting};
use google_cloud_gax::{create_request, create_streaming_request};
use google_cloud_googleapis::iam::v1::{
    GetIamPolicyRequest, Policy, SetIamPolicyRequest, TestIamPermissionsRequest, TestIamPermissionsResponse,
};
use google_cloud_googleapis::storage::v2::storage_client::StorageClient as InternalStorageClient;
use google_cloud_googleapis::storage::v2::{
    bidi_write_object_request, write_object_request, BidiReadObjectRequest, BidiReadObjectResponse,
    BidiWriteObjectRequest, BidiWriteObjectResponse, Bucket, CancelResumableWriteRequest,
    CancelResumableWriteResponse, ComposeObjectRequest, CreateBucketRequest, CreateHmacKeyRequest,
    CreateHmacKeyResponse, CreateNotificationConfigRequest, DeleteBucketRequest, DeleteHmacKeyRequest,
    DeleteNotificationConfigRequest, DeleteObjectRequest, GetBucketRequest, GetHmacKeyRequest,
    GetNotificationConfigRequest, GetObjectRequest, GetServiceAccountRequest, HmacKeyMetadata, ListBucketsRequest,
    ListBucketsResponse, ListHmacKeysRequest, ListHmacKeysResponse, ListNotificationConfigsRequest,
    ListNotificationConfigsResponse, ListObjectsRequest, ListObjectsResponse, LockBucketRetentionPolicyRequest,
    MoveObjectRequest, NotificationConfig, Object, QueryWriteStatusRequest, QueryWriteStatusResponse,
    ReadObjectRequest, ReadObjectResponse, RestoreObjectRequest, RewriteObjectRequest, RewriteResponse,
    ServiceAccount, StartResumableWriteRequest, StartResumableWriteResponse, UpdateBucketRequest,
    UpdateHmacKeyRequest, UpdateObjectRequest, WriteObjectRequest, WriteObjectResponse, WriteObjectSpec,
};

use crate::apiv2::conn_pool::ConnectionManager;
use crate::apiv2::{cancellable, default_retry_setting};
use crate::routing::{bucket_of, bucket_or_prefix, params};

/// Retries only when the call carries a precondition that makes it safe to replay.
fn retry_if(idempotent: bool) -> RetrySetting {
    if idempotent {
        default_retry_setting()
    } else {
        RetrySetting::none()
    }
}

fn spec_bucket(spec: Option<&WriteObjectSpec>) -> &str {
    spec.and_then(|s| s.resource.as_ref())
        .map(|o| o.bucket.as_str())
        .unwrap_or_default()
}

fn write_params(first: Option<&write_object_request::FirstMessage>) -> String {
    let bucket = match first {
        Some(write_object_request::FirstMessage::UploadId(upload_id)) => bucket_of(upload_id),
        Some(write_object_request::FirstMessage::WriteObjectSpec(spec)) => spec_bucket(Some(spec)),
        None => "",
    };
    params(&[("bucket", bucket)])
}

fn bidi_write_params(first: Option<&bidi_write_object_request::FirstMessage>) -> String {
    let bucket = match first {
        Some(bidi_write_object_request::FirstMessage::UploadId(upload_id)) => bucket_of(upload_id),
        Some(bidi_write_object_request::FirstMessage::WriteObjectSpec(spec)) => spec_bucket(Some(spec)),
        Some(bidi_write_object_request::FirstMessage::AppendObjectSpec(spec)) => spec.bucket.as_str(),
        None => "",
    };
    params(&[("bucket", bucket)])
}

/// The object read by [`StorageClient::download_object`].
#[derive(Clone, Debug, Default)]
pub struct DownloadedObject {
    /// Metadata sent with the first response of the read stream.
    pub metadata: Option<Object>,
    pub data: Bytes,
}

/// Client for `google.storage.v2.Storage`.
///
/// Every call picks a channel from the pool, attaches the routing header and
/// retries according to the given [`RetrySetting`] or a per method default.
/// Calls that are not idempotent only retry when asked to.
#[derive(Clone, Debug)]
pub struct StorageClient {
    cm: Arc<ConnectionManager>,
}

impl StorageClient {
    pub fn new(cm: Arc<ConnectionManager>) -> Self {
        Self { cm }
    }

    #[inline]
    fn client(&self) -> InternalStorageClient<Channel> {
        InternalStorageClient::new(self.cm.conn())
    }

    /// Permanently deletes an empty bucket.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_bucket(
        &self,
        req: DeleteBucketRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", req.name.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.delete_bucket(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_bucket(
        &self,
        req: GetBucketRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Bucket>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", req.name.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_bucket(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Creates a new bucket. Replays after a lost response surface as `AlreadyExists`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_bucket(
        &self,
        req: CreateBucketRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Bucket>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("project", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.create_bucket(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Locks the retention policy. `if_metageneration_match` is mandatory.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn lock_bucket_retention_policy(
        &self,
        req: LockBucketRetentionPolicyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Bucket>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", req.bucket.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.lock_bucket_retention_policy(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Gets the IAM policy of a bucket or a managed folder.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_iam_policy(
        &self,
        req: GetIamPolicyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Policy>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", bucket_or_prefix(&req.resource))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_iam_policy(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Replaces the IAM policy. Retried by default only when the policy carries an etag.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn set_iam_policy(
        &self,
        req: SetIamPolicyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Policy>, Status> {
        let setting = retry.unwrap_or_else(|| retry_if(req.policy.as_ref().is_some_and(|p| !p.etag.is_empty())));
        let param_string = params(&[("bucket", bucket_or_prefix(&req.resource))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.set_iam_policy(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn test_iam_permissions(
        &self,
        req: TestIamPermissionsRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<TestIamPermissionsResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", bucket_or_prefix(&req.resource))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.test_iam_permissions(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Updates the fields named in `update_mask`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_bucket(
        &self,
        req: UpdateBucketRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Bucket>, Status> {
        let setting = retry.unwrap_or_else(|| retry_if(req.if_metageneration_match.is_some()));
        let param_string = params(&[("bucket", req.bucket.as_ref().map(|b| b.name.as_str()).unwrap_or_default())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.update_bucket(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_notification_config(
        &self,
        req: DeleteNotificationConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.delete_notification_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_notification_config(
        &self,
        req: GetNotificationConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<NotificationConfig>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_notification_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_notification_config(
        &self,
        req: CreateNotificationConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<NotificationConfig>, Status> {
        let setting = retry.unwrap_or_else(RetrySetting::none);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.create_notification_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Fetches a single page of notification configs.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_notification_configs_page(
        &self,
        req: ListNotificationConfigsRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ListNotificationConfigsResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.list_notification_configs(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Concatenates source objects into the destination object.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn compose_object(
        &self,
        req: ComposeObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Object>, Status> {
        let setting = retry.unwrap_or_else(|| retry_if(req.if_generation_match.is_some()));
        let param_string = params(&[("bucket", req.destination.as_ref().map(|o| o.bucket.as_str()).unwrap_or_default())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.compose_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Deletes an object, or one generation of it when `generation` is set.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_object(
        &self,
        req: DeleteObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        let setting = retry.unwrap_or_else(|| retry_if(req.generation != 0 || req.if_generation_match.is_some()));
        let param_string = params(&[("bucket", req.bucket.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.delete_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Restores a soft-deleted object.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn restore_object(
        &self,
        req: RestoreObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Object>, Status> {
        let setting = retry.unwrap_or_else(RetrySetting::none);
        let param_string = params(&[("bucket", req.bucket.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.restore_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Abandons a resumable write. Later writes with the same upload id fail.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn cancel_resumable_write(
        &self,
        req: CancelResumableWriteRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<CancelResumableWriteResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.upload_id))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.cancel_resumable_write(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_object(
        &self,
        req: GetObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Object>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", req.bucket.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_object(
        &self,
        req: UpdateObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Object>, Status> {
        let setting = retry.unwrap_or_else(|| retry_if(req.if_metageneration_match.is_some()));
        let param_string = params(&[("bucket", req.object.as_ref().map(|o| o.bucket.as_str()).unwrap_or_default())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.update_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Fetches a single page of objects.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_objects_page(
        &self,
        req: ListObjectsRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ListObjectsResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.list_objects(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Copies at most `max_bytes_rewritten_per_call` bytes. Call again with the returned `rewrite_token` until `done`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn rewrite_object(
        &self,
        req: RewriteObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<RewriteResponse>, Status> {
        let setting = retry.unwrap_or_else(|| retry_if(req.if_generation_match.is_some()));
        let param_string = params(&[("source_bucket", req.source_bucket.as_str()), ("bucket", req.destination_bucket.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.rewrite_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Starts a resumable write and returns its upload id.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn start_resumable_write(
        &self,
        req: StartResumableWriteRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<StartResumableWriteResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", spec_bucket(req.write_object_spec.as_ref()))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.start_resumable_write(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Reports the persisted size of a resumable write, or the object once finalized.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn query_write_status(
        &self,
        req: QueryWriteStatusRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<QueryWriteStatusResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.upload_id))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.query_write_status(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Renames an object within a bucket with hierarchical namespace.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn move_object(
        &self,
        req: MoveObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Object>, Status> {
        let setting = retry.unwrap_or_else(RetrySetting::none);
        let param_string = params(&[("bucket", req.bucket.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.move_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_service_account(
        &self,
        req: GetServiceAccountRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ServiceAccount>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("project", req.project.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_service_account(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Creates an HMAC key. The secret is only returned here.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_hmac_key(
        &self,
        req: CreateHmacKeyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<CreateHmacKeyResponse>, Status> {
        let setting = retry.unwrap_or_else(RetrySetting::none);
        let param_string = params(&[("project", req.project.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.create_hmac_key(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_hmac_key(
        &self,
        req: DeleteHmacKeyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("project", req.project.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.delete_hmac_key(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_hmac_key(
        &self,
        req: GetHmacKeyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<HmacKeyMetadata>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("project", req.project.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_hmac_key(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_hmac_keys_page(
        &self,
        req: ListHmacKeysRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ListHmacKeysResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("project", req.project.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.list_hmac_keys(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_hmac_key(
        &self,
        req: UpdateHmacKeyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<HmacKeyMetadata>, Status> {
        let setting = retry.unwrap_or_else(|| retry_if(req.hmac_key.as_ref().is_some_and(|k| !k.etag.is_empty())));
        let param_string = params(&[("project", req.hmac_key.as_ref().map(|k| k.project.as_str()).unwrap_or_default())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.update_hmac_key(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Fetches a single page of buckets.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_buckets_page(
        &self,
        req: ListBucketsRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ListBucketsResponse>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("project", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.list_buckets(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Opens a read stream. Retries cover establishing the stream only, see [`StorageClient::download_object`] for a resuming reader.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn read_object(
        &self,
        req: ReadObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Streaming<ReadObjectResponse>>, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        let param_string = params(&[("bucket", req.bucket.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.read_object(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Lists every bucket of the project, following `next_page_token`.
    pub async fn list_buckets(
        &self,
        mut req: ListBucketsRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Vec<Bucket>, Status> {
        let mut all = vec![];
        //eager loading
        loop {
            let response = self
                .list_buckets_page(req.clone(), cancel.clone(), retry.clone())
                .await?
                .into_inner();
            all.extend(response.buckets);
            if response.next_page_token.is_empty() {
                return Ok(all);
            }
            req.page_token = response.next_page_token;
        }
    }

    /// Lists every object under `parent`. Objects and prefixes of all pages are
    /// concatenated and the returned `next_page_token` is empty.
    pub async fn list_objects(
        &self,
        mut req: ListObjectsRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<ListObjectsResponse, Status> {
        let mut all = ListObjectsResponse::default();
        loop {
            let response = self
                .list_objects_page(req.clone(), cancel.clone(), retry.clone())
                .await?
                .into_inner();
            all.objects.extend(response.objects);
            all.prefixes.extend(response.prefixes);
            if response.next_page_token.is_empty() {
                return Ok(all);
            }
            req.page_token = response.next_page_token;
        }
    }

    pub async fn list_notification_configs(
        &self,
        mut req: ListNotificationConfigsRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Vec<NotificationConfig>, Status> {
        let mut all = vec![];
        loop {
            let response = self
                .list_notification_configs_page(req.clone(), cancel.clone(), retry.clone())
                .await?
                .into_inner();
            all.extend(response.notification_configs);
            if response.next_page_token.is_empty() {
                return Ok(all);
            }
            req.page_token = response.next_page_token;
        }
    }

    pub async fn list_hmac_keys(
        &self,
        mut req: ListHmacKeysRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Vec<HmacKeyMetadata>, Status> {
        let mut all = vec![];
        loop {
            let response = self
                .list_hmac_keys_page(req.clone(), cancel.clone(), retry.clone())
                .await?
                .into_inner();
            all.extend(response.hmac_keys);
            if response.next_page_token.is_empty() {
                return Ok(all);
            }
            req.page_token = response.next_page_token;
        }
    }

    /// Opens a bidi read stream. `first` must carry the `read_object_spec`;
    /// `rest` supplies further range requests.
    ///
    /// The request stream is consumed, so the call is never retried.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn bidi_read_object<S>(
        &self,
        first: BidiReadObjectRequest,
        rest: S,
        cancel: Option<CancellationToken>,
    ) -> Result<Response<Streaming<BidiReadObjectResponse>>, Status>
    where
        S: Stream<Item = BidiReadObjectRequest> + Send + 'static,
    {
        let bucket = first
            .read_object_spec
            .as_ref()
            .map(|s| s.bucket.as_str())
            .unwrap_or_default();
        let request = create_streaming_request(params(&[("bucket", bucket)]), tokio_stream::once(first).chain(rest));
        let mut client = self.client();
        cancellable(cancel, client.bidi_read_object(request)).await
    }

    /// Streams an object upload. `first` must carry either an upload id or a
    /// write spec. The service replies once, after the request stream ends.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn write_object<S>(
        &self,
        first: WriteObjectRequest,
        rest: S,
        cancel: Option<CancellationToken>,
    ) -> Result<Response<WriteObjectResponse>, Status>
    where
        S: Stream<Item = WriteObjectRequest> + Send + 'static,
    {
        let param_string = write_params(first.first_message.as_ref());
        let request = create_streaming_request(param_string, tokio_stream::once(first).chain(rest));
        let mut client = self.client();
        cancellable(cancel, client.write_object(request)).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn bidi_write_object<S>(
        &self,
        first: BidiWriteObjectRequest,
        rest: S,
        cancel: Option<CancellationToken>,
    ) -> Result<Response<Streaming<BidiWriteObjectResponse>>, Status>
    where
        S: Stream<Item = BidiWriteObjectRequest> + Send + 'static,
    {
        let param_string = bidi_write_params(first.first_message.as_ref());
        let request = create_streaming_request(param_string, tokio_stream::once(first).chain(rest));
        let mut client = self.client();
        cancellable(cancel, client.bidi_write_object(request)).await
    }

    /// Reads a whole object or range into memory.
    ///
    /// Chunk checksums are verified when the service sends them, and so is the
    /// full object checksum when the entire object was requested. A mismatch is
    /// reported as `DataLoss`. A stream broken by a retryable error is reopened
    /// after the bytes already received, pinned to the generation first seen.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn download_object(
        &self,
        req: ReadObjectRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<DownloadedObject, Status> {
        let setting = retry.unwrap_or_else(default_retry_setting);
        cancellable(cancel, self.download(req, setting)).await
    }

    async fn download(&self, mut req: ReadObjectRequest, setting: RetrySetting) -> Result<DownloadedObject, Status> {
        let whole_object = req.read_offset == 0 && req.read_limit == 0;
        let range = ReadRange::new(req.read_offset, req.read_limit);
        let mut data = BytesMut::new();
        let mut metadata: Option<Object> = None;
        let mut object_crc32c: Option<u32> = None;
        let mut strategy = setting.strategy();
        loop {
            let mut stream = self
                .read_object(req.clone(), None, Some(setting.clone()))
                .await?
                .into_inner();
            let status = loop {
                let response = match stream.message().await {
                    Ok(Some(response)) => response,
                    Ok(None) => return finish(whole_object, object_crc32c, metadata, data),
                    Err(status) => break status,
                };
                if metadata.is_none() {
                    metadata = response.metadata;
                }
                if object_crc32c.is_none() {
                    object_crc32c = response.object_checksums.and_then(|c| c.crc32c);
                }
                if let Some(chunk) = response.checksummed_data {
                    if let Some(expected) = chunk.crc32c {
                        let actual = crc32c::crc32c(&chunk.content);
                        if actual != expected {
                            return Err(Status::data_loss(format!(
                                "chunk crc32c mismatch at byte {} of the range: expected {expected}, got {actual}",
                                data.len()
                            )));
                        }
                    }
                    data.extend_from_slice(&chunk.content);
                    range.check(data.len() as i64)?;
                }
            };
            if !setting.should_retry(&status) {
                return Err(status);
            }
            let size = metadata.as_ref().map(|o| o.size);
            let next = match range.advance(data.len() as i64, size)? {
                // everything requested already arrived
                None => return finish(whole_object, object_crc32c, metadata, data),
                Some(next) => next,
            };
            match strategy.next() {
                None => return Err(status),
                Some(duration) => {
                    tracing::debug!("resuming read at {} after {:?}: {}", data.len(), duration, status.message());
                    tokio::time::sleep(duration).await
                }
            }
            req.read_offset = next.offset;
            req.read_limit = next.limit.unwrap_or(0);
            if let Some(object) = &metadata {
                req.generation = object.generation;
            }
        }
    }
}

fn finish(
    whole_object: bool,
    object_crc32c: Option<u32>,
    metadata: Option<Object>,
    data: BytesMut,
) -> Result<DownloadedObject, Status> {
    if let (true, Some(expected)) = (whole_object, object_crc32c) {
        let actual = crc32c::crc32c(&data);
        if actual != expected {
            return Err(Status::data_loss(format!(
                "object crc32c mismatch: expected {expected}, got {actual}"
            )));
        }
    }
    Ok(DownloadedObject {
        metadata,
        data: data.freeze(),
    })
}

/// The part of an object a read still owes.
///
/// A negative offset counts back from the end of the object. `limit` is `None`
/// when the read runs to the end of the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ReadRange {
    offset: i64,
    limit: Option<i64>,
}

impl ReadRange {
    fn new(read_offset: i64, read_limit: i64) -> Self {
        let limit = match (read_offset < 0, read_limit) {
            (true, 0) => Some(-read_offset),
            (true, limit) => Some(limit.min(-read_offset)),
            (false, 0) => None,
            (false, limit) => Some(limit),
        };
        Self {
            offset: read_offset,
            limit,
        }
    }

    fn check(&self, received: i64) -> Result<(), Status> {
        match self.limit {
            Some(limit) if received > limit => Err(over_read(received, limit)),
            _ => Ok(()),
        }
    }

    /// Range left after `received` bytes, or `None` once nothing is owed.
    ///
    /// `object_size` resolves a tail read to an absolute offset.
    fn advance(&self, received: i64, object_size: Option<i64>) -> Result<Option<Self>, Status> {
        let (offset, limit) = match (self.offset < 0, object_size) {
            (true, Some(size)) => {
                let start = (size + self.offset).max(0);
                (start, self.limit.map(|limit| limit.min(size - start)))
            }
            _ => (self.offset, self.limit),
        };
        match limit {
            Some(limit) if received > limit => Err(over_read(received, limit)),
            Some(limit) if received == limit => Ok(None),
            Some(limit) => Ok(Some(Self {
                offset: offset + received,
                limit: Some(limit - received),
            })),
            None => Ok(Some(Self {
                offset: offset + received,
                limit: None,
            })),
        }
    }
}

fn over_read(received: i64, limit: i64) -> Status {
    Status::data_loss(format!("over-read: received {received} bytes of a {limit} byte range"))
}

#[cfg(test)]
mod tests {
    use super::ReadRange;
    use google_cloud_gax::grpc::Code;

    #[test]
    fn test_read_range_bounded() {
        let range = ReadRange::new(10, 8);
        assert_eq!(range.limit, Some(8));
        assert_eq!(
            range.advance(3, None).unwrap(),
            Some(ReadRange {
                offset: 13,
                limit: Some(5)
            })
        );
        assert_eq!(range.advance(8, Some(100)).unwrap(), None);
        assert_eq!(range.advance(9, None).unwrap_err().code(), Code::DataLoss);
        assert_eq!(range.check(9).unwrap_err().code(), Code::DataLoss);
        assert!(range.check(8).is_ok());
    }

    #[test]
    fn test_read_range_unbounded() {
        let range = ReadRange::new(0, 0);
        assert_eq!(range.limit, None);
        assert_eq!(
            range.advance(8, Some(20)).unwrap(),
            Some(ReadRange { offset: 8, limit: None })
        );
        assert!(range.check(i64::MAX).is_ok());
    }

    #[test]
    fn test_read_range_tail() {
        let range = ReadRange::new(-10, 0);
        assert_eq!(range.limit, Some(10));
        // resolved against the object size
        assert_eq!(
            range.advance(4, Some(30)).unwrap(),
            Some(ReadRange {
                offset: 24,
                limit: Some(6)
            })
        );
        assert_eq!(
            range.advance(4, None).unwrap(),
            Some(ReadRange {
                offset: -6,
                limit: Some(6)
            })
        );
        assert_eq!(range.advance(10, None).unwrap(), None);
        // the object is shorter than the tail
        assert_eq!(range.advance(6, Some(6)).unwrap(), None);

        let range = ReadRange::new(-10, 4);
        assert_eq!(range.limit, Some(4));
        assert_eq!(range.advance(4, Some(30)).unwrap(), None);
    }
}
