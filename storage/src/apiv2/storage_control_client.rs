use std::sync::Arc;

use google_cloud_gax::cancel::CancellationToken;
use google_cloud_gax::conn::Channel;
use google_cloud_gax::create_request;
use google_cloud_gax::grpc::{Response, Status};
use google_cloud_gax::retry::{invoke, RetrySetting};
use google_cloud_googleapis::iam::v1::{
    GetIamPolicyRequest, Policy, SetIamPolicyRequest, TestIamPermissionsRequest, TestIamPermissionsResponse,
};
use google_cloud_googleapis::storage::control::v2::storage_control_client::StorageControlClient as InternalStorageControlClient;
use google_cloud_googleapis::storage::control::v2::{
    AnywhereCache, CreateAnywhereCacheRequest, CreateFolderRequest, CreateManagedFolderRequest,
    DeleteFolderRequest, DeleteManagedFolderRequest, DisableAnywhereCacheRequest, Folder, GetAnywhereCacheRequest,
    GetFolderIntelligenceConfigRequest, GetFolderRequest, GetManagedFolderRequest,
    GetOrganizationIntelligenceConfigRequest, GetProjectIntelligenceConfigRequest, GetStorageLayoutRequest,
    IntelligenceConfig, ListAnywhereCachesRequest, ListAnywhereCachesResponse, ListFoldersRequest,
    ListFoldersResponse, ListManagedFoldersRequest, ListManagedFoldersResponse, ManagedFolder,
    PauseAnywhereCacheRequest, RenameFolderRequest, ResumeAnywhereCacheRequest, StorageLayout,
    UpdateAnywhereCacheRequest, UpdateFolderIntelligenceConfigRequest, UpdateOrganizationIntelligenceConfigRequest,
    UpdateProjectIntelligenceConfigRequest,
};
use google_cloud_longrunning::autogen::operations_client::OperationsClient;
use google_cloud_longrunning::longrunning::Operation;

use crate::apiv2::conn_pool::ConnectionManager;
use crate::apiv2::{default_control_retry_setting, ensure_request_id};
use crate::routing::{bucket_of, bucket_or_prefix, params};

/// `SetIamPolicy` is only replayed when an etag guards it.
fn retry_if(idempotent: bool) -> RetrySetting {
    if idempotent {
        default_control_retry_setting()
    } else {
        RetrySetting::none()
    }
}

fn operation_params(name: &str) -> String {
    params(&[("bucket", bucket_of(name))])
}

fn intelligence_config_name(config: Option<&IntelligenceConfig>) -> &str {
    config.map(|c| c.name.as_str()).unwrap_or_default()
}

/// Client for `google.storage.control.v2.StorageControl`.
///
/// Mutations get a random `request_id` when the caller leaves it empty, which
/// makes them safe to retry with the default setting.
#[derive(Clone, Debug)]
pub struct StorageControlClient {
    cm: Arc<ConnectionManager>,
    lro_client: OperationsClient,
}

impl StorageControlClient {
    pub fn new(cm: Arc<ConnectionManager>) -> Self {
        let lro_client = OperationsClient::new(cm.conn()).with_request_params(operation_params);
        Self { cm, lro_client }
    }

    #[inline]
    fn client(&self) -> InternalStorageControlClient<Channel> {
        InternalStorageControlClient::new(self.cm.conn())
    }

    /// Client used to poll the operations returned by this service.
    pub fn operations_client(&self) -> &OperationsClient {
        &self.lro_client
    }

    /// Creates a folder in a bucket with hierarchical namespace enabled.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_folder(
        &self,
        mut req: CreateFolderRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Folder>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.create_folder(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Deletes an empty folder.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_folder(
        &self,
        mut req: DeleteFolderRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.delete_folder(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_folder(
        &self,
        mut req: GetFolderRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Folder>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_folder(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Fetches a single page of folders.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_folders_page(
        &self,
        mut req: ListFoldersRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ListFoldersResponse>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.list_folders(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Renames a source folder to a destination folder.
    /// The returned operation resolves to the renamed folder; its metadata is a `RenameFolderMetadata`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn rename_folder(
        &self,
        mut req: RenameFolderRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Operation<Folder>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.rename_folder(request).await
        };
        invoke(cancel, Some(setting), action)
            .await
            .map(|d| Operation::new(self.lro_client.clone(), d.into_inner()))
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_storage_layout(
        &self,
        mut req: GetStorageLayoutRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<StorageLayout>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_storage_layout(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_managed_folder(
        &self,
        mut req: CreateManagedFolderRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ManagedFolder>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.create_managed_folder(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Deletes a managed folder. Non empty folders require `allow_non_empty`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_managed_folder(
        &self,
        mut req: DeleteManagedFolderRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<()>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.delete_managed_folder(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_managed_folder(
        &self,
        mut req: GetManagedFolderRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ManagedFolder>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_managed_folder(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_managed_folders_page(
        &self,
        mut req: ListManagedFoldersRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ListManagedFoldersResponse>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.list_managed_folders(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Creates an Anywhere Cache. The operation resolves to the cache once it is provisioned.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_anywhere_cache(
        &self,
        mut req: CreateAnywhereCacheRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Operation<AnywhereCache>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.create_anywhere_cache(request).await
        };
        invoke(cancel, Some(setting), action)
            .await
            .map(|d| Operation::new(self.lro_client.clone(), d.into_inner()))
    }

    /// Updates the fields named in `update_mask` of an Anywhere Cache.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_anywhere_cache(
        &self,
        mut req: UpdateAnywhereCacheRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Operation<AnywhereCache>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(req.anywhere_cache.as_ref().map(|c| c.name.as_str()).unwrap_or_default()))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.update_anywhere_cache(request).await
        };
        invoke(cancel, Some(setting), action)
            .await
            .map(|d| Operation::new(self.lro_client.clone(), d.into_inner()))
    }

    /// Disables an Anywhere Cache. It can be resumed until it is deleted.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn disable_anywhere_cache(
        &self,
        mut req: DisableAnywhereCacheRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<AnywhereCache>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.disable_anywhere_cache(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn pause_anywhere_cache(
        &self,
        mut req: PauseAnywhereCacheRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<AnywhereCache>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.pause_anywhere_cache(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn resume_anywhere_cache(
        &self,
        mut req: ResumeAnywhereCacheRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<AnywhereCache>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.resume_anywhere_cache(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_anywhere_cache(
        &self,
        mut req: GetAnywhereCacheRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<AnywhereCache>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_of(&req.name))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_anywhere_cache(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_anywhere_caches_page(
        &self,
        mut req: ListAnywhereCachesRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<ListAnywhereCachesResponse>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", req.parent.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.list_anywhere_caches(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_project_intelligence_config(
        &self,
        req: GetProjectIntelligenceConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("name", req.name.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_project_intelligence_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_project_intelligence_config(
        &self,
        mut req: UpdateProjectIntelligenceConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("intelligence_config.name", intelligence_config_name(req.intelligence_config.as_ref()))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.update_project_intelligence_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_folder_intelligence_config(
        &self,
        req: GetFolderIntelligenceConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("name", req.name.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_folder_intelligence_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_folder_intelligence_config(
        &self,
        mut req: UpdateFolderIntelligenceConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("intelligence_config.name", intelligence_config_name(req.intelligence_config.as_ref()))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.update_folder_intelligence_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Returns the Storage Intelligence config of an organization.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_organization_intelligence_config(
        &self,
        req: GetOrganizationIntelligenceConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("name", req.name.as_str())]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_organization_intelligence_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_organization_intelligence_config(
        &self,
        mut req: UpdateOrganizationIntelligenceConfigRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        ensure_request_id(&mut req.request_id);
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("intelligence_config.name", intelligence_config_name(req.intelligence_config.as_ref()))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.update_organization_intelligence_config(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Gets the IAM policy of a managed folder or bucket.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_iam_policy(
        &self,
        req: GetIamPolicyRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Response<Policy>, Status> {
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_or_prefix(&req.resource))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.get_iam_policy(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Retried by default only when the policy carries an etag.
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
        let setting = retry.unwrap_or_else(default_control_retry_setting);
        let param_string = params(&[("bucket", bucket_or_prefix(&req.resource))]);
        let action = || async {
            let mut client = self.client();
            let request = create_request(param_string.clone(), req.clone());
            client.test_iam_permissions(request).await
        };
        invoke(cancel, Some(setting), action).await
    }

    /// Lists every folder under `parent`, following `next_page_token`.
    pub async fn list_folders(
        &self,
        mut req: ListFoldersRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Vec<Folder>, Status> {
        let mut all = vec![];
        loop {
            let response = self
                .list_folders_page(req.clone(), cancel.clone(), retry.clone())
                .await?
                .into_inner();
            all.extend(response.folders);
            if response.next_page_token.is_empty() {
                return Ok(all);
            }
            req.page_token = response.next_page_token;
        }
    }

    pub async fn list_managed_folders(
        &self,
        mut req: ListManagedFoldersRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Vec<ManagedFolder>, Status> {
        let mut all = vec![];
        loop {
            let response = self
                .list_managed_folders_page(req.clone(), cancel.clone(), retry.clone())
                .await?
                .into_inner();
            all.extend(response.managed_folders);
            if response.next_page_token.is_empty() {
                return Ok(all);
            }
            req.page_token = response.next_page_token;
        }
    }

    pub async fn list_anywhere_caches(
        &self,
        mut req: ListAnywhereCachesRequest,
        cancel: Option<CancellationToken>,
        retry: Option<RetrySetting>,
    ) -> Result<Vec<AnywhereCache>, Status> {
        let mut all = vec![];
        loop {
            let response = self
                .list_anywhere_caches_page(req.clone(), cancel.clone(), retry.clone())
                .await?
                .into_inner();
            all.extend(response.anywhere_caches);
            if response.next_page_token.is_empty() {
                return Ok(all);
            }
            req.page_token = response.next_page_token;
        }
    }
}
