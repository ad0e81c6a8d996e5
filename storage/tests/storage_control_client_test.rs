use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use prost::Message;
use serial_test::serial;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status};

use google_cloud_googleapis::iam::v1::{Policy, SetIamPolicyRequest};
use google_cloud_googleapis::longrunning::operations_server::{Operations, OperationsServer};
use google_cloud_googleapis::longrunning::{operation, GetOperationRequest, Operation as InternalOperation};
use google_cloud_googleapis::storage::control::v2::storage_control_server::{StorageControl, StorageControlServer};
use google_cloud_googleapis::storage::control::v2::{
    CreateFolderRequest, Folder, GetProjectIntelligenceConfigRequest, IntelligenceConfig, ListFoldersRequest,
    ListFoldersResponse, RenameFolderMetadata, RenameFolderRequest,
};
use gcloud_storage_grpc::client::{Client, ClientConfig};
use google_cloud_gax::conn::Environment;
use google_cloud_gax::retry::RetrySetting;

const BUCKET: &str = "projects/_/buckets/my-bucket";
const ENCODED_BUCKET: &str = "projects%2F_%2Fbuckets%2Fmy-bucket";

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[derive(Default)]
struct State {
    params: Vec<(&'static str, String)>,
    request_ids: Vec<String>,
    polls: usize,
    iam_calls: usize,
}

#[derive(Clone, Default)]
struct FakeControl {
    state: Arc<Mutex<State>>,
    /// Number of `Unavailable` replies to `CreateFolder` before it succeeds.
    unavailable: usize,
    /// Number of `Unavailable` replies to `SetIamPolicy` before it succeeds.
    iam_unavailable: usize,
}

impl FakeControl {
    fn record<T>(&self, method: &'static str, request: &Request<T>) {
        let value = request
            .metadata()
            .get("x-goog-request-params")
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        self.state.lock().unwrap().params.push((method, value));
    }

    fn params(&self, method: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .params
            .iter()
            .filter(|(m, _)| *m == method)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

#[tonic::async_trait]
impl StorageControl for FakeControl {
    async fn create_folder(&self, request: Request<CreateFolderRequest>) -> Result<Response<Folder>, Status> {
        self.record("CreateFolder", &request);
        let request = request.into_inner();
        let attempts = {
            let mut state = self.state.lock().unwrap();
            state.request_ids.push(request.request_id.clone());
            state.request_ids.len()
        };
        if attempts <= self.unavailable {
            return Err(Status::unavailable("try again"));
        }
        Ok(Response::new(Folder {
            name: format!("{}/folders/{}", request.parent, request.folder_id),
            metageneration: 1,
            ..Default::default()
        }))
    }

    async fn list_folders(
        &self,
        request: Request<ListFoldersRequest>,
    ) -> Result<Response<ListFoldersResponse>, Status> {
        self.record("ListFolders", &request);
        let request = request.into_inner();
        let folder = |name: &str| Folder {
            name: format!("{}/folders/{name}", request.parent),
            ..Default::default()
        };
        let response = match request.page_token.as_str() {
            "" => ListFoldersResponse {
                folders: vec![folder("a/"), folder("b/")],
                next_page_token: "next".to_string(),
            },
            _ => ListFoldersResponse {
                folders: vec![folder("c/")],
                next_page_token: "".to_string(),
            },
        };
        Ok(Response::new(response))
    }

    async fn rename_folder(&self, request: Request<RenameFolderRequest>) -> Result<Response<InternalOperation>, Status> {
        self.record("RenameFolder", &request);
        let request = request.into_inner();
        self.state.lock().unwrap().request_ids.push(request.request_id.clone());
        let metadata = RenameFolderMetadata {
            source_folder_id: "src/".to_string(),
            destination_folder_id: request.destination_folder_id,
            ..Default::default()
        };
        Ok(Response::new(InternalOperation {
            name: format!("{BUCKET}/operations/rename-1"),
            metadata: Some(prost_types::Any {
                type_url: "type.googleapis.com/google.storage.control.v2.RenameFolderMetadata".to_string(),
                value: metadata.encode_to_vec(),
            }),
            done: false,
            result: None,
        }))
    }

    async fn set_iam_policy(&self, request: Request<SetIamPolicyRequest>) -> Result<Response<Policy>, Status> {
        self.record("SetIamPolicy", &request);
        let calls = {
            let mut state = self.state.lock().unwrap();
            state.iam_calls += 1;
            state.iam_calls
        };
        if calls <= self.iam_unavailable {
            return Err(Status::unavailable("try again"));
        }
        let mut policy = request.into_inner().policy.unwrap_or_default();
        policy.etag = b"next".to_vec();
        Ok(Response::new(policy))
    }

    async fn get_project_intelligence_config(
        &self,
        request: Request<GetProjectIntelligenceConfigRequest>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        self.record("GetProjectIntelligenceConfig", &request);
        Ok(Response::new(IntelligenceConfig {
            name: request.into_inner().name,
            ..Default::default()
        }))
    }
}

#[tonic::async_trait]
impl Operations for FakeControl {
    async fn get_operation(&self, request: Request<GetOperationRequest>) -> Result<Response<InternalOperation>, Status> {
        self.record("GetOperation", &request);
        let polls = {
            let mut state = self.state.lock().unwrap();
            state.polls += 1;
            state.polls
        };
        let name = request.into_inner().name;
        if polls < 2 {
            return Ok(Response::new(InternalOperation {
                name,
                done: false,
                ..Default::default()
            }));
        }
        let folder = Folder {
            name: format!("{BUCKET}/folders/dst/"),
            metageneration: 2,
            ..Default::default()
        };
        Ok(Response::new(InternalOperation {
            name,
            done: true,
            metadata: None,
            result: Some(operation::Result::Response(prost_types::Any {
                type_url: "type.googleapis.com/google.storage.control.v2.Folder".to_string(),
                value: folder.encode_to_vec(),
            })),
        }))
    }
}

async fn client(fake: FakeControl) -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(StorageControlServer::new(fake.clone()))
            .add_service(OperationsServer::new(fake))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    let config = ClientConfig {
        pool_size: Some(2),
        environment: Environment::Emulator(addr.to_string()),
        project_id: Some("my-project".to_string()),
        ..Default::default()
    };
    Client::new(config).await.unwrap()
}

fn fast_retry() -> RetrySetting {
    RetrySetting {
        from_millis: 1,
        max_delay: Some(Duration::from_millis(5)),
        factor: 1,
        take: 3,
        codes: vec![Code::Unavailable, Code::DeadlineExceeded],
    }
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_create_folder_retries_with_same_request_id() {
    let fake = FakeControl {
        unavailable: 1,
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let folder = client
        .control()
        .create_folder(
            CreateFolderRequest {
                parent: BUCKET.to_string(),
                folder_id: "logs/".to_string(),
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap()
        .into_inner();
    assert_eq!(folder.name, format!("{BUCKET}/folders/logs/"));

    let request_ids = fake.state.lock().unwrap().request_ids.clone();
    assert_eq!(request_ids.len(), 2);
    assert!(!request_ids[0].is_empty());
    assert_eq!(request_ids[0], request_ids[1]);
    assert_eq!(fake.params("CreateFolder")[0], format!("bucket={ENCODED_BUCKET}"));

    // a caller supplied request id is kept
    client
        .control()
        .create_folder(
            CreateFolderRequest {
                parent: BUCKET.to_string(),
                folder_id: "tmp/".to_string(),
                request_id: "my-request".to_string(),
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap();
    assert_eq!(fake.state.lock().unwrap().request_ids[2], "my-request");
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_rename_folder_operation() {
    let fake = FakeControl::default();
    let client = client(fake.clone()).await;

    let mut operation = client
        .control()
        .rename_folder(
            RenameFolderRequest {
                name: format!("{BUCKET}/folders/src/"),
                destination_folder_id: "dst/".to_string(),
                ..Default::default()
            },
            None,
            None,
        )
        .await
        .unwrap();
    assert!(!operation.done());
    assert_eq!(operation.name(), format!("{BUCKET}/operations/rename-1"));
    let metadata = operation.decoded_metadata::<RenameFolderMetadata>().unwrap().unwrap();
    assert_eq!(metadata.destination_folder_id, "dst/");
    assert_eq!(fake.params("RenameFolder"), vec![format!("bucket={ENCODED_BUCKET}")]);
    assert!(!fake.state.lock().unwrap().request_ids[0].is_empty());

    let folder = operation.wait(None, Some(fast_retry())).await.unwrap().unwrap();
    assert_eq!(folder.name, format!("{BUCKET}/folders/dst/"));
    assert_eq!(folder.metageneration, 2);
    assert_eq!(fake.state.lock().unwrap().polls, 2);
    assert!(fake
        .params("GetOperation")
        .iter()
        .all(|p| p == &format!("bucket={ENCODED_BUCKET}")));
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_list_folders_and_intelligence_config() {
    let fake = FakeControl::default();
    let client = client(fake.clone()).await;
    assert_eq!(client.project_id(), Some("my-project"));
    assert_eq!(client.bucket_name("my-bucket"), "projects/my-project/buckets/my-bucket");

    let folders = client
        .control()
        .list_folders(
            ListFoldersRequest {
                parent: BUCKET.to_string(),
                ..Default::default()
            },
            None,
            None,
        )
        .await
        .unwrap();
    let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "projects/_/buckets/my-bucket/folders/a/",
            "projects/_/buckets/my-bucket/folders/b/",
            "projects/_/buckets/my-bucket/folders/c/",
        ]
    );

    let name = "projects/my-project/locations/global/intelligenceConfig";
    let config = client
        .control()
        .get_project_intelligence_config(
            GetProjectIntelligenceConfigRequest { name: name.to_string() },
            None,
            None,
        )
        .await
        .unwrap()
        .into_inner();
    assert_eq!(config.name, name);
    assert_eq!(
        fake.params("GetProjectIntelligenceConfig"),
        vec!["name=projects%2Fmy-project%2Flocations%2Fglobal%2FintelligenceConfig".to_string()]
    );
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_set_iam_policy_retries_only_with_etag() {
    let fake = FakeControl {
        iam_unavailable: 1,
        ..Default::default()
    };
    let client = client(fake.clone()).await;
    let request = |etag: &[u8]| SetIamPolicyRequest {
        resource: BUCKET.to_string(),
        policy: Some(Policy {
            version: 3,
            etag: etag.to_vec(),
            ..Default::default()
        }),
        ..Default::default()
    };

    let status = client
        .control()
        .set_iam_policy(request(b""), None, None)
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(fake.state.lock().unwrap().iam_calls, 1);

    fake.state.lock().unwrap().iam_calls = 0;
    let policy = client
        .control()
        .set_iam_policy(request(b"etag"), None, None)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(policy.etag, b"next".to_vec());
    assert_eq!(fake.state.lock().unwrap().iam_calls, 2);
    assert!(fake
        .params("SetIamPolicy")
        .iter()
        .all(|p| p == &format!("bucket={ENCODED_BUCKET}")));
}
