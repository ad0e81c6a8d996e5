use std::net::SocketAddr;

use prost::Message;
use serial_test::serial;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status};

use gcloud_googleapis::longrunning::Operation;
use gcloud_googleapis::storage::control::v2::storage_control_client::StorageControlClient;
use gcloud_googleapis::storage::control::v2::storage_control_server::{
    StorageControl, StorageControlServer, SERVICE_NAME,
};
use gcloud_googleapis::storage::control::v2::{
    intelligence_config, GetFolderRequest, GetProjectIntelligenceConfigRequest, IntelligenceConfig,
    RenameFolderMetadata, RenameFolderRequest,
};

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

struct FakeControl;

#[tonic::async_trait]
impl StorageControl for FakeControl {
    async fn rename_folder(&self, request: Request<RenameFolderRequest>) -> Result<Response<Operation>, Status> {
        let request = request.into_inner();
        let metadata = RenameFolderMetadata {
            source_folder_id: request.name.rsplit("/folders/").next().unwrap_or_default().to_string(),
            destination_folder_id: request.destination_folder_id,
            ..Default::default()
        };
        Ok(Response::new(Operation {
            name: "projects/_/buckets/b/operations/rename-1".to_string(),
            metadata: Some(prost_types::Any {
                type_url: "type.googleapis.com/google.storage.control.v2.RenameFolderMetadata".to_string(),
                value: metadata.encode_to_vec(),
            }),
            done: false,
            result: None,
        }))
    }

    async fn get_project_intelligence_config(
        &self,
        request: Request<GetProjectIntelligenceConfigRequest>,
    ) -> Result<Response<IntelligenceConfig>, Status> {
        Ok(Response::new(IntelligenceConfig {
            name: request.into_inner().name,
            edition_config: intelligence_config::EditionConfig::Standard as i32,
            ..Default::default()
        }))
    }
}

async fn serve() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(StorageControlServer::new(FakeControl))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_rename_folder_returns_operation() {
    let addr = serve().await;
    let mut client = StorageControlClient::connect(format!("http://{addr}")).await.unwrap();

    let operation = client
        .rename_folder(RenameFolderRequest {
            name: "projects/_/buckets/b/folders/src/".to_string(),
            destination_folder_id: "dst/".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert!(!operation.done);
    let metadata = RenameFolderMetadata::decode(operation.metadata.unwrap().value.as_slice()).unwrap();
    assert_eq!(metadata.source_folder_id, "src/");
    assert_eq!(metadata.destination_folder_id, "dst/");
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_intelligence_config_and_defaults() {
    let addr = serve().await;
    let mut client = StorageControlClient::connect(format!("http://{addr}")).await.unwrap();

    let config = client
        .get_project_intelligence_config(GetProjectIntelligenceConfigRequest {
            name: "projects/p/locations/global/intelligenceConfig".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(config.edition_config(), intelligence_config::EditionConfig::Standard);

    let status = client
        .get_folder(GetFolderRequest {
            name: "projects/_/buckets/b/folders/src/".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);
    assert_eq!(SERVICE_NAME, "google.storage.control.v2.StorageControl");
}
