use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use prost::Message;
use serial_test::serial;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status};

use google_cloud_gax::conn::{ConnectionManager, ConnectionOptions, Environment};
use google_cloud_gax::retry::RetrySetting;
use google_cloud_googleapis::longrunning::operations_server::{Operations, OperationsServer};
use google_cloud_googleapis::longrunning::{
    operation, CancelOperationRequest, GetOperationRequest, Operation as InternalOperation, OperationInfo,
};
use google_cloud_googleapis::rpc::Status as RpcStatus;
use gcloud_longrunning::autogen::operations_client::OperationsClient;
use gcloud_longrunning::longrunning::Operation;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[derive(Clone, Default)]
struct FakeOperations {
    polls: Arc<AtomicUsize>,
    done_after: usize,
    fail: bool,
    params: Arc<Mutex<Vec<String>>>,
}

#[tonic::async_trait]
impl Operations for FakeOperations {
    async fn get_operation(&self, request: Request<GetOperationRequest>) -> Result<Response<InternalOperation>, Status> {
        if let Some(v) = request.metadata().get("x-goog-request-params") {
            self.params.lock().unwrap().push(v.to_str().unwrap().to_string());
        }
        let polls = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
        let name = request.into_inner().name;
        if polls < self.done_after {
            return Ok(Response::new(InternalOperation {
                name,
                done: false,
                ..Default::default()
            }));
        }
        let result = if self.fail {
            operation::Result::Error(RpcStatus {
                code: Code::FailedPrecondition as i32,
                message: "folder is not empty".to_string(),
                details: vec![],
            })
        } else {
            operation::Result::Response(prost_types::Any {
                type_url: "type.googleapis.com/google.longrunning.OperationInfo".to_string(),
                value: OperationInfo {
                    response_type: "Folder".to_string(),
                    metadata_type: "RenameFolderMetadata".to_string(),
                }
                .encode_to_vec(),
            })
        };
        Ok(Response::new(InternalOperation {
            name,
            done: true,
            metadata: None,
            result: Some(result),
        }))
    }

    async fn cancel_operation(&self, _request: Request<CancelOperationRequest>) -> Result<Response<()>, Status> {
        Ok(Response::new(()))
    }
}

async fn client(fake: FakeOperations) -> OperationsClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(OperationsServer::new(fake))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    let cm = ConnectionManager::new(
        1,
        "",
        "",
        &Environment::Emulator(addr.to_string()),
        &ConnectionOptions::default(),
    )
    .await
    .unwrap();
    OperationsClient::new(cm.conn())
}

fn fast_wait() -> RetrySetting {
    RetrySetting {
        from_millis: 1,
        max_delay: Some(Duration::from_millis(5)),
        factor: 1,
        take: 5,
        codes: vec![Code::DeadlineExceeded],
    }
}

fn running(name: &str) -> InternalOperation {
    InternalOperation {
        name: name.to_string(),
        done: false,
        ..Default::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_wait_until_done() {
    let fake = FakeOperations {
        done_after: 3,
        ..Default::default()
    };
    let client = client(fake.clone()).await;
    let mut op = Operation::<OperationInfo>::new(client, running("operations/op-1"));
    assert!(!op.done());

    let info = op.wait(None, Some(fast_wait())).await.unwrap().unwrap();
    assert!(op.done());
    assert_eq!(info.response_type, "Folder");
    assert_eq!(fake.polls.load(Ordering::SeqCst), 3);
    assert_eq!(fake.params.lock().unwrap()[0], "name=operations/op-1");

    // a finished operation is not polled again
    assert!(op.poll().await.unwrap().is_some());
    assert_eq!(fake.polls.load(Ordering::SeqCst), 3);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_wait_gives_up() {
    let fake = FakeOperations {
        done_after: usize::MAX,
        ..Default::default()
    };
    let client = client(fake.clone()).await;
    let mut op = Operation::<OperationInfo>::new(client, running("operations/op-2"));
    let err = op.wait(None, Some(fast_wait())).await.unwrap_err();
    assert_eq!(err.code(), Code::DeadlineExceeded);
    assert_eq!(fake.polls.load(Ordering::SeqCst), 6);
    op.cancel().await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_operation_error_and_routing() {
    let fake = FakeOperations {
        done_after: 1,
        fail: true,
        ..Default::default()
    };
    let client = client(fake.clone())
        .await
        .with_request_params(|name| format!("bucket={}", name.split("/operations/").next().unwrap_or_default()));
    let mut op = Operation::<OperationInfo>::new(client, running("projects/_/buckets/b/operations/op-3"));
    let err = op.poll().await.unwrap_err();
    assert_eq!(err.code(), Code::FailedPrecondition);
    assert_eq!(err.message(), "folder is not empty");
    assert!(op.done());
    assert_eq!(fake.params.lock().unwrap()[0], "bucket=projects/_/buckets/b");
}
