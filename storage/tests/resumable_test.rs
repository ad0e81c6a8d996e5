use std::collections::HashMap;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serial_test::serial;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_stream::Stream;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status, Streaming};

use google_cloud_googleapis::storage::v2::storage_server::{Storage, StorageServer};
use google_cloud_googleapis::storage::v2::{
    query_write_status_response, write_object_request, write_object_response, BidiReadObjectResponse,
    BidiWriteObjectResponse, CancelResumableWriteRequest, CancelResumableWriteResponse, Object, ObjectChecksums,
    QueryWriteStatusRequest, QueryWriteStatusResponse, ReadObjectResponse, StartResumableWriteRequest,
    StartResumableWriteResponse, WriteObjectRequest, WriteObjectResponse, WriteObjectSpec,
};
use google_cloud_gax::conn::{ConnectionOptions, Environment};
use google_cloud_gax::retry::RetrySetting;
use gcloud_storage_grpc::apiv2::conn_pool::ConnectionManager;
use gcloud_storage_grpc::apiv2::storage_client::StorageClient;
use gcloud_storage_grpc::resumable::ResumableWrite;

type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send + 'static>>;

const BUCKET: &str = "projects/_/buckets/my-bucket";

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[derive(Default)]
struct Upload {
    name: String,
    data: Vec<u8>,
    object: Option<Object>,
}

#[derive(Default)]
struct State {
    uploads: HashMap<String, Upload>,
    /// Number of writes that persist half of the new bytes and then fail.
    broken_writes: usize,
    write_calls: usize,
    query_calls: usize,
    write_params: Vec<String>,
}

#[derive(Clone, Default)]
struct FakeUploads {
    state: Arc<Mutex<State>>,
}

impl FakeUploads {
    fn data(&self, upload_id: &str) -> Vec<u8> {
        self.state.lock().unwrap().uploads[upload_id].data.clone()
    }
}

#[tonic::async_trait]
impl Storage for FakeUploads {
    type ReadObjectStream = ResponseStream<ReadObjectResponse>;
    type BidiReadObjectStream = ResponseStream<BidiReadObjectResponse>;
    type BidiWriteObjectStream = ResponseStream<BidiWriteObjectResponse>;

    async fn start_resumable_write(
        &self,
        request: Request<StartResumableWriteRequest>,
    ) -> Result<Response<StartResumableWriteResponse>, Status> {
        let resource = request
            .into_inner()
            .write_object_spec
            .and_then(|s| s.resource)
            .ok_or_else(|| Status::invalid_argument("no resource"))?;
        let mut state = self.state.lock().unwrap();
        let upload_id = format!("{}/blobs/upload-{}", resource.bucket, state.uploads.len() + 1);
        state.uploads.insert(
            upload_id.clone(),
            Upload {
                name: resource.name,
                ..Default::default()
            },
        );
        Ok(Response::new(StartResumableWriteResponse { upload_id }))
    }

    async fn write_object(
        &self,
        request: Request<Streaming<WriteObjectRequest>>,
    ) -> Result<Response<WriteObjectResponse>, Status> {
        let params = request
            .metadata()
            .get("x-goog-request-params")
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let mut inbound = request.into_inner();
        let mut upload_id = String::new();
        let mut start = None;
        let mut received = vec![];
        let mut finish = false;
        let mut checksums: Option<ObjectChecksums> = None;
        while let Some(request) = inbound.message().await? {
            if let Some(write_object_request::FirstMessage::UploadId(id)) = request.first_message {
                upload_id = id;
            }
            if start.is_none() {
                start = Some(request.write_offset as usize);
            }
            if let Some(write_object_request::Data::ChecksummedData(data)) = request.data {
                received.extend(data.content);
            }
            if request.finish_write {
                finish = true;
                checksums = request.object_checksums;
            }
        }

        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;
        state.write_params.push(params);
        let broken = state.broken_writes > 0;
        if broken {
            state.broken_writes -= 1;
        }
        let upload = state
            .uploads
            .get_mut(&upload_id)
            .ok_or_else(|| Status::not_found("no such upload"))?;
        let start = start.unwrap_or_default();
        if start > upload.data.len() {
            return Err(Status::out_of_range("write offset is past the persisted size"));
        }
        let fresh = &received[(upload.data.len() - start).min(received.len())..];
        if broken {
            let half = fresh.len() / 2;
            upload.data.extend_from_slice(&fresh[..half]);
            return Err(Status::unavailable("connection reset"));
        }
        upload.data.extend_from_slice(fresh);
        if !finish {
            return Ok(Response::new(WriteObjectResponse {
                write_status: Some(write_object_response::WriteStatus::PersistedSize(upload.data.len() as i64)),
            }));
        }
        let crc32c = crc32c::crc32c(&upload.data);
        if let Some(expected) = checksums.and_then(|c| c.crc32c) {
            if expected != crc32c {
                return Err(Status::invalid_argument("crc32c mismatch"));
            }
        }
        let object = Object {
            name: upload.name.clone(),
            bucket: BUCKET.to_string(),
            size: upload.data.len() as i64,
            checksums: Some(ObjectChecksums {
                crc32c: Some(crc32c),
                ..Default::default()
            }),
            ..Default::default()
        };
        upload.object = Some(object.clone());
        Ok(Response::new(WriteObjectResponse {
            write_status: Some(write_object_response::WriteStatus::Resource(object)),
        }))
    }

    async fn query_write_status(
        &self,
        request: Request<QueryWriteStatusRequest>,
    ) -> Result<Response<QueryWriteStatusResponse>, Status> {
        let upload_id = request.into_inner().upload_id;
        let mut state = self.state.lock().unwrap();
        state.query_calls += 1;
        let upload = state
            .uploads
            .get(&upload_id)
            .ok_or_else(|| Status::not_found("no such upload"))?;
        let write_status = match &upload.object {
            Some(object) => query_write_status_response::WriteStatus::Resource(object.clone()),
            None => query_write_status_response::WriteStatus::PersistedSize(upload.data.len() as i64),
        };
        Ok(Response::new(QueryWriteStatusResponse {
            write_status: Some(write_status),
        }))
    }

    async fn cancel_resumable_write(
        &self,
        request: Request<CancelResumableWriteRequest>,
    ) -> Result<Response<CancelResumableWriteResponse>, Status> {
        let upload_id = request.into_inner().upload_id;
        match self.state.lock().unwrap().uploads.remove(&upload_id) {
            Some(_) => Ok(Response::new(CancelResumableWriteResponse {})),
            None => Err(Status::not_found("no such upload")),
        }
    }
}

async fn client(fake: FakeUploads) -> StorageClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(StorageServer::new(fake))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    let cm = ConnectionManager::new(
        1,
        "",
        &Environment::Emulator(addr.to_string()),
        &ConnectionOptions::default(),
    )
    .await
    .unwrap();
    StorageClient::new(Arc::new(cm))
}

fn start_request(name: &str) -> StartResumableWriteRequest {
    StartResumableWriteRequest {
        write_object_spec: Some(WriteObjectSpec {
            resource: Some(Object {
                bucket: BUCKET.to_string(),
                name: name.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn fast_resume() -> RetrySetting {
    RetrySetting {
        from_millis: 1,
        max_delay: Some(Duration::from_millis(5)),
        factor: 1,
        take: 3,
        codes: vec![Code::Unavailable],
    }
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_upload_resumes_after_broken_write() {
    let fake = FakeUploads::default();
    let client = client(fake.clone()).await;

    let mut upload = ResumableWrite::start(client, start_request("greeting.txt"), None)
        .await
        .unwrap()
        .with_retry_setting(fast_resume());
    let upload_id = upload.upload_id().to_string();
    assert_eq!(upload_id, format!("{BUCKET}/blobs/upload-1"));

    assert_eq!(upload.write(b"hello ", None).await.unwrap(), 6);

    fake.state.lock().unwrap().broken_writes = 1;
    assert_eq!(upload.write(b"world, again", None).await.unwrap(), 18);
    assert_eq!(upload.persisted_size(), 18);

    let object = upload.finish(None).await.unwrap();
    assert_eq!(object.name, "greeting.txt");
    assert_eq!(object.size, 18);
    assert_eq!(
        object.checksums.and_then(|c| c.crc32c),
        Some(crc32c::crc32c(b"hello world, again"))
    );
    assert_eq!(fake.data(&upload_id), b"hello world, again");

    let state = fake.state.lock().unwrap();
    // the broken write, its replay, the first write and the final one
    assert_eq!(state.write_calls, 4);
    assert_eq!(state.query_calls, 1);
    assert!(state
        .write_params
        .iter()
        .all(|p| p == "bucket=projects%2F_%2Fbuckets%2Fmy-bucket"));
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_upload_gives_up_on_non_retryable_error() {
    let fake = FakeUploads::default();
    let client = client(fake.clone()).await;

    let mut upload = ResumableWrite::start(client, start_request("a.txt"), None)
        .await
        .unwrap()
        .with_retry_setting(RetrySetting::none());
    fake.state.lock().unwrap().broken_writes = 1;
    let status = upload.write(b"0123456789", None).await.unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(fake.state.lock().unwrap().query_calls, 0);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_resume_by_upload_id() {
    let fake = FakeUploads::default();
    let client = client(fake.clone()).await;

    let mut upload = ResumableWrite::start(client.clone(), start_request("b.txt"), None)
        .await
        .unwrap();
    upload.write(b"first half, ", None).await.unwrap();
    let upload_id = upload.upload_id().to_string();
    drop(upload);

    let mut resumed = ResumableWrite::resume(client, upload_id.clone(), None).await.unwrap();
    assert_eq!(resumed.persisted_size(), 12);
    resumed.write(b"second half", None).await.unwrap();
    let object = resumed.finish(None).await.unwrap();
    assert_eq!(object.size, 23);
    assert_eq!(fake.data(&upload_id), b"first half, second half");

    // finishing twice returns the same object without another write
    let calls = fake.state.lock().unwrap().write_calls;
    assert_eq!(resumed.finish(None).await.unwrap().size, 23);
    assert_eq!(fake.state.lock().unwrap().write_calls, calls);

    let status = resumed.write(b"more", None).await.unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_cancel_upload() {
    let fake = FakeUploads::default();
    let client = client(fake.clone()).await;

    let mut upload = ResumableWrite::start(client.clone(), start_request("c.txt"), None)
        .await
        .unwrap();
    upload.write(b"abc", None).await.unwrap();
    let upload_id = upload.upload_id().to_string();
    upload.cancel(None).await.unwrap();

    let status = ResumableWrite::resume(client, upload_id, None).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}
