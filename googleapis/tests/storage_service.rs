use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use futures_util::{Stream, StreamExt};
use serial_test::serial;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Server};
use tonic::{Code, Request, Response, Status, Streaming};

use gcloud_googleapis::storage::v2::storage_client::StorageClient;
use gcloud_googleapis::storage::v2::storage_server::{Storage, StorageServer, SERVICE_NAME};
use gcloud_googleapis::storage::v2::{
    bidi_write_object_request, bidi_write_object_response, write_object_request, write_object_response,
    BidiWriteObjectRequest, BidiWriteObjectResponse, ChecksummedData, DeleteBucketRequest, GetObjectRequest, Object,
    ReadObjectRequest, ReadObjectResponse, WriteObjectRequest, WriteObjectResponse, WriteObjectSpec,
};

type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send + 'static>>;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[derive(Clone, Default)]
struct FakeStorage {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeStorage {
    fn record(&self, method: &'static str) {
        self.calls.lock().unwrap().push(method);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

fn bidi_write(
    mut inbound: Streaming<BidiWriteObjectRequest>,
) -> impl Stream<Item = Result<BidiWriteObjectResponse, Status>> {
    async_stream::try_stream! {
        let mut persisted = 0_i64;
        while let Some(request) = inbound.message().await? {
            if let Some(bidi_write_object_request::Data::ChecksummedData(data)) = request.data {
                persisted += data.content.len() as i64;
            }
            if request.finish_write {
                yield BidiWriteObjectResponse {
                    write_status: Some(bidi_write_object_response::WriteStatus::Resource(Object {
                        size: persisted,
                        ..Default::default()
                    })),
                    write_handle: None,
                };
            } else if request.flush || request.state_lookup {
                yield BidiWriteObjectResponse {
                    write_status: Some(bidi_write_object_response::WriteStatus::PersistedSize(persisted)),
                    write_handle: None,
                };
            }
        }
    }
}

#[tonic::async_trait]
impl Storage for FakeStorage {
    type ReadObjectStream = ResponseStream<ReadObjectResponse>;
    type BidiReadObjectStream = ResponseStream<gcloud_googleapis::storage::v2::BidiReadObjectResponse>;
    type BidiWriteObjectStream = ResponseStream<BidiWriteObjectResponse>;

    async fn get_object(&self, request: Request<GetObjectRequest>) -> Result<Response<Object>, Status> {
        self.record("GetObject");
        let request = request.into_inner();
        if request.object.is_empty() {
            return Err(Status::not_found("no such object"));
        }
        Ok(Response::new(Object {
            bucket: request.bucket,
            name: request.object,
            generation: 7,
            ..Default::default()
        }))
    }

    async fn read_object(
        &self,
        request: Request<ReadObjectRequest>,
    ) -> Result<Response<Self::ReadObjectStream>, Status> {
        self.record("ReadObject");
        let request = request.into_inner();
        let chunks: Vec<Result<ReadObjectResponse, Status>> = (0..request.read_limit)
            .map(|i| {
                Ok(ReadObjectResponse {
                    checksummed_data: Some(ChecksummedData {
                        content: vec![i as u8],
                        crc32c: None,
                    }),
                    ..Default::default()
                })
            })
            .collect();
        Ok(Response::new(Box::pin(tokio_stream::iter(chunks)) as Self::ReadObjectStream))
    }

    async fn write_object(
        &self,
        request: Request<Streaming<WriteObjectRequest>>,
    ) -> Result<Response<WriteObjectResponse>, Status> {
        self.record("WriteObject");
        let mut inbound = request.into_inner();
        let mut size = 0_i64;
        let mut finished = false;
        let mut resource = Object::default();
        while let Some(request) = inbound.message().await? {
            if let Some(write_object_request::FirstMessage::WriteObjectSpec(spec)) = request.first_message {
                resource = spec.resource.unwrap_or_default();
            }
            if let Some(write_object_request::Data::ChecksummedData(data)) = request.data {
                size += data.content.len() as i64;
            }
            finished = request.finish_write;
        }
        let write_status = if finished {
            resource.size = size;
            write_object_response::WriteStatus::Resource(resource)
        } else {
            write_object_response::WriteStatus::PersistedSize(size)
        };
        Ok(Response::new(WriteObjectResponse {
            write_status: Some(write_status),
        }))
    }

    async fn bidi_write_object(
        &self,
        request: Request<Streaming<BidiWriteObjectRequest>>,
    ) -> Result<Response<Self::BidiWriteObjectStream>, Status> {
        self.record("BidiWriteObject");
        Ok(Response::new(
            Box::pin(bidi_write(request.into_inner())) as Self::BidiWriteObjectStream
        ))
    }
}

async fn serve(storage: FakeStorage) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(StorageServer::new(storage))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

async fn connect(addr: SocketAddr) -> StorageClient<Channel> {
    StorageClient::connect(format!("http://{addr}")).await.unwrap()
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_dispatch_reaches_only_the_named_handler() {
    let storage = FakeStorage::default();
    let mut client = connect(serve(storage.clone()).await).await;

    let object = client
        .get_object(GetObjectRequest {
            bucket: "projects/_/buckets/my-bucket".to_string(),
            object: "my-object".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(object.bucket, "projects/_/buckets/my-bucket");
    assert_eq!(object.name, "my-object");
    assert_eq!(object.generation, 7);
    assert_eq!(storage.calls(), vec!["GetObject"]);

    let status = client.get_object(GetObjectRequest::default()).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_not_overridden_method_is_unimplemented() {
    let storage = FakeStorage::default();
    let mut client = connect(serve(storage.clone()).await).await;

    let status = client
        .delete_bucket(DeleteBucketRequest {
            name: "projects/_/buckets/my-bucket".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);
    assert!(storage.calls().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_unknown_method_is_unimplemented() {
    let addr = serve(FakeStorage::default()).await;
    let channel = Channel::from_shared(format!("http://{addr}")).unwrap().connect().await.unwrap();
    let mut grpc = tonic::client::Grpc::new(channel);
    grpc.ready().await.unwrap();
    let path = PathAndQuery::from_static("/google.storage.v2.Storage/NoSuchMethod");
    let result: Result<Response<Object>, Status> = grpc
        .unary(
            Request::new(GetObjectRequest::default()),
            path,
            tonic::codec::ProstCodec::default(),
        )
        .await;
    assert_eq!(result.unwrap_err().code(), Code::Unimplemented);
    assert_eq!(SERVICE_NAME, "google.storage.v2.Storage");
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_server_streaming_yields_zero_or_more() {
    let mut client = connect(serve(FakeStorage::default()).await).await;

    let mut stream = client
        .read_object(ReadObjectRequest {
            read_limit: 3,
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    let mut received = vec![];
    while let Some(response) = stream.message().await.unwrap() {
        received.extend(response.checksummed_data.unwrap().content);
    }
    assert_eq!(received, vec![0, 1, 2]);

    let mut stream = client.read_object(ReadObjectRequest::default()).await.unwrap().into_inner();
    assert!(stream.message().await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_client_streaming_yields_exactly_one() {
    let mut client = connect(serve(FakeStorage::default()).await).await;

    let requests = vec![
        WriteObjectRequest {
            first_message: Some(write_object_request::FirstMessage::WriteObjectSpec(WriteObjectSpec {
                resource: Some(Object {
                    bucket: "projects/_/buckets/my-bucket".to_string(),
                    name: "my-object".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            })),
            data: Some(write_object_request::Data::ChecksummedData(ChecksummedData {
                content: b"hello ".to_vec(),
                crc32c: None,
            })),
            ..Default::default()
        },
        WriteObjectRequest {
            write_offset: 6,
            data: Some(write_object_request::Data::ChecksummedData(ChecksummedData {
                content: b"world".to_vec(),
                crc32c: None,
            })),
            finish_write: true,
            ..Default::default()
        },
    ];
    let response = client
        .write_object(tokio_stream::iter(requests))
        .await
        .unwrap()
        .into_inner();
    match response.write_status {
        Some(write_object_response::WriteStatus::Resource(object)) => {
            assert_eq!(object.name, "my-object");
            assert_eq!(object.size, 11);
        }
        other => panic!("unexpected write status {other:?}"),
    }

    // zero requests still produce one response
    let response = client
        .write_object(tokio_stream::iter(Vec::<WriteObjectRequest>::new()))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(
        response.write_status,
        Some(write_object_response::WriteStatus::PersistedSize(0))
    );
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_bidi_streaming_interleaves() {
    let mut client = connect(serve(FakeStorage::default()).await).await;

    let (tx, rx) = tokio::sync::mpsc::channel::<BidiWriteObjectRequest>(4);
    let mut responses = client
        .bidi_write_object(tokio_stream::wrappers::ReceiverStream::new(rx))
        .await
        .unwrap()
        .into_inner();

    tx.send(BidiWriteObjectRequest {
        first_message: Some(bidi_write_object_request::FirstMessage::UploadId("upload".to_string())),
        data: Some(bidi_write_object_request::Data::ChecksummedData(ChecksummedData {
            content: vec![0; 4],
            crc32c: None,
        })),
        flush: true,
        state_lookup: true,
        ..Default::default()
    })
    .await
    .unwrap();
    let first = responses.next().await.unwrap().unwrap();
    assert_eq!(
        first.write_status,
        Some(bidi_write_object_response::WriteStatus::PersistedSize(4))
    );

    tx.send(BidiWriteObjectRequest {
        write_offset: 4,
        data: Some(bidi_write_object_request::Data::ChecksummedData(ChecksummedData {
            content: vec![0; 2],
            crc32c: None,
        })),
        finish_write: true,
        ..Default::default()
    })
    .await
    .unwrap();
    drop(tx);

    let last = responses.next().await.unwrap().unwrap();
    match last.write_status {
        Some(bidi_write_object_response::WriteStatus::Resource(object)) => assert_eq!(object.size, 6),
        other => panic!("unexpected write status {other:?}"),
    }
    assert!(responses.next().await.is_none());
}
