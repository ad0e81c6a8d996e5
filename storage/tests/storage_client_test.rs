use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serial_test::serial;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_stream::Stream;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status};

use google_cloud_googleapis::storage::v2::storage_server::{Storage, StorageServer};
use google_cloud_googleapis::storage::v2::{
    BidiReadObjectResponse, BidiWriteObjectResponse, Bucket, ChecksummedData, CreateNotificationConfigRequest,
    GetBucketRequest, GetObjectRequest, ListObjectsRequest, ListObjectsResponse, NotificationConfig, Object,
    ObjectChecksums, QueryWriteStatusRequest, QueryWriteStatusResponse, ReadObjectRequest, ReadObjectResponse,
    RewriteObjectRequest, RewriteResponse,
};
use google_cloud_gax::conn::{ConnectionOptions, Environment};
use google_cloud_gax::retry::RetrySetting;
use gcloud_storage_grpc::apiv2::conn_pool::ConnectionManager;
use gcloud_storage_grpc::apiv2::storage_client::StorageClient;

type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send + 'static>>;

const BUCKET: &str = "projects/_/buckets/my-bucket";
const ENCODED_BUCKET: &str = "projects%2F_%2Fbuckets%2Fmy-bucket";
const GENERATION: i64 = 5;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[derive(Default)]
struct State {
    params: Vec<(&'static str, String)>,
    get_bucket_calls: usize,
    notification_calls: usize,
    reads: Vec<(i64, i64, i64)>,
}

#[derive(Clone, Default)]
struct FakeStorage {
    state: Arc<Mutex<State>>,
    /// Number of `Unavailable` replies before a call succeeds.
    unavailable: usize,
    content: Vec<u8>,
    /// Breaks the first read stream after this many chunks.
    break_after_chunks: Option<usize>,
    corrupt_chunk: bool,
    corrupt_object: bool,
    /// Serves the rest of the object regardless of `read_limit`.
    ignore_limit: bool,
}

impl FakeStorage {
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
impl Storage for FakeStorage {
    type ReadObjectStream = ResponseStream<ReadObjectResponse>;
    type BidiReadObjectStream = ResponseStream<BidiReadObjectResponse>;
    type BidiWriteObjectStream = ResponseStream<BidiWriteObjectResponse>;

    async fn get_bucket(&self, request: Request<GetBucketRequest>) -> Result<Response<Bucket>, Status> {
        self.record("GetBucket", &request);
        let calls = {
            let mut state = self.state.lock().unwrap();
            state.get_bucket_calls += 1;
            state.get_bucket_calls
        };
        if calls <= self.unavailable {
            return Err(Status::unavailable("try again"));
        }
        Ok(Response::new(Bucket {
            name: request.into_inner().name,
            ..Default::default()
        }))
    }

    async fn create_notification_config(
        &self,
        request: Request<CreateNotificationConfigRequest>,
    ) -> Result<Response<NotificationConfig>, Status> {
        self.record("CreateNotificationConfig", &request);
        self.state.lock().unwrap().notification_calls += 1;
        Err(Status::unavailable("try again"))
    }

    async fn get_object(&self, request: Request<GetObjectRequest>) -> Result<Response<Object>, Status> {
        self.record("GetObject", &request);
        let request = request.into_inner();
        Ok(Response::new(Object {
            bucket: request.bucket,
            name: request.object,
            generation: GENERATION,
            ..Default::default()
        }))
    }

    async fn read_object(
        &self,
        request: Request<ReadObjectRequest>,
    ) -> Result<Response<Self::ReadObjectStream>, Status> {
        self.record("ReadObject", &request);
        let request = request.into_inner();
        let first_read = {
            let mut state = self.state.lock().unwrap();
            state
                .reads
                .push((request.read_offset, request.read_limit, request.generation));
            state.reads.len() == 1
        };
        let size = self.content.len() as i64;
        let start = if request.read_offset < 0 {
            (size + request.read_offset).max(0)
        } else {
            request.read_offset
        };
        let end = if request.read_limit > 0 && !self.ignore_limit {
            (start + request.read_limit).min(size)
        } else {
            size
        };
        let (start, end) = (start as usize, end as usize);
        let mut object_crc32c = crc32c::crc32c(&self.content);
        if self.corrupt_object {
            object_crc32c ^= 1;
        }

        let mut responses = vec![];
        let chunks = self.content[start..end].chunks(4);
        let count = chunks.len();
        for (i, chunk) in chunks.enumerate() {
            if first_read && self.break_after_chunks == Some(i) {
                responses.push(Err(Status::unavailable("connection reset")));
                break;
            }
            let mut crc32c = crc32c::crc32c(chunk);
            if self.corrupt_chunk {
                crc32c ^= 1;
            }
            responses.push(Ok(ReadObjectResponse {
                checksummed_data: Some(ChecksummedData {
                    content: chunk.to_vec(),
                    crc32c: Some(crc32c),
                }),
                object_checksums: (i == 0).then_some(ObjectChecksums {
                    crc32c: Some(object_crc32c),
                    ..Default::default()
                }),
                metadata: (i == 0).then(|| Object {
                    name: "my-object".to_string(),
                    generation: GENERATION,
                    size: self.content.len() as i64,
                    ..Default::default()
                }),
                ..Default::default()
            }));
        }
        if first_read && self.break_after_chunks == Some(count) {
            responses.push(Err(Status::unavailable("connection reset")));
        }
        Ok(Response::new(Box::pin(tokio_stream::iter(responses)) as Self::ReadObjectStream))
    }

    async fn list_objects(
        &self,
        request: Request<ListObjectsRequest>,
    ) -> Result<Response<ListObjectsResponse>, Status> {
        self.record("ListObjects", &request);
        let request = request.into_inner();
        let response = match request.page_token.as_str() {
            "" => ListObjectsResponse {
                objects: vec![
                    Object {
                        name: "a.txt".to_string(),
                        ..Default::default()
                    },
                    Object {
                        name: "b.txt".to_string(),
                        ..Default::default()
                    },
                ],
                prefixes: vec!["logs/".to_string()],
                next_page_token: "page-2".to_string(),
            },
            "page-2" => ListObjectsResponse {
                objects: vec![Object {
                    name: "c.txt".to_string(),
                    ..Default::default()
                }],
                prefixes: vec!["tmp/".to_string()],
                next_page_token: "".to_string(),
            },
            other => return Err(Status::invalid_argument(format!("bad page token {other}"))),
        };
        Ok(Response::new(response))
    }

    async fn rewrite_object(
        &self,
        request: Request<RewriteObjectRequest>,
    ) -> Result<Response<RewriteResponse>, Status> {
        self.record("RewriteObject", &request);
        Ok(Response::new(RewriteResponse {
            done: true,
            ..Default::default()
        }))
    }

    async fn query_write_status(
        &self,
        request: Request<QueryWriteStatusRequest>,
    ) -> Result<Response<QueryWriteStatusResponse>, Status> {
        self.record("QueryWriteStatus", &request);
        Ok(Response::new(QueryWriteStatusResponse::default()))
    }
}

async fn client(fake: FakeStorage) -> StorageClient {
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

fn fast_retry() -> RetrySetting {
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
async fn test_routing_header() {
    let fake = FakeStorage::default();
    let client = client(fake.clone()).await;

    let object = client
        .get_object(
            GetObjectRequest {
                bucket: BUCKET.to_string(),
                object: "my-object".to_string(),
                ..Default::default()
            },
            None,
            None,
        )
        .await
        .unwrap()
        .into_inner();
    assert_eq!(object.name, "my-object");
    assert_eq!(fake.params("GetObject"), vec![format!("bucket={ENCODED_BUCKET}")]);

    client
        .rewrite_object(
            RewriteObjectRequest {
                destination_name: "copy".to_string(),
                destination_bucket: BUCKET.to_string(),
                source_bucket: "projects/_/buckets/src".to_string(),
                source_object: "my-object".to_string(),
                ..Default::default()
            },
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        fake.params("RewriteObject"),
        vec![format!("source_bucket=projects%2F_%2Fbuckets%2Fsrc&bucket={ENCODED_BUCKET}")]
    );

    client
        .query_write_status(
            QueryWriteStatusRequest {
                upload_id: format!("{BUCKET}/blobs/upload-1"),
                ..Default::default()
            },
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(fake.params("QueryWriteStatus"), vec![format!("bucket={ENCODED_BUCKET}")]);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_list_objects_follows_page_tokens() {
    let fake = FakeStorage::default();
    let client = client(fake.clone()).await;

    let request = ListObjectsRequest {
        parent: BUCKET.to_string(),
        delimiter: "/".to_string(),
        ..Default::default()
    };
    let page = client
        .list_objects_page(request.clone(), None, None)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(page.objects.len(), 2);
    assert_eq!(page.next_page_token, "page-2");

    let all = client.list_objects(request, None, None).await.unwrap();
    let names: Vec<&str> = all.objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    assert_eq!(all.prefixes, vec!["logs/", "tmp/"]);
    assert!(all.next_page_token.is_empty());
    assert_eq!(fake.params("ListObjects").len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_retry_until_success() {
    let fake = FakeStorage {
        unavailable: 2,
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let bucket = client
        .get_bucket(
            GetBucketRequest {
                name: BUCKET.to_string(),
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap()
        .into_inner();
    assert_eq!(bucket.name, BUCKET);
    assert_eq!(fake.state.lock().unwrap().get_bucket_calls, 3);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_retry_gives_up() {
    let fake = FakeStorage {
        unavailable: 10,
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let status = client
        .get_bucket(
            GetBucketRequest {
                name: BUCKET.to_string(),
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);
    // first attempt and three retries
    assert_eq!(fake.state.lock().unwrap().get_bucket_calls, 4);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_non_idempotent_call_is_not_retried() {
    let fake = FakeStorage::default();
    let client = client(fake.clone()).await;

    let status = client
        .create_notification_config(
            CreateNotificationConfigRequest {
                parent: BUCKET.to_string(),
                notification_config: Some(NotificationConfig {
                    topic: "//pubsub.googleapis.com/projects/p/topics/t".to_string(),
                    ..Default::default()
                }),
            },
            None,
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(fake.state.lock().unwrap().notification_calls, 1);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_download_object() {
    let content: Vec<u8> = (0..10u8).collect();
    let fake = FakeStorage {
        content: content.clone(),
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let downloaded = client
        .download_object(
            ReadObjectRequest {
                bucket: BUCKET.to_string(),
                object: "my-object".to_string(),
                ..Default::default()
            },
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(downloaded.data.as_ref(), content.as_slice());
    assert_eq!(downloaded.metadata.unwrap().generation, GENERATION);

    let range = client
        .download_object(
            ReadObjectRequest {
                bucket: BUCKET.to_string(),
                object: "my-object".to_string(),
                read_offset: 2,
                read_limit: 5,
                ..Default::default()
            },
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(range.data.as_ref(), &content[2..7]);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_download_object_checksum_mismatch() {
    let request = ReadObjectRequest {
        bucket: BUCKET.to_string(),
        object: "my-object".to_string(),
        ..Default::default()
    };

    let client1 = client(FakeStorage {
        content: b"hello world".to_vec(),
        corrupt_chunk: true,
        ..Default::default()
    })
    .await;
    let status = client1.download_object(request.clone(), None, None).await.unwrap_err();
    assert_eq!(status.code(), Code::DataLoss);

    let client2 = client(FakeStorage {
        content: b"hello world".to_vec(),
        corrupt_object: true,
        ..Default::default()
    })
    .await;
    let status = client2.download_object(request, None, None).await.unwrap_err();
    assert_eq!(status.code(), Code::DataLoss);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_download_object_resumes_after_broken_stream() {
    let content: Vec<u8> = (0..20u8).collect();
    let fake = FakeStorage {
        content: content.clone(),
        break_after_chunks: Some(2),
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let downloaded = client
        .download_object(
            ReadObjectRequest {
                bucket: BUCKET.to_string(),
                object: "my-object".to_string(),
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap();
    assert_eq!(downloaded.data.as_ref(), content.as_slice());

    let reads = fake.state.lock().unwrap().reads.clone();
    // the second read starts after the two chunks received and is pinned to the generation
    assert_eq!(reads, vec![(0, 0, 0), (8, 0, GENERATION)]);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_download_range_broken_after_last_byte() {
    let content: Vec<u8> = (0..20u8).collect();
    let fake = FakeStorage {
        content: content.clone(),
        break_after_chunks: Some(2),
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let downloaded = client
        .download_object(
            ReadObjectRequest {
                bucket: BUCKET.to_string(),
                object: "my-object".to_string(),
                read_offset: 4,
                read_limit: 8,
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap();
    assert_eq!(downloaded.data.as_ref(), &content[4..12]);
    // the range is complete so the stream is not reopened
    assert_eq!(fake.state.lock().unwrap().reads, vec![(4, 8, 0)]);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_download_tail_resumes_with_remaining_bytes() {
    let content: Vec<u8> = (0..20u8).collect();
    let fake = FakeStorage {
        content: content.clone(),
        break_after_chunks: Some(1),
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let downloaded = client
        .download_object(
            ReadObjectRequest {
                bucket: BUCKET.to_string(),
                object: "my-object".to_string(),
                read_offset: -10,
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap();
    assert_eq!(downloaded.data.as_ref(), &content[10..]);
    // resumed at an absolute offset once the object size is known
    assert_eq!(
        fake.state.lock().unwrap().reads,
        vec![(-10, 0, 0), (14, 6, GENERATION)]
    );
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_download_range_over_read() {
    let fake = FakeStorage {
        content: (0..20u8).collect(),
        ignore_limit: true,
        ..Default::default()
    };
    let client = client(fake.clone()).await;

    let status = client
        .download_object(
            ReadObjectRequest {
                bucket: BUCKET.to_string(),
                object: "my-object".to_string(),
                read_limit: 6,
                ..Default::default()
            },
            None,
            Some(fast_retry()),
        )
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::DataLoss);
    assert_eq!(fake.state.lock().unwrap().reads.len(), 1);
}
