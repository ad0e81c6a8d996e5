//! Resumable uploads on top of `StartResumableWrite`, `WriteObject`,
//! `QueryWriteStatus` and `CancelResumableWrite`.
//!
//! ```no_run
//! use google_cloud_googleapis::storage::v2::{Object, StartResumableWriteRequest, WriteObjectSpec};
//! use gcloud_storage_grpc::apiv2::storage_client::StorageClient;
//! use gcloud_storage_grpc::resumable::ResumableWrite;
//!
//! async fn run(client: StorageClient) -> Result<(), tonic::Status> {
//!     let req = StartResumableWriteRequest {
//!         write_object_spec: Some(WriteObjectSpec {
//!             resource: Some(Object {
//!                 bucket: "projects/_/buckets/my-bucket".to_string(),
//!                 name: "my-object".to_string(),
//!                 ..Default::default()
//!             }),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     };
//!     let mut upload = ResumableWrite::start(client, req, None).await?;
//!     upload.write(b"hello ", None).await?;
//!     upload.write(b"world", None).await?;
//!     let object = upload.finish(None).await?;
//!     println!("{} bytes", object.size);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use bytes::{Buf, BytesMut};

use google_cloud_gax::cancel::CancellationToken;
use google_cloud_gax::grpc::{Code, Status};
use google_cloud_gax::retry::RetrySetting;
use google_cloud_googleapis::storage::v2::{
    query_write_status_response, write_object_request, write_object_response, CancelResumableWriteRequest,
    ChecksummedData, Object, ObjectChecksums, QueryWriteStatusRequest, StartResumableWriteRequest,
    WriteObjectRequest,
};

use crate::apiv2::storage_client::StorageClient;

/// Largest `ChecksummedData` payload accepted in one `WriteObjectRequest`.
pub const MAX_WRITE_CHUNK_BYTES: usize = 2 * 1024 * 1024;

/// Codes after which the upload is resumed from the persisted size.
pub fn default_resume_setting() -> RetrySetting {
    RetrySetting {
        from_millis: 2,
        max_delay: Some(Duration::from_secs(60)),
        factor: 500,
        take: 8,
        codes: vec![
            Code::DeadlineExceeded,
            Code::Internal,
            Code::Unavailable,
            Code::ResourceExhausted,
        ],
    }
}

enum WriteStatus {
    PersistedSize(i64),
    Resource(Object),
}

impl From<write_object_response::WriteStatus> for WriteStatus {
    fn from(value: write_object_response::WriteStatus) -> Self {
        match value {
            write_object_response::WriteStatus::PersistedSize(size) => Self::PersistedSize(size),
            write_object_response::WriteStatus::Resource(object) => Self::Resource(object),
        }
    }
}

impl From<query_write_status_response::WriteStatus> for WriteStatus {
    fn from(value: query_write_status_response::WriteStatus) -> Self {
        match value {
            query_write_status_response::WriteStatus::PersistedSize(size) => Self::PersistedSize(size),
            query_write_status_response::WriteStatus::Resource(object) => Self::Resource(object),
        }
    }
}

/// Upload progress and the bytes not yet acknowledged by the service.
#[derive(Debug)]
struct UploadState {
    upload_id: String,
    persisted_size: i64,
    /// Bytes from `persisted_size` onwards that the service has not acknowledged.
    pending: BytesMut,
    /// CRC32C of every byte written, when the whole object went through this session.
    crc32c: Option<u32>,
    object: Option<Object>,
}

impl UploadState {
    fn new(upload_id: String, fresh: bool) -> Self {
        Self {
            upload_id,
            persisted_size: 0,
            pending: BytesMut::new(),
            crc32c: fresh.then_some(0),
            object: None,
        }
    }

    fn append(&mut self, data: &[u8]) {
        self.pending.extend_from_slice(data);
        if let Some(crc) = self.crc32c {
            self.crc32c = Some(crc32c::crc32c_append(crc, data));
        }
    }

    fn apply(&mut self, status: WriteStatus) -> Result<(), Status> {
        match status {
            WriteStatus::PersistedSize(size) => self.advance(size),
            WriteStatus::Resource(object) => {
                tracing::debug!("resumable write {} finalized with {} bytes", self.upload_id, object.size);
                self.persisted_size = object.size;
                self.pending.clear();
                self.object = Some(object);
                Ok(())
            }
        }
    }

    fn advance(&mut self, size: i64) -> Result<(), Status> {
        if size < self.persisted_size {
            return Err(Status::data_loss(format!(
                "persisted size went back from {} to {size}",
                self.persisted_size
            )));
        }
        let acknowledged = (size - self.persisted_size) as usize;
        if acknowledged > self.pending.len() {
            // resumed sessions do not know what was sent before
            if self.crc32c.is_some() {
                return Err(Status::data_loss(format!(
                    "service persisted {size} bytes but only {} were sent",
                    self.persisted_size + self.pending.len() as i64
                )));
            }
            self.pending.clear();
        } else {
            self.pending.advance(acknowledged);
        }
        self.persisted_size = size;
        Ok(())
    }

    fn requests(&self, finish: bool) -> Vec<WriteObjectRequest> {
        let mut requests: Vec<WriteObjectRequest> = self
            .pending
            .chunks(MAX_WRITE_CHUNK_BYTES)
            .scan(self.persisted_size, |offset, chunk| {
                let write_offset = *offset;
                *offset += chunk.len() as i64;
                Some(WriteObjectRequest {
                    write_offset,
                    data: Some(write_object_request::Data::ChecksummedData(ChecksummedData {
                        content: chunk.to_vec(),
                        crc32c: Some(crc32c::crc32c(chunk)),
                    })),
                    ..Default::default()
                })
            })
            .collect();
        if requests.is_empty() {
            requests.push(WriteObjectRequest {
                write_offset: self.persisted_size,
                ..Default::default()
            });
        }
        requests[0].first_message = Some(write_object_request::FirstMessage::UploadId(self.upload_id.clone()));
        if finish {
            if let Some(last) = requests.last_mut() {
                last.finish_write = true;
                last.object_checksums = self.crc32c.map(|crc| ObjectChecksums {
                    crc32c: Some(crc),
                    md5_hash: vec![],
                });
            }
        }
        requests
    }
}

/// An upload session identified by its upload id.
///
/// Bytes handed to [`ResumableWrite::write`] are buffered until the service
/// reports them persisted, so a broken stream can be replayed from the
/// persisted size.
#[derive(Debug)]
pub struct ResumableWrite {
    client: StorageClient,
    state: UploadState,
    setting: RetrySetting,
}

impl ResumableWrite {
    /// Starts a new upload session.
    pub async fn start(
        client: StorageClient,
        req: StartResumableWriteRequest,
        cancel: Option<CancellationToken>,
    ) -> Result<Self, Status> {
        let upload_id = client.start_resumable_write(req, cancel, None).await?.into_inner().upload_id;
        tracing::debug!("started resumable write {upload_id}");
        Ok(Self {
            client,
            state: UploadState::new(upload_id, true),
            setting: default_resume_setting(),
        })
    }

    /// Attaches to an existing session, typically after a process restart.
    /// Writing continues at the persisted size the service reports.
    pub async fn resume(
        client: StorageClient,
        upload_id: impl Into<String>,
        cancel: Option<CancellationToken>,
    ) -> Result<Self, Status> {
        let mut upload = Self {
            client,
            state: UploadState::new(upload_id.into(), false),
            setting: default_resume_setting(),
        };
        upload.query(cancel).await?;
        Ok(upload)
    }

    pub fn with_retry_setting(mut self, setting: RetrySetting) -> Self {
        self.setting = setting;
        self
    }

    pub fn upload_id(&self) -> &str {
        &self.state.upload_id
    }

    pub fn persisted_size(&self) -> i64 {
        self.state.persisted_size
    }

    /// The finalized object, once the service reported it.
    pub fn object(&self) -> Option<&Object> {
        self.state.object.as_ref()
    }

    /// Sends `data` after everything written so far and returns the persisted size.
    pub async fn write(&mut self, data: &[u8], cancel: Option<CancellationToken>) -> Result<i64, Status> {
        if self.state.object.is_some() {
            return Err(Status::failed_precondition("the upload is already finalized"));
        }
        self.state.append(data);
        self.flush(false, cancel).await?;
        Ok(self.state.persisted_size)
    }

    /// Sends the remaining bytes, finalizes the object and returns it.
    pub async fn finish(&mut self, cancel: Option<CancellationToken>) -> Result<Object, Status> {
        if let Some(object) = &self.state.object {
            return Ok(object.clone());
        }
        self.flush(true, cancel).await?;
        self.state
            .object
            .clone()
            .ok_or_else(|| Status::internal("the service did not finalize the upload"))
    }

    /// Abandons the upload. Later writes to the same upload id fail.
    pub async fn cancel(self, cancel: Option<CancellationToken>) -> Result<(), Status> {
        let req = CancelResumableWriteRequest {
            upload_id: self.state.upload_id,
        };
        self.client.cancel_resumable_write(req, cancel, None).await.map(|_| ())
    }

    /// Asks the service how far the upload got and drops what it persisted from the buffer.
    pub async fn query(&mut self, cancel: Option<CancellationToken>) -> Result<i64, Status> {
        let req = QueryWriteStatusRequest {
            upload_id: self.state.upload_id.clone(),
            common_object_request_params: None,
        };
        let status = self
            .client
            .query_write_status(req, cancel, None)
            .await?
            .into_inner()
            .write_status
            .ok_or_else(|| Status::internal("query write status returned no status"))?;
        self.state.apply(status.into())?;
        Ok(self.state.persisted_size)
    }

    async fn flush(&mut self, finish: bool, cancel: Option<CancellationToken>) -> Result<(), Status> {
        let mut strategy = self.setting.strategy();
        loop {
            if self.state.object.is_some() || (!finish && self.state.pending.is_empty()) {
                return Ok(());
            }
            let mut requests = self.state.requests(finish).into_iter();
            let first = requests
                .next()
                .ok_or_else(|| Status::internal("no write request was built"))?;
            let result = self
                .client
                .write_object(first, tokio_stream::iter(requests), cancel.clone())
                .await;
            let status = match result {
                Ok(response) => match response.into_inner().write_status {
                    Some(status) => {
                        self.state.apply(status.into())?;
                        if finish && self.state.object.is_none() {
                            return Err(Status::internal("the service did not finalize the upload"));
                        }
                        return Ok(());
                    }
                    None => return Err(Status::internal("write object returned no status")),
                },
                Err(status) => status,
            };
            if !self.setting.should_retry(&status) {
                return Err(status);
            }
            match strategy.next() {
                None => return Err(status),
                Some(duration) => {
                    tracing::debug!(
                        "resumable write {} interrupted at {}: {:?}, retrying after {:?}",
                        self.state.upload_id,
                        self.state.persisted_size,
                        status.code(),
                        duration
                    );
                    tokio::time::sleep(duration).await
                }
            }
            self.query(cancel.clone()).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use google_cloud_googleapis::storage::v2::{write_object_request, Object};

    use super::{UploadState, WriteStatus, MAX_WRITE_CHUNK_BYTES};

    fn state(pending: &[u8], persisted_size: i64) -> UploadState {
        let mut state = UploadState::new("projects/_/buckets/b/uploads/u".to_string(), true);
        state.persisted_size = persisted_size;
        state.append(pending);
        state
    }

    #[test]
    fn test_requests_split_into_chunks() {
        let data = vec![7u8; MAX_WRITE_CHUNK_BYTES * 2 + 10];
        let requests = state(&data, 100).requests(true);
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[0].first_message,
            Some(write_object_request::FirstMessage::UploadId(
                "projects/_/buckets/b/uploads/u".to_string()
            ))
        );
        assert!(requests[1].first_message.is_none());
        assert_eq!(requests[0].write_offset, 100);
        assert_eq!(requests[1].write_offset, 100 + MAX_WRITE_CHUNK_BYTES as i64);
        assert_eq!(requests[2].write_offset, 100 + 2 * MAX_WRITE_CHUNK_BYTES as i64);
        assert!(!requests[1].finish_write);
        assert!(requests[2].finish_write);
        assert_eq!(
            requests[2].object_checksums.as_ref().and_then(|c| c.crc32c),
            Some(crc32c::crc32c(&data))
        );
        match &requests[2].data {
            Some(write_object_request::Data::ChecksummedData(chunk)) => {
                assert_eq!(chunk.content.len(), 10);
                assert_eq!(chunk.crc32c, Some(crc32c::crc32c(&chunk.content)));
            }
            other => panic!("unexpected data {other:?}"),
        }
    }

    #[test]
    fn test_finish_without_pending_bytes() {
        let requests = state(&[], 42).requests(true);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].write_offset, 42);
        assert!(requests[0].finish_write);
        assert!(requests[0].data.is_none());
    }

    #[test]
    fn test_persisted_size_is_monotonic() {
        let mut state = state(b"0123456789", 0);
        state.apply(WriteStatus::PersistedSize(4)).unwrap();
        assert_eq!(state.persisted_size, 4);
        assert_eq!(&state.pending[..], b"456789");

        let err = state.apply(WriteStatus::PersistedSize(3)).unwrap_err();
        assert_eq!(err.code(), tonic::Code::DataLoss);

        let err = state.apply(WriteStatus::PersistedSize(11)).unwrap_err();
        assert_eq!(err.code(), tonic::Code::DataLoss);

        state
            .apply(WriteStatus::Resource(Object {
                size: 10,
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(state.persisted_size, 10);
        assert!(state.object.is_some());
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_resumed_session_accepts_unknown_prefix() {
        let mut state = UploadState::new("u".to_string(), false);
        state.apply(WriteStatus::PersistedSize(1024)).unwrap();
        assert_eq!(state.persisted_size, 1024);
        state.append(b"tail");
        let requests = state.requests(true);
        assert_eq!(requests[0].write_offset, 1024);
        assert!(requests[0].object_checksums.is_none());
    }
}
