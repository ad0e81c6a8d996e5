#![allow(clippy::result_large_err)]
//! # gcloud-storage-grpc
//!
//! Google Cloud Storage client library over gRPC.
//!
//! * [About Cloud Storage](https://cloud.google.com/storage/)
//! * [gRPC API](https://cloud.google.com/storage/docs/reference/rpc)
//!
//! The crate covers two services sharing one connection pool:
//!
//! * `google.storage.v2.Storage` for buckets, objects, notifications and HMAC keys.
//! * `google.storage.control.v2.StorageControl` for folders, managed folders,
//!   Anywhere Caches and Storage Intelligence configuration.
//!
//! ## Quick Start
//!
//! ### Authentication
//!
//! `with_auth()` reads the credentials from the file named by
//! `GOOGLE_APPLICATION_CREDENTIALS`, from `GOOGLE_APPLICATION_CREDENTIALS_JSON`,
//! or from the metadata server.
//!
//! ```
//! use gcloud_storage_grpc::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config).await.unwrap();
//! }
//! ```
//!
//! ### Anonymous Access
//!
//! Public buckets can be read without credentials.
//!
//! ```
//! use gcloud_storage_grpc::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let config = ClientConfig::default().anonymous();
//!     let client = Client::new(config).await.unwrap();
//! }
//! ```
//!
//! ### Emulator
//!
//! When `STORAGE_EMULATOR_HOST` is set the client connects to it in plaintext and sends no credentials.
//!
//! ### Usage
//!
//! ```
//! use gcloud_storage_grpc::client::{Client, ClientConfig};
//! use google_cloud_googleapis::storage::v2::{ListObjectsRequest, ReadObjectRequest};
//! use google_cloud_googleapis::storage::control::v2::CreateFolderRequest;
//!
//! async fn run(config: ClientConfig) -> Result<(), tonic::Status> {
//!     let client = Client::new(config).await.unwrap();
//!     let bucket = client.bucket_name("my-bucket");
//!
//!     // Lists every object, following page tokens.
//!     let objects = client.storage().list_objects(ListObjectsRequest {
//!         parent: bucket.clone(),
//!         ..Default::default()
//!     }, None, None).await?;
//!
//!     // Downloads an object verifying its checksums.
//!     let downloaded = client.storage().download_object(ReadObjectRequest {
//!         bucket: bucket.clone(),
//!         object: "file.png".to_string(),
//!         ..Default::default()
//!     }, None, None).await?;
//!
//!     // Creates a folder in a bucket with hierarchical namespace enabled.
//!     let folder = client.control().create_folder(CreateFolderRequest {
//!         parent: bucket,
//!         folder_id: "logs/".to_string(),
//!         ..Default::default()
//!     }, None, None).await?;
//!     Ok(())
//! }
//! ```

pub mod apiv2;
pub mod client;
pub mod resource;
pub mod resumable;
pub mod routing;
pub mod token_source;
