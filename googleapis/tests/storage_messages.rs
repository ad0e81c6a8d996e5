use std::collections::HashMap;

use prost::Message;

use gcloud_googleapis::r#type::Date;
use gcloud_googleapis::storage::v2::bucket::lifecycle::rule::{Action, Condition};
use gcloud_googleapis::storage::v2::bucket::lifecycle::Rule;
use gcloud_googleapis::storage::v2::bucket::Lifecycle;
use gcloud_googleapis::storage::v2::object::retention::Mode;
use gcloud_googleapis::storage::v2::object::Retention;
use gcloud_googleapis::storage::v2::service_constants::Values;
use gcloud_googleapis::storage::v2::write_object_request::{Data, FirstMessage};
use gcloud_googleapis::storage::v2::{
    Bucket, CancelResumableWriteResponse, ChecksummedData, GetObjectRequest, Object, QueryWriteStatusResponse,
    WriteObjectRequest,
};

#[test]
fn test_get_object_request_round_trip() {
    let request = GetObjectRequest {
        bucket: "projects/_/buckets/my-bucket".to_string(),
        object: "my-object".to_string(),
        ..Default::default()
    };
    let encoded = request.encode_to_vec();
    let decoded = GetObjectRequest::decode(encoded.as_slice()).unwrap();
    assert_eq!(decoded.bucket, "projects/_/buckets/my-bucket");
    assert_eq!(decoded.object, "my-object");
    assert_eq!(decoded, request);
}

#[test]
fn test_optional_presence() {
    let request = GetObjectRequest::default();
    assert!(request.if_generation_match.is_none());
    assert!(request.soft_deleted.is_none());
    assert!(request.read_mask.is_none());
    assert!(request.encode_to_vec().is_empty());

    // zero is still present for proto3 optional fields
    let mut request = GetObjectRequest {
        if_generation_match: Some(0),
        ..Default::default()
    };
    let decoded = GetObjectRequest::decode(request.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded.if_generation_match, Some(0));

    request.if_generation_match = None;
    assert_eq!(request, GetObjectRequest::default());
    assert!(request.encode_to_vec().is_empty());
}

#[test]
fn test_set_twice_equals_set_once() {
    let mut once = Object::default();
    once.name = "a.txt".to_string();
    once.event_based_hold = Some(true);

    let mut twice = Object::default();
    twice.name = "a.txt".to_string();
    twice.name = "a.txt".to_string();
    twice.event_based_hold = Some(true);
    twice.event_based_hold = Some(true);

    assert_eq!(once, twice);
    assert_eq!(once.encode_to_vec(), twice.encode_to_vec());
}

#[test]
fn test_oneof_presence() {
    let request = WriteObjectRequest::default();
    assert!(request.first_message.is_none());
    assert!(request.data.is_none());

    let request = WriteObjectRequest {
        first_message: Some(FirstMessage::UploadId("upload-1".to_string())),
        write_offset: 262144,
        data: Some(Data::ChecksummedData(ChecksummedData {
            content: b"hello".to_vec(),
            crc32c: Some(0x9a71bb4c),
        })),
        finish_write: true,
        ..Default::default()
    };
    let decoded = WriteObjectRequest::decode(request.encode_to_vec().as_slice()).unwrap();
    match decoded.first_message {
        Some(FirstMessage::UploadId(ref id)) => assert_eq!(id, "upload-1"),
        ref other => panic!("unexpected first message {other:?}"),
    }
    assert_eq!(decoded, request);

    // an unset oneof decodes as absent even when other fields are set
    let status = QueryWriteStatusResponse::decode(&[][..]).unwrap();
    assert!(status.write_status.is_none());
}

#[test]
fn test_bucket_with_nested_messages() {
    let mut labels = HashMap::new();
    labels.insert("env".to_string(), "test".to_string());
    let bucket = Bucket {
        name: "projects/_/buckets/my-bucket".to_string(),
        location: "US".to_string(),
        labels,
        lifecycle: Some(Lifecycle {
            rule: vec![Rule {
                action: Some(Action {
                    r#type: "Delete".to_string(),
                    storage_class: "".to_string(),
                }),
                condition: Some(Condition {
                    age_days: Some(30),
                    created_before: Some(Date {
                        year: 2024,
                        month: 1,
                        day: 2,
                    }),
                    matches_prefix: vec!["logs/".to_string()],
                    ..Default::default()
                }),
            }],
        }),
        ..Default::default()
    };
    let decoded = Bucket::decode(bucket.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, bucket);
    assert_eq!(decoded.labels.get("env").map(String::as_str), Some("test"));
}

#[test]
fn test_unknown_fields_are_skipped() {
    let request = GetObjectRequest {
        bucket: "projects/_/buckets/my-bucket".to_string(),
        object: "my-object".to_string(),
        generation: 3,
        ..Default::default()
    };
    let decoded = CancelResumableWriteResponse::decode(request.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, CancelResumableWriteResponse::default());
}

#[test]
fn test_enum_names() {
    assert_eq!(Mode::Locked.as_str_name(), "LOCKED");
    assert_eq!(Mode::from_str_name("UNLOCKED"), Some(Mode::Unlocked));
    assert_eq!(Mode::from_str_name("unlocked"), None);

    let retention = Retention {
        mode: Mode::Locked as i32,
        retain_until_time: None,
    };
    assert_eq!(retention.mode(), Mode::Locked);

    assert_eq!(Values::MaxReadChunkBytes as i32, 2 * 1024 * 1024);
    assert_eq!(Values::from_str_name("MAX_OBJECT_SIZE_MB"), Some(Values::MaxObjectSizeMb));
}
