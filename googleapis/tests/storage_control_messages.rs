use prost::Message;

use gcloud_googleapis::storage::control::v2::intelligence_config::filter::{
    CloudStorageBuckets, CloudStorageBucketsOneOf, CloudStorageLocations, CloudStorageLocationsOneOf,
};
use gcloud_googleapis::storage::control::v2::intelligence_config::{EditionConfig, Filter, TrialConfig};
use gcloud_googleapis::storage::control::v2::{
    AnywhereCache, Folder, IntelligenceConfig, ManagedFolder, PendingRenameInfo, UpdateAnywhereCacheRequest,
};

fn locations(values: &[&str]) -> CloudStorageLocations {
    CloudStorageLocations {
        locations: values.iter().map(|v| v.to_string()).collect(),
    }
}

fn buckets(values: &[&str]) -> CloudStorageBuckets {
    CloudStorageBuckets {
        bucket_id_regexes: values.iter().map(|v| v.to_string()).collect(),
    }
}

#[test]
fn test_intelligence_config_filter_round_trip() {
    let config = IntelligenceConfig {
        name: "projects/p/locations/global/intelligenceConfig".to_string(),
        edition_config: EditionConfig::Standard as i32,
        filter: Some(Filter {
            cloud_storage_locations: Some(CloudStorageLocationsOneOf::IncludedCloudStorageLocations(locations(&[
                "us-east1", "us-west1",
            ]))),
            cloud_storage_buckets: Some(CloudStorageBucketsOneOf::ExcludedCloudStorageBuckets(buckets(&[
                "^sample_.*",
            ]))),
        }),
        trial_config: Some(TrialConfig {
            expire_time: Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 0,
            }),
        }),
        ..Default::default()
    };
    let decoded = IntelligenceConfig::decode(config.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, config);
    assert_eq!(decoded.edition_config(), EditionConfig::Standard);

    let filter = decoded.filter.unwrap();
    match filter.cloud_storage_locations {
        Some(CloudStorageLocationsOneOf::IncludedCloudStorageLocations(v)) => {
            assert_eq!(v.locations, vec!["us-east1", "us-west1"])
        }
        other => panic!("unexpected locations {other:?}"),
    }
    match filter.cloud_storage_buckets {
        Some(CloudStorageBucketsOneOf::ExcludedCloudStorageBuckets(v)) => {
            assert_eq!(v.bucket_id_regexes, vec!["^sample_.*"])
        }
        other => panic!("unexpected buckets {other:?}"),
    }
}

#[test]
fn test_filter_oneof_tags() {
    let included = Filter {
        cloud_storage_locations: Some(CloudStorageLocationsOneOf::IncludedCloudStorageLocations(locations(&[
            "us-east1",
        ]))),
        cloud_storage_buckets: None,
    };
    let mut expected = vec![0x0a, 10, 0x0a, 8];
    expected.extend_from_slice(b"us-east1");
    assert_eq!(included.encode_to_vec(), expected);

    let excluded = Filter {
        cloud_storage_locations: Some(CloudStorageLocationsOneOf::ExcludedCloudStorageLocations(locations(&[
            "us-east1",
        ]))),
        cloud_storage_buckets: Some(CloudStorageBucketsOneOf::IncludedCloudStorageBuckets(buckets(&[]))),
    };
    let encoded = excluded.encode_to_vec();
    assert_eq!(encoded[0], 0x12);
    // an empty message in a oneof is still present
    assert_eq!(&encoded[encoded.len() - 2..], &[0x1a, 0]);
    assert_eq!(Filter::decode(encoded.as_slice()).unwrap(), excluded);
}

#[test]
fn test_control_presence() {
    let filter = Filter::default();
    assert!(filter.cloud_storage_locations.is_none());
    assert!(filter.cloud_storage_buckets.is_none());
    assert!(filter.encode_to_vec().is_empty());

    let mut folder = Folder {
        name: "projects/_/buckets/b/folders/a/".to_string(),
        pending_rename_info: Some(PendingRenameInfo {
            operation: "projects/_/buckets/b/operations/op".to_string(),
        }),
        ..Default::default()
    };
    let decoded = Folder::decode(folder.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, folder);
    assert_eq!(
        decoded.pending_rename_info.map(|p| p.operation).as_deref(),
        Some("projects/_/buckets/b/operations/op")
    );

    folder.pending_rename_info = None;
    let decoded = Folder::decode(folder.encode_to_vec().as_slice()).unwrap();
    assert!(decoded.pending_rename_info.is_none());

    let managed = ManagedFolder::default();
    assert_eq!(ManagedFolder::decode(&[][..]).unwrap(), managed);
}

#[test]
fn test_anywhere_cache_round_trip() {
    let cache = AnywhereCache {
        name: "projects/_/buckets/b/anywhereCaches/us-east1-b".to_string(),
        zone: "us-east1-b".to_string(),
        ttl: Some(prost_types::Duration {
            seconds: 86_400,
            nanos: 0,
        }),
        admission_policy: "admit-on-first-miss".to_string(),
        state: "running".to_string(),
        pending_update: true,
        ..Default::default()
    };
    let decoded = AnywhereCache::decode(cache.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, cache);

    let request = UpdateAnywhereCacheRequest {
        anywhere_cache: Some(cache),
        update_mask: Some(prost_types::FieldMask {
            paths: vec!["ttl".to_string()],
        }),
        request_id: "req-1".to_string(),
    };
    let decoded = UpdateAnywhereCacheRequest::decode(request.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded, request);
}
