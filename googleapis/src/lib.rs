#[path = "google.rpc.rs"]
pub mod rpc;

#[path = ""]
pub mod iam {
    #[path = "google.iam.v1.rs"]
    pub mod v1;
}

#[path = "google.longrunning.rs"]
pub mod longrunning;

#[path = "google.r#type.rs"]
pub mod r#type;

#[path = ""]
pub mod storage {
    #[cfg(feature = "storage")]
    #[path = "google.storage.v2.rs"]
    pub mod v2;

    #[cfg(feature = "storage-control")]
    #[path = ""]
    pub mod control {
        #[path = "google.storage.control.v2.rs"]
        pub mod v2;
    }
}
